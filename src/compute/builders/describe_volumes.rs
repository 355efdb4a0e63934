// EC2 Rust Library for Amazon EC2 Compatible Compute APIs
// Copyright 2025 The ec2 crate authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::compute::error::ValidationErr;
use crate::compute::multimap_ext::{Multimap, MultimapExt};
use crate::compute::response::DescribeVolumesResponse;
use crate::compute::types::{Ec2Api, Filter, Paginated, ToEc2Request, Validate};
use crate::compute::utils::{DisplayFields, check_exclusive, check_range};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Argument builder for the [`DescribeVolumes`](https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DescribeVolumes.html) EC2 API operation.
///
/// Describes the specified EBS volumes, or all of them. Results can be paginated with
/// `max_results` and `next_token`, see [`Paginated`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeVolumes {
    filters: Option<Vec<Filter>>,
    volume_ids: Option<Vec<String>>,
    dry_run: Option<bool>,
    max_results: Option<i32>,
    next_token: Option<String>,
}

impl DescribeVolumes {
    list_accessors!(
        /// Filters such as `attachment.instance-id`, `size`, `status` or `tag:<key>`.
        filters, set_filters, with_filters: Filter
    );
    list_accessors!(volume_ids, set_volume_ids, with_volume_ids: String);
    copy_accessors!(
        /// Checks permissions without describing anything.
        dry_run, set_dry_run, with_dry_run: bool
    );
    copy_accessors!(
        /// Page size, between 5 and 500. Cannot be combined with volume ids.
        max_results, set_max_results, with_max_results: i32
    );
    value_accessors!(
        /// Token of a previous, paginated response.
        next_token, set_next_token, with_next_token: String
    );
}

impl fmt::Display for DescribeVolumes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .list("Filters", &self.filters)
            .list("VolumeIds", &self.volume_ids)
            .field("DryRun", &self.dry_run)
            .field("MaxResults", &self.max_results)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

impl ToEc2Request for DescribeVolumes {
    const ACTION: &'static str = "DescribeVolumes";

    fn to_query_params(&self, params: &mut Multimap) {
        params.add_list("Filter", &self.filters);
        params.add_list("VolumeId", &self.volume_ids);
        params.add_value("DryRun", &self.dry_run);
        params.add_value("MaxResults", &self.max_results);
        params.add_value("NextToken", &self.next_token);
    }
}

impl Ec2Api for DescribeVolumes {
    type Ec2Response = DescribeVolumesResponse;
}

impl Paginated for DescribeVolumes {
    fn set_page_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

impl Validate for DescribeVolumes {
    fn validate(&self) -> Result<(), ValidationErr> {
        check_range("MaxResults", self.max_results.map(i64::from), 5, 500)?;
        check_exclusive(
            "VolumeId",
            self.volume_ids.as_ref().is_some_and(|v| !v.is_empty()),
            "MaxResults",
            self.max_results.is_some(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::types::DryRunSupported;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn request(ids: &[String], max_results: Option<i32>) -> DescribeVolumes {
        let mut request = DescribeVolumes::default().with_volume_ids(ids.iter().cloned());
        request.set_max_results(max_results);
        request
    }

    #[test]
    fn test_default_has_no_fields() {
        let request = DescribeVolumes::default();
        assert_eq!(request.filters(), None);
        assert_eq!(request.volume_ids(), None);
        assert_eq!(request.dry_run(), None);
        assert_eq!(request.max_results(), None);
        assert_eq!(request.next_token(), None);
        assert_eq!(request.to_string(), "{}");
        assert!(request.to_ec2request().params().is_empty());
    }

    #[test]
    fn test_display_scenario() {
        let request = DescribeVolumes::default()
            .with_volume_ids(["vol-1", "vol-2"])
            .with_max_results(50)
            .with_dry_run(true);
        assert_eq!(
            request.to_string(),
            "{VolumeIds: [vol-1, vol-2], DryRun: true, MaxResults: 50}"
        );
    }

    #[test]
    fn test_to_ec2request() {
        let request = DescribeVolumes::default()
            .with_filters([Filter::new("status").with_values(["available", "in-use"])])
            .with_volume_ids(["vol-1"])
            .with_next_token("abc");
        let req = request.to_ec2request();
        assert_eq!(req.action(), "DescribeVolumes");
        assert_eq!(req.param("Filter.1.Name"), Some("status"));
        assert_eq!(req.param("Filter.1.Value.2"), Some("in-use"));
        assert_eq!(req.param("VolumeId.1"), Some("vol-1"));
        assert_eq!(req.param("NextToken"), Some("abc"));
        assert_eq!(req.param("DryRun"), None);
    }

    #[test]
    fn test_dry_run_request_overrides_false() {
        let request = DescribeVolumes::default().with_dry_run(false);
        let req = request.dry_run_request();
        assert_eq!(req.params().get_vec("DryRun"), Some(&vec!["true".to_string()]));
        assert_eq!(request.dry_run(), Some(false));
    }

    #[test]
    fn test_validate() {
        assert!(DescribeVolumes::default().validate().is_ok());
        assert!(DescribeVolumes::default().with_max_results(500).validate().is_ok());
        assert_eq!(
            DescribeVolumes::default().with_max_results(4).validate(),
            Err(ValidationErr::ValueOutOfRange {
                name: "MaxResults",
                value: 4,
                min: 5,
                max: 500,
            })
        );
        assert_eq!(
            DescribeVolumes::default()
                .with_volume_ids(["vol-1"])
                .with_max_results(10)
                .validate(),
            Err(ValidationErr::ConflictingParameters {
                first: "VolumeId",
                second: "MaxResults",
            })
        );
    }

    quickcheck! {
        fn prop_with_appends(a: Vec<String>, b: Vec<String>) -> bool {
            let chained = DescribeVolumes::default()
                .with_volume_ids(a.clone())
                .with_volume_ids(b.clone());
            let once = DescribeVolumes::default()
                .with_volume_ids(a.iter().chain(b.iter()).cloned());
            let expected: Vec<String> = a.into_iter().chain(b).collect();
            chained.volume_ids() == Some(&expected[..]) && chained == once
        }

        fn prop_set_round_trip(ids: Option<Vec<String>>, token: Option<String>) -> bool {
            let mut request = DescribeVolumes::default();
            request.set_volume_ids(ids.clone());
            request.set_next_token(token.clone());
            request.volume_ids() == ids.as_deref() && request.next_token() == token.as_ref()
        }

        fn prop_independent_builds_equal(ids: Vec<String>, max_results: Option<i32>) -> bool {
            let a = request(&ids, max_results);
            let b = request(&ids, max_results);
            a == b && hash_of(&a) == hash_of(&b)
        }

        fn prop_single_difference_not_equal(ids: Vec<String>, token: String) -> bool {
            let a = request(&ids, None);
            a != a.clone().with_next_token(token) && a != a.clone().with_dry_run(false)
        }

        fn prop_display_omits_absent(count: u8, max_results: Option<i32>) -> bool {
            let ids: Vec<String> = (0..count).map(|n| format!("vol-{n}")).collect();
            let text = request(&ids, max_results).to_string();
            text.contains("VolumeIds: [")
                && text.contains("MaxResults") == max_results.is_some()
                && !text.contains("Filters")
                && !text.contains("NextToken")
                && !text.contains("DryRun")
        }
    }
}

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
use crate::compute::response::DescribeInstancesResponse;
use crate::compute::types::{Ec2Api, Filter, Paginated, ToEc2Request, Validate};
use crate::compute::utils::{DisplayFields, check_exclusive, check_range};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Argument builder for the [`DescribeInstances`](https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DescribeInstances.html) EC2 API operation.
///
/// Describes instances, grouped by reservation. Filters such as `instance-state-name`
/// or `tag:<key>` narrow the result.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstances {
    filters: Option<Vec<Filter>>,
    instance_ids: Option<Vec<String>>,
    dry_run: Option<bool>,
    max_results: Option<i32>,
    next_token: Option<String>,
}

impl DescribeInstances {
    list_accessors!(filters, set_filters, with_filters: Filter);
    list_accessors!(instance_ids, set_instance_ids, with_instance_ids: String);
    copy_accessors!(dry_run, set_dry_run, with_dry_run: bool);
    copy_accessors!(
        /// Page size, between 5 and 1000. Cannot be combined with instance ids.
        max_results, set_max_results, with_max_results: i32
    );
    value_accessors!(next_token, set_next_token, with_next_token: String);
}

impl fmt::Display for DescribeInstances {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .list("Filters", &self.filters)
            .list("InstanceIds", &self.instance_ids)
            .field("DryRun", &self.dry_run)
            .field("MaxResults", &self.max_results)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

impl ToEc2Request for DescribeInstances {
    const ACTION: &'static str = "DescribeInstances";

    fn to_query_params(&self, params: &mut Multimap) {
        params.add_list("Filter", &self.filters);
        params.add_list("InstanceId", &self.instance_ids);
        params.add_value("DryRun", &self.dry_run);
        params.add_value("MaxResults", &self.max_results);
        params.add_value("NextToken", &self.next_token);
    }
}

impl Ec2Api for DescribeInstances {
    type Ec2Response = DescribeInstancesResponse;
}

impl Paginated for DescribeInstances {
    fn set_page_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

impl Validate for DescribeInstances {
    fn validate(&self) -> Result<(), ValidationErr> {
        check_range("MaxResults", self.max_results.map(i64::from), 5, 1000)?;
        check_exclusive(
            "InstanceId",
            self.instance_ids.as_ref().is_some_and(|v| !v.is_empty()),
            "MaxResults",
            self.max_results.is_some(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_ec2request() {
        let req = DescribeInstances::default()
            .with_instance_ids(["i-1", "i-2"])
            .with_filters([
                Filter::new("instance-state-name").with_values(["running", "stopped"]),
                Filter::new("tag:env").with_values(["prod"]),
            ])
            .to_ec2request();
        assert_eq!(req.action(), "DescribeInstances");
        assert_eq!(req.param("InstanceId.2"), Some("i-2"));
        assert_eq!(req.param("Filter.1.Value.2"), Some("stopped"));
        assert_eq!(req.param("Filter.2.Name"), Some("tag:env"));
    }

    #[test]
    fn test_validate_ids_with_page_size() {
        let request = DescribeInstances::default().with_max_results(5);
        assert!(request.validate().is_ok());
        assert_eq!(
            request.with_instance_ids(["i-1"]).validate(),
            Err(ValidationErr::ConflictingParameters {
                first: "InstanceId",
                second: "MaxResults",
            })
        );
    }

    #[test]
    fn test_empty_ids_do_not_conflict() {
        let mut request = DescribeInstances::default().with_max_results(10);
        request.set_instance_ids(Some(vec![]));
        assert!(request.validate().is_ok());
        assert_eq!(request.to_ec2request().param("InstanceId.1"), None);
    }
}

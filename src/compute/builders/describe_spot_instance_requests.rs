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
use crate::compute::types::{Filter, ToEc2Request, Validate};
use crate::compute::utils::{DisplayFields, check_range};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Argument builder for the [`DescribeSpotInstanceRequests`](https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DescribeSpotInstanceRequests.html) EC2 API operation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSpotInstanceRequests {
    filters: Option<Vec<Filter>>,
    spot_instance_request_ids: Option<Vec<String>>,
    dry_run: Option<bool>,
    max_results: Option<i32>,
    next_token: Option<String>,
}

impl DescribeSpotInstanceRequests {
    list_accessors!(filters, set_filters, with_filters: Filter);
    list_accessors!(spot_instance_request_ids, set_spot_instance_request_ids, with_spot_instance_request_ids: String);
    copy_accessors!(dry_run, set_dry_run, with_dry_run: bool);
    copy_accessors!(
        /// Page size, between 5 and 1000.
        max_results, set_max_results, with_max_results: i32
    );
    value_accessors!(next_token, set_next_token, with_next_token: String);
}

impl fmt::Display for DescribeSpotInstanceRequests {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .list("Filters", &self.filters)
            .list("SpotInstanceRequestIds", &self.spot_instance_request_ids)
            .field("DryRun", &self.dry_run)
            .field("MaxResults", &self.max_results)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

impl ToEc2Request for DescribeSpotInstanceRequests {
    const ACTION: &'static str = "DescribeSpotInstanceRequests";

    fn to_query_params(&self, params: &mut Multimap) {
        params.add_list("Filter", &self.filters);
        params.add_list("SpotInstanceRequestId", &self.spot_instance_request_ids);
        params.add_value("DryRun", &self.dry_run);
        params.add_value("MaxResults", &self.max_results);
        params.add_value("NextToken", &self.next_token);
    }
}

impl Validate for DescribeSpotInstanceRequests {
    fn validate(&self) -> Result<(), ValidationErr> {
        check_range("MaxResults", self.max_results.map(i64::from), 5, 1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_ec2request() {
        let req = DescribeSpotInstanceRequests::default()
            .with_spot_instance_request_ids(["sir-1", "sir-2"])
            .with_filters([Filter::new("state").with_values(["open"])])
            .with_max_results(1000)
            .to_ec2request();
        assert_eq!(req.param("SpotInstanceRequestId.2"), Some("sir-2"));
        assert_eq!(req.param("Filter.1.Name"), Some("state"));
        assert_eq!(req.param("MaxResults"), Some("1000"));
    }
}

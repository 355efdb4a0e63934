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
use crate::compute::utils::{DisplayFields, check_exclusive, check_range};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Argument builder for the [`DescribeNetworkInterfaces`](https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DescribeNetworkInterfaces.html) EC2 API operation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeNetworkInterfaces {
    filters: Option<Vec<Filter>>,
    network_interface_ids: Option<Vec<String>>,
    dry_run: Option<bool>,
    max_results: Option<i32>,
    next_token: Option<String>,
}

impl DescribeNetworkInterfaces {
    list_accessors!(filters, set_filters, with_filters: Filter);
    list_accessors!(network_interface_ids, set_network_interface_ids, with_network_interface_ids: String);
    copy_accessors!(dry_run, set_dry_run, with_dry_run: bool);
    copy_accessors!(
        /// Page size, between 5 and 1000. Cannot be combined with network interface ids.
        max_results, set_max_results, with_max_results: i32
    );
    value_accessors!(next_token, set_next_token, with_next_token: String);
}

impl fmt::Display for DescribeNetworkInterfaces {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .list("Filters", &self.filters)
            .list("NetworkInterfaceIds", &self.network_interface_ids)
            .field("DryRun", &self.dry_run)
            .field("MaxResults", &self.max_results)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

impl ToEc2Request for DescribeNetworkInterfaces {
    const ACTION: &'static str = "DescribeNetworkInterfaces";

    fn to_query_params(&self, params: &mut Multimap) {
        params.add_list("Filter", &self.filters);
        params.add_list("NetworkInterfaceId", &self.network_interface_ids);
        params.add_value("DryRun", &self.dry_run);
        params.add_value("MaxResults", &self.max_results);
        params.add_value("NextToken", &self.next_token);
    }
}

impl Validate for DescribeNetworkInterfaces {
    fn validate(&self) -> Result<(), ValidationErr> {
        check_range("MaxResults", self.max_results.map(i64::from), 5, 1000)?;
        check_exclusive(
            "NetworkInterfaceId",
            self.network_interface_ids.as_ref().is_some_and(|v| !v.is_empty()),
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
        let req = DescribeNetworkInterfaces::default()
            .with_network_interface_ids(["eni-1"])
            .with_dry_run(true)
            .to_ec2request();
        assert_eq!(req.param("NetworkInterfaceId.1"), Some("eni-1"));
        assert_eq!(req.param("DryRun"), Some("true"));
    }

    #[test]
    fn test_validate() {
        let request = DescribeNetworkInterfaces::default().with_network_interface_ids(["eni-1"]);
        assert!(request.validate().is_ok());
        assert!(request.with_max_results(20).validate().is_err());
    }
}

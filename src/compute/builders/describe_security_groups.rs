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

/// Argument builder for the [`DescribeSecurityGroups`](https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DescribeSecurityGroups.html) EC2 API operation.
///
/// Security groups can be selected by id or, in a default VPC, by name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSecurityGroups {
    filters: Option<Vec<Filter>>,
    group_ids: Option<Vec<String>>,
    group_names: Option<Vec<String>>,
    dry_run: Option<bool>,
    max_results: Option<i32>,
    next_token: Option<String>,
}

impl DescribeSecurityGroups {
    list_accessors!(filters, set_filters, with_filters: Filter);
    list_accessors!(group_ids, set_group_ids, with_group_ids: String);
    list_accessors!(
        /// Only valid for the default VPC.
        group_names, set_group_names, with_group_names: String
    );
    copy_accessors!(dry_run, set_dry_run, with_dry_run: bool);
    copy_accessors!(
        /// Page size, between 5 and 1000.
        max_results, set_max_results, with_max_results: i32
    );
    value_accessors!(next_token, set_next_token, with_next_token: String);
}

impl fmt::Display for DescribeSecurityGroups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .list("Filters", &self.filters)
            .list("GroupIds", &self.group_ids)
            .list("GroupNames", &self.group_names)
            .field("DryRun", &self.dry_run)
            .field("MaxResults", &self.max_results)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

impl ToEc2Request for DescribeSecurityGroups {
    const ACTION: &'static str = "DescribeSecurityGroups";

    fn to_query_params(&self, params: &mut Multimap) {
        params.add_list("Filter", &self.filters);
        params.add_list("GroupId", &self.group_ids);
        params.add_list("GroupName", &self.group_names);
        params.add_value("DryRun", &self.dry_run);
        params.add_value("MaxResults", &self.max_results);
        params.add_value("NextToken", &self.next_token);
    }
}

impl Validate for DescribeSecurityGroups {
    fn validate(&self) -> Result<(), ValidationErr> {
        check_range("MaxResults", self.max_results.map(i64::from), 5, 1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_and_names() {
        let req = DescribeSecurityGroups::default()
            .with_group_ids(["sg-1"])
            .with_group_names(["default", "web"])
            .to_ec2request();
        assert_eq!(req.param("GroupId.1"), Some("sg-1"));
        assert_eq!(req.param("GroupName.1"), Some("default"));
        assert_eq!(req.param("GroupName.2"), Some("web"));
    }
}

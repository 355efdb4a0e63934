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

/// Argument builder for the [`DescribeRouteTables`](https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DescribeRouteTables.html) EC2 API operation.
///
/// Describes route tables, including their routes and subnet associations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeRouteTables {
    filters: Option<Vec<Filter>>,
    route_table_ids: Option<Vec<String>>,
    dry_run: Option<bool>,
    max_results: Option<i32>,
    next_token: Option<String>,
}

impl DescribeRouteTables {
    list_accessors!(
        /// Filters such as `vpc-id`, `association.main` or `route.gateway-id`.
        filters, set_filters, with_filters: Filter
    );
    list_accessors!(route_table_ids, set_route_table_ids, with_route_table_ids: String);
    copy_accessors!(dry_run, set_dry_run, with_dry_run: bool);
    copy_accessors!(
        /// Page size, between 5 and 100.
        max_results, set_max_results, with_max_results: i32
    );
    value_accessors!(next_token, set_next_token, with_next_token: String);
}

impl fmt::Display for DescribeRouteTables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .list("Filters", &self.filters)
            .list("RouteTableIds", &self.route_table_ids)
            .field("DryRun", &self.dry_run)
            .field("MaxResults", &self.max_results)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

impl ToEc2Request for DescribeRouteTables {
    const ACTION: &'static str = "DescribeRouteTables";

    fn to_query_params(&self, params: &mut Multimap) {
        params.add_list("Filter", &self.filters);
        params.add_list("RouteTableId", &self.route_table_ids);
        params.add_value("DryRun", &self.dry_run);
        params.add_value("MaxResults", &self.max_results);
        params.add_value("NextToken", &self.next_token);
    }
}

impl Validate for DescribeRouteTables {
    fn validate(&self) -> Result<(), ValidationErr> {
        check_range("MaxResults", self.max_results.map(i64::from), 5, 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let request = DescribeRouteTables::default()
            .with_route_table_ids(["rtb-1", "rtb-2"])
            .with_next_token("t1");
        assert_eq!(
            request.to_string(),
            "{RouteTableIds: [rtb-1, rtb-2], NextToken: t1}"
        );
    }

    #[test]
    fn test_validate_page_size() {
        assert!(DescribeRouteTables::default().with_max_results(4).validate().is_err());
        assert!(DescribeRouteTables::default().with_max_results(5).validate().is_ok());
    }
}

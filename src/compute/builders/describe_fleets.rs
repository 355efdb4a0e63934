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
use crate::compute::response::DescribeFleetsResponse;
use crate::compute::types::{Ec2Api, Filter, Paginated, ToEc2Request, Validate};
use crate::compute::utils::{DisplayFields, check_range};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Argument builder for the [`DescribeFleets`](https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DescribeFleets.html) EC2 API operation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeFleets {
    fleet_ids: Option<Vec<String>>,
    filters: Option<Vec<Filter>>,
    dry_run: Option<bool>,
    max_results: Option<i32>,
    next_token: Option<String>,
}

impl DescribeFleets {
    list_accessors!(fleet_ids, set_fleet_ids, with_fleet_ids: String);
    list_accessors!(
        /// Filters such as `activity-status`, `fleet-state` or `type`.
        filters, set_filters, with_filters: Filter
    );
    copy_accessors!(dry_run, set_dry_run, with_dry_run: bool);
    copy_accessors!(max_results, set_max_results, with_max_results: i32);
    value_accessors!(next_token, set_next_token, with_next_token: String);
}

impl fmt::Display for DescribeFleets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .list("FleetIds", &self.fleet_ids)
            .list("Filters", &self.filters)
            .field("DryRun", &self.dry_run)
            .field("MaxResults", &self.max_results)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

impl ToEc2Request for DescribeFleets {
    const ACTION: &'static str = "DescribeFleets";

    fn to_query_params(&self, params: &mut Multimap) {
        params.add_list("FleetId", &self.fleet_ids);
        params.add_list("Filter", &self.filters);
        params.add_value("DryRun", &self.dry_run);
        params.add_value("MaxResults", &self.max_results);
        params.add_value("NextToken", &self.next_token);
    }
}

impl Ec2Api for DescribeFleets {
    type Ec2Response = DescribeFleetsResponse;
}

impl Paginated for DescribeFleets {
    fn set_page_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

impl Validate for DescribeFleets {
    fn validate(&self) -> Result<(), ValidationErr> {
        check_range("MaxResults", self.max_results.map(i64::from), 1, 1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_ec2request() {
        let req = DescribeFleets::default()
            .with_fleet_ids(["fleet-1", "fleet-2"])
            .with_filters([Filter::new("type").with_values(["instant"])])
            .to_ec2request();
        assert_eq!(req.param("FleetId.1"), Some("fleet-1"));
        assert_eq!(req.param("FleetId.2"), Some("fleet-2"));
        assert_eq!(req.param("Filter.1.Name"), Some("type"));
    }

    #[test]
    fn test_validate() {
        assert!(DescribeFleets::default().with_max_results(1000).validate().is_ok());
        assert!(DescribeFleets::default().with_max_results(1001).validate().is_err());
    }
}

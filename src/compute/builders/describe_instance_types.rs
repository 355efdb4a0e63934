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
use crate::compute::response::DescribeInstanceTypesResponse;
use crate::compute::types::{
    Ec2Api, Filter, InstanceType, Paginated, ToEc2Request, Validate,
};
use crate::compute::utils::{DisplayFields, check_range};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Argument builder for the [`DescribeInstanceTypes`](https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DescribeInstanceTypes.html) EC2 API operation.
///
/// Describes the details of instance types offered in a region.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstanceTypes {
    instance_types: Option<Vec<InstanceType>>,
    filters: Option<Vec<Filter>>,
    dry_run: Option<bool>,
    max_results: Option<i32>,
    next_token: Option<String>,
}

impl DescribeInstanceTypes {
    list_accessors!(
        /// Instance types to describe, e.g. `t3.micro`.
        instance_types, set_instance_types, with_instance_types: InstanceType
    );
    list_accessors!(filters, set_filters, with_filters: Filter);
    copy_accessors!(dry_run, set_dry_run, with_dry_run: bool);
    copy_accessors!(
        /// Page size, between 5 and 100.
        max_results, set_max_results, with_max_results: i32
    );
    value_accessors!(next_token, set_next_token, with_next_token: String);
}

impl fmt::Display for DescribeInstanceTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .list("InstanceTypes", &self.instance_types)
            .list("Filters", &self.filters)
            .field("DryRun", &self.dry_run)
            .field("MaxResults", &self.max_results)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

impl ToEc2Request for DescribeInstanceTypes {
    const ACTION: &'static str = "DescribeInstanceTypes";

    fn to_query_params(&self, params: &mut Multimap) {
        params.add_list("InstanceType", &self.instance_types);
        params.add_list("Filter", &self.filters);
        params.add_value("DryRun", &self.dry_run);
        params.add_value("MaxResults", &self.max_results);
        params.add_value("NextToken", &self.next_token);
    }
}

impl Ec2Api for DescribeInstanceTypes {
    type Ec2Response = DescribeInstanceTypesResponse;
}

impl Paginated for DescribeInstanceTypes {
    fn set_page_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

impl Validate for DescribeInstanceTypes {
    fn validate(&self) -> Result<(), ValidationErr> {
        check_range("MaxResults", self.max_results.map(i64::from), 5, 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_types_query() {
        let req = DescribeInstanceTypes::default()
            .with_instance_types([InstanceType::T3Micro, InstanceType::from("x2gd.medium")])
            .to_ec2request();
        assert_eq!(req.param("InstanceType.1"), Some("t3.micro"));
        assert_eq!(req.param("InstanceType.2"), Some("x2gd.medium"));
    }

    #[test]
    fn test_validate_page_size() {
        assert!(DescribeInstanceTypes::default().with_max_results(100).validate().is_ok());
        assert!(DescribeInstanceTypes::default().with_max_results(101).validate().is_err());
    }
}

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

use crate::compute::types::ReservedInstancesOffering;
use crate::compute::utils::DisplayFields;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Response of [`DescribeReservedInstancesOfferings`](crate::compute::builders::DescribeReservedInstancesOfferings)
#[derive(Clone, Debug, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeReservedInstancesOfferingsResponse {
    reserved_instances_offerings: Option<Vec<ReservedInstancesOffering>>,
    next_token: Option<String>,
}

impl DescribeReservedInstancesOfferingsResponse {
    list_accessors!(
        reserved_instances_offerings,
        set_reserved_instances_offerings,
        with_reserved_instances_offerings: ReservedInstancesOffering
    );
    value_accessors!(next_token, set_next_token, with_next_token: String);
}

impl_has_next_token!(DescribeReservedInstancesOfferingsResponse);

impl fmt::Display for DescribeReservedInstancesOfferingsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .list(
                "ReservedInstancesOfferings",
                &self.reserved_instances_offerings,
            )
            .field("NextToken", &self.next_token)
            .finish()
    }
}

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

use crate::compute::types::CapacityReservation;
use crate::compute::utils::DisplayFields;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Response of [`DescribeCapacityReservations`](crate::compute::builders::DescribeCapacityReservations)
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCapacityReservationsResponse {
    next_token: Option<String>,
    capacity_reservations: Option<Vec<CapacityReservation>>,
}

impl DescribeCapacityReservationsResponse {
    value_accessors!(next_token, set_next_token, with_next_token: String);
    list_accessors!(
        capacity_reservations,
        set_capacity_reservations,
        with_capacity_reservations: CapacityReservation
    );
}

impl_has_next_token!(DescribeCapacityReservationsResponse);

impl fmt::Display for DescribeCapacityReservationsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("NextToken", &self.next_token)
            .list("CapacityReservations", &self.capacity_reservations)
            .finish()
    }
}

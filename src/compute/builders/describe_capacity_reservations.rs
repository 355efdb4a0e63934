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
use crate::compute::response::DescribeCapacityReservationsResponse;
use crate::compute::types::{Ec2Api, Filter, Paginated, ToEc2Request, Validate};
use crate::compute::utils::{DisplayFields, check_range};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Argument builder for the [`DescribeCapacityReservations`](https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DescribeCapacityReservations.html) EC2 API operation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCapacityReservations {
    capacity_reservation_ids: Option<Vec<String>>,
    next_token: Option<String>,
    max_results: Option<i32>,
    filters: Option<Vec<Filter>>,
    dry_run: Option<bool>,
}

impl DescribeCapacityReservations {
    list_accessors!(
        capacity_reservation_ids,
        set_capacity_reservation_ids,
        with_capacity_reservation_ids: String
    );
    value_accessors!(next_token, set_next_token, with_next_token: String);
    copy_accessors!(
        /// Page size, between 1 and 1000.
        max_results, set_max_results, with_max_results: i32
    );
    list_accessors!(
        /// Filters such as `instance-type`, `state`, `tenancy` or `end-date-type`.
        filters, set_filters, with_filters: Filter
    );
    copy_accessors!(dry_run, set_dry_run, with_dry_run: bool);
}

impl fmt::Display for DescribeCapacityReservations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .list("CapacityReservationIds", &self.capacity_reservation_ids)
            .field("NextToken", &self.next_token)
            .field("MaxResults", &self.max_results)
            .list("Filters", &self.filters)
            .field("DryRun", &self.dry_run)
            .finish()
    }
}

impl ToEc2Request for DescribeCapacityReservations {
    const ACTION: &'static str = "DescribeCapacityReservations";

    fn to_query_params(&self, params: &mut Multimap) {
        params.add_list("CapacityReservationId", &self.capacity_reservation_ids);
        params.add_value("NextToken", &self.next_token);
        params.add_value("MaxResults", &self.max_results);
        params.add_list("Filter", &self.filters);
        params.add_value("DryRun", &self.dry_run);
    }
}

impl Ec2Api for DescribeCapacityReservations {
    type Ec2Response = DescribeCapacityReservationsResponse;
}

impl Paginated for DescribeCapacityReservations {
    fn set_page_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

impl Validate for DescribeCapacityReservations {
    fn validate(&self) -> Result<(), ValidationErr> {
        check_range("MaxResults", self.max_results.map(i64::from), 1, 1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_ec2request() {
        let req = DescribeCapacityReservations::default()
            .with_capacity_reservation_ids(["cr-1", "cr-2"])
            .with_filters([Filter::new("state").with_values(["active"])])
            .with_max_results(1000)
            .to_ec2request();
        assert_eq!(req.param("CapacityReservationId.1"), Some("cr-1"));
        assert_eq!(req.param("CapacityReservationId.2"), Some("cr-2"));
        assert_eq!(req.param("Filter.1.Name"), Some("state"));
        assert_eq!(req.param("Filter.1.Value.1"), Some("active"));
        assert_eq!(req.param("MaxResults"), Some("1000"));
    }

    #[test]
    fn test_out_of_range_accepted_until_validated() {
        let request = DescribeCapacityReservations::default().with_max_results(0);
        assert_eq!(request.max_results(), Some(0));
        assert_eq!(request.to_ec2request().param("MaxResults"), Some("0"));
        assert!(request.validate().is_err());
        assert!(request.with_max_results(1).validate().is_ok());
    }

    #[test]
    fn test_set_empty_ids_differs_from_absent() {
        let mut request = DescribeCapacityReservations::default();
        request.set_capacity_reservation_ids(Some(vec![]));
        assert_eq!(request.capacity_reservation_ids(), Some(&[][..]));
        assert_eq!(request.to_string(), "{CapacityReservationIds: []}");
        assert_ne!(request, DescribeCapacityReservations::default());
    }
}

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

mod common;

use crate::common::TestContext;
use ec2::compute::builders::{
    DescribeCapacityReservations, DescribeFleets, DescribeInstanceTypes, DescribeInstances,
    DescribeVolumes,
};
use ec2::compute::response::{
    DescribeCapacityReservationsResponse, DescribeFleetsResponse, DescribeInstanceTypesResponse,
    DescribeInstancesResponse, DescribeVolumesResponse, HasNextToken,
};
use ec2::compute::types::{
    Filter, Instance, InstanceType, InstanceTypeInfo, Paginated, Reservation, ToEc2Request,
    Volume,
};

#[test]
fn next_page_forwards_token_verbatim() {
    let _ctx = TestContext::new_from_env();

    let token = "eyJ2IjoiMiIsImMiOiJ+Ly8vIn0=";
    let request = DescribeVolumes::default().with_max_results(100);
    let page = DescribeVolumesResponse::default()
        .with_volumes([Volume::default().with_volume_id("vol-1")])
        .with_next_token(token);

    let next = request.next_page(&page).unwrap();
    assert_eq!(next.next_token().map(String::as_str), Some(token));
    assert_eq!(next.to_ec2request().param("NextToken"), Some(token));
    assert_eq!(next.max_results(), request.max_results());
}

#[test]
fn last_page_has_no_next() {
    let _ctx = TestContext::new_from_env();

    let request = DescribeCapacityReservations::default().with_next_token("previous");
    let last = DescribeCapacityReservationsResponse::default();
    assert_eq!(HasNextToken::next_token(&last), None);
    assert!(request.next_page(&last).is_none());
}

#[test]
fn walk_pages() {
    let _ctx = TestContext::new_from_env();

    let pages = [
        DescribeFleetsResponse::default().with_next_token("p2"),
        DescribeFleetsResponse::default().with_next_token("p3"),
        DescribeFleetsResponse::default(),
    ];

    let mut request = DescribeFleets::default().with_max_results(10);
    let mut tokens = Vec::new();
    for page in &pages {
        match request.next_page(page) {
            Some(next) => {
                tokens.extend(next.next_token().cloned());
                request = next;
            }
            None => break,
        }
    }
    assert_eq!(tokens, ["p2", "p3"]);
}

#[test]
fn instance_listings_page_with_filters_kept() {
    let _ctx = TestContext::new_from_env();

    let request = DescribeInstances::default()
        .with_filters([Filter::new("instance-state-name").with_values(["running"])])
        .with_max_results(5);
    let page = DescribeInstancesResponse::default()
        .with_reservations([Reservation::default()
            .with_reservation_id("r-1")
            .with_instances([Instance::default().with_instance_id("i-1")])])
        .with_next_token("p2");

    let next = request.next_page(&page).unwrap();
    let req = next.to_ec2request();
    assert_eq!(req.param("NextToken"), Some("p2"));
    assert_eq!(req.param("Filter.1.Value.1"), Some("running"));
    assert!(next.next_page(&DescribeInstancesResponse::default()).is_none());

    let types = DescribeInstanceTypes::default().with_instance_types([InstanceType::T3Micro]);
    let type_page = DescribeInstanceTypesResponse::default()
        .with_instance_types([
            InstanceTypeInfo::default().with_instance_type(InstanceType::T3Micro)
        ])
        .with_next_token("t2");
    let next = types.next_page(&type_page).unwrap();
    assert_eq!(next.to_ec2request().param("NextToken"), Some("t2"));
    assert_eq!(next.instance_types(), types.instance_types());
}

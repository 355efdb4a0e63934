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
use ec2::compute::builders::CreateFlowLogs;
use ec2::compute::response::DescribeFleetsResponse;
use ec2::compute::types::{
    FleetData, FleetStateCode, FleetType, Tag, TagSpecification, TargetCapacitySpecification,
    TrafficType,
};

#[test]
fn request_round_trip_keeps_absent_and_empty() {
    let _ctx = TestContext::new_from_env();

    let mut request = CreateFlowLogs::default()
        .with_resource_ids(["subnet-1"])
        .with_traffic_type(TrafficType::Accept)
        .with_tag_specifications([TagSpecification::default().with_tags([Tag::new("k", "v")])]);
    request.set_log_format(Some(String::new()));

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["TrafficType"], "ACCEPT");
    assert_eq!(json["LogFormat"], "");
    assert!(json["LogGroupName"].is_null());

    let back: CreateFlowLogs = serde_json::from_value(json).unwrap();
    assert_eq!(back, request);
    assert_eq!(back.log_format().map(String::as_str), Some(""));
    assert_eq!(back.log_group_name(), None);
}

#[test]
fn response_from_json() {
    let _ctx = TestContext::new_from_env();

    let json = r#"{
        "NextToken": null,
        "Fleets": [{
            "FleetId": "fleet-1",
            "FleetState": "active",
            "Type": "maintain",
            "FulfilledCapacity": 4.0,
            "TargetCapacitySpecification": {"TotalTargetCapacity": 4, "DefaultTargetCapacityType": "spot"},
            "CreateTime": "2020-04-01T12:30:05Z",
            "Tags": []
        }]
    }"#;

    let response: DescribeFleetsResponse = serde_json::from_str(json).unwrap();
    let fleet: &FleetData = &response.fleets().unwrap()[0];
    assert_eq!(fleet.fleet_id().map(String::as_str), Some("fleet-1"));
    assert_eq!(fleet.fleet_state(), Some(&FleetStateCode::Active));
    assert_eq!(fleet.fleet_type(), Some(&FleetType::Maintain));
    assert_eq!(fleet.fulfilled_capacity(), Some(4.0));
    assert_eq!(
        fleet.target_capacity_specification(),
        Some(
            &TargetCapacitySpecification::default()
                .with_total_target_capacity(4)
                .with_default_target_capacity_type("spot")
        )
    );
    assert_eq!(fleet.tags(), Some(&[][..]));
    assert_eq!(fleet.errors(), None);
    assert!(fleet.create_time().is_some());
}

#[test]
fn unknown_enum_value_survives() {
    let _ctx = TestContext::new_from_env();

    let json = r#"{"FleetState": "hibernating"}"#;
    let fleet: FleetData = serde_json::from_str(json).unwrap();
    assert_eq!(
        fleet.fleet_state(),
        Some(&FleetStateCode::Unknown("hibernating".to_string()))
    );
    assert_eq!(
        serde_json::to_value(&fleet).unwrap()["FleetState"],
        "hibernating"
    );
}

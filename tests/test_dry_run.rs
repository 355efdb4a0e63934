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
use ec2::compute::builders::*;
use ec2::compute::types::{DryRunSupported, ToEc2Request};

fn assert_dry_run<T: ToEc2Request>(request: &T) {
    let req = request.dry_run_request();
    assert_eq!(req.action(), T::ACTION);
    assert_eq!(
        req.params().get_vec("DryRun"),
        Some(&vec!["true".to_string()]),
        "{}",
        T::ACTION
    );
}

#[test]
fn reserved_instances_offerings_dry_run() {
    let _ctx = TestContext::new_from_env();

    let request = DescribeReservedInstancesOfferings::default()
        .with_dry_run(false)
        .with_instance_type("c5.large")
        .with_offering_class("convertible");

    let req = request.dry_run_request();
    assert_eq!(req.param("DryRun"), Some("true"));
    assert_eq!(req.param("InstanceType"), Some("c5.large"));
    assert_eq!(req.param("OfferingClass"), Some("convertible"));

    // the model itself is left untouched
    assert_eq!(request.dry_run(), Some(false));
    assert_eq!(request.to_ec2request().param("DryRun"), Some("false"));
}

#[test]
fn every_request_supports_dry_run() {
    let _ctx = TestContext::new_from_env();

    assert_dry_run(&CreateCapacityReservation::default());
    assert_dry_run(&CreateFlowLogs::default().with_dry_run(false));
    assert_dry_run(&CreateVolume::default());
    assert_dry_run(&DescribeCapacityReservations::default());
    assert_dry_run(&DescribeFleets::default());
    assert_dry_run(&DescribeImages::default().with_dry_run(true));
    assert_dry_run(&DescribeInstanceTypes::default());
    assert_dry_run(&DescribeInstances::default());
    assert_dry_run(&DescribeNetworkInterfaces::default());
    assert_dry_run(&DescribeReservedInstancesOfferings::default());
    assert_dry_run(&DescribeRouteTables::default());
    assert_dry_run(&DescribeSecurityGroups::default());
    assert_dry_run(&DescribeSpotInstanceRequests::default());
    assert_dry_run(&DescribeVolumes::default().with_dry_run(false));
    assert_dry_run(&ModifyInstanceAttribute::default().with_instance_id("i-1"));
    assert_dry_run(&RunInstances::new("ami-1", 1, 1).with_dry_run(false));
}

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

use crate::common::{TestContext, hash_of};
use ec2::compute::builders::*;
use ec2::compute::response::*;
use ec2::compute::types::*;

macro_rules! assert_list_round_trip {
    ($($ty:ty: $get:ident, $set:ident, $with:ident => $label:literal, [$($value:expr),+ $(,)?], $shown:literal;)*) => {
        $(
            let absent = <$ty>::default();
            assert_eq!(absent.$get(), None, "{}", stringify!($ty));
            assert!(!absent.to_string().contains($label), "{}", stringify!($ty));

            let mut empty = <$ty>::default();
            empty.$set(Some(Vec::new()));
            assert_eq!(empty.$get(), Some(&[][..]), "{}", stringify!($ty));
            assert_eq!(empty.to_string(), concat!("{", $label, ": []}"), "{}", stringify!($ty));
            assert_ne!(empty, absent, "{}", stringify!($ty));
            empty.$set(None);
            assert_eq!(empty, absent, "{}", stringify!($ty));

            let values = vec![$($value),+];
            let filled = <$ty>::default().$with(values.clone());
            assert_eq!(filled.$get(), Some(values.as_slice()), "{}", stringify!($ty));
            assert_eq!(
                filled.to_string(),
                concat!("{", $label, ": ", $shown, "}"),
                "{}",
                stringify!($ty)
            );
        )*
    };
}

macro_rules! assert_empty_models {
    ($($ty:ty),* $(,)?) => {
        $(
            let model = <$ty>::default();
            assert_eq!(model.to_string(), "{}", "{}", stringify!($ty));
            assert_eq!(model, <$ty>::default(), "{}", stringify!($ty));
            assert_eq!(hash_of(&model), hash_of(&<$ty>::default()), "{}", stringify!($ty));
        )*
    };
}

#[test]
fn fresh_models_are_empty() {
    let _ctx = TestContext::new_from_env();

    assert_empty_models!(
        CreateCapacityReservation,
        CreateFlowLogs,
        CreateVolume,
        DescribeCapacityReservations,
        DescribeFleets,
        DescribeImages,
        DescribeInstanceTypes,
        DescribeInstances,
        DescribeNetworkInterfaces,
        DescribeReservedInstancesOfferings,
        DescribeRouteTables,
        DescribeSecurityGroups,
        DescribeSpotInstanceRequests,
        DescribeVolumes,
        ModifyInstanceAttribute,
        RunInstances,
    );

    assert_empty_models!(
        CreateCapacityReservationResponse,
        CreateFlowLogsResponse,
        DescribeCapacityReservationsResponse,
        DescribeFleetsResponse,
        DescribeImagesResponse,
        DescribeInstanceTypesResponse,
        DescribeInstancesResponse,
        DescribeReservedInstancesOfferingsResponse,
        DescribeVolumesResponse,
    );

    assert_empty_models!(
        AcceleratorDeviceInfo,
        AttributeBooleanValue,
        AttributeValue,
        BlobAttributeValue,
        BlockDeviceMapping,
        CapacityReservation,
        CapacityReservationSpecification,
        CapacityReservationTarget,
        ClassicLoadBalancer,
        ClassicLoadBalancersConfig,
        CpuOptions,
        CreditSpecificationRequest,
        DescribeFleetError,
        DescribeFleetsInstances,
        DiskInfo,
        EbsBlockDevice,
        EbsInfo,
        EbsInstanceBlockDevice,
        EbsInstanceBlockDeviceSpecification,
        ElasticGpuAssociation,
        ElasticGpuSpecification,
        ElasticInferenceAccelerator,
        ElasticInferenceAcceleratorAssociation,
        Filter,
        FleetData,
        FleetLaunchTemplateConfig,
        FleetLaunchTemplateOverrides,
        FleetLaunchTemplateSpecification,
        FpgaInfo,
        GpuInfo,
        GroupIdentifier,
        HibernationOptions,
        IamInstanceProfile,
        IamInstanceProfileSpecification,
        Image,
        InferenceAcceleratorInfo,
        Instance,
        InstanceBlockDeviceMapping,
        InstanceBlockDeviceMappingSpecification,
        InstanceMarketOptionsRequest,
        InstanceMetadataOptions,
        InstanceNetworkInterface,
        InstanceNetworkInterfaceSpecification,
        InstanceState,
        InstanceStorageInfo,
        InstanceTypeInfo,
        LaunchTemplateAndOverridesResponse,
        LaunchTemplateConfig,
        LaunchTemplateOverrides,
        LaunchTemplateSpecification,
        LicenseConfiguration,
        LoadBalancersConfig,
        MemoryInfo,
        Monitoring,
        NetworkInfo,
        OnDemandOptions,
        Placement,
        PlacementGroupInfo,
        PricingDetail,
        ProcessorInfo,
        ProductCode,
        RecurringCharge,
        Reservation,
        ReservedInstances,
        ReservedInstancesOffering,
        RunInstancesMonitoringEnabled,
        SpotFleetLaunchSpecification,
        SpotFleetRequestConfigData,
        SpotMarketOptions,
        SpotOptions,
        StateReason,
        Tag,
        TagSpecification,
        TargetCapacitySpecification,
        TargetGroup,
        TargetGroupsConfig,
        UnsuccessfulItem,
        UnsuccessfulItemError,
        VCpuInfo,
        Volume,
        VolumeAttachment,
    );
}

#[test]
fn fresh_request_marshals_to_action_only() {
    let _ctx = TestContext::new_from_env();

    let req = DescribeInstances::default().to_ec2request();
    assert!(req.params().is_empty());
    assert_eq!(
        req.to_query_string(),
        "Action=DescribeInstances&Version=2016-11-15"
    );
}

#[test]
fn empty_list_differs_from_absent_list() {
    let _ctx = TestContext::new_from_env();

    let absent = DescribeSecurityGroups::default();
    let mut empty = DescribeSecurityGroups::default();
    empty.set_group_ids(Some(Vec::new()));

    assert_ne!(absent, empty);
    assert_eq!(empty.group_ids(), Some(&[][..]));
    assert_eq!(empty.to_string(), "{GroupIds: []}");
    // nothing to flatten on the wire
    assert!(empty.to_ec2request().params().is_empty());
}

#[test]
fn request_lists_keep_absent_and_empty_apart() {
    let _ctx = TestContext::new_from_env();

    let tags = || TagSpecification::default().with_tags([Tag::new("team", "batch")]);

    assert_list_round_trip! {
        CreateCapacityReservation: tag_specifications, set_tag_specifications, with_tag_specifications
            => "TagSpecifications", [tags()], "[{Tags: [{Key: team, Value: batch}]}]";
        CreateFlowLogs: resource_ids, set_resource_ids, with_resource_ids
            => "ResourceIds", [String::from("vpc-1"), String::from("vpc-2")], "[vpc-1, vpc-2]";
        CreateVolume: tag_specifications, set_tag_specifications, with_tag_specifications
            => "TagSpecifications", [tags()], "[{Tags: [{Key: team, Value: batch}]}]";
        DescribeCapacityReservations: capacity_reservation_ids, set_capacity_reservation_ids, with_capacity_reservation_ids
            => "CapacityReservationIds", [String::from("cr-1")], "[cr-1]";
        DescribeFleets: fleet_ids, set_fleet_ids, with_fleet_ids
            => "FleetIds", [String::from("fleet-1")], "[fleet-1]";
        DescribeImages: image_ids, set_image_ids, with_image_ids
            => "ImageIds", [String::from("ami-1"), String::from("ami-2")], "[ami-1, ami-2]";
        DescribeInstanceTypes: instance_types, set_instance_types, with_instance_types
            => "InstanceTypes", [InstanceType::T3Micro, InstanceType::M5Large], "[t3.micro, m5.large]";
        DescribeInstances: filters, set_filters, with_filters
            => "Filters",
            [Filter::new("instance-state-name").with_values(["running"])],
            "[{Name: instance-state-name, Values: [running]}]";
        DescribeNetworkInterfaces: network_interface_ids, set_network_interface_ids, with_network_interface_ids
            => "NetworkInterfaceIds", [String::from("eni-1")], "[eni-1]";
        DescribeReservedInstancesOfferings: reserved_instances_offering_ids, set_reserved_instances_offering_ids, with_reserved_instances_offering_ids
            => "ReservedInstancesOfferingIds", [String::from("ri-offer-1")], "[ri-offer-1]";
        DescribeRouteTables: route_table_ids, set_route_table_ids, with_route_table_ids
            => "RouteTableIds", [String::from("rtb-1")], "[rtb-1]";
        DescribeSecurityGroups: group_names, set_group_names, with_group_names
            => "GroupNames", [String::from("default")], "[default]";
        DescribeSpotInstanceRequests: spot_instance_request_ids, set_spot_instance_request_ids, with_spot_instance_request_ids
            => "SpotInstanceRequestIds", [String::from("sir-1")], "[sir-1]";
        DescribeVolumes: volume_ids, set_volume_ids, with_volume_ids
            => "VolumeIds", [String::from("vol-1")], "[vol-1]";
        ModifyInstanceAttribute: groups, set_groups, with_groups
            => "Groups", [String::from("sg-1"), String::from("sg-2")], "[sg-1, sg-2]";
        RunInstances: security_group_ids, set_security_group_ids, with_security_group_ids
            => "SecurityGroupIds", [String::from("sg-1")], "[sg-1]";
    }
}

#[test]
fn equal_models_hash_alike() {
    let _ctx = TestContext::new_from_env();

    let build = || {
        ReservedInstancesOffering::default()
            .with_reserved_instances_offering_id("ri-offer-1")
            .with_fixed_price(0.0)
            .with_usage_price(0.012)
            .with_recurring_charges([RecurringCharge::default().with_amount(0.25)])
    };
    let a = build();
    let b = build();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    let negative_zero = build().with_fixed_price(-0.0);
    assert_eq!(a, negative_zero);
    assert_eq!(hash_of(&a), hash_of(&negative_zero));

    let other = build().with_usage_price(0.013);
    assert_ne!(a, other);
}

#[test]
fn single_field_difference_breaks_equality() {
    let _ctx = TestContext::new_from_env();

    let base = ModifyInstanceAttribute::default()
        .with_instance_id("i-1")
        .with_instance_type("t3.micro");

    assert_ne!(base, base.clone().with_source_dest_check(false));
    assert_ne!(base, base.clone().with_instance_id("i-2"));
    assert_ne!(base, ModifyInstanceAttribute::default().with_instance_id("i-1"));
}

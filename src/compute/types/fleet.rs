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

//! EC2 Fleet configuration and status, as returned by `DescribeFleets`

use crate::compute::types::{
    DefaultTargetCapacityType, FleetActivityStatus, FleetExcessCapacityTerminationPolicy,
    FleetOnDemandAllocationStrategy, FleetStateCode, FleetType, InstanceLifecycle, InstanceType,
    PlatformValues, SpotAllocationStrategy, SpotInstanceInterruptionBehavior, Tag,
};
use crate::compute::utils::{DisplayFields, UtcTime, hash_float};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Describes an EC2 Fleet.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FleetData {
    activity_status: Option<FleetActivityStatus>,
    create_time: Option<UtcTime>,
    fleet_id: Option<String>,
    fleet_state: Option<FleetStateCode>,
    client_token: Option<String>,
    excess_capacity_termination_policy: Option<FleetExcessCapacityTerminationPolicy>,
    fulfilled_capacity: Option<f64>,
    fulfilled_on_demand_capacity: Option<f64>,
    launch_template_configs: Option<Vec<FleetLaunchTemplateConfig>>,
    target_capacity_specification: Option<TargetCapacitySpecification>,
    terminate_instances_with_expiration: Option<bool>,
    #[serde(rename = "Type")]
    fleet_type: Option<FleetType>,
    valid_from: Option<UtcTime>,
    valid_until: Option<UtcTime>,
    replace_unhealthy_instances: Option<bool>,
    spot_options: Option<SpotOptions>,
    on_demand_options: Option<OnDemandOptions>,
    tags: Option<Vec<Tag>>,
    errors: Option<Vec<DescribeFleetError>>,
    instances: Option<Vec<DescribeFleetsInstances>>,
}

impl FleetData {
    value_accessors!(
        /// Progress of the fleet towards its target capacity. Only set for fleets of type
        /// `maintain`.
        activity_status, set_activity_status, with_activity_status: FleetActivityStatus
    );
    copy_accessors!(
        /// Creation time of the fleet.
        create_time, set_create_time, with_create_time: UtcTime
    );
    value_accessors!(fleet_id, set_fleet_id, with_fleet_id: String);
    value_accessors!(fleet_state, set_fleet_state, with_fleet_state: FleetStateCode);
    value_accessors!(
        /// Unique, case-sensitive idempotency token, up to 64 ASCII characters.
        client_token, set_client_token, with_client_token: String
    );
    value_accessors!(
        excess_capacity_termination_policy,
        set_excess_capacity_termination_policy,
        with_excess_capacity_termination_policy: FleetExcessCapacityTerminationPolicy
    );
    copy_accessors!(
        /// Number of units fulfilled by this request compared to the target capacity.
        fulfilled_capacity, set_fulfilled_capacity, with_fulfilled_capacity: f64
    );
    copy_accessors!(
        /// Number of units fulfilled by this request compared to the On-Demand target capacity.
        fulfilled_on_demand_capacity,
        set_fulfilled_on_demand_capacity,
        with_fulfilled_on_demand_capacity: f64
    );
    list_accessors!(
        /// Launch template and overrides, in priority order.
        launch_template_configs, set_launch_template_configs, with_launch_template_configs: FleetLaunchTemplateConfig
    );
    value_accessors!(
        target_capacity_specification,
        set_target_capacity_specification,
        with_target_capacity_specification: TargetCapacitySpecification
    );
    copy_accessors!(
        terminate_instances_with_expiration,
        set_terminate_instances_with_expiration,
        with_terminate_instances_with_expiration: bool
    );
    value_accessors!(
        /// `request`, `maintain` or `instant`.
        fleet_type, set_fleet_type, with_fleet_type: FleetType
    );
    copy_accessors!(valid_from, set_valid_from, with_valid_from: UtcTime);
    copy_accessors!(valid_until, set_valid_until, with_valid_until: UtcTime);
    copy_accessors!(
        replace_unhealthy_instances,
        set_replace_unhealthy_instances,
        with_replace_unhealthy_instances: bool
    );
    value_accessors!(spot_options, set_spot_options, with_spot_options: SpotOptions);
    value_accessors!(on_demand_options, set_on_demand_options, with_on_demand_options: OnDemandOptions);
    list_accessors!(tags, set_tags, with_tags: Tag);
    list_accessors!(
        /// Instances that could not be launched. Only set for fleets of type `instant`.
        errors, set_errors, with_errors: DescribeFleetError
    );
    list_accessors!(
        /// Launched instances. Only set for fleets of type `instant`.
        instances, set_instances, with_instances: DescribeFleetsInstances
    );
}

impl Hash for FleetData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.activity_status.hash(state);
        self.create_time.hash(state);
        self.fleet_id.hash(state);
        self.fleet_state.hash(state);
        self.client_token.hash(state);
        self.excess_capacity_termination_policy.hash(state);
        hash_float(self.fulfilled_capacity, state);
        hash_float(self.fulfilled_on_demand_capacity, state);
        self.launch_template_configs.hash(state);
        self.target_capacity_specification.hash(state);
        self.terminate_instances_with_expiration.hash(state);
        self.fleet_type.hash(state);
        self.valid_from.hash(state);
        self.valid_until.hash(state);
        self.replace_unhealthy_instances.hash(state);
        self.spot_options.hash(state);
        self.on_demand_options.hash(state);
        self.tags.hash(state);
        self.errors.hash(state);
        self.instances.hash(state);
    }
}

impl fmt::Display for FleetData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("ActivityStatus", &self.activity_status)
            .field("CreateTime", &self.create_time)
            .field("FleetId", &self.fleet_id)
            .field("FleetState", &self.fleet_state)
            .field("ClientToken", &self.client_token)
            .field(
                "ExcessCapacityTerminationPolicy",
                &self.excess_capacity_termination_policy,
            )
            .field("FulfilledCapacity", &self.fulfilled_capacity)
            .field("FulfilledOnDemandCapacity", &self.fulfilled_on_demand_capacity)
            .list("LaunchTemplateConfigs", &self.launch_template_configs)
            .field(
                "TargetCapacitySpecification",
                &self.target_capacity_specification,
            )
            .field(
                "TerminateInstancesWithExpiration",
                &self.terminate_instances_with_expiration,
            )
            .field("Type", &self.fleet_type)
            .field("ValidFrom", &self.valid_from)
            .field("ValidUntil", &self.valid_until)
            .field("ReplaceUnhealthyInstances", &self.replace_unhealthy_instances)
            .field("SpotOptions", &self.spot_options)
            .field("OnDemandOptions", &self.on_demand_options)
            .list("Tags", &self.tags)
            .list("Errors", &self.errors)
            .list("Instances", &self.instances)
            .finish()
    }
}

// region: capacity

/// Target capacity of a fleet, split between On-Demand and Spot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TargetCapacitySpecification {
    total_target_capacity: Option<i32>,
    on_demand_target_capacity: Option<i32>,
    spot_target_capacity: Option<i32>,
    default_target_capacity_type: Option<DefaultTargetCapacityType>,
}

impl TargetCapacitySpecification {
    copy_accessors!(total_target_capacity, set_total_target_capacity, with_total_target_capacity: i32);
    copy_accessors!(
        on_demand_target_capacity,
        set_on_demand_target_capacity,
        with_on_demand_target_capacity: i32
    );
    copy_accessors!(spot_target_capacity, set_spot_target_capacity, with_spot_target_capacity: i32);
    value_accessors!(
        default_target_capacity_type,
        set_default_target_capacity_type,
        with_default_target_capacity_type: DefaultTargetCapacityType
    );
}

impl fmt::Display for TargetCapacitySpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("TotalTargetCapacity", &self.total_target_capacity)
            .field("OnDemandTargetCapacity", &self.on_demand_target_capacity)
            .field("SpotTargetCapacity", &self.spot_target_capacity)
            .field("DefaultTargetCapacityType", &self.default_target_capacity_type)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpotOptions {
    allocation_strategy: Option<SpotAllocationStrategy>,
    instance_interruption_behavior: Option<SpotInstanceInterruptionBehavior>,
    instance_pools_to_use_count: Option<i32>,
    single_instance_type: Option<bool>,
    single_availability_zone: Option<bool>,
    min_target_capacity: Option<i32>,
    max_total_price: Option<String>,
}

impl SpotOptions {
    value_accessors!(allocation_strategy, set_allocation_strategy, with_allocation_strategy: SpotAllocationStrategy);
    value_accessors!(
        instance_interruption_behavior,
        set_instance_interruption_behavior,
        with_instance_interruption_behavior: SpotInstanceInterruptionBehavior
    );
    copy_accessors!(
        /// Number of Spot pools to allocate across; only valid with `lowest-price`.
        instance_pools_to_use_count,
        set_instance_pools_to_use_count,
        with_instance_pools_to_use_count: i32
    );
    copy_accessors!(single_instance_type, set_single_instance_type, with_single_instance_type: bool);
    copy_accessors!(
        single_availability_zone,
        set_single_availability_zone,
        with_single_availability_zone: bool
    );
    copy_accessors!(min_target_capacity, set_min_target_capacity, with_min_target_capacity: i32);
    value_accessors!(max_total_price, set_max_total_price, with_max_total_price: String);
}

impl fmt::Display for SpotOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("AllocationStrategy", &self.allocation_strategy)
            .field(
                "InstanceInterruptionBehavior",
                &self.instance_interruption_behavior,
            )
            .field("InstancePoolsToUseCount", &self.instance_pools_to_use_count)
            .field("SingleInstanceType", &self.single_instance_type)
            .field("SingleAvailabilityZone", &self.single_availability_zone)
            .field("MinTargetCapacity", &self.min_target_capacity)
            .field("MaxTotalPrice", &self.max_total_price)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OnDemandOptions {
    allocation_strategy: Option<FleetOnDemandAllocationStrategy>,
    single_instance_type: Option<bool>,
    single_availability_zone: Option<bool>,
    min_target_capacity: Option<i32>,
    max_total_price: Option<String>,
}

impl OnDemandOptions {
    value_accessors!(
        allocation_strategy,
        set_allocation_strategy,
        with_allocation_strategy: FleetOnDemandAllocationStrategy
    );
    copy_accessors!(single_instance_type, set_single_instance_type, with_single_instance_type: bool);
    copy_accessors!(
        single_availability_zone,
        set_single_availability_zone,
        with_single_availability_zone: bool
    );
    copy_accessors!(min_target_capacity, set_min_target_capacity, with_min_target_capacity: i32);
    value_accessors!(max_total_price, set_max_total_price, with_max_total_price: String);
}

impl fmt::Display for OnDemandOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("AllocationStrategy", &self.allocation_strategy)
            .field("SingleInstanceType", &self.single_instance_type)
            .field("SingleAvailabilityZone", &self.single_availability_zone)
            .field("MinTargetCapacity", &self.min_target_capacity)
            .field("MaxTotalPrice", &self.max_total_price)
            .finish()
    }
}

// endregion: capacity

// region: launch templates

/// Identifies a launch template by id or name, and its version.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FleetLaunchTemplateSpecification {
    launch_template_id: Option<String>,
    launch_template_name: Option<String>,
    version: Option<String>,
}

impl FleetLaunchTemplateSpecification {
    value_accessors!(launch_template_id, set_launch_template_id, with_launch_template_id: String);
    value_accessors!(
        launch_template_name,
        set_launch_template_name,
        with_launch_template_name: String
    );
    value_accessors!(
        /// Version number, `$Latest` or `$Default`.
        version, set_version, with_version: String
    );
}

impl fmt::Display for FleetLaunchTemplateSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("LaunchTemplateId", &self.launch_template_id)
            .field("LaunchTemplateName", &self.launch_template_name)
            .field("Version", &self.version)
            .finish()
    }
}

/// Parameters overriding those of the launch template.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FleetLaunchTemplateOverrides {
    instance_type: Option<InstanceType>,
    max_price: Option<String>,
    subnet_id: Option<String>,
    availability_zone: Option<String>,
    weighted_capacity: Option<f64>,
    priority: Option<f64>,
}

impl FleetLaunchTemplateOverrides {
    value_accessors!(instance_type, set_instance_type, with_instance_type: InstanceType);
    value_accessors!(max_price, set_max_price, with_max_price: String);
    value_accessors!(subnet_id, set_subnet_id, with_subnet_id: String);
    value_accessors!(availability_zone, set_availability_zone, with_availability_zone: String);
    copy_accessors!(weighted_capacity, set_weighted_capacity, with_weighted_capacity: f64);
    copy_accessors!(
        /// Lower is launched first.
        priority, set_priority, with_priority: f64
    );
}

impl Hash for FleetLaunchTemplateOverrides {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instance_type.hash(state);
        self.max_price.hash(state);
        self.subnet_id.hash(state);
        self.availability_zone.hash(state);
        hash_float(self.weighted_capacity, state);
        hash_float(self.priority, state);
    }
}

impl fmt::Display for FleetLaunchTemplateOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("InstanceType", &self.instance_type)
            .field("MaxPrice", &self.max_price)
            .field("SubnetId", &self.subnet_id)
            .field("AvailabilityZone", &self.availability_zone)
            .field("WeightedCapacity", &self.weighted_capacity)
            .field("Priority", &self.priority)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FleetLaunchTemplateConfig {
    launch_template_specification: Option<FleetLaunchTemplateSpecification>,
    overrides: Option<Vec<FleetLaunchTemplateOverrides>>,
}

impl FleetLaunchTemplateConfig {
    value_accessors!(
        launch_template_specification,
        set_launch_template_specification,
        with_launch_template_specification: FleetLaunchTemplateSpecification
    );
    list_accessors!(overrides, set_overrides, with_overrides: FleetLaunchTemplateOverrides);
}

impl fmt::Display for FleetLaunchTemplateConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field(
                "LaunchTemplateSpecification",
                &self.launch_template_specification,
            )
            .list("Overrides", &self.overrides)
            .finish()
    }
}

/// The launch template and overrides an instance was (or failed to be) launched with.
#[derive(Clone, Debug, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LaunchTemplateAndOverridesResponse {
    launch_template_specification: Option<FleetLaunchTemplateSpecification>,
    overrides: Option<FleetLaunchTemplateOverrides>,
}

impl LaunchTemplateAndOverridesResponse {
    value_accessors!(
        launch_template_specification,
        set_launch_template_specification,
        with_launch_template_specification: FleetLaunchTemplateSpecification
    );
    value_accessors!(overrides, set_overrides, with_overrides: FleetLaunchTemplateOverrides);
}

impl fmt::Display for LaunchTemplateAndOverridesResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field(
                "LaunchTemplateSpecification",
                &self.launch_template_specification,
            )
            .field("Overrides", &self.overrides)
            .finish()
    }
}

// endregion: launch templates

// region: instant fleet results

#[derive(Clone, Debug, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeFleetError {
    launch_template_and_overrides: Option<LaunchTemplateAndOverridesResponse>,
    lifecycle: Option<InstanceLifecycle>,
    error_code: Option<String>,
    error_message: Option<String>,
}

impl DescribeFleetError {
    value_accessors!(
        launch_template_and_overrides,
        set_launch_template_and_overrides,
        with_launch_template_and_overrides: LaunchTemplateAndOverridesResponse
    );
    value_accessors!(lifecycle, set_lifecycle, with_lifecycle: InstanceLifecycle);
    value_accessors!(error_code, set_error_code, with_error_code: String);
    value_accessors!(error_message, set_error_message, with_error_message: String);
}

impl fmt::Display for DescribeFleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field(
                "LaunchTemplateAndOverrides",
                &self.launch_template_and_overrides,
            )
            .field("Lifecycle", &self.lifecycle)
            .field("ErrorCode", &self.error_code)
            .field("ErrorMessage", &self.error_message)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeFleetsInstances {
    launch_template_and_overrides: Option<LaunchTemplateAndOverridesResponse>,
    lifecycle: Option<InstanceLifecycle>,
    instance_ids: Option<Vec<String>>,
    instance_type: Option<InstanceType>,
    platform: Option<PlatformValues>,
}

impl DescribeFleetsInstances {
    value_accessors!(
        launch_template_and_overrides,
        set_launch_template_and_overrides,
        with_launch_template_and_overrides: LaunchTemplateAndOverridesResponse
    );
    value_accessors!(lifecycle, set_lifecycle, with_lifecycle: InstanceLifecycle);
    list_accessors!(instance_ids, set_instance_ids, with_instance_ids: String);
    value_accessors!(instance_type, set_instance_type, with_instance_type: InstanceType);
    value_accessors!(platform, set_platform, with_platform: PlatformValues);
}

impl fmt::Display for DescribeFleetsInstances {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field(
                "LaunchTemplateAndOverrides",
                &self.launch_template_and_overrides,
            )
            .field("Lifecycle", &self.lifecycle)
            .list("InstanceIds", &self.instance_ids)
            .field("InstanceType", &self.instance_type)
            .field("Platform", &self.platform)
            .finish()
    }
}

// endregion: instant fleet results

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn fleet() -> FleetData {
        FleetData::default()
            .with_fleet_id("fleet-1234")
            .with_fleet_type(FleetType::Instant)
            .with_fulfilled_capacity(2.0)
            .with_launch_template_configs([FleetLaunchTemplateConfig::default()
                .with_launch_template_specification(
                    FleetLaunchTemplateSpecification::default()
                        .with_launch_template_id("lt-1")
                        .with_version("$Latest"),
                )
                .with_overrides([FleetLaunchTemplateOverrides::default()
                    .with_instance_type(InstanceType::C5Large)
                    .with_priority(1.0)])])
            .with_tags([Tag::new("env", "test")])
    }

    #[test]
    fn test_default_is_empty() {
        let data = FleetData::default();
        assert_eq!(data.fleet_id(), None);
        assert_eq!(data.fulfilled_capacity(), None);
        assert_eq!(data.instances(), None);
        assert_eq!(data.to_string(), "{}");
    }

    #[test]
    fn test_independent_copies_equal_and_hash_alike() {
        assert_eq!(fleet(), fleet());
        assert_eq!(hash_of(&fleet()), hash_of(&fleet()));
        assert_ne!(fleet(), fleet().with_fulfilled_on_demand_capacity(0.0));
    }

    #[test]
    fn test_signed_zero_hash() {
        let a = FleetData::default().with_fulfilled_capacity(0.0);
        let b = FleetData::default().with_fulfilled_capacity(-0.0);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_display_uses_type_label() {
        let text = fleet().to_string();
        assert!(text.starts_with("{FleetId: fleet-1234, FulfilledCapacity: 2, "));
        assert!(text.contains("Type: instant"));
        assert!(text.contains("Overrides: [{InstanceType: c5.large, Priority: 1}]"));
        assert!(!text.contains("Errors"));
    }

    #[test]
    fn test_launch_template_configs_keep_order() {
        let data = FleetData::default()
            .with_launch_template_configs([FleetLaunchTemplateConfig::default()
                .with_launch_template_specification(
                    FleetLaunchTemplateSpecification::default().with_launch_template_name("first"),
                )])
            .with_launch_template_configs([FleetLaunchTemplateConfig::default()
                .with_launch_template_specification(
                    FleetLaunchTemplateSpecification::default().with_launch_template_name("second"),
                )]);
        let names: Vec<_> = data
            .launch_template_configs()
            .unwrap_or_default()
            .iter()
            .filter_map(|c| c.launch_template_specification()?.launch_template_name())
            .map(String::as_str)
            .collect();
        assert_eq!(names, ["first", "second"]);
    }
}

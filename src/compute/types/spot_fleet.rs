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

//! Spot Fleet request configuration

use crate::compute::types::{
    AllocationStrategy, BlockDeviceMapping, ExcessCapacityTerminationPolicy,
    FleetLaunchTemplateSpecification, FleetType, GroupIdentifier,
    IamInstanceProfileSpecification, InstanceNetworkInterfaceSpecification, InstanceType,
    OnDemandAllocationStrategy, Placement, RunInstancesMonitoringEnabled,
    SpotInstanceInterruptionBehavior, TagSpecification,
};
use crate::compute::utils::{DisplayFields, UtcTime, hash_float};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Configuration of a Spot Fleet request.
///
/// Either `launch_specifications` or `launch_template_configs` describes what to launch,
/// never both.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpotFleetRequestConfigData {
    allocation_strategy: Option<AllocationStrategy>,
    on_demand_allocation_strategy: Option<OnDemandAllocationStrategy>,
    client_token: Option<String>,
    excess_capacity_termination_policy: Option<ExcessCapacityTerminationPolicy>,
    fulfilled_capacity: Option<f64>,
    on_demand_fulfilled_capacity: Option<f64>,
    iam_fleet_role: Option<String>,
    launch_specifications: Option<Vec<SpotFleetLaunchSpecification>>,
    launch_template_configs: Option<Vec<LaunchTemplateConfig>>,
    spot_price: Option<String>,
    target_capacity: Option<i32>,
    on_demand_target_capacity: Option<i32>,
    on_demand_max_total_price: Option<String>,
    spot_max_total_price: Option<String>,
    terminate_instances_with_expiration: Option<bool>,
    #[serde(rename = "Type")]
    fleet_type: Option<FleetType>,
    valid_from: Option<UtcTime>,
    valid_until: Option<UtcTime>,
    replace_unhealthy_instances: Option<bool>,
    instance_interruption_behavior: Option<SpotInstanceInterruptionBehavior>,
    load_balancers_config: Option<LoadBalancersConfig>,
    instance_pools_to_use_count: Option<i32>,
    tag_specifications: Option<Vec<TagSpecification>>,
}

impl SpotFleetRequestConfigData {
    value_accessors!(
        allocation_strategy,
        set_allocation_strategy,
        with_allocation_strategy: AllocationStrategy
    );
    value_accessors!(
        on_demand_allocation_strategy,
        set_on_demand_allocation_strategy,
        with_on_demand_allocation_strategy: OnDemandAllocationStrategy
    );
    value_accessors!(client_token, set_client_token, with_client_token: String);
    value_accessors!(
        /// What happens to running instances when the target capacity drops below the
        /// fulfilled capacity.
        excess_capacity_termination_policy,
        set_excess_capacity_termination_policy,
        with_excess_capacity_termination_policy: ExcessCapacityTerminationPolicy
    );
    copy_accessors!(fulfilled_capacity, set_fulfilled_capacity, with_fulfilled_capacity: f64);
    copy_accessors!(
        on_demand_fulfilled_capacity,
        set_on_demand_fulfilled_capacity,
        with_on_demand_fulfilled_capacity: f64
    );
    value_accessors!(
        /// IAM role that lets Spot Fleet bid, launch and terminate on the caller's behalf.
        iam_fleet_role, set_iam_fleet_role, with_iam_fleet_role: String
    );
    list_accessors!(
        launch_specifications,
        set_launch_specifications,
        with_launch_specifications: SpotFleetLaunchSpecification
    );
    list_accessors!(
        launch_template_configs,
        set_launch_template_configs,
        with_launch_template_configs: LaunchTemplateConfig
    );
    value_accessors!(spot_price, set_spot_price, with_spot_price: String);
    copy_accessors!(target_capacity, set_target_capacity, with_target_capacity: i32);
    copy_accessors!(
        on_demand_target_capacity,
        set_on_demand_target_capacity,
        with_on_demand_target_capacity: i32
    );
    value_accessors!(
        on_demand_max_total_price,
        set_on_demand_max_total_price,
        with_on_demand_max_total_price: String
    );
    value_accessors!(
        spot_max_total_price,
        set_spot_max_total_price,
        with_spot_max_total_price: String
    );
    copy_accessors!(
        terminate_instances_with_expiration,
        set_terminate_instances_with_expiration,
        with_terminate_instances_with_expiration: bool
    );
    value_accessors!(fleet_type, set_fleet_type, with_fleet_type: FleetType);
    copy_accessors!(valid_from, set_valid_from, with_valid_from: UtcTime);
    copy_accessors!(valid_until, set_valid_until, with_valid_until: UtcTime);
    copy_accessors!(
        replace_unhealthy_instances,
        set_replace_unhealthy_instances,
        with_replace_unhealthy_instances: bool
    );
    value_accessors!(
        instance_interruption_behavior,
        set_instance_interruption_behavior,
        with_instance_interruption_behavior: SpotInstanceInterruptionBehavior
    );
    value_accessors!(
        load_balancers_config,
        set_load_balancers_config,
        with_load_balancers_config: LoadBalancersConfig
    );
    copy_accessors!(
        /// Only with the `lowestPrice` allocation strategy.
        instance_pools_to_use_count,
        set_instance_pools_to_use_count,
        with_instance_pools_to_use_count: i32
    );
    list_accessors!(
        tag_specifications,
        set_tag_specifications,
        with_tag_specifications: TagSpecification
    );
}

impl Hash for SpotFleetRequestConfigData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.allocation_strategy.hash(state);
        self.on_demand_allocation_strategy.hash(state);
        self.client_token.hash(state);
        self.excess_capacity_termination_policy.hash(state);
        hash_float(self.fulfilled_capacity, state);
        hash_float(self.on_demand_fulfilled_capacity, state);
        self.iam_fleet_role.hash(state);
        self.launch_specifications.hash(state);
        self.launch_template_configs.hash(state);
        self.spot_price.hash(state);
        self.target_capacity.hash(state);
        self.on_demand_target_capacity.hash(state);
        self.on_demand_max_total_price.hash(state);
        self.spot_max_total_price.hash(state);
        self.terminate_instances_with_expiration.hash(state);
        self.fleet_type.hash(state);
        self.valid_from.hash(state);
        self.valid_until.hash(state);
        self.replace_unhealthy_instances.hash(state);
        self.instance_interruption_behavior.hash(state);
        self.load_balancers_config.hash(state);
        self.instance_pools_to_use_count.hash(state);
        self.tag_specifications.hash(state);
    }
}

impl fmt::Display for SpotFleetRequestConfigData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("AllocationStrategy", &self.allocation_strategy)
            .field(
                "OnDemandAllocationStrategy",
                &self.on_demand_allocation_strategy,
            )
            .field("ClientToken", &self.client_token)
            .field(
                "ExcessCapacityTerminationPolicy",
                &self.excess_capacity_termination_policy,
            )
            .field("FulfilledCapacity", &self.fulfilled_capacity)
            .field("OnDemandFulfilledCapacity", &self.on_demand_fulfilled_capacity)
            .field("IamFleetRole", &self.iam_fleet_role)
            .list("LaunchSpecifications", &self.launch_specifications)
            .list("LaunchTemplateConfigs", &self.launch_template_configs)
            .field("SpotPrice", &self.spot_price)
            .field("TargetCapacity", &self.target_capacity)
            .field("OnDemandTargetCapacity", &self.on_demand_target_capacity)
            .field("OnDemandMaxTotalPrice", &self.on_demand_max_total_price)
            .field("SpotMaxTotalPrice", &self.spot_max_total_price)
            .field(
                "TerminateInstancesWithExpiration",
                &self.terminate_instances_with_expiration,
            )
            .field("Type", &self.fleet_type)
            .field("ValidFrom", &self.valid_from)
            .field("ValidUntil", &self.valid_until)
            .field("ReplaceUnhealthyInstances", &self.replace_unhealthy_instances)
            .field(
                "InstanceInterruptionBehavior",
                &self.instance_interruption_behavior,
            )
            .field("LoadBalancersConfig", &self.load_balancers_config)
            .field("InstancePoolsToUseCount", &self.instance_pools_to_use_count)
            .list("TagSpecifications", &self.tag_specifications)
            .finish()
    }
}

/// Launch parameters of one Spot Fleet instance pool.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpotFleetLaunchSpecification {
    security_groups: Option<Vec<GroupIdentifier>>,
    block_device_mappings: Option<Vec<BlockDeviceMapping>>,
    ebs_optimized: Option<bool>,
    iam_instance_profile: Option<IamInstanceProfileSpecification>,
    image_id: Option<String>,
    instance_type: Option<InstanceType>,
    kernel_id: Option<String>,
    key_name: Option<String>,
    monitoring: Option<RunInstancesMonitoringEnabled>,
    network_interfaces: Option<Vec<InstanceNetworkInterfaceSpecification>>,
    placement: Option<Placement>,
    ramdisk_id: Option<String>,
    spot_price: Option<String>,
    subnet_id: Option<String>,
    user_data: Option<String>,
    weighted_capacity: Option<f64>,
    tag_specifications: Option<Vec<TagSpecification>>,
}

impl SpotFleetLaunchSpecification {
    list_accessors!(security_groups, set_security_groups, with_security_groups: GroupIdentifier);
    list_accessors!(
        block_device_mappings,
        set_block_device_mappings,
        with_block_device_mappings: BlockDeviceMapping
    );
    copy_accessors!(ebs_optimized, set_ebs_optimized, with_ebs_optimized: bool);
    value_accessors!(
        iam_instance_profile,
        set_iam_instance_profile,
        with_iam_instance_profile: IamInstanceProfileSpecification
    );
    value_accessors!(image_id, set_image_id, with_image_id: String);
    value_accessors!(instance_type, set_instance_type, with_instance_type: InstanceType);
    value_accessors!(kernel_id, set_kernel_id, with_kernel_id: String);
    value_accessors!(key_name, set_key_name, with_key_name: String);
    value_accessors!(monitoring, set_monitoring, with_monitoring: RunInstancesMonitoringEnabled);
    list_accessors!(
        network_interfaces,
        set_network_interfaces,
        with_network_interfaces: InstanceNetworkInterfaceSpecification
    );
    value_accessors!(placement, set_placement, with_placement: Placement);
    value_accessors!(ramdisk_id, set_ramdisk_id, with_ramdisk_id: String);
    value_accessors!(spot_price, set_spot_price, with_spot_price: String);
    value_accessors!(subnet_id, set_subnet_id, with_subnet_id: String);
    value_accessors!(
        /// Base64-encoded user data.
        user_data, set_user_data, with_user_data: String
    );
    copy_accessors!(
        /// Units this instance type counts for towards the target capacity.
        weighted_capacity, set_weighted_capacity, with_weighted_capacity: f64
    );
    list_accessors!(
        tag_specifications,
        set_tag_specifications,
        with_tag_specifications: TagSpecification
    );
}

impl Hash for SpotFleetLaunchSpecification {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.security_groups.hash(state);
        self.block_device_mappings.hash(state);
        self.ebs_optimized.hash(state);
        self.iam_instance_profile.hash(state);
        self.image_id.hash(state);
        self.instance_type.hash(state);
        self.kernel_id.hash(state);
        self.key_name.hash(state);
        self.monitoring.hash(state);
        self.network_interfaces.hash(state);
        self.placement.hash(state);
        self.ramdisk_id.hash(state);
        self.spot_price.hash(state);
        self.subnet_id.hash(state);
        self.user_data.hash(state);
        hash_float(self.weighted_capacity, state);
        self.tag_specifications.hash(state);
    }
}

impl fmt::Display for SpotFleetLaunchSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .list("SecurityGroups", &self.security_groups)
            .list("BlockDeviceMappings", &self.block_device_mappings)
            .field("EbsOptimized", &self.ebs_optimized)
            .field("IamInstanceProfile", &self.iam_instance_profile)
            .field("ImageId", &self.image_id)
            .field("InstanceType", &self.instance_type)
            .field("KernelId", &self.kernel_id)
            .field("KeyName", &self.key_name)
            .field("Monitoring", &self.monitoring)
            .list("NetworkInterfaces", &self.network_interfaces)
            .field("Placement", &self.placement)
            .field("RamdiskId", &self.ramdisk_id)
            .field("SpotPrice", &self.spot_price)
            .field("SubnetId", &self.subnet_id)
            .field("UserData", &self.user_data)
            .field("WeightedCapacity", &self.weighted_capacity)
            .list("TagSpecifications", &self.tag_specifications)
            .finish()
    }
}

// region: launch templates

#[derive(Clone, Debug, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LaunchTemplateConfig {
    launch_template_specification: Option<FleetLaunchTemplateSpecification>,
    overrides: Option<Vec<LaunchTemplateOverrides>>,
}

impl LaunchTemplateConfig {
    value_accessors!(
        launch_template_specification,
        set_launch_template_specification,
        with_launch_template_specification: FleetLaunchTemplateSpecification
    );
    list_accessors!(overrides, set_overrides, with_overrides: LaunchTemplateOverrides);
}

impl fmt::Display for LaunchTemplateConfig {
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

/// Overrides a launch template for one Spot Fleet instance pool.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LaunchTemplateOverrides {
    instance_type: Option<InstanceType>,
    spot_price: Option<String>,
    subnet_id: Option<String>,
    availability_zone: Option<String>,
    weighted_capacity: Option<f64>,
    priority: Option<f64>,
}

impl LaunchTemplateOverrides {
    value_accessors!(instance_type, set_instance_type, with_instance_type: InstanceType);
    value_accessors!(spot_price, set_spot_price, with_spot_price: String);
    value_accessors!(subnet_id, set_subnet_id, with_subnet_id: String);
    value_accessors!(availability_zone, set_availability_zone, with_availability_zone: String);
    copy_accessors!(weighted_capacity, set_weighted_capacity, with_weighted_capacity: f64);
    copy_accessors!(
        /// Lower is higher priority; used by the `prioritized` On-Demand strategy.
        priority, set_priority, with_priority: f64
    );
}

impl Hash for LaunchTemplateOverrides {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instance_type.hash(state);
        self.spot_price.hash(state);
        self.subnet_id.hash(state);
        self.availability_zone.hash(state);
        hash_float(self.weighted_capacity, state);
        hash_float(self.priority, state);
    }
}

impl fmt::Display for LaunchTemplateOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("InstanceType", &self.instance_type)
            .field("SpotPrice", &self.spot_price)
            .field("SubnetId", &self.subnet_id)
            .field("AvailabilityZone", &self.availability_zone)
            .field("WeightedCapacity", &self.weighted_capacity)
            .field("Priority", &self.priority)
            .finish()
    }
}

// endregion: launch templates

// region: load balancers

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoadBalancersConfig {
    classic_load_balancers_config: Option<ClassicLoadBalancersConfig>,
    target_groups_config: Option<TargetGroupsConfig>,
}

impl LoadBalancersConfig {
    value_accessors!(
        classic_load_balancers_config,
        set_classic_load_balancers_config,
        with_classic_load_balancers_config: ClassicLoadBalancersConfig
    );
    value_accessors!(
        target_groups_config,
        set_target_groups_config,
        with_target_groups_config: TargetGroupsConfig
    );
}

impl fmt::Display for LoadBalancersConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field(
                "ClassicLoadBalancersConfig",
                &self.classic_load_balancers_config,
            )
            .field("TargetGroupsConfig", &self.target_groups_config)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClassicLoadBalancersConfig {
    classic_load_balancers: Option<Vec<ClassicLoadBalancer>>,
}

impl ClassicLoadBalancersConfig {
    list_accessors!(
        classic_load_balancers,
        set_classic_load_balancers,
        with_classic_load_balancers: ClassicLoadBalancer
    );
}

impl fmt::Display for ClassicLoadBalancersConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .list("ClassicLoadBalancers", &self.classic_load_balancers)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClassicLoadBalancer {
    name: Option<String>,
}

impl ClassicLoadBalancer {
    value_accessors!(name, set_name, with_name: String);
}

impl fmt::Display for ClassicLoadBalancer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f).field("Name", &self.name).finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TargetGroupsConfig {
    target_groups: Option<Vec<TargetGroup>>,
}

impl TargetGroupsConfig {
    list_accessors!(target_groups, set_target_groups, with_target_groups: TargetGroup);
}

impl fmt::Display for TargetGroupsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .list("TargetGroups", &self.target_groups)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TargetGroup {
    arn: Option<String>,
}

impl TargetGroup {
    value_accessors!(arn, set_arn, with_arn: String);
}

impl fmt::Display for TargetGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f).field("Arn", &self.arn).finish()
    }
}

// endregion: load balancers

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn config() -> SpotFleetRequestConfigData {
        SpotFleetRequestConfigData::default()
            .with_iam_fleet_role("arn:aws:iam::123456789012:role/fleet")
            .with_allocation_strategy(AllocationStrategy::CapacityOptimized)
            .with_target_capacity(10)
            .with_launch_specifications([SpotFleetLaunchSpecification::default()
                .with_image_id("ami-1")
                .with_instance_type(InstanceType::C5Large)
                .with_weighted_capacity(2.0)])
    }

    #[test]
    fn test_display() {
        assert_eq!(
            config().to_string(),
            "{AllocationStrategy: capacityOptimized, IamFleetRole: arn:aws:iam::123456789012:role/fleet, \
             LaunchSpecifications: [{ImageId: ami-1, InstanceType: c5.large, WeightedCapacity: 2}], \
             TargetCapacity: 10}"
        );
    }

    #[test]
    fn test_equal_configs_hash_alike() {
        assert_eq!(config(), config());
        assert_eq!(hash_of(&config()), hash_of(&config()));
        assert_ne!(config(), config().with_fulfilled_capacity(0.0));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_value(
            config()
                .with_fleet_type(FleetType::Maintain)
                .with_excess_capacity_termination_policy(ExcessCapacityTerminationPolicy::Default),
        )
        .unwrap();
        assert_eq!(json["Type"], "maintain");
        assert_eq!(json["ExcessCapacityTerminationPolicy"], "default");
        assert_eq!(json["LaunchSpecifications"][0]["WeightedCapacity"], 2.0);
        assert!(json["LaunchTemplateConfigs"].is_null());
    }
}

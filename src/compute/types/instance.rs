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

//! Instance descriptions as returned by `DescribeInstances` and `RunInstances`

use crate::compute::multimap_ext::{Multimap, MultimapExt, QueryValue};
use crate::compute::types::{
    ArchitectureValues, AttachmentStatus, CapacityReservationPreference, DeviceType,
    HttpTokensState, HypervisorType, InstanceLifecycleType, InstanceMetadataEndpointState,
    InstanceMetadataOptionsState, InstanceStateName, InstanceType, MonitoringState,
    NetworkInterfaceStatus, PlatformValues, ProductCode, StateReason, Tag, Tenancy,
    VirtualizationType,
};
use crate::compute::utils::{DisplayFields, UtcTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Describes an instance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Instance {
    ami_launch_index: Option<i32>,
    image_id: Option<String>,
    instance_id: Option<String>,
    instance_type: Option<InstanceType>,
    kernel_id: Option<String>,
    key_name: Option<String>,
    launch_time: Option<UtcTime>,
    monitoring: Option<Monitoring>,
    placement: Option<Placement>,
    platform: Option<PlatformValues>,
    private_dns_name: Option<String>,
    private_ip_address: Option<String>,
    product_codes: Option<Vec<ProductCode>>,
    public_dns_name: Option<String>,
    public_ip_address: Option<String>,
    ramdisk_id: Option<String>,
    state: Option<InstanceState>,
    state_transition_reason: Option<String>,
    subnet_id: Option<String>,
    vpc_id: Option<String>,
    architecture: Option<ArchitectureValues>,
    block_device_mappings: Option<Vec<InstanceBlockDeviceMapping>>,
    client_token: Option<String>,
    ebs_optimized: Option<bool>,
    ena_support: Option<bool>,
    hypervisor: Option<HypervisorType>,
    iam_instance_profile: Option<IamInstanceProfile>,
    instance_lifecycle: Option<InstanceLifecycleType>,
    elastic_gpu_associations: Option<Vec<ElasticGpuAssociation>>,
    elastic_inference_accelerator_associations:
        Option<Vec<ElasticInferenceAcceleratorAssociation>>,
    network_interfaces: Option<Vec<InstanceNetworkInterface>>,
    outpost_arn: Option<String>,
    root_device_name: Option<String>,
    root_device_type: Option<DeviceType>,
    security_groups: Option<Vec<GroupIdentifier>>,
    source_dest_check: Option<bool>,
    spot_instance_request_id: Option<String>,
    sriov_net_support: Option<String>,
    state_reason: Option<StateReason>,
    tags: Option<Vec<Tag>>,
    virtualization_type: Option<VirtualizationType>,
    cpu_options: Option<CpuOptions>,
    capacity_reservation_id: Option<String>,
    capacity_reservation_specification: Option<CapacityReservationSpecification>,
    hibernation_options: Option<HibernationOptions>,
    licenses: Option<Vec<LicenseConfiguration>>,
    metadata_options: Option<InstanceMetadataOptions>,
}

impl Instance {
    copy_accessors!(
        /// Position of this instance among the instances launched together, from 0.
        ami_launch_index, set_ami_launch_index, with_ami_launch_index: i32
    );
    value_accessors!(image_id, set_image_id, with_image_id: String);
    value_accessors!(instance_id, set_instance_id, with_instance_id: String);
    value_accessors!(instance_type, set_instance_type, with_instance_type: InstanceType);
    value_accessors!(kernel_id, set_kernel_id, with_kernel_id: String);
    value_accessors!(key_name, set_key_name, with_key_name: String);
    copy_accessors!(launch_time, set_launch_time, with_launch_time: UtcTime);
    value_accessors!(monitoring, set_monitoring, with_monitoring: Monitoring);
    value_accessors!(placement, set_placement, with_placement: Placement);
    value_accessors!(
        /// `Windows` for Windows instances, absent otherwise.
        platform, set_platform, with_platform: PlatformValues
    );
    value_accessors!(private_dns_name, set_private_dns_name, with_private_dns_name: String);
    value_accessors!(
        private_ip_address,
        set_private_ip_address,
        with_private_ip_address: String
    );
    list_accessors!(product_codes, set_product_codes, with_product_codes: ProductCode);
    value_accessors!(
        /// Empty until the instance reaches the `running` state.
        public_dns_name, set_public_dns_name, with_public_dns_name: String
    );
    value_accessors!(public_ip_address, set_public_ip_address, with_public_ip_address: String);
    value_accessors!(ramdisk_id, set_ramdisk_id, with_ramdisk_id: String);
    value_accessors!(state, set_state, with_state: InstanceState);
    value_accessors!(
        state_transition_reason,
        set_state_transition_reason,
        with_state_transition_reason: String
    );
    value_accessors!(subnet_id, set_subnet_id, with_subnet_id: String);
    value_accessors!(vpc_id, set_vpc_id, with_vpc_id: String);
    value_accessors!(architecture, set_architecture, with_architecture: ArchitectureValues);
    list_accessors!(
        block_device_mappings,
        set_block_device_mappings,
        with_block_device_mappings: InstanceBlockDeviceMapping
    );
    value_accessors!(client_token, set_client_token, with_client_token: String);
    copy_accessors!(ebs_optimized, set_ebs_optimized, with_ebs_optimized: bool);
    copy_accessors!(ena_support, set_ena_support, with_ena_support: bool);
    value_accessors!(hypervisor, set_hypervisor, with_hypervisor: HypervisorType);
    value_accessors!(
        iam_instance_profile,
        set_iam_instance_profile,
        with_iam_instance_profile: IamInstanceProfile
    );
    value_accessors!(
        /// Absent for On-Demand instances.
        instance_lifecycle, set_instance_lifecycle, with_instance_lifecycle: InstanceLifecycleType
    );
    list_accessors!(
        elastic_gpu_associations,
        set_elastic_gpu_associations,
        with_elastic_gpu_associations: ElasticGpuAssociation
    );
    list_accessors!(
        elastic_inference_accelerator_associations,
        set_elastic_inference_accelerator_associations,
        with_elastic_inference_accelerator_associations: ElasticInferenceAcceleratorAssociation
    );
    list_accessors!(
        network_interfaces,
        set_network_interfaces,
        with_network_interfaces: InstanceNetworkInterface
    );
    value_accessors!(outpost_arn, set_outpost_arn, with_outpost_arn: String);
    value_accessors!(root_device_name, set_root_device_name, with_root_device_name: String);
    value_accessors!(root_device_type, set_root_device_type, with_root_device_type: DeviceType);
    list_accessors!(security_groups, set_security_groups, with_security_groups: GroupIdentifier);
    copy_accessors!(
        /// Whether source/destination checking is enabled; must be `false` for NAT instances.
        source_dest_check, set_source_dest_check, with_source_dest_check: bool
    );
    value_accessors!(
        spot_instance_request_id,
        set_spot_instance_request_id,
        with_spot_instance_request_id: String
    );
    value_accessors!(sriov_net_support, set_sriov_net_support, with_sriov_net_support: String);
    value_accessors!(state_reason, set_state_reason, with_state_reason: StateReason);
    list_accessors!(tags, set_tags, with_tags: Tag);
    value_accessors!(
        virtualization_type,
        set_virtualization_type,
        with_virtualization_type: VirtualizationType
    );
    value_accessors!(cpu_options, set_cpu_options, with_cpu_options: CpuOptions);
    value_accessors!(
        capacity_reservation_id,
        set_capacity_reservation_id,
        with_capacity_reservation_id: String
    );
    value_accessors!(
        capacity_reservation_specification,
        set_capacity_reservation_specification,
        with_capacity_reservation_specification: CapacityReservationSpecification
    );
    value_accessors!(
        hibernation_options,
        set_hibernation_options,
        with_hibernation_options: HibernationOptions
    );
    list_accessors!(licenses, set_licenses, with_licenses: LicenseConfiguration);
    value_accessors!(
        metadata_options,
        set_metadata_options,
        with_metadata_options: InstanceMetadataOptions
    );
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("AmiLaunchIndex", &self.ami_launch_index)
            .field("ImageId", &self.image_id)
            .field("InstanceId", &self.instance_id)
            .field("InstanceType", &self.instance_type)
            .field("KernelId", &self.kernel_id)
            .field("KeyName", &self.key_name)
            .field("LaunchTime", &self.launch_time)
            .field("Monitoring", &self.monitoring)
            .field("Placement", &self.placement)
            .field("Platform", &self.platform)
            .field("PrivateDnsName", &self.private_dns_name)
            .field("PrivateIpAddress", &self.private_ip_address)
            .list("ProductCodes", &self.product_codes)
            .field("PublicDnsName", &self.public_dns_name)
            .field("PublicIpAddress", &self.public_ip_address)
            .field("RamdiskId", &self.ramdisk_id)
            .field("State", &self.state)
            .field("StateTransitionReason", &self.state_transition_reason)
            .field("SubnetId", &self.subnet_id)
            .field("VpcId", &self.vpc_id)
            .field("Architecture", &self.architecture)
            .list("BlockDeviceMappings", &self.block_device_mappings)
            .field("ClientToken", &self.client_token)
            .field("EbsOptimized", &self.ebs_optimized)
            .field("EnaSupport", &self.ena_support)
            .field("Hypervisor", &self.hypervisor)
            .field("IamInstanceProfile", &self.iam_instance_profile)
            .field("InstanceLifecycle", &self.instance_lifecycle)
            .list("ElasticGpuAssociations", &self.elastic_gpu_associations)
            .list(
                "ElasticInferenceAcceleratorAssociations",
                &self.elastic_inference_accelerator_associations,
            )
            .list("NetworkInterfaces", &self.network_interfaces)
            .field("OutpostArn", &self.outpost_arn)
            .field("RootDeviceName", &self.root_device_name)
            .field("RootDeviceType", &self.root_device_type)
            .list("SecurityGroups", &self.security_groups)
            .field("SourceDestCheck", &self.source_dest_check)
            .field("SpotInstanceRequestId", &self.spot_instance_request_id)
            .field("SriovNetSupport", &self.sriov_net_support)
            .field("StateReason", &self.state_reason)
            .list("Tags", &self.tags)
            .field("VirtualizationType", &self.virtualization_type)
            .field("CpuOptions", &self.cpu_options)
            .field("CapacityReservationId", &self.capacity_reservation_id)
            .field(
                "CapacityReservationSpecification",
                &self.capacity_reservation_specification,
            )
            .field("HibernationOptions", &self.hibernation_options)
            .list("Licenses", &self.licenses)
            .field("MetadataOptions", &self.metadata_options)
            .finish()
    }
}

/// A group of instances launched by one request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Reservation {
    groups: Option<Vec<GroupIdentifier>>,
    instances: Option<Vec<Instance>>,
    owner_id: Option<String>,
    requester_id: Option<String>,
    reservation_id: Option<String>,
}

impl Reservation {
    list_accessors!(groups, set_groups, with_groups: GroupIdentifier);
    list_accessors!(instances, set_instances, with_instances: Instance);
    value_accessors!(owner_id, set_owner_id, with_owner_id: String);
    value_accessors!(
        /// Service or account that launched the instances on behalf of the owner.
        requester_id, set_requester_id, with_requester_id: String
    );
    value_accessors!(reservation_id, set_reservation_id, with_reservation_id: String);
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .list("Groups", &self.groups)
            .list("Instances", &self.instances)
            .field("OwnerId", &self.owner_id)
            .field("RequesterId", &self.requester_id)
            .field("ReservationId", &self.reservation_id)
            .finish()
    }
}

// region: state and placement

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceState {
    code: Option<i32>,
    name: Option<InstanceStateName>,
}

impl InstanceState {
    copy_accessors!(
        /// Low byte is the state (0 pending, 16 running, 32 shutting-down, 48 terminated,
        /// 64 stopping, 80 stopped); the high byte is for internal use.
        code, set_code, with_code: i32
    );
    value_accessors!(name, set_name, with_name: InstanceStateName);
}

impl fmt::Display for InstanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("Code", &self.code)
            .field("Name", &self.name)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Monitoring {
    state: Option<MonitoringState>,
}

impl Monitoring {
    value_accessors!(state, set_state, with_state: MonitoringState);
}

impl fmt::Display for Monitoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f).field("State", &self.state).finish()
    }
}

/// Placement of an instance, both as requested and as described.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Placement {
    availability_zone: Option<String>,
    affinity: Option<String>,
    group_name: Option<String>,
    partition_number: Option<i32>,
    host_id: Option<String>,
    tenancy: Option<Tenancy>,
    spread_domain: Option<String>,
    host_resource_group_arn: Option<String>,
}

impl Placement {
    value_accessors!(availability_zone, set_availability_zone, with_availability_zone: String);
    value_accessors!(
        /// Affinity with a Dedicated Host: `default` or `host`.
        affinity, set_affinity, with_affinity: String
    );
    value_accessors!(group_name, set_group_name, with_group_name: String);
    copy_accessors!(
        /// Only for placement groups with the `partition` strategy.
        partition_number, set_partition_number, with_partition_number: i32
    );
    value_accessors!(host_id, set_host_id, with_host_id: String);
    value_accessors!(tenancy, set_tenancy, with_tenancy: Tenancy);
    value_accessors!(spread_domain, set_spread_domain, with_spread_domain: String);
    value_accessors!(
        host_resource_group_arn,
        set_host_resource_group_arn,
        with_host_resource_group_arn: String
    );
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("AvailabilityZone", &self.availability_zone)
            .field("Affinity", &self.affinity)
            .field("GroupName", &self.group_name)
            .field("PartitionNumber", &self.partition_number)
            .field("HostId", &self.host_id)
            .field("Tenancy", &self.tenancy)
            .field("SpreadDomain", &self.spread_domain)
            .field("HostResourceGroupArn", &self.host_resource_group_arn)
            .finish()
    }
}

impl QueryValue for Placement {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add_value(&format!("{name}.AvailabilityZone"), &self.availability_zone);
        params.add_value(&format!("{name}.Affinity"), &self.affinity);
        params.add_value(&format!("{name}.GroupName"), &self.group_name);
        params.add_value(&format!("{name}.PartitionNumber"), &self.partition_number);
        params.add_value(&format!("{name}.HostId"), &self.host_id);
        params.add_value(&format!("{name}.Tenancy"), &self.tenancy);
        params.add_value(&format!("{name}.SpreadDomain"), &self.spread_domain);
        params.add_value(
            &format!("{name}.HostResourceGroupArn"),
            &self.host_resource_group_arn,
        );
    }
}

// endregion: state and placement

// region: attachments

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceBlockDeviceMapping {
    device_name: Option<String>,
    ebs: Option<EbsInstanceBlockDevice>,
}

impl InstanceBlockDeviceMapping {
    value_accessors!(device_name, set_device_name, with_device_name: String);
    value_accessors!(ebs, set_ebs, with_ebs: EbsInstanceBlockDevice);
}

impl fmt::Display for InstanceBlockDeviceMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("DeviceName", &self.device_name)
            .field("Ebs", &self.ebs)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EbsInstanceBlockDevice {
    attach_time: Option<UtcTime>,
    delete_on_termination: Option<bool>,
    status: Option<AttachmentStatus>,
    volume_id: Option<String>,
}

impl EbsInstanceBlockDevice {
    copy_accessors!(attach_time, set_attach_time, with_attach_time: UtcTime);
    copy_accessors!(
        delete_on_termination,
        set_delete_on_termination,
        with_delete_on_termination: bool
    );
    value_accessors!(status, set_status, with_status: AttachmentStatus);
    value_accessors!(volume_id, set_volume_id, with_volume_id: String);
}

impl fmt::Display for EbsInstanceBlockDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("AttachTime", &self.attach_time)
            .field("DeleteOnTermination", &self.delete_on_termination)
            .field("Status", &self.status)
            .field("VolumeId", &self.volume_id)
            .finish()
    }
}

/// Network interface attached to an instance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceNetworkInterface {
    description: Option<String>,
    groups: Option<Vec<GroupIdentifier>>,
    mac_address: Option<String>,
    network_interface_id: Option<String>,
    owner_id: Option<String>,
    private_dns_name: Option<String>,
    private_ip_address: Option<String>,
    source_dest_check: Option<bool>,
    status: Option<NetworkInterfaceStatus>,
    subnet_id: Option<String>,
    vpc_id: Option<String>,
    interface_type: Option<String>,
}

impl InstanceNetworkInterface {
    value_accessors!(description, set_description, with_description: String);
    list_accessors!(groups, set_groups, with_groups: GroupIdentifier);
    value_accessors!(mac_address, set_mac_address, with_mac_address: String);
    value_accessors!(
        network_interface_id,
        set_network_interface_id,
        with_network_interface_id: String
    );
    value_accessors!(owner_id, set_owner_id, with_owner_id: String);
    value_accessors!(private_dns_name, set_private_dns_name, with_private_dns_name: String);
    value_accessors!(
        private_ip_address,
        set_private_ip_address,
        with_private_ip_address: String
    );
    copy_accessors!(source_dest_check, set_source_dest_check, with_source_dest_check: bool);
    value_accessors!(status, set_status, with_status: NetworkInterfaceStatus);
    value_accessors!(subnet_id, set_subnet_id, with_subnet_id: String);
    value_accessors!(vpc_id, set_vpc_id, with_vpc_id: String);
    value_accessors!(
        /// `interface` or `efa`.
        interface_type, set_interface_type, with_interface_type: String
    );
}

impl fmt::Display for InstanceNetworkInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("Description", &self.description)
            .list("Groups", &self.groups)
            .field("MacAddress", &self.mac_address)
            .field("NetworkInterfaceId", &self.network_interface_id)
            .field("OwnerId", &self.owner_id)
            .field("PrivateDnsName", &self.private_dns_name)
            .field("PrivateIpAddress", &self.private_ip_address)
            .field("SourceDestCheck", &self.source_dest_check)
            .field("Status", &self.status)
            .field("SubnetId", &self.subnet_id)
            .field("VpcId", &self.vpc_id)
            .field("InterfaceType", &self.interface_type)
            .finish()
    }
}

/// A security group, by id and name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupIdentifier {
    group_name: Option<String>,
    group_id: Option<String>,
}

impl GroupIdentifier {
    value_accessors!(group_name, set_group_name, with_group_name: String);
    value_accessors!(group_id, set_group_id, with_group_id: String);
}

impl fmt::Display for GroupIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("GroupName", &self.group_name)
            .field("GroupId", &self.group_id)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IamInstanceProfile {
    arn: Option<String>,
    id: Option<String>,
}

impl IamInstanceProfile {
    value_accessors!(arn, set_arn, with_arn: String);
    value_accessors!(id, set_id, with_id: String);
}

impl fmt::Display for IamInstanceProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("Arn", &self.arn)
            .field("Id", &self.id)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElasticGpuAssociation {
    elastic_gpu_id: Option<String>,
    elastic_gpu_association_id: Option<String>,
    elastic_gpu_association_state: Option<String>,
    elastic_gpu_association_time: Option<String>,
}

impl ElasticGpuAssociation {
    value_accessors!(elastic_gpu_id, set_elastic_gpu_id, with_elastic_gpu_id: String);
    value_accessors!(
        elastic_gpu_association_id,
        set_elastic_gpu_association_id,
        with_elastic_gpu_association_id: String
    );
    value_accessors!(
        elastic_gpu_association_state,
        set_elastic_gpu_association_state,
        with_elastic_gpu_association_state: String
    );
    value_accessors!(
        /// Association time, as the service formats it.
        elastic_gpu_association_time,
        set_elastic_gpu_association_time,
        with_elastic_gpu_association_time: String
    );
}

impl fmt::Display for ElasticGpuAssociation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("ElasticGpuId", &self.elastic_gpu_id)
            .field("ElasticGpuAssociationId", &self.elastic_gpu_association_id)
            .field("ElasticGpuAssociationState", &self.elastic_gpu_association_state)
            .field("ElasticGpuAssociationTime", &self.elastic_gpu_association_time)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElasticInferenceAcceleratorAssociation {
    elastic_inference_accelerator_arn: Option<String>,
    elastic_inference_accelerator_association_id: Option<String>,
    elastic_inference_accelerator_association_state: Option<String>,
    elastic_inference_accelerator_association_time: Option<UtcTime>,
}

impl ElasticInferenceAcceleratorAssociation {
    value_accessors!(
        elastic_inference_accelerator_arn,
        set_elastic_inference_accelerator_arn,
        with_elastic_inference_accelerator_arn: String
    );
    value_accessors!(
        elastic_inference_accelerator_association_id,
        set_elastic_inference_accelerator_association_id,
        with_elastic_inference_accelerator_association_id: String
    );
    value_accessors!(
        elastic_inference_accelerator_association_state,
        set_elastic_inference_accelerator_association_state,
        with_elastic_inference_accelerator_association_state: String
    );
    copy_accessors!(
        elastic_inference_accelerator_association_time,
        set_elastic_inference_accelerator_association_time,
        with_elastic_inference_accelerator_association_time: UtcTime
    );
}

impl fmt::Display for ElasticInferenceAcceleratorAssociation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field(
                "ElasticInferenceAcceleratorArn",
                &self.elastic_inference_accelerator_arn,
            )
            .field(
                "ElasticInferenceAcceleratorAssociationId",
                &self.elastic_inference_accelerator_association_id,
            )
            .field(
                "ElasticInferenceAcceleratorAssociationState",
                &self.elastic_inference_accelerator_association_state,
            )
            .field(
                "ElasticInferenceAcceleratorAssociationTime",
                &self.elastic_inference_accelerator_association_time,
            )
            .finish()
    }
}

// endregion: attachments

// region: options shared by launch requests and descriptions

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CpuOptions {
    core_count: Option<i32>,
    threads_per_core: Option<i32>,
}

impl CpuOptions {
    copy_accessors!(core_count, set_core_count, with_core_count: i32);
    copy_accessors!(
        /// 1 disables multithreading.
        threads_per_core, set_threads_per_core, with_threads_per_core: i32
    );
}

impl fmt::Display for CpuOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("CoreCount", &self.core_count)
            .field("ThreadsPerCore", &self.threads_per_core)
            .finish()
    }
}

impl QueryValue for CpuOptions {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add_value(&format!("{name}.CoreCount"), &self.core_count);
        params.add_value(&format!("{name}.ThreadsPerCore"), &self.threads_per_core);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HibernationOptions {
    configured: Option<bool>,
}

impl HibernationOptions {
    copy_accessors!(configured, set_configured, with_configured: bool);
}

impl fmt::Display for HibernationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("Configured", &self.configured)
            .finish()
    }
}

impl QueryValue for HibernationOptions {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add_value(&format!("{name}.Configured"), &self.configured);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LicenseConfiguration {
    license_configuration_arn: Option<String>,
}

impl LicenseConfiguration {
    value_accessors!(
        license_configuration_arn,
        set_license_configuration_arn,
        with_license_configuration_arn: String
    );
}

impl fmt::Display for LicenseConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("LicenseConfigurationArn", &self.license_configuration_arn)
            .finish()
    }
}

impl QueryValue for LicenseConfiguration {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add_value(
            &format!("{name}.LicenseConfigurationArn"),
            &self.license_configuration_arn,
        );
    }
}

/// Instance metadata service options. `state` is only reported, never sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceMetadataOptions {
    state: Option<InstanceMetadataOptionsState>,
    http_tokens: Option<HttpTokensState>,
    http_put_response_hop_limit: Option<i32>,
    http_endpoint: Option<InstanceMetadataEndpointState>,
}

impl InstanceMetadataOptions {
    value_accessors!(state, set_state, with_state: InstanceMetadataOptionsState);
    value_accessors!(http_tokens, set_http_tokens, with_http_tokens: HttpTokensState);
    copy_accessors!(
        /// 1 to 64.
        http_put_response_hop_limit,
        set_http_put_response_hop_limit,
        with_http_put_response_hop_limit: i32
    );
    value_accessors!(
        http_endpoint,
        set_http_endpoint,
        with_http_endpoint: InstanceMetadataEndpointState
    );
}

impl fmt::Display for InstanceMetadataOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("State", &self.state)
            .field("HttpTokens", &self.http_tokens)
            .field("HttpPutResponseHopLimit", &self.http_put_response_hop_limit)
            .field("HttpEndpoint", &self.http_endpoint)
            .finish()
    }
}

impl QueryValue for InstanceMetadataOptions {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add_value(&format!("{name}.HttpTokens"), &self.http_tokens);
        params.add_value(
            &format!("{name}.HttpPutResponseHopLimit"),
            &self.http_put_response_hop_limit,
        );
        params.add_value(&format!("{name}.HttpEndpoint"), &self.http_endpoint);
    }
}

/// Capacity Reservation targeting of an instance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CapacityReservationSpecification {
    capacity_reservation_preference: Option<CapacityReservationPreference>,
    capacity_reservation_target: Option<CapacityReservationTarget>,
}

impl CapacityReservationSpecification {
    value_accessors!(
        /// `open` runs in any open reservation with matching attributes, `none` never does.
        capacity_reservation_preference,
        set_capacity_reservation_preference,
        with_capacity_reservation_preference: CapacityReservationPreference
    );
    value_accessors!(
        capacity_reservation_target,
        set_capacity_reservation_target,
        with_capacity_reservation_target: CapacityReservationTarget
    );
}

impl fmt::Display for CapacityReservationSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field(
                "CapacityReservationPreference",
                &self.capacity_reservation_preference,
            )
            .field("CapacityReservationTarget", &self.capacity_reservation_target)
            .finish()
    }
}

impl QueryValue for CapacityReservationSpecification {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add_value(
            &format!("{name}.CapacityReservationPreference"),
            &self.capacity_reservation_preference,
        );
        params.add_value(
            &format!("{name}.CapacityReservationTarget"),
            &self.capacity_reservation_target,
        );
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CapacityReservationTarget {
    capacity_reservation_id: Option<String>,
}

impl CapacityReservationTarget {
    value_accessors!(
        capacity_reservation_id,
        set_capacity_reservation_id,
        with_capacity_reservation_id: String
    );
}

impl fmt::Display for CapacityReservationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("CapacityReservationId", &self.capacity_reservation_id)
            .finish()
    }
}

impl QueryValue for CapacityReservationTarget {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add_value(
            &format!("{name}.CapacityReservationId"),
            &self.capacity_reservation_id,
        );
    }
}

// endregion: options shared by launch requests and descriptions

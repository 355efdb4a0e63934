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
use crate::compute::types::{
    BlockDeviceMapping, CapacityReservationSpecification, CpuOptions, CreditSpecificationRequest,
    Ec2Api, ElasticGpuSpecification, ElasticInferenceAccelerator, HibernationOptions,
    IamInstanceProfileSpecification, InstanceMarketOptionsRequest, InstanceMetadataOptions,
    InstanceNetworkInterfaceSpecification, InstanceType, LaunchTemplateSpecification,
    LicenseConfiguration, Placement, Reservation, RunInstancesMonitoringEnabled,
    ShutdownBehavior, TagSpecification, ToEc2Request, Validate,
};
use crate::compute::utils::{DisplayFields, check_range};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Argument builder for the [`RunInstances`](https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_RunInstances.html) EC2 API operation.
///
/// Launches between `min_count` and `max_count` instances of one AMI. The service launches
/// as many as capacity allows within that range, or none. The instances come back grouped
/// in one [`Reservation`].
///
/// ```
/// use ec2::compute::builders::RunInstances;
/// use ec2::compute::types::{InstanceType, ToEc2Request};
///
/// let request = RunInstances::new("ami-0abcdef1234567890", 1, 2)
///     .with_instance_type(InstanceType::T3Micro)
///     .with_security_group_ids(["sg-1"])
///     .to_ec2request();
/// assert_eq!(request.param("MaxCount"), Some("2"));
/// assert_eq!(request.param("SecurityGroupId.1"), Some("sg-1"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RunInstances {
    block_device_mappings: Option<Vec<BlockDeviceMapping>>,
    image_id: Option<String>,
    instance_type: Option<InstanceType>,
    kernel_id: Option<String>,
    key_name: Option<String>,
    max_count: Option<i32>,
    min_count: Option<i32>,
    monitoring: Option<RunInstancesMonitoringEnabled>,
    placement: Option<Placement>,
    ramdisk_id: Option<String>,
    security_group_ids: Option<Vec<String>>,
    security_groups: Option<Vec<String>>,
    subnet_id: Option<String>,
    user_data: Option<String>,
    additional_info: Option<String>,
    client_token: Option<String>,
    disable_api_termination: Option<bool>,
    dry_run: Option<bool>,
    ebs_optimized: Option<bool>,
    iam_instance_profile: Option<IamInstanceProfileSpecification>,
    instance_initiated_shutdown_behavior: Option<ShutdownBehavior>,
    network_interfaces: Option<Vec<InstanceNetworkInterfaceSpecification>>,
    private_ip_address: Option<String>,
    elastic_gpu_specification: Option<Vec<ElasticGpuSpecification>>,
    elastic_inference_accelerators: Option<Vec<ElasticInferenceAccelerator>>,
    tag_specifications: Option<Vec<TagSpecification>>,
    launch_template: Option<LaunchTemplateSpecification>,
    instance_market_options: Option<InstanceMarketOptionsRequest>,
    credit_specification: Option<CreditSpecificationRequest>,
    cpu_options: Option<CpuOptions>,
    capacity_reservation_specification: Option<CapacityReservationSpecification>,
    hibernation_options: Option<HibernationOptions>,
    license_specifications: Option<Vec<LicenseConfiguration>>,
    metadata_options: Option<InstanceMetadataOptions>,
}

impl RunInstances {
    /// Returns a request launching `min_count` to `max_count` instances of `image_id`.
    pub fn new(image_id: impl Into<String>, min_count: i32, max_count: i32) -> Self {
        Self::default()
            .with_image_id(image_id)
            .with_min_count(min_count)
            .with_max_count(max_count)
    }

    list_accessors!(
        block_device_mappings,
        set_block_device_mappings,
        with_block_device_mappings: BlockDeviceMapping
    );
    value_accessors!(
        /// AMI to launch. Optional only when a launch template names one.
        image_id, set_image_id, with_image_id: String
    );
    value_accessors!(instance_type, set_instance_type, with_instance_type: InstanceType);
    value_accessors!(kernel_id, set_kernel_id, with_kernel_id: String);
    value_accessors!(key_name, set_key_name, with_key_name: String);
    copy_accessors!(
        /// Most instances to launch. Capped to what capacity allows, never below `min_count`.
        max_count, set_max_count, with_max_count: i32
    );
    copy_accessors!(min_count, set_min_count, with_min_count: i32);
    value_accessors!(
        monitoring,
        set_monitoring,
        with_monitoring: RunInstancesMonitoringEnabled
    );
    value_accessors!(placement, set_placement, with_placement: Placement);
    value_accessors!(ramdisk_id, set_ramdisk_id, with_ramdisk_id: String);
    list_accessors!(security_group_ids, set_security_group_ids, with_security_group_ids: String);
    list_accessors!(
        /// Security group names, default VPC and EC2-Classic only.
        security_groups, set_security_groups, with_security_groups: String
    );
    value_accessors!(subnet_id, set_subnet_id, with_subnet_id: String);
    value_accessors!(
        /// Base64-encoded user data, sent as given.
        user_data, set_user_data, with_user_data: String
    );
    value_accessors!(additional_info, set_additional_info, with_additional_info: String);
    value_accessors!(client_token, set_client_token, with_client_token: String);
    copy_accessors!(
        disable_api_termination,
        set_disable_api_termination,
        with_disable_api_termination: bool
    );
    copy_accessors!(dry_run, set_dry_run, with_dry_run: bool);
    copy_accessors!(ebs_optimized, set_ebs_optimized, with_ebs_optimized: bool);
    value_accessors!(
        iam_instance_profile,
        set_iam_instance_profile,
        with_iam_instance_profile: IamInstanceProfileSpecification
    );
    value_accessors!(
        instance_initiated_shutdown_behavior,
        set_instance_initiated_shutdown_behavior,
        with_instance_initiated_shutdown_behavior: ShutdownBehavior
    );
    list_accessors!(
        network_interfaces,
        set_network_interfaces,
        with_network_interfaces: InstanceNetworkInterfaceSpecification
    );
    value_accessors!(private_ip_address, set_private_ip_address, with_private_ip_address: String);
    list_accessors!(
        elastic_gpu_specification,
        set_elastic_gpu_specification,
        with_elastic_gpu_specification: ElasticGpuSpecification
    );
    list_accessors!(
        elastic_inference_accelerators,
        set_elastic_inference_accelerators,
        with_elastic_inference_accelerators: ElasticInferenceAccelerator
    );
    list_accessors!(
        tag_specifications,
        set_tag_specifications,
        with_tag_specifications: TagSpecification
    );
    value_accessors!(
        launch_template,
        set_launch_template,
        with_launch_template: LaunchTemplateSpecification
    );
    value_accessors!(
        instance_market_options,
        set_instance_market_options,
        with_instance_market_options: InstanceMarketOptionsRequest
    );
    value_accessors!(
        credit_specification,
        set_credit_specification,
        with_credit_specification: CreditSpecificationRequest
    );
    value_accessors!(cpu_options, set_cpu_options, with_cpu_options: CpuOptions);
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
    list_accessors!(
        license_specifications,
        set_license_specifications,
        with_license_specifications: LicenseConfiguration
    );
    value_accessors!(
        metadata_options,
        set_metadata_options,
        with_metadata_options: InstanceMetadataOptions
    );
}

impl fmt::Display for RunInstances {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .list("BlockDeviceMappings", &self.block_device_mappings)
            .field("ImageId", &self.image_id)
            .field("InstanceType", &self.instance_type)
            .field("KernelId", &self.kernel_id)
            .field("KeyName", &self.key_name)
            .field("MaxCount", &self.max_count)
            .field("MinCount", &self.min_count)
            .field("Monitoring", &self.monitoring)
            .field("Placement", &self.placement)
            .field("RamdiskId", &self.ramdisk_id)
            .list("SecurityGroupIds", &self.security_group_ids)
            .list("SecurityGroups", &self.security_groups)
            .field("SubnetId", &self.subnet_id)
            .field("UserData", &self.user_data)
            .field("AdditionalInfo", &self.additional_info)
            .field("ClientToken", &self.client_token)
            .field("DisableApiTermination", &self.disable_api_termination)
            .field("DryRun", &self.dry_run)
            .field("EbsOptimized", &self.ebs_optimized)
            .field("IamInstanceProfile", &self.iam_instance_profile)
            .field(
                "InstanceInitiatedShutdownBehavior",
                &self.instance_initiated_shutdown_behavior,
            )
            .list("NetworkInterfaces", &self.network_interfaces)
            .field("PrivateIpAddress", &self.private_ip_address)
            .list("ElasticGpuSpecification", &self.elastic_gpu_specification)
            .list(
                "ElasticInferenceAccelerators",
                &self.elastic_inference_accelerators,
            )
            .list("TagSpecifications", &self.tag_specifications)
            .field("LaunchTemplate", &self.launch_template)
            .field("InstanceMarketOptions", &self.instance_market_options)
            .field("CreditSpecification", &self.credit_specification)
            .field("CpuOptions", &self.cpu_options)
            .field(
                "CapacityReservationSpecification",
                &self.capacity_reservation_specification,
            )
            .field("HibernationOptions", &self.hibernation_options)
            .list("LicenseSpecifications", &self.license_specifications)
            .field("MetadataOptions", &self.metadata_options)
            .finish()
    }
}

impl ToEc2Request for RunInstances {
    const ACTION: &'static str = "RunInstances";

    fn to_query_params(&self, params: &mut Multimap) {
        params.add_list("BlockDeviceMapping", &self.block_device_mappings);
        params.add_value("ImageId", &self.image_id);
        params.add_value("InstanceType", &self.instance_type);
        params.add_value("KernelId", &self.kernel_id);
        params.add_value("KeyName", &self.key_name);
        params.add_value("MaxCount", &self.max_count);
        params.add_value("MinCount", &self.min_count);
        params.add_value("Monitoring", &self.monitoring);
        params.add_value("Placement", &self.placement);
        params.add_value("RamdiskId", &self.ramdisk_id);
        params.add_list("SecurityGroupId", &self.security_group_ids);
        params.add_list("SecurityGroup", &self.security_groups);
        params.add_value("SubnetId", &self.subnet_id);
        params.add_value("UserData", &self.user_data);
        params.add_value("AdditionalInfo", &self.additional_info);
        params.add_value("ClientToken", &self.client_token);
        params.add_value("DisableApiTermination", &self.disable_api_termination);
        params.add_value("DryRun", &self.dry_run);
        params.add_value("EbsOptimized", &self.ebs_optimized);
        params.add_value("IamInstanceProfile", &self.iam_instance_profile);
        params.add_value(
            "InstanceInitiatedShutdownBehavior",
            &self.instance_initiated_shutdown_behavior,
        );
        params.add_list("NetworkInterface", &self.network_interfaces);
        params.add_value("PrivateIpAddress", &self.private_ip_address);
        params.add_list("ElasticGpuSpecification", &self.elastic_gpu_specification);
        params.add_list(
            "ElasticInferenceAccelerator",
            &self.elastic_inference_accelerators,
        );
        params.add_list("TagSpecification", &self.tag_specifications);
        params.add_value("LaunchTemplate", &self.launch_template);
        params.add_value("InstanceMarketOptions", &self.instance_market_options);
        params.add_value("CreditSpecification", &self.credit_specification);
        params.add_value("CpuOptions", &self.cpu_options);
        params.add_value(
            "CapacityReservationSpecification",
            &self.capacity_reservation_specification,
        );
        params.add_value("HibernationOptions", &self.hibernation_options);
        params.add_list("LicenseSpecification", &self.license_specifications);
        params.add_value("MetadataOptions", &self.metadata_options);
    }
}

impl Ec2Api for RunInstances {
    type Ec2Response = Reservation;
}

impl Validate for RunInstances {
    fn validate(&self) -> Result<(), ValidationErr> {
        let max = i64::from(i32::MAX);
        check_range("MaxCount", self.max_count.map(i64::from), 1, max)?;
        check_range(
            "MinCount",
            self.min_count.map(i64::from),
            1,
            self.max_count.map_or(max, i64::from),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::types::{
        EbsBlockDevice, HttpTokensState, MarketType, ResourceType, SpotMarketOptions, Tag,
        VolumeType,
    };

    #[test]
    fn test_to_ec2request() {
        let req = RunInstances::new("ami-1", 1, 3)
            .with_instance_type(InstanceType::T3Micro)
            .with_key_name("deploy")
            .with_monitoring(true)
            .with_block_device_mappings([BlockDeviceMapping::default()
                .with_device_name("/dev/xvda")
                .with_ebs(
                    EbsBlockDevice::default()
                        .with_volume_size(20)
                        .with_volume_type(VolumeType::Gp2),
                )])
            .with_network_interfaces([InstanceNetworkInterfaceSpecification::default()
                .with_device_index(0)
                .with_subnet_id("subnet-1")
                .with_groups(["sg-1", "sg-2"])])
            .with_instance_initiated_shutdown_behavior(ShutdownBehavior::Terminate)
            .with_tag_specifications([TagSpecification::default()
                .with_resource_type(ResourceType::Instance)
                .with_tags([Tag::new("Name", "web")])])
            .to_ec2request();

        assert_eq!(req.action(), "RunInstances");
        assert_eq!(req.param("ImageId"), Some("ami-1"));
        assert_eq!(req.param("MinCount"), Some("1"));
        assert_eq!(req.param("MaxCount"), Some("3"));
        assert_eq!(req.param("InstanceType"), Some("t3.micro"));
        assert_eq!(req.param("Monitoring.Enabled"), Some("true"));
        assert_eq!(req.param("BlockDeviceMapping.1.DeviceName"), Some("/dev/xvda"));
        assert_eq!(req.param("BlockDeviceMapping.1.Ebs.VolumeSize"), Some("20"));
        assert_eq!(req.param("BlockDeviceMapping.1.Ebs.VolumeType"), Some("gp2"));
        assert_eq!(req.param("NetworkInterface.1.DeviceIndex"), Some("0"));
        assert_eq!(req.param("NetworkInterface.1.SecurityGroupId.2"), Some("sg-2"));
        assert_eq!(req.param("InstanceInitiatedShutdownBehavior"), Some("terminate"));
        assert_eq!(req.param("TagSpecification.1.ResourceType"), Some("instance"));
        assert_eq!(req.param("TagSpecification.1.Tag.1.Key"), Some("Name"));
        assert_eq!(req.param("DryRun"), None);
    }

    #[test]
    fn test_nested_options() {
        let req = RunInstances::new("ami-1", 1, 1)
            .with_instance_market_options(
                InstanceMarketOptionsRequest::default()
                    .with_market_type(MarketType::Spot)
                    .with_spot_options(SpotMarketOptions::default().with_max_price("0.05")),
            )
            .with_cpu_options(CpuOptions::default().with_core_count(2).with_threads_per_core(1))
            .with_metadata_options(
                InstanceMetadataOptions::default().with_http_tokens(HttpTokensState::Required),
            )
            .with_license_specifications([LicenseConfiguration::default()
                .with_license_configuration_arn("arn:aws:license-manager:lc-1")])
            .to_ec2request();

        assert_eq!(req.param("InstanceMarketOptions.MarketType"), Some("spot"));
        assert_eq!(
            req.param("InstanceMarketOptions.SpotOptions.MaxPrice"),
            Some("0.05")
        );
        assert_eq!(req.param("CpuOptions.CoreCount"), Some("2"));
        assert_eq!(req.param("CpuOptions.ThreadsPerCore"), Some("1"));
        assert_eq!(req.param("MetadataOptions.HttpTokens"), Some("required"));
        assert_eq!(
            req.param("LicenseSpecification.1.LicenseConfigurationArn"),
            Some("arn:aws:license-manager:lc-1")
        );
    }

    #[test]
    fn test_validate_counts() {
        assert!(RunInstances::default().validate().is_ok());
        assert!(RunInstances::new("ami-1", 2, 2).validate().is_ok());
        assert_eq!(
            RunInstances::new("ami-1", 3, 2).validate(),
            Err(ValidationErr::ValueOutOfRange {
                name: "MinCount",
                value: 3,
                min: 1,
                max: 2,
            })
        );
        assert!(RunInstances::new("ami-1", 0, 2).validate().is_err());
        assert!(
            RunInstances::default()
                .with_max_count(0)
                .validate()
                .is_err()
        );
    }
}

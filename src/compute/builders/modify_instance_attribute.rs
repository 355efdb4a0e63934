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
    AttributeBooleanValue, AttributeValue, BlobAttributeValue, InstanceAttributeName,
    InstanceBlockDeviceMappingSpecification, ToEc2Request, Validate,
};
use crate::compute::utils::{DisplayFields, check_exclusive};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Argument builder for the [`ModifyInstanceAttribute`](https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_ModifyInstanceAttribute.html) EC2 API operation.
///
/// Modifies one attribute of an instance per request. The attribute is given either through
/// its dedicated field (`source_dest_check`, `instance_type`, ...) or through the generic
/// `attribute` / `value` pair.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyInstanceAttribute {
    source_dest_check: Option<AttributeBooleanValue>,
    attribute: Option<InstanceAttributeName>,
    block_device_mappings: Option<Vec<InstanceBlockDeviceMappingSpecification>>,
    disable_api_termination: Option<AttributeBooleanValue>,
    dry_run: Option<bool>,
    ebs_optimized: Option<AttributeBooleanValue>,
    ena_support: Option<AttributeBooleanValue>,
    groups: Option<Vec<String>>,
    instance_id: Option<String>,
    instance_initiated_shutdown_behavior: Option<AttributeValue>,
    instance_type: Option<AttributeValue>,
    kernel: Option<AttributeValue>,
    ramdisk: Option<AttributeValue>,
    sriov_net_support: Option<AttributeValue>,
    user_data: Option<BlobAttributeValue>,
    value: Option<String>,
}

impl ModifyInstanceAttribute {
    value_accessors!(
        /// Whether source/destination checking is enabled. Must be `false` for a NAT instance.
        source_dest_check, set_source_dest_check, with_source_dest_check: AttributeBooleanValue
    );
    value_accessors!(attribute, set_attribute, with_attribute: InstanceAttributeName);
    list_accessors!(
        /// Changes `DeleteOnTermination` of attached EBS volumes.
        block_device_mappings,
        set_block_device_mappings,
        with_block_device_mappings: InstanceBlockDeviceMappingSpecification
    );
    value_accessors!(
        disable_api_termination,
        set_disable_api_termination,
        with_disable_api_termination: AttributeBooleanValue
    );
    copy_accessors!(dry_run, set_dry_run, with_dry_run: bool);
    value_accessors!(ebs_optimized, set_ebs_optimized, with_ebs_optimized: AttributeBooleanValue);
    value_accessors!(ena_support, set_ena_support, with_ena_support: AttributeBooleanValue);
    list_accessors!(
        /// Replaces the security groups of a VPC instance; at least one group id.
        groups, set_groups, with_groups: String
    );
    value_accessors!(instance_id, set_instance_id, with_instance_id: String);
    value_accessors!(
        /// `stop` or `terminate`.
        instance_initiated_shutdown_behavior,
        set_instance_initiated_shutdown_behavior,
        with_instance_initiated_shutdown_behavior: AttributeValue
    );
    value_accessors!(instance_type, set_instance_type, with_instance_type: AttributeValue);
    value_accessors!(kernel, set_kernel, with_kernel: AttributeValue);
    value_accessors!(ramdisk, set_ramdisk, with_ramdisk: AttributeValue);
    value_accessors!(
        /// Only `simple` is supported.
        sriov_net_support, set_sriov_net_support, with_sriov_net_support: AttributeValue
    );
    value_accessors!(
        /// Raw user data; base64 encoding happens on marshalling.
        user_data, set_user_data, with_user_data: BlobAttributeValue
    );
    value_accessors!(
        /// New value of `attribute`. Only for attributes without a dedicated field.
        value, set_value, with_value: String
    );
}

impl fmt::Display for ModifyInstanceAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("SourceDestCheck", &self.source_dest_check)
            .field("Attribute", &self.attribute)
            .list("BlockDeviceMappings", &self.block_device_mappings)
            .field("DisableApiTermination", &self.disable_api_termination)
            .field("DryRun", &self.dry_run)
            .field("EbsOptimized", &self.ebs_optimized)
            .field("EnaSupport", &self.ena_support)
            .list("Groups", &self.groups)
            .field("InstanceId", &self.instance_id)
            .field(
                "InstanceInitiatedShutdownBehavior",
                &self.instance_initiated_shutdown_behavior,
            )
            .field("InstanceType", &self.instance_type)
            .field("Kernel", &self.kernel)
            .field("Ramdisk", &self.ramdisk)
            .field("SriovNetSupport", &self.sriov_net_support)
            .field("UserData", &self.user_data)
            .field("Value", &self.value)
            .finish()
    }
}

impl ToEc2Request for ModifyInstanceAttribute {
    const ACTION: &'static str = "ModifyInstanceAttribute";

    fn to_query_params(&self, params: &mut Multimap) {
        params.add_value("SourceDestCheck", &self.source_dest_check);
        params.add_value("Attribute", &self.attribute);
        params.add_list("BlockDeviceMapping", &self.block_device_mappings);
        params.add_value("DisableApiTermination", &self.disable_api_termination);
        params.add_value("DryRun", &self.dry_run);
        params.add_value("EbsOptimized", &self.ebs_optimized);
        params.add_value("EnaSupport", &self.ena_support);
        params.add_list("GroupId", &self.groups);
        params.add_value("InstanceId", &self.instance_id);
        params.add_value(
            "InstanceInitiatedShutdownBehavior",
            &self.instance_initiated_shutdown_behavior,
        );
        params.add_value("InstanceType", &self.instance_type);
        params.add_value("Kernel", &self.kernel);
        params.add_value("Ramdisk", &self.ramdisk);
        params.add_value("SriovNetSupport", &self.sriov_net_support);
        params.add_value("UserData", &self.user_data);
        params.add_value("Value", &self.value);
    }
}

impl Validate for ModifyInstanceAttribute {
    fn validate(&self) -> Result<(), ValidationErr> {
        let dedicated = [
            self.source_dest_check.is_some(),
            self.block_device_mappings.is_some(),
            self.disable_api_termination.is_some(),
            self.ebs_optimized.is_some(),
            self.ena_support.is_some(),
            self.groups.is_some(),
            self.instance_initiated_shutdown_behavior.is_some(),
            self.instance_type.is_some(),
            self.kernel.is_some(),
            self.ramdisk.is_some(),
            self.sriov_net_support.is_some(),
            self.user_data.is_some(),
        ];
        check_exclusive(
            "Value",
            self.value.is_some(),
            "a dedicated attribute field",
            dedicated.contains(&true),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedicated_fields_use_value_member() {
        let req = ModifyInstanceAttribute::default()
            .with_instance_id("i-1234")
            .with_source_dest_check(false)
            .with_instance_type("m5.large")
            .with_user_data(b"#!/bin/sh".to_vec())
            .to_ec2request();

        assert_eq!(req.action(), "ModifyInstanceAttribute");
        assert_eq!(req.param("InstanceId"), Some("i-1234"));
        assert_eq!(req.param("SourceDestCheck.Value"), Some("false"));
        assert_eq!(req.param("InstanceType.Value"), Some("m5.large"));
        assert_eq!(req.param("UserData.Value"), Some("IyEvYmluL3No"));
        assert_eq!(req.param("SourceDestCheck"), None);
    }

    #[test]
    fn test_attribute_value_pair() {
        let req = ModifyInstanceAttribute::default()
            .with_instance_id("i-1234")
            .with_attribute(InstanceAttributeName::Kernel)
            .with_value("aki-1")
            .to_ec2request();
        assert_eq!(req.param("Attribute"), Some("kernel"));
        assert_eq!(req.param("Value"), Some("aki-1"));
    }

    #[test]
    fn test_groups_and_block_devices() {
        use crate::compute::types::EbsInstanceBlockDeviceSpecification;

        let req = ModifyInstanceAttribute::default()
            .with_groups(["sg-1"])
            .with_groups(["sg-2"])
            .with_block_device_mappings([InstanceBlockDeviceMappingSpecification::default()
                .with_device_name("/dev/sda1")
                .with_ebs(EbsInstanceBlockDeviceSpecification::default().with_delete_on_termination(false))])
            .to_ec2request();
        assert_eq!(req.param("GroupId.1"), Some("sg-1"));
        assert_eq!(req.param("GroupId.2"), Some("sg-2"));
        assert_eq!(req.param("BlockDeviceMapping.1.DeviceName"), Some("/dev/sda1"));
        assert_eq!(
            req.param("BlockDeviceMapping.1.Ebs.DeleteOnTermination"),
            Some("false")
        );
    }

    #[test]
    fn test_display_nested_values() {
        let request = ModifyInstanceAttribute::default()
            .with_instance_id("i-1")
            .with_ena_support(true);
        assert_eq!(
            request.to_string(),
            "{EnaSupport: {Value: true}, InstanceId: i-1}"
        );
    }

    #[test]
    fn test_validate_value_with_dedicated_field() {
        let request = ModifyInstanceAttribute::default()
            .with_attribute(InstanceAttributeName::Kernel)
            .with_value("aki-1");
        assert!(request.validate().is_ok());
        assert!(request.with_kernel("aki-2").validate().is_err());
    }
}

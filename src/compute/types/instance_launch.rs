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

//! Launch parameters sent with `RunInstances`, without a counterpart in instance descriptions

use crate::compute::multimap_ext::{Multimap, MultimapExt, QueryValue};
use crate::compute::types::{MarketType, SpotInstanceInterruptionBehavior, SpotInstanceType};
use crate::compute::utils::{DisplayFields, UtcTime};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RunInstancesMonitoringEnabled {
    enabled: Option<bool>,
}

impl RunInstancesMonitoringEnabled {
    pub fn new(enabled: bool) -> Self {
        RunInstancesMonitoringEnabled {
            enabled: Some(enabled),
        }
    }

    copy_accessors!(
        /// Detailed monitoring when `true`, basic monitoring otherwise.
        enabled, set_enabled, with_enabled: bool
    );
}

impl From<bool> for RunInstancesMonitoringEnabled {
    fn from(enabled: bool) -> Self {
        Self::new(enabled)
    }
}

impl fmt::Display for RunInstancesMonitoringEnabled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f).field("Enabled", &self.enabled).finish()
    }
}

impl QueryValue for RunInstancesMonitoringEnabled {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add_value(&format!("{name}.Enabled"), &self.enabled);
    }
}

/// IAM instance profile, by ARN or by name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IamInstanceProfileSpecification {
    arn: Option<String>,
    name: Option<String>,
}

impl IamInstanceProfileSpecification {
    value_accessors!(arn, set_arn, with_arn: String);
    value_accessors!(name, set_name, with_name: String);
}

impl fmt::Display for IamInstanceProfileSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("Arn", &self.arn)
            .field("Name", &self.name)
            .finish()
    }
}

impl QueryValue for IamInstanceProfileSpecification {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add_value(&format!("{name}.Arn"), &self.arn);
        params.add_value(&format!("{name}.Name"), &self.name);
    }
}

/// Network interface to create or attach at launch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceNetworkInterfaceSpecification {
    associate_public_ip_address: Option<bool>,
    delete_on_termination: Option<bool>,
    description: Option<String>,
    device_index: Option<i32>,
    groups: Option<Vec<String>>,
    network_interface_id: Option<String>,
    private_ip_address: Option<String>,
    secondary_private_ip_address_count: Option<i32>,
    subnet_id: Option<String>,
    interface_type: Option<String>,
}

impl InstanceNetworkInterfaceSpecification {
    copy_accessors!(
        /// Only applies to a new network interface with device index 0.
        associate_public_ip_address,
        set_associate_public_ip_address,
        with_associate_public_ip_address: bool
    );
    copy_accessors!(
        delete_on_termination,
        set_delete_on_termination,
        with_delete_on_termination: bool
    );
    value_accessors!(description, set_description, with_description: String);
    copy_accessors!(device_index, set_device_index, with_device_index: i32);
    list_accessors!(
        /// Security group ids of a new network interface.
        groups, set_groups, with_groups: String
    );
    value_accessors!(
        network_interface_id,
        set_network_interface_id,
        with_network_interface_id: String
    );
    value_accessors!(
        private_ip_address,
        set_private_ip_address,
        with_private_ip_address: String
    );
    copy_accessors!(
        secondary_private_ip_address_count,
        set_secondary_private_ip_address_count,
        with_secondary_private_ip_address_count: i32
    );
    value_accessors!(subnet_id, set_subnet_id, with_subnet_id: String);
    value_accessors!(interface_type, set_interface_type, with_interface_type: String);
}

impl fmt::Display for InstanceNetworkInterfaceSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("AssociatePublicIpAddress", &self.associate_public_ip_address)
            .field("DeleteOnTermination", &self.delete_on_termination)
            .field("Description", &self.description)
            .field("DeviceIndex", &self.device_index)
            .list("Groups", &self.groups)
            .field("NetworkInterfaceId", &self.network_interface_id)
            .field("PrivateIpAddress", &self.private_ip_address)
            .field(
                "SecondaryPrivateIpAddressCount",
                &self.secondary_private_ip_address_count,
            )
            .field("SubnetId", &self.subnet_id)
            .field("InterfaceType", &self.interface_type)
            .finish()
    }
}

impl QueryValue for InstanceNetworkInterfaceSpecification {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add_value(
            &format!("{name}.AssociatePublicIpAddress"),
            &self.associate_public_ip_address,
        );
        params.add_value(
            &format!("{name}.DeleteOnTermination"),
            &self.delete_on_termination,
        );
        params.add_value(&format!("{name}.Description"), &self.description);
        params.add_value(&format!("{name}.DeviceIndex"), &self.device_index);
        // groups travel as SecurityGroupId.N inside a network interface
        params.add_list(&format!("{name}.SecurityGroupId"), &self.groups);
        params.add_value(
            &format!("{name}.NetworkInterfaceId"),
            &self.network_interface_id,
        );
        params.add_value(&format!("{name}.PrivateIpAddress"), &self.private_ip_address);
        params.add_value(
            &format!("{name}.SecondaryPrivateIpAddressCount"),
            &self.secondary_private_ip_address_count,
        );
        params.add_value(&format!("{name}.SubnetId"), &self.subnet_id);
        params.add_value(&format!("{name}.InterfaceType"), &self.interface_type);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElasticGpuSpecification {
    #[serde(rename = "Type")]
    gpu_type: Option<String>,
}

impl ElasticGpuSpecification {
    value_accessors!(
        /// Elastic Graphics accelerator type, e.g. `eg1.medium`.
        gpu_type, set_gpu_type, with_gpu_type: String
    );
}

impl fmt::Display for ElasticGpuSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f).field("Type", &self.gpu_type).finish()
    }
}

impl QueryValue for ElasticGpuSpecification {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add_value(&format!("{name}.Type"), &self.gpu_type);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElasticInferenceAccelerator {
    #[serde(rename = "Type")]
    accelerator_type: Option<String>,
    count: Option<i32>,
}

impl ElasticInferenceAccelerator {
    value_accessors!(
        /// `eia1.medium`, `eia1.large` or `eia1.xlarge`.
        accelerator_type, set_accelerator_type, with_accelerator_type: String
    );
    copy_accessors!(count, set_count, with_count: i32);
}

impl fmt::Display for ElasticInferenceAccelerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("Type", &self.accelerator_type)
            .field("Count", &self.count)
            .finish()
    }
}

impl QueryValue for ElasticInferenceAccelerator {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add_value(&format!("{name}.Type"), &self.accelerator_type);
        params.add_value(&format!("{name}.Count"), &self.count);
    }
}

/// Launch template to take launch parameters from, by id or by name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LaunchTemplateSpecification {
    launch_template_id: Option<String>,
    launch_template_name: Option<String>,
    version: Option<String>,
}

impl LaunchTemplateSpecification {
    value_accessors!(launch_template_id, set_launch_template_id, with_launch_template_id: String);
    value_accessors!(
        launch_template_name,
        set_launch_template_name,
        with_launch_template_name: String
    );
    value_accessors!(
        /// A version number, `$Latest` or `$Default`.
        version, set_version, with_version: String
    );
}

impl fmt::Display for LaunchTemplateSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("LaunchTemplateId", &self.launch_template_id)
            .field("LaunchTemplateName", &self.launch_template_name)
            .field("Version", &self.version)
            .finish()
    }
}

impl QueryValue for LaunchTemplateSpecification {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add_value(&format!("{name}.LaunchTemplateId"), &self.launch_template_id);
        params.add_value(
            &format!("{name}.LaunchTemplateName"),
            &self.launch_template_name,
        );
        params.add_value(&format!("{name}.Version"), &self.version);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceMarketOptionsRequest {
    market_type: Option<MarketType>,
    spot_options: Option<SpotMarketOptions>,
}

impl InstanceMarketOptionsRequest {
    value_accessors!(market_type, set_market_type, with_market_type: MarketType);
    value_accessors!(spot_options, set_spot_options, with_spot_options: SpotMarketOptions);
}

impl fmt::Display for InstanceMarketOptionsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("MarketType", &self.market_type)
            .field("SpotOptions", &self.spot_options)
            .finish()
    }
}

impl QueryValue for InstanceMarketOptionsRequest {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add_value(&format!("{name}.MarketType"), &self.market_type);
        params.add_value(&format!("{name}.SpotOptions"), &self.spot_options);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpotMarketOptions {
    max_price: Option<String>,
    spot_instance_type: Option<SpotInstanceType>,
    block_duration_minutes: Option<i32>,
    valid_until: Option<UtcTime>,
    instance_interruption_behavior: Option<SpotInstanceInterruptionBehavior>,
}

impl SpotMarketOptions {
    value_accessors!(
        /// Hourly maximum price; defaults to the On-Demand price.
        max_price, set_max_price, with_max_price: String
    );
    value_accessors!(
        spot_instance_type,
        set_spot_instance_type,
        with_spot_instance_type: SpotInstanceType
    );
    copy_accessors!(
        /// Multiple of 60, up to 360.
        block_duration_minutes, set_block_duration_minutes, with_block_duration_minutes: i32
    );
    copy_accessors!(valid_until, set_valid_until, with_valid_until: UtcTime);
    value_accessors!(
        instance_interruption_behavior,
        set_instance_interruption_behavior,
        with_instance_interruption_behavior: SpotInstanceInterruptionBehavior
    );
}

impl fmt::Display for SpotMarketOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("MaxPrice", &self.max_price)
            .field("SpotInstanceType", &self.spot_instance_type)
            .field("BlockDurationMinutes", &self.block_duration_minutes)
            .field("ValidUntil", &self.valid_until)
            .field(
                "InstanceInterruptionBehavior",
                &self.instance_interruption_behavior,
            )
            .finish()
    }
}

impl QueryValue for SpotMarketOptions {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add_value(&format!("{name}.MaxPrice"), &self.max_price);
        params.add_value(&format!("{name}.SpotInstanceType"), &self.spot_instance_type);
        params.add_value(
            &format!("{name}.BlockDurationMinutes"),
            &self.block_duration_minutes,
        );
        params.add_value(&format!("{name}.ValidUntil"), &self.valid_until);
        params.add_value(
            &format!("{name}.InstanceInterruptionBehavior"),
            &self.instance_interruption_behavior,
        );
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreditSpecificationRequest {
    cpu_credits: Option<String>,
}

impl CreditSpecificationRequest {
    value_accessors!(
        /// `standard` or `unlimited`, for burstable instance types.
        cpu_credits, set_cpu_credits, with_cpu_credits: String
    );
}

impl fmt::Display for CreditSpecificationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("CpuCredits", &self.cpu_credits)
            .finish()
    }
}

impl QueryValue for CreditSpecificationRequest {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add_value(&format!("{name}.CpuCredits"), &self.cpu_credits);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_network_interface_groups() {
        let mut params = Multimap::new();
        InstanceNetworkInterfaceSpecification::default()
            .with_device_index(0)
            .with_associate_public_ip_address(true)
            .with_groups(["sg-1", "sg-2"])
            .write_query("NetworkInterface.1", &mut params);
        assert_eq!(params.single("NetworkInterface.1.DeviceIndex"), Some("0"));
        assert_eq!(
            params.single("NetworkInterface.1.AssociatePublicIpAddress"),
            Some("true")
        );
        assert_eq!(params.single("NetworkInterface.1.SecurityGroupId.2"), Some("sg-2"));
        assert_eq!(params.single("NetworkInterface.1.Groups.1"), None);
    }

    #[test]
    fn test_spot_market_options() {
        let mut params = Multimap::new();
        InstanceMarketOptionsRequest::default()
            .with_market_type(MarketType::Spot)
            .with_spot_options(
                SpotMarketOptions::default()
                    .with_max_price("0.05")
                    .with_spot_instance_type(SpotInstanceType::OneTime)
                    .with_valid_until(Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()),
            )
            .write_query("InstanceMarketOptions", &mut params);
        assert_eq!(params.single("InstanceMarketOptions.MarketType"), Some("spot"));
        assert_eq!(
            params.single("InstanceMarketOptions.SpotOptions.SpotInstanceType"),
            Some("one-time")
        );
        assert_eq!(
            params.single("InstanceMarketOptions.SpotOptions.ValidUntil"),
            Some("2030-01-01T00:00:00.000Z")
        );
    }

    #[test]
    fn test_type_member_names() {
        let gpu = ElasticGpuSpecification::default().with_gpu_type("eg1.medium");
        assert_eq!(gpu.to_string(), "{Type: eg1.medium}");
        assert_eq!(serde_json::to_value(&gpu).unwrap()["Type"], "eg1.medium");
    }
}

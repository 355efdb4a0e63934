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

use crate::compute::multimap_ext::{Multimap, MultimapExt, QueryValue};
use crate::compute::types::{
    ArchitectureValues, DeviceType, HypervisorType, ImageState, ImageTypeValues, PlatformValues,
    ProductCodeValues, Tag, VirtualizationType, VolumeType,
};
use crate::compute::utils::DisplayFields;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Describes an image (AMI).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Image {
    architecture: Option<ArchitectureValues>,
    creation_date: Option<String>,
    image_id: Option<String>,
    image_location: Option<String>,
    image_type: Option<ImageTypeValues>,
    public: Option<bool>,
    kernel_id: Option<String>,
    owner_id: Option<String>,
    platform: Option<PlatformValues>,
    platform_details: Option<String>,
    usage_operation: Option<String>,
    product_codes: Option<Vec<ProductCode>>,
    ramdisk_id: Option<String>,
    state: Option<ImageState>,
    block_device_mappings: Option<Vec<BlockDeviceMapping>>,
    description: Option<String>,
    ena_support: Option<bool>,
    hypervisor: Option<HypervisorType>,
    image_owner_alias: Option<String>,
    name: Option<String>,
    root_device_name: Option<String>,
    root_device_type: Option<DeviceType>,
    sriov_net_support: Option<String>,
    state_reason: Option<StateReason>,
    tags: Option<Vec<Tag>>,
    virtualization_type: Option<VirtualizationType>,
}

impl Image {
    value_accessors!(architecture, set_architecture, with_architecture: ArchitectureValues);
    value_accessors!(
        /// Creation date as reported by the service, kept verbatim.
        creation_date, set_creation_date, with_creation_date: String
    );
    value_accessors!(image_id, set_image_id, with_image_id: String);
    value_accessors!(image_location, set_image_location, with_image_location: String);
    value_accessors!(image_type, set_image_type, with_image_type: ImageTypeValues);
    copy_accessors!(
        /// Whether the image has public launch permissions.
        public, set_public, with_public: bool
    );
    value_accessors!(kernel_id, set_kernel_id, with_kernel_id: String);
    value_accessors!(owner_id, set_owner_id, with_owner_id: String);
    value_accessors!(
        /// `Windows` for Windows AMIs, absent otherwise.
        platform, set_platform, with_platform: PlatformValues
    );
    value_accessors!(platform_details, set_platform_details, with_platform_details: String);
    value_accessors!(usage_operation, set_usage_operation, with_usage_operation: String);
    list_accessors!(product_codes, set_product_codes, with_product_codes: ProductCode);
    value_accessors!(ramdisk_id, set_ramdisk_id, with_ramdisk_id: String);
    value_accessors!(state, set_state, with_state: ImageState);
    list_accessors!(
        block_device_mappings,
        set_block_device_mappings,
        with_block_device_mappings: BlockDeviceMapping
    );
    value_accessors!(description, set_description, with_description: String);
    copy_accessors!(ena_support, set_ena_support, with_ena_support: bool);
    value_accessors!(hypervisor, set_hypervisor, with_hypervisor: HypervisorType);
    value_accessors!(
        /// AWS account alias (`amazon`, `self`) or account id of the owner.
        image_owner_alias, set_image_owner_alias, with_image_owner_alias: String
    );
    value_accessors!(name, set_name, with_name: String);
    value_accessors!(root_device_name, set_root_device_name, with_root_device_name: String);
    value_accessors!(root_device_type, set_root_device_type, with_root_device_type: DeviceType);
    value_accessors!(sriov_net_support, set_sriov_net_support, with_sriov_net_support: String);
    value_accessors!(state_reason, set_state_reason, with_state_reason: StateReason);
    list_accessors!(tags, set_tags, with_tags: Tag);
    value_accessors!(
        virtualization_type,
        set_virtualization_type,
        with_virtualization_type: VirtualizationType
    );
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("Architecture", &self.architecture)
            .field("CreationDate", &self.creation_date)
            .field("ImageId", &self.image_id)
            .field("ImageLocation", &self.image_location)
            .field("ImageType", &self.image_type)
            .field("Public", &self.public)
            .field("KernelId", &self.kernel_id)
            .field("OwnerId", &self.owner_id)
            .field("Platform", &self.platform)
            .field("PlatformDetails", &self.platform_details)
            .field("UsageOperation", &self.usage_operation)
            .list("ProductCodes", &self.product_codes)
            .field("RamdiskId", &self.ramdisk_id)
            .field("State", &self.state)
            .list("BlockDeviceMappings", &self.block_device_mappings)
            .field("Description", &self.description)
            .field("EnaSupport", &self.ena_support)
            .field("Hypervisor", &self.hypervisor)
            .field("ImageOwnerAlias", &self.image_owner_alias)
            .field("Name", &self.name)
            .field("RootDeviceName", &self.root_device_name)
            .field("RootDeviceType", &self.root_device_type)
            .field("SriovNetSupport", &self.sriov_net_support)
            .field("StateReason", &self.state_reason)
            .list("Tags", &self.tags)
            .field("VirtualizationType", &self.virtualization_type)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductCode {
    product_code_id: Option<String>,
    product_code_type: Option<ProductCodeValues>,
}

impl ProductCode {
    value_accessors!(product_code_id, set_product_code_id, with_product_code_id: String);
    value_accessors!(product_code_type, set_product_code_type, with_product_code_type: ProductCodeValues);
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("ProductCodeId", &self.product_code_id)
            .field("ProductCodeType", &self.product_code_type)
            .finish()
    }
}

/// A block device mapping of an image.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BlockDeviceMapping {
    device_name: Option<String>,
    virtual_name: Option<String>,
    ebs: Option<EbsBlockDevice>,
    no_device: Option<String>,
}

impl BlockDeviceMapping {
    value_accessors!(
        /// Device name, e.g. `/dev/sdh` or `xvdh`.
        device_name, set_device_name, with_device_name: String
    );
    value_accessors!(
        /// Instance store volume name, `ephemeralN`.
        virtual_name, set_virtual_name, with_virtual_name: String
    );
    value_accessors!(ebs, set_ebs, with_ebs: EbsBlockDevice);
    value_accessors!(
        /// Suppresses the device mapping from the image when set.
        no_device, set_no_device, with_no_device: String
    );
}

impl fmt::Display for BlockDeviceMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("DeviceName", &self.device_name)
            .field("VirtualName", &self.virtual_name)
            .field("Ebs", &self.ebs)
            .field("NoDevice", &self.no_device)
            .finish()
    }
}

impl QueryValue for BlockDeviceMapping {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add_value(&format!("{name}.DeviceName"), &self.device_name);
        params.add_value(&format!("{name}.VirtualName"), &self.virtual_name);
        params.add_value(&format!("{name}.Ebs"), &self.ebs);
        params.add_value(&format!("{name}.NoDevice"), &self.no_device);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EbsBlockDevice {
    delete_on_termination: Option<bool>,
    iops: Option<i32>,
    snapshot_id: Option<String>,
    volume_size: Option<i32>,
    volume_type: Option<VolumeType>,
    kms_key_id: Option<String>,
    encrypted: Option<bool>,
}

impl EbsBlockDevice {
    copy_accessors!(
        delete_on_termination,
        set_delete_on_termination,
        with_delete_on_termination: bool
    );
    copy_accessors!(iops, set_iops, with_iops: i32);
    value_accessors!(snapshot_id, set_snapshot_id, with_snapshot_id: String);
    copy_accessors!(
        /// Size in GiB.
        volume_size, set_volume_size, with_volume_size: i32
    );
    value_accessors!(volume_type, set_volume_type, with_volume_type: VolumeType);
    value_accessors!(kms_key_id, set_kms_key_id, with_kms_key_id: String);
    copy_accessors!(encrypted, set_encrypted, with_encrypted: bool);
}

impl fmt::Display for EbsBlockDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("DeleteOnTermination", &self.delete_on_termination)
            .field("Iops", &self.iops)
            .field("SnapshotId", &self.snapshot_id)
            .field("VolumeSize", &self.volume_size)
            .field("VolumeType", &self.volume_type)
            .field("KmsKeyId", &self.kms_key_id)
            .field("Encrypted", &self.encrypted)
            .finish()
    }
}

impl QueryValue for EbsBlockDevice {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add_value(
            &format!("{name}.DeleteOnTermination"),
            &self.delete_on_termination,
        );
        params.add_value(&format!("{name}.Iops"), &self.iops);
        params.add_value(&format!("{name}.SnapshotId"), &self.snapshot_id);
        params.add_value(&format!("{name}.VolumeSize"), &self.volume_size);
        params.add_value(&format!("{name}.VolumeType"), &self.volume_type);
        params.add_value(&format!("{name}.KmsKeyId"), &self.kms_key_id);
        params.add_value(&format!("{name}.Encrypted"), &self.encrypted);
    }
}

/// Reason for the most recent state transition.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StateReason {
    code: Option<String>,
    message: Option<String>,
}

impl StateReason {
    value_accessors!(code, set_code, with_code: String);
    value_accessors!(message, set_message, with_message: String);
}

impl fmt::Display for StateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("Code", &self.code)
            .field("Message", &self.message)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_field() {
        let image = Image::default().with_public(false);
        assert_eq!(image.public(), Some(false));
        assert_eq!(image.to_string(), "{Public: false}");
    }

    #[test]
    fn test_absent_and_empty_lists_differ() {
        let mut image = Image::default();
        image.set_block_device_mappings(Some(vec![]));
        assert_eq!(image.block_device_mappings(), Some(&[][..]));
        assert_ne!(image, Image::default());

        image.set_block_device_mappings(None);
        assert_eq!(image.block_device_mappings(), None);
        assert_eq!(image, Image::default());
    }

    #[test]
    fn test_nested_display() {
        let image = Image::default()
            .with_image_id("ami-1")
            .with_block_device_mappings([BlockDeviceMapping::default()
                .with_device_name("/dev/xvda")
                .with_ebs(EbsBlockDevice::default().with_volume_size(8).with_volume_type("gp2"))]);
        assert_eq!(
            image.to_string(),
            "{ImageId: ami-1, BlockDeviceMappings: [{DeviceName: /dev/xvda, Ebs: {VolumeSize: 8, VolumeType: gp2}}]}"
        );
    }

    #[test]
    fn test_block_device_mapping_query() {
        let mut params = Multimap::new();
        BlockDeviceMapping::default()
            .with_device_name("/dev/sdh")
            .with_ebs(EbsBlockDevice::default().with_volume_size(100).with_encrypted(true))
            .write_query("BlockDeviceMapping.1", &mut params);
        assert_eq!(params.single("BlockDeviceMapping.1.DeviceName"), Some("/dev/sdh"));
        assert_eq!(params.single("BlockDeviceMapping.1.Ebs.VolumeSize"), Some("100"));
        assert_eq!(params.single("BlockDeviceMapping.1.Ebs.Encrypted"), Some("true"));
        assert_eq!(params.single("BlockDeviceMapping.1.NoDevice"), None);
    }

    #[test]
    fn test_serde_names() {
        let image = Image::default()
            .with_image_id("ami-1")
            .with_state(ImageState::Available);
        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(json["ImageId"], "ami-1");
        assert_eq!(json["State"], "available");
        assert!(json["Public"].is_null());
    }
}

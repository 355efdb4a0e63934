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

//! Wrapped attribute values used by `ModifyInstanceAttribute`
//!
//! The Query API nests each modified attribute under a `.Value` member, e.g.
//! `SourceDestCheck.Value=false`.

use crate::compute::multimap_ext::{Multimap, MultimapExt, QueryValue};
use crate::compute::utils::{DisplayFields, b64encode};
use serde::{Deserialize, Serialize};
use std::fmt;

// region: wrapped values

/// A string attribute value
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeValue {
    value: Option<String>,
}

impl AttributeValue {
    pub fn new(value: impl Into<String>) -> Self {
        AttributeValue {
            value: Some(value.into()),
        }
    }

    value_accessors!(value, set_value, with_value: String);
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::new(value)
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::new(value)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f).field("Value", &self.value).finish()
    }
}

impl QueryValue for AttributeValue {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add_value(&format!("{name}.Value"), &self.value);
    }
}

/// A boolean attribute value
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeBooleanValue {
    value: Option<bool>,
}

impl AttributeBooleanValue {
    pub fn new(value: bool) -> Self {
        AttributeBooleanValue { value: Some(value) }
    }

    copy_accessors!(value, set_value, with_value: bool);
}

impl From<bool> for AttributeBooleanValue {
    fn from(value: bool) -> Self {
        AttributeBooleanValue::new(value)
    }
}

impl fmt::Display for AttributeBooleanValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f).field("Value", &self.value).finish()
    }
}

impl QueryValue for AttributeBooleanValue {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add_value(&format!("{name}.Value"), &self.value);
    }
}

/// A binary attribute value; base64 encoded on the wire
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BlobAttributeValue {
    value: Option<Vec<u8>>,
}

impl BlobAttributeValue {
    pub fn new(value: impl Into<Vec<u8>>) -> Self {
        BlobAttributeValue {
            value: Some(value.into()),
        }
    }

    value_accessors!(value, set_value, with_value: Vec<u8>);
}

impl From<Vec<u8>> for BlobAttributeValue {
    fn from(value: Vec<u8>) -> Self {
        BlobAttributeValue::new(value)
    }
}

impl From<&[u8]> for BlobAttributeValue {
    fn from(value: &[u8]) -> Self {
        BlobAttributeValue::new(value)
    }
}

impl fmt::Display for BlobAttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = self.value.as_ref().map(b64encode);
        DisplayFields::new(f).field("Value", &encoded).finish()
    }
}

impl QueryValue for BlobAttributeValue {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add_value(&format!("{name}.Value"), &self.value);
    }
}

// endregion: wrapped values

// region: block device mappings

/// A block device mapping entry to change on a running instance
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceBlockDeviceMappingSpecification {
    device_name: Option<String>,
    ebs: Option<EbsInstanceBlockDeviceSpecification>,
    no_device: Option<String>,
    virtual_name: Option<String>,
}

impl InstanceBlockDeviceMappingSpecification {
    value_accessors!(
        /// Device name, e.g. `/dev/sdh`.
        device_name, set_device_name, with_device_name: String
    );
    value_accessors!(ebs, set_ebs, with_ebs: EbsInstanceBlockDeviceSpecification);
    value_accessors!(
        /// Suppresses the device from the mapping when set.
        no_device, set_no_device, with_no_device: String
    );
    value_accessors!(virtual_name, set_virtual_name, with_virtual_name: String);
}

impl fmt::Display for InstanceBlockDeviceMappingSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("DeviceName", &self.device_name)
            .field("Ebs", &self.ebs)
            .field("NoDevice", &self.no_device)
            .field("VirtualName", &self.virtual_name)
            .finish()
    }
}

impl QueryValue for InstanceBlockDeviceMappingSpecification {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add_value(&format!("{name}.DeviceName"), &self.device_name);
        params.add_value(&format!("{name}.Ebs"), &self.ebs);
        params.add_value(&format!("{name}.NoDevice"), &self.no_device);
        params.add_value(&format!("{name}.VirtualName"), &self.virtual_name);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EbsInstanceBlockDeviceSpecification {
    delete_on_termination: Option<bool>,
    volume_id: Option<String>,
}

impl EbsInstanceBlockDeviceSpecification {
    copy_accessors!(
        delete_on_termination,
        set_delete_on_termination,
        with_delete_on_termination: bool
    );
    value_accessors!(volume_id, set_volume_id, with_volume_id: String);
}

impl fmt::Display for EbsInstanceBlockDeviceSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("DeleteOnTermination", &self.delete_on_termination)
            .field("VolumeId", &self.volume_id)
            .finish()
    }
}

impl QueryValue for EbsInstanceBlockDeviceSpecification {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add_value(
            &format!("{name}.DeleteOnTermination"),
            &self.delete_on_termination,
        );
        params.add_value(&format!("{name}.VolumeId"), &self.volume_id);
    }
}

// endregion: block device mappings

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_values_write_value_member() {
        let mut params = Multimap::new();
        AttributeBooleanValue::new(false).write_query("SourceDestCheck", &mut params);
        AttributeValue::new("m5.large").write_query("InstanceType", &mut params);
        BlobAttributeValue::new(b"#!/bin/sh".to_vec()).write_query("UserData", &mut params);

        assert_eq!(params.single("SourceDestCheck.Value"), Some("false"));
        assert_eq!(params.single("InstanceType.Value"), Some("m5.large"));
        assert_eq!(params.single("UserData.Value"), Some("IyEvYmluL3No"));
    }

    #[test]
    fn test_empty_wrapper_writes_nothing() {
        let mut params = Multimap::new();
        AttributeValue::default().write_query("Kernel", &mut params);
        assert!(params.is_empty());
    }

    #[test]
    fn test_block_device_mapping_query() {
        let mapping = InstanceBlockDeviceMappingSpecification::default()
            .with_device_name("/dev/sda1")
            .with_ebs(
                EbsInstanceBlockDeviceSpecification::default()
                    .with_delete_on_termination(true)
                    .with_volume_id("vol-1"),
            );

        let mut params = Multimap::new();
        mapping.write_query("BlockDeviceMapping.1", &mut params);
        assert_eq!(params.single("BlockDeviceMapping.1.DeviceName"), Some("/dev/sda1"));
        assert_eq!(
            params.single("BlockDeviceMapping.1.Ebs.DeleteOnTermination"),
            Some("true")
        );
        assert_eq!(params.single("BlockDeviceMapping.1.Ebs.VolumeId"), Some("vol-1"));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_blob_display_is_base64() {
        assert_eq!(
            BlobAttributeValue::new(b"hello".to_vec()).to_string(),
            "{Value: aGVsbG8=}"
        );
    }
}

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

use crate::compute::types::{Tag, VolumeAttachmentState, VolumeState, VolumeType};
use crate::compute::utils::{DisplayFields, UtcTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Describes an EBS volume.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Volume {
    attachments: Option<Vec<VolumeAttachment>>,
    availability_zone: Option<String>,
    create_time: Option<UtcTime>,
    encrypted: Option<bool>,
    kms_key_id: Option<String>,
    outpost_arn: Option<String>,
    size: Option<i32>,
    snapshot_id: Option<String>,
    state: Option<VolumeState>,
    volume_id: Option<String>,
    iops: Option<i32>,
    tags: Option<Vec<Tag>>,
    volume_type: Option<VolumeType>,
    fast_restored: Option<bool>,
    multi_attach_enabled: Option<bool>,
}

impl Volume {
    list_accessors!(attachments, set_attachments, with_attachments: VolumeAttachment);
    value_accessors!(availability_zone, set_availability_zone, with_availability_zone: String);
    copy_accessors!(create_time, set_create_time, with_create_time: UtcTime);
    copy_accessors!(encrypted, set_encrypted, with_encrypted: bool);
    value_accessors!(kms_key_id, set_kms_key_id, with_kms_key_id: String);
    value_accessors!(outpost_arn, set_outpost_arn, with_outpost_arn: String);
    copy_accessors!(
        /// Size in GiB.
        size, set_size, with_size: i32
    );
    value_accessors!(snapshot_id, set_snapshot_id, with_snapshot_id: String);
    value_accessors!(state, set_state, with_state: VolumeState);
    value_accessors!(volume_id, set_volume_id, with_volume_id: String);
    copy_accessors!(iops, set_iops, with_iops: i32);
    list_accessors!(tags, set_tags, with_tags: Tag);
    value_accessors!(volume_type, set_volume_type, with_volume_type: VolumeType);
    copy_accessors!(fast_restored, set_fast_restored, with_fast_restored: bool);
    copy_accessors!(multi_attach_enabled, set_multi_attach_enabled, with_multi_attach_enabled: bool);
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .list("Attachments", &self.attachments)
            .field("AvailabilityZone", &self.availability_zone)
            .field("CreateTime", &self.create_time)
            .field("Encrypted", &self.encrypted)
            .field("KmsKeyId", &self.kms_key_id)
            .field("OutpostArn", &self.outpost_arn)
            .field("Size", &self.size)
            .field("SnapshotId", &self.snapshot_id)
            .field("State", &self.state)
            .field("VolumeId", &self.volume_id)
            .field("Iops", &self.iops)
            .list("Tags", &self.tags)
            .field("VolumeType", &self.volume_type)
            .field("FastRestored", &self.fast_restored)
            .field("MultiAttachEnabled", &self.multi_attach_enabled)
            .finish()
    }
}

/// Describes a volume attached to an instance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VolumeAttachment {
    attach_time: Option<UtcTime>,
    device: Option<String>,
    instance_id: Option<String>,
    state: Option<VolumeAttachmentState>,
    volume_id: Option<String>,
    delete_on_termination: Option<bool>,
}

impl VolumeAttachment {
    copy_accessors!(attach_time, set_attach_time, with_attach_time: UtcTime);
    value_accessors!(device, set_device, with_device: String);
    value_accessors!(instance_id, set_instance_id, with_instance_id: String);
    value_accessors!(state, set_state, with_state: VolumeAttachmentState);
    value_accessors!(volume_id, set_volume_id, with_volume_id: String);
    copy_accessors!(
        delete_on_termination,
        set_delete_on_termination,
        with_delete_on_termination: bool
    );
}

impl fmt::Display for VolumeAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("AttachTime", &self.attach_time)
            .field("Device", &self.device)
            .field("InstanceId", &self.instance_id)
            .field("State", &self.state)
            .field("VolumeId", &self.volume_id)
            .field("DeleteOnTermination", &self.delete_on_termination)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_display() {
        let volume = Volume::default()
            .with_volume_id("vol-1")
            .with_state(VolumeState::InUse)
            .with_attachments([VolumeAttachment::default()
                .with_instance_id("i-1")
                .with_state(VolumeAttachmentState::Attached)]);
        assert_eq!(
            volume.to_string(),
            "{Attachments: [{InstanceId: i-1, State: attached}], State: in-use, VolumeId: vol-1}"
        );
    }

    #[test]
    fn test_state_from_unknown_wire_value() {
        let volume = Volume::default().with_state("optimizing");
        assert_eq!(
            volume.state(),
            Some(&VolumeState::Unknown("optimizing".to_string()))
        );
    }
}

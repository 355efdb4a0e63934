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
use crate::compute::types::{Ec2Api, TagSpecification, ToEc2Request, Validate, Volume, VolumeType};
use crate::compute::utils::{DisplayFields, check_range};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Argument builder for the [`CreateVolume`](https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_CreateVolume.html) EC2 API operation.
///
/// Either `size` or `snapshot_id` must be given. The response describes the new volume.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateVolume {
    availability_zone: Option<String>,
    encrypted: Option<bool>,
    iops: Option<i32>,
    kms_key_id: Option<String>,
    outpost_arn: Option<String>,
    size: Option<i32>,
    snapshot_id: Option<String>,
    volume_type: Option<VolumeType>,
    dry_run: Option<bool>,
    tag_specifications: Option<Vec<TagSpecification>>,
    multi_attach_enabled: Option<bool>,
}

impl CreateVolume {
    value_accessors!(availability_zone, set_availability_zone, with_availability_zone: String);
    copy_accessors!(encrypted, set_encrypted, with_encrypted: bool);
    copy_accessors!(
        /// Provisioned IOPS. Required for `io1`, not used with other volume types.
        iops, set_iops, with_iops: i32
    );
    value_accessors!(
        /// KMS key id, alias or ARN. `encrypted` must be `true` when set.
        kms_key_id, set_kms_key_id, with_kms_key_id: String
    );
    value_accessors!(outpost_arn, set_outpost_arn, with_outpost_arn: String);
    copy_accessors!(
        /// Size in GiB.
        size, set_size, with_size: i32
    );
    value_accessors!(snapshot_id, set_snapshot_id, with_snapshot_id: String);
    value_accessors!(volume_type, set_volume_type, with_volume_type: VolumeType);
    copy_accessors!(dry_run, set_dry_run, with_dry_run: bool);
    list_accessors!(
        tag_specifications,
        set_tag_specifications,
        with_tag_specifications: TagSpecification
    );
    copy_accessors!(multi_attach_enabled, set_multi_attach_enabled, with_multi_attach_enabled: bool);
}

impl fmt::Display for CreateVolume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("AvailabilityZone", &self.availability_zone)
            .field("Encrypted", &self.encrypted)
            .field("Iops", &self.iops)
            .field("KmsKeyId", &self.kms_key_id)
            .field("OutpostArn", &self.outpost_arn)
            .field("Size", &self.size)
            .field("SnapshotId", &self.snapshot_id)
            .field("VolumeType", &self.volume_type)
            .field("DryRun", &self.dry_run)
            .list("TagSpecifications", &self.tag_specifications)
            .field("MultiAttachEnabled", &self.multi_attach_enabled)
            .finish()
    }
}

impl ToEc2Request for CreateVolume {
    const ACTION: &'static str = "CreateVolume";

    fn to_query_params(&self, params: &mut Multimap) {
        params.add_value("AvailabilityZone", &self.availability_zone);
        params.add_value("Encrypted", &self.encrypted);
        params.add_value("Iops", &self.iops);
        params.add_value("KmsKeyId", &self.kms_key_id);
        params.add_value("OutpostArn", &self.outpost_arn);
        params.add_value("Size", &self.size);
        params.add_value("SnapshotId", &self.snapshot_id);
        params.add_value("VolumeType", &self.volume_type);
        params.add_value("DryRun", &self.dry_run);
        params.add_list("TagSpecification", &self.tag_specifications);
        params.add_value("MultiAttachEnabled", &self.multi_attach_enabled);
    }
}

impl Ec2Api for CreateVolume {
    type Ec2Response = Volume;
}

impl Validate for CreateVolume {
    fn validate(&self) -> Result<(), ValidationErr> {
        check_range("Size", self.size.map(i64::from), 1, 16384)?;
        check_range("Iops", self.iops.map(i64::from), 100, 64000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_ec2request() {
        let req = CreateVolume::default()
            .with_availability_zone("eu-west-1b")
            .with_size(100)
            .with_volume_type(VolumeType::Io1)
            .with_iops(3000)
            .with_encrypted(true)
            .to_ec2request();
        assert_eq!(req.param("AvailabilityZone"), Some("eu-west-1b"));
        assert_eq!(req.param("Size"), Some("100"));
        assert_eq!(req.param("VolumeType"), Some("io1"));
        assert_eq!(req.param("Iops"), Some("3000"));
        assert_eq!(req.param("Encrypted"), Some("true"));
        assert_eq!(req.param("SnapshotId"), None);
    }

    #[test]
    fn test_validate() {
        assert!(CreateVolume::default().with_size(16384).validate().is_ok());
        assert!(CreateVolume::default().with_size(0).validate().is_err());
        assert!(CreateVolume::default().with_iops(50).validate().is_err());
    }
}

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
use crate::compute::response::CreateCapacityReservationResponse;
use crate::compute::types::{
    CapacityReservationInstancePlatform, CapacityReservationTenancy, Ec2Api, EndDateType,
    InstanceMatchCriteria, InstanceType, TagSpecification, ToEc2Request, Validate,
};
use crate::compute::utils::{DisplayFields, UtcTime, check_range};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Argument builder for the [`CreateCapacityReservation`](https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_CreateCapacityReservation.html) EC2 API operation.
///
/// Reserves capacity for instances of one type and platform in one Availability Zone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCapacityReservation {
    client_token: Option<String>,
    instance_type: Option<InstanceType>,
    instance_platform: Option<CapacityReservationInstancePlatform>,
    availability_zone: Option<String>,
    availability_zone_id: Option<String>,
    tenancy: Option<CapacityReservationTenancy>,
    instance_count: Option<i32>,
    ebs_optimized: Option<bool>,
    ephemeral_storage: Option<bool>,
    end_date: Option<UtcTime>,
    end_date_type: Option<EndDateType>,
    instance_match_criteria: Option<InstanceMatchCriteria>,
    tag_specifications: Option<Vec<TagSpecification>>,
    dry_run: Option<bool>,
}

impl CreateCapacityReservation {
    value_accessors!(client_token, set_client_token, with_client_token: String);
    value_accessors!(instance_type, set_instance_type, with_instance_type: InstanceType);
    value_accessors!(
        instance_platform,
        set_instance_platform,
        with_instance_platform: CapacityReservationInstancePlatform
    );
    value_accessors!(availability_zone, set_availability_zone, with_availability_zone: String);
    value_accessors!(availability_zone_id, set_availability_zone_id, with_availability_zone_id: String);
    value_accessors!(tenancy, set_tenancy, with_tenancy: CapacityReservationTenancy);
    copy_accessors!(
        /// Number of instances to reserve capacity for.
        instance_count, set_instance_count, with_instance_count: i32
    );
    copy_accessors!(ebs_optimized, set_ebs_optimized, with_ebs_optimized: bool);
    copy_accessors!(ephemeral_storage, set_ephemeral_storage, with_ephemeral_storage: bool);
    copy_accessors!(
        /// Required when `end_date_type` is `limited`, ignored otherwise.
        end_date, set_end_date, with_end_date: UtcTime
    );
    value_accessors!(end_date_type, set_end_date_type, with_end_date_type: EndDateType);
    value_accessors!(
        instance_match_criteria,
        set_instance_match_criteria,
        with_instance_match_criteria: InstanceMatchCriteria
    );
    list_accessors!(
        tag_specifications,
        set_tag_specifications,
        with_tag_specifications: TagSpecification
    );
    copy_accessors!(dry_run, set_dry_run, with_dry_run: bool);
}

impl fmt::Display for CreateCapacityReservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("ClientToken", &self.client_token)
            .field("InstanceType", &self.instance_type)
            .field("InstancePlatform", &self.instance_platform)
            .field("AvailabilityZone", &self.availability_zone)
            .field("AvailabilityZoneId", &self.availability_zone_id)
            .field("Tenancy", &self.tenancy)
            .field("InstanceCount", &self.instance_count)
            .field("EbsOptimized", &self.ebs_optimized)
            .field("EphemeralStorage", &self.ephemeral_storage)
            .field("EndDate", &self.end_date)
            .field("EndDateType", &self.end_date_type)
            .field("InstanceMatchCriteria", &self.instance_match_criteria)
            .list("TagSpecifications", &self.tag_specifications)
            .field("DryRun", &self.dry_run)
            .finish()
    }
}

impl ToEc2Request for CreateCapacityReservation {
    const ACTION: &'static str = "CreateCapacityReservation";

    fn to_query_params(&self, params: &mut Multimap) {
        params.add_value("ClientToken", &self.client_token);
        params.add_value("InstanceType", &self.instance_type);
        params.add_value("InstancePlatform", &self.instance_platform);
        params.add_value("AvailabilityZone", &self.availability_zone);
        params.add_value("AvailabilityZoneId", &self.availability_zone_id);
        params.add_value("Tenancy", &self.tenancy);
        params.add_value("InstanceCount", &self.instance_count);
        params.add_value("EbsOptimized", &self.ebs_optimized);
        params.add_value("EphemeralStorage", &self.ephemeral_storage);
        params.add_value("EndDate", &self.end_date);
        params.add_value("EndDateType", &self.end_date_type);
        params.add_value("InstanceMatchCriteria", &self.instance_match_criteria);
        // plural member name for this action
        params.add_list("TagSpecifications", &self.tag_specifications);
        params.add_value("DryRun", &self.dry_run);
    }
}

impl Ec2Api for CreateCapacityReservation {
    type Ec2Response = CreateCapacityReservationResponse;
}

impl Validate for CreateCapacityReservation {
    fn validate(&self) -> Result<(), ValidationErr> {
        check_range(
            "InstanceCount",
            self.instance_count.map(i64::from),
            1,
            i64::from(i32::MAX),
        )
    }
}

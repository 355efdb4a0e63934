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

use crate::compute::types::{
    CapacityReservationInstancePlatform, CapacityReservationState, CapacityReservationTenancy,
    EndDateType, InstanceMatchCriteria, InstanceType, Tag,
};
use crate::compute::utils::{DisplayFields, UtcTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Describes a Capacity Reservation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CapacityReservation {
    capacity_reservation_id: Option<String>,
    owner_id: Option<String>,
    capacity_reservation_arn: Option<String>,
    availability_zone_id: Option<String>,
    instance_type: Option<InstanceType>,
    instance_platform: Option<CapacityReservationInstancePlatform>,
    availability_zone: Option<String>,
    tenancy: Option<CapacityReservationTenancy>,
    total_instance_count: Option<i32>,
    available_instance_count: Option<i32>,
    ebs_optimized: Option<bool>,
    ephemeral_storage: Option<bool>,
    state: Option<CapacityReservationState>,
    end_date: Option<UtcTime>,
    end_date_type: Option<EndDateType>,
    instance_match_criteria: Option<InstanceMatchCriteria>,
    create_date: Option<UtcTime>,
    tags: Option<Vec<Tag>>,
}

impl CapacityReservation {
    value_accessors!(
        capacity_reservation_id,
        set_capacity_reservation_id,
        with_capacity_reservation_id: String
    );
    value_accessors!(
        /// Account that owns the reservation.
        owner_id, set_owner_id, with_owner_id: String
    );
    value_accessors!(
        capacity_reservation_arn,
        set_capacity_reservation_arn,
        with_capacity_reservation_arn: String
    );
    value_accessors!(availability_zone_id, set_availability_zone_id, with_availability_zone_id: String);
    value_accessors!(instance_type, set_instance_type, with_instance_type: InstanceType);
    value_accessors!(
        instance_platform,
        set_instance_platform,
        with_instance_platform: CapacityReservationInstancePlatform
    );
    value_accessors!(availability_zone, set_availability_zone, with_availability_zone: String);
    value_accessors!(tenancy, set_tenancy, with_tenancy: CapacityReservationTenancy);
    copy_accessors!(total_instance_count, set_total_instance_count, with_total_instance_count: i32);
    copy_accessors!(
        /// Instances that can still be launched into the reservation.
        available_instance_count,
        set_available_instance_count,
        with_available_instance_count: i32
    );
    copy_accessors!(ebs_optimized, set_ebs_optimized, with_ebs_optimized: bool);
    copy_accessors!(ephemeral_storage, set_ephemeral_storage, with_ephemeral_storage: bool);
    value_accessors!(state, set_state, with_state: CapacityReservationState);
    copy_accessors!(
        /// When the reservation expires; only set when the end date type is `limited`.
        end_date, set_end_date, with_end_date: UtcTime
    );
    value_accessors!(end_date_type, set_end_date_type, with_end_date_type: EndDateType);
    value_accessors!(
        instance_match_criteria,
        set_instance_match_criteria,
        with_instance_match_criteria: InstanceMatchCriteria
    );
    copy_accessors!(create_date, set_create_date, with_create_date: UtcTime);
    list_accessors!(tags, set_tags, with_tags: Tag);
}

impl fmt::Display for CapacityReservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("CapacityReservationId", &self.capacity_reservation_id)
            .field("OwnerId", &self.owner_id)
            .field("CapacityReservationArn", &self.capacity_reservation_arn)
            .field("AvailabilityZoneId", &self.availability_zone_id)
            .field("InstanceType", &self.instance_type)
            .field("InstancePlatform", &self.instance_platform)
            .field("AvailabilityZone", &self.availability_zone)
            .field("Tenancy", &self.tenancy)
            .field("TotalInstanceCount", &self.total_instance_count)
            .field("AvailableInstanceCount", &self.available_instance_count)
            .field("EbsOptimized", &self.ebs_optimized)
            .field("EphemeralStorage", &self.ephemeral_storage)
            .field("State", &self.state)
            .field("EndDate", &self.end_date)
            .field("EndDateType", &self.end_date_type)
            .field("InstanceMatchCriteria", &self.instance_match_criteria)
            .field("CreateDate", &self.create_date)
            .list("Tags", &self.tags)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_accessors() {
        let end = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let mut reservation = CapacityReservation::default()
            .with_capacity_reservation_id("cr-1")
            .with_instance_platform("Linux/UNIX")
            .with_end_date_type(EndDateType::Limited)
            .with_end_date(end);

        assert_eq!(
            reservation.instance_platform(),
            Some(&CapacityReservationInstancePlatform::LinuxUnix)
        );
        assert_eq!(reservation.end_date(), Some(end));

        reservation.set_end_date(None);
        assert_eq!(reservation.end_date(), None);
    }

    #[test]
    fn test_serde_round_trip_keeps_empty_tags() {
        let mut reservation = CapacityReservation::default().with_total_instance_count(4);
        reservation.set_tags(Some(vec![]));

        let json = serde_json::to_string(&reservation).unwrap();
        let back: CapacityReservation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reservation);
        assert_eq!(back.tags(), Some(&[][..]));
    }
}

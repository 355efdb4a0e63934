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

//! Reserved Instances and Reserved Instance offerings

use crate::compute::types::{
    CurrencyCodeValues, InstanceType, OfferingClassType, OfferingTypeValues,
    RecurringChargeFrequency, ReservedInstanceState, RiProductDescription, Scope, Tag, Tenancy,
};
use crate::compute::utils::{DisplayFields, UtcTime, hash_float};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Describes a purchased Reserved Instance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReservedInstances {
    availability_zone: Option<String>,
    duration: Option<i64>,
    end: Option<UtcTime>,
    fixed_price: Option<f32>,
    instance_count: Option<i32>,
    instance_type: Option<InstanceType>,
    product_description: Option<RiProductDescription>,
    reserved_instances_id: Option<String>,
    start: Option<UtcTime>,
    state: Option<ReservedInstanceState>,
    usage_price: Option<f32>,
    currency_code: Option<CurrencyCodeValues>,
    instance_tenancy: Option<Tenancy>,
    offering_class: Option<OfferingClassType>,
    offering_type: Option<OfferingTypeValues>,
    recurring_charges: Option<Vec<RecurringCharge>>,
    scope: Option<Scope>,
    tags: Option<Vec<Tag>>,
}

impl ReservedInstances {
    value_accessors!(availability_zone, set_availability_zone, with_availability_zone: String);
    copy_accessors!(
        /// Term length in seconds.
        duration, set_duration, with_duration: i64
    );
    copy_accessors!(end, set_end, with_end: UtcTime);
    copy_accessors!(
        /// Purchase price.
        fixed_price, set_fixed_price, with_fixed_price: f32
    );
    copy_accessors!(instance_count, set_instance_count, with_instance_count: i32);
    value_accessors!(instance_type, set_instance_type, with_instance_type: InstanceType);
    value_accessors!(
        product_description,
        set_product_description,
        with_product_description: RiProductDescription
    );
    value_accessors!(reserved_instances_id, set_reserved_instances_id, with_reserved_instances_id: String);
    copy_accessors!(start, set_start, with_start: UtcTime);
    value_accessors!(state, set_state, with_state: ReservedInstanceState);
    copy_accessors!(
        /// Hourly usage price.
        usage_price, set_usage_price, with_usage_price: f32
    );
    value_accessors!(currency_code, set_currency_code, with_currency_code: CurrencyCodeValues);
    value_accessors!(instance_tenancy, set_instance_tenancy, with_instance_tenancy: Tenancy);
    value_accessors!(offering_class, set_offering_class, with_offering_class: OfferingClassType);
    value_accessors!(offering_type, set_offering_type, with_offering_type: OfferingTypeValues);
    list_accessors!(recurring_charges, set_recurring_charges, with_recurring_charges: RecurringCharge);
    value_accessors!(scope, set_scope, with_scope: Scope);
    list_accessors!(tags, set_tags, with_tags: Tag);
}

impl Hash for ReservedInstances {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.availability_zone.hash(state);
        self.duration.hash(state);
        self.end.hash(state);
        hash_float(self.fixed_price.map(f64::from), state);
        self.instance_count.hash(state);
        self.instance_type.hash(state);
        self.product_description.hash(state);
        self.reserved_instances_id.hash(state);
        self.start.hash(state);
        self.state.hash(state);
        hash_float(self.usage_price.map(f64::from), state);
        self.currency_code.hash(state);
        self.instance_tenancy.hash(state);
        self.offering_class.hash(state);
        self.offering_type.hash(state);
        self.recurring_charges.hash(state);
        self.scope.hash(state);
        self.tags.hash(state);
    }
}

impl fmt::Display for ReservedInstances {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("AvailabilityZone", &self.availability_zone)
            .field("Duration", &self.duration)
            .field("End", &self.end)
            .field("FixedPrice", &self.fixed_price)
            .field("InstanceCount", &self.instance_count)
            .field("InstanceType", &self.instance_type)
            .field("ProductDescription", &self.product_description)
            .field("ReservedInstancesId", &self.reserved_instances_id)
            .field("Start", &self.start)
            .field("State", &self.state)
            .field("UsagePrice", &self.usage_price)
            .field("CurrencyCode", &self.currency_code)
            .field("InstanceTenancy", &self.instance_tenancy)
            .field("OfferingClass", &self.offering_class)
            .field("OfferingType", &self.offering_type)
            .list("RecurringCharges", &self.recurring_charges)
            .field("Scope", &self.scope)
            .list("Tags", &self.tags)
            .finish()
    }
}

/// Describes a Reserved Instance offering.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReservedInstancesOffering {
    availability_zone: Option<String>,
    duration: Option<i64>,
    fixed_price: Option<f32>,
    instance_type: Option<InstanceType>,
    product_description: Option<RiProductDescription>,
    reserved_instances_offering_id: Option<String>,
    usage_price: Option<f32>,
    currency_code: Option<CurrencyCodeValues>,
    instance_tenancy: Option<Tenancy>,
    marketplace: Option<bool>,
    offering_class: Option<OfferingClassType>,
    offering_type: Option<OfferingTypeValues>,
    pricing_details: Option<Vec<PricingDetail>>,
    recurring_charges: Option<Vec<RecurringCharge>>,
    scope: Option<Scope>,
}

impl ReservedInstancesOffering {
    value_accessors!(availability_zone, set_availability_zone, with_availability_zone: String);
    copy_accessors!(duration, set_duration, with_duration: i64);
    copy_accessors!(fixed_price, set_fixed_price, with_fixed_price: f32);
    value_accessors!(instance_type, set_instance_type, with_instance_type: InstanceType);
    value_accessors!(
        product_description,
        set_product_description,
        with_product_description: RiProductDescription
    );
    value_accessors!(
        reserved_instances_offering_id,
        set_reserved_instances_offering_id,
        with_reserved_instances_offering_id: String
    );
    copy_accessors!(usage_price, set_usage_price, with_usage_price: f32);
    value_accessors!(currency_code, set_currency_code, with_currency_code: CurrencyCodeValues);
    value_accessors!(instance_tenancy, set_instance_tenancy, with_instance_tenancy: Tenancy);
    copy_accessors!(
        /// Whether the offering is sold on the Reserved Instance Marketplace.
        marketplace, set_marketplace, with_marketplace: bool
    );
    value_accessors!(offering_class, set_offering_class, with_offering_class: OfferingClassType);
    value_accessors!(offering_type, set_offering_type, with_offering_type: OfferingTypeValues);
    list_accessors!(pricing_details, set_pricing_details, with_pricing_details: PricingDetail);
    list_accessors!(recurring_charges, set_recurring_charges, with_recurring_charges: RecurringCharge);
    value_accessors!(scope, set_scope, with_scope: Scope);
}

impl Hash for ReservedInstancesOffering {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.availability_zone.hash(state);
        self.duration.hash(state);
        hash_float(self.fixed_price.map(f64::from), state);
        self.instance_type.hash(state);
        self.product_description.hash(state);
        self.reserved_instances_offering_id.hash(state);
        hash_float(self.usage_price.map(f64::from), state);
        self.currency_code.hash(state);
        self.instance_tenancy.hash(state);
        self.marketplace.hash(state);
        self.offering_class.hash(state);
        self.offering_type.hash(state);
        self.pricing_details.hash(state);
        self.recurring_charges.hash(state);
        self.scope.hash(state);
    }
}

impl fmt::Display for ReservedInstancesOffering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("AvailabilityZone", &self.availability_zone)
            .field("Duration", &self.duration)
            .field("FixedPrice", &self.fixed_price)
            .field("InstanceType", &self.instance_type)
            .field("ProductDescription", &self.product_description)
            .field(
                "ReservedInstancesOfferingId",
                &self.reserved_instances_offering_id,
            )
            .field("UsagePrice", &self.usage_price)
            .field("CurrencyCode", &self.currency_code)
            .field("InstanceTenancy", &self.instance_tenancy)
            .field("Marketplace", &self.marketplace)
            .field("OfferingClass", &self.offering_class)
            .field("OfferingType", &self.offering_type)
            .list("PricingDetails", &self.pricing_details)
            .list("RecurringCharges", &self.recurring_charges)
            .field("Scope", &self.scope)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecurringCharge {
    amount: Option<f64>,
    frequency: Option<RecurringChargeFrequency>,
}

impl RecurringCharge {
    copy_accessors!(amount, set_amount, with_amount: f64);
    value_accessors!(frequency, set_frequency, with_frequency: RecurringChargeFrequency);
}

impl Hash for RecurringCharge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_float(self.amount, state);
        self.frequency.hash(state);
    }
}

impl fmt::Display for RecurringCharge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("Amount", &self.amount)
            .field("Frequency", &self.frequency)
            .finish()
    }
}

/// Marketplace listing price for a number of reservations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PricingDetail {
    count: Option<i32>,
    price: Option<f64>,
}

impl PricingDetail {
    copy_accessors!(count, set_count, with_count: i32);
    copy_accessors!(price, set_price, with_price: f64);
}

impl Hash for PricingDetail {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.count.hash(state);
        hash_float(self.price, state);
    }
}

impl fmt::Display for PricingDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("Count", &self.count)
            .field("Price", &self.price)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn offering() -> ReservedInstancesOffering {
        ReservedInstancesOffering::default()
            .with_reserved_instances_offering_id("438012d3-1")
            .with_fixed_price(1234.5)
            .with_offering_type(OfferingTypeValues::AllUpfront)
            .with_recurring_charges([RecurringCharge::default()
                .with_amount(0.0)
                .with_frequency(RecurringChargeFrequency::Hourly)])
    }

    #[test]
    fn test_equal_offerings_hash_alike() {
        assert_eq!(offering(), offering());
        assert_eq!(hash_of(&offering()), hash_of(&offering()));
    }

    #[test]
    fn test_single_field_difference() {
        assert_ne!(offering(), offering().with_marketplace(false));
        assert_ne!(offering(), offering().with_fixed_price(1234.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            offering().to_string(),
            "{FixedPrice: 1234.5, ReservedInstancesOfferingId: 438012d3-1, OfferingType: All Upfront, RecurringCharges: [{Amount: 0, Frequency: Hourly}]}"
        );
    }

    #[test]
    fn test_reserved_instances_scope_from_wire() {
        let ri = ReservedInstances::default().with_scope("Availability Zone");
        assert_eq!(ri.scope(), Some(&Scope::AvailabilityZone));
    }
}

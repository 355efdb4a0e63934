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
use crate::compute::response::DescribeReservedInstancesOfferingsResponse;
use crate::compute::types::{
    Ec2Api, Filter, InstanceType, OfferingClassType, OfferingTypeValues, Paginated,
    RiProductDescription, Tenancy, ToEc2Request, Validate,
};
use crate::compute::utils::{DisplayFields, check_range};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Argument builder for the [`DescribeReservedInstancesOfferings`](https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DescribeReservedInstancesOfferings.html) EC2 API operation.
///
/// Lists Reserved Instance offerings available for purchase, from AWS and, with
/// `include_marketplace`, from the Reserved Instance Marketplace.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeReservedInstancesOfferings {
    availability_zone: Option<String>,
    filters: Option<Vec<Filter>>,
    include_marketplace: Option<bool>,
    instance_type: Option<InstanceType>,
    max_duration: Option<i64>,
    max_instance_count: Option<i32>,
    min_duration: Option<i64>,
    offering_class: Option<OfferingClassType>,
    product_description: Option<RiProductDescription>,
    reserved_instances_offering_ids: Option<Vec<String>>,
    dry_run: Option<bool>,
    instance_tenancy: Option<Tenancy>,
    max_results: Option<i32>,
    next_token: Option<String>,
    offering_type: Option<OfferingTypeValues>,
}

impl DescribeReservedInstancesOfferings {
    value_accessors!(availability_zone, set_availability_zone, with_availability_zone: String);
    list_accessors!(filters, set_filters, with_filters: Filter);
    copy_accessors!(include_marketplace, set_include_marketplace, with_include_marketplace: bool);
    value_accessors!(instance_type, set_instance_type, with_instance_type: InstanceType);
    copy_accessors!(
        /// Longest term to consider, in seconds. Defaults to 3 years.
        max_duration, set_max_duration, with_max_duration: i64
    );
    copy_accessors!(
        /// Most instances to filter on when searching offerings. Defaults to 20.
        max_instance_count, set_max_instance_count, with_max_instance_count: i32
    );
    copy_accessors!(
        /// Shortest term to consider, in seconds. Defaults to 1 month.
        min_duration, set_min_duration, with_min_duration: i64
    );
    value_accessors!(offering_class, set_offering_class, with_offering_class: OfferingClassType);
    value_accessors!(
        product_description,
        set_product_description,
        with_product_description: RiProductDescription
    );
    list_accessors!(
        reserved_instances_offering_ids,
        set_reserved_instances_offering_ids,
        with_reserved_instances_offering_ids: String
    );
    copy_accessors!(dry_run, set_dry_run, with_dry_run: bool);
    value_accessors!(
        /// `dedicated` offerings run on single-tenant hardware.
        instance_tenancy, set_instance_tenancy, with_instance_tenancy: Tenancy
    );
    copy_accessors!(
        /// Page size, at most 100.
        max_results, set_max_results, with_max_results: i32
    );
    value_accessors!(next_token, set_next_token, with_next_token: String);
    value_accessors!(offering_type, set_offering_type, with_offering_type: OfferingTypeValues);
}

impl fmt::Display for DescribeReservedInstancesOfferings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("AvailabilityZone", &self.availability_zone)
            .list("Filters", &self.filters)
            .field("IncludeMarketplace", &self.include_marketplace)
            .field("InstanceType", &self.instance_type)
            .field("MaxDuration", &self.max_duration)
            .field("MaxInstanceCount", &self.max_instance_count)
            .field("MinDuration", &self.min_duration)
            .field("OfferingClass", &self.offering_class)
            .field("ProductDescription", &self.product_description)
            .list(
                "ReservedInstancesOfferingIds",
                &self.reserved_instances_offering_ids,
            )
            .field("DryRun", &self.dry_run)
            .field("InstanceTenancy", &self.instance_tenancy)
            .field("MaxResults", &self.max_results)
            .field("NextToken", &self.next_token)
            .field("OfferingType", &self.offering_type)
            .finish()
    }
}

impl ToEc2Request for DescribeReservedInstancesOfferings {
    const ACTION: &'static str = "DescribeReservedInstancesOfferings";

    fn to_query_params(&self, params: &mut Multimap) {
        params.add_value("AvailabilityZone", &self.availability_zone);
        params.add_list("Filter", &self.filters);
        params.add_value("IncludeMarketplace", &self.include_marketplace);
        params.add_value("InstanceType", &self.instance_type);
        params.add_value("MaxDuration", &self.max_duration);
        params.add_value("MaxInstanceCount", &self.max_instance_count);
        params.add_value("MinDuration", &self.min_duration);
        params.add_value("OfferingClass", &self.offering_class);
        params.add_value("ProductDescription", &self.product_description);
        params.add_list(
            "ReservedInstancesOfferingId",
            &self.reserved_instances_offering_ids,
        );
        params.add_value("DryRun", &self.dry_run);
        params.add_value("InstanceTenancy", &self.instance_tenancy);
        params.add_value("MaxResults", &self.max_results);
        params.add_value("NextToken", &self.next_token);
        params.add_value("OfferingType", &self.offering_type);
    }
}

impl Ec2Api for DescribeReservedInstancesOfferings {
    type Ec2Response = DescribeReservedInstancesOfferingsResponse;
}

impl Paginated for DescribeReservedInstancesOfferings {
    fn set_page_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

impl Validate for DescribeReservedInstancesOfferings {
    fn validate(&self) -> Result<(), ValidationErr> {
        check_range("MaxResults", self.max_results.map(i64::from), 1, 100)?;
        check_range(
            "MaxInstanceCount",
            self.max_instance_count.map(i64::from),
            1,
            i64::from(i32::MAX),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::types::DryRunSupported;

    #[test]
    fn test_to_ec2request() {
        let req = DescribeReservedInstancesOfferings::default()
            .with_instance_type(InstanceType::M5Large)
            .with_product_description(RiProductDescription::LinuxUnixAmazonVpc)
            .with_offering_type(OfferingTypeValues::NoUpfront)
            .with_reserved_instances_offering_ids(["off-1", "off-2"])
            .with_min_duration(2_592_000)
            .with_include_marketplace(false)
            .to_ec2request();

        assert_eq!(req.param("InstanceType"), Some("m5.large"));
        assert_eq!(req.param("ProductDescription"), Some("Linux/UNIX (Amazon VPC)"));
        assert_eq!(req.param("OfferingType"), Some("No Upfront"));
        assert_eq!(req.param("ReservedInstancesOfferingId.2"), Some("off-2"));
        assert_eq!(req.param("MinDuration"), Some("2592000"));
        assert_eq!(req.param("IncludeMarketplace"), Some("false"));
        assert_eq!(req.param("DryRun"), None);
    }

    #[test]
    fn test_dry_run_request_regardless_of_field() {
        for dry_run in [None, Some(false), Some(true)] {
            let mut request = DescribeReservedInstancesOfferings::default()
                .with_availability_zone("us-east-1a");
            request.set_dry_run(dry_run);

            let req = request.dry_run_request();
            assert_eq!(req.action(), "DescribeReservedInstancesOfferings");
            assert_eq!(req.params().get_vec("DryRun"), Some(&vec!["true".to_string()]));
            assert_eq!(req.param("AvailabilityZone"), Some("us-east-1a"));
        }
    }

    #[test]
    fn test_validate() {
        let request = DescribeReservedInstancesOfferings::default().with_max_results(100);
        assert!(request.validate().is_ok());
        assert!(matches!(
            request.with_max_results(101).validate(),
            Err(ValidationErr::ValueOutOfRange { name: "MaxResults", .. })
        ));
        assert!(matches!(
            DescribeReservedInstancesOfferings::default()
                .with_max_instance_count(0)
                .validate(),
            Err(ValidationErr::ValueOutOfRange { name: "MaxInstanceCount", .. })
        ));
    }
}

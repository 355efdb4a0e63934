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
use crate::compute::response::CreateFlowLogsResponse;
use crate::compute::types::{
    Ec2Api, FlowLogsResourceType, LogDestinationType, TagSpecification, ToEc2Request, TrafficType,
    Validate,
};
use crate::compute::utils::DisplayFields;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregation intervals, in seconds, accepted for `MaxAggregationInterval`
pub const FLOW_LOG_AGGREGATION_INTERVALS: [i32; 2] = [60, 600];

/// Argument builder for the [`CreateFlowLogs`](https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_CreateFlowLogs.html) EC2 API operation.
///
/// Creates one flow log per network interface, subnet or VPC in `resource_ids`, publishing
/// to CloudWatch Logs or to an S3 bucket.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateFlowLogs {
    dry_run: Option<bool>,
    client_token: Option<String>,
    deliver_logs_permission_arn: Option<String>,
    log_group_name: Option<String>,
    resource_ids: Option<Vec<String>>,
    resource_type: Option<FlowLogsResourceType>,
    traffic_type: Option<TrafficType>,
    log_destination_type: Option<LogDestinationType>,
    log_destination: Option<String>,
    log_format: Option<String>,
    tag_specifications: Option<Vec<TagSpecification>>,
    max_aggregation_interval: Option<i32>,
}

impl CreateFlowLogs {
    copy_accessors!(dry_run, set_dry_run, with_dry_run: bool);
    value_accessors!(
        /// Idempotency token, up to 64 ASCII characters.
        client_token, set_client_token, with_client_token: String
    );
    value_accessors!(
        /// IAM role allowed to publish to the log group. Only for CloudWatch Logs.
        deliver_logs_permission_arn,
        set_deliver_logs_permission_arn,
        with_deliver_logs_permission_arn: String
    );
    value_accessors!(
        /// CloudWatch Logs group to publish to. Only for CloudWatch Logs.
        log_group_name, set_log_group_name, with_log_group_name: String
    );
    list_accessors!(
        /// Subnet, network interface or VPC ids; up to 25.
        resource_ids, set_resource_ids, with_resource_ids: String
    );
    value_accessors!(resource_type, set_resource_type, with_resource_type: FlowLogsResourceType);
    value_accessors!(traffic_type, set_traffic_type, with_traffic_type: TrafficType);
    value_accessors!(
        log_destination_type,
        set_log_destination_type,
        with_log_destination_type: LogDestinationType
    );
    value_accessors!(
        /// ARN of the destination: a log group or an S3 bucket (optionally with a subfolder).
        log_destination, set_log_destination, with_log_destination: String
    );
    value_accessors!(
        /// Space separated `${field}` list; fields are written in this order.
        log_format, set_log_format, with_log_format: String
    );
    list_accessors!(
        tag_specifications,
        set_tag_specifications,
        with_tag_specifications: TagSpecification
    );
    copy_accessors!(
        /// Seconds over which packets are captured into a record: 60 or 600.
        max_aggregation_interval,
        set_max_aggregation_interval,
        with_max_aggregation_interval: i32
    );
}

impl fmt::Display for CreateFlowLogs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("DryRun", &self.dry_run)
            .field("ClientToken", &self.client_token)
            .field("DeliverLogsPermissionArn", &self.deliver_logs_permission_arn)
            .field("LogGroupName", &self.log_group_name)
            .list("ResourceIds", &self.resource_ids)
            .field("ResourceType", &self.resource_type)
            .field("TrafficType", &self.traffic_type)
            .field("LogDestinationType", &self.log_destination_type)
            .field("LogDestination", &self.log_destination)
            .field("LogFormat", &self.log_format)
            .list("TagSpecifications", &self.tag_specifications)
            .field("MaxAggregationInterval", &self.max_aggregation_interval)
            .finish()
    }
}

impl ToEc2Request for CreateFlowLogs {
    const ACTION: &'static str = "CreateFlowLogs";

    fn to_query_params(&self, params: &mut Multimap) {
        params.add_value("DryRun", &self.dry_run);
        params.add_value("ClientToken", &self.client_token);
        params.add_value("DeliverLogsPermissionArn", &self.deliver_logs_permission_arn);
        params.add_value("LogGroupName", &self.log_group_name);
        params.add_list("ResourceId", &self.resource_ids);
        params.add_value("ResourceType", &self.resource_type);
        params.add_value("TrafficType", &self.traffic_type);
        params.add_value("LogDestinationType", &self.log_destination_type);
        params.add_value("LogDestination", &self.log_destination);
        params.add_value("LogFormat", &self.log_format);
        params.add_list("TagSpecification", &self.tag_specifications);
        params.add_value("MaxAggregationInterval", &self.max_aggregation_interval);
    }
}

impl Ec2Api for CreateFlowLogs {
    type Ec2Response = CreateFlowLogsResponse;
}

impl Validate for CreateFlowLogs {
    fn validate(&self) -> Result<(), ValidationErr> {
        match self.max_aggregation_interval {
            Some(v) if !FLOW_LOG_AGGREGATION_INTERVALS.contains(&v) => {
                Err(ValidationErr::InvalidValue {
                    name: "MaxAggregationInterval",
                    value: i64::from(v),
                    allowed: FLOW_LOG_AGGREGATION_INTERVALS.map(i64::from).to_vec(),
                })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::types::{ResourceType, Tag};

    fn request() -> CreateFlowLogs {
        CreateFlowLogs::default()
            .with_resource_ids(["vpc-1", "vpc-2"])
            .with_resource_type(FlowLogsResourceType::Vpc)
            .with_traffic_type("REJECT")
            .with_log_destination_type(LogDestinationType::S3)
            .with_log_destination("arn:aws:s3:::flow-logs/vpc")
            .with_log_format("${version} ${srcaddr} ${dstaddr}")
            .with_tag_specifications([TagSpecification::default()
                .with_resource_type(ResourceType::VpcFlowLog)
                .with_tags([Tag::new("team", "net")])])
    }

    #[test]
    fn test_to_ec2request() {
        let req = request().to_ec2request();
        assert_eq!(req.action(), "CreateFlowLogs");
        assert_eq!(req.param("ResourceId.1"), Some("vpc-1"));
        assert_eq!(req.param("ResourceId.2"), Some("vpc-2"));
        assert_eq!(req.param("ResourceType"), Some("VPC"));
        assert_eq!(req.param("TrafficType"), Some("REJECT"));
        assert_eq!(req.param("LogDestinationType"), Some("s3"));
        assert_eq!(req.param("LogFormat"), Some("${version} ${srcaddr} ${dstaddr}"));
        assert_eq!(
            req.param("TagSpecification.1.ResourceType"),
            Some("vpc-flow-log")
        );
        assert_eq!(req.param("TagSpecification.1.Tag.1.Key"), Some("team"));
        assert_eq!(req.param("LogGroupName"), None);
    }

    #[test]
    fn test_enum_and_string_store_the_same() {
        let a = CreateFlowLogs::default().with_traffic_type(TrafficType::All);
        let b = CreateFlowLogs::default().with_traffic_type("ALL");
        assert_eq!(a, b);
        assert_eq!(a.traffic_type().map(TrafficType::as_str), Some("ALL"));
    }

    #[test]
    fn test_display() {
        let text = request().with_max_aggregation_interval(60).to_string();
        assert!(text.starts_with("{ResourceIds: [vpc-1, vpc-2], ResourceType: VPC, TrafficType: REJECT"));
        assert!(text.ends_with("MaxAggregationInterval: 60}"));
        assert!(!text.contains("ClientToken"));
    }

    #[test]
    fn test_validate_aggregation_interval() {
        assert!(request().validate().is_ok());
        assert!(request().with_max_aggregation_interval(600).validate().is_ok());
        assert_eq!(
            request().with_max_aggregation_interval(300).validate(),
            Err(ValidationErr::InvalidValue {
                name: "MaxAggregationInterval",
                value: 300,
                allowed: vec![60, 600],
            })
        );
    }

    #[test]
    fn test_invalid_values_are_still_marshalled() {
        let req = request().with_max_aggregation_interval(300).to_ec2request();
        assert_eq!(req.param("MaxAggregationInterval"), Some("300"));
    }
}

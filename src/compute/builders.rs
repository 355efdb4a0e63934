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

//! Argument builders for EC2 Query API operations
//!
//! Each builder starts empty from `Default` and is filled with chained `with_*` calls. It
//! marshals through [`ToEc2Request`](crate::compute::types::ToEc2Request) and can always be
//! sent as a dry run through [`DryRunSupported`](crate::compute::types::DryRunSupported).

mod create_capacity_reservation;
mod create_flow_logs;
mod create_volume;
mod describe_capacity_reservations;
mod describe_fleets;
mod describe_images;
mod describe_instance_types;
mod describe_instances;
mod describe_network_interfaces;
mod describe_reserved_instances_offerings;
mod describe_route_tables;
mod describe_security_groups;
mod describe_spot_instance_requests;
mod describe_volumes;
mod modify_instance_attribute;
mod run_instances;

pub use create_capacity_reservation::*;
pub use create_flow_logs::*;
pub use create_volume::*;
pub use describe_capacity_reservations::*;
pub use describe_fleets::*;
pub use describe_images::*;
pub use describe_instance_types::*;
pub use describe_instances::*;
pub use describe_network_interfaces::*;
pub use describe_reserved_instances_offerings::*;
pub use describe_route_tables::*;
pub use describe_security_groups::*;
pub use describe_spot_instance_requests::*;
pub use describe_volumes::*;
pub use modify_instance_attribute::*;
pub use run_instances::*;

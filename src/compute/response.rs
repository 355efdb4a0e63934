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

//! Response models of EC2 Query API operations
//!
//! Responses are plain models like the requests: every field optional, `with_*` chaining,
//! structural equality and `{Name: value}` display.

#[macro_use]
mod a_response_traits;
mod create_capacity_reservation;
mod create_flow_logs;
mod describe_capacity_reservations;
mod describe_fleets;
mod describe_images;
mod describe_instance_types;
mod describe_instances;
mod describe_reserved_instances_offerings;
mod describe_volumes;

pub use a_response_traits::*;
pub use create_capacity_reservation::*;
pub use create_flow_logs::*;
pub use describe_capacity_reservations::*;
pub use describe_fleets::*;
pub use describe_images::*;
pub use describe_instance_types::*;
pub use describe_instances::*;
pub use describe_reserved_instances_offerings::*;
pub use describe_volumes::*;

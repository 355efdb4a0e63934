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

//! # EC2 Rust SDK models (`ec2`)
//!
//! This crate provides strongly-typed request and resource models for the Amazon EC2
//! (Elastic Compute Cloud) Query API and compatible compute services.
//!
//! Each supported operation has a corresponding request model (e.g., [`compute::builders::DescribeVolumes`],
//! [`compute::builders::CreateFlowLogs`], [`compute::builders::ModifyInstanceAttribute`]),
//! which is populated with chained `with_*` calls or `set_*` calls.
//!
//! All request models implement the [`compute::types::ToEc2Request`] trait, which marshals the
//! model into an [`compute::types::Ec2Request`] carrying the Query API parameters. Every such model
//! also gets [`compute::types::DryRunSupported`], producing the same request with `DryRun=true`.
//!
//! ## Basic Usage
//!
//! ```
//! use ec2::compute::builders::DescribeVolumes;
//! use ec2::compute::types::{DryRunSupported, Filter, ToEc2Request};
//!
//! let request = DescribeVolumes::default()
//!     .with_volume_ids(["vol-1", "vol-2"])
//!     .with_filters([Filter::new("status").with_values(["available"])])
//!     .with_max_results(50);
//!
//! let marshalled = request.to_ec2request();
//! assert_eq!(marshalled.param("VolumeId.2"), Some("vol-2"));
//!
//! let dry_run = request.dry_run_request();
//! assert_eq!(dry_run.param("DryRun"), Some("true"));
//! ```
//!
//! ## Design
//! - Every field is optional; "never set" (`None`) and "set to empty" (`Some(vec![])`) stay distinct
//! - `with_*` methods consume and return the model, list variants append instead of replacing
//! - Enumerated wire values are closed string-backed enums with an `Unknown` fallback
//! - Models are total: building, reading and marshalling never fail

pub mod compute;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

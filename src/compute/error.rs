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

//! Error definitions for EC2 requests
//!
//! Building, reading and marshalling a model never fails. Errors only come from the
//! opt-in [`Validate`](crate::compute::types::Validate) checks and from resolving an
//! endpoint into a URL.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationErr {
    #[error("invalid endpoint `{endpoint}`: {cause}")]
    InvalidEndpoint { endpoint: String, cause: String },

    #[error("{name} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("{name} must be one of {allowed:?}, got {value}")]
    InvalidValue {
        name: &'static str,
        value: i64,
        allowed: Vec<i64>,
    },

    #[error("{first} cannot be combined with {second} in the same request")]
    ConflictingParameters {
        first: &'static str,
        second: &'static str,
    },
}

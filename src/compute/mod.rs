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

//! Models of the Elastic Compute Cloud (aka EC2) Query API

#[macro_use]
mod accessors;

pub mod builders;
pub mod config;
pub mod error;
pub mod multimap_ext;
pub mod response;
pub mod types;
pub mod utils;

pub use config::Ec2Config;

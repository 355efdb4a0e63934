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

use crate::compute::types::InstanceTypeInfo;
use crate::compute::utils::DisplayFields;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Response of [`DescribeInstanceTypes`](crate::compute::builders::DescribeInstanceTypes)
#[derive(Clone, Debug, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstanceTypesResponse {
    instance_types: Option<Vec<InstanceTypeInfo>>,
    next_token: Option<String>,
}

impl DescribeInstanceTypesResponse {
    list_accessors!(instance_types, set_instance_types, with_instance_types: InstanceTypeInfo);
    value_accessors!(next_token, set_next_token, with_next_token: String);
}

impl_has_next_token!(DescribeInstanceTypesResponse);

impl fmt::Display for DescribeInstanceTypesResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .list("InstanceTypes", &self.instance_types)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

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

use crate::compute::utils::DisplayFields;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A resource a batch operation failed on, e.g. one of the resources of `CreateFlowLogs`
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnsuccessfulItem {
    error: Option<UnsuccessfulItemError>,
    resource_id: Option<String>,
}

impl UnsuccessfulItem {
    value_accessors!(error, set_error, with_error: UnsuccessfulItemError);
    value_accessors!(resource_id, set_resource_id, with_resource_id: String);
}

impl fmt::Display for UnsuccessfulItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("Error", &self.error)
            .field("ResourceId", &self.resource_id)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnsuccessfulItemError {
    code: Option<String>,
    message: Option<String>,
}

impl UnsuccessfulItemError {
    value_accessors!(code, set_code, with_code: String);
    value_accessors!(message, set_message, with_message: String);
}

impl fmt::Display for UnsuccessfulItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("Code", &self.code)
            .field("Message", &self.message)
            .finish()
    }
}

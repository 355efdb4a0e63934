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

use crate::compute::types::UnsuccessfulItem;
use crate::compute::utils::DisplayFields;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Response of [`CreateFlowLogs`](crate::compute::builders::CreateFlowLogs)
///
/// A flow log is created per resource; resources that failed are listed in `unsuccessful`
/// while the others still succeed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateFlowLogsResponse {
    client_token: Option<String>,
    flow_log_ids: Option<Vec<String>>,
    unsuccessful: Option<Vec<UnsuccessfulItem>>,
}

impl CreateFlowLogsResponse {
    value_accessors!(client_token, set_client_token, with_client_token: String);
    list_accessors!(flow_log_ids, set_flow_log_ids, with_flow_log_ids: String);
    list_accessors!(unsuccessful, set_unsuccessful, with_unsuccessful: UnsuccessfulItem);
}

impl fmt::Display for CreateFlowLogsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("ClientToken", &self.client_token)
            .list("FlowLogIds", &self.flow_log_ids)
            .list("Unsuccessful", &self.unsuccessful)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::types::UnsuccessfulItemError;

    #[test]
    fn test_partial_failure_display() {
        let response = CreateFlowLogsResponse::default()
            .with_flow_log_ids(["fl-1"])
            .with_unsuccessful([UnsuccessfulItem::default()
                .with_resource_id("vpc-2")
                .with_error(UnsuccessfulItemError::default().with_code("InvalidVpcID.NotFound"))]);
        assert_eq!(
            response.to_string(),
            "{FlowLogIds: [fl-1], Unsuccessful: [{Error: {Code: InvalidVpcID.NotFound}, ResourceId: vpc-2}]}"
        );
    }
}

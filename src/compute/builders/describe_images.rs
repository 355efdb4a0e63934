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

use crate::compute::multimap_ext::{Multimap, MultimapExt};
use crate::compute::response::DescribeImagesResponse;
use crate::compute::types::{Ec2Api, Filter, ToEc2Request};
use crate::compute::utils::DisplayFields;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Argument builder for the [`DescribeImages`](https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DescribeImages.html) EC2 API operation.
///
/// Without any argument every image the caller may launch is returned, which is a large
/// result set; narrow it with `owners` or `filters`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeImages {
    executable_users: Option<Vec<String>>,
    filters: Option<Vec<Filter>>,
    image_ids: Option<Vec<String>>,
    owners: Option<Vec<String>>,
    dry_run: Option<bool>,
}

impl DescribeImages {
    list_accessors!(
        /// Account ids with launch permissions; `self` and `all` are accepted too.
        executable_users, set_executable_users, with_executable_users: String
    );
    list_accessors!(filters, set_filters, with_filters: Filter);
    list_accessors!(image_ids, set_image_ids, with_image_ids: String);
    list_accessors!(
        /// Owner account ids or aliases: `self`, `amazon`, `aws-marketplace`.
        owners, set_owners, with_owners: String
    );
    copy_accessors!(dry_run, set_dry_run, with_dry_run: bool);
}

impl fmt::Display for DescribeImages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .list("ExecutableUsers", &self.executable_users)
            .list("Filters", &self.filters)
            .list("ImageIds", &self.image_ids)
            .list("Owners", &self.owners)
            .field("DryRun", &self.dry_run)
            .finish()
    }
}

impl ToEc2Request for DescribeImages {
    const ACTION: &'static str = "DescribeImages";

    fn to_query_params(&self, params: &mut Multimap) {
        params.add_list("ExecutableBy", &self.executable_users);
        params.add_list("Filter", &self.filters);
        params.add_list("ImageId", &self.image_ids);
        params.add_list("Owner", &self.owners);
        params.add_value("DryRun", &self.dry_run);
    }
}

impl Ec2Api for DescribeImages {
    type Ec2Response = DescribeImagesResponse;
}

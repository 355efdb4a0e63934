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

//! Shared models, enumerations and the request marshalling traits

mod capacity_reservation;
mod ec2_request;
mod enums;
mod filter;
mod fleet;
mod image;
mod instance;
mod instance_attribute;
mod instance_launch;
mod instance_type_info;
mod reserved_instances;
mod spot_fleet;
mod tag;
mod unsuccessful_item;
mod volume;

pub use capacity_reservation::*;
pub use ec2_request::*;
pub use enums::*;
pub use filter::*;
pub use fleet::*;
pub use image::*;
pub use instance::*;
pub use instance_attribute::*;
pub use instance_launch::*;
pub use instance_type_info::*;
pub use reserved_instances::*;
pub use spot_fleet::*;
pub use tag::*;
pub use unsuccessful_item::*;
pub use volume::*;

use crate::compute::error::ValidationErr;
use crate::compute::multimap_ext::MultimapExt;
use crate::compute::response::HasNextToken;

/// Trait for marshalling a request model into an EC2 Query API request.
///
/// This trait is implemented by all request models in [`builders`](crate::compute::builders).
/// Marshalling never fails and never validates: absent fields are skipped, present fields are
/// written in their wire form, and whatever values the model holds are forwarded to the
/// service as they are.
///
/// # See Also
///
/// * [`DryRunSupported`] - builds on this trait to produce dry-run requests
/// * [`Validate`] - opt-in checks of documented parameter constraints
pub trait ToEc2Request {
    /// The Query API action name, e.g. `DescribeVolumes`.
    const ACTION: &'static str;

    /// Writes the present fields of this model as query parameters.
    fn to_query_params(&self, params: &mut crate::compute::multimap_ext::Multimap);

    /// Returns the marshalled request for this model.
    fn to_ec2request(&self) -> Ec2Request {
        let mut params = crate::compute::multimap_ext::Multimap::new();
        self.to_query_params(&mut params);
        log::debug!(
            "marshalled {} with {} parameter(s)",
            Self::ACTION,
            params.len()
        );
        Ec2Request::builder()
            .action(Self::ACTION)
            .params(params)
            .build()
    }
}

/// Requests that can be sent in dry-run mode.
///
/// A dry run checks permissions and parameters without performing the action. Every
/// [`ToEc2Request`] model supports it, whether or not it exposes a `dry_run` field.
pub trait DryRunSupported: ToEc2Request {
    /// Returns the marshalled request with `DryRun=true`, whatever the model's own
    /// `dry_run` value is.
    fn dry_run_request(&self) -> Ec2Request {
        let mut request = self.to_ec2request();
        request.params_mut().replace("DryRun", true.to_string());
        log::debug!("{} prepared as dry run", Self::ACTION);
        request
    }
}

impl<T: ToEc2Request> DryRunSupported for T {}

/// Links a request model to the model of its response.
pub trait Ec2Api: ToEc2Request {
    /// The response model of this operation.
    type Ec2Response;
}

/// Requests listing results page by page.
///
/// A `NextToken` returned by one page is forwarded verbatim to get the next one; a response
/// without token is the last page.
///
/// ```
/// use ec2::compute::builders::DescribeVolumes;
/// use ec2::compute::response::DescribeVolumesResponse;
/// use ec2::compute::types::Paginated;
///
/// let request = DescribeVolumes::default().with_max_results(5);
/// let page = DescribeVolumesResponse::default().with_next_token("token-1");
///
/// let next = request.next_page(&page).unwrap();
/// assert_eq!(next.next_token().map(String::as_str), Some("token-1"));
/// assert_eq!(next.max_results(), Some(5));
/// assert!(next.next_page(&DescribeVolumesResponse::default()).is_none());
/// ```
pub trait Paginated: Ec2Api + Clone
where
    Self::Ec2Response: HasNextToken,
{
    /// Replaces the `NextToken` of this request.
    fn set_page_token(&mut self, token: Option<String>);

    /// Returns a copy of this request asking for the page after `response`, or `None`
    /// when `response` is the last page.
    fn next_page(&self, response: &Self::Ec2Response) -> Option<Self> {
        let token = response.next_token()?;
        let mut next = self.clone();
        next.set_page_token(Some(token.to_owned()));
        log::debug!("{} continues at next token", Self::ACTION);
        Some(next)
    }
}

/// Opt-in client-side check of documented parameter constraints.
///
/// Models accept any value; the service is the final judge. This trait lets a caller
/// catch out-of-range values before sending.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErr>;
}

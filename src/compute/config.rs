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

//! Service configuration: which region and endpoint marshalled requests address.

use crate::compute::error::ValidationErr;
use typed_builder::TypedBuilder;
use url::Url;

/// Region used when none is configured
pub const DEFAULT_REGION: &str = "us-east-1";

/// Service configuration for EC2 requests.
///
/// ```
/// use ec2::compute::Ec2Config;
///
/// let config = Ec2Config::builder().region("eu-west-1").build();
/// assert_eq!(config.endpoint(), "https://ec2.eu-west-1.amazonaws.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct Ec2Config {
    #[builder(default = DEFAULT_REGION.to_string(), setter(into))]
    region: String,

    /// Overrides the regional endpoint, e.g. for a compatible service or a local mock.
    #[builder(default, setter(into, strip_option))]
    endpoint: Option<String>,
}

impl Default for Ec2Config {
    fn default() -> Self {
        Ec2Config::builder().build()
    }
}

impl Ec2Config {
    /// Reads the configuration from the process environment.
    ///
    /// `AWS_REGION` wins over `AWS_DEFAULT_REGION`; `EC2_ENDPOINT_URL` overrides the
    /// regional endpoint.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Same as [`Ec2Config::from_env`] with a custom variable lookup.
    pub fn from_vars<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let region = non_empty("AWS_REGION")
            .or_else(|| non_empty("AWS_DEFAULT_REGION"))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        let endpoint = non_empty("EC2_ENDPOINT_URL");
        log::info!(
            "EC2 region `{region}`, endpoint override: {}",
            endpoint.as_deref().unwrap_or("none")
        );

        Ec2Config { region, endpoint }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Returns the endpoint override if any, otherwise the regional endpoint.
    pub fn endpoint(&self) -> String {
        match &self.endpoint {
            Some(v) => v.clone(),
            None => format!("https://ec2.{}.amazonaws.com", self.region),
        }
    }

    /// Parses [`Ec2Config::endpoint`] into a URL.
    pub fn endpoint_url(&self) -> Result<Url, ValidationErr> {
        let endpoint = self.endpoint();
        let url = Url::parse(&endpoint).map_err(|e| ValidationErr::InvalidEndpoint {
            endpoint: endpoint.clone(),
            cause: e.to_string(),
        })?;
        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(ValidationErr::InvalidEndpoint {
                endpoint,
                cause: "endpoint must be an absolute http(s) URL".to_string(),
            });
        }
        Ok(url)
    }
}

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

//! Ec2Request struct: a marshalled EC2 Query API request.

use crate::compute::config::Ec2Config;
use crate::compute::error::ValidationErr;
use crate::compute::multimap_ext::{Multimap, MultimapExt};
use crate::compute::utils::url_encode;
use http::Method;
use typed_builder::TypedBuilder;
use url::Url;

/// EC2 Query API version the models are shaped after
pub const DEFAULT_API_VERSION: &str = "2016-11-15";

#[derive(Clone, Debug, TypedBuilder)]
/// Generic EC2 Query API request
pub struct Ec2Request {
    #[builder(default = Method::POST)]
    method: Method,

    #[builder(setter(into))] // force required
    action: String,

    #[builder(default = DEFAULT_API_VERSION.to_string(), setter(into))]
    version: String,

    #[builder(default)]
    params: Multimap,
}

impl Ec2Request {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Operation parameters, without `Action` and `Version`.
    pub fn params(&self) -> &Multimap {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut Multimap {
        &mut self.params
    }

    /// Returns the value of parameter `name`, if present.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.single(name)
    }

    /// Returns the full form-encoded query: `Action`, `Version`, then the sorted parameters.
    ///
    /// This is the request body for `POST` and the query string for `GET`.
    pub fn to_query_string(&self) -> String {
        let mut query = format!(
            "Action={}&Version={}",
            url_encode(&self.action),
            url_encode(&self.version)
        );
        let params = self.params.to_query_string();
        if !params.is_empty() {
            query.push('&');
            query.push_str(&params);
        }
        query
    }

    /// Returns the URL addressing this request as a `GET` against the configured endpoint.
    pub fn to_url(&self, config: &Ec2Config) -> Result<Url, ValidationErr> {
        let mut url = config.endpoint_url()?;
        url.set_query(Some(&self.to_query_string()));
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> Ec2Request {
        let mut params = Multimap::new();
        params.add("VolumeId.1", "vol-1");
        params.add("MaxResults", "50");
        Ec2Request::builder()
            .action("DescribeVolumes")
            .params(params)
            .build()
    }

    #[test]
    fn test_defaults() {
        let req = request();
        assert_eq!(req.method(), &Method::POST);
        assert_eq!(req.version(), DEFAULT_API_VERSION);
        assert_eq!(req.param("VolumeId.1"), Some("vol-1"));
    }

    #[test]
    fn test_to_query_string() {
        assert_eq!(
            request().to_query_string(),
            "Action=DescribeVolumes&Version=2016-11-15&MaxResults=50&VolumeId.1=vol-1"
        );
    }

    #[test]
    fn test_to_query_string_without_params() {
        let req = Ec2Request::builder().action("DescribeRegions").build();
        assert_eq!(
            req.to_query_string(),
            "Action=DescribeRegions&Version=2016-11-15"
        );
    }

    #[test]
    fn test_to_url() {
        let config = Ec2Config::builder().region("ap-south-1").build();
        let url = request().to_url(&config).unwrap();
        assert_eq!(url.host_str(), Some("ec2.ap-south-1.amazonaws.com"));
        assert_eq!(
            url.query(),
            Some("Action=DescribeVolumes&Version=2016-11-15&MaxResults=50&VolumeId.1=vol-1")
        );
    }
}

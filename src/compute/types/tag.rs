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

use crate::compute::multimap_ext::{Multimap, MultimapExt, QueryValue};
use crate::compute::types::ResourceType;
use crate::compute::utils::DisplayFields;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A key/value label attached to a resource
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    key: Option<String>,
    value: Option<String>,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Tag {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }

    value_accessors!(key, set_key, with_key: String);
    value_accessors!(value, set_value, with_value: String);
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("Key", &self.key)
            .field("Value", &self.value)
            .finish()
    }
}

impl QueryValue for Tag {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add_value(&format!("{name}.Key"), &self.key);
        params.add_value(&format!("{name}.Value"), &self.value);
    }
}

/// Tags to apply to a resource of the given type while it is being created
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagSpecification {
    resource_type: Option<ResourceType>,
    tags: Option<Vec<Tag>>,
}

impl TagSpecification {
    value_accessors!(resource_type, set_resource_type, with_resource_type: ResourceType);
    list_accessors!(tags, set_tags, with_tags: Tag);
}

impl fmt::Display for TagSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("ResourceType", &self.resource_type)
            .list("Tags", &self.tags)
            .finish()
    }
}

impl QueryValue for TagSpecification {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add_value(&format!("{name}.ResourceType"), &self.resource_type);
        params.add_list(&format!("{name}.Tag"), &self.tags);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_specification_query() {
        let spec = TagSpecification::default()
            .with_resource_type(ResourceType::VpcFlowLog)
            .with_tags([Tag::new("team", "net"), Tag::new("env", "prod")]);

        let mut params = Multimap::new();
        spec.write_query("TagSpecification.1", &mut params);
        assert_eq!(
            params.single("TagSpecification.1.ResourceType"),
            Some("vpc-flow-log")
        );
        assert_eq!(params.single("TagSpecification.1.Tag.2.Key"), Some("env"));
        assert_eq!(params.single("TagSpecification.1.Tag.2.Value"), Some("prod"));
    }

    #[test]
    fn test_resource_type_accepts_string() {
        let spec = TagSpecification::default().with_resource_type("volume");
        assert_eq!(spec.resource_type(), Some(&ResourceType::Volume));
    }

    #[test]
    fn test_display_nested() {
        let spec = TagSpecification::default().with_tags([Tag::new("a", "1")]);
        assert_eq!(spec.to_string(), "{Tags: [{Key: a, Value: 1}]}");
    }
}

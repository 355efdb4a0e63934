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
use crate::compute::utils::DisplayFields;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A name and a set of values narrowing the results of a `Describe*` operation.
///
/// Values of one filter are ORed, filters of one request are ANDed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Filter {
    name: Option<String>,
    values: Option<Vec<String>>,
}

impl Filter {
    /// Returns a filter on `name` without values.
    pub fn new(name: impl Into<String>) -> Self {
        Filter {
            name: Some(name.into()),
            values: None,
        }
    }

    value_accessors!(
        /// Name of the filter, e.g. `status` or `tag:Owner`.
        name, set_name, with_name: String
    );
    list_accessors!(
        /// Accepted values; `*` and `?` act as wildcards.
        values, set_values, with_values: String
    );
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("Name", &self.name)
            .list("Values", &self.values)
            .finish()
    }
}

impl QueryValue for Filter {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add_value(&format!("{name}.Name"), &self.name);
        params.add_list(&format!("{name}.Value"), &self.values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_values_appends() {
        let filter = Filter::new("status")
            .with_values(["available"])
            .with_values(["in-use", "creating"]);
        assert_eq!(
            filter.values(),
            Some(&["available".to_string(), "in-use".into(), "creating".into()][..])
        );
    }

    #[test]
    fn test_write_query() {
        let mut params = Multimap::new();
        Filter::new("tag:Owner")
            .with_values(["alice", "bob"])
            .write_query("Filter.2", &mut params);
        assert_eq!(params.single("Filter.2.Name"), Some("tag:Owner"));
        assert_eq!(params.single("Filter.2.Value.1"), Some("alice"));
        assert_eq!(params.single("Filter.2.Value.2"), Some("bob"));
    }

    #[test]
    fn test_display() {
        let filter = Filter::new("status").with_values(["available"]);
        assert_eq!(filter.to_string(), "{Name: status, Values: [available]}");
        assert_eq!(Filter::default().to_string(), "{}");
    }
}

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

use crate::compute::utils::{UtcTime, b64encode, to_iso8601utc, url_encode};
use std::collections::BTreeMap;

/// Multimap for string key and string value
pub type Multimap = multimap::MultiMap<String, String>;

/// A value that knows how to write itself as EC2 Query API parameters.
///
/// Scalars write a single `name=value` pair. Nested structures write one pair per present
/// member, using `name` as prefix (`Filter.1.Name`, `Filter.1.Value.1`, ...).
pub trait QueryValue {
    fn write_query(&self, name: &str, params: &mut Multimap);
}

impl QueryValue for String {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add(name, self.as_str());
    }
}

impl QueryValue for bool {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add(name, self.to_string());
    }
}

impl QueryValue for i32 {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add(name, self.to_string());
    }
}

impl QueryValue for i64 {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add(name, self.to_string());
    }
}

impl QueryValue for f32 {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add(name, self.to_string());
    }
}

impl QueryValue for f64 {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add(name, self.to_string());
    }
}

impl QueryValue for UtcTime {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add(name, to_iso8601utc(*self));
    }
}

/// Blobs travel base64 encoded.
impl QueryValue for Vec<u8> {
    fn write_query(&self, name: &str, params: &mut Multimap) {
        params.add(name, b64encode(self));
    }
}

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Replaces all values of `key` with the single `value`
    fn replace<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Writes `value` under `name` if present; absent values write nothing
    fn add_value<V: QueryValue>(&mut self, name: &str, value: &Option<V>);

    /// Writes a list flattened as `name.1`, `name.2`, ... if present
    fn add_list<V: QueryValue>(&mut self, name: &str, values: &Option<Vec<V>>);

    /// Returns the first value of `key`
    fn single(&self, key: &str) -> Option<&str>;

    /// Converts multimap to a query string with keys in sorted order
    fn to_query_string(&self) -> String;
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn replace<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key: String = key.into();
        self.remove(&key);
        self.insert(key, value.into());
    }

    fn add_value<V: QueryValue>(&mut self, name: &str, value: &Option<V>) {
        if let Some(v) = value {
            v.write_query(name, self);
        }
    }

    fn add_list<V: QueryValue>(&mut self, name: &str, values: &Option<Vec<V>>) {
        if let Some(values) = values {
            for (index, value) in values.iter().enumerate() {
                value.write_query(&format!("{name}.{}", index + 1), self);
            }
        }
    }

    fn single(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }

    fn to_query_string(&self) -> String {
        // BTreeMap sorts the keys; values keep their insertion order
        let mut sorted: BTreeMap<&str, &Vec<String>> = BTreeMap::new();
        for (key, values) in self.iter_all() {
            sorted.insert(key.as_str(), values);
        }

        let mut query = String::new();
        for (key, values) in sorted {
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&url_encode(key));
                query.push('=');
                query.push_str(&url_encode(value));
            }
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_list_is_one_based() {
        let mut params = Multimap::new();
        params.add_list(
            "VolumeId",
            &Some(vec!["vol-1".to_string(), "vol-2".to_string()]),
        );
        assert_eq!(params.single("VolumeId.1"), Some("vol-1"));
        assert_eq!(params.single("VolumeId.2"), Some("vol-2"));
        assert_eq!(params.single("VolumeId.0"), None);
    }

    #[test]
    fn test_absent_and_empty_write_nothing() {
        let mut params = Multimap::new();
        params.add_value::<String>("NextToken", &None);
        params.add_list::<String>("VolumeId", &None);
        params.add_list::<String>("GroupId", &Some(vec![]));
        assert!(params.is_empty());
    }

    #[test]
    fn test_replace_drops_previous_values() {
        let mut params = Multimap::new();
        params.add("DryRun", "false");
        params.add("DryRun", "false");
        params.replace("DryRun", "true");
        assert_eq!(params.get_vec("DryRun"), Some(&vec!["true".to_string()]));
    }

    #[test]
    fn test_to_query_string_sorted_and_encoded() {
        let mut params = Multimap::new();
        params.add("LogFormat", "${version} ${srcaddr}");
        params.add("DryRun", "true");
        assert_eq!(
            params.to_query_string(),
            "DryRun=true&LogFormat=%24%7Bversion%7D%20%24%7Bsrcaddr%7D"
        );
    }

    #[test]
    fn test_blob_is_base64() {
        let mut params = Multimap::new();
        params.add_value("UserData.Value", &Some(b"hello".to_vec()));
        assert_eq!(params.single("UserData.Value"), Some("aGVsbG8="));
    }
}

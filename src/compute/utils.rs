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

//! Various utility and helper functions

use crate::compute::error::ValidationErr;
use base64::engine::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

/// Encodes data using base64 algorithm
pub fn b64encode<T: AsRef<[u8]>>(input: T) -> String {
    BASE64.encode(input)
}

/// Gets ISO8601 UTC formatted value of given time
pub fn to_iso8601utc(time: UtcTime) -> String {
    time.format("%Y-%m-%dT%H:%M:%S.%3fZ").to_string()
}

// https://tools.ietf.org/html/rfc3986
//
// NON_ALPHANUMERIC escapes everything non-alphanumeric, including all reserved
// characters. Only the unreserved characters '-', '_', '.', '~' are removed.
const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes a query key or value
pub fn url_encode(s: &str) -> String {
    utf8_percent_encode(s, QUERY_ESCAPE).collect()
}

/// Hashes an optional float so that values comparing equal hash alike.
pub fn hash_float<H: Hasher>(value: Option<f64>, state: &mut H) {
    // -0.0 == 0.0 but their bit patterns differ
    value
        .map(|v| if v == 0.0 { 0u64 } else { v.to_bits() })
        .hash(state);
}

/// Checks that an optional numeric parameter lies in `min..=max`.
pub fn check_range(
    name: &'static str,
    value: Option<i64>,
    min: i64,
    max: i64,
) -> Result<(), ValidationErr> {
    match value {
        Some(v) if v < min || v > max => Err(ValidationErr::ValueOutOfRange {
            name,
            value: v,
            min,
            max,
        }),
        _ => Ok(()),
    }
}

/// Checks that two parameters are not both present.
pub fn check_exclusive(
    first: &'static str,
    first_present: bool,
    second: &'static str,
    second_present: bool,
) -> Result<(), ValidationErr> {
    if first_present && second_present {
        return Err(ValidationErr::ConflictingParameters { first, second });
    }
    Ok(())
}

/// Writes the `{Name: value, Name: value}` representation of a model.
///
/// Absent fields are skipped entirely; lists are rendered as `[a, b]`.
pub struct DisplayFields<'a, 'b: 'a> {
    fmt: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl<'a, 'b: 'a> DisplayFields<'a, 'b> {
    pub fn new(fmt: &'a mut fmt::Formatter<'b>) -> Self {
        let result = fmt.write_str("{");
        DisplayFields {
            fmt,
            result,
            has_fields: false,
        }
    }

    /// Writes `name: value` if `value` is present.
    pub fn field<T: fmt::Display>(mut self, name: &str, value: &Option<T>) -> Self {
        if let (Ok(()), Some(v)) = (self.result, value) {
            self.result = self.entry(name, v);
        }
        self
    }

    /// Writes `name: [a, b]` if `values` is present, including when it is empty.
    pub fn list<T: fmt::Display>(mut self, name: &str, values: &Option<Vec<T>>) -> Self {
        if let (Ok(()), Some(v)) = (self.result, values) {
            self.result = self.entry(name, &DisplayList(v));
        }
        self
    }

    pub fn finish(self) -> fmt::Result {
        self.result?;
        self.fmt.write_str("}")
    }

    fn entry(&mut self, name: &str, value: &dyn fmt::Display) -> fmt::Result {
        if self.has_fields {
            self.fmt.write_str(", ")?;
        }
        self.has_fields = true;
        write!(self.fmt, "{name}: {value}")
    }
}

struct DisplayList<'a, T>(&'a [T]);

impl<T: fmt::Display> fmt::Display for DisplayList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, value) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::hash_map::DefaultHasher;

    struct Sample {
        name: Option<String>,
        ids: Option<Vec<String>>,
        count: Option<i32>,
    }

    impl fmt::Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            DisplayFields::new(f)
                .field("Name", &self.name)
                .list("Ids", &self.ids)
                .field("Count", &self.count)
                .finish()
        }
    }

    fn hash_of(value: Option<f64>) -> u64 {
        let mut hasher = DefaultHasher::new();
        hash_float(value, &mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_display_fields_skips_absent() {
        let sample = Sample {
            name: None,
            ids: Some(vec!["a".into(), "b".into()]),
            count: Some(3),
        };
        assert_eq!(sample.to_string(), "{Ids: [a, b], Count: 3}");
    }

    #[test]
    fn test_display_fields_empty_list_is_rendered() {
        let sample = Sample {
            name: Some("x".into()),
            ids: Some(vec![]),
            count: None,
        };
        assert_eq!(sample.to_string(), "{Name: x, Ids: []}");
    }

    #[test]
    fn test_display_fields_nothing_set() {
        let sample = Sample {
            name: None,
            ids: None,
            count: None,
        };
        assert_eq!(sample.to_string(), "{}");
    }

    #[test]
    fn test_hash_float_signed_zero() {
        assert_eq!(hash_of(Some(0.0)), hash_of(Some(-0.0)));
        assert_ne!(hash_of(Some(1.5)), hash_of(None));
    }

    #[test]
    fn test_iso8601utc() {
        let time = Utc.with_ymd_and_hms(2020, 4, 1, 12, 30, 5).unwrap();
        assert_eq!(to_iso8601utc(time), "2020-04-01T12:30:05.000Z");
    }

    #[test]
    fn test_check_range() {
        assert!(check_range("MaxResults", None, 5, 1000).is_ok());
        assert!(check_range("MaxResults", Some(5), 5, 1000).is_ok());
        assert_eq!(
            check_range("MaxResults", Some(1001), 5, 1000),
            Err(ValidationErr::ValueOutOfRange {
                name: "MaxResults",
                value: 1001,
                min: 5,
                max: 1000,
            })
        );
    }

    #[test]
    fn test_url_encode_keeps_unreserved() {
        assert_eq!(url_encode("a-b_c.d~e"), "a-b_c.d~e");
        assert_eq!(url_encode("a b/c"), "a%20b%2Fc");
    }
}

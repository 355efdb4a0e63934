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

//! Generators for the accessor methods every model exposes.
//!
//! Every model field is optional. For a field `foo` three methods are generated:
//!
//! - `foo()` reads the field,
//! - `set_foo(Option<..>)` replaces it, `None` clears it,
//! - `with_foo(..)` consumes the model, updates the field and returns the model, so that
//!   calls can be chained.
//!
//! For list fields `with_foo` appends to the existing elements (initializing the list if
//! it is absent) instead of replacing them.

/// Accessors for an optional field holding an owned value (strings, enums, nested models).
macro_rules! value_accessors {
    ($(#[$doc:meta])* $field:ident, $setter:ident, $with:ident: $ty:ty) => {
        $(#[$doc])*
        #[inline]
        pub fn $field(&self) -> Option<&$ty> {
            self.$field.as_ref()
        }

        $(#[$doc])*
        #[inline]
        pub fn $setter(&mut self, value: Option<$ty>) {
            self.$field = value;
        }

        $(#[$doc])*
        #[must_use]
        pub fn $with(mut self, value: impl Into<$ty>) -> Self {
            self.$field = Some(value.into());
            self
        }
    };
}

/// Accessors for an optional field holding a `Copy` scalar (booleans, numbers, timestamps).
macro_rules! copy_accessors {
    ($(#[$doc:meta])* $field:ident, $setter:ident, $with:ident: $ty:ty) => {
        $(#[$doc])*
        #[inline]
        pub fn $field(&self) -> Option<$ty> {
            self.$field
        }

        $(#[$doc])*
        #[inline]
        pub fn $setter(&mut self, value: Option<$ty>) {
            self.$field = value;
        }

        $(#[$doc])*
        #[must_use]
        pub fn $with(mut self, value: $ty) -> Self {
            self.$field = Some(value);
            self
        }
    };
}

/// Accessors for an optional, ordered list field.
macro_rules! list_accessors {
    ($(#[$doc:meta])* $field:ident, $setter:ident, $with:ident: $ty:ty) => {
        $(#[$doc])*
        #[inline]
        pub fn $field(&self) -> Option<&[$ty]> {
            self.$field.as_deref()
        }

        $(#[$doc])*
        #[inline]
        pub fn $setter(&mut self, values: Option<Vec<$ty>>) {
            self.$field = values;
        }

        $(#[$doc])*
        ///
        /// Appends to the current elements; an absent list is initialized first.
        #[must_use]
        pub fn $with<I, T>(mut self, values: I) -> Self
        where
            I: IntoIterator<Item = T>,
            T: Into<$ty>,
        {
            self.$field
                .get_or_insert_with(Vec::new)
                .extend(values.into_iter().map(Into::into));
            self
        }
    };
}

/// Defines a closed, string-backed enumeration of documented wire values.
///
/// A value not known to this library is kept verbatim in the `Unknown` variant, and a
/// known wire string always resolves to its named variant. Equality and hashing follow the
/// wire string, so `Unknown("ALL")` equals the variant whose wire value is `ALL`.
macro_rules! ec2_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value this version of the library does not know about, kept verbatim.
            Unknown(String),
        }

        impl $name {
            /// Returns the wire representation of this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $wire, )+
                    $name::Unknown(s) => s.as_str(),
                }
            }

            /// Returns all documented wire values, in declaration order.
            pub fn values() -> &'static [&'static str] {
                &[$( $wire ),+]
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(self.as_str(), state);
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $( $wire => $name::$variant, )+
                    other => $name::Unknown(other.to_owned()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                match $name::from(s.as_str()) {
                    $name::Unknown(_) => $name::Unknown(s),
                    known => known,
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($name::from(s))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                <String as serde::Deserialize>::deserialize(deserializer).map($name::from)
            }
        }

        impl $crate::compute::multimap_ext::QueryValue for $name {
            fn write_query(&self, name: &str, params: &mut $crate::compute::multimap_ext::Multimap) {
                $crate::compute::multimap_ext::MultimapExt::add(params, name, self.as_str());
            }
        }
    };
}

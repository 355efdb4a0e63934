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

/// Responses of paginated operations.
pub trait HasNextToken {
    /// Cursor of the next page; `None` on the last page.
    fn next_token(&self) -> Option<&str>;
}

/// Implements [`HasNextToken`] for responses with a `next_token: Option<String>` field.
macro_rules! impl_has_next_token {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::compute::response::HasNextToken for $ty {
                fn next_token(&self) -> Option<&str> {
                    self.next_token.as_deref()
                }
            }
        )*
    };
}

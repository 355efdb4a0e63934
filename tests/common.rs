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

use ec2::compute::Ec2Config;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub struct TestContext {
    pub config: Ec2Config,
}

impl TestContext {
    /// Builds the context from the process environment, see [`Ec2Config::from_env`].
    pub fn new_from_env() -> Self {
        init_logger();
        TestContext {
            config: Ec2Config::from_env(),
        }
    }
}

/// Enables `RUST_LOG` controlled logging; safe to call from every test.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

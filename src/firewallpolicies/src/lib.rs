// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Google Cloud Client Libraries for Rust - Compute Engine FirewallPolicies
//!
//! This crate contains a client for the [Compute Engine] organization
//! firewall policies service. The main type is
//! [client::FirewallPolicies]. Applications create a client, then call its
//! methods to manage hierarchical firewall policies, their rules, and their
//! associations to organizations and folders.
//!
//! Mutations return a Compute Engine [Operation][model::Operation]. Use
//! [Operation::to_result][model::Operation::to_result] to inspect terminal
//! failures.
//!
//! [Compute Engine]: https://cloud.google.com/compute

/// The default host used by the service.
pub const DEFAULT_HOST: &str = "compute.googleapis.com";

/// The OAuth2 scopes requested by default.
pub const DEFAULT_SCOPES: [&str; 2] = [
    "https://www.googleapis.com/auth/compute",
    "https://www.googleapis.com/auth/cloud-platform",
];

pub(crate) mod info {
    const NAME: &str = env!("CARGO_PKG_NAME");
    pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

    lazy_static::lazy_static! {
        pub(crate) static ref X_GOOG_API_CLIENT_HEADER: String = {
            let ac = gaxi::api_header::XGoogApiClient{
                name:          NAME,
                version:       VERSION,
                library_type:  gaxi::api_header::GCCL,
            };
            ac.rest_header_value()
        };
    }
}

/// Request builders.
pub mod builder;

/// Clients to make calls to the service.
pub mod client;

/// Typed errors for credential configuration and failed operations.
pub mod errors;

/// The messages and enumerations used by the service.
pub mod model;

/// Traits to mock the clients in this library.
///
/// Application developers may need to mock the clients in this library to test
/// how their application works with different (and sometimes hard to trigger)
/// error conditions.
pub mod stub;

/// The REST transport and its construction rules.
pub mod transport;

mod tracing;

pub use gax::Result;
pub use gax::error::Error;

#[cfg(test)]
mod tests {
    #[test]
    fn api_client_header() {
        let value = &*super::info::X_GOOG_API_CLIENT_HEADER;
        assert!(value.contains(super::info::VERSION), "{value}");
    }

    #[test]
    fn default_scopes() {
        assert_eq!(super::DEFAULT_SCOPES.len(), 2);
        assert!(
            super::DEFAULT_SCOPES
                .iter()
                .all(|s| s.starts_with("https://www.googleapis.com/auth/")),
            "{:?}",
            super::DEFAULT_SCOPES
        );
    }
}

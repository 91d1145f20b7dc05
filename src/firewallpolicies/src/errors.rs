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

impl crate::model::Operation {
    /// Converts a terminal operation into a result.
    ///
    /// Compute Engine reports operation failures inline, in the `error`,
    /// `http_error_status_code`, and `http_error_message` fields. This
    /// converts any such failure into a typed error.
    pub fn to_result(self) -> std::result::Result<Self, OperationError> {
        if self.error.is_some()
            || self.http_error_status_code.is_some()
            || self.http_error_message.is_some()
        {
            let error = GenericOperationError::new();
            let error = self.error.into_iter().fold(error, |e, v| e.set_details(v));
            let error = self
                .http_error_status_code
                .into_iter()
                .fold(error, |e, v| e.set_status_code(v));
            let error = self
                .http_error_message
                .into_iter()
                .fold(error, |e, v| e.set_message(v));
            return Err(OperationError::Generic(error));
        }
        Ok(self)
    }
}

/// Possible errors returned by an operation.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum OperationError {
    /// A HTTP error with additional details.
    Generic(GenericOperationError),
}

impl std::fmt::Display for OperationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generic(d) => write!(f, "the operation failed with {d:?}"),
        }
    }
}

impl std::error::Error for OperationError {}

/// Details about a generic operation error.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GenericOperationError {
    /// The HTTP error message.
    pub message: Option<String>,

    /// The HTTP error status code.
    pub status_code: Option<i32>,

    /// The errors generated while processing the operation.
    pub details: Option<crate::model::operation::Error>,
}

impl GenericOperationError {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the [message][Self::message] field.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_compute_firewallpolicies_v1::errors::GenericOperationError;
    /// let error = GenericOperationError::new().set_message("useful in mocks");
    /// ```
    pub fn set_message<V: Into<String>>(mut self, v: V) -> Self {
        self.message = Some(v.into());
        self
    }

    /// Set the [status_code][Self::status_code] field.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_compute_firewallpolicies_v1::errors::GenericOperationError;
    /// let error = GenericOperationError::new().set_status_code(503);
    /// ```
    pub fn set_status_code(mut self, v: i32) -> Self {
        self.status_code = Some(v);
        self
    }

    /// Set the [details][Self::details] field.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_compute_firewallpolicies_v1::errors::GenericOperationError;
    /// use google_cloud_compute_firewallpolicies_v1::model::operation::{Error, error::Errors};
    /// let error = GenericOperationError::new().set_details(
    ///     Error::new().set_errors([
    ///         Errors::new()
    ///             .set_code("MOCK_ERROR_CODE")
    ///             .set_location("some_field")
    ///             .set_message("a mocked error"),
    ///         ]),
    /// );
    /// ```
    pub fn set_details<V: Into<crate::model::operation::Error>>(mut self, v: V) -> Self {
        self.details = Some(v.into());
        self
    }
}

/// The errors detected while validating the client credential configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CredentialsConfigError {
    /// In-memory credentials and a credentials file are mutually exclusive.
    #[error("credentials and a credentials file are mutually exclusive, provide at most one")]
    Exclusive,
    /// The credentials file could not be read.
    #[error("cannot read the credentials file {path}")]
    UnreadableFile {
        /// The path that could not be read.
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The credentials file did not contain valid JSON.
    #[error("cannot parse the credentials file {path}")]
    MalformedFile {
        /// The path that could not be parsed.
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// The credentials file contents are not a usable credential.
    #[error("invalid credentials in file {path}")]
    InvalidCredentials {
        /// The path that was rejected.
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Operation, operation::Error};

    #[test]
    fn to_result() {
        let operation = Operation::new().set_client_operation_id("abc");
        let got = operation.clone().to_result();
        assert!(matches!(got, Ok(ref o) if o == &operation), "{got:?}");

        let operation = Operation::new().set_http_error_message("uh-oh");
        let got = operation.clone().to_result();
        assert!(
            matches!(got, Err(OperationError::Generic(ref e)) if e == &GenericOperationError::new().set_message("uh-oh")),
            "{got:?}"
        );

        let operation = Operation::new().set_http_error_status_code(503);
        let got = operation.clone().to_result();
        assert!(
            matches!(got, Err(OperationError::Generic(ref e)) if e == &GenericOperationError::new().set_status_code(503)),
            "{got:?}"
        );

        let operation = Operation::new().set_error(Error::new());
        let got = operation.clone().to_result();
        assert!(
            matches!(got, Err(OperationError::Generic(ref e)) if e == &GenericOperationError::new().set_details(Error::new())),
            "{got:?}"
        );
    }

    #[test]
    fn display() {
        let input =
            OperationError::Generic(GenericOperationError::new().set_message("test-message"));
        let got = input.to_string();
        assert!(got.contains("test-message"), "{input:?} => {got}");
    }

    #[test]
    fn generic_operation_setters() {
        use crate::model::operation::{Error, error::Errors};
        let got = GenericOperationError::new().set_message("abc");
        assert_eq!(got.message.as_deref(), Some("abc"));

        let got = GenericOperationError::new().set_status_code(123);
        assert_eq!(got.status_code, Some(123));

        let details = Error::new().set_errors([Errors::new()
            .set_code("QUOTA_EXCEEDED")
            .set_location("parentId")
            .set_message("uh-oh")]);
        let got = GenericOperationError::new().set_details(details.clone());
        assert_eq!(got.details, Some(details));
    }

    #[test]
    fn credentials_config_display() {
        let got = CredentialsConfigError::Exclusive.to_string();
        assert!(got.contains("mutually exclusive"), "{got}");

        let got = CredentialsConfigError::UnreadableFile {
            path: "/no/such/file.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        }
        .to_string();
        assert!(got.contains("/no/such/file.json"), "{got}");
    }
}

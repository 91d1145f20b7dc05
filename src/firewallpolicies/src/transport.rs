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

//! The REST transport for the firewall policies service.

use crate::Result;
use gax::response::Response;
use google_cloud_auth as auth;
use std::collections::HashMap;
use std::time::Duration;

/// The default settings applied to each remote operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MethodSettings {
    /// The attempt timeout applied when the caller sets none.
    pub default_timeout: Option<Duration>,
    /// Whether the operation is safe to retry by default.
    pub idempotent: bool,
}

lazy_static::lazy_static! {
    static ref METHOD_SETTINGS: HashMap<&'static str, MethodSettings> = {
        let get = MethodSettings { default_timeout: None, idempotent: true };
        let mutation = MethodSettings { default_timeout: None, idempotent: false };
        HashMap::from([
            ("add_association", mutation),
            ("add_rule", mutation),
            ("clone_rules", mutation),
            ("delete", mutation),
            ("get", get),
            ("get_association", get),
            ("get_iam_policy", get),
            ("get_rule", get),
            ("insert", mutation),
            ("list", get),
            ("list_associations", get),
            ("move", mutation),
            ("patch", mutation),
            ("patch_rule", mutation),
            ("remove_association", mutation),
            ("remove_rule", mutation),
            ("set_iam_policy", mutation),
            ("test_iam_permissions", mutation),
        ])
    };
}

/// Returns the default call settings for the named operation.
pub fn method_settings(name: &str) -> Option<&'static MethodSettings> {
    METHOD_SETTINGS.get(name)
}

fn apply_method_defaults(
    options: gax::options::RequestOptions,
    name: &str,
) -> gax::options::RequestOptions {
    let Some(settings) = method_settings(name) else {
        return options;
    };
    let mut options = gax::options::internal::set_default_idempotency(options, settings.idempotent);
    if options.attempt_timeout().is_none() {
        if let Some(timeout) = settings.default_timeout {
            options.set_attempt_timeout(timeout);
        }
    }
    options
}

/// Appends the default port to hosts without one and defaults the scheme.
///
/// A host that already contains a colon, either a port or a scheme, is
/// returned as the caller wrote it.
fn normalize_endpoint(host: String) -> String {
    let host = if host.contains(':') {
        host
    } else {
        format!("{host}:443")
    };
    if host.contains("://") {
        host
    } else {
        format!("https://{host}")
    }
}

/// Optional credential sources accepted when building the transport.
///
/// In-memory credentials travel in the client configuration. A credentials
/// file and in-memory credentials are mutually exclusive.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct CredentialsOptions {
    /// A path to a credentials file in JSON format.
    pub credentials_file: Option<String>,
    /// The OAuth2 scopes requested for the loaded credentials. Defaults to
    /// [crate::DEFAULT_SCOPES].
    pub scopes: Option<Vec<String>>,
}

impl CredentialsOptions {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [credentials_file][Self::credentials_file].
    pub fn set_credentials_file<T: Into<String>>(mut self, v: T) -> Self {
        self.credentials_file = Some(v.into());
        self
    }

    /// Sets the value of [scopes][Self::scopes].
    pub fn set_scopes<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.scopes = Some(v.into_iter().map(|v| v.into()).collect());
        self
    }
}

fn default_scopes() -> Vec<String> {
    crate::DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect()
}

fn credentials_from_file(
    path: &str,
    scopes: &[String],
) -> std::result::Result<auth::credentials::Credentials, crate::errors::CredentialsConfigError> {
    use crate::errors::CredentialsConfigError;
    let contents = std::fs::read_to_string(path).map_err(|source| {
        CredentialsConfigError::UnreadableFile {
            path: path.to_string(),
            source,
        }
    })?;
    let json = serde_json::from_str::<serde_json::Value>(&contents).map_err(|source| {
        CredentialsConfigError::MalformedFile {
            path: path.to_string(),
            source,
        }
    })?;
    auth::credentials::Builder::new(json)
        .with_scopes(scopes)
        .build()
        .map_err(|source| CredentialsConfigError::InvalidCredentials {
            path: path.to_string(),
            source: source.into(),
        })
}

fn resolve_credentials(
    credentials: Option<auth::credentials::Credentials>,
    options: CredentialsOptions,
) -> gax::client_builder::Result<auth::credentials::Credentials> {
    resolve_credentials_with(credentials, options, |scopes| {
        auth::credentials::Builder::default()
            .with_scopes(scopes)
            .build()
            .map_err(gax::client_builder::Error::cred)
    })
}

fn resolve_credentials_with<F>(
    credentials: Option<auth::credentials::Credentials>,
    options: CredentialsOptions,
    ambient: F,
) -> gax::client_builder::Result<auth::credentials::Credentials>
where
    F: FnOnce(&[String]) -> gax::client_builder::Result<auth::credentials::Credentials>,
{
    use gax::client_builder::Error;
    if credentials.is_some() && options.credentials_file.is_some() {
        return Err(Error::cred(
            crate::errors::CredentialsConfigError::Exclusive,
        ));
    }
    if let Some(credentials) = credentials {
        return Ok(credentials);
    }
    let scopes = options.scopes.unwrap_or_else(default_scopes);
    if let Some(path) = options.credentials_file {
        return credentials_from_file(&path, &scopes).map_err(Error::cred);
    }
    ambient(&scopes)
}

/// Implements [FirewallPolicies](crate::stub::FirewallPolicies) using a
/// [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct FirewallPolicies {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for FirewallPolicies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirewallPolicies")
            .field("inner", &self.inner)
            .finish()
    }
}

impl FirewallPolicies {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        Self::with_credentials_options(config, CredentialsOptions::default()).await
    }

    /// Builds the transport applying the service's credential rules.
    ///
    /// In-memory credentials (in `config`) and a credentials file are
    /// mutually exclusive. With neither, ambient credentials are resolved,
    /// requesting [crate::DEFAULT_SCOPES] unless the options say otherwise.
    pub async fn with_credentials_options(
        mut config: gaxi::options::ClientConfig,
        options: CredentialsOptions,
    ) -> gax::client_builder::Result<Self> {
        let endpoint = normalize_endpoint(
            config
                .endpoint
                .take()
                .unwrap_or_else(|| crate::DEFAULT_HOST.to_string()),
        );
        config.endpoint = Some(endpoint);
        config.cred = Some(resolve_credentials(config.cred.take(), options)?);
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

impl crate::stub::FirewallPolicies for FirewallPolicies {
    async fn add_association(
        &self,
        req: crate::model::AddAssociationFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Operation>> {
        let options = apply_method_defaults(options, "add_association");
        if req.firewall_policy.is_empty() {
            return Err(gaxi::path_parameter::missing("firewall_policy"));
        }
        let path = format!(
            "/compute/v1/locations/global/firewallPolicies/{}/addAssociation",
            req.firewall_policy,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .replace_existing_association
            .iter()
            .fold(builder, |builder, p| {
                builder.query(&[("replaceExistingAssociation", p)])
            });
        let builder = req
            .request_id
            .iter()
            .fold(builder, |builder, p| builder.query(&[("requestId", p)]));
        self.inner
            .execute(builder, req.firewall_policy_association_resource, options)
            .await
    }

    async fn add_rule(
        &self,
        req: crate::model::AddRuleFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Operation>> {
        let options = apply_method_defaults(options, "add_rule");
        if req.firewall_policy.is_empty() {
            return Err(gaxi::path_parameter::missing("firewall_policy"));
        }
        let path = format!(
            "/compute/v1/locations/global/firewallPolicies/{}/addRule",
            req.firewall_policy,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .request_id
            .iter()
            .fold(builder, |builder, p| builder.query(&[("requestId", p)]));
        self.inner
            .execute(builder, req.firewall_policy_rule_resource, options)
            .await
    }

    async fn clone_rules(
        &self,
        req: crate::model::CloneRulesFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Operation>> {
        let options = apply_method_defaults(options, "clone_rules");
        if req.firewall_policy.is_empty() {
            return Err(gaxi::path_parameter::missing("firewall_policy"));
        }
        let path = format!(
            "/compute/v1/locations/global/firewallPolicies/{}/cloneRules",
            req.firewall_policy,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .request_id
            .iter()
            .fold(builder, |builder, p| builder.query(&[("requestId", p)]));
        let builder = req
            .source_firewall_policy
            .iter()
            .fold(builder, |builder, p| {
                builder.query(&[("sourceFirewallPolicy", p)])
            });
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn delete(
        &self,
        req: crate::model::DeleteFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Operation>> {
        let options = apply_method_defaults(options, "delete");
        if req.firewall_policy.is_empty() {
            return Err(gaxi::path_parameter::missing("firewall_policy"));
        }
        let path = format!(
            "/compute/v1/locations/global/firewallPolicies/{}",
            req.firewall_policy,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .request_id
            .iter()
            .fold(builder, |builder, p| builder.query(&[("requestId", p)]));
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get(
        &self,
        req: crate::model::GetFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::FirewallPolicy>> {
        let options = apply_method_defaults(options, "get");
        if req.firewall_policy.is_empty() {
            return Err(gaxi::path_parameter::missing("firewall_policy"));
        }
        let path = format!(
            "/compute/v1/locations/global/firewallPolicies/{}",
            req.firewall_policy,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_association(
        &self,
        req: crate::model::GetAssociationFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::FirewallPolicyAssociation>> {
        let options = apply_method_defaults(options, "get_association");
        if req.firewall_policy.is_empty() {
            return Err(gaxi::path_parameter::missing("firewall_policy"));
        }
        let path = format!(
            "/compute/v1/locations/global/firewallPolicies/{}/getAssociation",
            req.firewall_policy,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .name
            .iter()
            .fold(builder, |builder, p| builder.query(&[("name", p)]));
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_iam_policy(
        &self,
        req: crate::model::GetIamPolicyFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Policy>> {
        let options = apply_method_defaults(options, "get_iam_policy");
        if req.resource.is_empty() {
            return Err(gaxi::path_parameter::missing("resource"));
        }
        let path = format!(
            "/compute/v1/locations/global/firewallPolicies/{}/getIamPolicy",
            req.resource,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .options_requested_policy_version
            .iter()
            .fold(builder, |builder, p| {
                builder.query(&[("optionsRequestedPolicyVersion", p)])
            });
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_rule(
        &self,
        req: crate::model::GetRuleFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::FirewallPolicyRule>> {
        let options = apply_method_defaults(options, "get_rule");
        if req.firewall_policy.is_empty() {
            return Err(gaxi::path_parameter::missing("firewall_policy"));
        }
        let path = format!(
            "/compute/v1/locations/global/firewallPolicies/{}/getRule",
            req.firewall_policy,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .priority
            .iter()
            .fold(builder, |builder, p| builder.query(&[("priority", p)]));
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn insert(
        &self,
        req: crate::model::InsertFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Operation>> {
        let options = apply_method_defaults(options, "insert");
        if req.parent_id.is_empty() {
            return Err(gaxi::path_parameter::missing("parent_id"));
        }
        let path = "/compute/v1/locations/global/firewallPolicies".to_string();
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .query(&[("parentId", &req.parent_id)])
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .request_id
            .iter()
            .fold(builder, |builder, p| builder.query(&[("requestId", p)]));
        self.inner
            .execute(builder, req.firewall_policy_resource, options)
            .await
    }

    async fn list(
        &self,
        req: crate::model::ListFirewallPoliciesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::FirewallPolicyList>> {
        let options = apply_method_defaults(options, "list");
        let path = "/compute/v1/locations/global/firewallPolicies".to_string();
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .filter
            .iter()
            .fold(builder, |builder, p| builder.query(&[("filter", p)]));
        let builder = req
            .max_results
            .iter()
            .fold(builder, |builder, p| builder.query(&[("maxResults", p)]));
        let builder = req
            .order_by
            .iter()
            .fold(builder, |builder, p| builder.query(&[("orderBy", p)]));
        let builder = req
            .page_token
            .iter()
            .fold(builder, |builder, p| builder.query(&[("pageToken", p)]));
        let builder = req
            .parent_id
            .iter()
            .fold(builder, |builder, p| builder.query(&[("parentId", p)]));
        let builder = req
            .return_partial_success
            .iter()
            .fold(builder, |builder, p| {
                builder.query(&[("returnPartialSuccess", p)])
            });
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_associations(
        &self,
        req: crate::model::ListAssociationsFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::FirewallPoliciesListAssociationsResponse>> {
        let options = apply_method_defaults(options, "list_associations");
        let path = "/compute/v1/locations/global/firewallPolicies/listAssociations".to_string();
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .target_resource
            .iter()
            .fold(builder, |builder, p| builder.query(&[("targetResource", p)]));
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn move_firewall_policy(
        &self,
        req: crate::model::MoveFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Operation>> {
        let options = apply_method_defaults(options, "move");
        if req.firewall_policy.is_empty() {
            return Err(gaxi::path_parameter::missing("firewall_policy"));
        }
        if req.parent_id.is_empty() {
            return Err(gaxi::path_parameter::missing("parent_id"));
        }
        let path = format!(
            "/compute/v1/locations/global/firewallPolicies/{}/move",
            req.firewall_policy,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .query(&[("parentId", &req.parent_id)])
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .request_id
            .iter()
            .fold(builder, |builder, p| builder.query(&[("requestId", p)]));
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn patch(
        &self,
        req: crate::model::PatchFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Operation>> {
        let options = apply_method_defaults(options, "patch");
        if req.firewall_policy.is_empty() {
            return Err(gaxi::path_parameter::missing("firewall_policy"));
        }
        let path = format!(
            "/compute/v1/locations/global/firewallPolicies/{}",
            req.firewall_policy,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PATCH, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .request_id
            .iter()
            .fold(builder, |builder, p| builder.query(&[("requestId", p)]));
        self.inner
            .execute(builder, req.firewall_policy_resource, options)
            .await
    }

    async fn patch_rule(
        &self,
        req: crate::model::PatchRuleFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Operation>> {
        let options = apply_method_defaults(options, "patch_rule");
        if req.firewall_policy.is_empty() {
            return Err(gaxi::path_parameter::missing("firewall_policy"));
        }
        let path = format!(
            "/compute/v1/locations/global/firewallPolicies/{}/patchRule",
            req.firewall_policy,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .priority
            .iter()
            .fold(builder, |builder, p| builder.query(&[("priority", p)]));
        let builder = req
            .request_id
            .iter()
            .fold(builder, |builder, p| builder.query(&[("requestId", p)]));
        self.inner
            .execute(builder, req.firewall_policy_rule_resource, options)
            .await
    }

    async fn remove_association(
        &self,
        req: crate::model::RemoveAssociationFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Operation>> {
        let options = apply_method_defaults(options, "remove_association");
        if req.firewall_policy.is_empty() {
            return Err(gaxi::path_parameter::missing("firewall_policy"));
        }
        let path = format!(
            "/compute/v1/locations/global/firewallPolicies/{}/removeAssociation",
            req.firewall_policy,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .name
            .iter()
            .fold(builder, |builder, p| builder.query(&[("name", p)]));
        let builder = req
            .request_id
            .iter()
            .fold(builder, |builder, p| builder.query(&[("requestId", p)]));
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn remove_rule(
        &self,
        req: crate::model::RemoveRuleFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Operation>> {
        let options = apply_method_defaults(options, "remove_rule");
        if req.firewall_policy.is_empty() {
            return Err(gaxi::path_parameter::missing("firewall_policy"));
        }
        let path = format!(
            "/compute/v1/locations/global/firewallPolicies/{}/removeRule",
            req.firewall_policy,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .priority
            .iter()
            .fold(builder, |builder, p| builder.query(&[("priority", p)]));
        let builder = req
            .request_id
            .iter()
            .fold(builder, |builder, p| builder.query(&[("requestId", p)]));
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn set_iam_policy(
        &self,
        req: crate::model::SetIamPolicyFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Policy>> {
        let options = apply_method_defaults(options, "set_iam_policy");
        if req.resource.is_empty() {
            return Err(gaxi::path_parameter::missing("resource"));
        }
        let path = format!(
            "/compute/v1/locations/global/firewallPolicies/{}/setIamPolicy",
            req.resource,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(
                builder,
                req.global_organization_set_policy_request_resource,
                options,
            )
            .await
    }

    async fn test_iam_permissions(
        &self,
        req: crate::model::TestIamPermissionsFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::TestPermissionsResponse>> {
        let options = apply_method_defaults(options, "test_iam_permissions");
        if req.resource.is_empty() {
            return Err(gaxi::path_parameter::missing("resource"));
        }
        let path = format!(
            "/compute/v1/locations/global/firewallPolicies/{}/testIamPermissions",
            req.resource,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, req.test_permissions_request_resource, options)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use google_cloud_auth::credentials::testing::test_credentials;
    use test_case::test_case;

    #[test_case("compute.googleapis.com", "https://compute.googleapis.com:443")]
    #[test_case("private.googleapis.com", "https://private.googleapis.com:443")]
    #[test_case("compute.googleapis.com:8080", "https://compute.googleapis.com:8080")]
    #[test_case("localhost:7469", "https://localhost:7469")]
    #[test_case("http://localhost:7469", "http://localhost:7469")]
    #[test_case("https://compute.googleapis.com", "https://compute.googleapis.com")]
    fn endpoint_normalization(input: &str, want: &str) {
        assert_eq!(normalize_endpoint(input.to_string()), want);
    }

    const OPERATIONS: [&str; 18] = [
        "add_association",
        "add_rule",
        "clone_rules",
        "delete",
        "get",
        "get_association",
        "get_iam_policy",
        "get_rule",
        "insert",
        "list",
        "list_associations",
        "move",
        "patch",
        "patch_rule",
        "remove_association",
        "remove_rule",
        "set_iam_policy",
        "test_iam_permissions",
    ];

    #[test]
    fn method_settings_covers_every_operation() {
        assert_eq!(METHOD_SETTINGS.len(), OPERATIONS.len());
        for name in OPERATIONS {
            let got = method_settings(name);
            assert!(got.is_some(), "missing settings for {name}");
        }
    }

    #[test]
    fn method_settings_defaults() {
        let reads = [
            "get",
            "get_association",
            "get_iam_policy",
            "get_rule",
            "list",
            "list_associations",
        ];
        for (name, settings) in METHOD_SETTINGS.iter() {
            assert_eq!(settings.default_timeout, None, "{name}");
            assert_eq!(settings.idempotent, reads.contains(name), "{name}");
        }
    }

    #[test]
    fn method_settings_applied_to_options() {
        let options = gax::options::RequestOptions::default();
        let got = apply_method_defaults(options, "get");
        assert_eq!(got.idempotent(), Some(true));
        assert_eq!(got.attempt_timeout(), &None);

        let options = gax::options::RequestOptions::default();
        let got = apply_method_defaults(options, "patch");
        assert_eq!(got.idempotent(), Some(false));

        // Caller-provided settings win over the table defaults.
        let mut options = gax::options::RequestOptions::default();
        options.set_idempotency(true);
        let got = apply_method_defaults(options, "patch");
        assert_eq!(got.idempotent(), Some(true));
    }

    #[test]
    fn credentials_are_mutually_exclusive() {
        let options = CredentialsOptions::new().set_credentials_file("/ignored/path.json");
        let got = resolve_credentials_with(Some(test_credentials()), options, |_| {
            panic!("ambient credentials must not be resolved")
        });
        let err = got.expect_err("both sources should fail fast");
        assert!(err.is_default_credentials(), "{err:?}");
        assert!(err.to_string().contains("mutually exclusive"), "{err}");
    }

    #[test]
    fn explicit_credentials_skip_ambient_resolution() {
        let got = resolve_credentials_with(Some(test_credentials()), CredentialsOptions::new(), |_| {
            panic!("ambient credentials must not be resolved")
        });
        assert!(got.is_ok(), "{got:?}");
    }

    #[test]
    fn ambient_credentials_resolved_exactly_once() {
        let mut calls = 0;
        let got = resolve_credentials_with(None, CredentialsOptions::new(), |scopes| {
            calls += 1;
            assert_eq!(scopes, default_scopes());
            Ok(test_credentials())
        });
        assert!(got.is_ok(), "{got:?}");
        assert_eq!(calls, 1);
    }

    #[test]
    fn ambient_credentials_honor_custom_scopes() {
        let options =
            CredentialsOptions::new().set_scopes(["https://www.googleapis.com/auth/compute"]);
        let got = resolve_credentials_with(None, options, |scopes| {
            assert_eq!(scopes, ["https://www.googleapis.com/auth/compute"]);
            Ok(test_credentials())
        });
        assert!(got.is_ok(), "{got:?}");
    }

    #[test]
    fn credentials_file_must_exist() {
        let options = CredentialsOptions::new().set_credentials_file("/no/such/file.json");
        let got = resolve_credentials_with(None, options, |_| {
            panic!("ambient credentials must not be resolved")
        });
        let err = got.expect_err("missing file should fail");
        assert!(err.is_default_credentials(), "{err:?}");
        assert!(err.to_string().contains("/no/such/file.json"), "{err}");
    }

    #[test]
    fn credentials_file_must_be_json() {
        let path = std::env::temp_dir().join("firewallpolicies-transport-not-json.txt");
        std::fs::write(&path, "this is not json").expect("temp file is writable");
        let options = CredentialsOptions::new().set_credentials_file(path.to_string_lossy());
        let got = resolve_credentials_with(None, options, |_| {
            panic!("ambient credentials must not be resolved")
        });
        let _ = std::fs::remove_file(&path);
        let err = got.expect_err("malformed file should fail");
        assert!(err.is_default_credentials(), "{err:?}");
    }

    #[test]
    fn credentials_file_loads_json_credentials() {
        let path = std::env::temp_dir().join("firewallpolicies-transport-authorized-user.json");
        let contents = serde_json::json!({
            "type": "authorized_user",
            "client_id": "test-client-id",
            "client_secret": "test-client-secret",
            "refresh_token": "test-refresh-token",
        });
        std::fs::write(&path, contents.to_string()).expect("temp file is writable");
        let options = CredentialsOptions::new().set_credentials_file(path.to_string_lossy());
        let got = resolve_credentials_with(None, options, |_| {
            panic!("ambient credentials must not be resolved")
        });
        let _ = std::fs::remove_file(&path);
        assert!(got.is_ok(), "{got:?}");
    }
}

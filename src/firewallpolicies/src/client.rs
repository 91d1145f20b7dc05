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

use std::sync::Arc;

/// Implements a client for the Google Compute Engine FirewallPolicies service.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use google_cloud_compute_firewallpolicies_v1::client::FirewallPolicies;
/// let client = FirewallPolicies::builder().build().await?;
/// // use `client` to make requests to the firewall policies service.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// To configure `FirewallPolicies` use the `with_*` methods in the type
/// returned by [builder()][FirewallPolicies::builder]. The default
/// configuration should work for most applications. Common configuration
/// changes include
///
/// * [with_endpoint()]: by default this client uses the global default
///   endpoint (`https://compute.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses [Application Default
///   Credentials]. Applications using custom authentication may need to
///   override this default.
///
/// [with_endpoint()]: super::builder::firewall_policies::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::firewall_policies::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `FirewallPolicies` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `FirewallPolicies` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
#[derive(Clone, Debug)]
pub struct FirewallPolicies {
    inner: Arc<dyn super::stub::dynamic::FirewallPolicies>,
}

impl FirewallPolicies {
    /// Returns a builder for [FirewallPolicies].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_compute_firewallpolicies_v1::client::FirewallPolicies;
    /// let client = FirewallPolicies::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::firewall_policies::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::firewall_policies::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::FirewallPolicies + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Arc<dyn super::stub::dynamic::FirewallPolicies>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::FirewallPolicies> {
        super::transport::FirewallPolicies::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::FirewallPolicies> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::FirewallPolicies::new)
    }

    /// Inserts an association for the specified firewall policy.
    pub fn add_association(&self) -> super::builder::firewall_policies::AddAssociation {
        super::builder::firewall_policies::AddAssociation::new(self.inner.clone())
    }

    /// Inserts a rule into a firewall policy.
    pub fn add_rule(&self) -> super::builder::firewall_policies::AddRule {
        super::builder::firewall_policies::AddRule::new(self.inner.clone())
    }

    /// Copies rules to the specified firewall policy.
    pub fn clone_rules(&self) -> super::builder::firewall_policies::CloneRules {
        super::builder::firewall_policies::CloneRules::new(self.inner.clone())
    }

    /// Deletes the specified policy.
    pub fn delete(&self) -> super::builder::firewall_policies::Delete {
        super::builder::firewall_policies::Delete::new(self.inner.clone())
    }

    /// Returns the specified firewall policy.
    pub fn get(&self) -> super::builder::firewall_policies::Get {
        super::builder::firewall_policies::Get::new(self.inner.clone())
    }

    /// Gets an association with the specified name.
    pub fn get_association(&self) -> super::builder::firewall_policies::GetAssociation {
        super::builder::firewall_policies::GetAssociation::new(self.inner.clone())
    }

    /// Gets the access control policy for a resource. May be empty if no such
    /// policy or resource exists.
    pub fn get_iam_policy(&self) -> super::builder::firewall_policies::GetIamPolicy {
        super::builder::firewall_policies::GetIamPolicy::new(self.inner.clone())
    }

    /// Gets a rule of the specified priority.
    pub fn get_rule(&self) -> super::builder::firewall_policies::GetRule {
        super::builder::firewall_policies::GetRule::new(self.inner.clone())
    }

    /// Creates a new policy in the specified project using the data included
    /// in the request.
    pub fn insert(&self) -> super::builder::firewall_policies::Insert {
        super::builder::firewall_policies::Insert::new(self.inner.clone())
    }

    /// Lists all the policies that have been configured for the specified
    /// folder or organization.
    pub fn list(&self) -> super::builder::firewall_policies::List {
        super::builder::firewall_policies::List::new(self.inner.clone())
    }

    /// Lists associations of a specified target, i.e., organization or folder.
    pub fn list_associations(&self) -> super::builder::firewall_policies::ListAssociations {
        super::builder::firewall_policies::ListAssociations::new(self.inner.clone())
    }

    /// Moves the specified firewall policy.
    pub fn move_firewall_policy(&self) -> super::builder::firewall_policies::MoveFirewallPolicy {
        super::builder::firewall_policies::MoveFirewallPolicy::new(self.inner.clone())
    }

    /// Patches the specified policy with the data included in the request.
    pub fn patch(&self) -> super::builder::firewall_policies::Patch {
        super::builder::firewall_policies::Patch::new(self.inner.clone())
    }

    /// Patches a rule of the specified priority.
    pub fn patch_rule(&self) -> super::builder::firewall_policies::PatchRule {
        super::builder::firewall_policies::PatchRule::new(self.inner.clone())
    }

    /// Removes an association for the specified firewall policy.
    pub fn remove_association(&self) -> super::builder::firewall_policies::RemoveAssociation {
        super::builder::firewall_policies::RemoveAssociation::new(self.inner.clone())
    }

    /// Deletes a rule of the specified priority.
    pub fn remove_rule(&self) -> super::builder::firewall_policies::RemoveRule {
        super::builder::firewall_policies::RemoveRule::new(self.inner.clone())
    }

    /// Sets the access control policy on the specified resource. Replaces any
    /// existing policy.
    pub fn set_iam_policy(&self) -> super::builder::firewall_policies::SetIamPolicy {
        super::builder::firewall_policies::SetIamPolicy::new(self.inner.clone())
    }

    /// Returns permissions that a caller has on the specified resource.
    pub fn test_iam_permissions(&self) -> super::builder::firewall_policies::TestIamPermissions {
        super::builder::firewall_policies::TestIamPermissions::new(self.inner.clone())
    }
}

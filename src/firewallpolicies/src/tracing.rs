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

use crate::Result;
use gax::response::Response;

/// Implements a [FirewallPolicies](crate::stub::FirewallPolicies) decorator
/// for logging and tracing.
#[derive(Clone, Debug)]
pub struct FirewallPolicies<T>
where
    T: crate::stub::FirewallPolicies + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> FirewallPolicies<T>
where
    T: crate::stub::FirewallPolicies + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> crate::stub::FirewallPolicies for FirewallPolicies<T>
where
    T: crate::stub::FirewallPolicies + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn add_association(
        &self,
        req: crate::model::AddAssociationFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Operation>> {
        self.inner.add_association(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn add_rule(
        &self,
        req: crate::model::AddRuleFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Operation>> {
        self.inner.add_rule(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn clone_rules(
        &self,
        req: crate::model::CloneRulesFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Operation>> {
        self.inner.clone_rules(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete(
        &self,
        req: crate::model::DeleteFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Operation>> {
        self.inner.delete(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get(
        &self,
        req: crate::model::GetFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::FirewallPolicy>> {
        self.inner.get(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_association(
        &self,
        req: crate::model::GetAssociationFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::FirewallPolicyAssociation>> {
        self.inner.get_association(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_iam_policy(
        &self,
        req: crate::model::GetIamPolicyFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Policy>> {
        self.inner.get_iam_policy(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_rule(
        &self,
        req: crate::model::GetRuleFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::FirewallPolicyRule>> {
        self.inner.get_rule(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn insert(
        &self,
        req: crate::model::InsertFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Operation>> {
        self.inner.insert(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list(
        &self,
        req: crate::model::ListFirewallPoliciesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::FirewallPolicyList>> {
        self.inner.list(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_associations(
        &self,
        req: crate::model::ListAssociationsFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::FirewallPoliciesListAssociationsResponse>> {
        self.inner.list_associations(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn move_firewall_policy(
        &self,
        req: crate::model::MoveFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Operation>> {
        self.inner.move_firewall_policy(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn patch(
        &self,
        req: crate::model::PatchFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Operation>> {
        self.inner.patch(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn patch_rule(
        &self,
        req: crate::model::PatchRuleFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Operation>> {
        self.inner.patch_rule(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn remove_association(
        &self,
        req: crate::model::RemoveAssociationFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Operation>> {
        self.inner.remove_association(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn remove_rule(
        &self,
        req: crate::model::RemoveRuleFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Operation>> {
        self.inner.remove_rule(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn set_iam_policy(
        &self,
        req: crate::model::SetIamPolicyFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Policy>> {
        self.inner.set_iam_policy(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn test_iam_permissions(
        &self,
        req: crate::model::TestIamPermissionsFirewallPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::TestPermissionsResponse>> {
        self.inner.test_iam_permissions(req, options).await
    }
}

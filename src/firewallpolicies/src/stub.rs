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

use gax::response::Response;

/// Defines the trait used to implement [crate::client::FirewallPolicies].
///
/// Application developers may need to implement this trait to mock
/// `client::FirewallPolicies`. In other use-cases, application developers only
/// use `client::FirewallPolicies` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new
/// methods too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait FirewallPolicies: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::FirewallPolicies::add_association].
    fn add_association(
        &self,
        _req: crate::model::AddAssociationFirewallPolicyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [crate::client::FirewallPolicies::add_rule].
    fn add_rule(
        &self,
        _req: crate::model::AddRuleFirewallPolicyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [crate::client::FirewallPolicies::clone_rules].
    fn clone_rules(
        &self,
        _req: crate::model::CloneRulesFirewallPolicyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [crate::client::FirewallPolicies::delete].
    fn delete(
        &self,
        _req: crate::model::DeleteFirewallPolicyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [crate::client::FirewallPolicies::get].
    fn get(
        &self,
        _req: crate::model::GetFirewallPolicyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<Response<crate::model::FirewallPolicy>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [crate::client::FirewallPolicies::get_association].
    fn get_association(
        &self,
        _req: crate::model::GetAssociationFirewallPolicyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<crate::model::FirewallPolicyAssociation>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [crate::client::FirewallPolicies::get_iam_policy].
    fn get_iam_policy(
        &self,
        _req: crate::model::GetIamPolicyFirewallPolicyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<Response<crate::model::Policy>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [crate::client::FirewallPolicies::get_rule].
    fn get_rule(
        &self,
        _req: crate::model::GetRuleFirewallPolicyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<Response<crate::model::FirewallPolicyRule>>>
    + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [crate::client::FirewallPolicies::insert].
    fn insert(
        &self,
        _req: crate::model::InsertFirewallPolicyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [crate::client::FirewallPolicies::list].
    fn list(
        &self,
        _req: crate::model::ListFirewallPoliciesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<Response<crate::model::FirewallPolicyList>>>
    + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [crate::client::FirewallPolicies::list_associations].
    fn list_associations(
        &self,
        _req: crate::model::ListAssociationsFirewallPolicyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<crate::model::FirewallPoliciesListAssociationsResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [crate::client::FirewallPolicies::move_firewall_policy].
    fn move_firewall_policy(
        &self,
        _req: crate::model::MoveFirewallPolicyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [crate::client::FirewallPolicies::patch].
    fn patch(
        &self,
        _req: crate::model::PatchFirewallPolicyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [crate::client::FirewallPolicies::patch_rule].
    fn patch_rule(
        &self,
        _req: crate::model::PatchRuleFirewallPolicyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [crate::client::FirewallPolicies::remove_association].
    fn remove_association(
        &self,
        _req: crate::model::RemoveAssociationFirewallPolicyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [crate::client::FirewallPolicies::remove_rule].
    fn remove_rule(
        &self,
        _req: crate::model::RemoveRuleFirewallPolicyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [crate::client::FirewallPolicies::set_iam_policy].
    fn set_iam_policy(
        &self,
        _req: crate::model::SetIamPolicyFirewallPolicyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<Response<crate::model::Policy>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [crate::client::FirewallPolicies::test_iam_permissions].
    fn test_iam_permissions(
        &self,
        _req: crate::model::TestIamPermissionsFirewallPolicyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<crate::model::TestPermissionsResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }
}

/// A dyn-compatible version of [FirewallPolicies].
pub mod dynamic {
    use gax::response::Response;

    /// A dyn-compatible version of [super::FirewallPolicies].
    ///
    /// This is used by [crate::client::FirewallPolicies] for type erasure.
    #[async_trait::async_trait]
    pub trait FirewallPolicies: std::fmt::Debug + Send + Sync {
        /// Implements [crate::client::FirewallPolicies::add_association].
        async fn add_association(
            &self,
            req: crate::model::AddAssociationFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::Operation>>;

        /// Implements [crate::client::FirewallPolicies::add_rule].
        async fn add_rule(
            &self,
            req: crate::model::AddRuleFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::Operation>>;

        /// Implements [crate::client::FirewallPolicies::clone_rules].
        async fn clone_rules(
            &self,
            req: crate::model::CloneRulesFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::Operation>>;

        /// Implements [crate::client::FirewallPolicies::delete].
        async fn delete(
            &self,
            req: crate::model::DeleteFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::Operation>>;

        /// Implements [crate::client::FirewallPolicies::get].
        async fn get(
            &self,
            req: crate::model::GetFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::FirewallPolicy>>;

        /// Implements [crate::client::FirewallPolicies::get_association].
        async fn get_association(
            &self,
            req: crate::model::GetAssociationFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::FirewallPolicyAssociation>>;

        /// Implements [crate::client::FirewallPolicies::get_iam_policy].
        async fn get_iam_policy(
            &self,
            req: crate::model::GetIamPolicyFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::Policy>>;

        /// Implements [crate::client::FirewallPolicies::get_rule].
        async fn get_rule(
            &self,
            req: crate::model::GetRuleFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::FirewallPolicyRule>>;

        /// Implements [crate::client::FirewallPolicies::insert].
        async fn insert(
            &self,
            req: crate::model::InsertFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::Operation>>;

        /// Implements [crate::client::FirewallPolicies::list].
        async fn list(
            &self,
            req: crate::model::ListFirewallPoliciesRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::FirewallPolicyList>>;

        /// Implements [crate::client::FirewallPolicies::list_associations].
        async fn list_associations(
            &self,
            req: crate::model::ListAssociationsFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::FirewallPoliciesListAssociationsResponse>>;

        /// Implements [crate::client::FirewallPolicies::move_firewall_policy].
        async fn move_firewall_policy(
            &self,
            req: crate::model::MoveFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::Operation>>;

        /// Implements [crate::client::FirewallPolicies::patch].
        async fn patch(
            &self,
            req: crate::model::PatchFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::Operation>>;

        /// Implements [crate::client::FirewallPolicies::patch_rule].
        async fn patch_rule(
            &self,
            req: crate::model::PatchRuleFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::Operation>>;

        /// Implements [crate::client::FirewallPolicies::remove_association].
        async fn remove_association(
            &self,
            req: crate::model::RemoveAssociationFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::Operation>>;

        /// Implements [crate::client::FirewallPolicies::remove_rule].
        async fn remove_rule(
            &self,
            req: crate::model::RemoveRuleFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::Operation>>;

        /// Implements [crate::client::FirewallPolicies::set_iam_policy].
        async fn set_iam_policy(
            &self,
            req: crate::model::SetIamPolicyFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::Policy>>;

        /// Implements [crate::client::FirewallPolicies::test_iam_permissions].
        async fn test_iam_permissions(
            &self,
            req: crate::model::TestIamPermissionsFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::TestPermissionsResponse>>;
    }

    /// All implementations of [super::FirewallPolicies] also implement [FirewallPolicies].
    #[async_trait::async_trait]
    impl<T: super::FirewallPolicies> FirewallPolicies for T {
        /// Forwards the call to the implementation provided by `T`.
        async fn add_association(
            &self,
            req: crate::model::AddAssociationFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::Operation>> {
            T::add_association(self, req, options).await
        }

        /// Forwards the call to the implementation provided by `T`.
        async fn add_rule(
            &self,
            req: crate::model::AddRuleFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::Operation>> {
            T::add_rule(self, req, options).await
        }

        /// Forwards the call to the implementation provided by `T`.
        async fn clone_rules(
            &self,
            req: crate::model::CloneRulesFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::Operation>> {
            T::clone_rules(self, req, options).await
        }

        /// Forwards the call to the implementation provided by `T`.
        async fn delete(
            &self,
            req: crate::model::DeleteFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::Operation>> {
            T::delete(self, req, options).await
        }

        /// Forwards the call to the implementation provided by `T`.
        async fn get(
            &self,
            req: crate::model::GetFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::FirewallPolicy>> {
            T::get(self, req, options).await
        }

        /// Forwards the call to the implementation provided by `T`.
        async fn get_association(
            &self,
            req: crate::model::GetAssociationFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::FirewallPolicyAssociation>> {
            T::get_association(self, req, options).await
        }

        /// Forwards the call to the implementation provided by `T`.
        async fn get_iam_policy(
            &self,
            req: crate::model::GetIamPolicyFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::Policy>> {
            T::get_iam_policy(self, req, options).await
        }

        /// Forwards the call to the implementation provided by `T`.
        async fn get_rule(
            &self,
            req: crate::model::GetRuleFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::FirewallPolicyRule>> {
            T::get_rule(self, req, options).await
        }

        /// Forwards the call to the implementation provided by `T`.
        async fn insert(
            &self,
            req: crate::model::InsertFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::Operation>> {
            T::insert(self, req, options).await
        }

        /// Forwards the call to the implementation provided by `T`.
        async fn list(
            &self,
            req: crate::model::ListFirewallPoliciesRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::FirewallPolicyList>> {
            T::list(self, req, options).await
        }

        /// Forwards the call to the implementation provided by `T`.
        async fn list_associations(
            &self,
            req: crate::model::ListAssociationsFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::FirewallPoliciesListAssociationsResponse>>
        {
            T::list_associations(self, req, options).await
        }

        /// Forwards the call to the implementation provided by `T`.
        async fn move_firewall_policy(
            &self,
            req: crate::model::MoveFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::Operation>> {
            T::move_firewall_policy(self, req, options).await
        }

        /// Forwards the call to the implementation provided by `T`.
        async fn patch(
            &self,
            req: crate::model::PatchFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::Operation>> {
            T::patch(self, req, options).await
        }

        /// Forwards the call to the implementation provided by `T`.
        async fn patch_rule(
            &self,
            req: crate::model::PatchRuleFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::Operation>> {
            T::patch_rule(self, req, options).await
        }

        /// Forwards the call to the implementation provided by `T`.
        async fn remove_association(
            &self,
            req: crate::model::RemoveAssociationFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::Operation>> {
            T::remove_association(self, req, options).await
        }

        /// Forwards the call to the implementation provided by `T`.
        async fn remove_rule(
            &self,
            req: crate::model::RemoveRuleFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::Operation>> {
            T::remove_rule(self, req, options).await
        }

        /// Forwards the call to the implementation provided by `T`.
        async fn set_iam_policy(
            &self,
            req: crate::model::SetIamPolicyFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::Policy>> {
            T::set_iam_policy(self, req, options).await
        }

        /// Forwards the call to the implementation provided by `T`.
        async fn test_iam_permissions(
            &self,
            req: crate::model::TestIamPermissionsFirewallPolicyRequest,
            options: gax::options::RequestOptions,
        ) -> crate::Result<Response<crate::model::TestPermissionsResponse>> {
            T::test_iam_permissions(self, req, options).await
        }
    }
}

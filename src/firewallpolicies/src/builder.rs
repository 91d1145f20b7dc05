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

pub mod firewall_policies {
    use crate::Result;
    use std::sync::Arc;

    /// A builder for [FirewallPolicies][crate::client::FirewallPolicies].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_compute_firewallpolicies_v1::*;
    /// # use builder::firewall_policies::ClientBuilder;
    /// # use client::FirewallPolicies;
    /// let builder: ClientBuilder = FirewallPolicies::builder();
    /// let client = builder
    ///     .with_endpoint("https://compute.googleapis.com")
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::FirewallPolicies;

        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = FirewallPolicies;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for all firewall policies request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn crate::stub::dynamic::FirewallPolicies>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::FirewallPolicies>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [FirewallPolicies::add_association][crate::client::FirewallPolicies::add_association] calls.
    #[derive(Clone, Debug)]
    pub struct AddAssociation(RequestBuilder<crate::model::AddAssociationFirewallPolicyRequest>);

    impl AddAssociation {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::FirewallPolicies>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::AddAssociationFirewallPolicyRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .add_association(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [firewall_policy][crate::model::AddAssociationFirewallPolicyRequest::firewall_policy].
        pub fn set_firewall_policy<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_firewall_policy(v);
            self
        }

        /// Sets the value of [firewall_policy_association_resource][crate::model::AddAssociationFirewallPolicyRequest::firewall_policy_association_resource].
        pub fn set_firewall_policy_association_resource<
            T: Into<crate::model::FirewallPolicyAssociation>,
        >(
            mut self,
            v: T,
        ) -> Self {
            self.0.request = self.0.request.set_firewall_policy_association_resource(v);
            self
        }

        /// Sets the value of [replace_existing_association][crate::model::AddAssociationFirewallPolicyRequest::replace_existing_association].
        pub fn set_replace_existing_association<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_replace_existing_association(v);
            self
        }

        /// Sets the value of [request_id][crate::model::AddAssociationFirewallPolicyRequest::request_id].
        pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_request_id(v);
            self
        }
    }

    impl gax::options::internal::RequestBuilder for AddAssociation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirewallPolicies::add_rule][crate::client::FirewallPolicies::add_rule] calls.
    #[derive(Clone, Debug)]
    pub struct AddRule(RequestBuilder<crate::model::AddRuleFirewallPolicyRequest>);

    impl AddRule {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::FirewallPolicies>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::AddRuleFirewallPolicyRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .add_rule(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [firewall_policy][crate::model::AddRuleFirewallPolicyRequest::firewall_policy].
        pub fn set_firewall_policy<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_firewall_policy(v);
            self
        }

        /// Sets the value of [firewall_policy_rule_resource][crate::model::AddRuleFirewallPolicyRequest::firewall_policy_rule_resource].
        pub fn set_firewall_policy_rule_resource<T: Into<crate::model::FirewallPolicyRule>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request = self.0.request.set_firewall_policy_rule_resource(v);
            self
        }

        /// Sets the value of [request_id][crate::model::AddRuleFirewallPolicyRequest::request_id].
        pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_request_id(v);
            self
        }
    }

    impl gax::options::internal::RequestBuilder for AddRule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirewallPolicies::clone_rules][crate::client::FirewallPolicies::clone_rules] calls.
    #[derive(Clone, Debug)]
    pub struct CloneRules(RequestBuilder<crate::model::CloneRulesFirewallPolicyRequest>);

    impl CloneRules {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::FirewallPolicies>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CloneRulesFirewallPolicyRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .clone_rules(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [firewall_policy][crate::model::CloneRulesFirewallPolicyRequest::firewall_policy].
        pub fn set_firewall_policy<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_firewall_policy(v);
            self
        }

        /// Sets the value of [request_id][crate::model::CloneRulesFirewallPolicyRequest::request_id].
        pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_request_id(v);
            self
        }

        /// Sets the value of [source_firewall_policy][crate::model::CloneRulesFirewallPolicyRequest::source_firewall_policy].
        pub fn set_source_firewall_policy<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_source_firewall_policy(v);
            self
        }
    }

    impl gax::options::internal::RequestBuilder for CloneRules {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirewallPolicies::delete][crate::client::FirewallPolicies::delete] calls.
    #[derive(Clone, Debug)]
    pub struct Delete(RequestBuilder<crate::model::DeleteFirewallPolicyRequest>);

    impl Delete {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::FirewallPolicies>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteFirewallPolicyRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .delete(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [firewall_policy][crate::model::DeleteFirewallPolicyRequest::firewall_policy].
        pub fn set_firewall_policy<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_firewall_policy(v);
            self
        }

        /// Sets the value of [request_id][crate::model::DeleteFirewallPolicyRequest::request_id].
        pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_request_id(v);
            self
        }
    }

    impl gax::options::internal::RequestBuilder for Delete {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirewallPolicies::get][crate::client::FirewallPolicies::get] calls.
    ///
    /// # Example
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_compute_firewallpolicies_v1::client::FirewallPolicies;
    /// # let client = FirewallPolicies::builder().build().await?;
    /// let policy = client
    ///     .get()
    ///     .set_firewall_policy("my-policy")
    ///     .send()
    ///     .await?;
    /// println!("policy = {policy:?}");
    /// # anyhow::Result::<()>::Ok(()) });
    /// ```
    #[derive(Clone, Debug)]
    pub struct Get(RequestBuilder<crate::model::GetFirewallPolicyRequest>);

    impl Get {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::FirewallPolicies>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetFirewallPolicyRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::FirewallPolicy> {
            (*self.0.stub)
                .get(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [firewall_policy][crate::model::GetFirewallPolicyRequest::firewall_policy].
        pub fn set_firewall_policy<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_firewall_policy(v);
            self
        }
    }

    impl gax::options::internal::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirewallPolicies::get_association][crate::client::FirewallPolicies::get_association] calls.
    #[derive(Clone, Debug)]
    pub struct GetAssociation(RequestBuilder<crate::model::GetAssociationFirewallPolicyRequest>);

    impl GetAssociation {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::FirewallPolicies>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetAssociationFirewallPolicyRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::FirewallPolicyAssociation> {
            (*self.0.stub)
                .get_association(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [firewall_policy][crate::model::GetAssociationFirewallPolicyRequest::firewall_policy].
        pub fn set_firewall_policy<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_firewall_policy(v);
            self
        }

        /// Sets the value of [name][crate::model::GetAssociationFirewallPolicyRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_name(v);
            self
        }
    }

    impl gax::options::internal::RequestBuilder for GetAssociation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirewallPolicies::get_iam_policy][crate::client::FirewallPolicies::get_iam_policy] calls.
    #[derive(Clone, Debug)]
    pub struct GetIamPolicy(RequestBuilder<crate::model::GetIamPolicyFirewallPolicyRequest>);

    impl GetIamPolicy {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::FirewallPolicies>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetIamPolicyFirewallPolicyRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Policy> {
            (*self.0.stub)
                .get_iam_policy(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [options_requested_policy_version][crate::model::GetIamPolicyFirewallPolicyRequest::options_requested_policy_version].
        pub fn set_options_requested_policy_version<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_options_requested_policy_version(v);
            self
        }

        /// Sets the value of [resource][crate::model::GetIamPolicyFirewallPolicyRequest::resource].
        pub fn set_resource<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_resource(v);
            self
        }
    }

    impl gax::options::internal::RequestBuilder for GetIamPolicy {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirewallPolicies::get_rule][crate::client::FirewallPolicies::get_rule] calls.
    #[derive(Clone, Debug)]
    pub struct GetRule(RequestBuilder<crate::model::GetRuleFirewallPolicyRequest>);

    impl GetRule {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::FirewallPolicies>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetRuleFirewallPolicyRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::FirewallPolicyRule> {
            (*self.0.stub)
                .get_rule(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [firewall_policy][crate::model::GetRuleFirewallPolicyRequest::firewall_policy].
        pub fn set_firewall_policy<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_firewall_policy(v);
            self
        }

        /// Sets the value of [priority][crate::model::GetRuleFirewallPolicyRequest::priority].
        pub fn set_priority<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_priority(v);
            self
        }
    }

    impl gax::options::internal::RequestBuilder for GetRule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirewallPolicies::insert][crate::client::FirewallPolicies::insert] calls.
    #[derive(Clone, Debug)]
    pub struct Insert(RequestBuilder<crate::model::InsertFirewallPolicyRequest>);

    impl Insert {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::FirewallPolicies>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::InsertFirewallPolicyRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .insert(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [firewall_policy_resource][crate::model::InsertFirewallPolicyRequest::firewall_policy_resource].
        pub fn set_firewall_policy_resource<T: Into<crate::model::FirewallPolicy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request = self.0.request.set_firewall_policy_resource(v);
            self
        }

        /// Sets the value of [parent_id][crate::model::InsertFirewallPolicyRequest::parent_id].
        pub fn set_parent_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_parent_id(v);
            self
        }

        /// Sets the value of [request_id][crate::model::InsertFirewallPolicyRequest::request_id].
        pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_request_id(v);
            self
        }
    }

    impl gax::options::internal::RequestBuilder for Insert {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirewallPolicies::list][crate::client::FirewallPolicies::list] calls.
    ///
    /// # Example
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_compute_firewallpolicies_v1::client::FirewallPolicies;
    /// use gax::paginator::{ItemPaginator, Paginator};
    /// # let client = FirewallPolicies::builder().build().await?;
    /// let mut items = client
    ///     .list()
    ///     .set_parent_id("organizations/123456789")
    ///     .by_item();
    /// while let Some(policy) = items.next().await {
    ///     println!("{:?}", policy?);
    /// }
    /// # anyhow::Result::<()>::Ok(()) });
    /// ```
    #[derive(Clone, Debug)]
    pub struct List(RequestBuilder<crate::model::ListFirewallPoliciesRequest>);

    impl List {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::FirewallPolicies>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListFirewallPoliciesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::FirewallPolicyList> {
            (*self.0.stub)
                .list(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> impl gax::paginator::Paginator<crate::model::FirewallPolicyList, gax::error::Error>
        {
            use std::clone::Clone;
            let token = self.0.request.page_token.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request = builder.0.request.set_page_token(token);
                builder.send()
            };
            gax::paginator::internal::new_paginator(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> impl gax::paginator::ItemPaginator<crate::model::FirewallPolicyList, gax::error::Error>
        {
            use gax::paginator::Paginator;
            self.by_page().items()
        }

        /// Sets the value of [filter][crate::model::ListFirewallPoliciesRequest::filter].
        pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_filter(v);
            self
        }

        /// Sets the value of [max_results][crate::model::ListFirewallPoliciesRequest::max_results].
        pub fn set_max_results<T: Into<u32>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_max_results(v);
            self
        }

        /// Sets the value of [order_by][crate::model::ListFirewallPoliciesRequest::order_by].
        pub fn set_order_by<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_order_by(v);
            self
        }

        /// Sets the value of [page_token][crate::model::ListFirewallPoliciesRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_page_token(v);
            self
        }

        /// Sets the value of [parent_id][crate::model::ListFirewallPoliciesRequest::parent_id].
        pub fn set_parent_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_parent_id(v);
            self
        }

        /// Sets the value of [return_partial_success][crate::model::ListFirewallPoliciesRequest::return_partial_success].
        pub fn set_return_partial_success<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_return_partial_success(v);
            self
        }
    }

    impl gax::options::internal::RequestBuilder for List {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirewallPolicies::list_associations][crate::client::FirewallPolicies::list_associations] calls.
    #[derive(Clone, Debug)]
    pub struct ListAssociations(
        RequestBuilder<crate::model::ListAssociationsFirewallPolicyRequest>,
    );

    impl ListAssociations {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::FirewallPolicies>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListAssociationsFirewallPolicyRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::FirewallPoliciesListAssociationsResponse> {
            (*self.0.stub)
                .list_associations(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [target_resource][crate::model::ListAssociationsFirewallPolicyRequest::target_resource].
        pub fn set_target_resource<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_target_resource(v);
            self
        }
    }

    impl gax::options::internal::RequestBuilder for ListAssociations {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirewallPolicies::move_firewall_policy][crate::client::FirewallPolicies::move_firewall_policy] calls.
    #[derive(Clone, Debug)]
    pub struct MoveFirewallPolicy(RequestBuilder<crate::model::MoveFirewallPolicyRequest>);

    impl MoveFirewallPolicy {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::FirewallPolicies>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::MoveFirewallPolicyRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .move_firewall_policy(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [firewall_policy][crate::model::MoveFirewallPolicyRequest::firewall_policy].
        pub fn set_firewall_policy<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_firewall_policy(v);
            self
        }

        /// Sets the value of [parent_id][crate::model::MoveFirewallPolicyRequest::parent_id].
        pub fn set_parent_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_parent_id(v);
            self
        }

        /// Sets the value of [request_id][crate::model::MoveFirewallPolicyRequest::request_id].
        pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_request_id(v);
            self
        }
    }

    impl gax::options::internal::RequestBuilder for MoveFirewallPolicy {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirewallPolicies::patch][crate::client::FirewallPolicies::patch] calls.
    #[derive(Clone, Debug)]
    pub struct Patch(RequestBuilder<crate::model::PatchFirewallPolicyRequest>);

    impl Patch {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::FirewallPolicies>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::PatchFirewallPolicyRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .patch(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [firewall_policy][crate::model::PatchFirewallPolicyRequest::firewall_policy].
        pub fn set_firewall_policy<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_firewall_policy(v);
            self
        }

        /// Sets the value of [firewall_policy_resource][crate::model::PatchFirewallPolicyRequest::firewall_policy_resource].
        pub fn set_firewall_policy_resource<T: Into<crate::model::FirewallPolicy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request = self.0.request.set_firewall_policy_resource(v);
            self
        }

        /// Sets the value of [request_id][crate::model::PatchFirewallPolicyRequest::request_id].
        pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_request_id(v);
            self
        }
    }

    impl gax::options::internal::RequestBuilder for Patch {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirewallPolicies::patch_rule][crate::client::FirewallPolicies::patch_rule] calls.
    #[derive(Clone, Debug)]
    pub struct PatchRule(RequestBuilder<crate::model::PatchRuleFirewallPolicyRequest>);

    impl PatchRule {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::FirewallPolicies>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::PatchRuleFirewallPolicyRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .patch_rule(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [firewall_policy][crate::model::PatchRuleFirewallPolicyRequest::firewall_policy].
        pub fn set_firewall_policy<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_firewall_policy(v);
            self
        }

        /// Sets the value of [firewall_policy_rule_resource][crate::model::PatchRuleFirewallPolicyRequest::firewall_policy_rule_resource].
        pub fn set_firewall_policy_rule_resource<T: Into<crate::model::FirewallPolicyRule>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request = self.0.request.set_firewall_policy_rule_resource(v);
            self
        }

        /// Sets the value of [priority][crate::model::PatchRuleFirewallPolicyRequest::priority].
        pub fn set_priority<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_priority(v);
            self
        }

        /// Sets the value of [request_id][crate::model::PatchRuleFirewallPolicyRequest::request_id].
        pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_request_id(v);
            self
        }
    }

    impl gax::options::internal::RequestBuilder for PatchRule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirewallPolicies::remove_association][crate::client::FirewallPolicies::remove_association] calls.
    #[derive(Clone, Debug)]
    pub struct RemoveAssociation(
        RequestBuilder<crate::model::RemoveAssociationFirewallPolicyRequest>,
    );

    impl RemoveAssociation {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::FirewallPolicies>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RemoveAssociationFirewallPolicyRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .remove_association(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [firewall_policy][crate::model::RemoveAssociationFirewallPolicyRequest::firewall_policy].
        pub fn set_firewall_policy<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_firewall_policy(v);
            self
        }

        /// Sets the value of [name][crate::model::RemoveAssociationFirewallPolicyRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_name(v);
            self
        }

        /// Sets the value of [request_id][crate::model::RemoveAssociationFirewallPolicyRequest::request_id].
        pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_request_id(v);
            self
        }
    }

    impl gax::options::internal::RequestBuilder for RemoveAssociation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirewallPolicies::remove_rule][crate::client::FirewallPolicies::remove_rule] calls.
    #[derive(Clone, Debug)]
    pub struct RemoveRule(RequestBuilder<crate::model::RemoveRuleFirewallPolicyRequest>);

    impl RemoveRule {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::FirewallPolicies>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RemoveRuleFirewallPolicyRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .remove_rule(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [firewall_policy][crate::model::RemoveRuleFirewallPolicyRequest::firewall_policy].
        pub fn set_firewall_policy<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_firewall_policy(v);
            self
        }

        /// Sets the value of [priority][crate::model::RemoveRuleFirewallPolicyRequest::priority].
        pub fn set_priority<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_priority(v);
            self
        }

        /// Sets the value of [request_id][crate::model::RemoveRuleFirewallPolicyRequest::request_id].
        pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_request_id(v);
            self
        }
    }

    impl gax::options::internal::RequestBuilder for RemoveRule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirewallPolicies::set_iam_policy][crate::client::FirewallPolicies::set_iam_policy] calls.
    #[derive(Clone, Debug)]
    pub struct SetIamPolicy(RequestBuilder<crate::model::SetIamPolicyFirewallPolicyRequest>);

    impl SetIamPolicy {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::FirewallPolicies>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::SetIamPolicyFirewallPolicyRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Policy> {
            (*self.0.stub)
                .set_iam_policy(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [global_organization_set_policy_request_resource][crate::model::SetIamPolicyFirewallPolicyRequest::global_organization_set_policy_request_resource].
        pub fn set_global_organization_set_policy_request_resource<
            T: Into<crate::model::GlobalOrganizationSetPolicyRequest>,
        >(
            mut self,
            v: T,
        ) -> Self {
            self.0.request = self
                .0
                .request
                .set_global_organization_set_policy_request_resource(v);
            self
        }

        /// Sets the value of [resource][crate::model::SetIamPolicyFirewallPolicyRequest::resource].
        pub fn set_resource<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_resource(v);
            self
        }
    }

    impl gax::options::internal::RequestBuilder for SetIamPolicy {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirewallPolicies::test_iam_permissions][crate::client::FirewallPolicies::test_iam_permissions] calls.
    #[derive(Clone, Debug)]
    pub struct TestIamPermissions(
        RequestBuilder<crate::model::TestIamPermissionsFirewallPolicyRequest>,
    );

    impl TestIamPermissions {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::FirewallPolicies>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::TestIamPermissionsFirewallPolicyRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::TestPermissionsResponse> {
            (*self.0.stub)
                .test_iam_permissions(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [resource][crate::model::TestIamPermissionsFirewallPolicyRequest::resource].
        pub fn set_resource<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_resource(v);
            self
        }

        /// Sets the value of [test_permissions_request_resource][crate::model::TestIamPermissionsFirewallPolicyRequest::test_permissions_request_resource].
        pub fn set_test_permissions_request_resource<
            T: Into<crate::model::TestPermissionsRequest>,
        >(
            mut self,
            v: T,
        ) -> Self {
            self.0.request = self.0.request.set_test_permissions_request_resource(v);
            self
        }
    }

    impl gax::options::internal::RequestBuilder for TestIamPermissions {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}

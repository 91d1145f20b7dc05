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

//! Verifies the default stub methods always fail. Implementations that
//! override a subset of the trait should not silently succeed on the rest.

use gax::options::RequestOptions;
use google_cloud_compute_firewallpolicies_v1 as fwp;
use google_cloud_compute_firewallpolicies_v1::stub::FirewallPolicies;

#[derive(Debug)]
struct Bare;
impl fwp::stub::FirewallPolicies for Bare {}

#[tokio::test]
#[should_panic(expected = "not implemented")]
async fn add_association() {
    let _ = Bare
        .add_association(
            fwp::model::AddAssociationFirewallPolicyRequest::new(),
            RequestOptions::default(),
        )
        .await;
}

#[tokio::test]
#[should_panic(expected = "not implemented")]
async fn add_rule() {
    let _ = Bare
        .add_rule(
            fwp::model::AddRuleFirewallPolicyRequest::new(),
            RequestOptions::default(),
        )
        .await;
}

#[tokio::test]
#[should_panic(expected = "not implemented")]
async fn clone_rules() {
    let _ = Bare
        .clone_rules(
            fwp::model::CloneRulesFirewallPolicyRequest::new(),
            RequestOptions::default(),
        )
        .await;
}

#[tokio::test]
#[should_panic(expected = "not implemented")]
async fn delete() {
    let _ = Bare
        .delete(
            fwp::model::DeleteFirewallPolicyRequest::new(),
            RequestOptions::default(),
        )
        .await;
}

#[tokio::test]
#[should_panic(expected = "not implemented")]
async fn get() {
    let _ = Bare
        .get(
            fwp::model::GetFirewallPolicyRequest::new(),
            RequestOptions::default(),
        )
        .await;
}

#[tokio::test]
#[should_panic(expected = "not implemented")]
async fn get_association() {
    let _ = Bare
        .get_association(
            fwp::model::GetAssociationFirewallPolicyRequest::new(),
            RequestOptions::default(),
        )
        .await;
}

#[tokio::test]
#[should_panic(expected = "not implemented")]
async fn get_iam_policy() {
    let _ = Bare
        .get_iam_policy(
            fwp::model::GetIamPolicyFirewallPolicyRequest::new(),
            RequestOptions::default(),
        )
        .await;
}

#[tokio::test]
#[should_panic(expected = "not implemented")]
async fn get_rule() {
    let _ = Bare
        .get_rule(
            fwp::model::GetRuleFirewallPolicyRequest::new(),
            RequestOptions::default(),
        )
        .await;
}

#[tokio::test]
#[should_panic(expected = "not implemented")]
async fn insert() {
    let _ = Bare
        .insert(
            fwp::model::InsertFirewallPolicyRequest::new(),
            RequestOptions::default(),
        )
        .await;
}

#[tokio::test]
#[should_panic(expected = "not implemented")]
async fn list() {
    let _ = Bare
        .list(
            fwp::model::ListFirewallPoliciesRequest::new(),
            RequestOptions::default(),
        )
        .await;
}

#[tokio::test]
#[should_panic(expected = "not implemented")]
async fn list_associations() {
    let _ = Bare
        .list_associations(
            fwp::model::ListAssociationsFirewallPolicyRequest::new(),
            RequestOptions::default(),
        )
        .await;
}

#[tokio::test]
#[should_panic(expected = "not implemented")]
async fn move_firewall_policy() {
    let _ = Bare
        .move_firewall_policy(
            fwp::model::MoveFirewallPolicyRequest::new(),
            RequestOptions::default(),
        )
        .await;
}

#[tokio::test]
#[should_panic(expected = "not implemented")]
async fn patch() {
    let _ = Bare
        .patch(
            fwp::model::PatchFirewallPolicyRequest::new(),
            RequestOptions::default(),
        )
        .await;
}

#[tokio::test]
#[should_panic(expected = "not implemented")]
async fn patch_rule() {
    let _ = Bare
        .patch_rule(
            fwp::model::PatchRuleFirewallPolicyRequest::new(),
            RequestOptions::default(),
        )
        .await;
}

#[tokio::test]
#[should_panic(expected = "not implemented")]
async fn remove_association() {
    let _ = Bare
        .remove_association(
            fwp::model::RemoveAssociationFirewallPolicyRequest::new(),
            RequestOptions::default(),
        )
        .await;
}

#[tokio::test]
#[should_panic(expected = "not implemented")]
async fn remove_rule() {
    let _ = Bare
        .remove_rule(
            fwp::model::RemoveRuleFirewallPolicyRequest::new(),
            RequestOptions::default(),
        )
        .await;
}

#[tokio::test]
#[should_panic(expected = "not implemented")]
async fn set_iam_policy() {
    let _ = Bare
        .set_iam_policy(
            fwp::model::SetIamPolicyFirewallPolicyRequest::new(),
            RequestOptions::default(),
        )
        .await;
}

#[tokio::test]
#[should_panic(expected = "not implemented")]
async fn test_iam_permissions() {
    let _ = Bare
        .test_iam_permissions(
            fwp::model::TestIamPermissionsFirewallPolicyRequest::new(),
            RequestOptions::default(),
        )
        .await;
}

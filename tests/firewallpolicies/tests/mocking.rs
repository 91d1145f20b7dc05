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

//! Verifies the client surface forwards requests and responses through any
//! stub implementation.

use google_cloud_compute_firewallpolicies_v1 as fwp;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

mockall::mock! {
    #[derive(Debug)]
    FirewallPolicies {}
    impl fwp::stub::FirewallPolicies for FirewallPolicies {
        async fn add_association(&self, req: fwp::model::AddAssociationFirewallPolicyRequest, options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<fwp::model::Operation>>;
        async fn add_rule(&self, req: fwp::model::AddRuleFirewallPolicyRequest, options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<fwp::model::Operation>>;
        async fn clone_rules(&self, req: fwp::model::CloneRulesFirewallPolicyRequest, options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<fwp::model::Operation>>;
        async fn delete(&self, req: fwp::model::DeleteFirewallPolicyRequest, options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<fwp::model::Operation>>;
        async fn get(&self, req: fwp::model::GetFirewallPolicyRequest, options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<fwp::model::FirewallPolicy>>;
        async fn get_association(&self, req: fwp::model::GetAssociationFirewallPolicyRequest, options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<fwp::model::FirewallPolicyAssociation>>;
        async fn get_iam_policy(&self, req: fwp::model::GetIamPolicyFirewallPolicyRequest, options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<fwp::model::Policy>>;
        async fn get_rule(&self, req: fwp::model::GetRuleFirewallPolicyRequest, options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<fwp::model::FirewallPolicyRule>>;
        async fn insert(&self, req: fwp::model::InsertFirewallPolicyRequest, options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<fwp::model::Operation>>;
        async fn list(&self, req: fwp::model::ListFirewallPoliciesRequest, options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<fwp::model::FirewallPolicyList>>;
        async fn list_associations(&self, req: fwp::model::ListAssociationsFirewallPolicyRequest, options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<fwp::model::FirewallPoliciesListAssociationsResponse>>;
        async fn move_firewall_policy(&self, req: fwp::model::MoveFirewallPolicyRequest, options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<fwp::model::Operation>>;
        async fn patch(&self, req: fwp::model::PatchFirewallPolicyRequest, options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<fwp::model::Operation>>;
        async fn patch_rule(&self, req: fwp::model::PatchRuleFirewallPolicyRequest, options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<fwp::model::Operation>>;
        async fn remove_association(&self, req: fwp::model::RemoveAssociationFirewallPolicyRequest, options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<fwp::model::Operation>>;
        async fn remove_rule(&self, req: fwp::model::RemoveRuleFirewallPolicyRequest, options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<fwp::model::Operation>>;
        async fn set_iam_policy(&self, req: fwp::model::SetIamPolicyFirewallPolicyRequest, options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<fwp::model::Policy>>;
        async fn test_iam_permissions(&self, req: fwp::model::TestIamPermissionsFirewallPolicyRequest, options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<fwp::model::TestPermissionsResponse>>;
    }
}

fn done_operation(name: &str) -> fwp::model::Operation {
    fwp::model::Operation::new()
        .set_name(name)
        .set_status(fwp::model::operation::Status::Done)
}

#[tokio::test]
async fn add_association() -> Result<()> {
    let mut mock = MockFirewallPolicies::new();
    mock.expect_add_association()
        .withf(|r, _| {
            r.firewall_policy == "test-policy"
                && r.firewall_policy_association_resource
                    .as_ref()
                    .is_some_and(|a| a.name.as_deref() == Some("test-association"))
        })
        .return_once(|_, _| Ok(gax::response::Response::from(done_operation("op-add-association"))));
    let client = fwp::client::FirewallPolicies::from_stub(mock);

    let op = client
        .add_association()
        .set_firewall_policy("test-policy")
        .set_firewall_policy_association_resource(
            fwp::model::FirewallPolicyAssociation::new()
                .set_name("test-association")
                .set_attachment_target("organizations/123456789"),
        )
        .send()
        .await?;
    assert_eq!(op.name.as_deref(), Some("op-add-association"));
    Ok(())
}

#[tokio::test]
async fn add_rule() -> Result<()> {
    let mut mock = MockFirewallPolicies::new();
    mock.expect_add_rule()
        .withf(|r, _| {
            r.firewall_policy == "test-policy"
                && r.firewall_policy_rule_resource
                    .as_ref()
                    .is_some_and(|rule| rule.priority == Some(1000))
        })
        .return_once(|_, _| Ok(gax::response::Response::from(done_operation("op-add-rule"))));
    let client = fwp::client::FirewallPolicies::from_stub(mock);

    let op = client
        .add_rule()
        .set_firewall_policy("test-policy")
        .set_firewall_policy_rule_resource(
            fwp::model::FirewallPolicyRule::new()
                .set_action("allow")
                .set_priority(1000),
        )
        .send()
        .await?;
    assert_eq!(op.name.as_deref(), Some("op-add-rule"));
    Ok(())
}

#[tokio::test]
async fn clone_rules() -> Result<()> {
    let mut mock = MockFirewallPolicies::new();
    mock.expect_clone_rules()
        .withf(|r, _| {
            r.firewall_policy == "test-policy"
                && r.source_firewall_policy.as_deref() == Some("source-policy")
        })
        .return_once(|_, _| Ok(gax::response::Response::from(done_operation("op-clone-rules"))));
    let client = fwp::client::FirewallPolicies::from_stub(mock);

    let op = client
        .clone_rules()
        .set_firewall_policy("test-policy")
        .set_source_firewall_policy("source-policy")
        .send()
        .await?;
    assert_eq!(op.name.as_deref(), Some("op-clone-rules"));
    Ok(())
}

#[tokio::test]
async fn delete() -> Result<()> {
    let mut mock = MockFirewallPolicies::new();
    mock.expect_delete()
        .withf(|r, _| r.firewall_policy == "test-policy" && r.request_id.as_deref() == Some("test-request-id"))
        .return_once(|_, _| Ok(gax::response::Response::from(done_operation("op-delete"))));
    let client = fwp::client::FirewallPolicies::from_stub(mock);

    let op = client
        .delete()
        .set_firewall_policy("test-policy")
        .set_request_id("test-request-id")
        .send()
        .await?;
    assert_eq!(op.name.as_deref(), Some("op-delete"));
    Ok(())
}

#[tokio::test]
async fn get() -> Result<()> {
    let mut mock = MockFirewallPolicies::new();
    mock.expect_get()
        .withf(|r, _| r.firewall_policy == "test-policy")
        .return_once(|_, _| {
            Ok(gax::response::Response::from(
                fwp::model::FirewallPolicy::new().set_name("test-policy"),
            ))
        });
    let client = fwp::client::FirewallPolicies::from_stub(mock);

    let policy = client.get().set_firewall_policy("test-policy").send().await?;
    assert_eq!(policy.name.as_deref(), Some("test-policy"));
    Ok(())
}

#[tokio::test]
async fn get_association() -> Result<()> {
    let mut mock = MockFirewallPolicies::new();
    mock.expect_get_association()
        .withf(|r, _| r.firewall_policy == "test-policy" && r.name.as_deref() == Some("test-association"))
        .return_once(|_, _| {
            Ok(gax::response::Response::from(
                fwp::model::FirewallPolicyAssociation::new().set_name("test-association"),
            ))
        });
    let client = fwp::client::FirewallPolicies::from_stub(mock);

    let association = client
        .get_association()
        .set_firewall_policy("test-policy")
        .set_name("test-association")
        .send()
        .await?;
    assert_eq!(association.name.as_deref(), Some("test-association"));
    Ok(())
}

#[tokio::test]
async fn get_iam_policy() -> Result<()> {
    let mut mock = MockFirewallPolicies::new();
    mock.expect_get_iam_policy()
        .withf(|r, _| r.resource == "test-policy" && r.options_requested_policy_version == Some(3))
        .return_once(|_, _| {
            Ok(gax::response::Response::from(
                fwp::model::Policy::new().set_etag("BwWKmjvelug="),
            ))
        });
    let client = fwp::client::FirewallPolicies::from_stub(mock);

    let policy = client
        .get_iam_policy()
        .set_resource("test-policy")
        .set_options_requested_policy_version(3)
        .send()
        .await?;
    assert_eq!(policy.etag.as_deref(), Some("BwWKmjvelug="));
    Ok(())
}

#[tokio::test]
async fn get_rule() -> Result<()> {
    let mut mock = MockFirewallPolicies::new();
    mock.expect_get_rule()
        .withf(|r, _| r.firewall_policy == "test-policy" && r.priority == Some(1000))
        .return_once(|_, _| {
            Ok(gax::response::Response::from(
                fwp::model::FirewallPolicyRule::new().set_priority(1000),
            ))
        });
    let client = fwp::client::FirewallPolicies::from_stub(mock);

    let rule = client
        .get_rule()
        .set_firewall_policy("test-policy")
        .set_priority(1000)
        .send()
        .await?;
    assert_eq!(rule.priority, Some(1000));
    Ok(())
}

#[tokio::test]
async fn insert() -> Result<()> {
    let mut mock = MockFirewallPolicies::new();
    mock.expect_insert()
        .withf(|r, _| {
            r.parent_id == "organizations/123456789"
                && r.firewall_policy_resource
                    .as_ref()
                    .is_some_and(|p| p.short_name.as_deref() == Some("test-policy"))
        })
        .return_once(|_, _| Ok(gax::response::Response::from(done_operation("op-insert"))));
    let client = fwp::client::FirewallPolicies::from_stub(mock);

    let op = client
        .insert()
        .set_parent_id("organizations/123456789")
        .set_firewall_policy_resource(fwp::model::FirewallPolicy::new().set_short_name("test-policy"))
        .send()
        .await?;
    assert_eq!(op.name.as_deref(), Some("op-insert"));
    Ok(())
}

#[tokio::test]
async fn list() -> Result<()> {
    let mut mock = MockFirewallPolicies::new();
    mock.expect_list()
        .withf(|r, _| r.parent_id.as_deref() == Some("organizations/123456789"))
        .return_once(|_, _| {
            Ok(gax::response::Response::from(
                fwp::model::FirewallPolicyList::new()
                    .set_items([fwp::model::FirewallPolicy::new().set_name("p0")]),
            ))
        });
    let client = fwp::client::FirewallPolicies::from_stub(mock);

    let list = client
        .list()
        .set_parent_id("organizations/123456789")
        .send()
        .await?;
    assert_eq!(list.items.len(), 1);
    Ok(())
}

#[tokio::test]
async fn list_pagination() -> Result<()> {
    use gax::paginator::ItemPaginator as _;
    let mut mock = MockFirewallPolicies::new();
    mock.expect_list()
        .withf(|r, _| r.page_token.as_deref().unwrap_or_default() == "")
        .return_once(|_, _| {
            Ok(gax::response::Response::from(
                fwp::model::FirewallPolicyList::new()
                    .set_items([fwp::model::FirewallPolicy::new().set_name("p0")])
                    .set_next_page_token("page-2"),
            ))
        });
    mock.expect_list()
        .withf(|r, _| r.page_token.as_deref() == Some("page-2"))
        .return_once(|_, _| {
            Ok(gax::response::Response::from(
                fwp::model::FirewallPolicyList::new()
                    .set_items([fwp::model::FirewallPolicy::new().set_name("p1")]),
            ))
        });
    let client = fwp::client::FirewallPolicies::from_stub(mock);

    let mut names = Vec::new();
    let mut items = client.list().by_item();
    while let Some(policy) = items.next().await.transpose()? {
        names.extend(policy.name);
    }
    assert_eq!(names, vec!["p0", "p1"]);
    Ok(())
}

#[tokio::test]
async fn list_associations() -> Result<()> {
    let mut mock = MockFirewallPolicies::new();
    mock.expect_list_associations()
        .withf(|r, _| r.target_resource.as_deref() == Some("organizations/123456789"))
        .return_once(|_, _| {
            Ok(gax::response::Response::from(
                fwp::model::FirewallPoliciesListAssociationsResponse::new()
                    .set_associations([fwp::model::FirewallPolicyAssociation::new().set_name("a0")]),
            ))
        });
    let client = fwp::client::FirewallPolicies::from_stub(mock);

    let response = client
        .list_associations()
        .set_target_resource("organizations/123456789")
        .send()
        .await?;
    assert_eq!(response.associations.len(), 1);
    Ok(())
}

#[tokio::test]
async fn move_firewall_policy() -> Result<()> {
    let mut mock = MockFirewallPolicies::new();
    mock.expect_move_firewall_policy()
        .withf(|r, _| r.firewall_policy == "test-policy" && r.parent_id == "folders/987654321")
        .return_once(|_, _| Ok(gax::response::Response::from(done_operation("op-move"))));
    let client = fwp::client::FirewallPolicies::from_stub(mock);

    let op = client
        .move_firewall_policy()
        .set_firewall_policy("test-policy")
        .set_parent_id("folders/987654321")
        .send()
        .await?;
    assert_eq!(op.name.as_deref(), Some("op-move"));
    Ok(())
}

#[tokio::test]
async fn patch() -> Result<()> {
    let mut mock = MockFirewallPolicies::new();
    mock.expect_patch()
        .withf(|r, _| {
            r.firewall_policy == "test-policy"
                && r.firewall_policy_resource
                    .as_ref()
                    .is_some_and(|p| p.description.as_deref() == Some("updated"))
        })
        .return_once(|_, _| Ok(gax::response::Response::from(done_operation("op-patch"))));
    let client = fwp::client::FirewallPolicies::from_stub(mock);

    let op = client
        .patch()
        .set_firewall_policy("test-policy")
        .set_firewall_policy_resource(fwp::model::FirewallPolicy::new().set_description("updated"))
        .send()
        .await?;
    assert_eq!(op.name.as_deref(), Some("op-patch"));
    Ok(())
}

#[tokio::test]
async fn patch_rule() -> Result<()> {
    let mut mock = MockFirewallPolicies::new();
    mock.expect_patch_rule()
        .withf(|r, _| r.firewall_policy == "test-policy" && r.priority == Some(1000))
        .return_once(|_, _| Ok(gax::response::Response::from(done_operation("op-patch-rule"))));
    let client = fwp::client::FirewallPolicies::from_stub(mock);

    let op = client
        .patch_rule()
        .set_firewall_policy("test-policy")
        .set_priority(1000)
        .set_firewall_policy_rule_resource(fwp::model::FirewallPolicyRule::new().set_action("deny"))
        .send()
        .await?;
    assert_eq!(op.name.as_deref(), Some("op-patch-rule"));
    Ok(())
}

#[tokio::test]
async fn remove_association() -> Result<()> {
    let mut mock = MockFirewallPolicies::new();
    mock.expect_remove_association()
        .withf(|r, _| r.firewall_policy == "test-policy" && r.name.as_deref() == Some("test-association"))
        .return_once(|_, _| {
            Ok(gax::response::Response::from(done_operation("op-remove-association")))
        });
    let client = fwp::client::FirewallPolicies::from_stub(mock);

    let op = client
        .remove_association()
        .set_firewall_policy("test-policy")
        .set_name("test-association")
        .send()
        .await?;
    assert_eq!(op.name.as_deref(), Some("op-remove-association"));
    Ok(())
}

#[tokio::test]
async fn remove_rule() -> Result<()> {
    let mut mock = MockFirewallPolicies::new();
    mock.expect_remove_rule()
        .withf(|r, _| r.firewall_policy == "test-policy" && r.priority == Some(1000))
        .return_once(|_, _| Ok(gax::response::Response::from(done_operation("op-remove-rule"))));
    let client = fwp::client::FirewallPolicies::from_stub(mock);

    let op = client
        .remove_rule()
        .set_firewall_policy("test-policy")
        .set_priority(1000)
        .send()
        .await?;
    assert_eq!(op.name.as_deref(), Some("op-remove-rule"));
    Ok(())
}

#[tokio::test]
async fn set_iam_policy() -> Result<()> {
    let mut mock = MockFirewallPolicies::new();
    mock.expect_set_iam_policy()
        .withf(|r, _| {
            r.resource == "test-policy"
                && r.global_organization_set_policy_request_resource
                    .as_ref()
                    .and_then(|b| b.policy.as_ref())
                    .is_some_and(|p| p.bindings.len() == 1)
        })
        .return_once(|_, _| {
            Ok(gax::response::Response::from(
                fwp::model::Policy::new().set_version(3),
            ))
        });
    let client = fwp::client::FirewallPolicies::from_stub(mock);

    let policy = client
        .set_iam_policy()
        .set_resource("test-policy")
        .set_global_organization_set_policy_request_resource(
            fwp::model::GlobalOrganizationSetPolicyRequest::new().set_policy(
                fwp::model::Policy::new().set_bindings([fwp::model::Binding::new()
                    .set_role("roles/compute.admin")
                    .set_members(["user:test@example.com"])]),
            ),
        )
        .send()
        .await?;
    assert_eq!(policy.version, Some(3));
    Ok(())
}

#[tokio::test]
async fn test_iam_permissions() -> Result<()> {
    let mut mock = MockFirewallPolicies::new();
    mock.expect_test_iam_permissions()
        .withf(|r, _| {
            r.resource == "test-policy"
                && r.test_permissions_request_resource
                    .as_ref()
                    .is_some_and(|b| b.permissions == ["compute.firewallPolicies.get"])
        })
        .return_once(|_, _| {
            Ok(gax::response::Response::from(
                fwp::model::TestPermissionsResponse::new()
                    .set_permissions(["compute.firewallPolicies.get"]),
            ))
        });
    let client = fwp::client::FirewallPolicies::from_stub(mock);

    let response = client
        .test_iam_permissions()
        .set_resource("test-policy")
        .set_test_permissions_request_resource(
            fwp::model::TestPermissionsRequest::new()
                .set_permissions(["compute.firewallPolicies.get"]),
        )
        .send()
        .await?;
    assert_eq!(response.permissions, ["compute.firewallPolicies.get"]);
    Ok(())
}

#[tokio::test]
async fn service_errors_are_forwarded() -> Result<()> {
    let mut mock = MockFirewallPolicies::new();
    mock.expect_get().return_once(|_, _| {
        use gax::error::Error;
        use gax::error::rpc::{Code, Status};
        let status = Status::default()
            .set_code(Code::NotFound)
            .set_message("Resource not found");
        Err(Error::service(status))
    });
    let client = fwp::client::FirewallPolicies::from_stub(mock);

    let got = client.get().set_firewall_policy("missing").send().await;
    let err = got.expect_err("the mocked error should be surfaced");
    assert_eq!(err.status().map(|s| s.code), Some(gax::error::rpc::Code::NotFound));
    Ok(())
}

#[tokio::test]
async fn failed_operation_to_result() -> Result<()> {
    let mut mock = MockFirewallPolicies::new();
    mock.expect_delete().return_once(|_, _| {
        Ok(gax::response::Response::from(
            fwp::model::Operation::new()
                .set_status(fwp::model::operation::Status::Done)
                .set_http_error_status_code(409)
                .set_http_error_message("CONFLICT"),
        ))
    });
    let client = fwp::client::FirewallPolicies::from_stub(mock);

    let op = client.delete().set_firewall_policy("test-policy").send().await?;
    let got = op.to_result();
    assert!(
        matches!(got, Err(fwp::errors::OperationError::Generic(ref e)) if e.status_code == Some(409)),
        "{got:?}"
    );
    Ok(())
}

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

//! Exercises the REST transport against a local HTTP server.

use google_cloud_auth::credentials::testing::test_credentials;
use google_cloud_compute_firewallpolicies_v1 as fwp;
use httptest::{Expectation, Server, matchers::*, responders::*};

type Result<T> = anyhow::Result<T>;

async fn test_client(server: &Server) -> Result<fwp::client::FirewallPolicies> {
    let client = fwp::client::FirewallPolicies::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .with_credentials(test_credentials())
        .build()
        .await?;
    Ok(client)
}

#[tokio::test]
async fn get_uses_expected_path_and_headers() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path(
                "GET",
                "/compute/v1/locations/global/firewallPolicies/test-policy"
            ),
            request::headers(contains(key("x-goog-api-client"))),
        ])
        .respond_with(json_encoded(serde_json::json!({
            "name": "test-policy",
            "id": "123456789",
            "fingerprint": "abc123",
        }))),
    );
    let client = test_client(&server).await?;

    let policy = client.get().set_firewall_policy("test-policy").send().await?;
    assert_eq!(policy.name.as_deref(), Some("test-policy"));
    assert_eq!(policy.id, Some(123456789));
    Ok(())
}

#[tokio::test]
async fn add_association_sends_query_and_body() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path(
                "POST",
                "/compute/v1/locations/global/firewallPolicies/test-policy/addAssociation"
            ),
            request::query(url_decoded(contains(("replaceExistingAssociation", "true")))),
            request::query(url_decoded(contains(("requestId", "test-request-id")))),
            request::body(json_decoded(eq(serde_json::json!({
                "name": "test-association",
                "attachmentTarget": "organizations/123456789",
            })))),
        ])
        .respond_with(json_encoded(serde_json::json!({
            "name": "op-add-association",
            "status": "RUNNING",
        }))),
    );
    let client = test_client(&server).await?;

    let op = client
        .add_association()
        .set_firewall_policy("test-policy")
        .set_replace_existing_association(true)
        .set_request_id("test-request-id")
        .set_firewall_policy_association_resource(
            fwp::model::FirewallPolicyAssociation::new()
                .set_name("test-association")
                .set_attachment_target("organizations/123456789"),
        )
        .send()
        .await?;
    assert_eq!(op.name.as_deref(), Some("op-add-association"));
    assert_eq!(op.status, Some(fwp::model::operation::Status::Running));
    Ok(())
}

#[tokio::test]
async fn insert_requires_parent_id() -> Result<()> {
    let server = Server::run();
    let client = test_client(&server).await?;

    let got = client
        .insert()
        .set_firewall_policy_resource(fwp::model::FirewallPolicy::new().set_short_name("p"))
        .send()
        .await;
    let err = got.expect_err("a missing parent_id should fail before sending");
    assert!(err.is_binding(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn move_requires_both_path_parameters() -> Result<()> {
    let server = Server::run();
    let client = test_client(&server).await?;

    let got = client
        .move_firewall_policy()
        .set_parent_id("folders/987654321")
        .send()
        .await;
    let err = got.expect_err("a missing firewall_policy should fail before sending");
    assert!(err.is_binding(), "{err:?}");

    let got = client
        .move_firewall_policy()
        .set_firewall_policy("test-policy")
        .send()
        .await;
    let err = got.expect_err("a missing parent_id should fail before sending");
    assert!(err.is_binding(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn move_sends_parent_id_query() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path(
                "POST",
                "/compute/v1/locations/global/firewallPolicies/test-policy/move"
            ),
            request::query(url_decoded(contains(("parentId", "folders/987654321")))),
        ])
        .respond_with(json_encoded(serde_json::json!({"name": "op-move"}))),
    );
    let client = test_client(&server).await?;

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
async fn list_paginates_with_page_tokens() -> Result<()> {
    use gax::paginator::ItemPaginator as _;
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/compute/v1/locations/global/firewallPolicies"),
            request::query(url_decoded(contains(("parentId", "organizations/123456789")))),
            request::query(url_decoded(not(contains(("pageToken", "page-2"))))),
        ])
        .respond_with(json_encoded(serde_json::json!({
            "items": [{"name": "p0"}],
            "nextPageToken": "page-2",
        }))),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/compute/v1/locations/global/firewallPolicies"),
            request::query(url_decoded(contains(("pageToken", "page-2")))),
        ])
        .respond_with(json_encoded(serde_json::json!({
            "items": [{"name": "p1"}],
        }))),
    );
    let client = test_client(&server).await?;

    let mut names = Vec::new();
    let mut items = client
        .list()
        .set_parent_id("organizations/123456789")
        .by_item();
    while let Some(policy) = items.next().await.transpose()? {
        names.extend(policy.name);
    }
    assert_eq!(names, vec!["p0", "p1"]);
    Ok(())
}

#[tokio::test]
async fn remove_rule_sends_priority() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path(
                "POST",
                "/compute/v1/locations/global/firewallPolicies/test-policy/removeRule"
            ),
            request::query(url_decoded(contains(("priority", "1000")))),
        ])
        .respond_with(json_encoded(serde_json::json!({"name": "op-remove-rule"}))),
    );
    let client = test_client(&server).await?;

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
async fn service_errors_map_to_status() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            "/compute/v1/locations/global/firewallPolicies/missing",
        ))
        .respond_with(
            status_code(404).body(
                serde_json::json!({
                    "error": {
                        "code": 404,
                        "message": "the resource was not found",
                        "status": "NOT_FOUND",
                    }
                })
                .to_string(),
            ),
        ),
    );
    let client = test_client(&server).await?;

    let got = client.get().set_firewall_policy("missing").send().await;
    let err = got.expect_err("a 404 response should surface as an error");
    let status = err.status().expect("the error should carry a service status");
    assert_eq!(status.code, gax::error::rpc::Code::NotFound);
    assert!(status.message.contains("not found"), "{status:?}");
    Ok(())
}

#[test]
fn method_settings_are_exposed() {
    let settings = fwp::transport::method_settings("move")
        .expect("every operation has default settings");
    assert_eq!(settings.default_timeout, None);
    assert!(!settings.idempotent);
    assert!(fwp::transport::method_settings("unknown").is_none());
}

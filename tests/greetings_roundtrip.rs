//! Integration tests for the greeting lifecycle.
//!
//! This suite drives the full create → list → delete → list sequence
//! against a mock LiveChat server, asserting along the way that every
//! request carries Basic auth and the `X-API-Version` header. The same
//! lifecycle can be run against a real account via the `#[ignore]`d test
//! at the bottom.

use livechat_client::{GreetingRule, LivechatClient, LivechatConfig, NewGreeting};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Base64 of `support@example.com:roundtrip-key`.
const BASIC_AUTH: &str = "Basic c3VwcG9ydEBleGFtcGxlLmNvbTpyb3VuZHRyaXAta2V5";

fn roundtrip_client(server: &MockServer) -> LivechatClient {
    let config = LivechatConfig::new("support@example.com", "roundtrip-key")
        .expect("config")
        .with_base_url(&server.uri())
        .expect("base url");
    LivechatClient::new(config).expect("client")
}

fn test_greeting_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Test greeting",
        "rules": [{
            "type": "custom_variable",
            "variable_name": "test_var",
            "variable_value": "300",
            "operator": "contains"
        }]
    })
}

#[tokio::test]
async fn greeting_lifecycle_round_trip() {
    let mock_server = MockServer::start().await;

    // Create assigns id 118.
    Mock::given(method("POST"))
        .and(path("/greetings"))
        .and(header("authorization", BASIC_AUTH))
        .and(header("x-api-version", "2"))
        .and(body_json(json!({
            "name": "Test greeting",
            "rules": [{
                "type": "custom_variable",
                "variable_name": "test_var",
                "variable_value": "300",
                "operator": "contains"
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(test_greeting_json(118)))
        .expect(1)
        .mount(&mock_server)
        .await;

    // The first listing includes the new greeting; the mock expires after
    // one match so the post-delete listing falls through to the empty one
    // mounted below.
    Mock::given(method("GET"))
        .and(path("/greetings"))
        .and(header("authorization", BASIC_AUTH))
        .and(header("x-api-version", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([test_greeting_json(118)])))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/greetings/118"))
        .and(header("authorization", BASIC_AUTH))
        .and(header("x-api-version", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/greetings"))
        .and(header("authorization", BASIC_AUTH))
        .and(header("x-api-version", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = roundtrip_client(&mock_server);

    let created = client
        .create_greeting(&NewGreeting::new(
            "Test greeting",
            vec![GreetingRule::custom_variable("test_var", "300", "contains")],
        ))
        .await
        .expect("create greeting");
    assert_eq!(created.id, 118);
    assert_eq!(created.name, "Test greeting");

    let greetings = client.greetings().await.expect("list greetings");
    assert!(greetings.iter().any(|g| g.name == "Test greeting"));

    let status = client
        .delete_greeting(created.id)
        .await
        .expect("delete greeting");
    assert!(status.ok);

    let greetings = client.greetings().await.expect("list greetings again");
    assert!(!greetings.iter().any(|g| g.id == created.id));
}

#[tokio::test]
async fn update_carries_the_same_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/greetings/118"))
        .and(header("authorization", BASIC_AUTH))
        .and(header("x-api-version", "2"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"name": "Renamed"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 118, "name": "Renamed", "rules": []})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = roundtrip_client(&mock_server);
    let updated = client
        .update_greeting(118, &json!({"name": "Renamed"}))
        .await
        .expect("update greeting");
    assert_eq!(updated.name, "Renamed");
}

/// Runs the lifecycle against a real LiveChat account.
///
/// Needs `LIVECHAT_LOGIN` and `LIVECHAT_API_KEY` set; run with
/// `cargo test --test greetings_roundtrip -- --ignored`.
#[tokio::test]
#[ignore = "requires live LiveChat credentials"]
async fn greeting_lifecycle_live_account() {
    let client = LivechatClient::from_env().expect("credentials in environment");

    let agents = client.agents().await.expect("list agents");
    assert!(!agents.is_empty());

    let created = client
        .create_greeting(&NewGreeting::new(
            "Test greeting",
            vec![GreetingRule::custom_variable("test_var", "300", "contains")],
        ))
        .await
        .expect("create greeting");

    let greetings = client.greetings().await.expect("list greetings");
    assert!(greetings.iter().any(|g| g.name == "Test greeting"));

    let status = client
        .delete_greeting(created.id)
        .await
        .expect("delete greeting");
    assert!(status.ok);

    let greetings = client.greetings().await.expect("list greetings again");
    assert!(!greetings.iter().any(|g| g.id == created.id));
}

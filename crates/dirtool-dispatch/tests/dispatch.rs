//! End-to-end dispatcher tests against a mock HTTP server.

use httpmock::prelude::*;
use httpmock::Method::PATCH;
use serde_json::{json, Map, Value};

use dirtool_catalog::catalog;
use dirtool_core::{ApiConfig, Endpoint};
use dirtool_dispatch::{DispatchError, Dispatcher};

fn endpoint(name: &str) -> &'static Endpoint {
    catalog().get(name).unwrap_or_else(|| panic!("unknown tool {name}"))
}

fn args(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

fn dispatcher_for(server: &MockServer) -> Dispatcher {
    Dispatcher::new(ApiConfig::new(server.base_url(), None, None))
}

#[tokio::test]
async fn test_get_decodes_typed_response() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/admin/directory/v1/users/ada@example.com");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"kind":"admin#directory#user","primaryEmail":"ada@example.com"}"#);
    });

    let result = dispatcher_for(&server)
        .dispatch(
            endpoint("get_admin_directory_v1_users_userKey"),
            &args(json!({"userKey": "ada@example.com"})),
        )
        .await
        .unwrap();

    mock.assert();
    // pretty-printed with the model's field set
    assert!(result.contains("\n  \"kind\": \"admin#directory#user\""));
    assert!(result.contains("\"primaryEmail\": \"ada@example.com\""));
}

#[tokio::test]
async fn test_missing_path_param_fails_before_any_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.any_request();
        then.status(200);
    });

    let err = dispatcher_for(&server)
        .dispatch(endpoint("get_admin_directory_v1_users_userKey"), &args(json!({})))
        .await
        .unwrap_err();

    assert!(matches!(err, DispatchError::MissingParameter(_)));
    assert_eq!(err.to_string(), "Missing required path parameter: userKey");
    mock.assert_hits(0);
}

#[tokio::test]
async fn test_non_string_path_param_is_rejected() {
    let server = MockServer::start();
    let err = dispatcher_for(&server)
        .dispatch(
            endpoint("delete_admin_directory_v1_groups_groupKey_members_memberKey"),
            &args(json!({"groupKey": "eng@example.com", "memberKey": 7})),
        )
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid path parameter: memberKey");
}

#[tokio::test]
async fn test_multi_segment_path_substitution() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/admin/directory/v1/customer/C123/devices/chromeos/D456")
            .query_param("projection", "FULL");
        then.status(200).body(r#"{"deviceId":"D456"}"#);
    });

    let result = dispatcher_for(&server)
        .dispatch(
            endpoint("get_admin_directory_v1_customer_customerId_devices_chromeos_deviceId"),
            &args(json!({"customerId": "C123", "deviceId": "D456", "projection": "FULL"})),
        )
        .await
        .unwrap();

    mock.assert();
    assert!(result.contains("\"deviceId\": \"D456\""));
}

#[tokio::test]
async fn test_api_error_passes_body_through_verbatim() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/admin/directory/v1/users");
        then.status(400).body(r#"{"error":{"code":400,"message":"Bad Request"}}"#);
    });

    let err = dispatcher_for(&server)
        .dispatch(endpoint("get_admin_directory_v1_users"), &Map::new())
        .await
        .unwrap_err();

    mock.assert();
    assert_eq!(
        err.to_string(),
        r#"API error: {"error":{"code":400,"message":"Bad Request"}}"#
    );
    match err {
        DispatchError::RemoteApi { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, r#"{"error":{"code":400,"message":"Bad Request"}}"#);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_delete_returns_empty_body_as_is() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE)
            .path("/admin/directory/v1/groups/eng@example.com/members/ada@example.com");
        then.status(204);
    });

    let result = dispatcher_for(&server)
        .dispatch(
            endpoint("delete_admin_directory_v1_groups_groupKey_members_memberKey"),
            &args(json!({"groupKey": "eng@example.com", "memberKey": "ada@example.com"})),
        )
        .await
        .unwrap();

    mock.assert();
    // an empty body does not decode, so it is passed through untouched
    assert_eq!(result, "");
}

#[tokio::test]
async fn test_undecodable_success_body_is_raw_passthrough() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/admin/directory/v1/users/ada@example.com");
        then.status(200).body("not json");
    });

    let result = dispatcher_for(&server)
        .dispatch(
            endpoint("get_admin_directory_v1_users_userKey"),
            &args(json!({"userKey": "ada@example.com"})),
        )
        .await
        .unwrap();

    assert_eq!(result, "not json");
}

#[tokio::test]
async fn test_body_drops_fields_outside_the_model() {
    let server = MockServer::start();
    // The mock matches the exact body: declared Member fields survive, the
    // undeclared field and the query parameter do not reach the body.
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/admin/directory/v1/groups/eng@example.com/members")
            .header("content-type", "application/json")
            .json_body(json!({"email": "ada@example.com", "role": "MEMBER"}));
        then.status(200).body(r#"{"email":"ada@example.com","role":"MEMBER"}"#);
    });

    dispatcher_for(&server)
        .dispatch(
            endpoint("post_admin_directory_v1_groups_groupKey_members"),
            &args(json!({
                "groupKey": "eng@example.com",
                "email": "ada@example.com",
                "role": "MEMBER",
                "notAMemberField": "dropped"
            })),
        )
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn test_body_type_mismatch_is_a_local_error() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.any_request();
        then.status(200);
    });

    let err = dispatcher_for(&server)
        .dispatch(
            endpoint("post_admin_directory_v1_users"),
            &args(json!({"suspended": "yes"})),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, DispatchError::RequestConstruction(_)));
    mock.assert_hits(0);
}

#[tokio::test]
async fn test_path_params_also_feed_the_body_when_the_model_declares_them() {
    let server = MockServer::start();
    // printServers patch: `name` is both the path parameter and a
    // PrintServer field, so it appears in the URL and the body.
    let mock = server.mock(|when, then| {
        when.method(PATCH)
            .path("/admin/directory/v1/customers/C1/chrome/printServers/PS9")
            .query_param("updateMask", "displayName")
            .json_body(json!({
                "name": "customers/C1/chrome/printServers/PS9",
                "displayName": "front-desk"
            }));
        then.status(200).body(r#"{"displayName":"front-desk"}"#);
    });

    dispatcher_for(&server)
        .dispatch(
            endpoint("patch_admin_directory_v1_name"),
            &args(json!({
                "name": "customers/C1/chrome/printServers/PS9",
                "updateMask": "displayName",
                "displayName": "front-desk"
            })),
        )
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn test_bodyless_post_sends_no_content_type() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/admin/directory/v1/users/ada@example.com/signOut");
        then.status(200);
    });

    let result = dispatcher_for(&server)
        .dispatch(
            endpoint("post_admin_directory_v1_users_userKey_signOut"),
            &args(json!({"userKey": "ada@example.com"})),
        )
        .await
        .unwrap();

    mock.assert();
    assert_eq!(result, "");
}

#[tokio::test]
async fn test_credentials_are_appended_to_the_query() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/admin/directory/v1/users")
            .query_param("domain", "x.test")
            .query_param("access_token", "tok")
            .query_param("key", "apikey")
            .query_param("oauth_token", "tok");
        then.status(200).body("{}");
    });

    let dispatcher = Dispatcher::new(ApiConfig::new(
        server.base_url(),
        Some("tok".to_string()),
        Some("apikey".to_string()),
    ));
    dispatcher
        .dispatch(endpoint("get_admin_directory_v1_users"), &args(json!({"domain": "x.test"})))
        .await
        .unwrap();

    mock.assert();
}

//! A mock GitHub API for handler tests.
//!
//! Webhook payloads carry absolute API URLs, so tests point those at [`MockServer::uri`].

use octocrab::Octocrab;
use serde_json::json;
use wiremock::{
    matchers::{method, path_regex},
    Mock, MockServer, ResponseTemplate,
};

use crate::constants::API_PREVIEWS;
use crate::octocrab_utils::build_client;

pub(crate) async fn setup() -> (MockServer, Octocrab) {
    // https://github.com/flows-network/octocrab/blob/main/examples/custom_client.rs
    let server = MockServer::start().await;
    let github = build_client(Some(server.uri().as_str()), None).unwrap();
    (server, github)
}

// Sets up a handler on the mock server which will return a 500 with the given message. This
// will be mapped internally into a GitHub json error, making it much easier to identify the cause
// of these test failures.
//
// This handler should always come after your real expectations as it will match any GET request.
pub(crate) async fn setup_error_handler(mock_server: &MockServer, message: &str) {
    Mock::given(method("GET"))
        .and(path_regex(".*"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!( {
            "documentation_url": "",
            "errors": None::<Vec<serde_json::Value>>,
            "message": message,
        })))
        .mount(mock_server)
        .await;
}

/// Asserts that every request the mock received opted into the API previews.
pub(crate) async fn assert_previews_requested(mock_server: &MockServer) {
    let requests = mock_server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert!(!requests.is_empty(), "no requests received");
    for request in requests {
        let accepted: Vec<&str> = request
            .headers
            .get_all("accept")
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(','))
            .map(str::trim)
            .collect();
        for preview in API_PREVIEWS {
            let media_type = format!("application/vnd.github.{preview}-preview");
            assert!(
                accepted.contains(&media_type.as_str()),
                "{} {} does not accept {media_type}: {accepted:?}",
                request.method,
                request.url,
            );
        }
    }
}

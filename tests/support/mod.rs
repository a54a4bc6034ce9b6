//! Shared fixtures for the network-level tests.
#![allow(dead_code)]

use fsq::{Authenticator, Credentials, Endpoints};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// The token every mock exchange hands out.
pub const FIXTURE_TOKEN: &str = "fixture-token";

pub fn credentials() -> Credentials {
    Credentials {
        client_id: "CLIENT".to_string(),
        client_secret: "SECRET".to_string(),
        redirect_uri: "https://example.com/callback".to_string(),
    }
}

/// Endpoints rooted at the given mock server.
pub fn endpoints(server: &MockServer) -> Endpoints {
    Endpoints {
        oauth_base: format!("{}/oauth2/", server.uri()),
        api_base: format!("{}/v2/", server.uri()),
    }
}

/// An authenticator that has already exchanged a code against the mock
/// server and holds [`FIXTURE_TOKEN`].
pub async fn authenticated(server: &MockServer) -> Authenticator {
    Mock::given(method("GET"))
        .and(path("/oauth2/access_token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"access_token": FIXTURE_TOKEN})),
        )
        .mount(server)
        .await;

    let mut authenticator = Authenticator::with_endpoints(credentials(), endpoints(server));
    authenticator
        .exchange_code("fixture-code")
        .await
        .expect("token exchange against the mock server should succeed");
    authenticator
}

use std::time::Duration;

use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::Error;

/// The base of the OAuth2 endpoints (authenticate, access_token).
const OAUTH_BASE: &str = "https://foursquare.com/oauth2/";

/// The base of the versioned resource API.
const API_BASE: &str = "https://api.foursquare.com/v2/";

/// How long to wait on any single request before giving up.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// OAuth2 application credentials, fixed at construction.
///
/// Deserializable so callers can load them straight from a config file.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    /// Same as the callback URI registered with Foursquare.
    pub redirect_uri: String,
}

/// The server bases requests are issued against.
///
/// The defaults point at Foursquare proper; tests override both to point at
/// a local server. Both bases must end with a trailing slash so that paths
/// join underneath them.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub oauth_base: String,
    pub api_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            oauth_base: OAUTH_BASE.to_string(),
            api_base: API_BASE.to_string(),
        }
    }
}

/// Owns the OAuth2 credentials and, after the code exchange, the access
/// token every query is authenticated with.
///
/// The token is written exactly once, by [`Authenticator::exchange_code`],
/// and only read afterwards; there is no refresh flow. Intended for
/// single-session use.
#[derive(Debug)]
pub struct Authenticator {
    credentials: Credentials,
    endpoints: Endpoints,
    client: reqwest::Client,
    timeout: Duration,
    /// Absent until the code exchange completes.
    access_token: Option<String>,
}

impl Authenticator {
    /// Creates an authenticator against the real Foursquare endpoints.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_endpoints(credentials, Endpoints::default())
    }

    /// Creates an authenticator against the given endpoints.
    pub fn with_endpoints(credentials: Credentials, endpoints: Endpoints) -> Self {
        Self {
            credentials,
            endpoints,
            client: reqwest::Client::new(),
            timeout: REQUEST_TIMEOUT,
            access_token: None,
        }
    }

    /// Overrides the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the URI that directs the user to authenticate with
    /// Foursquare. Pure composition of the credentials; no network traffic.
    pub fn authorize_uri(&self) -> Result<Url, Error> {
        let mut url = Url::parse(&self.endpoints.oauth_base)?.join("authenticate")?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.credentials.client_id)
            .append_pair("response_type", "code")
            .append_pair("redirect_uri", &self.credentials.redirect_uri);
        Ok(url)
    }

    /// Given the one-time code from the OAuth2 redirect, requests an access
    /// token and stores it for every later query.
    pub async fn exchange_code(&mut self, code: &str) -> Result<(), Error> {
        let path = "oauth2/access_token";
        let mut url = Url::parse(&self.endpoints.oauth_base)?.join("access_token")?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.credentials.client_id)
            .append_pair("client_secret", &self.credentials.client_secret)
            .append_pair("grant_type", "authorization_code")
            .append_pair("redirect_uri", &self.credentials.redirect_uri)
            .append_pair("code", code);

        let body = self.fetch_json(url, path).await?;
        let Some(token) = body.get("access_token").and_then(Value::as_str) else {
            return Err(Error::Envelope {
                path: path.to_string(),
                field: "access_token".to_string(),
            });
        };
        self.access_token = Some(token.to_string());
        Ok(())
    }

    /// Returns the held access token, or [`Error::Unauthenticated`] when no
    /// exchange has completed yet.
    pub fn access_token(&self) -> Result<&str, Error> {
        self.access_token.as_deref().ok_or(Error::Unauthenticated)
    }

    /// Issues an authenticated GET against the resource API and unwraps the
    /// standard `{"response": {...}}` envelope, returning the inner object.
    pub async fn query(&self, path: &str, parameters: &[(&str, &str)]) -> Result<Value, Error> {
        let url = self.request_url(path, parameters)?;
        debug!(path, "querying api");

        let mut body = self.fetch_json(url, path).await?;
        match body.get_mut("response") {
            Some(response) => Ok(response.take()),
            None => Err(Error::Envelope {
                path: path.to_string(),
                field: "response".to_string(),
            }),
        }
    }

    /// Composes the full request URL for a query: base, path, then the
    /// `oauth_token` parameter first and any extra parameters after it.
    /// Every pair is percent-encoded.
    fn request_url(&self, path: &str, parameters: &[(&str, &str)]) -> Result<Url, Error> {
        let token = self.access_token()?;
        let mut url = Url::parse(&self.endpoints.api_base)?.join(path)?;
        {
            let mut pairs = url.query_pairs_mut();
            // The oauth_token should always be the first parameter passed.
            pairs.append_pair("oauth_token", token);
            for (key, value) in parameters {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Performs a GET and parses the body as JSON.
    async fn fetch_json(&self, url: Url, path: &str) -> Result<Value, Error> {
        let result = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|source| Error::Network {
                path: path.to_string(),
                source,
            })?;

        // We assume any request resulting in an error has a non-2xx code.
        if !result.status().is_success() {
            return Err(Error::Status {
                path: path.to_string(),
                status: result.status(),
            });
        }

        let response_text = result.text().await.map_err(|source| Error::Network {
            path: path.to_string(),
            source,
        })?;
        serde_json::from_str(&response_text).map_err(|source| Error::Parse {
            path: path.to_string(),
            source,
        })
    }
}

use thiserror::Error;

/// Possible error types while talking to the Foursquare API.
///
/// These only cover the request path: building a URL, making the HTTP call,
/// and unwrapping the response envelope. Reads of individual resource fields
/// never error; see the projection types in [`crate::api`].
#[derive(Debug, Error)]
pub enum Error {
    /// The transport layer failed before a response could be read.
    #[error("request to {path} failed: {source}")]
    Network {
        /// API path the request was issued against.
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status code.
    #[error("request to {path} returned {status}")]
    Status {
        /// API path the request was issued against.
        path: String,
        status: reqwest::StatusCode,
    },

    /// The response body was not valid JSON.
    #[error("response from {path} was not valid JSON: {source}")]
    Parse {
        /// API path the request was issued against.
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The response JSON was missing a field the API contract promises.
    #[error("response from {path} was missing the `{field}` field")]
    Envelope {
        /// API path the request was issued against.
        path: String,
        /// Dotted path of the missing field.
        field: String,
    },

    /// No access token has been obtained yet.
    #[error("no access token held: call `exchange_code` first")]
    Unauthenticated,

    /// A request URL could not be composed.
    #[error("could not compose request URL: {0}")]
    UrlFormat(#[from] url::ParseError),
}

use serde_json::Value;

use super::field::{pluck_str, pluck_u64};

/// A read-only view over one photo's raw JSON.
///
/// Photos carry no nested resources, so this is the one projection that
/// does not hold an authenticator.
#[derive(Debug)]
pub struct Photo {
    data: Value,
}

impl Photo {
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    /// Returns the id of the photo.
    pub fn id(&self) -> Option<&str> {
        pluck_str(&self.data, &["id"])
    }

    /// Returns the Unix timestamp at which the photo was created.
    pub fn created_at(&self) -> Option<u64> {
        pluck_u64(&self.data, &["createdAt"])
    }

    /// Returns the url for the photo.
    pub fn url(&self) -> Option<&str> {
        pluck_str(&self.data, &["url"])
    }
}

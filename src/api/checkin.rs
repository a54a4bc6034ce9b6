use serde_json::Value;

use super::field::{pluck, pluck_str, pluck_u64};
use super::photo::Photo;
use super::venue::Venue;
use crate::auth::Authenticator;

/// A read-only view over one checkin's raw JSON.
#[derive(Debug)]
pub struct Checkin<'a> {
    authenticator: &'a Authenticator,
    data: Value,
}

impl<'a> Checkin<'a> {
    pub fn new(authenticator: &'a Authenticator, data: Value) -> Self {
        Self { authenticator, data }
    }

    /// Returns the id of the checkin.
    pub fn id(&self) -> Option<&str> {
        pluck_str(&self.data, &["id"])
    }

    /// Returns the Unix timestamp of the checkin.
    pub fn created_at(&self) -> Option<u64> {
        pluck_u64(&self.data, &["createdAt"])
    }

    /// Returns the timezone of the checkin.
    pub fn time_zone(&self) -> Option<&str> {
        pluck_str(&self.data, &["timeZone"])
    }

    /// Returns the type of the checkin.
    pub fn checkin_type(&self) -> Option<&str> {
        pluck_str(&self.data, &["type"])
    }

    /// Returns true when the checkin carries a shout.
    pub fn has_shout(&self) -> bool {
        self.data.get("shout").is_some()
    }

    /// Returns the shout attached to the checkin, if any.
    pub fn shout(&self) -> Option<&str> {
        pluck_str(&self.data, &["shout"])
    }

    /// Returns the venue the checkin happened at, built from the embedded
    /// fragment.
    pub fn venue(&self) -> Option<Venue<'a>> {
        let venue = pluck(&self.data, &["venue"])?;
        Some(Venue::new(self.authenticator, venue.clone()))
    }

    /// Returns the number of photos attached to this checkin.
    pub fn photos_count(&self) -> Option<u64> {
        pluck_u64(&self.data, &["photos", "count"])
    }

    /// Returns true when any photos are attached to this checkin.
    pub fn has_photos(&self) -> bool {
        self.photos_count().is_some_and(|count| count > 0)
    }

    /// Returns the photos attached to this checkin, from the embedded
    /// items. Empty when the fragment is absent.
    pub fn photos(&self) -> Vec<Photo> {
        pluck(&self.data, &["photos", "items"])
            .and_then(Value::as_array)
            .map(|items| items.iter().cloned().map(Photo::new).collect())
            .unwrap_or_default()
    }
}

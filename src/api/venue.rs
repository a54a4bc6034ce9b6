use serde_json::Value;

use super::field::{pluck, pluck_str, pluck_u64};
use super::user::User;
use crate::auth::Authenticator;

/// A read-only view over one venue's raw JSON.
///
/// Mayorships come back from the API in this shape too, so a mayorship is
/// simply a `Venue` held by [`User::mayorships`].
#[derive(Debug)]
pub struct Venue<'a> {
    authenticator: &'a Authenticator,
    data: Value,
}

impl<'a> Venue<'a> {
    pub fn new(authenticator: &'a Authenticator, data: Value) -> Self {
        Self { authenticator, data }
    }

    /// Returns the venue id.
    pub fn id(&self) -> Option<&str> {
        pluck_str(&self.data, &["id"])
    }

    /// Returns the name of the venue.
    pub fn name(&self) -> Option<&str> {
        pluck_str(&self.data, &["name"])
    }

    /// Returns the raw contact information for the venue.
    pub fn contact(&self) -> Option<&Value> {
        pluck(&self.data, &["contact"])
    }

    /// Returns whether the venue has been verified by its owner.
    pub fn verified(&self) -> Option<bool> {
        pluck(&self.data, &["verified"]).and_then(Value::as_bool)
    }

    /// Returns the total number of checkins at the venue.
    pub fn checkins_count(&self) -> Option<u64> {
        pluck_u64(&self.data, &["stats", "checkinsCount"])
    }

    /// Returns the number of distinct users who checked in at the venue.
    pub fn users_count(&self) -> Option<u64> {
        pluck_u64(&self.data, &["stats", "usersCount"])
    }

    /// Returns the venue's website.
    pub fn url(&self) -> Option<&str> {
        pluck_str(&self.data, &["url"])
    }

    /// Returns the number of users at the venue right now.
    pub fn here_now_count(&self) -> Option<u64> {
        pluck_u64(&self.data, &["hereNow", "count"])
    }

    /// Returns the number of tips left at the venue.
    pub fn tips_count(&self) -> Option<u64> {
        pluck_u64(&self.data, &["tips", "count"])
    }

    /// Returns the mayor of the venue, built from the embedded fragment.
    pub fn mayor(&self) -> Option<User<'a>> {
        let mayor = pluck(&self.data, &["mayor", "user"])?;
        Some(User::new(self.authenticator, mayor.clone()))
    }
}

use serde_json::Value;

use super::field::{pluck, pluck_str, pluck_u64};
use super::venue::Venue;
use crate::auth::Authenticator;

/// A read-only view over one tip's raw JSON.
#[derive(Debug)]
pub struct Tip<'a> {
    authenticator: &'a Authenticator,
    data: Value,
}

impl<'a> Tip<'a> {
    pub fn new(authenticator: &'a Authenticator, data: Value) -> Self {
        Self { authenticator, data }
    }

    /// Returns the id of the tip.
    pub fn id(&self) -> Option<&str> {
        pluck_str(&self.data, &["id"])
    }

    /// Returns the Unix timestamp at which the tip was left.
    pub fn created_at(&self) -> Option<u64> {
        pluck_u64(&self.data, &["createdAt"])
    }

    /// Returns the text of the tip.
    pub fn text(&self) -> Option<&str> {
        pluck_str(&self.data, &["text"])
    }

    /// Returns the venue the tip was left at, built from the embedded
    /// fragment.
    pub fn venue(&self) -> Option<Venue<'a>> {
        let venue = pluck(&self.data, &["venue"])?;
        Some(Venue::new(self.authenticator, venue.clone()))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::auth::Credentials;

    fn authenticator() -> Authenticator {
        Authenticator::new(Credentials {
            client_id: "CLIENT".to_string(),
            client_secret: "SECRET".to_string(),
            redirect_uri: "https://example.com/callback".to_string(),
        })
    }

    #[rstest]
    fn accessors_read_the_fragment() {
        let authenticator = authenticator();
        let tip = Tip::new(
            &authenticator,
            json!({
                "id": "t1",
                "createdAt": 1_300_000_000u64,
                "text": "Try the coffee.",
                "venue": {"id": "v1", "name": "Docks"},
            }),
        );

        assert_eq!(tip.id(), Some("t1"));
        assert_eq!(tip.text(), Some("Try the coffee."));
        let venue = tip.venue().expect("venue should be embedded");
        assert_eq!(venue.name(), Some("Docks"));
    }

    #[rstest]
    fn missing_venue_is_none() {
        let authenticator = authenticator();
        let tip = Tip::new(&authenticator, json!({"id": "t2"}));
        assert!(tip.venue().is_none());
        assert_eq!(tip.text(), None);
    }
}

use serde_json::Value;
use tracing::warn;

use super::checkin::Checkin;
use super::field::{pluck, pluck_str, pluck_u64, take_items};
use super::tip::Tip;
use super::venue::Venue;
use crate::auth::Authenticator;
use crate::error::Error;

/// The maximum number of checkins the API returns per request.
/// A page shorter than this marks the end of the collection.
const CHECKIN_PAGE_SIZE: usize = 250;

/// A read-only view over one user's raw JSON.
#[derive(Debug)]
pub struct User<'a> {
    authenticator: &'a Authenticator,
    data: Value,
}

impl<'a> User<'a> {
    /// Wraps the raw user JSON together with the authenticator used for
    /// follow-up queries.
    pub fn new(authenticator: &'a Authenticator, data: Value) -> Self {
        Self { authenticator, data }
    }

    /// Returns the user's id.
    pub fn id(&self) -> Option<&str> {
        pluck_str(&self.data, &["id"])
    }

    /// Returns the user's first name.
    pub fn first_name(&self) -> Option<&str> {
        pluck_str(&self.data, &["firstName"])
    }

    /// Returns the user's last name.
    pub fn last_name(&self) -> Option<&str> {
        pluck_str(&self.data, &["lastName"])
    }

    /// Returns the user's gender.
    pub fn gender(&self) -> Option<&str> {
        pluck_str(&self.data, &["gender"])
    }

    /// Returns the user's email address.
    pub fn email(&self) -> Option<&str> {
        pluck_str(&self.data, &["contact", "email"])
    }

    /// Returns the user's Twitter handle.
    pub fn twitter(&self) -> Option<&str> {
        pluck_str(&self.data, &["contact", "twitter"])
    }

    /// Returns the user's Facebook identifier.
    pub fn facebook(&self) -> Option<&str> {
        pluck_str(&self.data, &["contact", "facebook"])
    }

    /// Returns the user's phone number.
    pub fn phone(&self) -> Option<&str> {
        pluck_str(&self.data, &["contact", "phone"])
    }

    /// Returns the photo (icon) associated with the user.
    pub fn photo(&self) -> Option<&Value> {
        pluck(&self.data, &["photo"])
    }

    /// Returns the number of badges the user has earned.
    pub fn badges_count(&self) -> Option<u64> {
        pluck_u64(&self.data, &["badges", "count"])
    }

    /// Returns the number of checkins.
    pub fn checkins_count(&self) -> Option<u64> {
        pluck_u64(&self.data, &["checkins", "count"])
    }

    /// Returns the number of mayorships the user holds.
    pub fn mayorships_count(&self) -> Option<u64> {
        pluck_u64(&self.data, &["mayorships", "count"])
    }

    /// Returns the number of users this user is following.
    pub fn following_count(&self) -> Option<u64> {
        pluck_u64(&self.data, &["following", "count"])
    }

    /// Returns the number of tips the user has left.
    pub fn tips_count(&self) -> Option<u64> {
        pluck_u64(&self.data, &["tips", "count"])
    }

    /// Returns the number of todos the user has saved.
    pub fn todos_count(&self) -> Option<u64> {
        pluck_u64(&self.data, &["todos", "count"])
    }

    /// Returns the user's recent score.
    pub fn recent_scores(&self) -> Option<u64> {
        pluck_u64(&self.data, &["scores", "recent"])
    }

    /// Returns the user's highest score.
    pub fn max_scores(&self) -> Option<u64> {
        pluck_u64(&self.data, &["scores", "max"])
    }

    /// Returns the venues the user is mayor of, from the embedded
    /// mayorship items. Empty when the fragment is absent.
    pub fn mayorships(&self) -> Vec<Venue<'a>> {
        self.embedded_items(&["mayorships", "items"])
            .into_iter()
            .map(|item| Venue::new(self.authenticator, item))
            .collect()
    }

    /// Returns the most recent checkin embedded in the user's JSON.
    pub fn last_checkin(&self) -> Option<Checkin<'a>> {
        let items = pluck(&self.data, &["checkins", "items"])?.as_array()?;
        let checkin = items.last()?;
        Some(Checkin::new(self.authenticator, checkin.clone()))
    }

    /// Fetches the user's friends. Issues a network request.
    pub async fn friends(&self) -> Result<Vec<User<'a>>, Error> {
        let path = format!("users/{}/friends", self.require_id()?);
        let mut response = self.authenticator.query(&path, &[]).await?;
        let items = take_items(&mut response, &path, "friends")?;
        Ok(items
            .into_iter()
            .map(|item| User::new(self.authenticator, item))
            .collect())
    }

    /// Fetches the user's tips. Issues a network request.
    pub async fn tips(&self) -> Result<Vec<Tip<'a>>, Error> {
        let path = format!("users/{}/tips", self.require_id()?);
        let mut response = self.authenticator.query(&path, &[]).await?;
        let items = take_items(&mut response, &path, "tips")?;
        Ok(items
            .into_iter()
            .map(|item| Tip::new(self.authenticator, item))
            .collect())
    }

    /// Fetches one page of the user's checkins. `parameters` pass through
    /// to the API (`limit`, `offset`, and friends).
    pub async fn checkins(&self, parameters: &[(&str, &str)]) -> Result<Vec<Checkin<'a>>, Error> {
        let path = format!("users/{}/checkins", self.require_id()?);
        let mut response = self.authenticator.query(&path, parameters).await?;
        let items = take_items(&mut response, &path, "checkins")?;
        Ok(items
            .into_iter()
            .map(|item| Checkin::new(self.authenticator, item))
            .collect())
    }

    /// Fetches the user's entire checkin history, page by page.
    ///
    /// Pages are requested at the API's maximum size; a short page marks
    /// the end of the collection. A history that is an exact multiple of
    /// the page size costs one extra, empty fetch.
    pub async fn all_checkins(&self) -> Result<Vec<Checkin<'a>>, Error> {
        let limit = CHECKIN_PAGE_SIZE.to_string();
        let mut checkins = Vec::new();
        let mut last_page_len = CHECKIN_PAGE_SIZE;

        while last_page_len == CHECKIN_PAGE_SIZE {
            let offset = checkins.len().to_string();
            let page = self
                .checkins(&[("limit", limit.as_str()), ("offset", offset.as_str())])
                .await?;
            last_page_len = page.len();
            checkins.extend(page);
        }

        Ok(checkins)
    }

    /// Fetches the checkins currently at the venue of this user's most
    /// recent checkin. Only works for friends of the authenticating user.
    ///
    /// Individual checkins the token cannot read are skipped rather than
    /// failing the whole listing.
    pub async fn checkins_here(&self) -> Result<Vec<Checkin<'a>>, Error> {
        let venue_id = self
            .last_checkin()
            .and_then(|checkin| checkin.venue())
            .and_then(|venue| venue.id().map(String::from));
        let Some(venue_id) = venue_id else {
            return Ok(Vec::new());
        };

        let path = format!("venues/{venue_id}/herenow");
        let mut response = self.authenticator.query(&path, &[]).await?;
        let items = take_items(&mut response, &path, "hereNow")?;

        let mut checkins = Vec::new();
        for item in items {
            let Some(id) = pluck_str(&item, &["id"]) else {
                continue;
            };
            let detail = self.authenticator.query(&format!("checkins/{id}"), &[]).await;
            match detail {
                Ok(mut detail) => {
                    if let Some(checkin) = detail.get_mut("checkin") {
                        checkins.push(Checkin::new(self.authenticator, checkin.take()));
                    }
                }
                // Skip over checkins which we are not authorized to access.
                Err(Error::Status { status, .. }) => {
                    warn!(checkin = id, %status, "skipping inaccessible checkin");
                }
                Err(error) => return Err(error),
            }
        }
        Ok(checkins)
    }

    fn require_id(&self) -> Result<&str, Error> {
        self.id().ok_or_else(|| Error::Envelope {
            path: "user".to_string(),
            field: "id".to_string(),
        })
    }

    fn embedded_items(&self, path: &[&str]) -> Vec<Value> {
        pluck(&self.data, path)
            .and_then(Value::as_array)
            .map(|items| items.to_vec())
            .unwrap_or_default()
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
    fn accessors_read_nested_fields() {
        let authenticator = authenticator();
        let user = User::new(
            &authenticator,
            json!({
                "id": "1234",
                "firstName": "Jane",
                "contact": {"email": "jane@example.com", "twitter": "jane"},
                "checkins": {"count": 42},
                "scores": {"recent": 7, "max": 99},
            }),
        );

        assert_eq!(user.id(), Some("1234"));
        assert_eq!(user.first_name(), Some("Jane"));
        assert_eq!(user.email(), Some("jane@example.com"));
        assert_eq!(user.twitter(), Some("jane"));
        assert_eq!(user.checkins_count(), Some(42));
        assert_eq!(user.recent_scores(), Some(7));
        assert_eq!(user.max_scores(), Some(99));
    }

    #[rstest]
    fn missing_fields_are_none_not_errors() {
        let authenticator = authenticator();
        let user = User::new(&authenticator, json!({}));

        assert_eq!(user.id(), None);
        assert_eq!(user.last_name(), None);
        assert_eq!(user.phone(), None);
        assert_eq!(user.badges_count(), None);
        assert!(user.mayorships().is_empty());
        assert!(user.last_checkin().is_none());
    }

    #[rstest]
    fn last_checkin_takes_the_most_recent_item() {
        let authenticator = authenticator();
        let user = User::new(
            &authenticator,
            json!({
                "checkins": {"count": 2, "items": [
                    {"id": "older"},
                    {"id": "newer"},
                ]}
            }),
        );

        let checkin = user.last_checkin().expect("checkin should be embedded");
        assert_eq!(checkin.id(), Some("newer"));
    }

    #[rstest]
    fn mayorships_wrap_embedded_venues() {
        let authenticator = authenticator();
        let user = User::new(
            &authenticator,
            json!({
                "mayorships": {"count": 1, "items": [{"id": "v1", "name": "Coffee"}]}
            }),
        );

        let mayorships = user.mayorships();
        assert_eq!(mayorships.len(), 1);
        assert_eq!(mayorships[0].name(), Some("Coffee"));
    }
}

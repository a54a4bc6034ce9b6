//! An unofficial client for the Foursquare APIv2 REST interface.
//!
//! Authentication follows OAuth2's authorization code flow: direct the user
//! to [`Authenticator::authorize_uri`], then hand the code from the redirect
//! back to [`Authenticator::exchange_code`]. Every later query rides on the
//! stored access token.
//!
//! Resources come back as lightweight projections ([`User`], [`Checkin`],
//! [`Venue`], [`Photo`], [`Tip`]) over the raw JSON the API returned.
//! Accessors read fields on demand; a field missing from the backing JSON is
//! `None` rather than an error, because the API's JSON is not structurally
//! stable across resource states.
//!
//! ```no_run
//! use fsq::{Authenticator, Credentials, UserFinder};
//!
//! # async fn run() -> Result<(), fsq::Error> {
//! let mut authenticator = Authenticator::new(Credentials {
//!     client_id: "CLIENT_ID".to_string(),
//!     client_secret: "CLIENT_SECRET".to_string(),
//!     redirect_uri: "https://example.com/callback".to_string(),
//! });
//!
//! // Send the user here, then collect the code from the redirect.
//! println!("visit {}", authenticator.authorize_uri()?);
//! authenticator.exchange_code("CODE").await?;
//!
//! let finder = UserFinder::new(&authenticator);
//! let user = finder.find_by_id("self").await?;
//! for checkin in user.all_checkins().await? {
//!     let venue = checkin.venue().and_then(|venue| venue.name().map(String::from));
//!     println!("{venue:?}");
//! }
//! # Ok(())
//! # }
//! ```

mod auth;
mod error;

pub mod api;

pub use api::{Checkin, Photo, Tip, User, UserFinder, Venue};
pub use auth::{Authenticator, Credentials, Endpoints};
pub use error::Error;

//! Typed projections over raw API resources.
//!
//! Each projection wraps the JSON fragment the API returned for one resource
//! plus the [`Authenticator`](crate::Authenticator) used for follow-up
//! queries. Construction never parses or validates; accessors read fields on
//! demand. Nested resources (a checkin's venue, a venue's mayor) are built
//! lazily from the fragment already in hand, not re-fetched. Accessors that
//! do hit the network say so and return `Result`.

mod checkin;
mod field;
mod finder;
mod photo;
mod tip;
mod user;
mod venue;

pub use checkin::Checkin;
pub use finder::UserFinder;
pub use photo::Photo;
pub use tip::Tip;
pub use user::User;
pub use venue::Venue;

use super::user::User;
use crate::auth::Authenticator;
use crate::error::Error;

/// Looks up users by id through an authenticated session.
#[derive(Debug)]
pub struct UserFinder<'a> {
    authenticator: &'a Authenticator,
}

impl<'a> UserFinder<'a> {
    pub fn new(authenticator: &'a Authenticator) -> Self {
        Self { authenticator }
    }

    /// Retrieves the user with the given id ("self" works for the
    /// authenticating user). Errors when the id does not exist or the
    /// session lacks access to it.
    pub async fn find_by_id(&self, id: &str) -> Result<User<'a>, Error> {
        let path = format!("users/{id}");
        let mut response = self.authenticator.query(&path, &[]).await?;
        match response.get_mut("user") {
            Some(user) => Ok(User::new(self.authenticator, user.take())),
            None => Err(Error::Envelope {
                path,
                field: "user".to_string(),
            }),
        }
    }
}

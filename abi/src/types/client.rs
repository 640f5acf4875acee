use sqlx::FromRow;

use crate::{ClientId, Error};

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email: String,
}

impl Client {
    /// Builds an unsaved client. E-mail addresses are compared case-insensitively,
    /// so they are stored lower-cased.
    pub fn new(name: impl Into<String>, email: impl AsRef<str>) -> Self {
        Self {
            id: 0,
            name: name.into().trim().to_string(),
            email: email.as_ref().trim().to_lowercase(),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.name.is_empty() {
            return Err(Error::InvalidArgument("client name must not be empty".into()));
        }
        if !validator::validate_email(self.email.as_str()) {
            return Err(Error::InvalidArgument(format!(
                "{:?} is not a valid email address",
                self.email
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_should_be_normalized() {
        let c = Client::new(" Ana ", " Ana@Example.COM ");
        assert_eq!(c.name, "Ana");
        assert_eq!(c.email, "ana@example.com");
        assert!(c.validate().is_ok());
    }

    #[test]
    fn invalid_client_should_be_rejected() {
        assert!(Client::new("Ana", "not-an-email").validate().is_err());
        assert!(Client::new("", "ana@example.com").validate().is_err());
    }
}

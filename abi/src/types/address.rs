use crate::Error;

pub const DEFAULT_COUNTRY: &str = "Brasil";

/// Location of a property. Owned by exactly one property and replaced as a
/// whole, never edited field by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub country: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: impl Into<String>,
        neighborhood: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            number: number.into(),
            neighborhood: neighborhood.into(),
            city: city.into(),
            state: state.into(),
            country: country.into(),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        let fields = [
            ("street", &self.street),
            ("number", &self.number),
            ("neighborhood", &self.neighborhood),
            ("city", &self.city),
            ("state", &self.state),
            ("country", &self.country),
        ];
        match fields.iter().find(|(_, v)| v.trim().is_empty()) {
            Some((name, _)) => Err(Error::InvalidArgument(format!(
                "address {} must not be empty",
                name
            ))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_field_should_be_rejected() {
        let addr = Address::new("Rua A", "10", " ", "Florianópolis", "SC", "Brasil");
        assert_eq!(
            addr.validate().unwrap_err(),
            Error::InvalidArgument("address neighborhood must not be empty".into())
        );
    }
}

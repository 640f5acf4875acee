use derive_builder::Builder;
use rust_decimal::Decimal;

use crate::{ClientId, Error, PropertyId, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Paged reservation listing. Without `include_cancelled` only active
/// reservations are returned.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct ReservationFilter {
    #[builder(setter(into, strip_option), default)]
    pub property_id: Option<PropertyId>,
    #[builder(setter(into, strip_option), default)]
    pub client_id: Option<ClientId>,
    #[builder(setter(into, strip_option), default)]
    pub client_email: Option<String>,
    #[builder(default)]
    pub include_cancelled: bool,
    #[builder(default = "1")]
    pub page: i64,
    #[builder(default = "DEFAULT_PAGE_SIZE")]
    pub page_size: i64,
}

/// Paged property search. Location fields match case-insensitive substrings;
/// `max_capacity` and `max_price` are inclusive upper bounds.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct PropertyFilter {
    #[builder(setter(into, strip_option), default)]
    pub city: Option<String>,
    #[builder(setter(into, strip_option), default)]
    pub state: Option<String>,
    #[builder(setter(into, strip_option), default)]
    pub neighborhood: Option<String>,
    #[builder(setter(into, strip_option), default)]
    pub max_capacity: Option<i32>,
    #[builder(setter(into, strip_option), default)]
    pub max_price: Option<Decimal>,
    #[builder(default = "1")]
    pub page: i64,
    #[builder(default = "DEFAULT_PAGE_SIZE")]
    pub page_size: i64,
}

fn validate_page(page: i64, page_size: i64) -> Result<(), Error> {
    if page < 1 {
        return Err(Error::InvalidArgument("page starts at 1".into()));
    }
    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(Error::InvalidArgument(format!(
            "page_size must be between 1 and {}",
            MAX_PAGE_SIZE
        )));
    }
    if (page - 1).checked_mul(page_size).is_none() {
        return Err(Error::InvalidArgument(format!("page {} is out of range", page)));
    }
    Ok(())
}

impl ReservationFilter {
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(email) = &self.client_email {
            if !validator::validate_email(email.trim()) {
                return Err(Error::InvalidArgument(format!(
                    "{:?} is not a valid email address",
                    email
                )));
            }
        }
        validate_page(self.page, self.page_size)
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// In-memory counterpart of the SQL `WHERE` clause. `client_email` is
    /// checked by the store, which knows the clients.
    pub fn matches(&self, rsvp: &crate::Reservation) -> bool {
        self.property_id.map_or(true, |id| rsvp.property_id == id)
            && self.client_id.map_or(true, |id| rsvp.client_id == id)
            && (self.include_cancelled || rsvp.active)
    }
}

impl Default for ReservationFilter {
    fn default() -> Self {
        Self {
            property_id: None,
            client_id: None,
            client_email: None,
            include_cancelled: false,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PropertyFilter {
    pub fn validate(&self) -> Result<(), Error> {
        if matches!(self.max_capacity, Some(c) if c < 1) {
            return Err(Error::InvalidArgument("max_capacity must be positive".into()));
        }
        if matches!(self.max_price, Some(p) if p <= Decimal::ZERO) {
            return Err(Error::InvalidArgument("max_price must be positive".into()));
        }
        validate_page(self.page, self.page_size)
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }

    pub fn matches(&self, property: &crate::Property) -> bool {
        fn contains(field: &str, needle: &Option<String>) -> bool {
            needle
                .as_ref()
                .map_or(true, |n| field.to_lowercase().contains(&n.to_lowercase()))
        }
        let addr = &property.address;
        contains(&addr.city, &self.city)
            && contains(&addr.state, &self.state)
            && contains(&addr.neighborhood, &self.neighborhood)
            && self.max_capacity.map_or(true, |c| property.capacity <= c)
            && self.max_price.map_or(true, |p| property.nightly_price <= p)
    }
}

impl Default for PropertyFilter {
    fn default() -> Self {
        Self {
            city: None,
            state: None,
            neighborhood: None,
            max_capacity: None,
            max_price: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Address, Property};

    #[test]
    fn builder_should_fill_defaults() {
        let filter = ReservationFilterBuilder::default()
            .property_id(3)
            .build()
            .unwrap();
        assert_eq!(filter.property_id, Some(3));
        assert!(!filter.include_cancelled);
        assert_eq!(filter.page, 1);
        assert_eq!(filter.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(filter.offset(), 0);
    }

    #[test]
    fn page_bounds_should_be_checked() {
        let mut filter = ReservationFilter::default();
        filter.page = 3;
        filter.page_size = 10;
        assert!(filter.validate().is_ok());
        assert_eq!(filter.offset(), 20);

        filter.page_size = MAX_PAGE_SIZE + 1;
        assert!(filter.validate().is_err());
        filter.page_size = 10;
        filter.page = 0;
        assert!(filter.validate().is_err());
    }

    #[test]
    fn huge_page_should_be_rejected_not_overflow() {
        let filter = ReservationFilterBuilder::default()
            .page(i64::MAX)
            .page_size(MAX_PAGE_SIZE)
            .build()
            .unwrap();
        assert!(matches!(filter.validate(), Err(Error::InvalidArgument(_))));

        let filter = PropertyFilterBuilder::default()
            .page(i64::MAX)
            .build()
            .unwrap();
        assert!(matches!(filter.validate(), Err(Error::InvalidArgument(_))));
        assert_eq!(filter.offset(), i64::MAX);
    }

    #[test]
    fn malformed_client_email_should_be_rejected() {
        let filter = ReservationFilterBuilder::default()
            .client_email("not-an-email")
            .build()
            .unwrap();
        assert!(matches!(filter.validate(), Err(Error::InvalidArgument(_))));

        let filter = ReservationFilterBuilder::default()
            .client_email("Alice@Example.com")
            .build()
            .unwrap();
        assert!(filter.validate().is_ok());
    }

    #[test]
    fn property_filter_should_match_case_insensitive_substrings() {
        let property = Property::new(
            "Loft",
            1,
            2,
            Decimal::new(25000, 2),
            Address::new("Av. Paulista", "1000", "Bela Vista", "São Paulo", "SP", "Brasil"),
        );
        let filter = PropertyFilterBuilder::default()
            .city("paulo")
            .max_capacity(2)
            .build()
            .unwrap();
        assert!(filter.matches(&property));

        let filter = PropertyFilterBuilder::default()
            .max_price(Decimal::new(200, 0))
            .build()
            .unwrap();
        assert!(!filter.matches(&property));

        // wildcard characters are plain text
        let filter = PropertyFilterBuilder::default().city("S_o").build().unwrap();
        assert!(!filter.matches(&property));
        let filter = PropertyFilterBuilder::default().city("%").build().unwrap();
        assert!(!filter.matches(&property));
    }
}

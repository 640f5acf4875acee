use rust_decimal::Decimal;
use sqlx::{postgres::PgRow, FromRow, Row};

use crate::{max_amount, Address, Error, PropertyId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Assigned by the store; zero until the property is persisted.
    pub id: PropertyId,
    pub name: String,
    pub rooms: i32,
    pub capacity: i32,
    pub nightly_price: Decimal,
    pub address: Address,
}

impl Property {
    pub fn new(
        name: impl Into<String>,
        rooms: i32,
        capacity: i32,
        nightly_price: Decimal,
        address: Address,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            rooms,
            capacity,
            nightly_price,
            address,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidArgument("property name must not be empty".into()));
        }
        if self.rooms < 1 {
            return Err(Error::InvalidArgument("property needs at least one room".into()));
        }
        if self.capacity < 1 {
            return Err(Error::InvalidArgument(
                "property capacity must be at least one occupant".into(),
            ));
        }
        if self.nightly_price.is_sign_negative() {
            return Err(Error::InvalidArgument("nightly price must not be negative".into()));
        }
        // NUMERIC(12, 2) in storage
        if self.nightly_price.normalize().scale() > 2 {
            return Err(Error::InvalidArgument(
                "nightly price must have at most two decimal places".into(),
            ));
        }
        if self.nightly_price > max_amount() {
            return Err(Error::InvalidArgument(format!(
                "nightly price must not exceed {}",
                max_amount()
            )));
        }
        self.address.validate()
    }

    /// Whether `occupants` fits within `1..=capacity`.
    pub fn accommodates(&self, occupants: i32) -> bool {
        (1..=self.capacity).contains(&occupants)
    }
}

impl FromRow<'_, PgRow> for Property {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            rooms: row.try_get("rooms")?,
            capacity: row.try_get("capacity")?,
            nightly_price: row.try_get("nightly_price")?,
            address: Address {
                street: row.try_get("street")?,
                number: row.try_get("number")?,
                neighborhood: row.try_get("neighborhood")?,
                city: row.try_get("city")?,
                state: row.try_get("state")?,
                country: row.try_get("country")?,
            },
        })
    }
}

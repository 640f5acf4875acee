use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::FromRow;

use crate::{ClientId, PropertyId, ReservationId, ReservationWindow};

/// A booked stay on one property, covering the nights of `[start, end)`.
///
/// `total_price` is fixed when the reservation is made and survives both
/// later price changes on the property and cancellation.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Reservation {
    pub id: ReservationId,
    pub property_id: PropertyId,
    pub client_id: ClientId,
    #[sqlx(rename = "start_date")]
    pub start: NaiveDate,
    #[sqlx(rename = "end_date")]
    pub end: NaiveDate,
    pub occupants: i32,
    pub total_price: Decimal,
    pub active: bool,
}

/// What a caller asks for when booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRequest {
    pub client_id: ClientId,
    pub property_id: PropertyId,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub occupants: i32,
}

impl ReservationRequest {
    pub fn new(
        client_id: ClientId,
        property_id: PropertyId,
        start: NaiveDate,
        end: NaiveDate,
        occupants: i32,
    ) -> Self {
        Self {
            client_id,
            property_id,
            start,
            end,
            occupants,
        }
    }

    pub fn window(&self) -> ReservationWindow {
        ReservationWindow {
            property_id: self.property_id,
            start: self.start,
            end: self.end,
        }
    }
}

impl Reservation {
    /// An unsaved, active reservation for `req` charged `total_price`.
    pub fn new_active(req: &ReservationRequest, total_price: Decimal) -> Self {
        Self {
            id: 0,
            property_id: req.property_id,
            client_id: req.client_id,
            start: req.start,
            end: req.end,
            occupants: req.occupants,
            total_price,
            active: true,
        }
    }

    /// Half-open overlap: `[s1, e1)` and `[s2, e2)` meet iff `s1 < e2 && s2 < e1`.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start < end && start < self.end
    }

    pub fn window(&self) -> ReservationWindow {
        ReservationWindow {
            property_id: self.property_id,
            start: self.start,
            end: self.end,
        }
    }
}

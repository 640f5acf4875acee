//! Repository ports and their adapters.
//!
//! A [`Store`] hands out [`Session`]s. A session is one unit of work: its
//! writes become visible when it is committed, and dropping it uncommitted
//! discards them.

mod memory;
mod postgres;

use abi::{
    Client, ClientId, Error, Property, PropertyFilter, PropertyId, Reservation,
    ReservationFilter, ReservationId,
};
use async_trait::async_trait;

pub use memory::{InMemorySession, InMemoryStore};
pub use postgres::{PgSession, PgStore};

#[async_trait]
pub trait Store: Send + Sync + 'static {
    type Session: Session;

    async fn begin(&self) -> Result<Self::Session, Error>;
}

#[async_trait]
pub trait Session: PropertyRepository + ClientRepository + ReservationRepository {
    async fn commit(self) -> Result<(), Error>;
}

#[async_trait]
pub trait PropertyRepository: Send {
    async fn find_property_by_id(&mut self, id: PropertyId) -> Result<Option<Property>, Error>;
    /// Inserts `property` and returns it with its assigned id.
    async fn insert_property(&mut self, property: Property) -> Result<Property, Error>;
    async fn query_properties(&mut self, filter: &PropertyFilter) -> Result<Vec<Property>, Error>;
}

#[async_trait]
pub trait ClientRepository: Send {
    async fn find_client_by_id(&mut self, id: ClientId) -> Result<Option<Client>, Error>;
    async fn find_client_by_email(&mut self, email: &str) -> Result<Option<Client>, Error>;
    /// Fails with `EmailTaken` when another client already uses the address.
    async fn insert_client(&mut self, client: Client) -> Result<Client, Error>;
}

#[async_trait]
pub trait ReservationRepository: Send {
    async fn find_active_reservations_by_property(
        &mut self,
        property_id: PropertyId,
    ) -> Result<Vec<Reservation>, Error>;
    /// The row stays locked until the session ends.
    async fn find_reservation_by_id(&mut self, id: ReservationId)
        -> Result<Option<Reservation>, Error>;
    /// Inserts `rsvp` and returns it with its assigned id. An active
    /// reservation overlapping another active one on the same property is
    /// rejected with `DateConflict`, whatever the caller checked before.
    async fn save_reservation(&mut self, rsvp: Reservation) -> Result<Reservation, Error>;
    /// Persists the active flag of an existing reservation. Price, dates and
    /// occupants are never rewritten.
    async fn update_reservation(&mut self, rsvp: Reservation) -> Result<Reservation, Error>;
    async fn query_reservations(
        &mut self,
        filter: &ReservationFilter,
    ) -> Result<Vec<Reservation>, Error>;
}

mod availability;
mod manager;
mod pricing;
mod store;

use abi::{
    Availability, Client, ClientId, Error, Property, PropertyFilter, PropertyId, Reservation,
    ReservationFilter, ReservationId, ReservationRequest,
};
use async_trait::async_trait;

pub use availability::{assess, ensure_available, find_conflicts, is_available};
pub use pricing::{nights, total_price};
pub use store::{
    ClientRepository, InMemorySession, InMemoryStore, PgSession, PgStore, PropertyRepository,
    ReservationRepository, Session, Store,
};

/// Use-case entry point. Every call opens one store session, so all the reads a
/// booking decision depends on and the write that follows it share a
/// transaction.
#[derive(Debug)]
pub struct ReservationManager<S = PgStore> {
    store: S,
}

#[async_trait]
pub trait Rsvp {
    /// make a reservation
    async fn reserve(&self, req: ReservationRequest) -> Result<Reservation, Error>;
    /// cancel an active reservation; the record is kept, only its active flag flips
    async fn cancel(&self, id: ReservationId) -> Result<Reservation, Error>;
    /// get reservation by id
    async fn get(&self, id: ReservationId) -> Result<Reservation, Error>;
    /// query reservations
    async fn query(&self, filter: ReservationFilter) -> Result<Vec<Reservation>, Error>;
    /// report whether `req` could be booked now, without booking it
    async fn check_availability(&self, req: ReservationRequest) -> Result<Availability, Error>;
}

#[async_trait]
pub trait Catalog {
    async fn create_property(&self, property: Property) -> Result<Property, Error>;
    async fn get_property(&self, id: PropertyId) -> Result<Property, Error>;
    async fn list_properties(&self, filter: PropertyFilter) -> Result<Vec<Property>, Error>;
    /// find the client with this e-mail, registering them first if needed
    async fn register_client(&self, name: String, email: String) -> Result<Client, Error>;
    async fn get_client(&self, id: ClientId) -> Result<Client, Error>;
}

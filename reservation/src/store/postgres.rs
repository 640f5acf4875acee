use abi::{
    Client, ClientId, DbConfig, Entity, Error, Property, PropertyFilter, PropertyId, Reservation,
    ReservationFilter, ReservationId,
};
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool, Postgres, Transaction};
use tracing::info;

use super::{ClientRepository, PropertyRepository, ReservationRepository, Session, Store};

/// Postgres-backed store. Overlap protection lives in the schema as an
/// exclusion constraint over active reservations (see `migrations/`), so it
/// holds for concurrent writers too.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

pub struct PgSession {
    tx: Transaction<'static, Postgres>,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &DbConfig) -> Result<Self, Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url())
            .await?;
        info!(host = %config.host, db = %config.dbname, "connected to postgres");
        Ok(Self::new(pool))
    }

    /// Applies the embedded migrations.
    pub async fn migrate(&self) -> Result<(), Error> {
        sqlx::migrate!("../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::StorageUnavailable(e.to_string()))
    }
}

#[async_trait]
impl Store for PgStore {
    type Session = PgSession;

    async fn begin(&self) -> Result<PgSession, Error> {
        let tx = self.pool.begin().await?;
        Ok(PgSession { tx })
    }
}

#[async_trait]
impl Session for PgSession {
    async fn commit(self) -> Result<(), Error> {
        self.tx.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl PropertyRepository for PgSession {
    async fn find_property_by_id(&mut self, id: PropertyId) -> Result<Option<Property>, Error> {
        let property = sqlx::query_as("SELECT * FROM rsvp.properties WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut self.tx)
            .await?;
        Ok(property)
    }

    async fn insert_property(&mut self, p: Property) -> Result<Property, Error> {
        let property = sqlx::query_as(
            "INSERT INTO rsvp.properties (name, rooms, capacity, nightly_price, street, number, neighborhood, city, state, country) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *",
        )
        .bind(p.name)
        .bind(p.rooms)
        .bind(p.capacity)
        .bind(p.nightly_price)
        .bind(p.address.street)
        .bind(p.address.number)
        .bind(p.address.neighborhood)
        .bind(p.address.city)
        .bind(p.address.state)
        .bind(p.address.country)
        .fetch_one(&mut self.tx)
        .await?;
        Ok(property)
    }

    async fn query_properties(&mut self, filter: &PropertyFilter) -> Result<Vec<Property>, Error> {
        let properties = sqlx::query_as(
            "SELECT * FROM rsvp.properties \
             WHERE ($1::text IS NULL OR strpos(lower(city), lower($1)) > 0) \
             AND ($2::text IS NULL OR strpos(lower(state), lower($2)) > 0) \
             AND ($3::text IS NULL OR strpos(lower(neighborhood), lower($3)) > 0) \
             AND ($4::int4 IS NULL OR capacity <= $4) \
             AND ($5::numeric IS NULL OR nightly_price <= $5) \
             ORDER BY id LIMIT $6 OFFSET $7",
        )
        .bind(filter.city.as_deref())
        .bind(filter.state.as_deref())
        .bind(filter.neighborhood.as_deref())
        .bind(filter.max_capacity)
        .bind(filter.max_price)
        .bind(filter.limit())
        .bind(filter.offset())
        .fetch_all(&mut self.tx)
        .await?;
        Ok(properties)
    }
}

#[async_trait]
impl ClientRepository for PgSession {
    async fn find_client_by_id(&mut self, id: ClientId) -> Result<Option<Client>, Error> {
        let client = sqlx::query_as("SELECT id, name, email FROM rsvp.clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut self.tx)
            .await?;
        Ok(client)
    }

    async fn find_client_by_email(&mut self, email: &str) -> Result<Option<Client>, Error> {
        let client =
            sqlx::query_as("SELECT id, name, email FROM rsvp.clients WHERE email = lower($1)")
                .bind(email)
                .fetch_optional(&mut self.tx)
                .await?;
        Ok(client)
    }

    async fn insert_client(&mut self, client: Client) -> Result<Client, Error> {
        let client = sqlx::query_as(
            "INSERT INTO rsvp.clients (name, email) VALUES ($1, lower($2)) RETURNING id, name, email",
        )
        .bind(client.name)
        .bind(client.email)
        .fetch_one(&mut self.tx)
        .await?;
        Ok(client)
    }
}

#[async_trait]
impl ReservationRepository for PgSession {
    async fn find_active_reservations_by_property(
        &mut self,
        property_id: PropertyId,
    ) -> Result<Vec<Reservation>, Error> {
        let rsvps = sqlx::query_as(
            "SELECT * FROM rsvp.reservations WHERE property_id = $1 AND active ORDER BY start_date",
        )
        .bind(property_id)
        .fetch_all(&mut self.tx)
        .await?;
        Ok(rsvps)
    }

    async fn find_reservation_by_id(
        &mut self,
        id: ReservationId,
    ) -> Result<Option<Reservation>, Error> {
        // row lock: a concurrent cancel waits here and then sees active = false
        let rsvp = sqlx::query_as("SELECT * FROM rsvp.reservations WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut self.tx)
            .await?;
        Ok(rsvp)
    }

    async fn save_reservation(&mut self, rsvp: Reservation) -> Result<Reservation, Error> {
        // an overlap slipping past the read-side check fails here with 23P01,
        // which converts to Error::DateConflict
        let rsvp = sqlx::query_as(
            "INSERT INTO rsvp.reservations (property_id, client_id, start_date, end_date, occupants, total_price, active) VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(rsvp.property_id)
        .bind(rsvp.client_id)
        .bind(rsvp.start)
        .bind(rsvp.end)
        .bind(rsvp.occupants)
        .bind(rsvp.total_price)
        .bind(rsvp.active)
        .fetch_one(&mut self.tx)
        .await?;
        Ok(rsvp)
    }

    async fn update_reservation(&mut self, rsvp: Reservation) -> Result<Reservation, Error> {
        let id = rsvp.id;
        let updated = sqlx::query_as(
            "UPDATE rsvp.reservations SET active = $2, updated_at = now() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(rsvp.active)
        .fetch_optional(&mut self.tx)
        .await?;
        updated.ok_or(Error::NotFound(Entity::Reservation, id))
    }

    async fn query_reservations(
        &mut self,
        filter: &ReservationFilter,
    ) -> Result<Vec<Reservation>, Error> {
        let rsvps = sqlx::query_as(
            "SELECT r.* FROM rsvp.reservations r JOIN rsvp.clients c ON c.id = r.client_id \
             WHERE ($1::int8 IS NULL OR r.property_id = $1) \
             AND ($2::int8 IS NULL OR r.client_id = $2) \
             AND ($3::text IS NULL OR c.email = lower($3)) \
             AND ($4::bool OR r.active) \
             ORDER BY r.id LIMIT $5 OFFSET $6",
        )
        .bind(filter.property_id)
        .bind(filter.client_id)
        .bind(filter.client_email.as_deref())
        .bind(filter.include_cancelled)
        .bind(filter.limit())
        .bind(filter.offset())
        .fetch_all(&mut self.tx)
        .await?;
        Ok(rsvps)
    }
}

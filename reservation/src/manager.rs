use abi::{
    Availability, Client, ClientId, DbConfig, Entity, Error, Property, PropertyFilter,
    PropertyId, Reservation, ReservationFilter, ReservationId, ReservationRequest,
};
use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::{
    availability::{self, validate_occupants, validate_range},
    pricing,
    store::{ClientRepository, PropertyRepository, ReservationRepository, Session, Store},
    Catalog, PgStore, ReservationManager, Rsvp,
};

#[async_trait]
impl<S: Store> Rsvp for ReservationManager<S> {
    async fn reserve(&self, req: ReservationRequest) -> Result<Reservation, Error> {
        let result = self.book(&req).await;
        match &result {
            Ok(rsvp) => info!(
                id = rsvp.id,
                property = rsvp.property_id,
                client = rsvp.client_id,
                start = %rsvp.start,
                end = %rsvp.end,
                total = %rsvp.total_price,
                "reservation created"
            ),
            Err(e) => log_failure("reserve", e),
        }
        result
    }

    async fn cancel(&self, id: ReservationId) -> Result<Reservation, Error> {
        let result = self.deactivate(id).await;
        match &result {
            Ok(rsvp) => info!(id, property = rsvp.property_id, "reservation cancelled"),
            Err(e) => log_failure("cancel", e),
        }
        result
    }

    async fn get(&self, id: ReservationId) -> Result<Reservation, Error> {
        let mut session = self.store.begin().await?;
        session
            .find_reservation_by_id(id)
            .await?
            .ok_or(Error::NotFound(Entity::Reservation, id))
    }

    async fn query(&self, mut filter: ReservationFilter) -> Result<Vec<Reservation>, Error> {
        filter.validate()?;
        filter.client_email = filter.client_email.map(|e| e.trim().to_lowercase());
        let mut session = self.store.begin().await?;
        session.query_reservations(&filter).await
    }

    async fn check_availability(&self, req: ReservationRequest) -> Result<Availability, Error> {
        let mut session = self.store.begin().await?;
        let property = load_property(&mut session, req.property_id).await?;
        let existing = session
            .find_active_reservations_by_property(property.id)
            .await?;
        Ok(availability::assess(&property, &req, &existing))
    }
}

#[async_trait]
impl<S: Store> Catalog for ReservationManager<S> {
    async fn create_property(&self, property: Property) -> Result<Property, Error> {
        property.validate()?;
        let mut session = self.store.begin().await?;
        let property = session.insert_property(property).await?;
        session.commit().await?;
        info!(id = property.id, name = %property.name, "property created");
        Ok(property)
    }

    async fn get_property(&self, id: PropertyId) -> Result<Property, Error> {
        let mut session = self.store.begin().await?;
        load_property(&mut session, id).await
    }

    async fn list_properties(&self, filter: PropertyFilter) -> Result<Vec<Property>, Error> {
        filter.validate()?;
        let mut session = self.store.begin().await?;
        session.query_properties(&filter).await
    }

    async fn register_client(&self, name: String, email: String) -> Result<Client, Error> {
        let client = Client::new(name, email);
        client.validate()?;
        let mut session = self.store.begin().await?;
        if let Some(existing) = session.find_client_by_email(&client.email).await? {
            return Ok(existing);
        }
        let client = session.insert_client(client).await?;
        session.commit().await?;
        info!(id = client.id, email = %client.email, "client registered");
        Ok(client)
    }

    async fn get_client(&self, id: ClientId) -> Result<Client, Error> {
        let mut session = self.store.begin().await?;
        session
            .find_client_by_id(id)
            .await?
            .ok_or(Error::NotFound(Entity::Client, id))
    }
}

impl<S: Store> ReservationManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // nothing is written until every check has passed
    async fn book(&self, req: &ReservationRequest) -> Result<Reservation, Error> {
        let mut session = self.store.begin().await?;
        session
            .find_client_by_id(req.client_id)
            .await?
            .ok_or(Error::NotFound(Entity::Client, req.client_id))?;
        let property = load_property(&mut session, req.property_id).await?;
        validate_range(req.start, req.end)?;
        validate_occupants(&property, req.occupants)?;

        let existing = session
            .find_active_reservations_by_property(property.id)
            .await?;
        availability::ensure_available(req, &existing)?;

        let total = pricing::total_price(property.nightly_price, req.start, req.end)?;
        let rsvp = session
            .save_reservation(Reservation::new_active(req, total))
            .await?;
        session.commit().await?;
        Ok(rsvp)
    }

    async fn deactivate(&self, id: ReservationId) -> Result<Reservation, Error> {
        let mut session = self.store.begin().await?;
        let mut rsvp = session
            .find_reservation_by_id(id)
            .await?
            .ok_or(Error::NotFound(Entity::Reservation, id))?;
        if !rsvp.active {
            return Err(Error::AlreadyCancelled(id));
        }
        rsvp.active = false;
        let rsvp = session.update_reservation(rsvp).await?;
        session.commit().await?;
        Ok(rsvp)
    }
}

impl ReservationManager<PgStore> {
    pub async fn from_config(config: &DbConfig) -> Result<Self, Error> {
        Ok(Self::new(PgStore::connect(config).await?))
    }
}

async fn load_property<R: PropertyRepository>(
    repo: &mut R,
    id: PropertyId,
) -> Result<Property, Error> {
    repo.find_property_by_id(id)
        .await?
        .ok_or(Error::NotFound(Entity::Property, id))
}

fn log_failure(op: &'static str, e: &Error) {
    match e {
        Error::StorageUnavailable(_) => error!(op, error = %e, "storage failure"),
        _ => warn!(op, error = %e, "request rejected"),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::InMemoryStore;
    use abi::{
        Address, PropertyFilterBuilder, ReservationConflictInfo, ReservationFilterBuilder,
        Unavailable,
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn address(city: &str) -> Address {
        Address::new("Rua das Flores", "42", "Centro", city, "SC", "Brasil")
    }

    async fn setup(
        capacity: i32,
        price: Decimal,
    ) -> (ReservationManager<InMemoryStore>, Property, Client) {
        let manager = ReservationManager::new(InMemoryStore::new());
        let property = manager
            .create_property(Property::new(
                "Ocean view room",
                2,
                capacity,
                price,
                address("Florianópolis"),
            ))
            .await
            .unwrap();
        let client = manager
            .register_client("Alice".into(), "alice@example.com".into())
            .await
            .unwrap();
        (manager, property, client)
    }

    fn request(
        client: &Client,
        property: &Property,
        start: &str,
        end: &str,
        occupants: i32,
    ) -> ReservationRequest {
        ReservationRequest::new(client.id, property.id, date(start), date(end), occupants)
    }

    #[tokio::test]
    async fn reserve_should_work_for_valid_window() {
        let (manager, property, client) = setup(4, dec!(100.00)).await;
        let rsvp = manager
            .reserve(request(&client, &property, "2024-06-01", "2024-06-04", 2))
            .await
            .unwrap();
        assert!(rsvp.id > 0);
        assert!(rsvp.active);
        assert_eq!(rsvp.total_price, dec!(300.00));
        assert_eq!(manager.get(rsvp.id).await.unwrap(), rsvp);
    }

    #[tokio::test]
    async fn equal_dates_should_be_invalid_range() {
        let (manager, property, client) = setup(4, dec!(100)).await;
        let err = manager
            .reserve(request(&client, &property, "2024-01-10", "2024-01-10", 1))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidDateRange {
                start: date("2024-01-10"),
                end: date("2024-01-10"),
            }
        );
    }

    #[tokio::test]
    async fn capacity_should_be_enforced_inclusively() {
        let (manager, property, client) = setup(4, dec!(100)).await;
        let err = manager
            .reserve(request(&client, &property, "2024-02-01", "2024-02-03", 5))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            Error::CapacityExceeded {
                requested: 5,
                capacity: 4
            }
        );
        let err = manager
            .reserve(request(&client, &property, "2024-02-01", "2024-02-03", 0))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::CapacityExceeded { requested: 0, .. }));

        assert!(manager
            .reserve(request(&client, &property, "2024-02-01", "2024-02-03", 4))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn reserve_conflict_reservation_should_reject() {
        let (manager, property, client) = setup(4, dec!(100)).await;
        manager
            .reserve(request(&client, &property, "2024-03-01", "2024-03-05", 2))
            .await
            .unwrap();

        let err = manager
            .reserve(request(&client, &property, "2024-03-04", "2024-03-08", 2))
            .await
            .unwrap_err();
        match err {
            Error::DateConflict(ReservationConflictInfo::Parsed(info)) => {
                assert_eq!(info.old.start, date("2024-03-01"));
                assert_eq!(info.old.end, date("2024-03-05"));
                assert_eq!(info.new.start, date("2024-03-04"));
            }
            e => panic!("expected a date conflict, got {:?}", e),
        }

        // back-to-back stays share no night
        assert!(manager
            .reserve(request(&client, &property, "2024-03-05", "2024-03-08", 2))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn missing_client_or_property_should_be_not_found() {
        let (manager, property, client) = setup(4, dec!(100)).await;
        let mut req = request(&client, &property, "2024-03-01", "2024-03-05", 2);
        req.client_id = 99;
        assert_eq!(
            manager.reserve(req).await.unwrap_err(),
            Error::NotFound(Entity::Client, 99)
        );

        let mut req = request(&client, &property, "2024-03-01", "2024-03-05", 2);
        req.property_id = 42;
        assert_eq!(
            manager.reserve(req).await.unwrap_err(),
            Error::NotFound(Entity::Property, 42)
        );
    }

    #[tokio::test]
    async fn client_is_checked_before_dates() {
        let (manager, property, _client) = setup(4, dec!(100)).await;
        let req =
            ReservationRequest::new(7, property.id, date("2024-01-10"), date("2024-01-01"), 1);
        assert_eq!(
            manager.reserve(req).await.unwrap_err(),
            Error::NotFound(Entity::Client, 7)
        );
    }

    #[tokio::test]
    async fn failed_booking_should_write_nothing() {
        let (manager, property, client) = setup(2, dec!(100)).await;
        let _ = manager
            .reserve(request(&client, &property, "2024-03-01", "2024-03-05", 3))
            .await
            .unwrap_err();
        let all = manager
            .query(
                ReservationFilterBuilder::default()
                    .include_cancelled(true)
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn total_beyond_storage_range_should_be_rejected() {
        let (manager, property, client) = setup(4, abi::max_amount()).await;
        let err = manager
            .reserve(request(&client, &property, "2024-06-01", "2024-06-03", 1))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(manager.query(ReservationFilter::default()).await.unwrap().is_empty());

        // one night at the top price still fits
        assert!(manager
            .reserve(request(&client, &property, "2024-06-01", "2024-06-02", 1))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn cancel_should_keep_price_and_reject_second_cancel() {
        let (manager, property, client) = setup(4, dec!(100.00)).await;
        let rsvp = manager
            .reserve(request(&client, &property, "2024-06-01", "2024-06-04", 2))
            .await
            .unwrap();

        let cancelled = manager.cancel(rsvp.id).await.unwrap();
        assert!(!cancelled.active);
        assert_eq!(cancelled.total_price, dec!(300.00));

        let err = manager.cancel(rsvp.id).await.unwrap_err();
        assert_eq!(err, Error::AlreadyCancelled(rsvp.id));
        // the failed second cancel changed nothing
        assert_eq!(manager.get(rsvp.id).await.unwrap(), cancelled);
    }

    #[tokio::test]
    async fn cancel_unknown_reservation_should_be_not_found() {
        let (manager, _, _) = setup(4, dec!(100)).await;
        assert_eq!(
            manager.cancel(12).await.unwrap_err(),
            Error::NotFound(Entity::Reservation, 12)
        );
    }

    #[tokio::test]
    async fn cancelled_reservation_should_free_its_dates() {
        let (manager, property, client) = setup(4, dec!(100)).await;
        let req = request(&client, &property, "2024-03-01", "2024-03-05", 2);
        let rsvp = manager.reserve(req.clone()).await.unwrap();
        manager.cancel(rsvp.id).await.unwrap();
        let again = manager.reserve(req).await.unwrap();
        assert_ne!(again.id, rsvp.id);
    }

    #[tokio::test]
    async fn concurrent_overlapping_bookings_should_admit_one() {
        let (manager, property, client) = setup(4, dec!(100)).await;
        let manager = Arc::new(manager);
        let handles: Vec<_> = (0..10)
            .map(|i| {
                let manager = manager.clone();
                let req = ReservationRequest::new(
                    client.id,
                    property.id,
                    date("2024-07-01") + chrono::Duration::days(i % 3),
                    date("2024-07-05"),
                    2,
                );
                tokio::spawn(async move { manager.reserve(req).await })
            })
            .collect();

        let mut booked = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => booked += 1,
                Err(e) => assert!(matches!(e, Error::DateConflict(_))),
            }
        }
        assert_eq!(booked, 1);

        let active = manager
            .query(ReservationFilterBuilder::default().property_id(property.id).build().unwrap())
            .await
            .unwrap();
        assert_eq!(active.len(), 1);
    }

    #[tokio::test]
    async fn storage_failure_should_propagate_unchanged() {
        let (manager, property, client) = setup(4, dec!(100)).await;
        manager.store().set_offline(true);
        let err = manager
            .reserve(request(&client, &property, "2024-03-01", "2024-03-05", 2))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::StorageUnavailable(_)));
        assert!(matches!(manager.cancel(1).await, Err(Error::StorageUnavailable(_))));

        manager.store().set_offline(false);
        assert!(manager
            .reserve(request(&client, &property, "2024-03-01", "2024-03-05", 2))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn check_availability_should_not_book() {
        let (manager, property, client) = setup(4, dec!(100)).await;
        manager
            .reserve(request(&client, &property, "2024-03-01", "2024-03-05", 2))
            .await
            .unwrap();

        let a = manager
            .check_availability(request(&client, &property, "2024-03-03", "2024-03-06", 2))
            .await
            .unwrap();
        assert_eq!(a.reason, Some(Unavailable::DateConflict));
        assert_eq!(a.conflicts.len(), 1);

        let a = manager
            .check_availability(request(&client, &property, "2024-03-05", "2024-03-06", 2))
            .await
            .unwrap();
        assert!(a.is_available());

        let all = manager.query(ReservationFilter::default()).await.unwrap();
        assert_eq!(all.len(), 1);

        let mut req = request(&client, &property, "2024-03-05", "2024-03-06", 2);
        req.property_id = 77;
        assert_eq!(
            manager.check_availability(req).await.unwrap_err(),
            Error::NotFound(Entity::Property, 77)
        );
    }

    #[tokio::test]
    async fn query_should_filter_by_email_and_status() {
        let (manager, property, alice) = setup(4, dec!(100)).await;
        let bob = manager
            .register_client("Bob".into(), "bob@example.com".into())
            .await
            .unwrap();
        let a1 = manager
            .reserve(request(&alice, &property, "2024-03-01", "2024-03-05", 2))
            .await
            .unwrap();
        manager
            .reserve(request(&bob, &property, "2024-03-10", "2024-03-12", 2))
            .await
            .unwrap();
        manager.cancel(a1.id).await.unwrap();

        let filter = ReservationFilterBuilder::default()
            .client_email("ALICE@example.com")
            .build()
            .unwrap();
        assert!(manager.query(filter).await.unwrap().is_empty());

        let filter = ReservationFilterBuilder::default()
            .client_email("alice@example.com")
            .include_cancelled(true)
            .build()
            .unwrap();
        let rsvps = manager.query(filter).await.unwrap();
        assert_eq!(rsvps.len(), 1);
        assert_eq!(rsvps[0].id, a1.id);

        let filter = ReservationFilterBuilder::default()
            .page_size(1)
            .page(2)
            .include_cancelled(true)
            .build()
            .unwrap();
        let rsvps = manager.query(filter).await.unwrap();
        assert_eq!(rsvps.len(), 1);
        assert_ne!(rsvps[0].id, a1.id);
    }

    #[tokio::test]
    async fn query_should_reject_bad_paging_and_email() {
        let (manager, _, _) = setup(4, dec!(100)).await;
        let filter = ReservationFilterBuilder::default()
            .page(i64::MAX)
            .page_size(100)
            .build()
            .unwrap();
        assert!(matches!(
            manager.query(filter).await,
            Err(Error::InvalidArgument(_))
        ));

        let filter = ReservationFilterBuilder::default()
            .client_email("alice@")
            .build()
            .unwrap();
        assert!(matches!(
            manager.query(filter).await,
            Err(Error::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn register_client_should_reuse_existing_email() {
        let (manager, _, alice) = setup(4, dec!(100)).await;
        let again = manager
            .register_client("Alice Liddell".into(), "Alice@Example.com".into())
            .await
            .unwrap();
        assert_eq!(again, alice);
        assert_eq!(manager.get_client(alice.id).await.unwrap(), alice);

        let err = manager
            .register_client("Nobody".into(), "nobody".into())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn properties_should_be_validated_and_listed() {
        let (manager, first, _) = setup(4, dec!(100)).await;
        let second = manager
            .create_property(Property::new("Loft", 1, 2, dec!(250), address("São Paulo")))
            .await
            .unwrap();
        let err = manager
            .create_property(Property::new("", 1, 2, dec!(250), address("Rio")))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        assert_eq!(manager.get_property(second.id).await.unwrap(), second);
        assert_eq!(
            manager.get_property(99).await.unwrap_err(),
            Error::NotFound(Entity::Property, 99)
        );

        let filter = PropertyFilterBuilder::default()
            .city("FLORIAN")
            .build()
            .unwrap();
        assert_eq!(manager.list_properties(filter).await.unwrap(), vec![first.clone()]);

        let filter = PropertyFilterBuilder::default()
            .max_price(dec!(200))
            .build()
            .unwrap();
        assert_eq!(manager.list_properties(filter).await.unwrap(), vec![first]);

        let filter = PropertyFilterBuilder::default().page_size(500).build().unwrap();
        assert!(manager.list_properties(filter).await.is_err());
    }
}

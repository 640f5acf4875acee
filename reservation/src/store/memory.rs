use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use abi::{
    Client, ClientId, Entity, Error, Property, PropertyFilter, PropertyId, Reservation,
    ReservationConflict, ReservationConflictInfo, ReservationFilter, ReservationId,
};
use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};

use super::{ClientRepository, PropertyRepository, ReservationRepository, Session, Store};

#[derive(Debug, Clone, Default)]
struct State {
    properties: BTreeMap<PropertyId, Property>,
    clients: BTreeMap<ClientId, Client>,
    reservations: BTreeMap<ReservationId, Reservation>,
    last_property_id: PropertyId,
    last_client_id: ClientId,
    last_reservation_id: ReservationId,
}

/// Store kept in process memory, for tests and local runs.
///
/// Sessions are serialized: `begin` waits for the previous session to end.
/// Each session works on a private copy of the state that replaces the
/// shared one on commit, so an uncommitted session leaves no trace. The
/// overlap and e-mail uniqueness rules of the Postgres schema are enforced on
/// write.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
    offline: Arc<AtomicBool>,
}

pub struct InMemorySession {
    shared: OwnedMutexGuard<State>,
    staged: State,
    offline: Arc<AtomicBool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// While offline every session operation fails with `StorageUnavailable`.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }
}

fn check_online(offline: &AtomicBool) -> Result<(), Error> {
    if offline.load(Ordering::SeqCst) {
        Err(Error::StorageUnavailable("in-memory store is offline".into()))
    } else {
        Ok(())
    }
}

#[async_trait]
impl Store for InMemoryStore {
    type Session = InMemorySession;

    async fn begin(&self) -> Result<InMemorySession, Error> {
        check_online(&self.offline)?;
        let shared = self.state.clone().lock_owned().await;
        let staged = shared.clone();
        Ok(InMemorySession {
            shared,
            staged,
            offline: self.offline.clone(),
        })
    }
}

impl InMemorySession {
    fn online(&self) -> Result<(), Error> {
        check_online(&self.offline)
    }

    fn overlapping(&self, rsvp: &Reservation) -> Option<&Reservation> {
        self.staged.reservations.values().find(|r| {
            r.id != rsvp.id
                && r.active
                && r.property_id == rsvp.property_id
                && r.overlaps(rsvp.start, rsvp.end)
        })
    }

    fn reject_overlap(&self, rsvp: &Reservation) -> Result<(), Error> {
        if !rsvp.active {
            return Ok(());
        }
        match self.overlapping(rsvp) {
            Some(old) => Err(Error::DateConflict(ReservationConflictInfo::Parsed(
                ReservationConflict {
                    new: rsvp.window(),
                    old: old.window(),
                },
            ))),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Session for InMemorySession {
    async fn commit(self) -> Result<(), Error> {
        check_online(&self.offline)?;
        let InMemorySession {
            mut shared, staged, ..
        } = self;
        *shared = staged;
        Ok(())
    }
}

fn page<T>(items: impl Iterator<Item = T>, offset: i64, limit: i64) -> Vec<T> {
    items
        .skip(offset.max(0) as usize)
        .take(limit.max(0) as usize)
        .collect()
}

#[async_trait]
impl PropertyRepository for InMemorySession {
    async fn find_property_by_id(&mut self, id: PropertyId) -> Result<Option<Property>, Error> {
        self.online()?;
        Ok(self.staged.properties.get(&id).cloned())
    }

    async fn insert_property(&mut self, mut property: Property) -> Result<Property, Error> {
        self.online()?;
        self.staged.last_property_id += 1;
        property.id = self.staged.last_property_id;
        self.staged.properties.insert(property.id, property.clone());
        Ok(property)
    }

    async fn query_properties(&mut self, filter: &PropertyFilter) -> Result<Vec<Property>, Error> {
        self.online()?;
        let matching = self
            .staged
            .properties
            .values()
            .filter(|p| filter.matches(p))
            .cloned();
        Ok(page(matching, filter.offset(), filter.limit()))
    }
}

#[async_trait]
impl ClientRepository for InMemorySession {
    async fn find_client_by_id(&mut self, id: ClientId) -> Result<Option<Client>, Error> {
        self.online()?;
        Ok(self.staged.clients.get(&id).cloned())
    }

    async fn find_client_by_email(&mut self, email: &str) -> Result<Option<Client>, Error> {
        self.online()?;
        let email = email.to_lowercase();
        Ok(self
            .staged
            .clients
            .values()
            .find(|c| c.email == email)
            .cloned())
    }

    async fn insert_client(&mut self, mut client: Client) -> Result<Client, Error> {
        self.online()?;
        client.email = client.email.to_lowercase();
        if self.staged.clients.values().any(|c| c.email == client.email) {
            return Err(Error::EmailTaken(client.email));
        }
        self.staged.last_client_id += 1;
        client.id = self.staged.last_client_id;
        self.staged.clients.insert(client.id, client.clone());
        Ok(client)
    }
}

#[async_trait]
impl ReservationRepository for InMemorySession {
    async fn find_active_reservations_by_property(
        &mut self,
        property_id: PropertyId,
    ) -> Result<Vec<Reservation>, Error> {
        self.online()?;
        let mut rsvps: Vec<Reservation> = self
            .staged
            .reservations
            .values()
            .filter(|r| r.active && r.property_id == property_id)
            .cloned()
            .collect();
        rsvps.sort_by_key(|r| r.start);
        Ok(rsvps)
    }

    async fn find_reservation_by_id(
        &mut self,
        id: ReservationId,
    ) -> Result<Option<Reservation>, Error> {
        self.online()?;
        Ok(self.staged.reservations.get(&id).cloned())
    }

    async fn save_reservation(&mut self, mut rsvp: Reservation) -> Result<Reservation, Error> {
        self.online()?;
        if rsvp.start >= rsvp.end {
            return Err(Error::InvalidDateRange {
                start: rsvp.start,
                end: rsvp.end,
            });
        }
        // id 0 never collides with a stored reservation
        rsvp.id = 0;
        self.reject_overlap(&rsvp)?;
        self.staged.last_reservation_id += 1;
        rsvp.id = self.staged.last_reservation_id;
        self.staged.reservations.insert(rsvp.id, rsvp.clone());
        Ok(rsvp)
    }

    async fn update_reservation(&mut self, rsvp: Reservation) -> Result<Reservation, Error> {
        self.online()?;
        let mut stored = self
            .staged
            .reservations
            .get(&rsvp.id)
            .cloned()
            .ok_or(Error::NotFound(Entity::Reservation, rsvp.id))?;
        stored.active = rsvp.active;
        self.reject_overlap(&stored)?;
        self.staged.reservations.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn query_reservations(
        &mut self,
        filter: &ReservationFilter,
    ) -> Result<Vec<Reservation>, Error> {
        self.online()?;
        let email_owner = match &filter.client_email {
            Some(email) => {
                let email = email.to_lowercase();
                match self.staged.clients.values().find(|c| c.email == email) {
                    Some(c) => Some(c.id),
                    None => return Ok(Vec::new()),
                }
            }
            None => None,
        };
        let matching = self
            .staged
            .reservations
            .values()
            .filter(|r| filter.matches(r) && email_owner.map_or(true, |id| r.client_id == id))
            .cloned();
        Ok(page(matching, filter.offset(), filter.limit()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abi::{Address, ReservationRequest};
    use rust_decimal_macros::dec;

    fn date(s: &str) -> chrono::NaiveDate {
        s.parse().unwrap()
    }

    fn stay(property_id: PropertyId, start: &str, end: &str) -> Reservation {
        let req = ReservationRequest::new(1, property_id, date(start), date(end), 1);
        Reservation::new_active(&req, dec!(10))
    }

    fn cottage() -> Property {
        Property::new(
            "Cottage",
            1,
            2,
            dec!(80),
            Address::new("Rua C", "3", "Centro", "Curitiba", "PR", "Brasil"),
        )
    }

    #[tokio::test]
    async fn save_should_reject_overlapping_active_stay() {
        let store = InMemoryStore::new();
        let mut session = store.begin().await.unwrap();
        let first = session
            .save_reservation(stay(1, "2024-03-01", "2024-03-05"))
            .await
            .unwrap();
        assert_eq!(first.id, 1);

        let err = session
            .save_reservation(stay(1, "2024-03-04", "2024-03-08"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::DateConflict(_)));

        // other properties and back-to-back stays are fine
        assert!(session
            .save_reservation(stay(2, "2024-03-04", "2024-03-08"))
            .await
            .is_ok());
        assert!(session
            .save_reservation(stay(1, "2024-03-05", "2024-03-08"))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn uncommitted_session_should_leave_no_trace() {
        let store = InMemoryStore::new();
        {
            let mut session = store.begin().await.unwrap();
            session.insert_property(cottage()).await.unwrap();
        }
        let mut session = store.begin().await.unwrap();
        assert_eq!(session.find_property_by_id(1).await.unwrap(), None);
        let p = session.insert_property(cottage()).await.unwrap();
        session.commit().await.unwrap();

        let mut session = store.begin().await.unwrap();
        assert_eq!(session.find_property_by_id(p.id).await.unwrap(), Some(p));
    }

    #[tokio::test]
    async fn duplicate_email_should_be_rejected() {
        let store = InMemoryStore::new();
        let mut session = store.begin().await.unwrap();
        session
            .insert_client(Client::new("Ana", "ana@example.com"))
            .await
            .unwrap();
        let err = session
            .insert_client(Client::new("Ana B", "ANA@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err, Error::EmailTaken("ana@example.com".into()));
    }

    #[tokio::test]
    async fn offline_store_should_fail_every_call() {
        let store = InMemoryStore::new();
        let mut session = store.begin().await.unwrap();
        store.set_offline(true);
        assert!(matches!(
            session.find_client_by_id(1).await,
            Err(Error::StorageUnavailable(_))
        ));
        drop(session);
        assert!(matches!(
            store.begin().await,
            Err(Error::StorageUnavailable(_))
        ));
    }
}

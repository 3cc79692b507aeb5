//! The event catalog.

use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{PalcoError, PalcoResult};
use crate::event::{Event, EventDraft, EventPatch, EventStatus, PostalAddress};
use crate::storage::{self, EVENTS_KEY, Storage};

/// Owns the event collection.
///
/// Construct one per application at startup; the catalog persists the full
/// collection on every mutation.
pub struct EventCatalog {
    storage: Arc<dyn Storage>,
    events: Vec<Event>,
}

impl EventCatalog {
    /// Load the persisted catalog.
    ///
    /// When the payload is absent (or malformed, which is treated the
    /// same), the catalog is seeded with the built-in example events and
    /// persisted immediately, so seeding happens at most once per empty
    /// storage. A persistence failure during seeding is logged and the
    /// seeded catalog is kept in memory.
    pub fn open(storage: Arc<dyn Storage>) -> Self {
        let events = match storage::load(storage.as_ref(), EVENTS_KEY) {
            Some(events) => events,
            None => {
                let events = seed_events();
                if let Err(err) = storage::save(storage.as_ref(), EVENTS_KEY, &events) {
                    warn!(%err, "failed to persist seed events");
                }
                events
            }
        };
        debug!(events = events.len(), "event catalog opened");

        EventCatalog { storage, events }
    }

    /// All listings, in store order.
    pub fn all(&self) -> &[Event] {
        &self.events
    }

    /// Look up one listing. No side effects.
    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Add a new listing under a freshly assigned id.
    pub fn create(&mut self, draft: EventDraft) -> PalcoResult<Event> {
        let event = draft.into_event(Uuid::new_v4().to_string());
        self.events.push(event.clone());
        self.persist()?;
        Ok(event)
    }

    /// Merge `patch` into the listing with this id; omitted fields keep
    /// their current values.
    pub fn update(&mut self, id: &str, patch: EventPatch) -> PalcoResult<Event> {
        let Some(event) = self.events.iter_mut().find(|e| e.id == id) else {
            return Err(PalcoError::EventNotFound(id.to_string()));
        };

        event.apply(patch);
        let updated = event.clone();
        self.persist()?;
        Ok(updated)
    }

    /// Remove the listing with this id.
    ///
    /// Removing an id that is not in the catalog still reports success and
    /// rewrites the collection unchanged; callers see delete as idempotent.
    /// Kept from the original application's observed behavior.
    pub fn delete(&mut self, id: &str) -> PalcoResult<()> {
        self.events.retain(|e| e.id != id);
        self.persist()
    }

    /// The listings owned by one organizer, as a fresh snapshot.
    pub fn by_organizer(&self, organizer_id: &str) -> Vec<Event> {
        self.events
            .iter()
            .filter(|e| e.organizer_id == organizer_id)
            .cloned()
            .collect()
    }

    fn persist(&self) -> PalcoResult<()> {
        storage::save(self.storage.as_ref(), EVENTS_KEY, &self.events)
    }
}

fn seed_time(value: &str) -> NaiveDateTime {
    value.parse().expect("seed timestamp is well-formed")
}

/// The example listings a fresh catalog starts with.
fn seed_events() -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            title: "Linkin Park: FROM ZERO WORLD TOUR".to_string(),
            category: "Show".to_string(),
            description: "A banda Linkin Park apresenta sua nova turnê mundial, com shows \
                          incríveis trazendo seus maiores sucessos e músicas do novo álbum."
                .to_string(),
            venue: Some("Allianz Parque".to_string()),
            capacity: 50_000,
            ticket_price: 350.0,
            points: 100,
            address: PostalAddress {
                postal_code: "01000-000".to_string(),
                street: "Avenida Principal".to_string(),
                number: "123".to_string(),
                neighborhood: "Centro".to_string(),
                city: "São Paulo".to_string(),
                state: "SP".to_string(),
                complement: None,
            },
            starts_at: seed_time("2023-11-15T20:00:00"),
            ends_at: seed_time("2023-11-15T23:30:00"),
            sales_open_at: seed_time("2023-09-01T09:00:00"),
            sales_close_at: seed_time("2023-11-15T18:00:00"),
            status: EventStatus::Active,
            organizer_id: "org1".to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1468234847176-28606331216a?q=80&w=1000"
                    .to_string(),
            ),
        },
        Event {
            id: "2".to_string(),
            title: "Coldplay: MUSIC OF THE SPHERES".to_string(),
            category: "Show".to_string(),
            description: "Coldplay retorna ao Brasil com a turnê Music of the Spheres, um \
                          espetáculo visual e sonoro incrível."
                .to_string(),
            venue: Some("Estádio Nilton Santos".to_string()),
            capacity: 60_000,
            ticket_price: 450.0,
            points: 120,
            address: PostalAddress {
                postal_code: "22000-000".to_string(),
                street: "Avenida Litorânea".to_string(),
                number: "456".to_string(),
                neighborhood: "Barra da Tijuca".to_string(),
                city: "Rio de Janeiro".to_string(),
                state: "RJ".to_string(),
                complement: None,
            },
            starts_at: seed_time("2023-12-20T21:00:00"),
            ends_at: seed_time("2023-12-21T00:30:00"),
            sales_open_at: seed_time("2023-10-15T10:00:00"),
            sales_close_at: seed_time("2023-12-20T19:00:00"),
            status: EventStatus::Active,
            organizer_id: "org2".to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1470229722913-7c0e2dbbafd3?q=80&w=1000"
                    .to_string(),
            ),
        },
        Event {
            id: "3".to_string(),
            title: "Hamlet - Teatro Nacional".to_string(),
            category: "Teatro".to_string(),
            description: "Uma nova montagem do clássico de Shakespeare, com direção de \
                          renomados diretores e elenco de primeira linha."
                .to_string(),
            venue: Some("Teatro Nacional".to_string()),
            capacity: 1_200,
            ticket_price: 180.0,
            points: 80,
            address: PostalAddress {
                postal_code: "70000-000".to_string(),
                street: "Setor Cultural".to_string(),
                number: "789".to_string(),
                neighborhood: "Asa Sul".to_string(),
                city: "Brasília".to_string(),
                state: "DF".to_string(),
                complement: None,
            },
            starts_at: seed_time("2023-10-05T19:30:00"),
            ends_at: seed_time("2023-10-05T22:00:00"),
            sales_open_at: seed_time("2023-08-20T09:00:00"),
            sales_close_at: seed_time("2023-10-05T18:00:00"),
            status: EventStatus::Active,
            organizer_id: "org3".to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1503095396549-807759245b35?q=80&w=1000"
                    .to_string(),
            ),
        },
        Event {
            id: "4".to_string(),
            title: "Festival de Jazz".to_string(),
            category: "Show".to_string(),
            description: "Um dia inteiro dedicado ao melhor do jazz nacional e internacional, \
                          com várias atrações e food trucks."
                .to_string(),
            venue: Some("Parque Barigui".to_string()),
            capacity: 8_000,
            ticket_price: 220.0,
            points: 90,
            address: PostalAddress {
                postal_code: "80000-000".to_string(),
                street: "Parque Barigui".to_string(),
                number: "1001".to_string(),
                neighborhood: "Santo Inácio".to_string(),
                city: "Curitiba".to_string(),
                state: "PR".to_string(),
                complement: None,
            },
            starts_at: seed_time("2023-09-18T14:00:00"),
            ends_at: seed_time("2023-09-18T23:00:00"),
            sales_open_at: seed_time("2023-07-30T09:00:00"),
            sales_close_at: seed_time("2023-09-18T16:00:00"),
            status: EventStatus::Active,
            organizer_id: "org4".to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1514320291840-2e0a9bf2a9ae?q=80&w=1000"
                    .to_string(),
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn draft(title: &str, organizer_id: &str) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            category: "Show".to_string(),
            description: "Uma noite de música.".to_string(),
            venue: None,
            capacity: 100,
            ticket_price: 50.0,
            points: 10,
            address: PostalAddress {
                postal_code: "01000-000".to_string(),
                street: "Rua A".to_string(),
                number: "1".to_string(),
                neighborhood: "Centro".to_string(),
                city: "São Paulo".to_string(),
                state: "SP".to_string(),
                complement: None,
            },
            starts_at: seed_time("2026-10-01T20:00:00"),
            ends_at: seed_time("2026-10-01T23:00:00"),
            sales_open_at: seed_time("2026-09-01T09:00:00"),
            sales_close_at: seed_time("2026-10-01T18:00:00"),
            status: EventStatus::Active,
            organizer_id: organizer_id.to_string(),
            image_url: None,
        }
    }

    #[test]
    fn empty_storage_seeds_the_example_events() {
        let catalog = EventCatalog::open(Arc::new(MemoryStorage::new()));
        assert_eq!(catalog.all().len(), 4);
    }

    #[test]
    fn seeding_happens_at_most_once() {
        let storage = Arc::new(MemoryStorage::new());

        let mut catalog = EventCatalog::open(storage.clone());
        catalog.create(draft("Extra", "org9")).unwrap();
        drop(catalog);

        let reopened = EventCatalog::open(storage);
        assert_eq!(reopened.all().len(), 5);
    }

    #[test]
    fn malformed_payload_is_treated_as_absent_and_reseeds() {
        let storage = Arc::new(MemoryStorage::new());
        storage.write(EVENTS_KEY, "[{broken").unwrap();

        let catalog = EventCatalog::open(storage.clone());
        assert_eq!(catalog.all().len(), 4);

        // The seeds were persisted over the broken payload.
        let payload = storage.read(EVENTS_KEY).unwrap().unwrap();
        assert!(payload.starts_with("["));
    }

    #[test]
    fn create_assigns_an_id_and_persists() {
        let storage = Arc::new(MemoryStorage::new());
        let mut catalog = EventCatalog::open(storage.clone());

        let event = catalog.create(draft("Nova festa", "org9")).unwrap();
        assert!(!event.id.is_empty());
        assert_eq!(catalog.get(&event.id), Some(&event));

        let reopened = EventCatalog::open(storage);
        assert!(reopened.get(&event.id).is_some());
    }

    #[test]
    fn update_merges_and_keeps_omitted_fields() {
        let mut catalog = EventCatalog::open(Arc::new(MemoryStorage::new()));

        let updated = catalog
            .update(
                "1",
                EventPatch {
                    status: Some(EventStatus::Inactive),
                    ..EventPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.status, EventStatus::Inactive);
        assert_eq!(updated.title, "Linkin Park: FROM ZERO WORLD TOUR");
        assert_eq!(updated.capacity, 50_000);
    }

    #[test]
    fn update_of_unknown_id_fails() {
        let mut catalog = EventCatalog::open(Arc::new(MemoryStorage::new()));
        let err = catalog.update("nope", EventPatch::default()).unwrap_err();
        assert!(matches!(err, PalcoError::EventNotFound(_)));
    }

    #[test]
    fn delete_removes_the_listing() {
        let mut catalog = EventCatalog::open(Arc::new(MemoryStorage::new()));
        catalog.delete("1").unwrap();
        assert!(catalog.get("1").is_none());
        assert_eq!(catalog.all().len(), 3);
    }

    #[test]
    fn delete_of_unknown_id_still_succeeds_and_changes_nothing() {
        let mut catalog = EventCatalog::open(Arc::new(MemoryStorage::new()));
        catalog.delete("nope").unwrap();
        assert_eq!(catalog.all().len(), 4);
    }

    #[test]
    fn by_organizer_returns_exactly_the_matching_subset() {
        let storage = Arc::new(MemoryStorage::new());
        let mut catalog = EventCatalog::open(storage);
        catalog.create(draft("Primeira", "org9")).unwrap();
        catalog.create(draft("Segunda", "org9")).unwrap();

        let mine = catalog.by_organizer("org9");
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|e| e.organizer_id == "org9"));

        assert_eq!(catalog.by_organizer("org1").len(), 1);
        assert!(catalog.by_organizer("nobody").is_empty());
    }
}

//! End-to-end flows over file-backed storage.

use std::sync::Arc;

use palco_core::storage::{self, ACCOUNTS_KEY, EVENTS_KEY};
use palco_core::{
    AccountKind, AccountStore, Event, EventCatalog, EventDraft, EventPatch, EventStatus,
    FileStorage, NewAccount, PostalAddress,
};

fn draft(title: &str, organizer_id: &str) -> EventDraft {
    EventDraft {
        title: title.to_string(),
        category: "Festival".to_string(),
        description: "Dois dias de atrações ao ar livre.".to_string(),
        venue: Some("Parque da Cidade".to_string()),
        capacity: 5_000,
        ticket_price: 120.0,
        points: 40,
        address: PostalAddress {
            postal_code: "01000-000".to_string(),
            street: "Rua das Flores".to_string(),
            number: "42".to_string(),
            neighborhood: "Centro".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
            complement: None,
        },
        starts_at: "2026-10-10T16:00:00".parse().unwrap(),
        ends_at: "2026-10-11T23:00:00".parse().unwrap(),
        sales_open_at: "2026-08-01T09:00:00".parse().unwrap(),
        sales_close_at: "2026-10-10T12:00:00".parse().unwrap(),
        status: EventStatus::Active,
        organizer_id: organizer_id.to_string(),
        image_url: None,
    }
}

#[test]
fn catalog_lifecycle_from_seed_to_delete() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::open(dir.path()).unwrap());
    let mut catalog = EventCatalog::open(storage);

    // A fresh catalog carries the four example listings.
    assert_eq!(catalog.all().len(), 4);

    let created = catalog.create(draft("Virada Cultural", "org5")).unwrap();

    let mine = catalog.by_organizer("org5");
    assert_eq!(mine, vec![created.clone()]);

    let updated = catalog
        .update(
            &created.id,
            EventPatch {
                status: Some(EventStatus::Inactive),
                ..EventPatch::default()
            },
        )
        .unwrap();
    assert_eq!(updated.status, EventStatus::Inactive);

    // Everything except the status survived the merge.
    let fetched = catalog.get(&created.id).unwrap();
    assert_eq!(fetched.title, created.title);
    assert_eq!(fetched.capacity, created.capacity);
    assert_eq!(fetched.address, created.address);
    assert_eq!(fetched.status, EventStatus::Inactive);

    catalog.delete(&created.id).unwrap();
    assert!(catalog.get(&created.id).is_none());
}

#[test]
fn catalog_state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::open(dir.path()).unwrap());

    let mut catalog = EventCatalog::open(storage.clone());
    let created = catalog.create(draft("Feira do Livro", "org7")).unwrap();
    drop(catalog);

    let reopened = EventCatalog::open(storage);
    assert_eq!(reopened.all().len(), 5);
    assert_eq!(reopened.get(&created.id), Some(&created));
}

#[test]
fn session_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::open(dir.path()).unwrap());

    let mut accounts = AccountStore::open(storage.clone());
    let registered = accounts
        .register(NewAccount {
            name: "Beatriz".to_string(),
            username: None,
            email: "bia@example.com".to_string(),
            phone: None,
            document_kind: None,
            document_number: None,
            birth_date: None,
            kind: AccountKind::Organizer,
            profile_image: None,
            page_url: None,
            bio: None,
        })
        .unwrap();
    drop(accounts);

    let reopened = AccountStore::open(storage.clone());
    assert_eq!(reopened.session(), Some(&registered));

    // Logout clears the persisted session as well.
    let mut reopened = reopened;
    reopened.logout();
    drop(reopened);

    let anonymous = AccountStore::open(storage);
    assert!(anonymous.session().is_none());
    assert_eq!(anonymous.accounts().len(), 1);
}

#[test]
fn collections_round_trip_through_storage() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::open(dir.path()).unwrap());

    let events = vec![
        draft("Primeiro", "org1").into_event("e1".to_string()),
        draft("Segundo", "org2").into_event("e2".to_string()),
    ];
    storage::save(storage.as_ref(), EVENTS_KEY, &events).unwrap();
    let loaded: Vec<Event> = storage::load(storage.as_ref(), EVENTS_KEY).unwrap();
    assert_eq!(loaded, events);

    // An absent collection loads as nothing, not an error.
    assert!(storage::load::<Vec<Event>>(storage.as_ref(), ACCOUNTS_KEY).is_none());
}

//! Event catalog endpoints

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use palco_core::{Event, EventDraft, EventPatch, PalcoError};

use crate::routes::{ApiError, read_lock, require_organizer, write_lock};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/{id}",
            get(get_event).patch(update_event).delete(delete_event),
        )
        .route("/organizers/{id}/events", get(organizer_events))
}

/// GET /events - Browse the full catalog
async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ApiError> {
    let catalog = read_lock(&state.catalog)?;
    Ok(Json(catalog.all().to_vec()))
}

/// GET /events/:id - One listing in full
async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Event>, ApiError> {
    let catalog = read_lock(&state.catalog)?;
    let event = catalog
        .get(&id)
        .cloned()
        .ok_or_else(|| ApiError::from(PalcoError::EventNotFound(id)))?;
    Ok(Json(event))
}

/// POST /events - Create a listing owned by the signed-in organizer
async fn create_event(
    State(state): State<AppState>,
    Json(mut draft): Json<EventDraft>,
) -> Result<Json<Event>, ApiError> {
    let organizer = {
        let accounts = read_lock(&state.accounts)?;
        require_organizer(&accounts)?
    };

    draft.check_schedule()?;
    // The owner is always the signed-in organizer, whatever the payload says.
    draft.organizer_id = organizer.id;

    let mut catalog = write_lock(&state.catalog)?;
    let event = catalog.create(draft)?;
    Ok(Json(event))
}

/// PATCH /events/:id - Merge fields into a listing
async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<EventPatch>,
) -> Result<Json<Event>, ApiError> {
    {
        let accounts = read_lock(&state.accounts)?;
        require_organizer(&accounts)?;
    }

    let mut catalog = write_lock(&state.catalog)?;

    // Re-run the schedule rules the edit form enforces, on the merged result.
    let current = catalog
        .get(&id)
        .cloned()
        .ok_or_else(|| ApiError::from(PalcoError::EventNotFound(id.clone())))?;
    let mut preview = current;
    preview.apply(patch.clone());
    preview.check_schedule()?;

    let event = catalog.update(&id, patch)?;
    Ok(Json(event))
}

/// DELETE /events/:id - Remove a listing
///
/// Deleting an id that is no longer in the catalog also reports success;
/// see `EventCatalog::delete`.
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    {
        let accounts = read_lock(&state.accounts)?;
        require_organizer(&accounts)?;
    }

    write_lock(&state.catalog)?.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /organizers/:id/events - One organizer's listings
async fn organizer_events(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let catalog = read_lock(&state.catalog)?;
    Ok(Json(catalog.by_organizer(&id)))
}

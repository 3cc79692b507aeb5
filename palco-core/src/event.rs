//! Event types.
//!
//! An event is one listing in the catalog: what it is, where it happens,
//! when it runs, when tickets sell, and which organizer owns it. The four
//! timestamps are naive local times; listings have no timezone.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::merge::{merge_field, merge_optional};

/// An event listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// Free-form label, e.g. "Show" or "Teatro".
    pub category: String,
    pub description: String,
    pub venue: Option<String>,
    pub capacity: u32,
    pub ticket_price: f64,
    /// Reward points granted for attending.
    pub points: u32,
    pub address: PostalAddress,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub sales_open_at: NaiveDateTime,
    pub sales_close_at: NaiveDateTime,
    pub status: EventStatus,
    /// Id of the owning organizer account. Not a foreign key: accounts and
    /// events never cascade into each other.
    pub organizer_id: String,
    pub image_url: Option<String>,
}

/// Structured postal address of the venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostalAddress {
    pub postal_code: String,
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub complement: Option<String>,
}

/// Listing visibility. A plain attribute: `update` may set any value, there
/// is no enforced transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Active,
    Inactive,
}

/// Creation payload: everything but the id, which the catalog assigns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub category: String,
    pub description: String,
    pub venue: Option<String>,
    pub capacity: u32,
    pub ticket_price: f64,
    #[serde(default)]
    pub points: u32,
    pub address: PostalAddress,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub sales_open_at: NaiveDateTime,
    pub sales_close_at: NaiveDateTime,
    #[serde(default = "default_status")]
    pub status: EventStatus,
    /// Surfaces fill this in from the signed-in organizer when omitted.
    #[serde(default)]
    pub organizer_id: String,
    pub image_url: Option<String>,
}

fn default_status() -> EventStatus {
    EventStatus::Active
}

/// Partial update. Omitted fields keep their current values. The address is
/// replaced as a whole when given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub capacity: Option<u32>,
    pub ticket_price: Option<f64>,
    pub points: Option<u32>,
    pub address: Option<PostalAddress>,
    pub starts_at: Option<NaiveDateTime>,
    pub ends_at: Option<NaiveDateTime>,
    pub sales_open_at: Option<NaiveDateTime>,
    pub sales_close_at: Option<NaiveDateTime>,
    pub status: Option<EventStatus>,
    pub organizer_id: Option<String>,
    pub image_url: Option<String>,
}

/// A schedule rule the edit form would have rejected.
///
/// These are checked at the surfaces (server handlers, CLI) before a draft
/// or patched listing reaches the catalog; the catalog itself accepts any
/// timestamps.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("The event must end after it starts")]
    EndsBeforeStart,

    #[error("Ticket sales must close after they open")]
    SalesCloseBeforeOpen,

    #[error("Ticket sales must close before the event starts")]
    SalesCloseAfterStart,
}

/// Validate the four listing timestamps against the form rules.
pub fn check_schedule(
    starts_at: NaiveDateTime,
    ends_at: NaiveDateTime,
    sales_open_at: NaiveDateTime,
    sales_close_at: NaiveDateTime,
) -> Result<(), ScheduleError> {
    if ends_at <= starts_at {
        return Err(ScheduleError::EndsBeforeStart);
    }
    if sales_close_at <= sales_open_at {
        return Err(ScheduleError::SalesCloseBeforeOpen);
    }
    if sales_close_at > starts_at {
        return Err(ScheduleError::SalesCloseAfterStart);
    }
    Ok(())
}

impl EventDraft {
    /// Promote into a full record under a freshly assigned id.
    pub fn into_event(self, id: String) -> Event {
        Event {
            id,
            title: self.title,
            category: self.category,
            description: self.description,
            venue: self.venue,
            capacity: self.capacity,
            ticket_price: self.ticket_price,
            points: self.points,
            address: self.address,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
            sales_open_at: self.sales_open_at,
            sales_close_at: self.sales_close_at,
            status: self.status,
            organizer_id: self.organizer_id,
            image_url: self.image_url,
        }
    }

    pub fn check_schedule(&self) -> Result<(), ScheduleError> {
        check_schedule(
            self.starts_at,
            self.ends_at,
            self.sales_open_at,
            self.sales_close_at,
        )
    }
}

impl Event {
    /// Shallow-merge `patch` into this listing.
    pub fn apply(&mut self, patch: EventPatch) {
        merge_field(&mut self.title, patch.title);
        merge_field(&mut self.category, patch.category);
        merge_field(&mut self.description, patch.description);
        merge_optional(&mut self.venue, patch.venue);
        merge_field(&mut self.capacity, patch.capacity);
        merge_field(&mut self.ticket_price, patch.ticket_price);
        merge_field(&mut self.points, patch.points);
        merge_field(&mut self.address, patch.address);
        merge_field(&mut self.starts_at, patch.starts_at);
        merge_field(&mut self.ends_at, patch.ends_at);
        merge_field(&mut self.sales_open_at, patch.sales_open_at);
        merge_field(&mut self.sales_close_at, patch.sales_close_at);
        merge_field(&mut self.status, patch.status);
        merge_field(&mut self.organizer_id, patch.organizer_id);
        merge_optional(&mut self.image_url, patch.image_url);
    }

    pub fn check_schedule(&self) -> Result<(), ScheduleError> {
        check_schedule(
            self.starts_at,
            self.ends_at,
            self.sales_open_at,
            self.sales_close_at,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 9, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn schedule_accepts_sales_closing_at_event_start() {
        assert_eq!(check_schedule(at(10, 20), at(10, 23), at(1, 9), at(10, 20)), Ok(()));
    }

    #[test]
    fn schedule_rejects_end_before_start() {
        assert_eq!(
            check_schedule(at(10, 20), at(10, 20), at(1, 9), at(10, 18)),
            Err(ScheduleError::EndsBeforeStart)
        );
    }

    #[test]
    fn schedule_rejects_inverted_sales_window() {
        assert_eq!(
            check_schedule(at(10, 20), at(10, 23), at(10, 18), at(1, 9)),
            Err(ScheduleError::SalesCloseBeforeOpen)
        );
    }

    #[test]
    fn schedule_rejects_sales_past_event_start() {
        assert_eq!(
            check_schedule(at(10, 20), at(10, 23), at(1, 9), at(10, 22)),
            Err(ScheduleError::SalesCloseAfterStart)
        );
    }
}

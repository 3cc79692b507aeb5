//! Edit a listing with patch flags.

use anyhow::Result;
use chrono::NaiveDateTime;
use clap::Args;
use owo_colors::OwoColorize;

use palco_core::{AccountStore, EventCatalog, EventPatch, EventStatus};

/// Fields to change; anything omitted keeps its current value.
#[derive(Args)]
pub struct EditArgs {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub venue: Option<String>,

    #[arg(long)]
    pub capacity: Option<u32>,

    #[arg(long)]
    pub price: Option<f64>,

    #[arg(long)]
    pub points: Option<u32>,

    /// "active" or "inactive"
    #[arg(long, value_parser = parse_status)]
    pub status: Option<EventStatus>,

    /// YYYY-MM-DD HH:MM
    #[arg(long, value_parser = parse_datetime_arg)]
    pub starts: Option<NaiveDateTime>,

    #[arg(long, value_parser = parse_datetime_arg)]
    pub ends: Option<NaiveDateTime>,

    #[arg(long, value_parser = parse_datetime_arg)]
    pub sales_open: Option<NaiveDateTime>,

    #[arg(long, value_parser = parse_datetime_arg)]
    pub sales_close: Option<NaiveDateTime>,
}

fn parse_status(value: &str) -> Result<EventStatus, String> {
    match value {
        "active" => Ok(EventStatus::Active),
        "inactive" => Ok(EventStatus::Inactive),
        other => Err(format!("unknown status '{}' (use active or inactive)", other)),
    }
}

fn parse_datetime_arg(value: &str) -> Result<NaiveDateTime, String> {
    super::parse_datetime(value).map_err(|e| e.to_string())
}

pub fn run(
    accounts: &AccountStore,
    catalog: &mut EventCatalog,
    id: &str,
    args: EditArgs,
) -> Result<()> {
    super::require_organizer(accounts)?;

    let patch = EventPatch {
        title: args.title,
        category: args.category,
        description: args.description,
        venue: args.venue,
        capacity: args.capacity,
        ticket_price: args.price,
        points: args.points,
        status: args.status,
        starts_at: args.starts,
        ends_at: args.ends,
        sales_open_at: args.sales_open,
        sales_close_at: args.sales_close,
        ..EventPatch::default()
    };

    // Re-run the schedule rules the edit form enforces, on the merged result.
    let Some(current) = catalog.get(id) else {
        anyhow::bail!("Event '{}' not found", id);
    };
    let mut preview = current.clone();
    preview.apply(patch.clone());
    preview.check_schedule()?;

    let event = catalog.update(id, patch)?;

    println!("{}", format!("  Updated: {}", event.title).green());
    Ok(())
}

//! Create a new listing interactively.

use anyhow::Result;
use chrono::NaiveDateTime;
use dialoguer::Input;
use owo_colors::OwoColorize;

use palco_core::{AccountStore, EventCatalog, EventDraft, EventStatus, PostalAddress};

use super::auth::none_if_empty;
use super::parse_datetime;

pub fn run(accounts: &AccountStore, catalog: &mut EventCatalog) -> Result<()> {
    let organizer_id = super::require_organizer(accounts)?.id.clone();

    // --- What ---
    let title: String = Input::new().with_prompt("  Title").interact_text()?;
    let category: String = Input::new().with_prompt("  Category").interact_text()?;
    let description: String = Input::new().with_prompt("  Description").interact_text()?;
    let venue: String = Input::new()
        .with_prompt("  Venue (skip)")
        .default(String::new())
        .show_default(false)
        .interact_text()?;

    // --- Tickets ---
    let capacity: u32 = Input::new().with_prompt("  Capacity").interact_text()?;
    let ticket_price: f64 = Input::new().with_prompt("  Ticket price").interact_text()?;
    let points: u32 = Input::new()
        .with_prompt("  Reward points")
        .default(0)
        .interact_text()?;

    // --- When ---
    let starts_at = prompt_datetime("  Starts at (YYYY-MM-DD HH:MM)")?;
    let ends_at = prompt_datetime("  Ends at")?;
    let sales_open_at = prompt_datetime("  Sales open at")?;
    let sales_close_at = prompt_datetime("  Sales close at")?;

    // --- Where ---
    let postal_code: String = Input::new().with_prompt("  Postal code").interact_text()?;
    let street: String = Input::new().with_prompt("  Street").interact_text()?;
    let number: String = Input::new().with_prompt("  Number").interact_text()?;
    let neighborhood: String = Input::new().with_prompt("  Neighborhood").interact_text()?;
    let city: String = Input::new().with_prompt("  City").interact_text()?;
    let state: String = Input::new().with_prompt("  State").interact_text()?;
    let complement: String = Input::new()
        .with_prompt("  Complement (skip)")
        .default(String::new())
        .show_default(false)
        .interact_text()?;

    let image_url: String = Input::new()
        .with_prompt("  Image URL (skip)")
        .default(String::new())
        .show_default(false)
        .interact_text()?;

    let draft = EventDraft {
        title,
        category,
        description,
        venue: none_if_empty(venue),
        capacity,
        ticket_price,
        points,
        address: PostalAddress {
            postal_code,
            street,
            number,
            neighborhood,
            city,
            state,
            complement: none_if_empty(complement),
        },
        starts_at,
        ends_at,
        sales_open_at,
        sales_close_at,
        status: EventStatus::Active,
        organizer_id,
        image_url: none_if_empty(image_url),
    };

    draft.check_schedule()?;

    let event = catalog.create(draft)?;

    println!();
    println!(
        "{}",
        format!("  Created: {} ({})", event.title, event.id).green()
    );
    Ok(())
}

/// Prompt for a date/time, retrying on parse errors.
fn prompt_datetime(prompt: &str) -> Result<NaiveDateTime> {
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse_datetime(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

//! Browse the catalog.

use anyhow::Result;
use owo_colors::OwoColorize;

use palco_core::{AccountStore, EventCatalog};

use crate::render::Render;

pub fn list(accounts: &AccountStore, catalog: &EventCatalog, mine: bool) -> Result<()> {
    let events = if mine {
        let session = accounts
            .session()
            .ok_or_else(|| anyhow::anyhow!("Sign in to list your own events: palco login"))?;
        catalog.by_organizer(&session.id)
    } else {
        catalog.all().to_vec()
    };

    if events.is_empty() {
        println!("{}", "  No events.".dimmed());
        return Ok(());
    }

    for event in &events {
        println!("  {}", event.render());
    }
    Ok(())
}

pub fn show(catalog: &EventCatalog, id: &str) -> Result<()> {
    let Some(event) = catalog.get(id) else {
        anyhow::bail!("Event '{}' not found", id);
    };

    println!("  {}", event.title.bold());
    println!("  {}", event.category.dimmed());
    println!();
    println!("  {}", event.description);
    println!();
    if let Some(venue) = &event.venue {
        println!("  Venue:    {}", venue);
    }
    println!(
        "  Where:    {}, {} - {}",
        event.address.city, event.address.state, event.address.neighborhood
    );
    println!("  When:     {} to {}", event.starts_at, event.ends_at);
    println!(
        "  Sales:    {} to {}",
        event.sales_open_at, event.sales_close_at
    );
    println!(
        "  Tickets:  R$ {:.2} ({} seats, {} points)",
        event.ticket_price, event.capacity, event.points
    );
    println!("  Status:   {}", event.render_status());
    println!("  Id:       {}", event.id.dimmed());
    Ok(())
}

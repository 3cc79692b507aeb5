//! Delete a listing.

use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use palco_core::{AccountStore, EventCatalog};

pub fn run(accounts: &AccountStore, catalog: &mut EventCatalog, id: &str, yes: bool) -> Result<()> {
    super::require_organizer(accounts)?;

    let title = catalog.get(id).map(|e| e.title.clone());

    if !yes {
        let prompt = match &title {
            Some(title) => format!("  Delete \"{}\"?", title),
            None => format!("  Delete event '{}'?", id),
        };
        if !Confirm::new().with_prompt(prompt).default(false).interact()? {
            println!("  Aborted.");
            return Ok(());
        }
    }

    catalog.delete(id)?;

    match title {
        Some(title) => println!("{}", format!("  Deleted: {}", title).red()),
        // Removing an id that was never there still counts as done.
        None => println!("  Nothing with id '{}' in the catalog.", id),
    }
    Ok(())
}

//! CLI subcommand implementations.

pub mod auth;
pub mod delete;
pub mod edit;
pub mod events;
pub mod new;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;

use palco_core::{Account, AccountKind, AccountStore};

/// Organizer-only commands call this first. Same gate the GUI routes apply.
pub fn require_organizer(accounts: &AccountStore) -> Result<&Account> {
    let session = accounts.session().context("Sign in first: palco login")?;
    if session.kind != AccountKind::Organizer {
        anyhow::bail!("Only organizer accounts can manage events");
    }
    Ok(session)
}

/// Parse "YYYY-MM-DD HH:MM" (a 'T' separator and seconds are accepted too).
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime> {
    let normalized = input.trim().replace('T', " ");

    NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%d %H:%M:%S"))
        .map_err(|_| {
            anyhow::anyhow!(
                "Could not parse date/time: \"{}\" (expected YYYY-MM-DD HH:MM)",
                input
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_datetime_space_separator() {
        let dt = parse_datetime("2026-10-01 20:00").unwrap();
        assert_eq!(dt.to_string(), "2026-10-01 20:00:00");
    }

    #[test]
    fn parse_datetime_t_separator_and_seconds() {
        assert!(parse_datetime("2026-10-01T20:00").is_ok());
        assert!(parse_datetime("2026-10-01T20:00:30").is_ok());
    }

    #[test]
    fn parse_datetime_rejects_garbage() {
        assert!(parse_datetime("next friday").is_err());
        assert!(parse_datetime("2026-10-01").is_err());
    }
}

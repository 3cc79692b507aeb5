//! TUI rendering for palco types using owo_colors.

use owo_colors::OwoColorize;
use palco_core::{Event, EventStatus};

/// Extension trait for colored terminal rendering.
pub trait Render {
    /// One-line listing summary.
    fn render(&self) -> String;
    /// The status word, colored.
    fn render_status(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let bullet = match self.status {
            EventStatus::Active => "●".green().to_string(),
            EventStatus::Inactive => "○".dimmed().to_string(),
        };
        let when = self.starts_at.format("%Y-%m-%d %H:%M").to_string();

        format!(
            "{} {} {} {}  {}",
            bullet,
            self.title,
            format!("({})", self.category).dimmed(),
            when.dimmed(),
            self.id.dimmed(),
        )
    }

    fn render_status(&self) -> String {
        match self.status {
            EventStatus::Active => "active".green().to_string(),
            EventStatus::Inactive => "inactive".dimmed().to_string(),
        }
    }
}

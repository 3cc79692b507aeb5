mod commands;
mod render;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::edit::EditArgs;
use palco_core::{AccountStore, EventCatalog, FileStorage, PalcoConfig};

#[derive(Parser)]
#[command(name = "palco")]
#[command(about = "Browse cultural events and manage your own listings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and sign in
    Signup {
        /// Register as an organizer instead of a participant
        #[arg(long)]
        organizer: bool,
    },
    /// Sign in with your email
    Login {
        email: Option<String>,
    },
    /// Sign out
    Logout,
    /// Show the signed-in account
    Whoami,
    /// Browse the event catalog
    Events {
        /// Only your own listings (organizers)
        #[arg(long)]
        mine: bool,
    },
    /// Show one event in full
    Show {
        id: String,
    },
    /// Create a new listing (organizers)
    New,
    /// Edit a listing (organizers)
    Edit {
        id: String,

        #[command(flatten)]
        changes: EditArgs,
    },
    /// Delete a listing (organizers)
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = PalcoConfig::load()?;
    let storage = Arc::new(FileStorage::open(config.data_path())?);
    let mut accounts = AccountStore::open(storage.clone());
    let mut catalog = EventCatalog::open(storage);

    match cli.command {
        Commands::Signup { organizer } => commands::auth::signup(&mut accounts, organizer),
        Commands::Login { email } => commands::auth::login(&mut accounts, email),
        Commands::Logout => commands::auth::logout(&mut accounts),
        Commands::Whoami => commands::auth::whoami(&accounts),
        Commands::Events { mine } => commands::events::list(&accounts, &catalog, mine),
        Commands::Show { id } => commands::events::show(&catalog, &id),
        Commands::New => commands::new::run(&accounts, &mut catalog),
        Commands::Edit { id, changes } => commands::edit::run(&accounts, &mut catalog, &id, changes),
        Commands::Delete { id, yes } => commands::delete::run(&accounts, &mut catalog, &id, yes),
    }
}

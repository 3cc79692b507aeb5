//! Account commands: signup, login, logout, whoami.

use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;

use palco_core::{AccountKind, AccountStore, NewAccount};

pub fn signup(accounts: &mut AccountStore, organizer: bool) -> Result<()> {
    let name: String = Input::new().with_prompt("  Name").interact_text()?;
    let email: String = Input::new().with_prompt("  Email").interact_text()?;
    let phone: String = Input::new()
        .with_prompt("  Phone (skip)")
        .default(String::new())
        .show_default(false)
        .interact_text()?;

    // Collected like the signup form would, never stored.
    let _password = rpassword::prompt_password("  Password: ")?;

    let kind = if organizer {
        AccountKind::Organizer
    } else {
        AccountKind::Participant
    };

    let account = accounts.register(NewAccount {
        name,
        username: None,
        email,
        phone: none_if_empty(phone),
        document_kind: None,
        document_number: None,
        birth_date: None,
        kind,
        profile_image: None,
        page_url: None,
        bio: None,
    })?;

    println!();
    println!(
        "{}",
        format!(
            "  Welcome, {}! You are signed in as {}.",
            account.name, account.kind
        )
        .green()
    );
    Ok(())
}

pub fn login(accounts: &mut AccountStore, email: Option<String>) -> Result<()> {
    let email = match email {
        Some(email) => email,
        None => Input::new().with_prompt("  Email").interact_text()?,
    };
    let password = rpassword::prompt_password("  Password: ")?;

    let account = accounts.authenticate(&email, &password)?;
    println!("{}", format!("  Welcome back, {}!", account.name).green());
    Ok(())
}

pub fn logout(accounts: &mut AccountStore) -> Result<()> {
    accounts.logout();
    println!("  Signed out.");
    Ok(())
}

pub fn whoami(accounts: &AccountStore) -> Result<()> {
    match accounts.session() {
        Some(account) => {
            println!("  {} <{}>", account.name, account.email);
            println!("  {}", account.kind.to_string().dimmed());
        }
        None => println!("{}", "  Not signed in.".dimmed()),
    }
    Ok(())
}

pub(crate) fn none_if_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

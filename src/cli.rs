//! CLI interface for Agro Rent.
//!
//! Each subcommand is non-interactive: arguments in, JSON out on stdout.
//! Logs and errors go to stderr.
//!
//! Commands split into groups:
//!
//! - `agro-rent catalog ...`: browse equipment and labour.
//! - `agro-rent user ...` / `agro-rent admin ...`: registration and login.
//! - `agro-rent book ...`: create bookings.
//! - `agro-rent bookings ...`: list and transition a user's bookings.
//! - `agro-rent contact ...`: send a contact message.

mod account;
mod book;
mod bookings;
mod catalog;
mod format;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::booking::BookingManager;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::contact::{self, ContactMessage};
use crate::credentials::CredentialService;
use crate::storage::Storage;

use account::{AdminCommand, UserCommand};
use book::BookCommand;
use bookings::BookingsCommand;
use catalog::CatalogCommand;

/// Agro Rent: farm equipment and labour bookings.
#[derive(Debug, Parser)]
#[command(name = "agro-rent", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    /// Data directory for bookings and users.
    /// Falls back to `AGRO_RENT_DATA_DIR`, the config file, then `~/.agro-rent/data`.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r#"Workflow: renting a tractor
  1. agro-rent user register --name "Asha Rao" --phone 9123456789 --email asha@example.com
     → prints the new user with a generated username and password
  2. agro-rent catalog equipment --search tractor
  3. agro-rent book equipment --user <id> --equipment eq1 --from 2025-01-01 --to 2025-01-03
  4. agro-rent bookings active --user <id>
  5. agro-rent bookings complete <booking-id>"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse the equipment and labour catalog.
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },

    /// Register and log in as a user.
    User {
        #[command(subcommand)]
        command: UserCommand,
    },

    /// Administrator login and dashboard figures.
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },

    /// Book equipment or labour.
    ///
    /// Prices always come from the catalog. A `--quoted-total` that disagrees
    /// is logged and ignored.
    Book {
        #[command(subcommand)]
        command: BookCommand,
    },

    /// List a user's bookings, or complete or cancel one.
    Bookings {
        #[command(subcommand)]
        command: BookingsCommand,
    },

    /// Send a message to the Agro Rent team.
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        message: String,
    },
}

/// Run a parsed command, returning an error message on failure.
pub fn run(
    command: Command,
    config: &Config,
    storage: &Storage,
    catalog: &Catalog,
) -> Result<(), String> {
    let credentials = CredentialService::new(storage, config.admin());
    let manager = BookingManager::new(storage, catalog);

    match command {
        Command::Catalog { command } => catalog::run(catalog, &manager, command),
        Command::User { command } => {
            if config.seed_demo_user {
                seed_demo_user(&credentials);
            }
            account::run_user(&credentials, command)
        }
        Command::Admin { command } => account::run_admin(&credentials, &manager, command),
        Command::Book { command } => book::run(&manager, command),
        Command::Bookings { command } => bookings::run(&manager, command),
        Command::Contact {
            name,
            email,
            phone,
            message,
        } => cmd_contact(
            &ContactMessage {
                name,
                email,
                phone,
                message,
            },
            &config.contact_recipient,
        ),
    }
}

/// Seeds the demo account. Failures are logged, never fatal.
fn seed_demo_user(credentials: &CredentialService<'_, Storage>) {
    if let Err(e) = credentials.ensure_demo_user() {
        tracing::warn!(error = %e, "failed to seed demo user");
    }
}

fn cmd_contact(message: &ContactMessage, recipient: &str) -> Result<(), String> {
    contact::send_contact_message(message, recipient)
        .map_err(|e| format!("failed to send message: {e}"))?;
    format::print_json(&serde_json::json!({
        "message": "Message sent successfully"
    }))
}

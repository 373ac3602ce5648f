//! Account commands: user registration and login, admin login and stats.

use clap::Subcommand;
use serde::Serialize;

use crate::booking::BookingManager;
use crate::credentials::CredentialService;
use crate::model::UserProfile;
use crate::storage::{BookingRepository, UserRepository};

use super::format::print_json;

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Register a new user. Prints the generated username and password.
    Register {
        #[arg(long)]
        name: String,
        /// At least ten digits; punctuation is ignored.
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: String,
    },

    /// Log in. Prints the user's profile.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Log in as the administrator.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },

    /// Catalog and booking totals. Requires admin credentials.
    Stats {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
}

#[derive(Debug, Serialize)]
struct AdminSession<'a> {
    username: &'a str,
    role: &'static str,
}

pub(super) fn run_user<R: UserRepository>(
    credentials: &CredentialService<'_, R>,
    command: UserCommand,
) -> Result<(), String> {
    match command {
        UserCommand::Register { name, phone, email } => {
            let user = credentials
                .register_user(&name, &phone, &email)
                .map_err(|e| format!("failed to register: {e}"))?;
            print_json(&user)
        }
        UserCommand::Login { username, password } => {
            let profile = login_user(credentials, &username, &password)?;
            print_json(&profile)
        }
    }
}

pub(super) fn run_admin<R: BookingRepository + UserRepository>(
    credentials: &CredentialService<'_, R>,
    manager: &BookingManager<'_, R>,
    command: AdminCommand,
) -> Result<(), String> {
    match command {
        AdminCommand::Login { username, password } => {
            require_admin(credentials, &username, &password)?;
            print_json(&AdminSession {
                username: &username,
                role: "admin",
            })
        }
        AdminCommand::Stats { username, password } => {
            require_admin(credentials, &username, &password)?;
            print_json(&manager.stats())
        }
    }
}

fn login_user<R: UserRepository>(
    credentials: &CredentialService<'_, R>,
    username: &str,
    password: &str,
) -> Result<UserProfile, String> {
    credentials
        .authenticate_user(username, password)
        .map_err(|e| format!("failed to log in: {e}"))?
        .map(|user| UserProfile::from(&user))
        .ok_or_else(|| "invalid username or password".to_string())
}

fn require_admin<R: UserRepository>(
    credentials: &CredentialService<'_, R>,
    username: &str,
    password: &str,
) -> Result<(), String> {
    if credentials.authenticate_admin(username, password) {
        Ok(())
    } else {
        Err("invalid admin credentials".to_string())
    }
}

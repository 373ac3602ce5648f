//! Local persistence for bookings and registered users.
//!
//! Everything lives in one data directory:
//!
//! ```text
//! <root>/
//!   bookings.json          # JSON array of every booking
//!   user_credentials.json  # JSON array of every registered user
//! ```
//!
//! Each file is rewritten wholesale on every write. Queries treat a missing or
//! unreadable file as empty; writes re-read strictly so a corrupt file is
//! reported instead of silently replaced.

mod bookings;
#[cfg(test)]
mod memory;
mod users;

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use serde::{Serialize, de::DeserializeOwned};
use tempfile::NamedTempFile;

use crate::model::{Booking, UserCredentials};

#[cfg(test)]
pub use memory::MemoryStore;

const BOOKINGS_FILE: &str = "bookings.json";
const USERS_FILE: &str = "user_credentials.json";

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("booking not found: {0}")]
    BookingNotFound(String),

    #[error("storage lock poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// Append-only store of bookings, queryable by user and lifecycle bucket.
///
/// Reads never fail: an unreadable backing store reads as empty.
pub trait BookingRepository {
    /// Every booking, in insertion order.
    fn all_bookings(&self) -> Vec<Booking>;

    /// Appends a booking. Id uniqueness is the caller's responsibility.
    fn append_booking(&self, booking: &Booking) -> Result<()>;

    /// Replaces the stored booking that has the same id.
    fn replace_booking(&self, booking: &Booking) -> Result<()>;

    fn find_booking(&self, id: &str) -> Option<Booking> {
        self.all_bookings().into_iter().find(|b| b.id == id)
    }

    fn bookings_by_user(&self, user_id: &str) -> Vec<Booking> {
        self.all_bookings()
            .into_iter()
            .filter(|b| b.user_id == user_id)
            .collect()
    }

    /// The user's pending and confirmed bookings.
    fn active_bookings_by_user(&self, user_id: &str) -> Vec<Booking> {
        self.bookings_by_user(user_id)
            .into_iter()
            .filter(|b| b.status.is_active())
            .collect()
    }

    /// The user's completed and cancelled bookings.
    fn past_bookings_by_user(&self, user_id: &str) -> Vec<Booking> {
        self.bookings_by_user(user_id)
            .into_iter()
            .filter(|b| b.status.is_terminal())
            .collect()
    }
}

/// Store of registered users.
pub trait UserRepository {
    /// Every user, in registration order.
    fn all_users(&self) -> Vec<UserCredentials>;

    fn append_user(&self, user: &UserCredentials) -> Result<()>;

    /// First user registered under `username`. Usernames are not unique.
    fn find_user_by_username(&self, username: &str) -> Option<UserCredentials> {
        self.all_users().into_iter().find(|u| u.username == username)
    }

    fn find_user_by_id(&self, id: &str) -> Option<UserCredentials> {
        self.all_users().into_iter().find(|u| u.id == id)
    }
}

/// JSON-file storage for bookings and users.
pub struct Storage {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl Storage {
    /// Creates a new storage instance rooted at the given directory.
    ///
    /// The directory is created if it doesn't exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            write_lock: Mutex::new(()),
        })
    }

    /// Returns the default storage root: `~/.agro-rent/data/`.
    pub fn default_root() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".agro-rent").join("data"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|_| StorageError::LockPoisoned)
    }

    /// Reads a JSON array file. A missing file is an empty array.
    fn read_array<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let json = match fs::read_to_string(self.root.join(file)) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&json)?)
    }

    /// Reads a JSON array file for a query, treating any failure as empty.
    fn read_array_lenient<T: DeserializeOwned>(&self, file: &str) -> Vec<T> {
        self.read_array(file).unwrap_or_else(|e| {
            tracing::warn!(file, error = %e, "unreadable store, treating as empty");
            Vec::new()
        })
    }

    /// Replaces a JSON array file atomically: the array is written to a
    /// temporary file in the root, then renamed over the target.
    fn write_array<T: Serialize>(&self, file: &str, items: &[T]) -> Result<()> {
        let json = serde_json::to_string_pretty(items)?;
        let mut tmp = NamedTempFile::new_in(&self.root)?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(self.root.join(file)).map_err(|e| e.error)?;
        Ok(())
    }
}

//! In-memory storage: a fresh, isolated store per test.

use std::sync::{Mutex, PoisonError};

use crate::model::{Booking, UserCredentials};

use super::{BookingRepository, Result, StorageError, UserRepository};

#[derive(Default)]
pub struct MemoryStore {
    bookings: Mutex<Vec<Booking>>,
    users: Mutex<Vec<UserCredentials>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookingRepository for MemoryStore {
    fn all_bookings(&self) -> Vec<Booking> {
        self.bookings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn append_booking(&self, booking: &Booking) -> Result<()> {
        self.bookings
            .lock()
            .map_err(|_| StorageError::LockPoisoned)?
            .push(booking.clone());
        Ok(())
    }

    fn replace_booking(&self, booking: &Booking) -> Result<()> {
        let mut bookings = self
            .bookings
            .lock()
            .map_err(|_| StorageError::LockPoisoned)?;
        let slot = bookings
            .iter_mut()
            .find(|b| b.id == booking.id)
            .ok_or_else(|| StorageError::BookingNotFound(booking.id.clone()))?;
        *slot = booking.clone();
        Ok(())
    }
}

impl UserRepository for MemoryStore {
    fn all_users(&self) -> Vec<UserCredentials> {
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn append_user(&self, user: &UserCredentials) -> Result<()> {
        self.users
            .lock()
            .map_err(|_| StorageError::LockPoisoned)?
            .push(user.clone());
        Ok(())
    }
}

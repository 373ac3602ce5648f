//! Booking storage: the `bookings.json` array.

use crate::model::Booking;

use super::{BOOKINGS_FILE, BookingRepository, Result, Storage, StorageError};

impl BookingRepository for Storage {
    fn all_bookings(&self) -> Vec<Booking> {
        self.read_array_lenient(BOOKINGS_FILE)
    }

    fn append_booking(&self, booking: &Booking) -> Result<()> {
        let _guard = self.lock()?;
        let mut bookings: Vec<Booking> = self.read_array(BOOKINGS_FILE)?;
        bookings.push(booking.clone());
        self.write_array(BOOKINGS_FILE, &bookings)
    }

    fn replace_booking(&self, booking: &Booking) -> Result<()> {
        let _guard = self.lock()?;
        let mut bookings: Vec<Booking> = self.read_array(BOOKINGS_FILE)?;
        let slot = bookings
            .iter_mut()
            .find(|b| b.id == booking.id)
            .ok_or_else(|| StorageError::BookingNotFound(booking.id.clone()))?;
        *slot = booking.clone();
        self.write_array(BOOKINGS_FILE, &bookings)
    }
}

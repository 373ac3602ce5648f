//! Core data model for AGRO RENT.
//!
//! These types describe the catalog (equipment and labour), registered users,
//! and bookings. Field names serialize in camelCase so the JSON files keep the
//! shape the web front end already reads.

mod booking;
mod catalog;
mod user;

pub use booking::{
    Booking, BookingKind, BookingStatus, BookingSummary, DurationType,
    PastBookingSummary, PaymentStatus,
};
pub use catalog::{Availability, Equipment, Labour, PriceTable};
pub use user::{UserCredentials, UserProfile};

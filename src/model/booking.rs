//! Booking types: a reservation of equipment or labour for a date range.

use std::fmt;

use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};

/// A user's reservation of an equipment unit or a labourer.
///
/// The variant-specific fields live in [`BookingKind`], flattened so each
/// record serializes as a single object with a `type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub start_date: Date,
    pub end_date: Date,
    /// Whole rupees, fixed at creation.
    pub total_amount: u64,
    pub status: BookingStatus,
    pub created_at: Timestamp,
    #[serde(flatten)]
    pub kind: BookingKind,
}

/// What was booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum BookingKind {
    Equipment {
        equipment_id: String,
        equipment_name: String,
        duration_type: DurationType,
    },
    Labour {
        labour_id: String,
        labour_name: String,
        days_required: u64,
    },
}

impl Booking {
    pub fn booking_type(&self) -> BookingType {
        match self.kind {
            BookingKind::Equipment { .. } => BookingType::Equipment,
            BookingKind::Labour { .. } => BookingType::Labour,
        }
    }

    /// Display name of the booked equipment or labourer.
    pub fn item_name(&self) -> &str {
        match &self.kind {
            BookingKind::Equipment { equipment_name, .. } => equipment_name,
            BookingKind::Labour { labour_name, .. } => labour_name,
        }
    }

    /// Whether the booking holds `labour_id` on any day of `start..=end`.
    pub fn occupies_labour(&self, labour_id: &str, start: Date, end: Date) -> bool {
        let BookingKind::Labour {
            labour_id: booked, ..
        } = &self.kind
        else {
            return false;
        };
        booked == labour_id
            && self.status.is_active()
            && self.start_date <= end
            && start <= self.end_date
    }

    pub fn summary(&self) -> BookingSummary {
        BookingSummary {
            id: self.id.clone(),
            booking_type: self.booking_type(),
            name: self.item_name().to_string(),
            start_date: self.start_date,
            end_date: self.end_date,
            total_amount: self.total_amount,
            status: self.status,
        }
    }
}

/// Billing granularity for an equipment rental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationType {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

/// Where a booking stands in its lifecycle.
///
/// `Pending` and `Confirmed` are active; `Completed` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn is_active(self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    pub fn is_terminal(self) -> bool {
        !self.is_active()
    }

    /// Terminal states accept no transitions; active states may move forward.
    pub fn can_transition_to(self, next: Self) -> bool {
        match (self, next) {
            (Self::Pending, Self::Confirmed) => true,
            (Self::Pending | Self::Confirmed, Self::Completed | Self::Cancelled) => true,
            _ => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `type` tag of a booking, as shown in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingType {
    Equipment,
    Labour,
}

/// One row of the active bookings listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub id: String,
    #[serde(rename = "type")]
    pub booking_type: BookingType,
    pub name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub total_amount: u64,
    pub status: BookingStatus,
}

/// One row of the past bookings (transactions) listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PastBookingSummary {
    #[serde(flatten)]
    pub summary: BookingSummary,
    pub payment_status: PaymentStatus,
}

/// Payment state shown next to past bookings.
///
/// There is no payment processing; every past booking reports `Paid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
}

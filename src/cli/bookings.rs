//! Booking list and transition commands.

use clap::Subcommand;

use crate::booking::BookingManager;
use crate::storage::{BookingRepository, UserRepository};

use super::format::print_json;

#[derive(Debug, Subcommand)]
pub enum BookingsCommand {
    /// List the user's pending and confirmed bookings.
    Active {
        #[arg(long)]
        user: String,
    },

    /// List the user's completed and cancelled bookings.
    Past {
        #[arg(long)]
        user: String,
    },

    /// Mark an active booking as completed.
    Complete {
        /// Booking id, e.g. `eq_3f2a...`.
        booking_id: String,
    },

    /// Cancel an active booking.
    Cancel {
        /// Booking id, e.g. `labour_9c1d...`.
        booking_id: String,
    },
}

pub(super) fn run<R: BookingRepository + UserRepository>(
    manager: &BookingManager<'_, R>,
    command: BookingsCommand,
) -> Result<(), String> {
    match command {
        BookingsCommand::Active { user } => print_json(&manager.get_active_bookings(&user)),
        BookingsCommand::Past { user } => print_json(&manager.get_past_bookings(&user)),
        BookingsCommand::Complete { booking_id } => {
            let booking = manager
                .complete_booking(&booking_id)
                .map_err(|e| format!("failed to complete booking: {e}"))?;
            print_json(&booking)
        }
        BookingsCommand::Cancel { booking_id } => {
            let booking = manager
                .cancel_booking(&booking_id)
                .map_err(|e| format!("failed to cancel booking: {e}"))?;
            print_json(&booking)
        }
    }
}

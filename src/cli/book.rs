//! Booking creation commands: equipment and labour.

use clap::{Subcommand, ValueEnum};
use jiff::civil::Date;

use crate::booking::{BookingManager, EquipmentBookingRequest, LabourBookingRequest};
use crate::model::DurationType;
use crate::storage::{BookingRepository, UserRepository};

use super::format::print_json;

#[derive(Debug, Subcommand)]
pub enum BookCommand {
    /// Rent an equipment unit. Prints the booking.
    Equipment {
        /// Id of the booking user.
        #[arg(long)]
        user: String,

        /// Catalog id, e.g. `eq1`.
        #[arg(long)]
        equipment: String,

        /// First day of the rental (YYYY-MM-DD).
        #[arg(long)]
        from: Date,

        /// Last day of the rental, inclusive (YYYY-MM-DD).
        #[arg(long)]
        to: Date,

        #[arg(long, value_enum, default_value_t = DurationArg::Daily)]
        duration: DurationArg,

        /// Total the client displayed. Only compared against the computed total.
        #[arg(long)]
        quoted_total: Option<u64>,
    },

    /// Hire a labourer. Prints the booking.
    Labour {
        /// Id of the booking user.
        #[arg(long)]
        user: String,

        /// Catalog id, e.g. `l1`.
        #[arg(long)]
        labour: String,

        /// First working day (YYYY-MM-DD).
        #[arg(long)]
        from: Date,

        /// Last working day, inclusive (YYYY-MM-DD).
        #[arg(long)]
        to: Date,

        /// Total the client displayed. Only compared against the computed total.
        #[arg(long)]
        quoted_total: Option<u64>,
    },
}

/// CLI-facing billing tier, mapped to the domain `DurationType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DurationArg {
    Daily,
    Weekly,
    Monthly,
}

impl DurationArg {
    fn to_domain(self) -> DurationType {
        match self {
            Self::Daily => DurationType::Daily,
            Self::Weekly => DurationType::Weekly,
            Self::Monthly => DurationType::Monthly,
        }
    }
}

pub(super) fn run<R: BookingRepository + UserRepository>(
    manager: &BookingManager<'_, R>,
    command: BookCommand,
) -> Result<(), String> {
    let booking = match command {
        BookCommand::Equipment {
            user,
            equipment,
            from,
            to,
            duration,
            quoted_total,
        } => manager
            .create_equipment_booking(&EquipmentBookingRequest {
                user_id: user,
                equipment_id: equipment,
                start_date: Some(from),
                end_date: Some(to),
                duration_type: duration.to_domain(),
                quoted_name: None,
                quoted_total,
            })
            .map_err(|e| format!("failed to book equipment: {e}"))?,
        BookCommand::Labour {
            user,
            labour,
            from,
            to,
            quoted_total,
        } => manager
            .create_labour_booking(&LabourBookingRequest {
                user_id: user,
                labour_id: labour,
                start_date: Some(from),
                end_date: Some(to),
                quoted_name: None,
                quoted_days: None,
                quoted_total,
            })
            .map_err(|e| format!("failed to book labour: {e}"))?,
    };
    print_json(&booking)
}

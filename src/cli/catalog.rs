//! Catalog commands: equipment, labour, skills.

use clap::{Subcommand, ValueEnum};
use jiff::{Zoned, civil::Date};

use crate::booking::BookingManager;
use crate::catalog::{Catalog, filter_labour};
use crate::model::{Availability, Labour};
use crate::storage::{BookingRepository, UserRepository};

use super::format::print_json;

#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    /// List rentable equipment.
    Equipment {
        /// Only equipment whose name or description contains this text.
        #[arg(long)]
        search: Option<String>,
    },

    /// List hireable labourers.
    ///
    /// Availability accounts for active bookings on `--on` (default: today).
    Labour {
        /// Exact skill, e.g. "Tractor Operator".
        #[arg(long)]
        skill: Option<String>,

        #[arg(long, value_enum)]
        availability: Option<AvailabilityArg>,

        /// Date to report availability for (YYYY-MM-DD).
        #[arg(long)]
        on: Option<Date>,
    },

    /// List the distinct labour skills.
    Skills,
}

/// CLI-facing availability, mapped to the domain `Availability`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AvailabilityArg {
    Available,
    Booked,
}

impl AvailabilityArg {
    fn to_domain(self) -> Availability {
        match self {
            Self::Available => Availability::Available,
            Self::Booked => Availability::Booked,
        }
    }
}

pub(super) fn run<R: BookingRepository + UserRepository>(
    catalog: &Catalog,
    manager: &BookingManager<'_, R>,
    command: CatalogCommand,
) -> Result<(), String> {
    match command {
        CatalogCommand::Equipment { search } => match search {
            Some(term) => print_json(&catalog.search_equipment(&term)),
            None => print_json(catalog.list_equipment()),
        },
        CatalogCommand::Labour {
            skill,
            availability,
            on,
        } => {
            let on = on.unwrap_or_else(|| Zoned::now().date());
            let labour = labour_on(
                manager,
                on,
                skill.as_deref(),
                availability.map(AvailabilityArg::to_domain),
            );
            print_json(&labour)
        }
        CatalogCommand::Skills => print_json(&catalog.skills()),
    }
}

/// Labourers as of `on`, filtered by skill and effective availability.
fn labour_on<R: BookingRepository + UserRepository>(
    manager: &BookingManager<'_, R>,
    on: Date,
    skill: Option<&str>,
    availability: Option<Availability>,
) -> Vec<Labour> {
    let labour = manager.labour_availability_on(on);
    filter_labour(&labour, skill, availability)
        .into_iter()
        .cloned()
        .collect()
}

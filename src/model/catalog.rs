//! Catalog types: rentable equipment and hireable labour.

use serde::{Deserialize, Serialize};

/// Price tiers for one piece of equipment, in whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTable {
    pub daily_price: u64,
    pub weekly_price: u64,
    pub monthly_price: u64,
}

/// A rentable equipment unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: String,
    pub name: String,
    pub description: String,
    pub specs: String,
    pub location: String,
    #[serde(flatten)]
    pub prices: PriceTable,
    pub image: String,
}

/// A hireable labourer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Labour {
    pub id: String,
    pub name: String,
    pub skill: String,
    /// Years of experience.
    pub experience: u32,
    pub location: String,
    pub daily_charge: u64,
    pub availability: Availability,
}

/// Whether a labourer can be hired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Available,
    Booked,
}

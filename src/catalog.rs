//! Catalog provider: the equipment and labour reference lists.
//!
//! The catalog is loaded once at startup, either the built-in list or a JSON
//! file named in the config, and never mutated afterwards.

use std::{collections::HashSet, fs, io, path::Path};

use serde::{Deserialize, Serialize};

use crate::model::{Availability, Equipment, Labour, PriceTable};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Invalid(String),
}

/// Read-only equipment and labour lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    equipment: Vec<Equipment>,
    labour: Vec<Labour>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids and non-positive prices.
    pub fn new(equipment: Vec<Equipment>, labour: Vec<Labour>) -> Result<Self, CatalogError> {
        let catalog = Self { equipment, labour };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Loads a catalog from a JSON file of the form
    /// `{"equipment": [...], "labour": [...]}`.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path)?;
        let Self { equipment, labour } = serde_json::from_str(&json)?;
        Self::new(equipment, labour)
    }

    pub fn list_equipment(&self) -> &[Equipment] {
        &self.equipment
    }

    pub fn list_labour(&self) -> &[Labour] {
        &self.labour
    }

    pub fn find_equipment(&self, id: &str) -> Option<&Equipment> {
        self.equipment.iter().find(|e| e.id == id)
    }

    pub fn find_labour(&self, id: &str) -> Option<&Labour> {
        self.labour.iter().find(|l| l.id == id)
    }

    /// Equipment whose name or description contains `term`, ignoring case.
    pub fn search_equipment(&self, term: &str) -> Vec<&Equipment> {
        let term = term.to_lowercase();
        self.equipment
            .iter()
            .filter(|e| {
                e.name.to_lowercase().contains(&term) || e.description.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Distinct skills in first-seen order.
    pub fn skills(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.labour
            .iter()
            .map(|l| l.skill.as_str())
            .filter(|s| seen.insert(*s))
            .collect()
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut ids = HashSet::new();
        for e in &self.equipment {
            if !ids.insert(e.id.as_str()) {
                return Err(CatalogError::Invalid(format!("duplicate id '{}'", e.id)));
            }
            let PriceTable {
                daily_price,
                weekly_price,
                monthly_price,
            } = e.prices;
            if daily_price == 0 || weekly_price == 0 || monthly_price == 0 {
                return Err(CatalogError::Invalid(format!(
                    "equipment '{}' has a zero price",
                    e.id
                )));
            }
        }
        for l in &self.labour {
            if !ids.insert(l.id.as_str()) {
                return Err(CatalogError::Invalid(format!("duplicate id '{}'", l.id)));
            }
            if l.daily_charge == 0 {
                return Err(CatalogError::Invalid(format!(
                    "labourer '{}' has a zero daily charge",
                    l.id
                )));
            }
        }
        Ok(())
    }
}

impl Default for Catalog {
    /// The built-in catalog shipped with the application.
    fn default() -> Self {
        Self {
            equipment: builtin_equipment(),
            labour: builtin_labour(),
        }
    }
}

fn equipment(
    id: &str,
    name: &str,
    description: &str,
    specs: &str,
    location: &str,
    prices: [u64; 3],
) -> Equipment {
    let [daily_price, weekly_price, monthly_price] = prices;
    Equipment {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        specs: specs.to_string(),
        location: location.to_string(),
        prices: PriceTable {
            daily_price,
            weekly_price,
            monthly_price,
        },
        image: format!("/images/equipment/{id}.jpg"),
    }
}

/// Labourers matching an exact skill and availability, when given.
pub fn filter_labour<'a>(
    labour: &'a [Labour],
    skill: Option<&str>,
    availability: Option<Availability>,
) -> Vec<&'a Labour> {
    labour
        .iter()
        .filter(|l| skill.is_none_or(|s| l.skill == s))
        .filter(|l| availability.is_none_or(|a| l.availability == a))
        .collect()
}

fn builtin_equipment() -> Vec<Equipment> {
    vec![
        equipment(
            "eq1",
            "Mahindra 575 DI Tractor",
            "Reliable mid-size tractor for ploughing and haulage",
            "45 HP, 4WD, 1500 kg lift",
            "Nashik, Maharashtra",
            [500, 3000, 11000],
        ),
        equipment(
            "eq2",
            "Combine Harvester",
            "Self-propelled harvester for wheat, paddy and soybean",
            "14 ft cutter bar, 101 HP",
            "Ludhiana, Punjab",
            [2500, 15000, 55000],
        ),
        equipment(
            "eq3",
            "Rotavator",
            "Tractor-mounted rotary tiller for seedbed preparation",
            "7 ft working width, 42 blades",
            "Indore, Madhya Pradesh",
            [300, 1800, 6500],
        ),
        equipment(
            "eq4",
            "Boom Sprayer",
            "Tractor-mounted sprayer for pesticides and liquid fertiliser",
            "600 L tank, 12 m boom",
            "Guntur, Andhra Pradesh",
            [400, 2400, 8500],
        ),
        equipment(
            "eq5",
            "Seed Drill",
            "Multi-crop seed drill with fertiliser attachment",
            "9 rows, adjustable spacing",
            "Hisar, Haryana",
            [350, 2100, 7500],
        ),
        equipment(
            "eq6",
            "Power Tiller",
            "Walk-behind tiller for small and terraced plots",
            "12 HP diesel, 5 forward gears",
            "Thrissur, Kerala",
            [250, 1500, 5200],
        ),
    ]
}

fn labour(
    id: &str,
    name: &str,
    skill: &str,
    experience: u32,
    location: &str,
    daily_charge: u64,
    availability: Availability,
) -> Labour {
    Labour {
        id: id.to_string(),
        name: name.to_string(),
        skill: skill.to_string(),
        experience,
        location: location.to_string(),
        daily_charge,
        availability,
    }
}

fn builtin_labour() -> Vec<Labour> {
    use Availability::{Available, Booked};

    vec![
        labour("l1", "Ramesh Patil", "Tractor Operator", 8, "Nashik, Maharashtra", 600, Available),
        labour("l2", "Sunita Devi", "Harvesting", 5, "Ludhiana, Punjab", 450, Available),
        labour("l3", "Mohan Yadav", "Irrigation", 12, "Indore, Madhya Pradesh", 500, Booked),
        labour("l4", "Lakshmi Reddy", "Pesticide Spraying", 6, "Guntur, Andhra Pradesh", 480, Available),
        labour("l5", "Gurpreet Singh", "Tractor Operator", 10, "Hisar, Haryana", 650, Available),
        labour("l6", "Anil Kumar", "Sowing", 3, "Thrissur, Kerala", 400, Available),
    ]
}

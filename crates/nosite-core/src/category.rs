use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// The fixed set of business categories a search can probe.
///
/// Each variant maps one-to-one onto an upstream place-type token
/// (see [`Category::as_str`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Restaurant,
    Cafe,
    Bakery,
    Bar,
    BeautySalon,
    HairCare,
    Spa,
    CarRepair,
    CarWash,
    Plumber,
    Electrician,
    Locksmith,
    Painter,
    RoofingContractor,
    Florist,
    Laundry,
    Dentist,
    Gym,
    ClothingStore,
    ConvenienceStore,
}

impl Category {
    pub const ALL: [Category; 20] = [
        Category::Restaurant,
        Category::Cafe,
        Category::Bakery,
        Category::Bar,
        Category::BeautySalon,
        Category::HairCare,
        Category::Spa,
        Category::CarRepair,
        Category::CarWash,
        Category::Plumber,
        Category::Electrician,
        Category::Locksmith,
        Category::Painter,
        Category::RoofingContractor,
        Category::Florist,
        Category::Laundry,
        Category::Dentist,
        Category::Gym,
        Category::ClothingStore,
        Category::ConvenienceStore,
    ];

    /// The upstream place-type token sent as the `type` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Restaurant => "restaurant",
            Category::Cafe => "cafe",
            Category::Bakery => "bakery",
            Category::Bar => "bar",
            Category::BeautySalon => "beauty_salon",
            Category::HairCare => "hair_care",
            Category::Spa => "spa",
            Category::CarRepair => "car_repair",
            Category::CarWash => "car_wash",
            Category::Plumber => "plumber",
            Category::Electrician => "electrician",
            Category::Locksmith => "locksmith",
            Category::Painter => "painter",
            Category::RoofingContractor => "roofing_contractor",
            Category::Florist => "florist",
            Category::Laundry => "laundry",
            Category::Dentist => "dentist",
            Category::Gym => "gym",
            Category::ClothingStore => "clothing_store",
            Category::ConvenienceStore => "convenience_store",
        }
    }

    /// Parse a comma-separated list such as `"cafe, bakery,hair-care"`.
    ///
    /// Blank entries are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownCategory`] for the first token that is not
    /// part of the enumerated set.
    pub fn parse_list(raw: &str) -> Result<Vec<Category>, CoreError> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Category::from_str)
            .collect()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase().replace('-', "_");
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == token)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
#[path = "category_test.rs"]
mod tests;

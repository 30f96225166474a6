//! Closed vocabularies used to classify models and materials.
//!
//! Wire names follow the REST contract (`SCREAMING_SNAKE_CASE`, Cyrillic unit symbols).
//! `EnumIter` feeds selector widgets with the full option list.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unisex,
    Kids,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ModelType {
    Sport,
    #[default]
    Casual,
    Formal,
    Work,
    Outdoor,
    Special,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ModelCategory {
    Sneakers,
    Shoes,
    Boots,
    Sandals,
    Slippers,
    Loafers,
    Oxfords,
    Derby,
    #[default]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Season {
    SpringSummer,
    FallWinter,
    AllSeason,
    Demiseason,
    Custom,
}

/// Construction method of the upper-to-sole join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum LacingType {
    Glued,
    Stitched,
    Handmade,
    Combined,
    Cemented,
    Lasting,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MaterialGroup {
    Leather,
    Sole,
    Hardware,
    Lining,
    Chemical,
    Packaging,
    Textile,
    Adhesive,
    #[default]
    Other,
}

/// Units of measure as printed on warehouse documents.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, AsRefStr,
)]
pub enum UnitOfMeasure {
    /// Base unit; used whenever a unit is missing.
    #[default]
    #[serde(rename = "шт")]
    #[strum(serialize = "шт")]
    Piece,
    #[serde(rename = "пар")]
    #[strum(serialize = "пар")]
    Pair,
    #[serde(rename = "компл")]
    #[strum(serialize = "компл")]
    Set,
    #[serde(rename = "уп")]
    #[strum(serialize = "уп")]
    Pack,
    #[serde(rename = "дм²")]
    #[strum(serialize = "дм²")]
    SquareDecimeter,
    #[serde(rename = "м²")]
    #[strum(serialize = "м²")]
    SquareMeter,
    #[serde(rename = "м")]
    #[strum(serialize = "м")]
    Meter,
    #[serde(rename = "кг")]
    #[strum(serialize = "кг")]
    Kilogram,
    #[serde(rename = "г")]
    #[strum(serialize = "г")]
    Gram,
    #[serde(rename = "л")]
    #[strum(serialize = "л")]
    Liter,
    #[serde(rename = "мл")]
    #[strum(serialize = "мл")]
    Milliliter,
}

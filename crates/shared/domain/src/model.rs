//! Product models and their SUPER-BOM option catalog.
//!
//! A [`ModelDraft`] is the editable payload; a [`Model`] is the persisted entity that
//! adds identity, variants and server-computed aggregates on top of the draft.

use crate::classification::{Gender, LacingType, MaterialGroup, ModelCategory, ModelType, Season};
use crate::families::OptionFamily;
use crate::material::MaterialReference;
use crate::reference::ReferenceItem;
use crate::variant::ModelVariant;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

/// Common surface of the four selectable option families.
pub trait OptionEntry {
    const FAMILY: OptionFamily;

    /// Stable id; empty while the entry has not been assigned one yet.
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn is_default(&self) -> bool;
    fn is_active(&self) -> bool;
}

/// Looks up an entry by id.
pub fn find_entry<'a, T: OptionEntry>(entries: &'a [T], id: &str) -> Option<&'a T> {
    entries.iter().find(|entry| !entry.id().is_empty() && entry.id() == id)
}

/// First entry flagged as default.
pub fn default_entry<T: OptionEntry>(entries: &[T]) -> Option<&T> {
    entries.iter().find(|entry| entry.is_default())
}

macro_rules! option_entry {
    ($ty:ty, $family:expr, active: $active:expr) => {
        impl OptionEntry for $ty {
            const FAMILY: OptionFamily = $family;

            fn id(&self) -> &str {
                &self.id
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn is_default(&self) -> bool {
                self.is_default
            }

            fn is_active(&self) -> bool {
                let active: fn(&Self) -> bool = $active;
                active(self)
            }
        }
    };
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerforationOption {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_image: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsoleOption {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    /// Free-text material description, not a material reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seasonality: Option<Season>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness_mm: Option<f64>,
    #[serde(default)]
    pub is_default: bool,
    pub is_active: bool,
}

/// One slot of a hardware set (eyelets, laces, zipper...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareItemOption {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub material_group: MaterialGroup,
    #[serde(default)]
    pub compatible_materials: Vec<MaterialReference>,
    /// The concrete material is picked when the order is placed.
    #[serde(default)]
    pub requires_exact_selection: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareSet {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub items: Vec<HardwareItemOption>,
    #[serde(default)]
    pub is_default: bool,
    pub is_active: bool,
}

/// Configurable options of one model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperBom {
    #[serde(default)]
    pub perforation_options: Vec<PerforationOption>,
    #[serde(default)]
    pub insole_options: Vec<InsoleOption>,
    #[serde(default)]
    pub hardware_sets: Vec<HardwareSet>,
}

/// One material flow of the bill of materials: a cutting part cut from a material.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuttingPartUsage {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub part: ReferenceItem,
    pub material: MaterialReference,
    pub quantity: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumption_per_pair: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labor_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoleOption {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub material: MaterialReference,
    pub size_min: u8,
    pub size_max: u8,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SoleOption {
    #[must_use]
    pub const fn covers(&self, size: u8) -> bool {
        self.size_min <= size && size <= self.size_max
    }
}

option_entry!(PerforationOption, OptionFamily::Perforation, active: |o| o.is_active);
option_entry!(InsoleOption, OptionFamily::Insole, active: |o| o.is_active);
option_entry!(HardwareSet, OptionFamily::HardwareSet, active: |o| o.is_active);
// Sole options carry no activity flag; they are selectable while they exist.
option_entry!(SoleOption, OptionFamily::Sole, active: |_| true);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: String,
    pub file_name: String,
    pub file_type: String,
    pub url: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Editable model payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDraft {
    pub name: String,
    pub article: String,
    pub gender: Gender,
    pub model_type: ModelType,
    pub category: ModelCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_type: Option<String>,
    pub size_min: u8,
    pub size_max: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lacing_type: Option<LacingType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sole_option_id: Option<String>,
    pub is_active: bool,
    pub retail_price: f64,
    pub wholesale_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labor_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overhead_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub super_bom: SuperBom,
    #[serde(default)]
    pub cutting_parts: Vec<CuttingPartUsage>,
    #[serde(default)]
    pub sole_options: Vec<SoleOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl ModelDraft {
    /// Default sole option: the flagged entry, else the one named by `defaultSoleOptionId`.
    #[must_use]
    pub fn default_sole(&self) -> Option<&SoleOption> {
        default_entry(&self.sole_options).or_else(|| {
            self.default_sole_option_id
                .as_deref()
                .and_then(|id| find_entry(&self.sole_options, id))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KpiValue {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KpiTrend {
    Up,
    Down,
    Neutral,
}

/// Server-computed indicator shown on the model card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiBlock {
    pub title: String,
    pub value: KpiValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<KpiTrend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<String>,
}

/// A persisted product model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub uuid: String,
    #[serde(flatten)]
    pub draft: ModelDraft,
    #[serde(default)]
    pub variants: Vec<ModelVariant>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub kpis: Vec<KpiBlock>,
}

impl Model {
    #[must_use]
    pub fn variant(&self, id: &str) -> Option<&ModelVariant> {
        self.variants.iter().find(|variant| variant.id == id)
    }

    #[must_use]
    pub fn default_variant(&self) -> Option<&ModelVariant> {
        self.variants.iter().find(|variant| variant.is_default)
    }
}

impl Deref for Model {
    type Target = ModelDraft;

    fn deref(&self) -> &Self::Target {
        &self.draft
    }
}

impl DerefMut for Model {
    fn deref_mut(&mut self) -> &mut ModelDraft {
        &mut self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sole(id: &str, is_default: bool) -> SoleOption {
        SoleOption {
            id: id.to_owned(),
            name: id.to_owned(),
            size_min: 35,
            size_max: 46,
            is_default,
            ..SoleOption::default()
        }
    }

    #[test]
    fn flagged_sole_wins_over_named_default() {
        let draft = ModelDraft {
            sole_options: vec![sole("sole-a", false), sole("sole-b", true)],
            default_sole_option_id: Some("sole-a".to_owned()),
            ..ModelDraft::default()
        };
        assert_eq!(draft.default_sole().map(|s| s.id.as_str()), Some("sole-b"));
    }

    #[test]
    fn named_default_sole_is_used_without_flag() {
        let draft = ModelDraft {
            sole_options: vec![sole("sole-a", false), sole("sole-b", false)],
            default_sole_option_id: Some("sole-b".to_owned()),
            ..ModelDraft::default()
        };
        assert_eq!(draft.default_sole().map(|s| s.id.as_str()), Some("sole-b"));
    }

    #[test]
    fn entries_without_id_are_never_found() {
        let options = vec![PerforationOption { name: "x".into(), ..Default::default() }];
        assert!(find_entry(&options, "").is_none());
    }

    #[test]
    fn kpi_value_accepts_numbers_and_text() {
        let block: KpiBlock =
            serde_json::from_str(r#"{"title":"Orders","value":12,"trend":"up"}"#).unwrap();
        assert_eq!(block.value, KpiValue::Number(12.0));
        let block: KpiBlock = serde_json::from_str(r#"{"title":"Top","value":"SPORT"}"#).unwrap();
        assert_eq!(block.value, KpiValue::Text("SPORT".into()));
    }
}

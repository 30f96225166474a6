use crate::classification::{MaterialGroup, UnitOfMeasure};
use crate::model::Attachment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

/// Lightweight pointer to a material, as embedded in models and options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialReference {
    pub id: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub group: MaterialGroup,
    #[serde(default)]
    pub unit: UnitOfMeasure,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl MaterialReference {
    /// Id-only reference with placeholder display attributes.
    #[must_use]
    pub fn placeholder(id: impl Into<String>, group: MaterialGroup, unit: UnitOfMeasure) -> Self {
        Self { id: id.into(), group, unit, ..Self::default() }
    }

    /// `true` while only the id is known (code and name not yet hydrated).
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.code.is_empty() && self.name.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialSpecs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness_mm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,
    #[serde(default)]
    pub unit_primary: UnitOfMeasure,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_secondary: Option<UnitOfMeasure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialSupplyInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_time_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_order_qty: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_multiplicity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_conditions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_months: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialStockSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_stock: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reorder_point: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_stock: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warehouse_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lot_tracked: Option<bool>,
}

/// Editable material payload, as submitted to the API layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDraft {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(default)]
    pub group: MaterialGroup,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subgroup: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_critical: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub specs: MaterialSpecs,
    #[serde(default)]
    pub supply: MaterialSupplyInfo,
    #[serde(default)]
    pub stock: MaterialStockSettings,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

/// A persisted material. Ids and timestamps are issued by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub uuid: String,
    #[serde(flatten)]
    pub draft: MaterialDraft,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Material {
    /// Reference to this material carrying its display attributes.
    #[must_use]
    pub fn reference(&self) -> MaterialReference {
        MaterialReference {
            id: self.id.clone(),
            code: self.code.clone(),
            name: self.name.clone(),
            group: self.group,
            unit: self.specs.unit_primary,
            color: self.color.clone(),
        }
    }
}

impl Deref for Material {
    type Target = MaterialDraft;

    fn deref(&self) -> &Self::Target {
        &self.draft
    }
}

impl DerefMut for Material {
    fn deref_mut(&mut self) -> &mut MaterialDraft {
        &mut self.draft
    }
}

use crate::families::OptionFamily;
use crate::model::{CuttingPartUsage, HardwareItemOption};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariantStatus {
    #[default]
    Active,
    Inactive,
}

/// Per-variant selection of SUPER-BOM entries plus overrides.
///
/// Option ids are either local (`perf-0-x1`) or scoped to the owning model
/// (`<modelId>:perf-0-x1`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelVariantSpecification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perforation_option_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insole_option_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_set_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sole_option_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub customized_cutting_parts: Vec<CuttingPartUsage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub customized_hardware: Vec<HardwareItemOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ModelVariantSpecification {
    /// Selected id for `family`; blank ids count as no selection.
    #[must_use]
    pub fn option_id(&self, family: OptionFamily) -> Option<&str> {
        let id = match family {
            OptionFamily::Perforation => &self.perforation_option_id,
            OptionFamily::Insole => &self.insole_option_id,
            OptionFamily::HardwareSet => &self.hardware_set_id,
            OptionFamily::Sole => &self.sole_option_id,
        };
        id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }

    pub fn set_option_id(&mut self, family: OptionFamily, id: Option<String>) {
        let slot = match family {
            OptionFamily::Perforation => &mut self.perforation_option_id,
            OptionFamily::Insole => &mut self.insole_option_id,
            OptionFamily::HardwareSet => &mut self.hardware_set_id,
            OptionFamily::Sole => &mut self.sole_option_id,
        };
        *slot = id;
    }
}

/// Editable variant payload; `id` is absent until the variant is first saved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelVariantDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub status: VariantStatus,
    #[serde(default)]
    pub specification: ModelVariantSpecification,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_material_cost: Option<f64>,
}

/// A named, resolvable configuration of a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelVariant {
    pub id: String,
    pub model_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    pub status: VariantStatus,
    #[serde(default)]
    pub specification: ModelVariantSpecification,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_material_cost: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ModelVariant {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == VariantStatus::Active
    }

    /// Editable projection of this variant.
    #[must_use]
    pub fn to_draft(&self) -> ModelVariantDraft {
        ModelVariantDraft {
            id: Some(self.id.clone()),
            name: self.name.clone(),
            code: self.code.clone(),
            is_default: self.is_default,
            status: self.status,
            specification: self.specification.clone(),
            total_material_cost: self.total_material_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_option_ids_are_no_selection() {
        let spec = ModelVariantSpecification {
            insole_option_id: Some("  ".to_owned()),
            sole_option_id: Some("sole-0-a".to_owned()),
            ..Default::default()
        };
        assert_eq!(spec.option_id(OptionFamily::Insole), None);
        assert_eq!(spec.option_id(OptionFamily::Sole), Some("sole-0-a"));
    }

    #[test]
    fn status_uses_contract_names() {
        assert_eq!(serde_json::to_string(&VariantStatus::Inactive).unwrap(), "\"INACTIVE\"");
    }
}

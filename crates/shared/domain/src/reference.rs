use crate::constants::CUTTING_PART;
use serde::{Deserialize, Serialize};

/// An entry of a reference book (cutting parts, perforation types, lasting types).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceItem {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default = "active")]
    pub is_active: bool,
}

impl ReferenceItem {
    /// Id-only cutting part reference; display attributes are filled by a lookup later.
    #[must_use]
    pub fn cutting_part(id: impl Into<String>) -> Self {
        Self { id: id.into(), kind: CUTTING_PART.to_owned(), is_active: true, ..Self::default() }
    }
}

const fn active() -> bool {
    true
}

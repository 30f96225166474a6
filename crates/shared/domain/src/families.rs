use crate::constants::{HARDWARE_SET_PREFIX, INSOLE_PREFIX, PERFORATION_PREFIX, SOLE_PREFIX};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One selectable SUPER-BOM family. A variant picks at most one entry per family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OptionFamily {
    Perforation,
    Insole,
    HardwareSet,
    Sole,
}

impl OptionFamily {
    pub const ALL: [Self; 4] = [Self::Perforation, Self::Insole, Self::HardwareSet, Self::Sole];

    /// Field path of the family's collection in the draft/entity shape.
    #[must_use]
    pub const fn collection_path(self) -> &'static str {
        match self {
            Self::Perforation => "superBom.perforationOptions",
            Self::Insole => "superBom.insoleOptions",
            Self::HardwareSet => "superBom.hardwareSets",
            Self::Sole => "soleOptions",
        }
    }

    /// Field name of the family's reference in a variant specification.
    #[must_use]
    pub const fn specification_field(self) -> &'static str {
        match self {
            Self::Perforation => "perforationOptionId",
            Self::Insole => "insoleOptionId",
            Self::HardwareSet => "hardwareSetId",
            Self::Sole => "soleOptionId",
        }
    }

    #[must_use]
    pub const fn id_prefix(self) -> &'static str {
        match self {
            Self::Perforation => PERFORATION_PREFIX,
            Self::Insole => INSOLE_PREFIX,
            Self::HardwareSet => HARDWARE_SET_PREFIX,
            Self::Sole => SOLE_PREFIX,
        }
    }

    #[must_use]
    pub const fn flag(self) -> FamilySet {
        match self {
            Self::Perforation => FamilySet::PERFORATION,
            Self::Insole => FamilySet::INSOLE,
            Self::HardwareSet => FamilySet::HARDWARE,
            Self::Sole => FamilySet::SOLE,
        }
    }
}

impl fmt::Display for OptionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Perforation => "perforation",
            Self::Insole => "insole",
            Self::HardwareSet => "hardware set",
            Self::Sole => "sole",
        })
    }
}

bitflags! {
    /// A set of option families, e.g. the families a variant resolved.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct FamilySet: u8 {
        const PERFORATION = 1 << 0;
        const INSOLE = 1 << 1;
        const HARDWARE = 1 << 2;
        const SOLE = 1 << 3;

        const ALL = Self::PERFORATION.bits()
            | Self::INSOLE.bits()
            | Self::HARDWARE.bits()
            | Self::SOLE.bits();
    }
}

impl FamilySet {
    /// Families of `Self::ALL` missing from this set.
    #[must_use]
    pub fn missing(self) -> impl Iterator<Item = OptionFamily> {
        OptionFamily::ALL.into_iter().filter(move |family| !self.contains(family.flag()))
    }
}

impl From<OptionFamily> for FamilySet {
    fn from(family: OptionFamily) -> Self {
        family.flag()
    }
}

//! Regional policy records

use std::collections::BTreeSet;

use landfill_types::MaterialType;
use serde::{Deserialize, Serialize};

/// Static rule set for one jurisdiction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalPolicy {
    /// Region code this record is keyed under (e.g. "US-CA", "default")
    pub code: String,
    /// Display name (e.g. "California")
    pub name: String,
    pub country: String,
    pub curbside_recycling: CurbsideRecycling,
    pub organics: OrganicsProgram,
    pub special_disposal: SpecialDisposalRules,
    pub notes: String,
}

/// What the regular recycling bin takes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurbsideRecycling {
    /// Accepted plastic resin codes
    pub plastic: BTreeSet<u8>,
    pub paper: bool,
    pub cardboard: bool,
    pub metal: bool,
    pub glass: bool,
}

impl CurbsideRecycling {
    /// Whether a plastic with this resin code goes in the bin
    pub fn accepts_resin(&self, code: u8) -> bool {
        self.plastic.contains(&code)
    }

    /// Whether the bin takes a non-plastic material category.
    ///
    /// Plastics are decided by resin code; categories without a flag here
    /// (electronics, organics, ...) are never curbside.
    pub fn accepts_type(&self, material_type: MaterialType) -> bool {
        match material_type {
            MaterialType::Paper => self.paper,
            MaterialType::Metal => self.metal,
            MaterialType::Glass => self.glass,
            _ => false,
        }
    }
}

/// Food and yard waste program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganicsProgram {
    pub composting_available: bool,
    pub curbside_pickup: bool,
    pub accepted_items: Vec<String>,
}

/// Handling rule for one special-disposal category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialDisposalRule {
    /// Whether special handling is mandatory
    pub required: bool,
    /// Channel, e.g. "drop-off"
    pub method: String,
    pub notes: String,
}

impl SpecialDisposalRule {
    pub fn drop_off(required: bool, notes: impl Into<String>) -> Self {
        Self {
            required,
            method: "drop-off".into(),
            notes: notes.into(),
        }
    }
}

/// Special-disposal categories a region defines rules for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialDisposalCategory {
    Electronics,
    Hazardous,
    Batteries,
}

impl SpecialDisposalCategory {
    /// Category used for a special-disposal material.
    ///
    /// Only electronics get their own rule; batteries, chemicals and anything
    /// else flagged for special handling fall under the hazardous rule.
    pub fn for_material(material_type: MaterialType) -> Self {
        match material_type {
            MaterialType::Electronics => Self::Electronics,
            _ => Self::Hazardous,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialDisposalRules {
    pub electronics: SpecialDisposalRule,
    pub hazardous: SpecialDisposalRule,
    pub batteries: SpecialDisposalRule,
}

impl SpecialDisposalRules {
    pub fn rule(&self, category: SpecialDisposalCategory) -> &SpecialDisposalRule {
        match category {
            SpecialDisposalCategory::Electronics => &self.electronics,
            SpecialDisposalCategory::Hazardous => &self.hazardous,
            SpecialDisposalCategory::Batteries => &self.batteries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curbside() -> CurbsideRecycling {
        CurbsideRecycling {
            plastic: [1, 2].into_iter().collect(),
            paper: true,
            cardboard: true,
            metal: false,
            glass: true,
        }
    }

    #[test]
    fn resin_membership() {
        let bin = curbside();
        assert!(bin.accepts_resin(1));
        assert!(!bin.accepts_resin(5));
    }

    #[test]
    fn type_flags() {
        let bin = curbside();
        assert!(bin.accepts_type(MaterialType::Paper));
        assert!(!bin.accepts_type(MaterialType::Metal));
        assert!(!bin.accepts_type(MaterialType::Plastic));
        assert!(!bin.accepts_type(MaterialType::Electronics));
    }

    #[test]
    fn special_category_for_material() {
        assert_eq!(
            SpecialDisposalCategory::for_material(MaterialType::Electronics),
            SpecialDisposalCategory::Electronics
        );
        assert_eq!(
            SpecialDisposalCategory::for_material(MaterialType::Hazardous),
            SpecialDisposalCategory::Hazardous
        );
        assert_eq!(
            SpecialDisposalCategory::for_material(MaterialType::Glass),
            SpecialDisposalCategory::Hazardous
        );
    }
}

//! Seed item catalog.
//!
//! The catalog is an ordered slice: fuzzy matching walks it front to back and
//! the first hit wins, so reordering entries changes results.

use landfill_types::{MaterialRecord, MaterialType, Recyclability};

/// One known waste item and its attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Lowercase lookup key
    pub key: &'static str,
    pub material: &'static str,
    pub material_type: MaterialType,
    pub recyclable: Recyclability,
    pub compostable: bool,
    pub special_disposal: bool,
    pub resin_code: Option<u8>,
    pub notes: Option<&'static str>,
}

impl CatalogEntry {
    const fn new(
        key: &'static str,
        material: &'static str,
        material_type: MaterialType,
        recyclable: Recyclability,
    ) -> Self {
        Self {
            key,
            material,
            material_type,
            recyclable,
            compostable: false,
            special_disposal: false,
            resin_code: None,
            notes: None,
        }
    }

    const fn resin(mut self, code: u8) -> Self {
        self.resin_code = Some(code);
        self
    }

    const fn compostable(mut self) -> Self {
        self.compostable = true;
        self
    }

    const fn special(mut self) -> Self {
        self.special_disposal = true;
        self
    }

    const fn note(mut self, notes: &'static str) -> Self {
        self.notes = Some(notes);
        self
    }

    /// Build an identified record for this entry
    pub fn to_record(&self) -> MaterialRecord {
        MaterialRecord {
            identified: true,
            item: self.key.to_string(),
            material: self.material.to_string(),
            material_type: self.material_type,
            recyclable: self.recyclable,
            compostable: self.compostable,
            special_disposal: self.special_disposal,
            resin_code: self.resin_code,
            confidence: None,
            source: None,
            notes: self.notes.map(str::to_string),
        }
    }
}

use MaterialType::*;
use Recyclability::{Conditional, No, Yes};

pub const ITEM_CATALOG: &[CatalogEntry] = &[
    // Plastics
    CatalogEntry::new("plastic bottle", "PET plastic", Plastic, Yes).resin(1),
    CatalogEntry::new("milk jug", "HDPE plastic", Plastic, Yes).resin(2),
    CatalogEntry::new("plastic bag", "LDPE plastic", Plastic, No).resin(4),
    CatalogEntry::new("yogurt container", "PP plastic", Plastic, Yes).resin(5),
    CatalogEntry::new("styrofoam", "PS plastic", Plastic, No).resin(6),
    // Paper
    CatalogEntry::new("cardboard", "cardboard", Paper, Yes),
    CatalogEntry::new("newspaper", "newsprint", Paper, Yes),
    CatalogEntry::new("magazine", "glossy paper", Paper, Yes),
    CatalogEntry::new("pizza box", "cardboard", Paper, Conditional)
        .note("Only if clean and grease-free"),
    // Metals
    CatalogEntry::new("aluminum can", "aluminum", Metal, Yes),
    CatalogEntry::new("tin can", "steel", Metal, Yes),
    CatalogEntry::new("aerosol can", "aluminum/steel", Metal, Yes).note("Must be empty"),
    // Glass
    CatalogEntry::new("glass bottle", "glass", Glass, Yes),
    CatalogEntry::new("glass jar", "glass", Glass, Yes),
    CatalogEntry::new("window glass", "tempered glass", Glass, No).special(),
    // Electronics and batteries
    CatalogEntry::new("battery", "various", Hazardous, No).special(),
    CatalogEntry::new("phone", "electronics", Electronics, No).special(),
    CatalogEntry::new("computer", "electronics", Electronics, No).special(),
    CatalogEntry::new("light bulb", "glass/electronics", Electronics, No).special(),
    // Organics
    CatalogEntry::new("food waste", "organic", Organic, No).compostable(),
    CatalogEntry::new("yard waste", "organic", Organic, No).compostable(),
    // Hazardous
    CatalogEntry::new("paint", "chemical", Hazardous, No).special(),
    CatalogEntry::new("motor oil", "petroleum", Hazardous, No).special(),
    CatalogEntry::new("cleaning product", "chemical", Hazardous, No).special(),
];

/// Exact catalog lookup by normalized key
pub fn lookup(key: &str) -> Option<&'static CatalogEntry> {
    ITEM_CATALOG.iter().find(|entry| entry.key == key)
}

/// Keyword bags for the fallback pass, in match order
pub(crate) const KEYWORD_CATEGORIES: &[(MaterialType, &[&str])] = &[
    (Plastic, &["plastic", "polymer", "bottle", "container", "packaging"]),
    (Paper, &["paper", "cardboard", "box", "newspaper", "magazine"]),
    (Metal, &["metal", "aluminum", "steel", "can", "foil"]),
    (Glass, &["glass", "jar", "bottle"]),
    (Electronics, &["electronic", "battery", "phone", "computer", "device"]),
    (Organic, &["food", "organic", "compost", "yard", "plant"]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique_and_normalized() {
        let mut seen = HashSet::new();
        for entry in ITEM_CATALOG {
            assert!(seen.insert(entry.key), "duplicate key {}", entry.key);
            assert_eq!(entry.key, entry.key.trim().to_lowercase());
        }
    }

    #[test]
    fn resin_codes_are_in_range() {
        for entry in ITEM_CATALOG {
            if let Some(code) = entry.resin_code {
                assert!((1..=7).contains(&code), "{} has code {}", entry.key, code);
                assert_eq!(entry.material_type, Plastic);
            }
        }
    }

    #[test]
    fn lookup_finds_entries() {
        let entry = lookup("pizza box").unwrap();
        assert_eq!(entry.recyclable, Conditional);
        assert_eq!(entry.notes, Some("Only if clean and grease-free"));
        assert!(lookup("Pizza Box").is_none());
    }

    #[test]
    fn record_copies_attributes() {
        let record = lookup("battery").unwrap().to_record();
        assert!(record.identified);
        assert_eq!(record.item, "battery");
        assert_eq!(record.material_type, Hazardous);
        assert!(record.special_disposal);
        assert!(record.confidence.is_none());
    }
}

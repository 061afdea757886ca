//! Material classification types
//!
//! A [`MaterialRecord`] is the output of identification. It is created fresh
//! for every request and never mutated afterwards.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Broad material category used by every downstream rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialType {
    Plastic,
    Paper,
    Metal,
    Glass,
    Electronics,
    Organic,
    Hazardous,
    Unknown,
}

impl MaterialType {
    /// Lowercase name, as used in facility `acceptedMaterials` lists
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plastic => "plastic",
            Self::Paper => "paper",
            Self::Metal => "metal",
            Self::Glass => "glass",
            Self::Electronics => "electronics",
            Self::Organic => "organic",
            Self::Hazardous => "hazardous",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an item can go in a recycling stream.
///
/// Serialized as JSON `true`/`false`, or the strings `"conditional"` and
/// `"maybe"` for the two uncertain cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recyclability {
    Yes,
    No,
    /// Recyclable only under a stated condition (e.g. grease-free)
    Conditional,
    /// Guessed from a keyword; not confirmed
    Maybe,
}

impl Recyclability {
    /// Only a definite `Yes` enters the recycling rules
    pub fn is_definite(&self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl fmt::Display for Recyclability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Yes => "true",
            Self::No => "false",
            Self::Conditional => "conditional",
            Self::Maybe => "maybe",
        };
        f.write_str(s)
    }
}

impl From<bool> for Recyclability {
    fn from(value: bool) -> Self {
        if value {
            Self::Yes
        } else {
            Self::No
        }
    }
}

impl Serialize for Recyclability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Yes => serializer.serialize_bool(true),
            Self::No => serializer.serialize_bool(false),
            Self::Conditional => serializer.serialize_str("conditional"),
            Self::Maybe => serializer.serialize_str("maybe"),
        }
    }
}

impl<'de> Deserialize<'de> for Recyclability {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Flag(bool),
            Word(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Flag(flag) => Ok(flag.into()),
            Repr::Word(word) => match word.as_str() {
                "conditional" => Ok(Self::Conditional),
                "maybe" => Ok(Self::Maybe),
                "true" => Ok(Self::Yes),
                "false" => Ok(Self::No),
                other => Err(serde::de::Error::unknown_variant(
                    other,
                    &["true", "false", "conditional", "maybe"],
                )),
            },
        }
    }
}

/// Where an identification came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentificationSource {
    Text,
    Image,
}

/// Result of identifying a waste item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRecord {
    /// False when nothing in the catalog or keyword bags matched
    pub identified: bool,

    /// Catalog key, or the normalized description for keyword/unknown results
    pub item: String,

    /// Human-readable material name (e.g. "PET plastic")
    pub material: String,

    /// Material category
    #[serde(rename = "type")]
    pub material_type: MaterialType,

    pub recyclable: Recyclability,

    #[serde(default, skip_serializing_if = "is_false")]
    pub compostable: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub special_disposal: bool,

    /// Plastic resin identification code (1-7)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resin_code: Option<u8>,

    /// Match confidence in [0, 1]; absent for exact catalog matches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<IdentificationSource>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl MaterialRecord {
    /// Record for an item nothing matched
    pub fn unidentified(item: impl Into<String>) -> Self {
        Self {
            identified: false,
            item: item.into(),
            material: "unknown".into(),
            material_type: MaterialType::Unknown,
            recyclable: Recyclability::No,
            compostable: false,
            special_disposal: false,
            resin_code: None,
            confidence: None,
            source: None,
            notes: Some(
                "Item not recognized. Please provide more details or consult local waste management."
                    .into(),
            ),
        }
    }

    /// Set the match confidence
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence.clamp(0.0, 1.0));
        self
    }

    /// Set the identification source
    pub fn with_source(mut self, source: IdentificationSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Replace the notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

use std::sync::Arc;

use landfill_types::{IdentificationSource, MaterialRecord, MaterialType, Recyclability};
use tracing::{debug, warn};

use crate::catalog::{lookup, KEYWORD_CATEGORIES, ITEM_CATALOG};
use crate::error::{IdentifyError, Result};
use crate::image::{ImageClassifier, MockImageClassifier};

/// Confidence attached to substring matches against the catalog
pub const FUZZY_CONFIDENCE: f64 = 0.8;

/// Confidence attached to keyword-bag classifications
pub const KEYWORD_CONFIDENCE: f64 = 0.5;

/// Maps descriptions and images to material records.
///
/// Stateless apart from the image classifier it delegates to. Every call
/// returns a fresh record.
#[derive(Debug, Clone)]
pub struct MaterialIdentifier {
    classifier: Arc<dyn ImageClassifier>,
}

impl MaterialIdentifier {
    /// Identifier backed by the mock image classifier
    pub fn new() -> Self {
        Self::with_classifier(Arc::new(MockImageClassifier::new()))
    }

    /// Identifier backed by a custom image classifier
    pub fn with_classifier(classifier: Arc<dyn ImageClassifier>) -> Self {
        Self { classifier }
    }

    /// Identify an item from a free-text description.
    ///
    /// Fails with [`IdentifyError::InvalidDescription`] on blank input. An
    /// input that matches nothing is not an error: it comes back with
    /// `identified: false`.
    pub fn identify_from_text(&self, description: &str) -> Result<MaterialRecord> {
        let normalized = description.trim().to_lowercase();
        if normalized.is_empty() {
            warn!("rejected blank description");
            return Err(IdentifyError::InvalidDescription);
        }

        if let Some(entry) = lookup(&normalized) {
            debug!(item = entry.key, "exact catalog match");
            return Ok(entry.to_record().with_source(IdentificationSource::Text));
        }

        let first_word = normalized.split(' ').next().unwrap_or(&normalized);
        if let Some(entry) = ITEM_CATALOG
            .iter()
            .find(|entry| normalized.contains(entry.key) || entry.key.contains(first_word))
        {
            debug!(input = %normalized, item = entry.key, "fuzzy catalog match");
            return Ok(entry
                .to_record()
                .with_confidence(FUZZY_CONFIDENCE)
                .with_source(IdentificationSource::Text));
        }

        if let Some(material_type) = classify_by_keywords(&normalized) {
            debug!(input = %normalized, %material_type, "keyword classification");
            return Ok(keyword_record(normalized, material_type));
        }

        debug!(input = %normalized, "no match");
        Ok(MaterialRecord::unidentified(normalized).with_source(IdentificationSource::Text))
    }

    /// Identify an item from an encoded image.
    ///
    /// The default classifier is a mock; see [`MockImageClassifier`].
    pub fn identify_from_image(&self, image: &[u8]) -> Result<MaterialRecord> {
        if image.is_empty() {
            warn!("rejected empty image payload");
            return Err(IdentifyError::InvalidImage);
        }

        let classification = self.classifier.classify(image)?;
        debug!(
            classifier = self.classifier.name(),
            item = %classification.item,
            confidence = classification.confidence,
            "image classified"
        );

        let record = match lookup(&classification.item) {
            Some(entry) => entry.to_record(),
            None => MaterialRecord::unidentified(classification.item),
        };

        Ok(record
            .with_confidence(classification.confidence)
            .with_source(IdentificationSource::Image)
            .with_notes("Identified from image analysis"))
    }

    /// Catalog keys in lookup order
    pub fn all_items(&self) -> Vec<&'static str> {
        ITEM_CATALOG.iter().map(|entry| entry.key).collect()
    }
}

impl Default for MaterialIdentifier {
    fn default() -> Self {
        Self::new()
    }
}

fn classify_by_keywords(description: &str) -> Option<MaterialType> {
    KEYWORD_CATEGORIES
        .iter()
        .find(|(_, words)| words.iter().any(|word| description.contains(word)))
        .map(|(material_type, _)| *material_type)
}

fn keyword_record(item: String, material_type: MaterialType) -> MaterialRecord {
    let recyclable = match material_type {
        MaterialType::Plastic | MaterialType::Paper | MaterialType::Metal | MaterialType::Glass => {
            Recyclability::Maybe
        }
        _ => Recyclability::No,
    };

    MaterialRecord {
        identified: true,
        item,
        material: material_type.as_str().to_string(),
        material_type,
        recyclable,
        compostable: false,
        special_disposal: false,
        resin_code: None,
        confidence: Some(KEYWORD_CONFIDENCE),
        source: Some(IdentificationSource::Text),
        notes: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{ImageClassification, MOCK_CANDIDATES};

    fn identifier() -> MaterialIdentifier {
        MaterialIdentifier::with_classifier(Arc::new(MockImageClassifier::seeded(42)))
    }

    #[test]
    fn every_catalog_key_matches_exactly() {
        let id = identifier();
        for key in id.all_items() {
            let record = id.identify_from_text(key).unwrap();
            assert!(record.identified, "{} not identified", key);
            assert_eq!(record.item, key);
            assert!(record.confidence.is_none(), "{} got a confidence", key);
        }
    }

    #[test]
    fn plastic_bottle_attributes() {
        let record = identifier().identify_from_text("plastic bottle").unwrap();
        assert_eq!(record.material, "PET plastic");
        assert_eq!(record.material_type, MaterialType::Plastic);
        assert_eq!(record.recyclable, Recyclability::Yes);
        assert_eq!(record.resin_code, Some(1));
    }

    #[test]
    fn input_is_case_and_whitespace_insensitive() {
        let record = identifier().identify_from_text("  ALUMINUM CAN ").unwrap();
        assert_eq!(record.item, "aluminum can");
        assert_eq!(record.material_type, MaterialType::Metal);
        assert!(record.confidence.is_none());
    }

    #[test]
    fn containing_a_key_is_a_fuzzy_match() {
        let record = identifier().identify_from_text("empty plastic bottle").unwrap();
        assert_eq!(record.item, "plastic bottle");
        assert_eq!(record.confidence, Some(FUZZY_CONFIDENCE));
    }

    // Golden cases for first-match order. These pin current behavior of the
    // substring rule, including its surprising hits.
    #[test]
    fn fuzzy_first_match_follows_catalog_order() {
        let id = identifier();
        let cases = [
            // first word "plastic" is inside "plastic bottle", the first entry
            ("plastic container", "plastic bottle"),
            ("plastic wrap", "plastic bottle"),
            // "cardboard box" contains the key "cardboard"
            ("cardboard box", "cardboard"),
            // first word "glass" hits "glass bottle" before "glass jar"
            ("glass vase", "glass bottle"),
            // "can" is inside "aluminum can" before "tin can"
            ("can", "aluminum can"),
            ("old phone charger", "phone"),
            ("food scraps", "food waste"),
        ];
        for (input, expected) in cases {
            let record = id.identify_from_text(input).unwrap();
            assert_eq!(record.item, expected, "input {:?}", input);
            assert_eq!(record.confidence, Some(FUZZY_CONFIDENCE));
        }
    }

    #[test]
    fn keyword_fallback_classifies_category() {
        let id = identifier();

        let record = id.identify_from_text("used packaging").unwrap();
        assert_eq!(record.material_type, MaterialType::Plastic);
        assert_eq!(record.material, "plastic");
        assert_eq!(record.item, "used packaging");
        assert_eq!(record.recyclable, Recyclability::Maybe);
        assert_eq!(record.confidence, Some(KEYWORD_CONFIDENCE));

        let record = id.identify_from_text("broken device").unwrap();
        assert_eq!(record.material_type, MaterialType::Electronics);
        assert_eq!(record.recyclable, Recyclability::No);

        let record = id.identify_from_text("dead houseplant").unwrap();
        assert_eq!(record.material_type, MaterialType::Organic);
    }

    #[test]
    fn unknown_items_are_unidentified() {
        let id = identifier();
        for input in ["quantum flux capacitor", "unknown weird item"] {
            let record = id.identify_from_text(input).unwrap();
            assert!(!record.identified, "{} identified", input);
            assert_eq!(record.material, "unknown");
            assert_eq!(record.material_type, MaterialType::Unknown);
        }
    }

    #[test]
    fn blank_description_is_invalid() {
        let id = identifier();
        assert_eq!(id.identify_from_text(""), Err(IdentifyError::InvalidDescription));
        assert_eq!(id.identify_from_text("   "), Err(IdentifyError::InvalidDescription));
    }

    #[test]
    fn image_identification_uses_classifier() {
        let record = identifier().identify_from_image(b"mock_image_data").unwrap();
        assert!(record.identified);
        assert!(MOCK_CANDIDATES.contains(&record.item.as_str()));
        assert_eq!(record.source, Some(IdentificationSource::Image));
        assert_eq!(record.confidence, Some(0.85));
        assert_eq!(record.notes.as_deref(), Some("Identified from image analysis"));
    }

    #[test]
    fn empty_image_is_invalid() {
        assert_eq!(
            identifier().identify_from_image(&[]),
            Err(IdentifyError::InvalidImage)
        );
    }

    #[derive(Debug)]
    struct FixedClassifier(&'static str);

    impl ImageClassifier for FixedClassifier {
        fn name(&self) -> &str {
            "fixed"
        }

        fn classify(&self, _image: &[u8]) -> Result<ImageClassification> {
            Ok(ImageClassification {
                item: self.0.to_string(),
                confidence: 0.6,
            })
        }
    }

    #[test]
    fn custom_classifier_is_used() {
        let id = MaterialIdentifier::with_classifier(Arc::new(FixedClassifier("motor oil")));
        let record = id.identify_from_image(b"img").unwrap();
        assert_eq!(record.item, "motor oil");
        assert_eq!(record.material_type, MaterialType::Hazardous);
        assert_eq!(record.confidence, Some(0.6));
    }

    #[test]
    fn classifier_item_outside_catalog_is_unidentified() {
        let id = MaterialIdentifier::with_classifier(Arc::new(FixedClassifier("sofa")));
        let record = id.identify_from_image(b"img").unwrap();
        assert!(!record.identified);
        assert_eq!(record.item, "sofa");
    }
}

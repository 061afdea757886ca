//! # landfill-identify
//!
//! Material identification: maps a free-text description, or an image payload,
//! to a [`MaterialRecord`](landfill_types::MaterialRecord).
//!
//! ## Text identification
//!
//! Four passes, first hit wins:
//!
//! 1. **Exact**: the normalized description is a catalog key
//! 2. **Fuzzy**: the description contains a catalog key, or a key contains the
//!    description's first word (catalog order decides ties; confidence 0.8)
//! 3. **Keyword**: a category keyword appears anywhere (confidence 0.5)
//! 4. **Unidentified**: `identified: false`, material `"unknown"`
//!
//! ## Image identification
//!
//! Images go through an [`ImageClassifier`]. The only implementation shipped
//! here is [`MockImageClassifier`], which picks a random canned item. It is a
//! placeholder for a vision model and its output must not be relied on.

pub mod catalog;
pub mod error;
pub mod identifier;
pub mod image;

pub use catalog::{CatalogEntry, ITEM_CATALOG};
pub use error::{IdentifyError, Result};
pub use identifier::MaterialIdentifier;
pub use image::{ImageClassification, ImageClassifier, MockImageClassifier};

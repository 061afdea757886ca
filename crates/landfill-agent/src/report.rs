//! Pipeline results

use landfill_schedule::TimingRecommendation;
use landfill_types::{
    DisposalMethod, DisposalRecommendation, Facility, IdentificationSource, MaterialRecord,
    MaterialType, Recyclability,
};
use serde::{Serialize, Serializer};

/// What the item is made of
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialSummary {
    pub material: String,
    #[serde(rename = "type")]
    pub material_type: MaterialType,
    pub recyclable: Recyclability,
    pub compostable: bool,
    pub special_disposal: bool,
}

impl From<&MaterialRecord> for MaterialSummary {
    fn from(record: &MaterialRecord) -> Self {
        Self {
            material: record.material.clone(),
            material_type: record.material_type,
            recyclable: record.recyclable,
            compostable: record.compostable,
            special_disposal: record.special_disposal,
        }
    }
}

/// How to get rid of it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisposalSummary {
    pub method: DisposalMethod,
    pub curbside_accepted: bool,
    pub instructions: String,
    /// Display name of the deciding policy
    pub region: String,
}

impl From<&DisposalRecommendation> for DisposalSummary {
    fn from(rec: &DisposalRecommendation) -> Self {
        Self {
            method: rec.method,
            curbside_accepted: rec.curbside_accepted,
            instructions: rec.notes.clone(),
            region: rec.region.clone(),
        }
    }
}

/// Complete guidance for one item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisposalReport {
    pub item: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    pub source: IdentificationSource,
    pub material_info: MaterialSummary,
    pub disposal: DisposalSummary,
    pub timing: TimingRecommendation,
    /// Nearest matching drop-off sites; `None` when the bin takes the item
    /// or nothing nearby matches
    pub facilities: Option<Vec<Facility>>,
    pub tips: Vec<String>,
}

/// Why a request produced no report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessFailure {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    pub suggestion: String,
}

/// Result of running the pipeline on one input.
///
/// Serializes as the report or the failure with a `success` flag merged in.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessOutcome {
    Success(Box<DisposalReport>),
    Failure(ProcessFailure),
}

impl ProcessOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn report(&self) -> Option<&DisposalReport> {
        match self {
            Self::Success(report) => Some(report),
            Self::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ProcessFailure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }
}

#[derive(Serialize)]
struct Flagged<'a, T> {
    success: bool,
    #[serde(flatten)]
    body: &'a T,
}

impl Serialize for ProcessOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success(report) => Flagged {
                success: true,
                body: report.as_ref(),
            }
            .serialize(serializer),
            Self::Failure(failure) => Flagged {
                success: false,
                body: failure,
            }
            .serialize(serializer),
        }
    }
}

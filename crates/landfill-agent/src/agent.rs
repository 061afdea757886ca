//! EnvironmentalAgent implementation
//!
//! The agent owns one instance of each pipeline service. All tables are
//! built at construction; requests only read them.

use landfill_facilities::{rank_by_distance, FacilityLocator};
use landfill_identify::{IdentifyError, MaterialIdentifier};
use landfill_policy::{DisposalPolicyService, RegionalPolicy};
use landfill_schedule::{DisposalTimeService, Schedule};
use landfill_types::{
    normalize_region, Facility, FacilityType, IdentificationSource, MaterialRecord,
};
use tracing::{info, warn};

use crate::config::{AgentConfig, ProcessOptions};
use crate::report::{DisposalReport, ProcessFailure, ProcessOutcome};
use crate::tips::disposal_tips;

/// Which input path a request took
#[derive(Debug, Clone, Copy)]
enum InputKind {
    Text,
    Image,
}

impl InputKind {
    fn source(self) -> IdentificationSource {
        match self {
            Self::Text => IdentificationSource::Text,
            Self::Image => IdentificationSource::Image,
        }
    }

    fn invalid_input_suggestion(self) -> &'static str {
        match self {
            Self::Text => "Please enter a description of the item",
            Self::Image => "Please capture or upload an image of the item",
        }
    }

    fn unidentified_error(self) -> &'static str {
        match self {
            Self::Text => "Item could not be identified",
            Self::Image => "Item could not be identified from image",
        }
    }

    fn unidentified_suggestion(self) -> &'static str {
        match self {
            Self::Text => "Please provide more details or try uploading an image",
            Self::Image => "Please try a clearer image or enter a text description",
        }
    }
}

/// Facade over identification, policy, facility and schedule lookups.
#[derive(Debug, Clone)]
pub struct EnvironmentalAgent {
    config: AgentConfig,

    /// Region for requests that do not name one
    region: String,

    identifier: MaterialIdentifier,
    policies: DisposalPolicyService,
    facilities: FacilityLocator,
    schedules: DisposalTimeService,
}

impl EnvironmentalAgent {
    /// Agent with built-in tables and default configuration
    pub fn new() -> Self {
        Self::with_config(AgentConfig::default())
    }

    pub fn with_config(config: AgentConfig) -> Self {
        Self {
            region: config.default_region.clone(),
            config,
            identifier: MaterialIdentifier::new(),
            policies: DisposalPolicyService::new(),
            facilities: FacilityLocator::new(),
            schedules: DisposalTimeService::new(),
        }
    }

    /// Replace the identifier, e.g. to plug in a different image classifier
    pub fn with_identifier(mut self, identifier: MaterialIdentifier) -> Self {
        self.identifier = identifier;
        self
    }

    pub fn with_policies(mut self, policies: DisposalPolicyService) -> Self {
        self.policies = policies;
        self
    }

    pub fn with_facilities(mut self, facilities: FacilityLocator) -> Self {
        self.facilities = facilities;
        self
    }

    pub fn with_schedules(mut self, schedules: DisposalTimeService) -> Self {
        self.schedules = schedules;
        self
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Current default region
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Change the default region for later requests
    pub fn set_region(&mut self, region: impl Into<String>) {
        self.region = region.into();
    }

    /// Full guidance for a free-text description
    pub fn process_text_input(&self, description: &str, options: &ProcessOptions) -> ProcessOutcome {
        let identified = self.identifier.identify_from_text(description);
        self.process(identified, InputKind::Text, Some(description), options)
    }

    /// Full guidance for an encoded image
    pub fn process_image_input(&self, image: &[u8], options: &ProcessOptions) -> ProcessOutcome {
        let identified = self.identifier.identify_from_image(image);
        self.process(identified, InputKind::Image, None, options)
    }

    fn process(
        &self,
        identified: Result<MaterialRecord, IdentifyError>,
        kind: InputKind,
        input: Option<&str>,
        options: &ProcessOptions,
    ) -> ProcessOutcome {
        let record = match identified {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "input rejected");
                return ProcessOutcome::Failure(ProcessFailure {
                    error: e.to_string(),
                    item: input.map(str::to_string),
                    suggestion: kind.invalid_input_suggestion().into(),
                });
            }
        };

        if !record.identified {
            warn!(item = %record.item, "item not identified");
            return ProcessOutcome::Failure(ProcessFailure {
                error: kind.unidentified_error().into(),
                item: input.map(str::to_string),
                suggestion: kind.unidentified_suggestion().into(),
            });
        }

        let report = self.build_report(record, kind, options);
        ProcessOutcome::Success(Box::new(report))
    }

    fn build_report(
        &self,
        record: MaterialRecord,
        kind: InputKind,
        options: &ProcessOptions,
    ) -> DisposalReport {
        let region = self.request_region(options);
        let recommendation = self.policies.disposal_recommendation(&record, Some(region));

        let facilities = if recommendation.needs_facility() {
            let mut found =
                self.facilities
                    .find_nearby_facilities(Some(region), &record, options.user_location);
            found.truncate(self.config.facility_limit);
            Some(found).filter(|found| !found.is_empty())
        } else {
            None
        };

        let timing = self
            .schedules
            .disposal_time(&recommendation, Some(region), options.clock());

        info!(
            item = %record.item,
            region,
            method = %recommendation.method,
            facilities = facilities.as_ref().map_or(0, Vec::len),
            urgency = %timing.urgency,
            "disposal report ready"
        );

        DisposalReport {
            item: record.item.clone(),
            confidence: record.confidence,
            source: kind.source(),
            material_info: (&record).into(),
            disposal: (&recommendation).into(),
            timing,
            facilities,
            tips: disposal_tips(&record, &recommendation),
        }
    }

    /// Facilities in the request's region, optionally of one type.
    ///
    /// Ranked by distance when the options carry a user location.
    pub fn search_facilities(
        &self,
        facility_type: Option<FacilityType>,
        options: &ProcessOptions,
    ) -> Vec<Facility> {
        let region = self.request_region(options);
        let matches: Vec<Facility> = self
            .facilities
            .all_facilities(Some(region))
            .iter()
            .filter(|facility| facility_type.map_or(true, |t| facility.facility_type == t))
            .cloned()
            .collect();

        match options.user_location {
            Some(origin) => rank_by_distance(matches, origin),
            None => matches,
        }
    }

    /// Collection schedule for `region`, or for the agent's region
    pub fn collection_schedule(&self, region: Option<&str>) -> &Schedule {
        self.schedules.schedule(Some(self.pick_region(region)))
    }

    /// Disposal policy for `region`, or for the agent's region
    pub fn regional_policy(&self, region: Option<&str>) -> &RegionalPolicy {
        self.policies.regional_policy(Some(self.pick_region(region)))
    }

    /// Region codes with a dedicated policy
    pub fn available_regions(&self) -> Vec<String> {
        self.policies.available_regions()
    }

    pub fn facility_by_id(&self, id: &str) -> Option<&Facility> {
        self.facilities.facility_by_id(id)
    }

    /// Catalog items that identify exactly
    pub fn known_items(&self) -> Vec<&'static str> {
        self.identifier.all_items()
    }

    fn request_region<'a>(&'a self, options: &'a ProcessOptions) -> &'a str {
        self.pick_region(options.region.as_deref())
    }

    fn pick_region<'a>(&'a self, region: Option<&'a str>) -> &'a str {
        match region {
            Some(code) if normalize_region(Some(code)).is_some() => code,
            _ => &self.region,
        }
    }
}

impl Default for EnvironmentalAgent {
    fn default() -> Self {
        Self::new()
    }
}

//! End-to-end tests for the disposal pipeline

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use landfill_agent::{EnvironmentalAgent, ProcessOptions, ProcessOutcome};
use landfill_identify::{
    ImageClassification, ImageClassifier, MaterialIdentifier, MockImageClassifier,
    Result as IdentifyResult,
};
use landfill_types::{
    DisposalMethod, FacilityType, GeoPoint, IdentificationSource, MaterialType, Urgency,
};

/// Monday 2025-01-06, 10:00
fn monday_morning() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 6)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

fn california() -> ProcessOptions {
    ProcessOptions::for_region("US-CA").at(monday_morning())
}

#[derive(Debug)]
struct FixedClassifier(&'static str);

impl ImageClassifier for FixedClassifier {
    fn name(&self) -> &str {
        "fixed"
    }

    fn classify(&self, _image: &[u8]) -> IdentifyResult<ImageClassification> {
        Ok(ImageClassification {
            item: self.0.to_string(),
            confidence: 0.9,
        })
    }
}

fn agent_seeing(item: &'static str) -> EnvironmentalAgent {
    EnvironmentalAgent::new()
        .with_identifier(MaterialIdentifier::with_classifier(Arc::new(FixedClassifier(item))))
}

#[test]
fn plastic_bottle_goes_in_california_recycling() {
    let outcome = EnvironmentalAgent::new().process_text_input("plastic bottle", &california());
    let report = outcome.report().expect("identified");

    assert_eq!(report.item, "plastic bottle");
    assert_eq!(report.source, IdentificationSource::Text);
    assert!(report.confidence.is_none());
    assert_eq!(report.material_info.material_type, MaterialType::Plastic);
    assert_eq!(report.disposal.method, DisposalMethod::CurbsideRecycling);
    assert!(report.disposal.curbside_accepted);
    assert_eq!(report.disposal.instructions, "Resin code #1 accepted in recycling bin");
    assert_eq!(report.disposal.region, "California");
    assert!(report.facilities.is_none());

    // California recycling goes out Tuesdays
    assert_eq!(report.timing.timing, "Tomorrow");
    assert_eq!(report.timing.urgency, Urgency::High);
    assert_eq!(report.timing.next_collection.as_deref(), Some("1/7/2025"));

    assert_eq!(
        report.tips[0],
        "Rinse containers before recycling to prevent contamination"
    );
}

#[test]
fn battery_needs_special_disposal_and_facilities() {
    let outcome = EnvironmentalAgent::new().process_text_input("battery", &california());
    let report = outcome.report().expect("identified");

    assert_eq!(report.disposal.method, DisposalMethod::SpecialDisposal);
    assert!(!report.disposal.curbside_accepted);
    assert_eq!(
        report.disposal.instructions,
        "Household hazardous waste facilities"
    );

    let facilities = report.facilities.as_ref().expect("drop-off sites");
    assert!(!facilities.is_empty());
    assert!(facilities
        .iter()
        .all(|f| f.facility_type == FacilityType::HazardousWaste));

    assert_eq!(report.timing.timing, "At your convenience");
    assert_eq!(report.timing.urgency, Urgency::High);
    assert!(report
        .tips
        .contains(&"Never mix different chemicals".to_string()));
}

#[test]
fn food_waste_is_composted() {
    let outcome = EnvironmentalAgent::new().process_text_input("food waste", &california());
    let report = outcome.report().expect("identified");

    assert!(report.material_info.compostable);
    assert_eq!(report.disposal.method, DisposalMethod::Composting);
    assert!(report.disposal.curbside_accepted);
    assert_eq!(report.timing.timing, "Friday");
    assert_eq!(report.timing.days_until, Some(4));
    assert!(report.facilities.is_none());
}

#[test]
fn unknown_item_fails_with_suggestion() {
    let outcome = EnvironmentalAgent::new().process_text_input("unknown weird item", &california());
    match &outcome {
        ProcessOutcome::Failure(failure) => {
            assert_eq!(failure.error, "Item could not be identified");
            assert_eq!(failure.item.as_deref(), Some("unknown weird item"));
            assert_eq!(
                failure.suggestion,
                "Please provide more details or try uploading an image"
            );
        }
        ProcessOutcome::Success(report) => panic!("unexpected report for {}", report.item),
    }

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["success"], false);
}

#[test]
fn facility_search_uses_agent_region() {
    let mut agent = EnvironmentalAgent::new();
    agent.set_region("US-NY");

    let facilities = agent.search_facilities(Some(FacilityType::Recycling), &ProcessOptions::default());
    assert_eq!(facilities.len(), 1);
    assert_eq!(facilities[0].id, "ny-001");
    assert!(facilities[0].distance.is_none());

    let all = agent.search_facilities(None, &ProcessOptions::default());
    assert_eq!(all.len(), 3);
}

#[test]
fn facility_search_ranks_by_distance() {
    let agent = EnvironmentalAgent::new();
    let near_compost = GeoPoint::new(37.7549, -122.4394);
    let options = ProcessOptions::for_region("us-ca").with_location(near_compost);

    let facilities = agent.search_facilities(None, &options);
    assert_eq!(facilities.len(), 4);
    assert_eq!(facilities[0].id, "ca-004");
    assert_eq!(facilities[0].distance, Some(0.0));
    assert!(facilities
        .windows(2)
        .all(|pair| pair[0].distance <= pair[1].distance));
}

#[test]
fn special_items_in_unknown_region_use_general_policy_and_california_sites() {
    let options = ProcessOptions::for_region("ZZ-QQ").at(monday_morning());
    let outcome = EnvironmentalAgent::new().process_text_input("phone", &options);
    let report = outcome.report().expect("identified");

    assert_eq!(report.disposal.region, "General Guidelines");
    assert_eq!(report.disposal.instructions, "Check local e-waste programs");
    let facilities = report.facilities.as_ref().expect("fallback sites");
    assert!(facilities.iter().all(|f| f.id.starts_with("ca-")));
}

#[test]
fn texas_styrofoam_goes_to_landfill() {
    let options = ProcessOptions::for_region("US-TX").at(monday_morning());
    let outcome = EnvironmentalAgent::new().process_text_input("styrofoam", &options);
    let report = outcome.report().expect("identified");

    assert_eq!(report.disposal.method, DisposalMethod::Landfill);
    assert_eq!(report.disposal.instructions, "Place in regular trash bin");
    // Texas trash goes out Tuesdays and Fridays
    assert_eq!(report.timing.timing, "Tomorrow");
    assert_eq!(report.tips, vec!["Consider reducing use of single-use items"]);
}

#[test]
fn unaccepted_resin_lists_recycling_sites_by_distance() {
    let options = ProcessOptions::for_region("US-TX")
        .with_location(GeoPoint::new(30.2672, -97.7431))
        .at(monday_morning());
    let outcome = EnvironmentalAgent::new().process_text_input("yogurt container", &options);
    let report = outcome.report().expect("identified");

    assert_eq!(report.disposal.method, DisposalMethod::DropOffRecycling);
    let facilities = report.facilities.as_ref().expect("drop-off sites");
    assert_eq!(facilities[0].id, "tx-001");
    assert_eq!(facilities[0].distance, Some(0.0));
    assert_eq!(report.timing.urgency, Urgency::Low);
}

#[test]
fn image_input_reports_classifier_confidence() {
    let outcome = agent_seeing("aluminum can").process_image_input(b"\x89PNG", &california());
    let report = outcome.report().expect("identified");

    assert_eq!(report.item, "aluminum can");
    assert_eq!(report.source, IdentificationSource::Image);
    assert_eq!(report.confidence, Some(0.9));
    assert_eq!(report.disposal.method, DisposalMethod::CurbsideRecycling);

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["source"], "image");
    assert_eq!(json["materialInfo"]["type"], "metal");
    assert_eq!(json["disposal"]["curbsideAccepted"], true);
}

#[test]
fn unrecognized_image_fails() {
    let outcome = agent_seeing("sofa").process_image_input(b"jpeg", &california());
    let failure = outcome.failure().expect("not in catalog");
    assert_eq!(failure.error, "Item could not be identified from image");
    assert_eq!(
        failure.suggestion,
        "Please try a clearer image or enter a text description"
    );
}

#[test]
fn mock_classifier_always_identifies() {
    let agent = EnvironmentalAgent::new().with_identifier(MaterialIdentifier::with_classifier(
        Arc::new(MockImageClassifier::seeded(7)),
    ));
    for _ in 0..10 {
        assert!(agent.process_image_input(b"img", &california()).is_success());
    }
}

#[test]
fn lookups_pass_through() {
    let agent = EnvironmentalAgent::new();
    assert_eq!(agent.available_regions(), vec!["US-CA", "US-NY", "US-TX"]);
    assert_eq!(
        agent.facility_by_id("ca-003").map(|f| f.name.as_str()),
        Some("E-Waste Recycling Center")
    );
    assert_eq!(agent.regional_policy(None).name, "General Guidelines");
    assert_eq!(agent.collection_schedule(Some("us-tx")).bulky, "First Saturday of month");
}

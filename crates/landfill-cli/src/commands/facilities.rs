//! Facility commands

use landfill_agent::{EnvironmentalAgent, ProcessOptions};
use landfill_types::{Facility, FacilityType, GeoPoint};
use serde::Serialize;
use tabled::Tabled;

use crate::error::{CliError, CliResult};
use crate::output::{self, print_field, print_success, OutputFormat};

/// Table row for facility display
#[derive(Debug, Serialize, Tabled)]
pub struct FacilityRow {
    id: String,
    name: String,
    #[tabled(rename = "type")]
    facility_type: String,
    /// Miles, when a location was given
    distance: String,
    weekday: String,
    weekend: String,
    phone: String,
}

impl From<&Facility> for FacilityRow {
    fn from(facility: &Facility) -> Self {
        Self {
            id: facility.id.clone(),
            name: facility.name.clone(),
            facility_type: facility.facility_type.to_string(),
            distance: facility
                .distance
                .map(|d| format!("{:.1} mi", d))
                .unwrap_or_else(|| "-".into()),
            weekday: facility.hours.weekday.clone(),
            weekend: facility.hours.weekend.clone(),
            phone: facility.phone.clone(),
        }
    }
}

/// Print facilities as a table, or as full records for JSON/YAML
pub fn print_facilities(facilities: &[Facility], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            output::print_output(facilities.iter().map(FacilityRow::from).collect(), format)
        }
        _ => output::print_single(facilities, format),
    }
}

/// List facilities in the current region
pub fn list(
    agent: &EnvironmentalAgent,
    facility_type: Option<FacilityType>,
    location: Option<GeoPoint>,
    format: OutputFormat,
) -> CliResult<()> {
    let options = ProcessOptions {
        user_location: location,
        ..Default::default()
    };
    let facilities = agent.search_facilities(facility_type, &options);
    print_facilities(&facilities, format)
}

/// Show one facility
pub fn show(agent: &EnvironmentalAgent, id: &str, format: OutputFormat) -> CliResult<()> {
    let facility = agent
        .facility_by_id(id)
        .ok_or_else(|| CliError::NotFound(format!("facility {}", id)))?;

    if format != OutputFormat::Table {
        return output::print_single(facility, format);
    }

    print_success(&facility.name);
    print_field("ID", &facility.id);
    print_field("Type", facility.facility_type.as_str());
    print_field("Address", &facility.location.address);
    print_field("Weekdays", &facility.hours.weekday);
    print_field("Weekends", &facility.hours.weekend);
    print_field("Phone", &facility.phone);
    print_field("Accepts", &facility.accepted_materials.join(", "));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_formats_distance() {
        let agent = EnvironmentalAgent::new();
        let mut facility = agent.facility_by_id("ca-001").unwrap().clone();
        assert_eq!(FacilityRow::from(&facility).distance, "-");

        facility.distance = Some(2.0);
        let row = FacilityRow::from(&facility);
        assert_eq!(row.distance, "2.0 mi");
        assert_eq!(row.facility_type, "recycling");
    }
}

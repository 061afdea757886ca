//! Item identification commands

use std::path::Path;

use colored::*;
use landfill_agent::{DisposalReport, EnvironmentalAgent, ProcessOptions, ProcessOutcome};
use landfill_identify::{CatalogEntry, ITEM_CATALOG};
use landfill_types::{DisposalMethod, GeoPoint};
use serde::Serialize;
use tabled::Tabled;

use crate::commands::facilities::print_facilities;
use crate::error::{CliError, CliResult};
use crate::output::{self, print_field, print_info, print_success, print_warning, OutputFormat};

/// Table row for catalog items
#[derive(Debug, Serialize, Tabled)]
struct ItemRow {
    item: String,
    material: String,
    #[tabled(rename = "type")]
    material_type: String,
    recyclable: String,
    handling: String,
}

impl From<&CatalogEntry> for ItemRow {
    fn from(entry: &CatalogEntry) -> Self {
        let handling = if entry.special_disposal {
            "special disposal"
        } else if entry.compostable {
            "compostable"
        } else {
            "-"
        };
        Self {
            item: entry.key.to_string(),
            material: entry.material.to_string(),
            material_type: entry.material_type.to_string(),
            recyclable: entry.recyclable.to_string(),
            handling: handling.to_string(),
        }
    }
}

/// Guidance for a described item
pub fn describe(
    agent: &EnvironmentalAgent,
    words: &[String],
    location: Option<GeoPoint>,
    format: OutputFormat,
) -> CliResult<()> {
    let description = words.join(" ");
    let outcome = agent.process_text_input(&description, &request(location));
    render(&outcome, format)
}

/// Guidance for a photographed item
pub fn scan(
    agent: &EnvironmentalAgent,
    image: &Path,
    location: Option<GeoPoint>,
    format: OutputFormat,
) -> CliResult<()> {
    let bytes = std::fs::read(image)?;
    let outcome = agent.process_image_input(&bytes, &request(location));
    if format == OutputFormat::Table && outcome.is_success() {
        print_warning("Image recognition is simulated; results are placeholders");
    }
    render(&outcome, format)
}

/// Every item the catalog knows by name
pub fn items(format: OutputFormat) -> CliResult<()> {
    output::print_output(ITEM_CATALOG.iter().map(ItemRow::from).collect(), format)
}

fn request(location: Option<GeoPoint>) -> ProcessOptions {
    ProcessOptions {
        user_location: location,
        ..Default::default()
    }
}

fn render(outcome: &ProcessOutcome, format: OutputFormat) -> CliResult<()> {
    if format != OutputFormat::Table {
        output::print_single(outcome, format)?;
    }

    match outcome {
        ProcessOutcome::Success(report) => {
            if format == OutputFormat::Table {
                print_report(report)?;
            }
            Ok(())
        }
        ProcessOutcome::Failure(failure) => {
            if format == OutputFormat::Table {
                print_info(&failure.suggestion);
            }
            Err(CliError::Rejected(failure.error.clone()))
        }
    }
}

fn print_report(report: &DisposalReport) -> CliResult<()> {
    let info = &report.material_info;
    print_success(&format!("{} ({})", report.item, info.material));
    print_field("Type", info.material_type.as_str());
    print_field("Recyclable", &info.recyclable.to_string());
    if let Some(confidence) = report.confidence {
        print_field("Confidence", &format!("{:.0}%", confidence * 100.0));
    }

    let disposal = &report.disposal;
    print_field("Method", disposal.method.as_str());
    print_field(
        "Curbside",
        if disposal.curbside_accepted { "yes" } else { "no" },
    );
    print_field("Instructions", &disposal.instructions);
    print_field("Policy", &disposal.region);

    print_field("When", &report.timing.recommendation);
    print_field("Urgency", &report.timing.urgency.to_string());

    match &report.facilities {
        Some(facilities) => {
            println!();
            println!("{}", "Drop-off facilities".bold());
            print_facilities(facilities, OutputFormat::Table)?;
        }
        None if disposal.method == DisposalMethod::SpecialDisposal
            || !disposal.curbside_accepted =>
        {
            print_warning("No matching drop-off facilities found in this region");
        }
        None => {}
    }

    println!();
    println!("{}", "Tips".bold());
    for tip in &report.tips {
        println!("  • {}", tip);
    }
    Ok(())
}

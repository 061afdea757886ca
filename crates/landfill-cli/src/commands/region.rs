//! Regional schedule and policy commands

use landfill_agent::EnvironmentalAgent;
use landfill_policy::{RegionalPolicy, SpecialDisposalRule};
use landfill_schedule::{CollectionKind, Schedule};
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliResult;
use crate::output::{self, print_info, OutputFormat};

/// Table row for one collection stream
#[derive(Debug, Serialize, Tabled)]
struct ScheduleRow {
    collection: String,
    days: String,
}

fn schedule_rows(schedule: &Schedule) -> Vec<ScheduleRow> {
    let mut rows: Vec<ScheduleRow> = [
        CollectionKind::Trash,
        CollectionKind::Recycling,
        CollectionKind::Composting,
    ]
    .into_iter()
    .map(|kind| ScheduleRow {
        collection: kind.as_str().to_string(),
        days: schedule.collection(kind).describe(),
    })
    .collect();
    rows.push(ScheduleRow {
        collection: "bulky".into(),
        days: schedule.bulky.clone(),
    });
    rows
}

/// Table row for one policy setting
#[derive(Debug, Serialize, Tabled)]
struct PolicyRow {
    setting: String,
    value: String,
}

impl PolicyRow {
    fn new(setting: &str, value: impl Into<String>) -> Self {
        Self {
            setting: setting.to_string(),
            value: value.into(),
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn describe_rule(rule: &SpecialDisposalRule) -> String {
    let required = if rule.required { "required" } else { "optional" };
    format!("{} ({}, {})", rule.notes, rule.method, required)
}

fn policy_rows(policy: &RegionalPolicy) -> Vec<PolicyRow> {
    let curbside = &policy.curbside_recycling;
    let plastics = curbside
        .plastic
        .iter()
        .map(|code| format!("#{}", code))
        .collect::<Vec<_>>()
        .join(", ");
    let organics = &policy.organics;

    vec![
        PolicyRow::new("region", format!("{} ({})", policy.name, policy.code)),
        PolicyRow::new("country", policy.country.clone()),
        PolicyRow::new("curbside plastics", plastics),
        PolicyRow::new("curbside paper", yes_no(curbside.paper)),
        PolicyRow::new("curbside cardboard", yes_no(curbside.cardboard)),
        PolicyRow::new("curbside metal", yes_no(curbside.metal)),
        PolicyRow::new("curbside glass", yes_no(curbside.glass)),
        PolicyRow::new("composting", yes_no(organics.composting_available)),
        PolicyRow::new("organics pickup", yes_no(organics.curbside_pickup)),
        PolicyRow::new(
            "electronics",
            describe_rule(&policy.special_disposal.electronics),
        ),
        PolicyRow::new("hazardous", describe_rule(&policy.special_disposal.hazardous)),
        PolicyRow::new("batteries", describe_rule(&policy.special_disposal.batteries)),
        PolicyRow::new("notes", policy.notes.clone()),
    ]
}

/// Table row for a configured region
#[derive(Debug, Serialize, Tabled)]
struct RegionRow {
    code: String,
    name: String,
    country: String,
}

/// Show the current region's collection schedule
pub fn schedule(agent: &EnvironmentalAgent, format: OutputFormat) -> CliResult<()> {
    let schedule = agent.collection_schedule(None);
    match format {
        OutputFormat::Table => {
            print_info(&format!("Collection schedule for {}", agent.region()));
            output::print_output(schedule_rows(schedule), format)
        }
        _ => output::print_single(schedule, format),
    }
}

/// Show the current region's disposal policy
pub fn policy(agent: &EnvironmentalAgent, format: OutputFormat) -> CliResult<()> {
    let policy = agent.regional_policy(None);
    match format {
        OutputFormat::Table => output::print_output(policy_rows(policy), format),
        _ => output::print_single(policy, format),
    }
}

/// List regions with a dedicated policy
pub fn regions(agent: &EnvironmentalAgent, format: OutputFormat) -> CliResult<()> {
    let rows: Vec<RegionRow> = agent
        .available_regions()
        .into_iter()
        .map(|code| {
            let policy = agent.regional_policy(Some(&code));
            RegionRow {
                name: policy.name.clone(),
                country: policy.country.clone(),
                code,
            }
        })
        .collect();
    output::print_output(rows, format)
}

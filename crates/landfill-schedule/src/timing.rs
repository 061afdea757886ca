//! Disposal timing suggestions

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Timelike};
use landfill_types::{
    normalize_region, DisposalMethod, DisposalRecommendation, Urgency, DEFAULT_REGION,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::schedule::{
    builtin_schedules, general_schedule, CollectionDay, CollectionDays, CollectionKind, Schedule,
};

/// Collection trucks are assumed to start at this hour. A same-day pickup
/// only counts when the bin can still be put out before it.
pub const EARLY_COLLECTION_HOUR: u32 = 6;

const CONTACT_LOCAL: &str = "Contact local waste management";

/// When to dispose of an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingRecommendation {
    /// Short label: "Today", "Tomorrow", a weekday name or a notice
    pub timing: String,
    pub urgency: Urgency,
    pub recommendation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Date of the next pickup, formatted M/D/YYYY
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_collection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_until: Option<u32>,
    pub estimated_time: String,
}

impl TimingRecommendation {
    fn notice(text: &str) -> Self {
        Self {
            timing: text.into(),
            urgency: Urgency::Low,
            recommendation: text.into(),
            notes: None,
            next_collection: None,
            days_until: None,
            estimated_time: text.into(),
        }
    }
}

/// Suggests when to put items out, from regional collection schedules.
#[derive(Debug, Clone)]
pub struct DisposalTimeService {
    schedules: BTreeMap<String, Schedule>,
    fallback: Schedule,
}

impl DisposalTimeService {
    pub fn new() -> Self {
        Self {
            schedules: builtin_schedules(),
            fallback: general_schedule(),
        }
    }

    /// Add or replace a region's schedule; `default` replaces the fallback
    pub fn with_schedule(mut self, region: &str, schedule: Schedule) -> Self {
        match normalize_region(Some(region)) {
            Some(code) if code != DEFAULT_REGION.to_ascii_uppercase() => {
                self.schedules.insert(code, schedule);
            }
            _ => self.fallback = schedule,
        }
        self
    }

    /// Schedule for a region code; absent, blank and unknown codes get the
    /// generic schedule.
    pub fn schedule(&self, region: Option<&str>) -> &Schedule {
        let Some(code) = normalize_region(region) else {
            return &self.fallback;
        };
        self.schedules.get(&code).unwrap_or_else(|| {
            debug!(region = %code, "no schedule for region; using general schedule");
            &self.fallback
        })
    }

    /// Suggest when to dispose of an item given its recommendation.
    pub fn disposal_time(
        &self,
        recommendation: &DisposalRecommendation,
        region: Option<&str>,
        now: NaiveDateTime,
    ) -> TimingRecommendation {
        let schedule = self.schedule(region);
        let accepted = recommendation.curbside_accepted;

        let kind = match recommendation.method {
            DisposalMethod::CurbsideRecycling if accepted => Some(CollectionKind::Recycling),
            DisposalMethod::Composting if accepted => Some(CollectionKind::Composting),
            DisposalMethod::Landfill => Some(CollectionKind::Trash),
            _ => None,
        };
        if let Some(kind) = kind {
            return next_collection(schedule.collection(kind), kind, now);
        }

        if recommendation.method.is_drop_off() {
            return TimingRecommendation {
                timing: "At your convenience".into(),
                urgency: drop_off_urgency(recommendation),
                recommendation: "Drop off at facility during business hours".into(),
                notes: Some(recommendation.notes.clone()),
                next_collection: None,
                days_until: None,
                estimated_time: "Within 1 week recommended".into(),
            };
        }

        TimingRecommendation {
            timing: CONTACT_LOCAL.into(),
            urgency: Urgency::Medium,
            recommendation: "Check with local authorities for proper disposal method".into(),
            notes: None,
            next_collection: None,
            days_until: None,
            estimated_time: "As soon as possible".into(),
        }
    }
}

impl Default for DisposalTimeService {
    fn default() -> Self {
        Self::new()
    }
}

fn next_collection(
    collection: &CollectionDays,
    kind: CollectionKind,
    now: NaiveDateTime,
) -> TimingRecommendation {
    let days = match collection {
        CollectionDays::Notice(text) => return TimingRecommendation::notice(text),
        CollectionDays::Days(days) if days.is_empty() => {
            return TimingRecommendation {
                timing: CONTACT_LOCAL.into(),
                urgency: Urgency::Low,
                recommendation: "Check local schedule".into(),
                notes: None,
                next_collection: None,
                days_until: None,
                estimated_time: "Next available collection day".into(),
            };
        }
        CollectionDays::Days(days) => days,
    };

    // A non-empty list always matches by offset 7 at the latest.
    let mut weekday = now.weekday();
    let mut found = None;
    for offset in 0..=7u32 {
        if days.iter().any(|day| day.weekday() == weekday) {
            let label = match offset {
                0 if now.hour() < EARLY_COLLECTION_HOUR => Some("Today".to_string()),
                0 => None,
                1 => Some("Tomorrow".to_string()),
                _ => Some(CollectionDay::from_weekday(weekday).to_string()),
            };
            if let Some(label) = label {
                found = Some((offset, label));
                break;
            }
        }
        weekday = weekday.succ();
    }
    let (days_until, label) = found.unwrap_or((7, CollectionDay::from_weekday(weekday).to_string()));

    let date = format_date(now.date() + Days::new(u64::from(days_until)));
    debug!(bin = kind.as_str(), days_until, next = %date, "next collection");

    TimingRecommendation {
        urgency: if days_until <= 1 {
            Urgency::High
        } else {
            Urgency::Medium
        },
        recommendation: format!(
            "Place in {} bin by {} morning ({})",
            kind.as_str(),
            label,
            date
        ),
        timing: label,
        notes: None,
        next_collection: Some(date),
        days_until: Some(days_until),
        estimated_time: format!(
            "{} day{}",
            days_until,
            if days_until == 1 { "" } else { "s" }
        ),
    }
}

fn format_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

fn drop_off_urgency(recommendation: &DisposalRecommendation) -> Urgency {
    if recommendation.method != DisposalMethod::SpecialDisposal {
        return Urgency::Low;
    }
    let notes = recommendation.notes.as_str();
    if notes.contains("hazardous") || notes.contains("Household hazardous") {
        Urgency::High
    } else if notes.contains("electronics") || notes.contains("E-waste") {
        Urgency::Medium
    } else {
        Urgency::Low
    }
}

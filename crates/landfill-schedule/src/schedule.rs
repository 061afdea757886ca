//! Regional collection schedules

use std::collections::BTreeMap;
use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Day of the week a bin is collected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectionDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl CollectionDay {
    pub fn weekday(&self) -> Weekday {
        match self {
            Self::Monday => Weekday::Mon,
            Self::Tuesday => Weekday::Tue,
            Self::Wednesday => Weekday::Wed,
            Self::Thursday => Weekday::Thu,
            Self::Friday => Weekday::Fri,
            Self::Saturday => Weekday::Sat,
            Self::Sunday => Weekday::Sun,
        }
    }

    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
            Weekday::Sun => Self::Sunday,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for CollectionDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When a bin is collected: either fixed weekdays, or a notice for regions
/// without a regular pickup (e.g. "Not available").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CollectionDays {
    Days(Vec<CollectionDay>),
    Notice(String),
}

impl CollectionDays {
    pub fn days(days: &[CollectionDay]) -> Self {
        Self::Days(days.to_vec())
    }

    pub fn notice(text: impl Into<String>) -> Self {
        Self::Notice(text.into())
    }

    /// Human-readable summary ("Monday, Thursday" or the notice text)
    pub fn describe(&self) -> String {
        match self {
            Self::Days(days) if days.is_empty() => "None scheduled".to_string(),
            Self::Days(days) => days
                .iter()
                .map(CollectionDay::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            Self::Notice(text) => text.clone(),
        }
    }
}

/// Which bin a recommendation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Trash,
    Recycling,
    Composting,
}

impl CollectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trash => "trash",
            Self::Recycling => "recycling",
            Self::Composting => "composting",
        }
    }
}

/// Weekly collection plan for one region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub trash: CollectionDays,
    pub recycling: CollectionDays,
    pub composting: CollectionDays,
    /// Bulky item pickup arrangement
    pub bulky: String,
}

impl Schedule {
    pub fn collection(&self, kind: CollectionKind) -> &CollectionDays {
        match kind {
            CollectionKind::Trash => &self.trash,
            CollectionKind::Recycling => &self.recycling,
            CollectionKind::Composting => &self.composting,
        }
    }
}

const CONTACT_LOCAL: &str = "Contact local waste management";
const BY_APPOINTMENT: &str = "By appointment";
const NOT_AVAILABLE: &str = "Not available";

pub fn california_schedule() -> Schedule {
    use CollectionDay::*;
    Schedule {
        trash: CollectionDays::days(&[Monday, Thursday]),
        recycling: CollectionDays::days(&[Tuesday]),
        composting: CollectionDays::days(&[Friday]),
        bulky: BY_APPOINTMENT.into(),
    }
}

pub fn new_york_schedule() -> Schedule {
    use CollectionDay::*;
    Schedule {
        trash: CollectionDays::days(&[Monday, Wednesday, Friday]),
        recycling: CollectionDays::days(&[Tuesday, Thursday]),
        composting: CollectionDays::notice(NOT_AVAILABLE),
        bulky: BY_APPOINTMENT.into(),
    }
}

pub fn texas_schedule() -> Schedule {
    use CollectionDay::*;
    Schedule {
        trash: CollectionDays::days(&[Tuesday, Friday]),
        recycling: CollectionDays::days(&[Wednesday]),
        composting: CollectionDays::notice(NOT_AVAILABLE),
        bulky: "First Saturday of month".into(),
    }
}

/// Schedule for regions without a known calendar
pub fn general_schedule() -> Schedule {
    Schedule {
        trash: CollectionDays::notice(CONTACT_LOCAL),
        recycling: CollectionDays::notice(CONTACT_LOCAL),
        composting: CollectionDays::notice(CONTACT_LOCAL),
        bulky: BY_APPOINTMENT.into(),
    }
}

/// Built-in regional schedules keyed by region code. The generic schedule is
/// not included; see [`general_schedule`].
pub fn builtin_schedules() -> BTreeMap<String, Schedule> {
    BTreeMap::from([
        ("US-CA".to_string(), california_schedule()),
        ("US-NY".to_string(), new_york_schedule()),
        ("US-TX".to_string(), texas_schedule()),
    ])
}

use std::collections::BTreeMap;

use landfill_types::{Facility, FacilityHours, FacilityLocation, FacilityType};

struct Seed {
    id: &'static str,
    name: &'static str,
    facility_type: FacilityType,
    accepts: &'static [&'static str],
    lat: f64,
    lng: f64,
    address: &'static str,
    weekday: &'static str,
    weekend: &'static str,
    phone: &'static str,
}

impl Seed {
    fn build(&self) -> Facility {
        Facility {
            id: self.id.into(),
            name: self.name.into(),
            facility_type: self.facility_type,
            accepted_materials: self.accepts.iter().map(|m| m.to_string()).collect(),
            location: FacilityLocation {
                lat: self.lat,
                lng: self.lng,
                address: self.address.into(),
            },
            hours: FacilityHours {
                weekday: self.weekday.into(),
                weekend: self.weekend.into(),
            },
            phone: self.phone.into(),
            distance: None,
        }
    }
}

/// San Francisco Bay Area facilities
pub fn california_facilities() -> Vec<Facility> {
    [
        Seed {
            id: "ca-001",
            name: "Bay Area Recycling Center",
            facility_type: FacilityType::Recycling,
            accepts: &["plastic", "paper", "metal", "glass", "electronics"],
            lat: 37.7749,
            lng: -122.4194,
            address: "123 Green St, San Francisco, CA 94102",
            weekday: "8:00 AM - 6:00 PM",
            weekend: "9:00 AM - 5:00 PM",
            phone: "(415) 555-0100",
        },
        Seed {
            id: "ca-002",
            name: "California Household Hazardous Waste Facility",
            facility_type: FacilityType::HazardousWaste,
            accepts: &["hazardous", "batteries", "paint", "chemicals"],
            lat: 37.7849,
            lng: -122.4094,
            address: "456 Safe Disposal Rd, San Francisco, CA 94103",
            weekday: "9:00 AM - 4:00 PM",
            weekend: "Closed",
            phone: "(415) 555-0200",
        },
        Seed {
            id: "ca-003",
            name: "E-Waste Recycling Center",
            facility_type: FacilityType::Electronics,
            accepts: &["electronics", "batteries"],
            lat: 37.7649,
            lng: -122.4294,
            address: "789 Tech Way, San Francisco, CA 94104",
            weekday: "10:00 AM - 7:00 PM",
            weekend: "10:00 AM - 5:00 PM",
            phone: "(415) 555-0300",
        },
        Seed {
            id: "ca-004",
            name: "Composting Drop-off Site",
            facility_type: FacilityType::Composting,
            accepts: &["organic", "food waste", "yard waste"],
            lat: 37.7549,
            lng: -122.4394,
            address: "321 Compost Ln, San Francisco, CA 94105",
            weekday: "7:00 AM - 5:00 PM",
            weekend: "8:00 AM - 4:00 PM",
            phone: "(415) 555-0400",
        },
    ]
    .iter()
    .map(Seed::build)
    .collect()
}

/// New York City facilities
pub fn new_york_facilities() -> Vec<Facility> {
    [
        Seed {
            id: "ny-001",
            name: "Manhattan Recycling Center",
            facility_type: FacilityType::Recycling,
            accepts: &["plastic", "paper", "metal", "glass"],
            lat: 40.7128,
            lng: -74.0060,
            address: "100 Recycle Pl, New York, NY 10001",
            weekday: "7:00 AM - 7:00 PM",
            weekend: "9:00 AM - 5:00 PM",
            phone: "(212) 555-0100",
        },
        Seed {
            id: "ny-002",
            name: "NYC SAFE Disposal Event",
            facility_type: FacilityType::HazardousWaste,
            accepts: &["hazardous", "batteries", "paint", "electronics"],
            lat: 40.7228,
            lng: -74.0160,
            address: "200 Safety St, New York, NY 10002",
            weekday: "By appointment",
            weekend: "Events on select Saturdays",
            phone: "(212) 555-0200",
        },
        Seed {
            id: "ny-003",
            name: "Lower East Side E-Waste Drop-off",
            facility_type: FacilityType::Electronics,
            accepts: &["electronics", "batteries"],
            lat: 40.7328,
            lng: -73.9960,
            address: "300 Tech Ave, New York, NY 10003",
            weekday: "9:00 AM - 6:00 PM",
            weekend: "10:00 AM - 4:00 PM",
            phone: "(212) 555-0300",
        },
    ]
    .iter()
    .map(Seed::build)
    .collect()
}

/// Austin facilities
pub fn texas_facilities() -> Vec<Facility> {
    [
        Seed {
            id: "tx-001",
            name: "Austin Recycling Center",
            facility_type: FacilityType::Recycling,
            accepts: &["plastic", "paper", "metal", "glass"],
            lat: 30.2672,
            lng: -97.7431,
            address: "500 Recycle Rd, Austin, TX 78701",
            weekday: "8:00 AM - 5:00 PM",
            weekend: "9:00 AM - 3:00 PM",
            phone: "(512) 555-0100",
        },
        Seed {
            id: "tx-002",
            name: "Texas Environmental Service Center",
            facility_type: FacilityType::HazardousWaste,
            accepts: &["hazardous", "batteries", "paint", "chemicals"],
            lat: 30.2772,
            lng: -97.7531,
            address: "600 Waste Way, Austin, TX 78702",
            weekday: "9:00 AM - 4:00 PM",
            weekend: "First Saturday of month",
            phone: "(512) 555-0200",
        },
    ]
    .iter()
    .map(Seed::build)
    .collect()
}

/// Built-in catalog keyed by region code
pub fn builtin_catalog() -> BTreeMap<String, Vec<Facility>> {
    BTreeMap::from([
        ("US-CA".to_string(), california_facilities()),
        ("US-NY".to_string(), new_york_facilities()),
        ("US-TX".to_string(), texas_facilities()),
    ])
}

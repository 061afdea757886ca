//! Facility catalog types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A WGS84 coordinate pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Kind of drop-off facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FacilityType {
    Recycling,
    HazardousWaste,
    Electronics,
    Composting,
}

impl FacilityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recycling => "recycling",
            Self::HazardousWaste => "hazardous-waste",
            Self::Electronics => "electronics",
            Self::Composting => "composting",
        }
    }
}

impl fmt::Display for FacilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FacilityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recycling" => Ok(Self::Recycling),
            "hazardous-waste" | "hazardous" => Ok(Self::HazardousWaste),
            "electronics" | "e-waste" => Ok(Self::Electronics),
            "composting" | "compost" => Ok(Self::Composting),
            other => Err(format!("unknown facility type: {}", other)),
        }
    }
}

/// Street location of a facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityLocation {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

impl FacilityLocation {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

/// Opening hours as free text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityHours {
    pub weekday: String,
    pub weekend: String,
}

/// A drop-off facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub facility_type: FacilityType,
    /// Material categories and specific items the facility takes
    pub accepted_materials: Vec<String>,
    pub location: FacilityLocation,
    pub hours: FacilityHours,
    pub phone: String,
    /// Miles from the requesting user, when a location was supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl Facility {
    /// Whether `material` appears in the accepted list
    pub fn accepts(&self, material: &str) -> bool {
        self.accepted_materials.iter().any(|m| m == material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facility_type_parses_aliases() {
        assert_eq!("Recycling".parse::<FacilityType>(), Ok(FacilityType::Recycling));
        assert_eq!(
            "hazardous-waste".parse::<FacilityType>(),
            Ok(FacilityType::HazardousWaste)
        );
        assert_eq!("e-waste".parse::<FacilityType>(), Ok(FacilityType::Electronics));
        assert!("landfill".parse::<FacilityType>().is_err());
    }

    #[test]
    fn facility_json_shape() {
        let facility = Facility {
            id: "x-1".into(),
            name: "Depot".into(),
            facility_type: FacilityType::HazardousWaste,
            accepted_materials: vec!["hazardous".into()],
            location: FacilityLocation {
                lat: 1.0,
                lng: 2.0,
                address: "1 Main St".into(),
            },
            hours: FacilityHours {
                weekday: "9-5".into(),
                weekend: "Closed".into(),
            },
            phone: "555".into(),
            distance: None,
        };
        let json = serde_json::to_value(&facility).unwrap();
        assert_eq!(json["type"], "hazardous-waste");
        assert_eq!(json["acceptedMaterials"][0], "hazardous");
        assert!(json.get("distance").is_none());
        assert!(facility.accepts("hazardous"));
        assert!(!facility.accepts("plastic"));
    }
}

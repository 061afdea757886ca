//! CLI command implementations

pub mod facilities;
pub mod identify;
pub mod region;

use clap::Args;
use landfill_types::GeoPoint;

use crate::error::{CliError, CliResult};

/// Where the user is, for distance ranking
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct LocationArgs {
    /// Your latitude in degrees
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Your longitude in degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lng: Option<f64>,
}

impl LocationArgs {
    /// Flag values if given, else the configured home location
    pub fn resolve(&self, home: Option<GeoPoint>) -> CliResult<Option<GeoPoint>> {
        let (Some(lat), Some(lng)) = (self.lat, self.lng) else {
            return Ok(home);
        };
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CliError::InvalidInput(format!(
                "latitude {} is outside -90..90",
                lat
            )));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(CliError::InvalidInput(format!(
                "longitude {} is outside -180..180",
                lng
            )));
        }
        Ok(Some(GeoPoint::new(lat, lng)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_home() {
        let home = Some(GeoPoint::new(1.0, 2.0));
        let args = LocationArgs {
            lat: Some(30.0),
            lng: Some(-97.0),
        };
        assert_eq!(args.resolve(home).unwrap(), Some(GeoPoint::new(30.0, -97.0)));
        assert_eq!(LocationArgs::default().resolve(home).unwrap(), home);
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let args = LocationArgs {
            lat: Some(91.0),
            lng: Some(0.0),
        };
        assert!(matches!(args.resolve(None), Err(CliError::InvalidInput(_))));
    }
}

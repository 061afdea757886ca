use std::collections::BTreeMap;

use landfill_types::{
    normalize_region, Facility, FacilityType, GeoPoint, MaterialRecord, MaterialType,
    FALLBACK_FACILITY_REGION,
};
use tracing::debug;

use crate::catalog::builtin_catalog;
use crate::distance::distance_miles;

/// Finds drop-off facilities for a material.
#[derive(Debug, Clone)]
pub struct FacilityLocator {
    catalog: BTreeMap<String, Vec<Facility>>,
}

impl FacilityLocator {
    /// Locator over the built-in catalog
    pub fn new() -> Self {
        Self {
            catalog: builtin_catalog(),
        }
    }

    /// Add or replace the facilities listed for a region
    pub fn with_facilities(mut self, region: &str, facilities: Vec<Facility>) -> Self {
        let code = normalize_region(Some(region)).unwrap_or_else(|| FALLBACK_FACILITY_REGION.into());
        self.catalog.insert(code, facilities);
        self
    }

    /// Region code whose catalog serves a request
    pub fn resolve_region(&self, region: Option<&str>) -> String {
        match normalize_region(region) {
            Some(code) if self.catalog.contains_key(&code) => code,
            Some(code) => {
                debug!(region = %code, fallback = FALLBACK_FACILITY_REGION, "no facilities for region");
                FALLBACK_FACILITY_REGION.to_string()
            }
            None => FALLBACK_FACILITY_REGION.to_string(),
        }
    }

    /// Every facility in a region, in catalog order
    pub fn all_facilities(&self, region: Option<&str>) -> &[Facility] {
        let code = self.resolve_region(region);
        self.catalog.get(&code).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Facilities in `region` that take `material`.
    ///
    /// With a user location every match carries a rounded `distance` and the
    /// list is sorted nearest first; otherwise catalog order is kept.
    pub fn find_nearby_facilities(
        &self,
        region: Option<&str>,
        material: &MaterialRecord,
        user_location: Option<GeoPoint>,
    ) -> Vec<Facility> {
        let matches: Vec<Facility> = self
            .all_facilities(region)
            .iter()
            .filter(|facility| serves(facility, material))
            .cloned()
            .collect();

        debug!(
            item = %material.item,
            matches = matches.len(),
            located = user_location.is_some(),
            "facility search"
        );

        match user_location {
            Some(origin) => rank_by_distance(matches, origin),
            None => matches,
        }
    }

    /// Look a facility up by id across every region
    pub fn facility_by_id(&self, id: &str) -> Option<&Facility> {
        self.catalog
            .values()
            .flat_map(|facilities| facilities.iter())
            .find(|facility| facility.id == id)
    }
}

impl Default for FacilityLocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Attach distances from `origin` and sort nearest first.
///
/// The sort is stable, so equidistant facilities keep catalog order.
pub fn rank_by_distance(facilities: Vec<Facility>, origin: GeoPoint) -> Vec<Facility> {
    let mut ranked: Vec<Facility> = facilities
        .into_iter()
        .map(|mut facility| {
            facility.distance = Some(distance_miles(origin, facility.location.point()));
            facility
        })
        .collect();
    ranked.sort_by(|a, b| {
        a.distance
            .unwrap_or(f64::INFINITY)
            .total_cmp(&b.distance.unwrap_or(f64::INFINITY))
    });
    ranked
}

fn serves(facility: &Facility, material: &MaterialRecord) -> bool {
    if material.special_disposal {
        match material.material_type {
            MaterialType::Electronics => {
                return matches!(
                    facility.facility_type,
                    FacilityType::Electronics | FacilityType::HazardousWaste
                );
            }
            MaterialType::Hazardous => {
                return facility.facility_type == FacilityType::HazardousWaste;
            }
            // other special items are matched like ordinary recyclables
            _ => {}
        }
    }

    if material.compostable {
        return facility.facility_type == FacilityType::Composting;
    }

    facility.facility_type == FacilityType::Recycling
        && facility.accepts(material.material_type.as_str())
}

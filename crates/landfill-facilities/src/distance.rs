//! Haversine distance on a spherical Earth

use landfill_types::GeoPoint;

/// Mean Earth radius used for all distance figures
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Unrounded great-circle distance in miles
pub fn great_circle_miles(from: GeoPoint, to: GeoPoint) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    // rounding can push `a` a hair outside [0, 1] for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_MILES * c
}

/// Great-circle distance in miles, rounded to one decimal
pub fn distance_miles(from: GeoPoint, to: GeoPoint) -> f64 {
    (great_circle_miles(from, to) * 10.0).round() / 10.0
}

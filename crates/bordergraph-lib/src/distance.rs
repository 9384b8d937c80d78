//! Great-circle distance between geographic coordinates.

/// Mean Earth radius used by the haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance in kilometres between two points given in
/// decimal degrees.
///
/// Coordinates are not range-checked. NaN inputs produce NaN, which the graph
/// builder truncates to a zero-length edge rather than failing.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_is_zero() {
        assert_eq!(haversine_km(48.85, 2.35, 48.85, 2.35), 0.0);
        assert_eq!(haversine_km(-33.9, 151.2, -33.9, 151.2), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let there = haversine_km(40.4, -3.7, 52.5, 13.4);
        let back = haversine_km(52.5, 13.4, 40.4, -3.7);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn one_degree_of_longitude_on_the_equator() {
        let d = haversine_km(0.0, 0.0, 0.0, 1.0);
        // 2 * pi * 6371 / 360
        assert!((d - 111.194_926_6).abs() < 1e-3, "got {d}");
    }

    #[test]
    fn antipodes_are_half_the_circumference() {
        let d = haversine_km(0.0, 0.0, 0.0, 180.0);
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }
}

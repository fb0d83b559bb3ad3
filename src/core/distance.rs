use crate::core::location::Coordinate;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Full proximity credit up to this distance
pub const FULL_CREDIT_KM: f64 = 10.0;

/// No proximity credit beyond this distance
pub const ZERO_CREDIT_KM: f64 = 100.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `a` - First point in degrees
/// * `b` - Second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat1_rad = a.lat.to_radians();
    let lat2_rad = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Map a distance onto a proximity score (0-1)
///
/// Flat 1.0 within a commute, linear decay to zero at 100 km.
#[inline]
pub fn distance_to_proximity(distance_km: f64) -> f64 {
    if distance_km.is_nan() {
        return 0.0;
    }
    if distance_km <= FULL_CREDIT_KM {
        return 1.0;
    }
    if distance_km > ZERO_CREDIT_KM {
        return 0.0;
    }

    1.0 - (distance_km - FULL_CREDIT_KM) / (ZERO_CREDIT_KM - FULL_CREDIT_KM)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64) -> Coordinate {
        Coordinate { lat, lon }
    }

    #[test]
    fn test_haversine_distance() {
        // Distance from London to Paris (approximately 344 km)
        let london = point(51.5074, -0.1278);
        let paris = point(48.8566, 2.3522);

        let distance = haversine_distance(london, paris);
        assert!((distance - 344.0).abs() < 10.0, "Distance should be ~344km, got {}", distance);
    }

    #[test]
    fn test_haversine_kigali_short_hop() {
        let job = point(-1.9441, 30.0619);
        let worker = point(-1.95, 30.06);

        let distance = haversine_distance(job, worker);
        assert!(distance > 0.5 && distance < 1.0, "Expected ~0.7km, got {}", distance);
    }

    #[test]
    fn test_proximity_curve() {
        assert_eq!(distance_to_proximity(0.0), 1.0);
        assert_eq!(distance_to_proximity(10.0), 1.0);
        assert!((distance_to_proximity(55.0) - 0.5).abs() < 1e-12);
        assert_eq!(distance_to_proximity(100.0), 0.0);
        assert_eq!(distance_to_proximity(250.0), 0.0);
        assert_eq!(distance_to_proximity(f64::NAN), 0.0);
    }
}

use crate::domain::GeoLocation;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two points, using the haversine formula.
///
/// The points are not range checked. Non-finite coordinates yield `NaN`, callers that need to
/// exclude such points should filter them beforehand.
pub fn distance_km(from: &GeoLocation, to: &GeoLocation) -> f64 {
    let delta_latitude = (to.latitude - from.latitude).to_radians();
    let delta_longitude = (to.longitude - from.longitude).to_radians();

    let a = (delta_latitude / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos() * to.latitude.to_radians().cos() * (delta_longitude / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const AMSTERDAM: GeoLocation = GeoLocation {
        latitude: 52.3676,
        longitude: 4.9041,
    };
    const ROTTERDAM: GeoLocation = GeoLocation {
        latitude: 51.9244,
        longitude: 4.4777,
    };

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!((actual - expected).abs() <= tolerance, "expected {} ± {}, got {}", expected, tolerance, actual);
    }

    #[rstest]
    #[case(GeoLocation::new(0.0, 0.0))]
    #[case(AMSTERDAM)]
    #[case(GeoLocation::new(-33.8688, 151.2093))]
    #[case(GeoLocation::new(90.0, 0.0))]
    fn distance_to_itself_is_zero(#[case] location: GeoLocation) {
        assert_eq!(distance_km(&location, &location), 0.0);
    }

    #[rstest]
    #[case(AMSTERDAM, ROTTERDAM)]
    #[case(GeoLocation::new(0.0, 0.0), GeoLocation::new(0.0, 1.0))]
    #[case(GeoLocation::new(40.7128, -74.0060), GeoLocation::new(-33.8688, 151.2093))]
    fn distance_is_symmetric(#[case] a: GeoLocation, #[case] b: GeoLocation) {
        assert_close(distance_km(&a, &b), distance_km(&b, &a), 1e-9);
    }

    #[test]
    fn one_degree_of_longitude_at_the_equator() {
        assert_close(distance_km(&GeoLocation::new(0.0, 0.0), &GeoLocation::new(0.0, 1.0)), 111.19, 0.5);
    }

    #[test]
    fn amsterdam_to_rotterdam() {
        assert_close(distance_km(&AMSTERDAM, &ROTTERDAM), 57.0, 1.0);
    }

    #[test]
    fn antipodal_points_are_half_the_circumference_apart() {
        let distance = distance_km(&GeoLocation::new(0.0, 0.0), &GeoLocation::new(0.0, 180.0));
        assert_close(distance, std::f64::consts::PI * EARTH_RADIUS_KM, 1e-6);
    }

    #[test]
    fn out_of_range_input_still_yields_a_number() {
        let distance = distance_km(&GeoLocation::new(100.0, 200.0), &GeoLocation::new(0.0, 0.0));
        assert!(distance.is_finite());
        assert!(distance >= 0.0);
    }

    #[test]
    fn non_finite_input_propagates_nan() {
        let distance = distance_km(&GeoLocation::new(f64::NAN, 0.0), &GeoLocation::new(0.0, 0.0));
        assert!(distance.is_nan());
    }
}

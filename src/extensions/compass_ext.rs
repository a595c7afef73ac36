const COMPASS_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

pub trait CompassPoint {
    fn compass_point(&self) -> &'static str;
}

impl CompassPoint for f64 {
    /// Maps a bearing in degrees to one of the eight principal compass points.
    /// Halves round up and negative bearings wrap around, non-finite bearings have no direction.
    fn compass_point(&self) -> &'static str {
        if !self.is_finite() {
            return "";
        }

        let index = (self / 45.0 + 0.5).floor().rem_euclid(8.0) as usize;
        COMPASS_POINTS[index]
    }
}

/// Compass label for an optional wind bearing, empty when there is no bearing.
pub fn wind_direction(degrees: Option<f64>) -> &'static str {
    degrees.map(|d| d.compass_point()).unwrap_or("")
}

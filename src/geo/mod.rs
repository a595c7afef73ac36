mod distance;
mod nearest;

pub use distance::{EARTH_RADIUS_KM, distance_km};
pub use nearest::{NearestStation, find_nearest, nearest_station};

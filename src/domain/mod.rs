mod geo_location;
pub mod lookup;
mod place;
mod station;
mod weather_code;

pub use geo_location::GeoLocation;
pub use place::{Place, UNKNOWN_LOCATION};
pub use station::{Station, ZeroCoordinates};
pub use weather_code::WeatherCode;

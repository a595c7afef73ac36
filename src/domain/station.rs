use crate::coordinate_deserializer::lenient_coordinate;
use crate::domain::GeoLocation;
use serde::Deserialize;

/// A radio stream entry as listed by the station directory.
// API: https://de1.api.radio-browser.info/#Struct_station
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Station {
    #[serde(rename = "stationuuid")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub url_resolved: String,
    #[serde(default)]
    pub homepage: String,
    #[serde(default)]
    pub favicon: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub country: String,
    #[serde(rename = "countrycode", default)]
    pub country_code: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub codec: String,
    #[serde(default)]
    pub bitrate: u32,
    #[serde(rename = "clickcount", default)]
    pub click_count: u64,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub geo_lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub geo_long: Option<f64>,
}

/// How a coordinate of exactly `0.0` is treated when deciding whether a station is locatable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroCoordinates {
    /// A zero latitude or longitude counts as absent, the directory uses it as a placeholder.
    #[default]
    Missing,
    Valid,
}

impl Station {
    /// Returns the station's position if both coordinates are usable.
    pub fn location(&self, zero_coordinates: ZeroCoordinates) -> Option<GeoLocation> {
        let present = |value: Option<f64>| value.filter(|v| zero_coordinates == ZeroCoordinates::Valid || *v != 0.0);

        let location = GeoLocation::new(present(self.geo_lat)?, present(self.geo_long)?);
        location.is_valid().then_some(location)
    }
}

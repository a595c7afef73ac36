use crate::domain::{GeoLocation, Station, ZeroCoordinates};
use crate::geo::distance_km;
use ordered_float::OrderedFloat;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NearestStation<'a> {
    pub station: &'a Station,
    pub distance_km: f64,
}

/// Finds the station closest to `reference`, treating zero coordinates as missing.
pub fn find_nearest<'a>(stations: &'a [Station], reference: &GeoLocation) -> Option<&'a Station> {
    nearest_station(stations, reference, ZeroCoordinates::default()).map(|nearest| nearest.station)
}

/// Scans `stations` in order and returns the one with the smallest great-circle distance to `reference`.
///
/// Stations without a usable location are skipped. On a tie the station listed first wins.
pub fn nearest_station<'a>(stations: &'a [Station], reference: &GeoLocation, zero_coordinates: ZeroCoordinates) -> Option<NearestStation<'a>> {
    stations
        .iter()
        .filter_map(|station| {
            let location = station.location(zero_coordinates)?;
            let distance_km = distance_km(reference, &location);
            (!distance_km.is_nan()).then_some(NearestStation { station, distance_km })
        })
        // `min_by_key` keeps the first of several equal minima
        .min_by_key(|nearest| OrderedFloat(nearest.distance_km))
}

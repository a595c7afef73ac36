use crate::domain::lookup::{PlaceResolver, StationDirectory};
use crate::domain::{GeoLocation, Place, Station, ZeroCoordinates};
use crate::geo::nearest_station;
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Clone, Debug, PartialEq)]
pub struct LocalStation {
    pub place: Place,
    pub station: Option<Station>,
    pub distance_km: Option<f64>,
}

/// Finds the radio station broadcasting closest to a location, looking within its state first and
/// widening to the whole country when the state has no locatable station.
pub struct LocalRadio {
    directory: Arc<dyn StationDirectory>,
    resolver: Arc<dyn PlaceResolver>,
    zero_coordinates: ZeroCoordinates,
}

impl LocalRadio {
    pub fn new(directory: Arc<dyn StationDirectory>, resolver: Arc<dyn PlaceResolver>, zero_coordinates: ZeroCoordinates) -> Self {
        LocalRadio {
            directory,
            resolver,
            zero_coordinates,
        }
    }

    #[instrument(skip(self))]
    pub async fn find(&self, reference: &GeoLocation) -> LocalStation {
        let place = self.resolver.reverse_geocode(reference).await;

        if place.country_code.is_empty() {
            warn!(place = %place.name, "⚠️ No country known for this location, skipping the station search");
            return LocalStation {
                place,
                station: None,
                distance_km: None,
            };
        }

        let mut nearest = None;
        if !place.state.is_empty() {
            let stations = self.directory.search_by_state(&place.country_code, &place.state).await;
            nearest = self.nearest(&stations, reference);
        }

        if nearest.is_none() {
            let stations = self.directory.search_by_country(&place.country_code).await;
            nearest = self.nearest(&stations, reference);
        }

        match nearest {
            Some((station, distance_km)) => {
                info!(station = %station.name, "📍 Nearest station is {:.1} km away", distance_km);
                LocalStation {
                    place,
                    station: Some(station),
                    distance_km: Some(distance_km),
                }
            }
            None => {
                warn!(country_code = %place.country_code, "⚠️ No station with a known location found");
                LocalStation {
                    place,
                    station: None,
                    distance_km: None,
                }
            }
        }
    }

    fn nearest(&self, stations: &[Station], reference: &GeoLocation) -> Option<(Station, f64)> {
        nearest_station(stations, reference, self.zero_coordinates).map(|nearest| (nearest.station.clone(), nearest.distance_km))
    }
}

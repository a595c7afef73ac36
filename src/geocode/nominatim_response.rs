use crate::domain::{Place, UNKNOWN_LOCATION};
use crate::extensions::option_ext::NonEmpty;
use serde::Deserialize;

// API: https://nominatim.org/release-docs/latest/api/Reverse/
#[derive(Debug, Deserialize)]
pub struct NominatimResponse {
    pub display_name: Option<String>,
    pub address: Option<NominatimAddress>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NominatimAddress {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub hamlet: Option<String>,
    pub suburb: Option<String>,
    pub country_code: Option<String>,
    pub state: Option<String>,
    pub region: Option<String>,
}

impl NominatimResponse {
    /// Picks the most specific settlement name, falling back to the first part of the display name.
    /// Returns `None` if the response carries no address at all.
    pub fn into_place(self) -> Option<Place> {
        let address = self.address?;
        let name = address
            .city
            .non_empty()
            .or(address.town.non_empty())
            .or(address.village.non_empty())
            .or(address.hamlet.non_empty())
            .or(address.suburb.non_empty())
            .or_else(|| self.display_name.and_then(|d| d.split(',').next().map(str::to_string)).non_empty())
            .unwrap_or_else(|| UNKNOWN_LOCATION.to_string());

        Some(Place {
            name,
            country_code: address.country_code.non_empty().unwrap_or_default(),
            state: address.state.non_empty().or(address.region.non_empty()).unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn address() -> NominatimAddress {
        NominatimAddress {
            city: Some("Amsterdam".to_string()),
            town: Some("Zaandam".to_string()),
            village: Some("Durgerdam".to_string()),
            hamlet: Some("Ransdorp".to_string()),
            suburb: Some("Centrum".to_string()),
            country_code: Some("nl".to_string()),
            state: Some("Noord-Holland".to_string()),
            region: Some("Randstad".to_string()),
        }
    }

    fn place(display_name: Option<&str>, address: NominatimAddress) -> Place {
        let response = NominatimResponse {
            display_name: display_name.map(str::to_string),
            address: Some(address),
        };
        response.into_place().unwrap()
    }

    #[test]
    fn deserializes_a_reverse_lookup() {
        let response: NominatimResponse = serde_json::from_str(include_str!("../../tests/resources/nominatim_reverse_response.json")).unwrap();
        let address = response.address.unwrap();

        assert_eq!(address.city.as_deref(), Some("Amsterdam"));
        assert_eq!(address.country_code.as_deref(), Some("nl"));
        assert_eq!(address.town, None);
    }

    #[rstest]
    #[case::city(address(), "Amsterdam")]
    #[case::town(NominatimAddress { city: None, ..address() }, "Zaandam")]
    #[case::village(NominatimAddress { city: None, town: None, ..address() }, "Durgerdam")]
    #[case::hamlet(NominatimAddress { city: None, town: None, village: None, ..address() }, "Ransdorp")]
    #[case::suburb(NominatimAddress { city: None, town: None, village: None, hamlet: None, ..address() }, "Centrum")]
    #[case::empty_city_is_skipped(NominatimAddress { city: Some(String::new()), ..address() }, "Zaandam")]
    #[case::display_name(NominatimAddress::default(), "Amstel 1")]
    fn name_fallback_chain(#[case] address: NominatimAddress, #[case] expected: &str) {
        let place = place(Some("Amstel 1, Amsterdam, Nederland"), address);
        assert_eq!(place.name, expected);
    }

    #[rstest]
    #[case::no_display_name(None)]
    #[case::empty_display_name(Some(""))]
    #[case::leading_comma(Some(", Nederland"))]
    fn unknown_location_when_nothing_names_the_place(#[case] display_name: Option<&str>) {
        let place = place(display_name, NominatimAddress::default());
        assert_eq!(place.name, UNKNOWN_LOCATION);
    }

    #[test]
    fn no_place_without_an_address() {
        let response = NominatimResponse {
            display_name: Some("Somewhere, Earth".to_string()),
            address: None,
        };

        assert_eq!(response.into_place(), None);
    }

    #[test]
    fn state_falls_back_to_region() {
        let place = place(None, NominatimAddress { state: None, ..address() });
        assert_eq!(place.state, "Randstad");
    }

    #[test]
    fn missing_country_and_state_are_empty() {
        let place = place(
            None,
            NominatimAddress {
                city: Some("Somewhere".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(
            place,
            Place {
                name: "Somewhere".to_string(),
                country_code: String::new(),
                state: String::new(),
            }
        );
    }
}

/// Filters for a directory search. Results always exclude broken streams and stations without
/// coordinates, and are ordered by click count, most popular first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StationQuery {
    pub country_code: String,
    pub state: Option<String>,
}

impl StationQuery {
    pub fn country(country_code: impl Into<String>) -> Self {
        StationQuery {
            country_code: country_code.into(),
            state: None,
        }
    }

    pub fn state(country_code: impl Into<String>, state: impl Into<String>) -> Self {
        StationQuery {
            country_code: country_code.into(),
            state: Some(state.into()),
        }
    }

    pub fn params(&self, limit: u32) -> Vec<(&'static str, String)> {
        let mut params = vec![("countrycode", self.country_code.clone())];
        if let Some(state) = &self.state {
            params.push(("state", state.clone()));
        }
        params.extend([
            ("hidebroken", "true".to_string()),
            ("has_geo_info", "true".to_string()),
            ("limit", limit.to_string()),
            ("order", "clickcount".to_string()),
            ("reverse", "true".to_string()),
        ]);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn country_params() {
        let params = StationQuery::country("NL").params(100);

        assert_eq!(
            params,
            vec![
                ("countrycode", "NL".to_string()),
                ("hidebroken", "true".to_string()),
                ("has_geo_info", "true".to_string()),
                ("limit", "100".to_string()),
                ("order", "clickcount".to_string()),
                ("reverse", "true".to_string()),
            ]
        );
    }

    #[test]
    fn state_params_follow_the_country_code() {
        let params = StationQuery::state("DE", "Baden-Württemberg").params(10);

        assert_eq!(params[0], ("countrycode", "DE".to_string()));
        assert_eq!(params[1], ("state", "Baden-Württemberg".to_string()));
        assert!(params.contains(&("limit", "10".to_string())));
    }
}

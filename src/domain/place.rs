pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// A human readable place resolved from coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Place {
    pub name: String,
    pub country_code: String,
    pub state: String,
}

impl Place {
    pub fn unknown() -> Self {
        Place {
            name: UNKNOWN_LOCATION.to_string(),
            country_code: String::new(),
            state: String::new(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN_LOCATION && self.country_code.is_empty() && self.state.is_empty()
    }
}

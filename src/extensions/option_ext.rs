pub trait NonEmpty {
    /// Treats an empty string the same as an absent one.
    fn non_empty(self) -> Option<String>;
}

impl NonEmpty for Option<String> {
    fn non_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_text() {
        assert_eq!(Some("Utrecht".to_string()).non_empty(), Some("Utrecht".to_string()));
    }

    #[test]
    fn drops_empty_strings() {
        assert_eq!(Some(String::new()).non_empty(), None);
        assert_eq!(None::<String>.non_empty(), None);
    }
}

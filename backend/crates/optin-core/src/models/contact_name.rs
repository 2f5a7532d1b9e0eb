/// First/last name pair derived from a display name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactName {
    pub first_name: String,
    pub last_name: String,
}

impl ContactName {
    /// Split a display name on whitespace.
    ///
    /// The first token becomes the first name, the remaining tokens are joined
    /// with a single space into the last name. Missing parts are empty strings.
    pub fn from_display_name(display_name: &str) -> Self {
        let mut tokens = display_name.split_whitespace();
        let first_name = tokens.next().unwrap_or_default().to_string();
        let last_name = tokens.collect::<Vec<_>>().join(" ");

        Self {
            first_name,
            last_name,
        }
    }
}

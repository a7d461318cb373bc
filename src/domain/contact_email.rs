use regex::Regex;
use std::sync::LazyLock;

// local@domain.tld, with no whitespace and a single `@`.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn parse(s: impl AsRef<str>) -> Result<Self, String> {
        let s = s.as_ref().trim();
        if EMAIL_SHAPE.is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(format!("{} is not a valid contact email.", s))
        }
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

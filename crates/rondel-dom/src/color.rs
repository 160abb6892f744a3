use serde::{Deserialize, Serialize};
use std::fmt;

/// A CSS color value, stored verbatim.
///
/// The value is never validated. An identifier the output medium does not
/// recognize is passed through unchanged and the medium falls back to its
/// own default rendering, the same way a browser treats a bad inline
/// `background-color`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Wrap a CSS color keyword or any other color expression.
    pub fn named(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Build an `rgb(r, g, b)` functional value.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("rgb({}, {}, {})", r, g, b))
    }

    pub fn red() -> Self {
        Self::named("red")
    }

    pub fn green() -> Self {
        Self::named("green")
    }

    pub fn blue() -> Self {
        Self::named("blue")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::named(value)
    }
}

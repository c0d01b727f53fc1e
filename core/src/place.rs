//! Origin and destination identifiers for the `fromPlace` / `toPlace` parameters.

use std::fmt;

/// Origin or destination of a trip: a `lat,lon[,level]` tuple in degrees or a
/// stop id.
///
/// The wrapped string is sent to the server exactly as given, so a caller
/// that writes `"10.0,20.0"` gets `10.0,20.0` on the wire, not `10,20`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Place(String);

impl Place {
    pub fn coordinates(lat: f64, lon: f64) -> Self {
        Place(format!("{lat},{lon}"))
    }

    pub fn coordinates_with_level(lat: f64, lon: f64, level: f64) -> Self {
        Place(format!("{lat},{lon},{level}"))
    }

    pub fn stop(id: impl Into<String>) -> Self {
        Place(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Place {
    fn from(s: &str) -> Self {
        Place(s.to_string())
    }
}

impl From<String> for Place {
    fn from(s: String) -> Self {
        Place(s)
    }
}

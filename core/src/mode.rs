//! Transport modes accepted by the `mode` query parameter.

use std::fmt;
use std::str::FromStr;

/// A transport mode the router may use.
///
/// `Transit` is the umbrella for every scheduled mode; the remaining scheduled
/// variants narrow it down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Walk,
    Bike,
    Car,
    Transit,
    Tram,
    Subway,
    Ferry,
    Airplane,
    Metro,
    Bus,
    Coach,
    Rail,
    HighspeedRail,
    LongDistance,
    NightRail,
    RegionalFastRail,
    RegionalRail,
    Other,
}

impl Mode {
    pub const ALL: [Mode; 18] = [
        Mode::Walk,
        Mode::Bike,
        Mode::Car,
        Mode::Transit,
        Mode::Tram,
        Mode::Subway,
        Mode::Ferry,
        Mode::Airplane,
        Mode::Metro,
        Mode::Bus,
        Mode::Coach,
        Mode::Rail,
        Mode::HighspeedRail,
        Mode::LongDistance,
        Mode::NightRail,
        Mode::RegionalFastRail,
        Mode::RegionalRail,
        Mode::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Walk => "WALK",
            Mode::Bike => "BIKE",
            Mode::Car => "CAR",
            Mode::Transit => "TRANSIT",
            Mode::Tram => "TRAM",
            Mode::Subway => "SUBWAY",
            Mode::Ferry => "FERRY",
            Mode::Airplane => "AIRPLANE",
            Mode::Metro => "METRO",
            Mode::Bus => "BUS",
            Mode::Coach => "COACH",
            Mode::Rail => "RAIL",
            Mode::HighspeedRail => "HIGHSPEED_RAIL",
            Mode::LongDistance => "LONG_DISTANCE",
            Mode::NightRail => "NIGHT_RAIL",
            Mode::RegionalFastRail => "REGIONAL_FAST_RAIL",
            Mode::RegionalRail => "REGIONAL_RAIL",
            Mode::Other => "OTHER",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a mode name is not one of `Mode::ALL`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode {0:?}")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Mode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownMode(name.to_string()))
    }
}

/// Parse a comma-separated list such as `WALK,TRANSIT`. Empty segments are
/// skipped.
pub fn parse_modes(s: &str) -> Result<Vec<Mode>, UnknownMode> {
    s.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Render modes the way the `mode` parameter expects them.
pub fn join_modes(modes: &[Mode]) -> String {
    modes
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// A latitude/longitude pair, sent to the API as the `location` query
/// parameter.
///
/// Coordinates are not range-checked; out-of-range values are passed
/// through and rejected (or not) by the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps the decimal point on whole floats ("40.0", not
        // "40"), which is the coordinate form the API documents.
        write!(f, "{:?},{:?}", self.latitude, self.longitude)
    }
}

/// Measurement unit system understood by the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    Metric,
    English,
}

impl Unit {
    /// Canonical tag used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Metric => "Metric",
            Unit::English => "English",
        }
    }

    pub const fn all() -> &'static [Unit] {
        &[Unit::Metric, Unit::English]
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

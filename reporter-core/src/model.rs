use serde::{Deserialize, Serialize};

/// Current conditions for one location, extracted from the weather provider.
///
/// Built once per run and consumed once by prompt construction; never
/// persisted. Values pass through from the provider unvalidated beyond what
/// the types encode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub condition: String,
    pub wind_kph: f64,
}

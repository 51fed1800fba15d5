use crate::errors::DashboardError;

pub const NANOS_PER_MICRO: f64 = 1_000.0;
pub const NANOS_PER_MILLI: f64 = 1_000_000.0;
pub const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Time unit token as emitted by the benchmark harness. Microseconds accept
/// the ASCII spelling and both Unicode micro glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeUnit {
    Nanos,
    Micros,
    Millis,
    Secs,
}

impl TimeUnit {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "ns" => Some(TimeUnit::Nanos),
            "us" | "\u{b5}s" | "\u{3bc}s" => Some(TimeUnit::Micros),
            "ms" => Some(TimeUnit::Millis),
            "s" => Some(TimeUnit::Secs),
            _ => None,
        }
    }

    pub fn nanos_multiplier(self) -> f64 {
        match self {
            TimeUnit::Nanos => 1.0,
            TimeUnit::Micros => NANOS_PER_MICRO,
            TimeUnit::Millis => NANOS_PER_MILLI,
            TimeUnit::Secs => NANOS_PER_SEC,
        }
    }
}

/// Converts a measured magnitude into nanoseconds. Unknown unit tokens and
/// negative magnitudes are recoverable errors: the caller skips the single
/// measurement and keeps going.
pub fn normalize_to_nanos(value: f64, token: &str) -> Result<f64, DashboardError> {
    if value < 0.0 {
        return Err(DashboardError::parse(format!(
            "negative time value {value}"
        )));
    }
    let unit = TimeUnit::parse(token)
        .ok_or_else(|| DashboardError::parse(format!("unknown time unit '{token}'")))?;
    Ok(value * unit.nanos_multiplier())
}

/// Tiered display formatting. Cutoffs are strict: 999 ns stays in
/// nanoseconds, 1000 ns renders as 1.0 microseconds, and so on through
/// milliseconds and seconds.
pub fn format_nanos(ns: f64) -> String {
    if ns < 1_000.0 {
        format!("{ns:.0} ns")
    } else if ns < 1_000_000.0 {
        format!("{:.1} \u{3bc}s", ns / NANOS_PER_MICRO)
    } else if ns < 1_000_000_000.0 {
        format!("{:.1} ms", ns / NANOS_PER_MILLI)
    } else {
        format!("{:.2} s", ns / NANOS_PER_SEC)
    }
}

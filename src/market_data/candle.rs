use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

// ---------------------------------------------------------------------------
// Data types
// ---------------------------------------------------------------------------

/// A single OHLCV bucket of trading activity for one token.
///
/// `time` is the bucket's open time in seconds since the epoch.  Candle
/// series are always ordered oldest-first with strictly increasing `time`.
/// Volume may be absent in the market-data payload, in which case it
/// deserialises to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: f64,
}

impl Candle {
    pub fn new(time: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// (high + low + close) / 3
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }

    /// Bucket open time as a UTC timestamp, `None` if out of chrono's range.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Read a JSON array of candles from `path`.
///
/// Candles that break the strictly-increasing `time` ordering are reported
/// with a warning but kept as-is; the indicator functions treat the slice as
/// given.
pub fn load_candles(path: impl AsRef<Path>) -> Result<Vec<Candle>> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read candles from {}", path.display()))?;

    let candles = parse_candles(&content)
        .with_context(|| format!("failed to parse candles from {}", path.display()))?;

    let out_of_order = candles.windows(2).filter(|w| w[1].time <= w[0].time).count();
    if out_of_order > 0 {
        warn!(
            path = %path.display(),
            out_of_order,
            "candle times are not strictly increasing"
        );
    }

    info!(
        path = %path.display(),
        count = candles.len(),
        first = ?candles.first().and_then(Candle::datetime),
        last = ?candles.last().and_then(Candle::datetime),
        "candles loaded"
    );

    Ok(candles)
}

/// Parse a JSON array of candles.
pub fn parse_candles(json: &str) -> Result<Vec<Candle>> {
    serde_json::from_str(json).context("candle payload is not a valid JSON candle array")
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typical_price_is_hlc_mean() {
        let c = Candle::new(0, 1.0, 4.0, 1.0, 1.0, 0.0);
        assert!((c.typical_price() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn missing_volume_defaults_to_zero() {
        let json = r#"[{ "time": 1000, "open": 1.0, "high": 2.0, "low": 0.5, "close": 1.5 }]"#;
        let candles = parse_candles(json).unwrap();
        assert_eq!(candles.len(), 1);
        assert_eq!(candles[0].volume, 0.0);
        assert_eq!(candles[0].time, 1000);
    }

    #[test]
    fn datetime_converts_seconds() {
        let c = Candle::new(86_400, 1.0, 1.0, 1.0, 1.0, 1.0);
        let dt = c.datetime().unwrap();
        assert_eq!(dt.to_rfc3339(), "1970-01-02T00:00:00+00:00");
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(parse_candles(r#"{ "time": 1 }"#).is_err());
    }

    #[test]
    fn load_missing_file_is_an_error() {
        assert!(load_candles("/nonexistent/candles.json").is_err());
    }
}

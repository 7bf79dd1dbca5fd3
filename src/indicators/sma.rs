// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// The arithmetic mean of the last `period` closes.
// =============================================================================

use super::{align_to_suffix, window_mean};
use crate::market_data::Candle;
use crate::types::IndicatorValue;

/// Compute the SMA series over the candles' closes.
///
/// One output per candle starting at index `period - 1`; empty when
/// `period == 0` or there are fewer than `period` candles.
pub fn calculate_sma(candles: &[Candle], period: usize) -> Vec<IndicatorValue> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    align_to_suffix(candles, sma_values(&closes, period))
}

/// SMA over a plain slice of values, one output per value starting at index
/// `period - 1`.  Each window is summed afresh rather than slid.
pub(crate) fn sma_values(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    values.windows(period).map(window_mean).collect()
}

// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA gives more weight to recent prices, making it more responsive to new
// information than the Simple Moving Average (SMA).
//
// Formula:
//   multiplier = 2 / (period + 1)
//   EMA_t      = (close_t - EMA_{t-1}) * multiplier + EMA_{t-1}
//
// The very first EMA value is seeded with the SMA of the first `period` closes
// and anchored at index `period - 1`.
// =============================================================================

use super::{align_to_suffix, window_mean};
use crate::market_data::Candle;
use crate::types::IndicatorValue;

/// Compute the EMA series over the candles' closes.
///
/// Returns an empty `Vec` when the input is too short or the period is zero.
/// Each output element corresponds to a candle starting at index `period - 1`.
pub fn calculate_ema(candles: &[Candle], period: usize) -> Vec<IndicatorValue> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    align_to_suffix(candles, ema_values(&closes, period))
}

/// EMA over a plain slice of values.
///
/// # Edge cases
/// - `period == 0` => empty vec
/// - `values.len() < period` => empty vec
pub(crate) fn ema_values(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    let multiplier = 2.0 / (period as f64 + 1.0);

    // Seed: SMA of the first `period` values.
    let seed = window_mean(&values[..period]);

    let mut result = Vec::with_capacity(values.len() - period + 1);
    result.push(seed);

    let mut prev_ema = seed;
    for &value in &values[period..] {
        let ema = (value - prev_ema) * multiplier + prev_ema;
        result.push(ema);
        prev_ema = ema;
    }

    result
}

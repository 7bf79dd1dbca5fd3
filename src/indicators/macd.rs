// =============================================================================
// Moving Average Convergence Divergence (MACD)
// =============================================================================
//
//   MACD line   = EMA(fast) - EMA(slow)
//   Signal line = EMA(signal) of the MACD line
//   Histogram   = MACD line - Signal line
//
// The two EMAs start at different candles, so they are combined by matching
// timestamps rather than by index.  Points are emitted only where the signal
// line exists.
// =============================================================================

use super::ema::{calculate_ema, ema_values};
use super::merge_join;
use crate::market_data::Candle;
use crate::types::MacdPoint;

/// Compute the MACD series.
///
/// Returns an empty `Vec` when any period is zero, when either EMA cannot be
/// computed, or when the MACD line is shorter than `signal_period`.  With
/// `fast <= slow` the first point lands on candle `slow + signal - 2`.
pub fn calculate_macd(
    candles: &[Candle],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Vec<MacdPoint> {
    if signal_period == 0 {
        return Vec::new();
    }

    let fast = calculate_ema(candles, fast_period);
    let slow = calculate_ema(candles, slow_period);
    if fast.is_empty() || slow.is_empty() {
        return Vec::new();
    }

    let macd_line: Vec<(i64, f64)> = merge_join(&fast, &slow)
        .into_iter()
        .map(|(time, f, s)| (time, f - s))
        .collect();
    if macd_line.len() < signal_period {
        return Vec::new();
    }

    let macd_values: Vec<f64> = macd_line.iter().map(|&(_, v)| v).collect();
    let signal = ema_values(&macd_values, signal_period);

    macd_line[signal_period - 1..]
        .iter()
        .zip(signal)
        .map(|(&(time, macd), signal)| MacdPoint {
            time,
            macd,
            signal,
            histogram: macd - signal,
        })
        .collect()
}

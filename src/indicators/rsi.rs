// =============================================================================
// Relative Strength Index (RSI) — Wilder's Smoothing
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes to evaluate
// whether an asset is overbought or oversold.
//
// Step 1 — Compute price changes (deltas) from consecutive closes.
// Step 2 — Seed average gain / average loss with the SMA of the first `period`
//          gains / losses.
// Step 3 — Apply Wilder's exponential smoothing:
//            avg_gain = (prev_avg_gain * (period - 1) + current_gain) / period
//            avg_loss = (prev_avg_loss * (period - 1) + current_loss) / period
// Step 4 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS)
// =============================================================================

use super::align_to_suffix;
use crate::market_data::Candle;
use crate::types::IndicatorValue;

/// Compute the full RSI series for the given candles and `period`.
///
/// The returned vector has one RSI value for each candle starting at index
/// `period` (the first `period` deltas are consumed to seed the averages).
///
/// # Edge cases
/// - `period == 0` => empty vec
/// - `candles.len() <= period` => empty vec (need at least `period` deltas)
/// - If average loss is zero, RSI is 100.0 (this includes a flat market).
pub fn calculate_rsi(candles: &[Candle], period: usize) -> Vec<IndicatorValue> {
    if period == 0 || candles.len() <= period {
        return Vec::new();
    }

    // --- Compute price deltas ------------------------------------------------
    let deltas: Vec<f64> = candles.windows(2).map(|w| w[1].close - w[0].close).collect();

    // --- Seed averages with SMA of first `period` deltas ---------------------
    let (sum_gain, sum_loss) = deltas[..period].iter().fold((0.0_f64, 0.0_f64), |(g, l), &d| {
        if d > 0.0 {
            (g + d, l)
        } else {
            (g, l + d.abs())
        }
    });

    let period_f = period as f64;
    let mut avg_gain = sum_gain / period_f;
    let mut avg_loss = sum_loss / period_f;

    let mut values = Vec::with_capacity(deltas.len() - period + 1);
    values.push(rsi_from_averages(avg_gain, avg_loss));

    // --- Wilder's smoothing for subsequent values ----------------------------
    for &delta in &deltas[period..] {
        let gain = if delta > 0.0 { delta } else { 0.0 };
        let loss = if delta < 0.0 { delta.abs() } else { 0.0 };

        avg_gain = (avg_gain * (period_f - 1.0) + gain) / period_f;
        avg_loss = (avg_loss * (period_f - 1.0) + loss) / period_f;

        values.push(rsi_from_averages(avg_gain, avg_loss));
    }

    align_to_suffix(candles, values)
}

// =============================================================================
// Internal helpers
// =============================================================================

/// Convert average gain / average loss into an RSI value in [0, 100].
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}

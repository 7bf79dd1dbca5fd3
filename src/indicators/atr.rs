// =============================================================================
// Average True Range (ATR) — Wilder's Smoothing Method
// =============================================================================
//
// ATR measures market volatility by decomposing the entire range of a bar.
//
// True Range (TR) for each bar:
//   TR = max(H - L, |H - prevClose|, |L - prevClose|)
//
// ATR is then the smoothed average of TR using Wilder's method:
//   ATR_0   = SMA of first `period` TR values
//   ATR_t   = (ATR_{t-1} * (period - 1) + TR_t) / period
//
// Default period: 14
// =============================================================================

use super::align_to_suffix;
use crate::market_data::Candle;
use crate::types::IndicatorValue;

/// Compute the ATR series using Wilder's smoothing method.
///
/// # Arguments
/// - `candles`: slice of OHLCV candles (oldest first).
/// - `period`: look-back window for the ATR calculation.
///
/// # Returns
/// One value per candle starting at index `period`, or an empty `Vec` when:
/// - `period` is zero.
/// - There are fewer than `period + 1` candles (we need `period` TR values,
///   each requiring a previous candle for the True Range calculation).
pub fn calculate_atr(candles: &[Candle], period: usize) -> Vec<IndicatorValue> {
    if period == 0 || candles.len() <= period {
        return Vec::new();
    }

    // --- Step 1: True Range for each consecutive pair ------------------------
    let tr_values = true_ranges(candles);

    // --- Step 2: Seed ATR with SMA of first `period` TR values ---------------
    let period_f = period as f64;
    let mut atr = tr_values[..period].iter().sum::<f64>() / period_f;

    let mut values = Vec::with_capacity(tr_values.len() - period + 1);
    values.push(atr);

    // --- Step 3: Wilder's smoothing for remaining TR values ------------------
    for &tr in &tr_values[period..] {
        atr = (atr * (period_f - 1.0) + tr) / period_f;
        values.push(atr);
    }

    align_to_suffix(candles, values)
}

/// True Range of every candle that has a predecessor (`candles.len() - 1`
/// values, the first belonging to candle 1).
pub(crate) fn true_ranges(candles: &[Candle]) -> Vec<f64> {
    candles
        .windows(2)
        .map(|w| true_range(&w[1], w[0].close))
        .collect()
}

pub(crate) fn true_range(candle: &Candle, prev_close: f64) -> f64 {
    let hl = candle.high - candle.low;
    let hc = (candle.high - prev_close).abs();
    let lc = (candle.low - prev_close).abs();
    hl.max(hc).max(lc)
}

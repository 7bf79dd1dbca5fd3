// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the chart indicators.  Every
// public function borrows an oldest-first candle slice and returns a fresh
// `Vec` of points aligned to a contiguous suffix of the candle times.  An
// empty `Vec` means "not enough data for these parameters"; no function
// panics, clamps its parameters, or pads with NaN.

pub mod adx;
pub mod atr;
pub mod bollinger;
pub mod catalog;
pub mod cci;
pub mod ema;
pub mod ichimoku;
pub mod keltner;
pub mod macd;
pub mod momentum;
pub mod obv;
pub mod parabolic_sar;
pub mod roc;
pub mod rsi;
pub mod sma;
pub mod stochastic;
pub mod vwap;
pub mod vwma;
pub mod williams_r;
pub mod wma;

pub use adx::calculate_adx;
pub use atr::calculate_atr;
pub use bollinger::calculate_bollinger;
pub use cci::calculate_cci;
pub use ema::calculate_ema;
pub use ichimoku::calculate_ichimoku;
pub use keltner::calculate_keltner;
pub use macd::calculate_macd;
pub use momentum::calculate_momentum;
pub use obv::calculate_obv;
pub use parabolic_sar::calculate_parabolic_sar;
pub use roc::calculate_roc;
pub use rsi::calculate_rsi;
pub use sma::calculate_sma;
pub use stochastic::calculate_stochastic;
pub use vwap::calculate_vwap;
pub use vwma::calculate_vwma;
pub use williams_r::calculate_williams_r;
pub use wma::calculate_wma;

use crate::market_data::Candle;
use crate::types::IndicatorValue;

// =============================================================================
// Shared helpers
// =============================================================================

/// Times of the last `count` candles, oldest first.
pub(crate) fn suffix_times(candles: &[Candle], count: usize) -> impl Iterator<Item = i64> + '_ {
    let start = candles.len().saturating_sub(count);
    candles[start..].iter().map(|c| c.time)
}

/// Pair `values` with the times of the last `values.len()` candles.
pub(crate) fn align_to_suffix(candles: &[Candle], values: Vec<f64>) -> Vec<IndicatorValue> {
    suffix_times(candles, values.len())
        .zip(values)
        .map(|(time, value)| IndicatorValue::new(time, value))
        .collect()
}

/// Highest high and lowest low of every `period`-candle window, one entry per
/// candle starting at index `period - 1`.
pub(crate) fn rolling_extremes(candles: &[Candle], period: usize) -> Vec<(f64, f64)> {
    if period == 0 || candles.len() < period {
        return Vec::new();
    }
    candles
        .windows(period)
        .map(|w| {
            w.iter().fold((f64::NEG_INFINITY, f64::INFINITY), |(hh, ll), c| {
                (hh.max(c.high), ll.min(c.low))
            })
        })
        .collect()
}

/// Neumaier-compensated sum.
pub(crate) fn compensated_sum(values: impl IntoIterator<Item = f64>) -> f64 {
    let mut sum = 0.0_f64;
    let mut compensation = 0.0_f64;
    for v in values {
        let t = sum + v;
        if sum.abs() >= v.abs() {
            compensation += (sum - t) + v;
        } else {
            compensation += (v - t) + sum;
        }
        sum = t;
    }
    sum + compensation
}

/// Arithmetic mean of `window`, summed as offsets from its first element so
/// a constant window yields that constant exactly.  An empty window is 0.
pub(crate) fn window_mean(window: &[f64]) -> f64 {
    match window.first() {
        Some(&pivot) => {
            let offsets = compensated_sum(window.iter().map(|v| v - pivot));
            pivot + offsets / window.len() as f64
        }
        None => 0.0,
    }
}

/// Ordered merge-join of two time-sorted series on `time`.  Only timestamps
/// present in both survive.
pub(crate) fn merge_join(left: &[IndicatorValue], right: &[IndicatorValue]) -> Vec<(i64, f64, f64)> {
    let mut joined = Vec::with_capacity(left.len().min(right.len()));
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        let (l, r) = (left[i], right[j]);
        match l.time.cmp(&r.time) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                joined.push((l.time, l.value, r.value));
                i += 1;
                j += 1;
            }
        }
    }
    joined
}

// =============================================================================
// Weighted Moving Average (WMA)
// =============================================================================
//
// Linearly weighted mean of the last `period` closes: the newest close has
// weight `period`, the oldest weight 1.
//
//   WMA = Σ (period - j) * close_{t-j}  /  (period * (period + 1) / 2)
// =============================================================================

use super::{align_to_suffix, compensated_sum};
use crate::market_data::Candle;
use crate::types::IndicatorValue;

/// Compute the WMA series over the candles' closes, one output per candle
/// starting at index `period - 1`.
pub fn calculate_wma(candles: &[Candle], period: usize) -> Vec<IndicatorValue> {
    if period == 0 || candles.len() < period {
        return Vec::new();
    }

    let denominator = (period * (period + 1)) as f64 / 2.0;

    let values = (period..=candles.len())
        .map(|end| {
            let window = &candles[end - period..end];
            let pivot = window[0].close;
            // window[k] sits at lag `period - 1 - k`, so its weight is `k + 1`.
            let weighted = compensated_sum(
                window
                    .iter()
                    .enumerate()
                    .map(|(k, c)| (k + 1) as f64 * (c.close - pivot)),
            );
            pivot + weighted / denominator
        })
        .collect();

    align_to_suffix(candles, values)
}

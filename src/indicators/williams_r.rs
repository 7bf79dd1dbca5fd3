// =============================================================================
// Williams %R
// =============================================================================
//
//   %R = (highest_high - close) / (highest_high - lowest_low) * -100
//
// Ranges from 0 (close at the high) to -100 (close at the low).  A flat
// window reads -50.

use super::{align_to_suffix, rolling_extremes};
use crate::market_data::Candle;
use crate::types::IndicatorValue;

/// Compute Williams %R, one value per candle starting at index `period - 1`.
pub fn calculate_williams_r(candles: &[Candle], period: usize) -> Vec<IndicatorValue> {
    let offset = period.saturating_sub(1);
    let values = rolling_extremes(candles, period)
        .into_iter()
        .zip(candles.iter().skip(offset))
        .map(|((highest, lowest), c)| {
            let range = highest - lowest;
            if range == 0.0 {
                -50.0
            } else {
                (highest - c.close) / range * -100.0
            }
        })
        .collect();
    align_to_suffix(candles, values)
}

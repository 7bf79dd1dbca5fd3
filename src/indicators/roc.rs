// =============================================================================
// Rate of Change (ROC) — Momentum Indicator
// =============================================================================
//
// ROC measures the percentage change in price over a look-back period:
//   ROC = ((close - close_n) / close_n) * 100
//
// Positive ROC indicates upward momentum; negative indicates downward.

use super::align_to_suffix;
use crate::market_data::Candle;
use crate::types::IndicatorValue;

/// Calculate the Rate of Change (ROC) for the given candles and period.
///
/// Returns one ROC value per candle starting at index `period`.  A zero
/// reference close yields 0.
pub fn calculate_roc(candles: &[Candle], period: usize) -> Vec<IndicatorValue> {
    if period == 0 || candles.len() <= period {
        return Vec::new();
    }

    let mut values = Vec::with_capacity(candles.len() - period);
    for i in period..candles.len() {
        let prev = candles[i - period].close;
        if prev == 0.0 {
            values.push(0.0);
        } else {
            values.push(((candles[i].close - prev) / prev) * 100.0);
        }
    }
    align_to_suffix(candles, values)
}

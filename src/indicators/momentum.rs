// =============================================================================
// Momentum
// =============================================================================
//
//   MOM = close_t - close_{t-period}

use super::align_to_suffix;
use crate::market_data::Candle;
use crate::types::IndicatorValue;

/// Compute momentum, one value per candle starting at index `period`.
pub fn calculate_momentum(candles: &[Candle], period: usize) -> Vec<IndicatorValue> {
    if period == 0 || candles.len() <= period {
        return Vec::new();
    }

    let values = (period..candles.len())
        .map(|i| candles[i].close - candles[i - period].close)
        .collect();
    align_to_suffix(candles, values)
}

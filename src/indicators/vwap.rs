// =============================================================================
// Volume-Weighted Average Price (VWAP)
// =============================================================================
//
//   VWAP_t = Σ_{i<=t} typical_i * volume_i  /  Σ_{i<=t} volume_i
//   typical = (high + low + close) / 3
//
// Accumulates across the whole series.  While cumulative volume is still zero
// the value is the candle's typical price.

use crate::market_data::Candle;
use crate::types::IndicatorValue;

/// Compute the cumulative VWAP, one value per candle.
pub fn calculate_vwap(candles: &[Candle]) -> Vec<IndicatorValue> {
    let mut cum_volume = 0.0_f64;
    let mut cum_tp_volume = 0.0_f64;

    candles
        .iter()
        .map(|c| {
            let typical = c.typical_price();
            cum_tp_volume += typical * c.volume;
            cum_volume += c.volume;

            let value = if cum_volume == 0.0 {
                typical
            } else {
                cum_tp_volume / cum_volume
            };
            IndicatorValue::new(c.time, value)
        })
        .collect()
}

// =============================================================================
// Volume-Weighted Moving Average (VWMA)
// =============================================================================
//
//   VWMA = Σ close * volume / Σ volume   over the last `period` candles
//
// A window with zero total volume falls back to the current close.
// =============================================================================

use super::{align_to_suffix, compensated_sum};
use crate::market_data::Candle;
use crate::types::IndicatorValue;

/// Compute the VWMA series, one output per candle starting at index
/// `period - 1`.
pub fn calculate_vwma(candles: &[Candle], period: usize) -> Vec<IndicatorValue> {
    if period == 0 || candles.len() < period {
        return Vec::new();
    }

    let values = (period..=candles.len())
        .map(|end| {
            let window = &candles[end - period..end];
            let volume = compensated_sum(window.iter().map(|c| c.volume));
            if volume == 0.0 {
                candles[end - 1].close
            } else {
                let pivot = window[0].close;
                let weighted = compensated_sum(window.iter().map(|c| (c.close - pivot) * c.volume));
                pivot + weighted / volume
            }
        })
        .collect();

    align_to_suffix(candles, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vwma_weights_by_volume() {
        let candles = vec![
            Candle::new(0, 1.0, 1.0, 1.0, 1.0, 1.0),
            Candle::new(1, 4.0, 4.0, 4.0, 4.0, 3.0),
        ];
        let vwma = calculate_vwma(&candles, 2);
        // (1*1 + 4*3) / 4 = 3.25
        assert_eq!(vwma, vec![IndicatorValue::new(1, 3.25)]);
    }

    #[test]
    fn vwma_zero_volume_falls_back_to_close() {
        let candles = vec![
            Candle::new(0, 1.0, 1.0, 1.0, 1.0, 0.0),
            Candle::new(1, 2.0, 2.0, 2.0, 2.0, 0.0),
            Candle::new(2, 3.0, 3.0, 3.0, 3.0, 0.0),
        ];
        let vwma = calculate_vwma(&candles, 2);
        assert_eq!(vwma.len(), 2);
        assert_eq!(vwma[0].value, 2.0);
        assert_eq!(vwma[1].value, 3.0);
        assert!(vwma.iter().all(|p| p.value.is_finite()));
    }

    #[test]
    fn vwma_insufficient_data() {
        let candles = vec![Candle::new(0, 1.0, 1.0, 1.0, 1.0, 1.0)];
        assert!(calculate_vwma(&candles, 2).is_empty());
    }
}

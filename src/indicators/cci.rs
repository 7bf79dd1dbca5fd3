// =============================================================================
// Commodity Channel Index (CCI)
// =============================================================================
//
//   TP  = (high + low + close) / 3
//   CCI = (TP - SMA(TP)) / (0.015 * mean_deviation)
//
// mean_deviation is the mean absolute distance of the window's TPs from their
// SMA.  A zero mean deviation yields 0.

use super::{align_to_suffix, window_mean};
use crate::market_data::Candle;
use crate::types::IndicatorValue;

const LAMBERT_CONSTANT: f64 = 0.015;

/// Compute CCI, one value per candle starting at index `period - 1`.
pub fn calculate_cci(candles: &[Candle], period: usize) -> Vec<IndicatorValue> {
    if period == 0 || candles.len() < period {
        return Vec::new();
    }

    let period_f = period as f64;
    let typical: Vec<f64> = candles.iter().map(Candle::typical_price).collect();

    let values = (period..=typical.len())
        .map(|end| {
            let window = &typical[end - period..end];
            let mean = window_mean(window);
            let mean_dev = window.iter().map(|tp| (tp - mean).abs()).sum::<f64>() / period_f;
            if mean_dev == 0.0 {
                0.0
            } else {
                (typical[end - 1] - mean) / (LAMBERT_CONSTANT * mean_dev)
            }
        })
        .collect();

    align_to_suffix(candles, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(time: i64, price: f64) -> Candle {
        Candle::new(time, price, price, price, price, 1.0)
    }

    #[test]
    fn cci_hand_computed() {
        // TPs 1, 2, 3: mean 2, mean deviation 2/3 => (3 - 2) / (0.015 * 2/3) = 100
        let candles = vec![candle(0, 1.0), candle(1, 2.0), candle(2, 3.0)];
        let cci = calculate_cci(&candles, 3);
        assert_eq!(cci.len(), 1);
        assert!((cci[0].value - 100.0).abs() < 1e-9);
    }

    #[test]
    fn cci_flat_market_is_zero() {
        let candles: Vec<Candle> = (0..30).map(|i| candle(i, 4.0)).collect();
        let cci = calculate_cci(&candles, 20);
        assert_eq!(cci.len(), 11);
        assert!(cci.iter().all(|p| p.value == 0.0));
    }

    #[test]
    fn cci_insufficient_data() {
        let candles: Vec<Candle> = (0..5).map(|i| candle(i, 4.0)).collect();
        assert!(calculate_cci(&candles, 20).is_empty());
    }
}

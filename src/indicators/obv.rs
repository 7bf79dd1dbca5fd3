// =============================================================================
// On-Balance Volume (OBV)
// =============================================================================
//
// Running volume total: add the candle's volume on an up close, subtract it on
// a down close, carry forward on an unchanged close.  The first candle seeds
// the series at 0.

use crate::market_data::Candle;
use crate::types::IndicatorValue;

/// Compute OBV, one value per candle.
pub fn calculate_obv(candles: &[Candle]) -> Vec<IndicatorValue> {
    let Some(first) = candles.first() else {
        return Vec::new();
    };

    let mut result = Vec::with_capacity(candles.len());
    result.push(IndicatorValue::new(first.time, 0.0));

    let mut obv = 0.0_f64;
    for w in candles.windows(2) {
        let (prev, cur) = (&w[0], &w[1]);
        if cur.close > prev.close {
            obv += cur.volume;
        } else if cur.close < prev.close {
            obv -= cur.volume;
        }
        result.push(IndicatorValue::new(cur.time, obv));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(time: i64, close: f64, volume: f64) -> Candle {
        Candle::new(time, close, close, close, close, volume)
    }

    #[test]
    fn obv_direction_follows_close() {
        let candles = vec![
            candle(0, 10.0, 50.0),
            candle(1, 11.0, 100.0), // up
            candle(2, 10.5, 30.0),  // down
            candle(3, 10.5, 70.0),  // flat
            candle(4, 12.0, 20.0),  // up
        ];
        let obv: Vec<f64> = calculate_obv(&candles).iter().map(|p| p.value).collect();
        assert_eq!(obv, vec![0.0, 100.0, 70.0, 70.0, 90.0]);
    }

    #[test]
    fn obv_monotonic_direction_property() {
        let candles: Vec<Candle> = (0..50)
            .map(|i| candle(i, 10.0 + ((i * 7) % 5) as f64, 1.0 + i as f64))
            .collect();
        let obv = calculate_obv(&candles);
        for i in 1..candles.len() {
            let (prev, cur) = (obv[i - 1].value, obv[i].value);
            if candles[i].close > candles[i - 1].close {
                assert!(cur > prev);
            } else if candles[i].close < candles[i - 1].close {
                assert!(cur < prev);
            } else {
                assert_eq!(cur, prev);
            }
        }
    }

    #[test]
    fn obv_single_candle_is_zero() {
        let obv = calculate_obv(&[candle(7, 1.0, 5.0)]);
        assert_eq!(obv, vec![IndicatorValue::new(7, 0.0)]);
    }

    #[test]
    fn obv_empty_input() {
        assert!(calculate_obv(&[]).is_empty());
    }
}

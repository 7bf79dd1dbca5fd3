// =============================================================================
// Parabolic SAR (Stop And Reverse)
// =============================================================================
//
// A trailing stop that accelerates toward price while a trend persists:
//
//   SAR_t = SAR_{t-1} + AF * (EP - SAR_{t-1})
//
// EP is the extreme price of the current trend, AF starts at `step` and grows
// by `step` on every new extreme, capped at `max_step`.  When price crosses the
// SAR the trend flips, SAR jumps to the old EP and AF resets.
//
// Seeding: the first trend is up when close[1] >= close[0], with SAR at the
// first candle's low (high in a downtrend) and EP at its high (low).
// =============================================================================

use super::align_to_suffix;
use crate::market_data::Candle;
use crate::types::IndicatorValue;

/// Compute the Parabolic SAR, one value per candle starting at index 1.
pub fn calculate_parabolic_sar(candles: &[Candle], step: f64, max_step: f64) -> Vec<IndicatorValue> {
    if candles.len() < 2 {
        return Vec::new();
    }

    let first = &candles[0];
    let mut is_long = candles[1].close >= first.close;
    let mut af = step;
    let mut ep = if is_long { first.high } else { first.low };
    let mut sar = if is_long { first.low } else { first.high };

    let mut values = Vec::with_capacity(candles.len() - 1);
    for i in 1..candles.len() {
        let cur = &candles[i];
        sar += af * (ep - sar);

        if is_long {
            // SAR must not be above the two previous lows.
            sar = sar.min(candles[i - 1].low);
            if i >= 2 {
                sar = sar.min(candles[i - 2].low);
            }

            if cur.low < sar {
                is_long = false;
                sar = ep;
                ep = cur.low;
                af = step;
            } else if cur.high > ep {
                ep = cur.high;
                af = (af + step).min(max_step);
            }
        } else {
            // SAR must not be below the two previous highs.
            sar = sar.max(candles[i - 1].high);
            if i >= 2 {
                sar = sar.max(candles[i - 2].high);
            }

            if cur.high > sar {
                is_long = true;
                sar = ep;
                ep = cur.high;
                af = step;
            } else if cur.low < ep {
                ep = cur.low;
                af = (af + step).min(max_step);
            }
        }

        values.push(sar);
    }

    align_to_suffix(candles, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(time: i64, high: f64, low: f64, close: f64) -> Candle {
        Candle::new(time, close, high, low, close, 1.0)
    }

    #[test]
    fn sar_insufficient_data() {
        assert!(calculate_parabolic_sar(&[], 0.02, 0.2).is_empty());
        assert!(calculate_parabolic_sar(&[candle(0, 2.0, 1.0, 1.5)], 0.02, 0.2).is_empty());
    }

    #[test]
    fn sar_uptrend_stays_below_lows() {
        let candles: Vec<Candle> = (0..40)
            .map(|i| {
                let base = 10.0 + i as f64;
                candle(i, base + 0.5, base - 0.5, base + 0.25)
            })
            .collect();
        let sar = calculate_parabolic_sar(&candles, 0.02, 0.2);
        assert_eq!(sar.len(), 39);
        assert_eq!(sar[0].time, 1);
        for (p, c) in sar.iter().zip(&candles[1..]) {
            assert!(p.value < c.low, "SAR {} above low {}", p.value, c.low);
        }
    }

    #[test]
    fn sar_first_value_hand_computed() {
        // Uptrend seed: SAR = 9, EP = 11, AF = 0.02 => 9 + 0.02 * 2 = 9.04,
        // clamped to <= previous low (9).
        let candles = vec![candle(0, 11.0, 9.0, 10.0), candle(1, 12.0, 10.0, 11.0)];
        let sar = calculate_parabolic_sar(&candles, 0.02, 0.2);
        assert_eq!(sar, vec![IndicatorValue::new(1, 9.0)]);
    }

    #[test]
    fn sar_downtrend_seed_from_falling_close() {
        // close[1] < close[0] => start short with SAR at the first high.
        let candles = vec![candle(0, 11.0, 9.0, 10.0), candle(1, 10.5, 8.0, 8.5)];
        let sar = calculate_parabolic_sar(&candles, 0.02, 0.2);
        // 11 + 0.02 * (9 - 11) = 10.96, clamped to >= previous high (11).
        assert_eq!(sar[0].value, 11.0);
    }

    #[test]
    fn sar_flips_on_reversal() {
        let mut candles: Vec<Candle> = (0..10)
            .map(|i| {
                let base = 10.0 + i as f64;
                candle(i, base + 0.5, base - 0.5, base)
            })
            .collect();
        // Crash well below the trailing stop.
        candles.push(candle(10, 15.0, 5.0, 5.5));
        let sar = calculate_parabolic_sar(&candles, 0.02, 0.2);
        let last = sar.last().unwrap().value;
        // After the flip the SAR sits at the prior extreme high (19.5).
        assert_eq!(last, 19.5);
        assert!(last > candles[10].high);
    }
}

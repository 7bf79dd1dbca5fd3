// =============================================================================
// Keltner Channel
// =============================================================================
//
//   middle = EMA(ema_period) of closes
//   upper  = middle + multiplier * ATR(atr_period)
//   lower  = middle - multiplier * ATR(atr_period)
//
// EMA and ATR warm up over different windows; the channel exists only at
// timestamps present in both.
// =============================================================================

use super::atr::calculate_atr;
use super::ema::calculate_ema;
use super::merge_join;
use crate::market_data::Candle;
use crate::types::KeltnerPoint;

/// Compute the Keltner Channel.  The first point lands on candle
/// `max(ema_period - 1, atr_period)`.
pub fn calculate_keltner(
    candles: &[Candle],
    ema_period: usize,
    atr_period: usize,
    multiplier: f64,
) -> Vec<KeltnerPoint> {
    let ema = calculate_ema(candles, ema_period);
    let atr = calculate_atr(candles, atr_period);

    merge_join(&ema, &atr)
        .into_iter()
        .map(|(time, middle, atr)| KeltnerPoint {
            time,
            upper: middle + multiplier * atr,
            middle,
            lower: middle - multiplier * atr,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranging(n: usize) -> Vec<Candle> {
        (0..n)
            .map(|i| {
                let base = 20.0 + (i as f64 * 0.25).sin() * 2.0;
                Candle::new(i as i64, base, base + 1.0, base - 1.0, base + 0.25, 10.0)
            })
            .collect()
    }

    #[test]
    fn keltner_starts_where_both_series_exist() {
        let candles = ranging(40);
        // EMA(20) from index 19, ATR(10) from index 10 => join from 19.
        let kc = calculate_keltner(&candles, 20, 10, 2.0);
        assert_eq!(kc.len(), 21);
        assert_eq!(kc[0].time, 19);

        // ATR(25) from index 25 dominates EMA(5).
        let kc = calculate_keltner(&candles, 5, 25, 2.0);
        assert_eq!(kc.len(), 15);
        assert_eq!(kc[0].time, 25);
    }

    #[test]
    fn keltner_matches_components() {
        let candles = ranging(40);
        let kc = calculate_keltner(&candles, 20, 10, 1.5);
        let ema = calculate_ema(&candles, 20);
        let atr = calculate_atr(&candles, 10);
        let last = kc.last().unwrap();
        let e = ema.last().unwrap().value;
        let a = atr.last().unwrap().value;
        assert_eq!(last.middle, e);
        assert!((last.upper - (e + 1.5 * a)).abs() < 1e-12);
        assert!((last.lower - (e - 1.5 * a)).abs() < 1e-12);
    }

    #[test]
    fn keltner_insufficient_data() {
        let candles = ranging(10);
        assert!(calculate_keltner(&candles, 20, 10, 2.0).is_empty());
        assert!(calculate_keltner(&candles, 5, 10, 2.0).is_empty());
        assert!(calculate_keltner(&ranging(40), 0, 10, 2.0).is_empty());
    }
}

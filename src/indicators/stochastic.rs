// =============================================================================
// Stochastic Oscillator (slow)
// =============================================================================
//
//   raw %K      = (close - lowest_low) / (highest_high - lowest_low) * 100
//                 over the last `k_period` candles
//   smoothed %K = SMA(smooth) of raw %K
//   %D          = SMA(d_period) of smoothed %K
//
// A flat window (highest_high == lowest_low) has a raw %K of 50.
// =============================================================================

use super::sma::sma_values;
use super::{rolling_extremes, suffix_times};
use crate::market_data::Candle;
use crate::types::StochasticPoint;

/// Compute the smoothed %K / %D series.
///
/// The window is `k_period + smooth + d_period` candles and the first point
/// lands on candle `k_period + smooth + d_period - 1`; any zero parameter or
/// a shorter input gives an empty `Vec`.
pub fn calculate_stochastic(
    candles: &[Candle],
    k_period: usize,
    d_period: usize,
    smooth: usize,
) -> Vec<StochasticPoint> {
    if k_period == 0 || d_period == 0 || smooth == 0 {
        return Vec::new();
    }
    let window = match k_period
        .checked_add(smooth)
        .and_then(|w| w.checked_add(d_period))
    {
        Some(w) if w <= candles.len() => w,
        _ => return Vec::new(),
    };
    let count = candles.len() - window + 1;

    let raw_k = raw_percent_k(candles, k_period);
    let smoothed_k = sma_values(&raw_k, smooth);
    let d = sma_values(&smoothed_k, d_period);

    // %D starts two candles before the window closes; those points are dropped.
    let k_tail = &smoothed_k[smoothed_k.len() - count..];
    let d_tail = &d[d.len() - count..];

    suffix_times(candles, count)
        .zip(k_tail)
        .zip(d_tail)
        .map(|((time, &k), &d)| StochasticPoint { time, k, d })
        .collect()
}

/// Unsmoothed %K, one value per candle starting at index `k_period - 1`.
pub(crate) fn raw_percent_k(candles: &[Candle], k_period: usize) -> Vec<f64> {
    let offset = k_period.saturating_sub(1);
    rolling_extremes(candles, k_period)
        .into_iter()
        .zip(candles.iter().skip(offset))
        .map(|((highest, lowest), c)| {
            let range = highest - lowest;
            if range == 0.0 {
                50.0
            } else {
                (c.close - lowest) / range * 100.0
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(time: i64, high: f64, low: f64, close: f64) -> Candle {
        Candle::new(time, close, high, low, close, 1.0)
    }

    fn wave(n: usize) -> Vec<Candle> {
        (0..n)
            .map(|i| {
                let base = 50.0 + (i as f64 * 0.4).sin() * 10.0;
                candle(i as i64, base + 1.5, base - 1.5, base + 0.5)
            })
            .collect()
    }

    #[test]
    fn stochastic_output_length() {
        let candles = wave(40);
        let stoch = calculate_stochastic(&candles, 14, 3, 3);
        // window = 14 + 3 + 3 = 20
        assert_eq!(stoch.len(), 40 - 19);
        assert_eq!(stoch[0].time, 19);
    }

    #[test]
    fn stochastic_insufficient_data() {
        assert!(calculate_stochastic(&wave(19), 14, 3, 3).is_empty());
        assert_eq!(calculate_stochastic(&wave(20), 14, 3, 3).len(), 1);
    }

    #[test]
    fn stochastic_zero_parameters() {
        let candles = wave(40);
        assert!(calculate_stochastic(&candles, 0, 3, 3).is_empty());
        assert!(calculate_stochastic(&candles, 14, 0, 3).is_empty());
        assert!(calculate_stochastic(&candles, 14, 3, 0).is_empty());
    }

    #[test]
    fn stochastic_keeps_last_points_of_full_series() {
        let candles = wave(40);
        let stoch = calculate_stochastic(&candles, 14, 3, 3);
        let raw = raw_percent_k(&candles, 14);
        let smoothed = sma_values(&raw, 3);
        let d = sma_values(&smoothed, 3);
        let last = stoch.last().unwrap();
        assert_eq!(last.time, 39);
        assert_eq!(last.k, *smoothed.last().unwrap());
        assert_eq!(last.d, *d.last().unwrap());
    }

    #[test]
    fn stochastic_bounds() {
        for p in calculate_stochastic(&wave(120), 14, 3, 3) {
            assert!((0.0..=100.0).contains(&p.k), "k {} out of range", p.k);
            assert!((0.0..=100.0).contains(&p.d), "d {} out of range", p.d);
        }
    }

    #[test]
    fn flat_market_raw_k_is_fifty() {
        let candles: Vec<Candle> = (0..20).map(|i| candle(i, 2.0, 2.0, 2.0)).collect();
        let raw = raw_percent_k(&candles, 14);
        assert_eq!(raw.len(), 7);
        assert!(raw.iter().all(|&k| k == 50.0));

        let stoch = calculate_stochastic(&candles, 14, 3, 3);
        assert!(stoch.iter().all(|p| p.k == 50.0 && p.d == 50.0));
    }

    #[test]
    fn close_at_high_is_one_hundred() {
        let candles: Vec<Candle> = (0..5)
            .map(|i| {
                let base = 10.0 + i as f64;
                candle(i, base, base - 1.0, base)
            })
            .collect();
        let raw = raw_percent_k(&candles, 3);
        assert!(raw.iter().all(|&k| k == 100.0));
    }
}

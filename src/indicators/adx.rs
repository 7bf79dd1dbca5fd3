// =============================================================================
// Average Directional Index (ADX)
// =============================================================================
//
// ADX quantifies trend **strength** regardless of direction.
//
// Calculation pipeline:
//   1. Compute +DM (positive directional movement) and -DM per bar.
//   2. Compute True Range (TR) per bar.
//   3. Apply Wilder's smoothing (period) to +DM, -DM, and TR, seeded with the
//      plain sum of the first `period` values:  S_t = S_{t-1} - S_{t-1}/p + x_t
//   4. Derive +DI = smoothed(+DM) / smoothed(TR) * 100
//            -DI = smoothed(-DM) / smoothed(TR) * 100
//   5. DX  = |+DI - -DI| / (+DI + -DI) * 100
//   6. ADX = mean of the first `period` DX values, then Wilder's average.
//
// The first DX belongs to candle `period`, the first ADX to candle
// `2 * period - 1`.
// =============================================================================

use super::align_to_suffix;
use super::atr::true_range;
use crate::market_data::Candle;
use crate::types::IndicatorValue;

/// Compute the ADX series.
///
/// Returns an empty `Vec` when `period` is zero or there are fewer than
/// `2 * period` candles.
pub fn calculate_adx(candles: &[Candle], period: usize) -> Vec<IndicatorValue> {
    if period == 0 || period > candles.len() / 2 {
        return Vec::new();
    }

    let period_f = period as f64;

    // ------------------------------------------------------------------
    // Step 1 & 2: Raw +DM, -DM, and True Range for each consecutive pair
    // ------------------------------------------------------------------
    let bar_count = candles.len() - 1;
    let mut plus_dm = Vec::with_capacity(bar_count);
    let mut minus_dm = Vec::with_capacity(bar_count);
    let mut tr_vals = Vec::with_capacity(bar_count);

    for w in candles.windows(2) {
        let (prev, cur) = (&w[0], &w[1]);

        let up_move = cur.high - prev.high;
        let down_move = prev.low - cur.low;

        plus_dm.push(if up_move > down_move && up_move > 0.0 {
            up_move
        } else {
            0.0
        });
        minus_dm.push(if down_move > up_move && down_move > 0.0 {
            down_move
        } else {
            0.0
        });
        tr_vals.push(true_range(cur, prev.close));
    }

    // ------------------------------------------------------------------
    // Step 3-5: Wilder sums and one DX per bar from `period - 1` onward
    // ------------------------------------------------------------------
    let mut smooth_plus_dm: f64 = plus_dm[..period].iter().sum();
    let mut smooth_minus_dm: f64 = minus_dm[..period].iter().sum();
    let mut smooth_tr: f64 = tr_vals[..period].iter().sum();

    let mut dx_values: Vec<f64> = Vec::with_capacity(bar_count - period + 1);
    dx_values.push(compute_dx(smooth_plus_dm, smooth_minus_dm, smooth_tr));

    for i in period..bar_count {
        smooth_plus_dm = smooth_plus_dm - smooth_plus_dm / period_f + plus_dm[i];
        smooth_minus_dm = smooth_minus_dm - smooth_minus_dm / period_f + minus_dm[i];
        smooth_tr = smooth_tr - smooth_tr / period_f + tr_vals[i];

        dx_values.push(compute_dx(smooth_plus_dm, smooth_minus_dm, smooth_tr));
    }

    // ------------------------------------------------------------------
    // Step 6: ADX = Wilder's smoothed average of DX
    // ------------------------------------------------------------------
    let mut adx = dx_values[..period].iter().sum::<f64>() / period_f;
    let mut values = Vec::with_capacity(dx_values.len() - period + 1);
    values.push(adx);

    for &dx in &dx_values[period..] {
        adx = (adx * (period_f - 1.0) + dx) / period_f;
        values.push(adx);
    }

    align_to_suffix(candles, values)
}

// =============================================================================
// Internal helpers
// =============================================================================

/// Compute DX from smoothed +DM, -DM, and TR values.
///
/// A zero smoothed TR gives zero DIs; zero DIs give a DX of 0.
fn compute_dx(smooth_plus_dm: f64, smooth_minus_dm: f64, smooth_tr: f64) -> f64 {
    let (plus_di, minus_di) = if smooth_tr == 0.0 {
        (0.0, 0.0)
    } else {
        (
            (smooth_plus_dm / smooth_tr) * 100.0,
            (smooth_minus_dm / smooth_tr) * 100.0,
        )
    };

    let di_sum = plus_di + minus_di;
    if di_sum == 0.0 {
        // Both +DI and -DI are zero: no directional movement.
        return 0.0;
    }

    ((plus_di - minus_di).abs() / di_sum) * 100.0
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn candle(time: i64, open: f64, high: f64, low: f64, close: f64) -> Candle {
        Candle::new(time, open, high, low, close, 1.0)
    }

    #[test]
    fn adx_period_zero() {
        let candles = vec![candle(0, 1.0, 2.0, 0.5, 1.5); 50];
        assert!(calculate_adx(&candles, 0).is_empty());
    }

    #[test]
    fn adx_insufficient_data() {
        let candles = vec![candle(0, 1.0, 2.0, 0.5, 1.5); 27];
        assert!(calculate_adx(&candles, 14).is_empty());
    }

    #[test]
    fn adx_strong_uptrend() {
        // Consecutive higher highs and higher lows, a strong trend.
        let candles: Vec<Candle> = (0..60)
            .map(|i| {
                let base = 100.0 + i as f64 * 2.0;
                candle(i, base, base + 1.5, base - 0.5, base + 1.0)
            })
            .collect();

        let adx = calculate_adx(&candles, 14);
        assert_eq!(adx.len(), 60 - 27);
        let value = adx.last().unwrap().value;
        // Strong trend should produce ADX well above 25.
        assert!(value > 25.0, "expected ADX > 25 for strong trend, got {value}");
    }

    #[test]
    fn adx_flat_market() {
        // Identical candles: no directional movement.
        let candles: Vec<Candle> = (0..60).map(|i| candle(i, 100.0, 101.0, 99.0, 100.0)).collect();
        let adx = calculate_adx(&candles, 14);
        assert!(!adx.is_empty());
        assert!(adx.iter().all(|p| p.value == 0.0));
    }

    #[test]
    fn adx_zero_range_market_is_zero() {
        // H == L == C everywhere: TR is 0 so DI and DX fall back to 0.
        let candles: Vec<Candle> = (0..30).map(|i| candle(i, 5.0, 5.0, 5.0, 5.0)).collect();
        let adx = calculate_adx(&candles, 5);
        assert_eq!(adx.len(), 21);
        assert!(adx.iter().all(|p| p.value == 0.0));
    }

    #[test]
    fn adx_result_range() {
        // ADX should always be in [0, 100].
        let candles: Vec<Candle> = (0..100)
            .map(|i| {
                let base = 50.0 + (i as f64 * 0.3).sin() * 10.0;
                candle(i, base - 0.5, base + 1.0, base - 1.0, base + 0.5)
            })
            .collect();
        for p in calculate_adx(&candles, 14) {
            assert!(
                (0.0..=100.0).contains(&p.value),
                "ADX {} out of [0,100] range",
                p.value
            );
        }
    }

    #[test]
    fn adx_minimum_candles_exact() {
        // Exactly 2*period candles should produce one result.
        let period = 5;
        let min = 2 * period;
        let candles: Vec<Candle> = (0..min as i64)
            .map(|i| {
                let base = 100.0 + i as f64;
                candle(i, base, base + 1.0, base - 0.5, base + 0.5)
            })
            .collect();
        let adx = calculate_adx(&candles, period);
        assert_eq!(adx.len(), 1);
        assert_eq!(adx[0].time, min as i64 - 1);

        // One fewer should fail.
        assert!(calculate_adx(&candles[..min - 1], period).is_empty());
    }
}

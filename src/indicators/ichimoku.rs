// =============================================================================
// Ichimoku Kinko Hyo
// =============================================================================
//
//   tenkan   = (highest high + lowest low) / 2 over `tenkan_period`
//   kijun    = (highest high + lowest low) / 2 over `kijun_period`
//   senkou A = (tenkan + kijun) / 2, taken `displacement` candles back
//   senkou B = midpoint over `senkou_b_period`, taken `displacement` back
//   chikou   = close
//
// The senkou spans are plotted at the current candle using values from
// `displacement` candles earlier, so nothing is projected past the last
// candle.  Points exist only where every line is defined.
// =============================================================================

use super::suffix_times;
use crate::market_data::Candle;
use crate::types::IchimokuPoint;

/// Compute the Ichimoku lines.
///
/// The first point lands on candle
/// `max(tenkan, kijun, senkou_b) + displacement - 1`; zero periods or a
/// shorter input give an empty `Vec`.
pub fn calculate_ichimoku(
    candles: &[Candle],
    tenkan_period: usize,
    kijun_period: usize,
    senkou_b_period: usize,
    displacement: usize,
) -> Vec<IchimokuPoint> {
    if tenkan_period == 0 || kijun_period == 0 || senkou_b_period == 0 {
        return Vec::new();
    }

    let window = match tenkan_period
        .max(kijun_period)
        .max(senkou_b_period)
        .checked_add(displacement)
    {
        Some(w) if w <= candles.len() => w,
        _ => return Vec::new(),
    };

    let count = candles.len() - window + 1;
    suffix_times(candles, count)
        .zip(window - 1..candles.len())
        .map(|(time, i)| {
            let lagged = i - displacement;
            let lagged_tenkan = midpoint(candles, lagged, tenkan_period);
            let lagged_kijun = midpoint(candles, lagged, kijun_period);
            IchimokuPoint {
                time,
                tenkan: midpoint(candles, i, tenkan_period),
                kijun: midpoint(candles, i, kijun_period),
                senkou_a: (lagged_tenkan + lagged_kijun) / 2.0,
                senkou_b: midpoint(candles, lagged, senkou_b_period),
                chikou: candles[i].close,
            }
        })
        .collect()
}

/// Midpoint of the highest high and lowest low over the `period` candles
/// ending at index `last`.  Callers guarantee `last + 1 >= period`.
fn midpoint(candles: &[Candle], last: usize, period: usize) -> f64 {
    let window = &candles[last + 1 - period..=last];
    let (highest, lowest) = window.iter().fold(
        (f64::NEG_INFINITY, f64::INFINITY),
        |(hh, ll), c| (hh.max(c.high), ll.min(c.low)),
    );
    (highest + lowest) / 2.0
}

// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Bollinger Bands consist of a middle band (SMA), an upper band (SMA + k*σ),
// and a lower band (SMA - k*σ), where σ is the population standard deviation
// of the closes in the window.

use super::{compensated_sum, suffix_times, window_mean};
use crate::market_data::Candle;
use crate::types::BollingerPoint;

/// Calculate Bollinger Bands for every candle starting at index `period - 1`.
///
/// - `upper`  = SMA + `std_dev_multiplier` * σ
/// - `middle` = SMA
/// - `lower`  = SMA - `std_dev_multiplier` * σ
///
/// Returns an empty `Vec` when `period == 0` or fewer than `period` candles.
pub fn calculate_bollinger(
    candles: &[Candle],
    period: usize,
    std_dev_multiplier: f64,
) -> Vec<BollingerPoint> {
    if period == 0 || candles.len() < period {
        return Vec::new();
    }

    let period_f = period as f64;
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let bands = closes.windows(period).map(|window| {
        let middle = window_mean(window);
        let variance = compensated_sum(window.iter().map(|c| (c - middle).powi(2))) / period_f;
        let offset = std_dev_multiplier * variance.sqrt();
        (middle + offset, middle, middle - offset)
    });

    suffix_times(candles, candles.len() - period + 1)
        .zip(bands)
        .map(|(time, (upper, middle, lower))| BollingerPoint {
            time,
            upper,
            middle,
            lower,
        })
        .collect()
}

// =============================================================================
// Indicator Catalog
// =============================================================================
//
// Static display metadata for every indicator kind: the name shown in the
// chart legend, the period a freshly added overlay starts with, its default
// line colour, whether it draws over the price pane or in its own pane, and
// how many candles it needs before the first point at those defaults.

use serde::Serialize;

use crate::types::IndicatorKind;

/// Display metadata for one indicator kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorMetadata {
    pub kind: IndicatorKind,
    pub display_name: &'static str,
    /// `None` for indicators without a look-back period (VWAP, OBV, SAR).
    pub default_period: Option<usize>,
    pub default_color: &'static str,
    /// `true` when plotted on the price pane.
    pub overlay: bool,
    /// Fewest candles that yield a point at the default parameters.
    pub min_window: usize,
}

const fn entry(
    kind: IndicatorKind,
    display_name: &'static str,
    default_period: Option<usize>,
    default_color: &'static str,
    overlay: bool,
    min_window: usize,
) -> IndicatorMetadata {
    IndicatorMetadata {
        kind,
        display_name,
        default_period,
        default_color,
        overlay,
        min_window,
    }
}

static CATALOG: [IndicatorMetadata; 19] = [
    entry(IndicatorKind::Sma, "Simple Moving Average", Some(20), "#2962FF", true, 20),
    entry(IndicatorKind::Ema, "Exponential Moving Average", Some(20), "#FF6D00", true, 20),
    entry(IndicatorKind::Wma, "Weighted Moving Average", Some(20), "#AA00FF", true, 20),
    entry(IndicatorKind::Vwma, "Volume Weighted Moving Average", Some(20), "#00BFA5", true, 20),
    entry(IndicatorKind::Rsi, "Relative Strength Index", Some(14), "#7E57C2", false, 15),
    entry(IndicatorKind::Macd, "MACD", Some(12), "#2196F3", false, 34),
    entry(IndicatorKind::Stochastic, "Stochastic Oscillator", Some(14), "#FF9800", false, 20),
    entry(IndicatorKind::Bollinger, "Bollinger Bands", Some(20), "#2196F3", true, 20),
    entry(IndicatorKind::Atr, "Average True Range", Some(14), "#F44336", false, 15),
    entry(IndicatorKind::Keltner, "Keltner Channel", Some(20), "#009688", true, 20),
    entry(IndicatorKind::Vwap, "VWAP", None, "#E91E63", true, 1),
    entry(IndicatorKind::Obv, "On-Balance Volume", None, "#795548", false, 1),
    entry(IndicatorKind::Adx, "Average Directional Index", Some(14), "#FFC107", false, 28),
    entry(IndicatorKind::ParabolicSar, "Parabolic SAR", None, "#4CAF50", true, 2),
    entry(IndicatorKind::Momentum, "Momentum", Some(10), "#3F51B5", false, 11),
    entry(IndicatorKind::Roc, "Rate of Change", Some(10), "#00BCD4", false, 11),
    entry(IndicatorKind::WilliamsR, "Williams %R", Some(14), "#9C27B0", false, 14),
    entry(IndicatorKind::Cci, "Commodity Channel Index", Some(20), "#8BC34A", false, 20),
    entry(IndicatorKind::Ichimoku, "Ichimoku Cloud", Some(9), "#607D8B", true, 78),
];

/// Metadata for `kind`.
pub fn metadata(kind: IndicatorKind) -> &'static IndicatorMetadata {
    // CATALOG is laid out in `IndicatorKind::ALL` order.
    &CATALOG[kind as usize]
}

/// Every catalog entry, in `IndicatorKind::ALL` order.
pub fn all() -> &'static [IndicatorMetadata] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_indexed_by_kind() {
        for kind in IndicatorKind::ALL {
            assert_eq!(metadata(kind).kind, kind);
        }
        assert_eq!(all().len(), IndicatorKind::ALL.len());
    }

    #[test]
    fn periodless_kinds_have_no_default_period() {
        for kind in [IndicatorKind::Vwap, IndicatorKind::Obv, IndicatorKind::ParabolicSar] {
            assert!(metadata(kind).default_period.is_none());
        }
        assert_eq!(metadata(IndicatorKind::Rsi).default_period, Some(14));
        assert_eq!(metadata(IndicatorKind::Bollinger).default_period, Some(20));
    }

    #[test]
    fn colours_are_hex() {
        for m in all() {
            assert!(m.default_color.starts_with('#') && m.default_color.len() == 7, "{:?}", m.kind);
        }
    }

    #[test]
    fn min_windows_at_default_parameters() {
        assert_eq!(metadata(IndicatorKind::Sma).min_window, 20);
        assert_eq!(metadata(IndicatorKind::Rsi).min_window, 15);
        assert_eq!(metadata(IndicatorKind::Macd).min_window, 34);
        assert_eq!(metadata(IndicatorKind::Stochastic).min_window, 20);
        assert_eq!(metadata(IndicatorKind::Adx).min_window, 28);
        assert_eq!(metadata(IndicatorKind::Ichimoku).min_window, 78);
        assert!(all().iter().all(|m| m.min_window >= 1));
    }

    #[test]
    fn oscillators_use_separate_pane() {
        assert!(metadata(IndicatorKind::Sma).overlay);
        assert!(!metadata(IndicatorKind::Rsi).overlay);
        assert!(!metadata(IndicatorKind::Macd).overlay);
    }
}

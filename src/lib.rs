// =============================================================================
// Chart Indicators — library root
// =============================================================================
//
// Technical-indicator engine for token price charts: pure functions over an
// oldest-first OHLCV candle slice, plus the catalog and overlay layer the
// chart uses to configure and run them.
// =============================================================================

pub mod indicators;
pub mod market_data;
pub mod overlay;
pub mod runtime_config;
pub mod types;

pub use market_data::Candle;
pub use overlay::{
    compute, compute_visible, ComputedOverlay, IndicatorConfig, IndicatorParams, IndicatorSeries,
};
pub use types::{
    BollingerPoint, IchimokuPoint, IndicatorKind, IndicatorValue, KeltnerPoint, MacdPoint,
    StochasticPoint,
};

// =============================================================================
// Chart Overlays — configured indicator instances
// =============================================================================
//
// The chart keeps a list of `IndicatorConfig` records (one per overlay the
// user has added).  This module resolves each record's parameters against
// the catalog defaults and runs the matching engine function.  Configs are
// plain immutable values; toggling visibility or changing a period means
// building a new config.
// =============================================================================

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::indicators::{self, catalog};
use crate::market_data::Candle;
use crate::types::{
    BollingerPoint, IchimokuPoint, IndicatorKind, IndicatorValue, KeltnerPoint, MacdPoint,
    StochasticPoint,
};

// =============================================================================
// Defaults for secondary parameters
// =============================================================================

const DEFAULT_MACD_SLOW: usize = 26;
const DEFAULT_MACD_SIGNAL: usize = 9;
const DEFAULT_BOLLINGER_STD_DEV: f64 = 2.0;
const DEFAULT_STOCH_D: usize = 3;
const DEFAULT_STOCH_SMOOTH: usize = 3;
const DEFAULT_KELTNER_ATR: usize = 10;
const DEFAULT_KELTNER_MULTIPLIER: f64 = 2.0;
const DEFAULT_SAR_STEP: f64 = 0.02;
const DEFAULT_SAR_MAX: f64 = 0.2;
const DEFAULT_ICHIMOKU_KIJUN: usize = 26;
const DEFAULT_ICHIMOKU_SENKOU_B: usize = 52;
const DEFAULT_ICHIMOKU_DISPLACEMENT: usize = 26;

// =============================================================================
// IndicatorParams
// =============================================================================

/// Secondary parameters.  Any field left unset falls back to the textbook
/// default for the indicator that reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorParams {
    /// MACD slow EMA period.
    pub slow_period: Option<usize>,
    /// MACD signal EMA period.
    pub signal_period: Option<usize>,
    /// Bollinger band width in standard deviations.
    pub std_dev: Option<f64>,
    /// Stochastic %D period.
    pub d_period: Option<usize>,
    /// Stochastic %K smoothing.
    pub smooth: Option<usize>,
    /// Keltner ATR period.
    pub atr_period: Option<usize>,
    /// Keltner ATR multiplier.
    pub multiplier: Option<f64>,
    /// Parabolic SAR acceleration step.
    pub step: Option<f64>,
    /// Parabolic SAR acceleration cap.
    pub max_step: Option<f64>,
    pub kijun_period: Option<usize>,
    pub senkou_b_period: Option<usize>,
    pub displacement: Option<usize>,
}

// =============================================================================
// IndicatorConfig
// =============================================================================

/// One overlay instance as configured by the chart UI.
///
/// `period` is the primary look-back: the MACD fast period, the stochastic
/// %K period, the Keltner EMA period and the Ichimoku tenkan period; ignored
/// by VWAP, OBV and Parabolic SAR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    pub id: String,
    pub kind: IndicatorKind,
    #[serde(default)]
    pub period: Option<usize>,
    pub color: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub params: IndicatorParams,
}

fn default_visible() -> bool {
    true
}

impl IndicatorConfig {
    /// A visible overlay with the catalog's default period and colour.
    pub fn new(kind: IndicatorKind) -> Self {
        let meta = catalog::metadata(kind);
        let id = match meta.default_period {
            Some(period) => format!("{kind}-{period}"),
            None => kind.to_string(),
        };
        Self {
            id,
            kind,
            period: meta.default_period,
            color: meta.default_color.to_string(),
            visible: true,
            params: IndicatorParams::default(),
        }
    }

    /// Same overlay with a different primary period.
    pub fn with_period(self, period: usize) -> Self {
        Self {
            id: format!("{}-{period}", self.kind),
            period: Some(period),
            ..self
        }
    }

    pub fn with_params(self, params: IndicatorParams) -> Self {
        Self { params, ..self }
    }

    pub fn with_visible(self, visible: bool) -> Self {
        Self { visible, ..self }
    }

    /// Primary period, falling back to the catalog default.
    pub fn effective_period(&self) -> usize {
        self.period
            .or(catalog::metadata(self.kind).default_period)
            .unwrap_or(0)
    }
}

// =============================================================================
// IndicatorSeries
// =============================================================================

/// The computed output of one overlay, shaped by indicator family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "points", rename_all = "snake_case")]
pub enum IndicatorSeries {
    Line(Vec<IndicatorValue>),
    Macd(Vec<MacdPoint>),
    Bollinger(Vec<BollingerPoint>),
    Stochastic(Vec<StochasticPoint>),
    Keltner(Vec<KeltnerPoint>),
    Ichimoku(Vec<IchimokuPoint>),
}

impl IndicatorSeries {
    pub fn len(&self) -> usize {
        match self {
            Self::Line(p) => p.len(),
            Self::Macd(p) => p.len(),
            Self::Bollinger(p) => p.len(),
            Self::Stochastic(p) => p.len(),
            Self::Keltner(p) => p.len(),
            Self::Ichimoku(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A visible overlay together with its computed series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputedOverlay {
    pub id: String,
    pub kind: IndicatorKind,
    pub color: String,
    pub series: IndicatorSeries,
}

// =============================================================================
// Dispatch
// =============================================================================

/// Run the engine function for `config` over `candles`.
pub fn compute(config: &IndicatorConfig, candles: &[Candle]) -> IndicatorSeries {
    let period = config.effective_period();
    let p = &config.params;

    match config.kind {
        IndicatorKind::Sma => IndicatorSeries::Line(indicators::calculate_sma(candles, period)),
        IndicatorKind::Ema => IndicatorSeries::Line(indicators::calculate_ema(candles, period)),
        IndicatorKind::Wma => IndicatorSeries::Line(indicators::calculate_wma(candles, period)),
        IndicatorKind::Vwma => IndicatorSeries::Line(indicators::calculate_vwma(candles, period)),
        IndicatorKind::Rsi => IndicatorSeries::Line(indicators::calculate_rsi(candles, period)),
        IndicatorKind::Macd => IndicatorSeries::Macd(indicators::calculate_macd(
            candles,
            period,
            p.slow_period.unwrap_or(DEFAULT_MACD_SLOW),
            p.signal_period.unwrap_or(DEFAULT_MACD_SIGNAL),
        )),
        IndicatorKind::Stochastic => IndicatorSeries::Stochastic(indicators::calculate_stochastic(
            candles,
            period,
            p.d_period.unwrap_or(DEFAULT_STOCH_D),
            p.smooth.unwrap_or(DEFAULT_STOCH_SMOOTH),
        )),
        IndicatorKind::Bollinger => IndicatorSeries::Bollinger(indicators::calculate_bollinger(
            candles,
            period,
            p.std_dev.unwrap_or(DEFAULT_BOLLINGER_STD_DEV),
        )),
        IndicatorKind::Atr => IndicatorSeries::Line(indicators::calculate_atr(candles, period)),
        IndicatorKind::Keltner => IndicatorSeries::Keltner(indicators::calculate_keltner(
            candles,
            period,
            p.atr_period.unwrap_or(DEFAULT_KELTNER_ATR),
            p.multiplier.unwrap_or(DEFAULT_KELTNER_MULTIPLIER),
        )),
        IndicatorKind::Vwap => IndicatorSeries::Line(indicators::calculate_vwap(candles)),
        IndicatorKind::Obv => IndicatorSeries::Line(indicators::calculate_obv(candles)),
        IndicatorKind::Adx => IndicatorSeries::Line(indicators::calculate_adx(candles, period)),
        IndicatorKind::ParabolicSar => IndicatorSeries::Line(indicators::calculate_parabolic_sar(
            candles,
            p.step.unwrap_or(DEFAULT_SAR_STEP),
            p.max_step.unwrap_or(DEFAULT_SAR_MAX),
        )),
        IndicatorKind::Momentum => {
            IndicatorSeries::Line(indicators::calculate_momentum(candles, period))
        }
        IndicatorKind::Roc => IndicatorSeries::Line(indicators::calculate_roc(candles, period)),
        IndicatorKind::WilliamsR => {
            IndicatorSeries::Line(indicators::calculate_williams_r(candles, period))
        }
        IndicatorKind::Cci => IndicatorSeries::Line(indicators::calculate_cci(candles, period)),
        IndicatorKind::Ichimoku => IndicatorSeries::Ichimoku(indicators::calculate_ichimoku(
            candles,
            period,
            p.kijun_period.unwrap_or(DEFAULT_ICHIMOKU_KIJUN),
            p.senkou_b_period.unwrap_or(DEFAULT_ICHIMOKU_SENKOU_B),
            p.displacement.unwrap_or(DEFAULT_ICHIMOKU_DISPLACEMENT),
        )),
    }
}

/// Compute every visible overlay, in configuration order.
pub fn compute_visible(configs: &[IndicatorConfig], candles: &[Candle]) -> Vec<ComputedOverlay> {
    configs
        .iter()
        .filter(|c| c.visible)
        .map(|config| {
            let series = compute(config, candles);
            if series.is_empty() {
                debug!(
                    id = %config.id,
                    kind = %config.kind,
                    candles = candles.len(),
                    default_window = catalog::metadata(config.kind).min_window,
                    "not enough candles for overlay"
                );
            }
            ComputedOverlay {
                id: config.id.clone(),
                kind: config.kind,
                color: config.color.clone(),
                series,
            }
        })
        .collect()
}

// =============================================================================
// Shared types used across the indicator engine
// =============================================================================

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One scalar output point aligned to a source candle's `time`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorValue {
    pub time: i64,
    pub value: f64,
}

impl IndicatorValue {
    pub fn new(time: i64, value: f64) -> Self {
        Self { time, value }
    }
}

/// MACD line, its signal line and the histogram between them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdPoint {
    pub time: i64,
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// Bollinger Bands around an SMA.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerPoint {
    pub time: i64,
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// Smoothed stochastic %K and its %D signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StochasticPoint {
    pub time: i64,
    pub k: f64,
    pub d: f64,
}

/// Keltner Channel: EMA middle line with ATR-scaled envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeltnerPoint {
    pub time: i64,
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// The five Ichimoku Kinko Hyo lines at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IchimokuPoint {
    pub time: i64,
    pub tenkan: f64,
    pub kijun: f64,
    pub senkou_a: f64,
    pub senkou_b: f64,
    pub chikou: f64,
}

/// Every indicator the engine can compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    Sma,
    Ema,
    Wma,
    Vwma,
    Rsi,
    Macd,
    Stochastic,
    Bollinger,
    Atr,
    Keltner,
    Vwap,
    Obv,
    Adx,
    ParabolicSar,
    Momentum,
    Roc,
    WilliamsR,
    Cci,
    Ichimoku,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 19] = [
        Self::Sma,
        Self::Ema,
        Self::Wma,
        Self::Vwma,
        Self::Rsi,
        Self::Macd,
        Self::Stochastic,
        Self::Bollinger,
        Self::Atr,
        Self::Keltner,
        Self::Vwap,
        Self::Obv,
        Self::Adx,
        Self::ParabolicSar,
        Self::Momentum,
        Self::Roc,
        Self::WilliamsR,
        Self::Cci,
        Self::Ichimoku,
    ];

    /// Short lowercase identifier, identical to the serde representation.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Sma => "sma",
            Self::Ema => "ema",
            Self::Wma => "wma",
            Self::Vwma => "vwma",
            Self::Rsi => "rsi",
            Self::Macd => "macd",
            Self::Stochastic => "stochastic",
            Self::Bollinger => "bollinger",
            Self::Atr => "atr",
            Self::Keltner => "keltner",
            Self::Vwap => "vwap",
            Self::Obv => "obv",
            Self::Adx => "adx",
            Self::ParabolicSar => "parabolic_sar",
            Self::Momentum => "momentum",
            Self::Roc => "roc",
            Self::WilliamsR => "williams_r",
            Self::Cci => "cci",
            Self::Ichimoku => "ichimoku",
        }
    }
}

impl std::fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for IndicatorKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.slug() == needle)
            .ok_or_else(|| anyhow::anyhow!("unknown indicator kind: {s:?}"))
    }
}

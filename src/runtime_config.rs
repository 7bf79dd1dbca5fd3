// =============================================================================
// Runtime Configuration — active overlays with atomic save
// =============================================================================
//
// Holds the chart's list of active indicator overlays and output options.
//
// Persistence uses an atomic tmp + rename pattern to prevent corruption on
// crash.  All fields carry `#[serde(default)]` so that adding new fields
// never breaks loading an older config file.
//
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::overlay::IndicatorConfig;
use crate::types::IndicatorKind;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_true() -> bool {
    true
}

fn default_overlays() -> Vec<IndicatorConfig> {
    vec![
        IndicatorConfig::new(IndicatorKind::Sma),
        IndicatorConfig::new(IndicatorKind::Ema).with_period(50),
        IndicatorConfig::new(IndicatorKind::Bollinger),
        IndicatorConfig::new(IndicatorKind::Rsi),
        IndicatorConfig::new(IndicatorKind::Macd),
    ]
}

// =============================================================================
// RuntimeConfig
// =============================================================================

/// Top-level runtime configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Overlays computed for the chart, in display order.
    #[serde(default = "default_overlays")]
    pub overlays: Vec<IndicatorConfig>,

    /// Pretty-print the JSON written to stdout.
    #[serde(default = "default_true")]
    pub pretty_output: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            overlays: default_overlays(),
            pretty_output: true,
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read runtime config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse runtime config from {}", path.display()))?;

        info!(
            path = %path.display(),
            overlays = config.overlays.len(),
            "runtime config loaded"
        );

        Ok(config)
    }

    /// Persist the current configuration to `path` using an atomic write
    /// (write to `.tmp`, then rename).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = serde_json::to_string_pretty(self)
            .context("failed to serialise runtime config to JSON")?;

        // Atomic write: write to a temporary sibling file, then rename.
        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, &content)
            .with_context(|| format!("failed to write tmp config to {}", tmp_path.display()))?;

        std::fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to rename tmp config to {}", path.display()))?;

        info!(path = %path.display(), "runtime config saved (atomic)");
        Ok(())
    }

    /// Replace the overlay list with catalog-default overlays for a
    /// comma-separated list of kind slugs (e.g. `"sma,rsi,macd"`).
    ///
    /// Blank entries are ignored; an unknown slug is an error and leaves the
    /// config untouched.
    pub fn apply_indicator_list(&mut self, list: &str) -> Result<()> {
        let overlays = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<IndicatorKind>().map(IndicatorConfig::new))
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("invalid indicator list {list:?}"))?;

        if !overlays.is_empty() {
            self.overlays = overlays;
        }
        Ok(())
    }
}

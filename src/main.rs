// =============================================================================
// Chart Indicators — Main Entry Point
// =============================================================================
//
// Reads a candle file, computes every visible overlay from the runtime config
// and writes the results to stdout as JSON.  Logs go to stderr.
//
//   chart-indicators [CANDLES_JSON] [CONFIG_JSON]
//
// Environment (a `.env` file is honoured):
//   CHART_CANDLES_PATH  candle file when no positional argument is given
//   CHART_CONFIG_PATH   config file (default: indicator_config.json)
//   CHART_INDICATORS    comma-separated kinds replacing the configured overlays
//   RUST_LOG            log filter (default: info)
// =============================================================================

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use chart_indicators::market_data::load_candles;
use chart_indicators::overlay::compute_visible;
use chart_indicators::runtime_config::RuntimeConfig;

const DEFAULT_CONFIG_PATH: &str = "indicator_config.json";

fn main() -> Result<()> {
    // ── 1. Environment & logging ─────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let candles_path = args
        .next()
        .or_else(|| std::env::var("CHART_CANDLES_PATH").ok())
        .context("no candle file given (pass a path or set CHART_CANDLES_PATH)")?;
    let config_path = args
        .next()
        .or_else(|| std::env::var("CHART_CONFIG_PATH").ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    // ── 2. Config ────────────────────────────────────────────────────────
    let mut config = RuntimeConfig::load(&config_path).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        RuntimeConfig::default()
    });

    if let Ok(list) = std::env::var("CHART_INDICATORS") {
        config.apply_indicator_list(&list)?;
    }

    info!(
        overlays = ?config.overlays.iter().map(|o| o.id.as_str()).collect::<Vec<_>>(),
        "Configured overlays"
    );

    // ── 3. Compute ───────────────────────────────────────────────────────
    let candles = load_candles(&candles_path)?;
    let computed = compute_visible(&config.overlays, &candles);

    let empty = computed.iter().filter(|o| o.series.is_empty()).count();
    if empty > 0 {
        warn!(
            empty,
            candles = candles.len(),
            "some overlays need more candles than available"
        );
    }

    // ── 4. Output ────────────────────────────────────────────────────────
    let json = if config.pretty_output {
        serde_json::to_string_pretty(&computed)
    } else {
        serde_json::to_string(&computed)
    }
    .context("failed to serialise overlays")?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write overlays to stdout")?;

    info!(overlays = computed.len(), "done");
    Ok(())
}

use anyhow::{Context, Result};
use pickview::config::config::AppCfg;
use pickview::core::types::Prediction;
use pickview::display::format::PredictionDisplay;
use pickview::resolver::ResolvedView;
use serde::Serialize;
use tracing::{info, info_span};
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Report<'a> {
    view: &'a ResolvedView<'a>,
    display: &'a PredictionDisplay,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cfg_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.yml".to_string());
    let cfg = AppCfg::load(&cfg_path)?;

    // stdout carries the report, logs go to stderr
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.logging.filter))
        .context("parsing logging.filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let span = info_span!("pickview", version = env!("CARGO_PKG_VERSION"));
    let _enter = span.enter();

    info!(config = %cfg_path, input = %cfg.input.path, "Reading prediction");
    let raw = std::fs::read_to_string(&cfg.input.path)
        .with_context(|| format!("reading {}", cfg.input.path))?;
    let prediction: Prediction = serde_json::from_str(&raw).context("decoding prediction")?;

    let view = prediction.resolve();
    let display = PredictionDisplay::from_view(&view);
    info!(
        id = prediction.id.as_deref().unwrap_or("-"),
        picks = prediction.picks().len(),
        winner = %view.match_winner.label,
        "Resolved prediction"
    );

    let report = Report {
        view: &view,
        display: &display,
    };
    let out = if cfg.output.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("encoding report")?;
    println!("{out}");

    Ok(())
}

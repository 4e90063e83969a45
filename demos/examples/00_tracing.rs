use chrono::Utc;
use tracing_subscriber::fmt::format::FmtSpan;
use verde::Verde;
use verde_demos::common::{demo_span, get_connector, universe};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,verde=trace,verde_core=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    // Build the orchestrator over the seeded mock and run both pipelines;
    // the interesting output here is the spans, not the numbers.
    let verde = Verde::builder().with_connector(get_connector()).build()?;
    let tickers = universe();

    let scores = verde.esg_scores(&tickers, Utc::now()).await?;
    tracing::info!(scored = scores.scores.len(), "signal pipeline finished");

    let report = verde.portfolio(&tickers, demo_span(), Utc::now()).await?;
    tracing::info!(mode = %report.mode, "portfolio pipeline finished");

    Ok(())
}

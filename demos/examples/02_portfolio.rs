use chrono::Utc;
use verde::Verde;
use verde_demos::common::{demo_span, get_connector, universe};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Create the connector and build the orchestrator.
    let verde = Verde::builder().with_connector(get_connector()).build()?;

    // 2. Run the full pipeline: signals, estimation, tilt, optimization.
    let tickers = universe();
    println!("Building a portfolio over {} tickers...", tickers.len());
    let report = verde.portfolio(&tickers, demo_span(), Utc::now()).await?;

    // 3. Print the weights next to the scores that tilted them.
    println!("\n## Portfolio ({} mode)", report.mode);
    println!("{:<8} | {:>7} | {:>9}", "Ticker", "Weight", "Composite");
    println!("{:-<9}|{:-<9}|{:-<11}", "", "", "");
    for (ticker, weight) in report.weights.iter() {
        let composite = report
            .scores
            .get(ticker)
            .map_or(f64::NAN, verde::NormalizedEsgScore::composite);
        println!(
            "{:<8} | {:>6.2}% | {:>9.3}",
            ticker.as_str(),
            weight * 100.0,
            composite
        );
    }

    // 4. Performance is measured against the untilted estimates.
    println!("\nExpected return: {:>7.2}%", report.performance.expected_return * 100.0);
    println!("Volatility:      {:>7.2}%", report.performance.volatility * 100.0);
    println!("Sharpe ratio:    {:>7.2}", report.performance.sharpe);

    if !report.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &report.warnings {
            println!("  - {warning}");
        }
    }

    Ok(())
}

use std::collections::BTreeMap;

use chrono::Utc;
use verde::{Verde, allocate};
use verde_demos::common::{demo_span, get_connector, universe};

const BUDGET: f64 = 25_000.0;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Create the connector and build the orchestrator.
    let verde = Verde::builder().with_connector(get_connector()).build()?;

    // 2. Build the target portfolio.
    let tickers = universe();
    let span = demo_span();
    let report = verde.portfolio(&tickers, span, Utc::now()).await?;
    println!("Target weights ({} mode):", report.mode);
    for (ticker, weight) in report.weights.iter() {
        println!("  {:<8} {:>6.2}%", ticker.as_str(), weight * 100.0);
    }

    // 3. Collect the latest close for every weighted position.
    let mut latest: BTreeMap<_, _> = BTreeMap::new();
    for (ticker, weight) in report.weights.iter() {
        if weight <= 0.0 {
            continue;
        }
        let series = verde.price_history(ticker, span).await?;
        if let Some(close) = series.last_close() {
            latest.insert(ticker.clone(), close);
        }
    }

    // 4. Convert the weights into whole shares for the cash budget.
    let allocation = allocate(&report.weights, &latest, BUDGET)?;
    println!("\n## Allocation of ${BUDGET:.0}");
    println!("{:<8} | {:>7} | {:>10}", "Ticker", "Shares", "Value");
    println!("{:-<9}|{:-<9}|{:-<12}", "", "", "");
    for (ticker, shares) in &allocation.shares {
        let value = *shares as f64 * latest[ticker];
        println!("{:<8} | {:>7} | {:>9.2}", ticker.as_str(), shares, value);
    }
    println!("\nLeftover cash: ${:.2}", allocation.leftover);

    Ok(())
}

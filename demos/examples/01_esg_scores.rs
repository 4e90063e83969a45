use chrono::Utc;
use verde::Verde;
use verde_demos::common::{get_connector, universe};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Create the connector and build the orchestrator.
    let verde = Verde::builder().with_connector(get_connector()).build()?;

    // 2. Score the whole universe in one request; normalization is relative
    //    to exactly this peer group.
    let tickers = universe();
    println!("Scoring {} tickers...", tickers.len());
    let report = verde.esg_scores(&tickers, Utc::now()).await?;

    // 3. Print the per-pillar and composite scores.
    println!("\n## Normalized ESG scores");
    println!(
        "{:<8} | {:>6} | {:>6} | {:>6} | {:>9}",
        "Ticker", "E", "S", "G", "Composite"
    );
    println!("{:-<9}|{:-<8}|{:-<8}|{:-<8}|{:-<11}", "", "", "", "", "");
    for (ticker, score) in &report.scores {
        println!(
            "{:<8} | {:>6.3} | {:>6.3} | {:>6.3} | {:>9.3}",
            ticker.as_str(),
            score.pillars.e,
            score.pillars.s,
            score.pillars.g,
            score.composite()
        );
    }

    // 4. Surface anything the pipeline recovered from.
    if report.warnings.is_empty() {
        println!("\nNo warnings.");
    } else {
        println!("\nWarnings:");
        for warning in &report.warnings {
            println!("  - {warning}");
        }
    }

    Ok(())
}

//! Model comparison report entrypoint.
//!
//! Run with: cargo run -p toxgraph-report
//!
//! Renders the fixed benchmark table into `visualizations/` (plus its
//! `gin_analysis/` subdirectory) and prints the summary statistics.

use std::path::Path;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use toxgraph_report::{charts, reference_metrics, summary};

const OUTPUT_DIR: &str = "visualizations";

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let models = reference_metrics();

    let written = charts::render_all(&models, Path::new(OUTPUT_DIR))?;
    print!("{}", summary::render_summary(&models));

    println!("\nVisualizations saved to '{OUTPUT_DIR}':");
    for path in &written {
        println!("- {}", path.display());
    }
    info!("report complete");

    Ok(())
}

//! day-rings CLI entry point
//!
//! Reachable-by-day range rings - CLI + web API

use day_rings::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

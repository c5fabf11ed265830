//! Lists every candidate and the open jobs of an Ashby organization.
//!
//! ```bash
//! export ASHBY_API_TOKEN="your-api-key"
//! RUST_LOG=ashby=debug cargo run --example list_candidates
//! ```

use ashby::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ashby=info")),
        )
        .init();

    let client = AshbyClient::from_env()?;

    let candidates = client.candidates().list().await?;
    println!("{} candidates", candidates.len());
    for candidate in candidates.iter().take(10) {
        println!(
            "  {} {}",
            candidate["id"].as_str().unwrap_or("?"),
            candidate["name"].as_str().unwrap_or("")
        );
    }

    let jobs = client.jobs().list().await?;
    let open = jobs.iter().filter(|job| job["status"] == "Open").count();
    println!("{} jobs ({open} open)", jobs.len());

    Ok(())
}

//! Basic example demonstrating the SimilarWeb API client.
//!
//! Run with:
//! ```
//! SIMILARWEB_USER_KEY=your-key cargo run --example basic
//! ```

use similarweb::{error_message, visit_counts, TrafficClient, TrafficStats};

#[tokio::main]
async fn main() -> similarweb::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating SimilarWeb client...");
    let mut client = TrafficClient::from_env()?;
    println!("Base URL template: {}", client.base_url());

    // Monthly visit counts
    println!("\n--- Visits (example.com, monthly) ---");
    let payload = client
        .visits("example.com", "monthly", "11-2014", "12-2014", false)
        .await?;
    println!("Requested: {}", client.full_url());

    if let Some(message) = error_message(&payload) {
        println!("API error: {message}");
    } else {
        let counts = visit_counts(&payload)?;
        for (date, count) in &counts {
            println!("  {date}: {count} visits");
        }
    }

    // Traffic overview
    println!("\n--- Traffic (example.com) ---");
    let payload = client.traffic("example.com").await?;
    println!("Requested: {}", client.full_url());

    if let Some(message) = error_message(&payload) {
        println!("API error: {message}");
    } else {
        let stats = TrafficStats::from_payload(&payload)?;
        println!("Global rank: {}", stats.global_rank);
        println!(
            "Top country: {} ({:.1}% of traffic)",
            stats.country_code,
            stats
                .top_country_shares
                .first()
                .map(|s| s.traffic_share * 100.0)
                .unwrap_or(0.0)
        );
        for share in &stats.traffic_shares {
            println!("  {}: {:.2}%", share.source_type, share.source_value * 100.0);
        }
        println!("Report month: {}", stats.date);
    }

    println!("\nDone!");
    Ok(())
}

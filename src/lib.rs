//! SimilarWeb API client library.
//!
//! A Rust library for the SimilarWeb site traffic API. The client formats
//! a parameterized URL per operation, performs a single GET, and returns
//! the decoded JSON body verbatim; the API reports its own failures
//! (invalid key, malformed site URL, rejected field values) as ordinary
//! `{"Error": <message>}` payloads, so callers probe for that key rather
//! than match on an error type.
//!
//! # Quick Start
//!
//! ```no_run
//! use similarweb::{error_message, TrafficClient, TrafficStats};
//!
//! #[tokio::main]
//! async fn main() -> similarweb::Result<()> {
//!     // Create client from environment variables
//!     let mut client = TrafficClient::from_env()?;
//!
//!     // Monthly visit counts for a date range
//!     let payload = client
//!         .visits("example.com", "monthly", "11-2014", "12-2014", false)
//!         .await?;
//!     if let Some(message) = error_message(&payload) {
//!         eprintln!("API error: {message}");
//!     } else {
//!         let counts = similarweb::visit_counts(&payload)?;
//!         for (date, count) in &counts {
//!             println!("{date}: {count}");
//!         }
//!     }
//!
//!     // Traffic overview, with a typed view
//!     let payload = client.traffic("example.com").await?;
//!     let stats = TrafficStats::from_payload(&payload)?;
//!     println!("Global rank: {}", stats.global_rank);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `SIMILARWEB_USER_KEY` (required) - Your SimilarWeb user key
//! - `SIMILARWEB_API_URL` (optional) - Base URL template (defaults to
//!   `http://api.similarweb.com/Site/{url}/v1/`)

mod client;
mod error;
mod models;
mod response;

// Re-export core types
pub use client::TrafficClient;
pub use error::{Result, SimilarwebError};
pub use response::{error_message, SitePayload};

// Re-export typed views
pub use models::{visit_counts, ReachPoint, SourceShare, TopCountryShare, TrafficStats};

//! # Steam Finder
//!
//! Terminal search tools for a Steam games catalog hosted on a remote
//! search cluster:
//! - Multi-node HTTPS transport with API-key credentials and timeout retry
//! - Dated-index resolution (the newest `steam_games-*` index wins)
//! - One prebuilt query per search mode: free text with typo tolerance,
//!   genre, category, price range, free-to-play, Metacritic threshold
//! - Aligned text tables for the returned hits
//!
//! Matching, fuzziness and ranking all happen inside the cluster; this
//! crate only builds requests and shapes responses for display.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use steam_finder::client::{CatalogClient, ClusterConfig};
//! use steam_finder::{query, table};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = CatalogClient::connect(ClusterConfig::default())?;
//!
//!     let index = client.latest_index("steam_games-*").await?;
//!     let hits = client.search(&index, &query::free_text("hollow knight")).await?;
//!
//!     println!("{}", table::render(&hits, &query::FREE_TEXT_SOURCE));
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod hits;
pub mod menu;
pub mod query;
pub mod table;

// Re-export primary types
pub use client::{CatalogClient, ClusterConfig};
pub use error::{FinderError, Result};
pub use hits::GameHit;
pub use menu::MenuChoice;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

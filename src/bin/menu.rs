use serde_json::Value;
use steam_finder::client::{CatalogClient, ClusterConfig};
use steam_finder::menu::{self, MenuChoice};
use steam_finder::{query, table, GameHit, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Pattern resolved to the newest index before every query
const INDEX_PATTERN: &str = "steam_games-2025*";

/// Wider pattern used for the startup document count
const COUNT_PATTERN: &str = "steam_games-*";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "steam_menu=info,steam_finder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Connect to the catalog cluster
    let client = CatalogClient::connect(ClusterConfig::default())?;

    match client.document_count(COUNT_PATTERN).await {
        Ok(total) => println!("📦 Total documents: {}", total),
        Err(e) => println!("❌ Connection error: {}", e),
    }

    loop {
        print_menu();
        let choice = menu::prompt_line("Option: ")?;

        match MenuChoice::parse(&choice) {
            MenuChoice::FreeText => {
                let text = menu::prompt_line("Text to search: ")?;
                run_query(&client, query::free_text(&text), &query::FREE_TEXT_SOURCE).await;
            }
            MenuChoice::Genre => {
                let genre = menu::prompt_line("Genre (RPG, Adventure...): ")?;
                run_query(&client, query::by_genre(&genre), &query::GENRE_SOURCE).await;
            }
            MenuChoice::Category => {
                let category = menu::prompt_line("Category (Anime, Open World...): ")?;
                run_query(&client, query::by_category(&category), &query::CATEGORY_SOURCE).await;
            }
            MenuChoice::PriceRange => {
                let min = menu::prompt_f64("Minimum price: ")?;
                let max = menu::prompt_f64("Maximum price: ")?;
                run_query(&client, query::price_range(min, max), &query::PRICE_SOURCE).await;
            }
            MenuChoice::FreeToPlay => {
                run_query(&client, query::free_to_play(), &query::FREE_TO_PLAY_SOURCE).await;
            }
            MenuChoice::TopRated => {
                let min_score = menu::prompt_i64("Minimum Metacritic score: ")?;
                run_query(&client, query::top_rated(min_score), &query::TOP_RATED_SOURCE).await;
            }
            MenuChoice::Quit => {
                println!("👋 See you soon");
                break;
            }
            MenuChoice::Invalid => println!("Invalid option"),
        }
    }

    Ok(())
}

fn print_menu() {
    println!("\n====== STEAM GAME FINDER ======");
    println!("1. General search (fuzzy)");
    println!("2. Search by genre");
    println!("3. Search by category");
    println!("4. Search by price range");
    println!("5. Free-to-play games");
    println!("6. Top Metacritic");
    println!("0. Quit");
}

/// Resolve the newest index, run the query, print the table.
/// Failures become one ❌ line and the menu comes back.
async fn run_query(client: &CatalogClient, body: Value, columns: &[&str]) {
    match search_newest(client, &body).await {
        Ok(hits) => println!("{}", table::render(&hits, columns)),
        Err(e) => println!("❌ Search failed: {}", e),
    }
}

async fn search_newest(client: &CatalogClient, body: &Value) -> Result<Vec<GameHit>> {
    let index = client.latest_index(INDEX_PATTERN).await?;
    client.search(&index, body).await
}

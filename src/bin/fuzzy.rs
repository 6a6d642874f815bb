use steam_finder::client::{CatalogClient, ClusterConfig};
use steam_finder::{menu, query, table};

/// Pattern resolved to the newest index before every lookup
const INDEX_PATTERN: &str = "steam_games-*";

/// Columns shown for each hit, skipping any a hit does not carry
const DISPLAY_COLUMNS: [&str; 4] = [
    "name",
    table::SCORE_COLUMN,
    "price_final",
    "price_category",
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Connect to the catalog cluster
    let client = CatalogClient::connect(ClusterConfig::default())?;

    match client.document_count(INDEX_PATTERN).await {
        Ok(total) => println!("📦 Total documents in '{}': {}", INDEX_PATTERN, total),
        Err(e) => println!("❌ Could not reach the cluster (check the API key): {}", e),
    }

    loop {
        let text = menu::prompt_line("\nGame to search (or 'exit' to quit): ")?;

        if menu::is_exit_word(&text) {
            println!("👋 See you soon");
            break;
        }

        lookup(&client, &text).await;
    }

    Ok(())
}

/// One fuzzy lookup against the newest index.
/// Failures become one ❌ line and the prompt comes back.
async fn lookup(client: &CatalogClient, text: &str) {
    let index = match client.latest_index(INDEX_PATTERN).await {
        Ok(index) => index,
        Err(e) => {
            println!("❌ Could not resolve an index: {}", e);
            return;
        }
    };

    println!(
        "\n🎮 Searching '{}' for '{}' on field '{}' (fuzziness {})...",
        index,
        text,
        query::DEFAULT_FUZZY_FIELD,
        query::DEFAULT_FUZZINESS
    );

    let body = query::fuzzy_field(query::DEFAULT_FUZZY_FIELD, text, query::DEFAULT_FUZZINESS);
    match client.search(&index, &body).await {
        Ok(hits) => println!("{}", table::render(&hits, &DISPLAY_COLUMNS)),
        Err(e) => println!("❌ Search failed: {}", e),
    }
}

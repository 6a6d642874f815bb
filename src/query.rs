use serde_json::{json, Value};

/// Hits requested by every query shape
pub const RESULT_SIZE: usize = 5;

/// Boosted field set for the general free-text search
pub const FREE_TEXT_FIELDS: [&str; 5] = [
    "name^3",
    "genres^2",
    "categories^2",
    "short_description",
    "detailed_description",
];

/// Field targeted by the single-field fuzzy search
pub const DEFAULT_FUZZY_FIELD: &str = "name";

/// Edit-distance tolerance, delegated to the engine
pub const DEFAULT_FUZZINESS: &str = "AUTO";

/// Source fields returned per search mode
pub const FREE_TEXT_SOURCE: [&str; 4] = ["name", "genres", "price_final", "metacritic_score"];
pub const GENRE_SOURCE: [&str; 3] = ["name", "genres", "price_final"];
pub const CATEGORY_SOURCE: [&str; 3] = ["name", "categories", "price_final"];
pub const PRICE_SOURCE: [&str; 2] = ["name", "price_final"];
pub const FREE_TO_PLAY_SOURCE: [&str; 2] = ["name", "genres"];
pub const TOP_RATED_SOURCE: [&str; 3] = ["name", "metacritic_score", "price_final"];
pub const FUZZY_SOURCE: [&str; 5] = [
    "name",
    "price_final",
    "price_category",
    "genres",
    "release_date",
];

/// General search: weighted multi-field match with typo tolerance.
/// Half the terms are enough to match, so partial titles still hit.
pub fn free_text(text: &str) -> Value {
    json!({
        "size": RESULT_SIZE,
        "query": {
            "multi_match": {
                "query": text,
                "fields": FREE_TEXT_FIELDS,
                "fuzziness": DEFAULT_FUZZINESS,
                "operator": "or",
                "minimum_should_match": "50%"
            }
        },
        "_source": FREE_TEXT_SOURCE
    })
}

/// Genre search: every word of the input must match
pub fn by_genre(genre: &str) -> Value {
    json!({
        "size": RESULT_SIZE,
        "query": {
            "match": {
                "genres": { "query": genre, "operator": "and" }
            }
        },
        "_source": GENRE_SOURCE
    })
}

/// Category search: every word of the input must match
pub fn by_category(category: &str) -> Value {
    json!({
        "size": RESULT_SIZE,
        "query": {
            "match": {
                "categories": { "query": category, "operator": "and" }
            }
        },
        "_source": CATEGORY_SOURCE
    })
}

/// Games priced inside the inclusive range
pub fn price_range(min: f64, max: f64) -> Value {
    json!({
        "size": RESULT_SIZE,
        "query": {
            "range": {
                "price_final": { "gte": min, "lte": max }
            }
        },
        "_source": PRICE_SOURCE
    })
}

/// Free-to-play games: exact boolean filter
pub fn free_to_play() -> Value {
    json!({
        "size": RESULT_SIZE,
        "query": {
            "term": { "is_free": true }
        },
        "_source": FREE_TO_PLAY_SOURCE
    })
}

/// Games at or above a Metacritic score, best first
pub fn top_rated(min_score: i64) -> Value {
    json!({
        "size": RESULT_SIZE,
        "query": {
            "range": {
                "metacritic_score": { "gte": min_score }
            }
        },
        "sort": [{ "metacritic_score": "desc" }],
        "_source": TOP_RATED_SOURCE
    })
}

/// Fuzzy match on a single field, used by the interactive finder
pub fn fuzzy_field(field: &str, text: &str, fuzziness: &str) -> Value {
    json!({
        "size": RESULT_SIZE,
        "query": {
            "match": {
                field: { "query": text, "fuzziness": fuzziness }
            }
        },
        "_source": FUZZY_SOURCE
    })
}

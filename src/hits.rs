use serde_json::{Map, Value};

/// One catalog document returned by a query
#[derive(Debug, Clone, Default)]
pub struct GameHit {
    /// Source fields exactly as the engine returned them
    pub source: Map<String, Value>,
    /// Relevance score, absent when the engine sorts by field instead
    pub score: Option<f64>,
}

impl GameHit {
    /// Field names present on this hit
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.source.keys().map(String::as_str)
    }

    /// Raw field value
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.source.get(name)
    }

    /// Field value formatted for a table cell
    pub fn display_value(&self, name: &str) -> Option<String> {
        self.field(name).map(format_value)
    }
}

/// Flatten a search response body into display hits
pub fn from_response(body: &Value) -> Vec<GameHit> {
    let mut results = Vec::new();

    if let Some(raw_hits) = body["hits"]["hits"].as_array() {
        for hit in raw_hits {
            let source = hit["_source"].as_object().cloned().unwrap_or_default();
            let score = hit["_score"].as_f64();
            results.push(GameHit { source, score });
        }
    }

    results
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Array(items) => items
            .iter()
            .map(format_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_response_reads_source_and_score() {
        let body = json!({
            "took": 3,
            "hits": {
                "total": { "value": 2 },
                "hits": [
                    { "_score": 12.5, "_source": { "name": "Celeste", "price_final": 19.99 } },
                    { "_score": null, "_source": { "name": "Hades" } }
                ]
            }
        });

        let hits = from_response(&body);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].score, Some(12.5));
        assert_eq!(hits[0].display_value("name").as_deref(), Some("Celeste"));
        assert_eq!(hits[1].score, None);
    }

    #[test]
    fn test_from_response_tolerates_missing_hits() {
        assert!(from_response(&json!({})).is_empty());
        assert!(from_response(&json!({ "hits": {} })).is_empty());
    }

    #[test]
    fn test_display_value_joins_arrays() {
        let body = json!({
            "hits": { "hits": [
                { "_score": 1.0, "_source": { "genres": ["Action", "Indie"] } }
            ]}
        });

        let hits = from_response(&body);
        assert_eq!(hits[0].display_value("genres").as_deref(), Some("Action, Indie"));
        assert_eq!(hits[0].display_value("missing"), None);
    }

    #[test]
    fn test_display_value_keeps_numbers_plain() {
        let body = json!({
            "hits": { "hits": [
                { "_score": 1.0, "_source": { "price_final": 59.99, "metacritic_score": 93, "is_free": false } }
            ]}
        });

        let hits = from_response(&body);
        assert_eq!(hits[0].display_value("price_final").as_deref(), Some("59.99"));
        assert_eq!(hits[0].display_value("metacritic_score").as_deref(), Some("93"));
        assert_eq!(hits[0].display_value("is_free").as_deref(), Some("false"));
    }
}

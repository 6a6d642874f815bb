use crate::hits::GameHit;

/// Pseudo-column backed by the hit score instead of a source field
pub const SCORE_COLUMN: &str = "score";

/// Message printed when a query matched nothing
pub const NO_RESULTS: &str = "❌ No results found.";

/// Cells wider than this get ellipsis-truncated
const MAX_CELL_WIDTH: usize = 40;

/// Render hits as an aligned text table over the requested columns.
/// Columns no hit carries are dropped; if none survive, every field
/// present on the hits is shown instead.
pub fn render(hits: &[GameHit], columns: &[&str]) -> String {
    if hits.is_empty() {
        return NO_RESULTS.to_string();
    }

    let mut present: Vec<&str> = columns
        .iter()
        .copied()
        .filter(|column| column_exists(hits, column))
        .collect();

    if present.is_empty() {
        for hit in hits {
            for name in hit.field_names() {
                if !present.contains(&name) {
                    present.push(name);
                }
            }
        }
    }

    let rows: Vec<Vec<String>> = hits
        .iter()
        .map(|hit| present.iter().map(|column| truncate(cell(hit, column))).collect())
        .collect();

    let mut widths: Vec<usize> = present.iter().map(|column| column.chars().count()).collect();
    for row in &rows {
        for (i, value) in row.iter().enumerate() {
            widths[i] = widths[i].max(value.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&present, &widths));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in &rows {
        lines.push(format_row(row, &widths));
    }

    lines.join("\n")
}

fn column_exists(hits: &[GameHit], column: &str) -> bool {
    if column == SCORE_COLUMN {
        return hits.iter().any(|hit| hit.score.is_some());
    }
    hits.iter().any(|hit| hit.field(column).is_some())
}

fn cell(hit: &GameHit, column: &str) -> String {
    if column == SCORE_COLUMN {
        return match hit.score {
            Some(score) => format!("{:.3}", score),
            None => String::new(),
        };
    }
    hit.display_value(column).unwrap_or_default()
}

fn truncate(text: String) -> String {
    if text.chars().count() <= MAX_CELL_WIDTH {
        return text;
    }
    let mut cut: String = text.chars().take(MAX_CELL_WIDTH - 1).collect();
    cut.push('…');
    cut
}

fn format_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(value, width)| format!("{:<1$}", value.as_ref(), width))
        .collect();
    padded.join("  ").trim_end().to_string()
}

use gofetch_api::{Envelope, SearchResponse, SearchResultItem};

pub const NO_RESULTS_HTML: &str = "<li>No results found.</li>";
pub const ERROR_HTML: &str = "<li>Error performing search. See console for details.</li>";

/// Markup for the results container.
///
/// - `None` and empty collections render a single "no results" item.
/// - A bare list renders one scored item per result.
/// - An envelope renders the `About {total} results ({secs} seconds)` header,
///   then one title link per result. `total` is shown as sent by the server.
pub fn render_results(resp: Option<&SearchResponse>, elapsed_secs: f64) -> String {
    match resp {
        None => NO_RESULTS_HTML.to_string(),
        Some(SearchResponse::Legacy(items)) => render_scored(items),
        Some(SearchResponse::Paginated(env)) => render_paginated(env, elapsed_secs),
    }
}

fn render_scored(items: &[SearchResultItem]) -> String {
    if items.is_empty() {
        return NO_RESULTS_HTML.to_string();
    }
    let mut out = String::new();
    for r in items {
        out.push_str("<li>");
        out.push_str(&title_link(r));
        if let Some(score) = r.score {
            out.push_str(&format!("<p>Score: {}</p>", format_score(score)));
        }
        out.push_str("</li>");
    }
    out
}

fn render_paginated(env: &Envelope, elapsed_secs: f64) -> String {
    let items = match env.data.as_deref() {
        Some(items) if !items.is_empty() => items,
        _ => return NO_RESULTS_HTML.to_string(),
    };
    let mut out = format!(
        "<p class=\"search-stats\">{}</p>",
        stats_line(env.total, elapsed_secs)
    );
    for r in items {
        out.push_str(&format!("<li>{}</li>", title_link(r)));
    }
    out
}

fn title_link(r: &SearchResultItem) -> String {
    format!(
        "<a href=\"{}\">{}</a>",
        escape_html(&r.url),
        escape_html(&r.title)
    )
}

/// `About 12 results (0.0123 seconds)`
pub fn stats_line(total: i64, elapsed_secs: f64) -> String {
    format!("About {} results ({:.4} seconds)", total, elapsed_secs)
}

pub fn format_score(score: f64) -> String {
    format!("{:.4}", score)
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html("<a href=\"x\">Tom & 'Jerry'</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn score_has_four_decimals() {
        assert_eq!(format_score(0.9), "0.9000");
        assert_eq!(format_score(1.23456), "1.2346");
        assert_eq!(format_score(3.0), "3.0000");
    }

    #[test]
    fn stats_line_rounds_duration() {
        assert_eq!(stats_line(1, 0.01234), "About 1 results (0.0123 seconds)");
        assert_eq!(stats_line(1200, 2.0), "About 1200 results (2.0000 seconds)");
    }
}

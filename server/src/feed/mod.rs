//! Feed formats
//!
//! Parsing of remote documents and rendering of the published feeds.

pub mod page;
pub mod parser;
pub mod renderer;

pub use page::{render_admin_page, PageBranding};
pub use parser::{parse_json, parse_rss, FetchMode, FieldMapping};
pub use renderer::{render_atom, render_json, render_rss, FeedFormat, FeedMeta, JsonFeed};

/// Truncate to at most `max_chars` characters, with an ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

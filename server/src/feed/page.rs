//! Admin page rendering

use askama::Template;

use super::renderer::FeedFormat;
use super::truncate;
use crate::domain::entities::TaggedEntry;

const DESCRIPTION_EXCERPT_CHARS: usize = 280;

/// Branding shown on the admin page
#[derive(Debug, Clone, Copy, Default)]
pub struct PageBranding<'a> {
    pub title: &'a str,
    /// Raw HTML snippet, inserted unescaped
    pub logo: Option<&'a str>,
    /// Raw HTML snippet, inserted unescaped
    pub footer_logo: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "admin.html")]
struct AdminTemplate<'a> {
    title: &'a str,
    logo: Option<&'a str>,
    footer_logo: Option<&'a str>,
    feeds: Vec<FeedLink>,
    entries: Vec<EntryView<'a>>,
}

struct FeedLink {
    slug: String,
    label: String,
}

struct EntryView<'a> {
    id: i32,
    title: &'a str,
    link: Option<&'a str>,
    datetime: String,
    date: String,
    excerpt: Option<String>,
    tags: Vec<TagView<'a>>,
}

struct TagView<'a> {
    id: i32,
    name: &'a str,
}

/// Render the admin page listing every entry with its tag controls
pub fn render_admin_page(
    branding: &PageBranding<'_>,
    entries: &[TaggedEntry],
) -> askama::Result<String> {
    AdminTemplate {
        title: branding.title,
        logo: branding.logo,
        footer_logo: branding.footer_logo,
        feeds: FeedFormat::ALL
            .into_iter()
            .map(|format| FeedLink {
                slug: format.to_string(),
                label: format.to_string().to_uppercase(),
            })
            .collect(),
        entries: entries.iter().map(entry_view).collect(),
    }
    .render()
}

fn entry_view(tagged: &TaggedEntry) -> EntryView<'_> {
    let entry = &tagged.entry;

    EntryView {
        id: entry.id.0,
        title: &entry.title,
        link: entry.link.as_deref(),
        datetime: entry.published_at.to_rfc3339(),
        date: entry.published_at.format("%Y-%m-%d %H:%M").to_string(),
        excerpt: entry
            .description
            .as_deref()
            .map(|d| truncate(d, DESCRIPTION_EXCERPT_CHARS)),
        tags: tagged
            .tags
            .iter()
            .map(|tag| TagView {
                id: tag.id.0,
                name: &tag.name,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_entry, test_tag, test_tagged_entry};

    #[test]
    fn admin_page_lists_entries_and_controls() {
        let branding = PageBranding {
            title: "My Feed",
            logo: Some("<img src=\"/static/logo.png\">"),
            footer_logo: None,
        };
        let entries = vec![test_tagged_entry(
            test_entry(7, "Launch"),
            vec![test_tag(3, "fun")],
        )];

        let html = render_admin_page(&branding, &entries).unwrap();

        assert!(html.contains("<img src=\"/static/logo.png\">"));
        assert!(html.contains("action=\"/refresh_feed\""));
        assert!(html.contains("href=\"/get_feed_rss\""));
        assert!(html.contains("href=\"/get_feed_atom\""));
        assert!(html.contains("href=\"/get_feed_json\""));
        assert!(html.contains("<a href=\"https://example.com/7\">Launch</a>"));
        assert!(html.contains("action=\"/delete_tag/7/3\""));
        assert!(html.contains("action=\"/tag_entry/7\""));
        assert!(html.contains("name=\"tags\""));
        assert!(!html.contains("<footer>"));
    }

    #[test]
    fn admin_page_escapes_entry_text() {
        let mut entry = test_entry(1, "<script>alert(1)</script>");
        entry.link = None;

        let html = render_admin_page(
            &PageBranding {
                title: "Feed",
                ..Default::default()
            },
            &[test_tagged_entry(entry, vec![])],
        )
        .unwrap();

        assert!(html.contains("<h2>&lt;script&gt;alert(1)&lt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn admin_page_empty_with_footer() {
        let html = render_admin_page(
            &PageBranding {
                title: "Feed",
                logo: None,
                footer_logo: Some("<small>footer</small>"),
            },
            &[],
        )
        .unwrap();

        assert!(html.contains("No entries yet."));
        assert!(html.contains("<footer>\n<small>footer</small>"));
    }
}

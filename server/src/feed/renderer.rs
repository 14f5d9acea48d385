//! Feed renderer
//!
//! Serializes stored entries to RSS 2.0, Atom, or a JSON document.
//! Entries are rendered in the order given (newest first from the service).

use askama::Template;
use chrono::SecondsFormat;
use reqwest::Url;
use rss::{CategoryBuilder, ChannelBuilder, GuidBuilder, ItemBuilder};
use serde::Serialize;

use crate::domain::entities::{ChangeMarker, TaggedEntry};

/// Output format of a published feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedFormat {
    Rss,
    Atom,
    Json,
}

impl FeedFormat {
    pub const ALL: [FeedFormat; 3] = [FeedFormat::Rss, FeedFormat::Atom, FeedFormat::Json];

    pub fn content_type(&self) -> &'static str {
        match self {
            FeedFormat::Rss => "application/rss+xml; charset=utf-8",
            FeedFormat::Atom => "application/atom+xml; charset=utf-8",
            FeedFormat::Json => "application/json",
        }
    }
}

impl std::fmt::Display for FeedFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedFormat::Rss => write!(f, "rss"),
            FeedFormat::Atom => write!(f, "atom"),
            FeedFormat::Json => write!(f, "json"),
        }
    }
}

/// Feed-level metadata shared by every format
#[derive(Debug, Clone, Copy)]
pub struct FeedMeta<'a> {
    pub title: &'a str,
    /// Public home page of the feed
    pub link: &'a str,
    /// URL the feed was requested at, used as the Atom id
    pub self_url: &'a str,
}

/// Render an RSS 2.0 document
pub fn render_rss(meta: &FeedMeta<'_>, entries: &[TaggedEntry]) -> String {
    let items = entries
        .iter()
        .map(|tagged| {
            let entry = &tagged.entry;
            let categories = tagged
                .tags
                .iter()
                .map(|tag| CategoryBuilder::default().name(tag.name.clone()).build())
                .collect::<Vec<_>>();

            ItemBuilder::default()
                .title(entry.title.clone())
                .link(entry.link.clone())
                .guid(
                    GuidBuilder::default()
                        .value(entry.feed_id.clone())
                        .permalink(false)
                        .build(),
                )
                .pub_date(entry.published_at.to_rfc2822())
                .description(entry.description.clone())
                .categories(categories)
                .build()
        })
        .collect::<Vec<_>>();

    ChannelBuilder::default()
        .title(meta.title)
        .link(meta.link)
        .description(meta.title)
        .items(items)
        .build()
        .to_string()
}

#[derive(Template)]
#[template(path = "atom.xml", ext = "xml")]
struct AtomTemplate<'a> {
    title: &'a str,
    self_url: &'a str,
    updated: String,
    entries: Vec<AtomEntry<'a>>,
}

struct AtomEntry<'a> {
    title: &'a str,
    id: String,
    link: Option<&'a str>,
    updated: String,
    content: &'a str,
    tags: Vec<&'a str>,
}

/// Render an Atom document. `updated` supplies the feed-level timestamp.
pub fn render_atom(
    meta: &FeedMeta<'_>,
    updated: &ChangeMarker,
    entries: &[TaggedEntry],
) -> askama::Result<String> {
    AtomTemplate {
        title: meta.title,
        self_url: meta.self_url,
        updated: updated.rfc3339(),
        entries: entries
            .iter()
            .map(|tagged| AtomEntry {
                title: &tagged.entry.title,
                id: entry_iri(&tagged.entry.feed_id),
                link: tagged.entry.link.as_deref(),
                updated: tagged
                    .entry
                    .published_at
                    .to_rfc3339_opts(SecondsFormat::Secs, true),
                content: tagged.entry.description.as_deref().unwrap_or_default(),
                tags: tagged.tag_names(),
            })
            .collect(),
    }
    .render()
}

/// Atom ids must be IRIs. Remote ids that are not absolute URLs get a URN.
fn entry_iri(feed_id: &str) -> String {
    match Url::parse(feed_id) {
        Ok(_) => feed_id.to_string(),
        Err(_) => format!("urn:refeed:{}", feed_id),
    }
}

mod filters {
    /// Make text safe inside a CDATA section by splitting any `]]>`
    pub fn cdata<T: std::fmt::Display>(s: T) -> ::askama::Result<String> {
        Ok(s.to_string().replace("]]>", "]]]]><![CDATA[>"))
    }
}

/// JSON feed document
#[derive(Debug, Clone, Serialize)]
pub struct JsonFeed {
    pub title: String,
    pub entries: Vec<JsonFeedEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonFeedEntry {
    pub id: i32,
    pub feed_id: String,
    pub title: String,
    pub link: Option<String>,
    pub published_at: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

/// Build the JSON feed document
pub fn render_json(meta: &FeedMeta<'_>, entries: &[TaggedEntry]) -> JsonFeed {
    JsonFeed {
        title: meta.title.to_string(),
        entries: entries
            .iter()
            .map(|tagged| JsonFeedEntry {
                id: tagged.entry.id.0,
                feed_id: tagged.entry.feed_id.clone(),
                title: tagged.entry.title.clone(),
                link: tagged.entry.link.clone(),
                published_at: tagged
                    .entry
                    .published_at
                    .to_rfc3339_opts(SecondsFormat::Secs, true),
                description: tagged.entry.description.clone(),
                tags: tagged.tag_names().into_iter().map(String::from).collect(),
            })
            .collect(),
    }
}

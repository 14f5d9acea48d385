//! Remote feed parsing
//!
//! Turns a downloaded RSS or JSON document into `NewFeedEntry` records, in
//! document order. Which strategy runs is decided by `FetchMode`.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

use crate::domain::entities::NewFeedEntry;
use crate::error::FetchError;

/// Format of the remote document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    #[default]
    Json,
    Rss,
}

impl std::fmt::Display for FetchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchMode::Json => write!(f, "json"),
            FetchMode::Rss => write!(f, "rss"),
        }
    }
}

impl std::str::FromStr for FetchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(FetchMode::Json),
            "rss" => Ok(FetchMode::Rss),
            _ => Err(format!(
                "Unknown fetch mode: {}. Only \"json\" and \"rss\" are recognized",
                s
            )),
        }
    }
}

/// Which JSON keys hold each entry field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    /// Top-level key of the item array
    pub items: String,
    pub id: String,
    pub title: String,
    pub link: String,
    pub published: String,
    pub description: String,
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self {
            items: "data".to_string(),
            id: "id".to_string(),
            title: "title".to_string(),
            link: "url".to_string(),
            published: "date_utc".to_string(),
            description: "description".to_string(),
        }
    }
}

/// Parse an RSS 2.0 channel.
///
/// The guid identifies an item, falling back to its link; items with
/// neither are skipped.
pub fn parse_rss(body: &[u8], date_format: &str) -> Result<Vec<NewFeedEntry>, FetchError> {
    let channel = rss::Channel::read_from(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    let mut entries = Vec::with_capacity(channel.items().len());
    for item in channel.items() {
        let feed_id = item
            .guid()
            .map(|guid| guid.value())
            .or_else(|| item.link())
            .map(str::trim)
            .filter(|id| !id.is_empty());

        let Some(feed_id) = feed_id else {
            tracing::warn!(title = ?item.title(), "Skipping RSS item without guid or link");
            continue;
        };

        let published_at = item
            .pub_date()
            .map(|raw| parse_published(raw, date_format))
            .transpose()?;

        entries.push(NewFeedEntry {
            feed_id: feed_id.to_string(),
            title: item.title().unwrap_or_default().to_string(),
            link: item.link().map(str::to_string),
            published_at,
            description: item.description().map(str::to_string),
        });
    }

    Ok(entries)
}

/// Parse a JSON document whose items sit in an array under `mapping.items`
pub fn parse_json(
    body: &[u8],
    mapping: &FieldMapping,
    date_format: &str,
) -> Result<Vec<NewFeedEntry>, FetchError> {
    let document: Value = serde_json::from_slice(body)
        .map_err(|e| FetchError::Parse(format!("invalid JSON: {}", e)))?;

    let items = document
        .get(&mapping.items)
        .and_then(Value::as_array)
        .ok_or_else(|| FetchError::Parse(format!("no `{}` array in document", mapping.items)))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| json_entry(index, item, mapping, date_format))
        .collect()
}

fn json_entry(
    index: usize,
    item: &Value,
    mapping: &FieldMapping,
    date_format: &str,
) -> Result<NewFeedEntry, FetchError> {
    let required = |key: &str| {
        field_text(item, key).ok_or_else(|| {
            FetchError::Parse(format!("item {} has no usable `{}` field", index, key))
        })
    };

    let published_at = field_text(item, &mapping.published)
        .map(|raw| parse_published(&raw, date_format))
        .transpose()?;

    Ok(NewFeedEntry {
        feed_id: required(&mapping.id)?,
        title: required(&mapping.title)?,
        link: field_text(item, &mapping.link),
        published_at,
        description: field_text(item, &mapping.description),
    })
}

/// Read a scalar field as text. Numbers are accepted for ids.
fn field_text(item: &Value, key: &str) -> Option<String> {
    match item.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Parse a publication date with a strftime-style format.
///
/// Formats with an offset are converted to UTC; formats without one are read
/// as UTC. RFC 2822 is accepted as a last resort since RSS feeds commonly
/// write `GMT` where `%z` expects a numeric offset.
pub fn parse_published(raw: &str, format: &str) -> Result<DateTime<Utc>, FetchError> {
    let raw = raw.trim();

    if let Ok(date) = DateTime::parse_from_str(raw, format) {
        return Ok(date.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
        return Ok(Utc.from_utc_datetime(&naive));
    }
    if let Ok(date) = DateTime::parse_from_rfc2822(raw) {
        return Ok(date.with_timezone(&Utc));
    }

    Err(FetchError::InvalidDate {
        value: raw.to_string(),
        format: format.to_string(),
    })
}

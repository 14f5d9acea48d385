//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::adapters::sql::create_tables;
use crate::domain::entities::{FeedEntry, FeedEntryId, NewFeedEntry, Tag, TagId, TaggedEntry};

/// Publication time used by every fixture
pub fn test_published_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 5, 9, 15, 0).unwrap()
}

/// Create a stored entry whose remote id is `remote-{id}`
pub fn test_entry(id: i32, title: &str) -> FeedEntry {
    FeedEntry {
        id: FeedEntryId(id),
        feed_id: format!("remote-{}", id),
        title: title.to_string(),
        link: Some(format!("https://example.com/{}", id)),
        published_at: test_published_at() + Duration::hours(id as i64),
        description: Some(format!("About {}", title)),
    }
}

pub fn test_tag(id: i32, name: &str) -> Tag {
    Tag {
        id: TagId(id),
        name: name.to_string(),
    }
}

pub fn test_tagged_entry(entry: FeedEntry, tags: Vec<Tag>) -> TaggedEntry {
    TaggedEntry { entry, tags }
}

/// Create an entry as the parser would produce it
pub fn new_entry(feed_id: &str, title: &str) -> NewFeedEntry {
    NewFeedEntry {
        feed_id: feed_id.to_string(),
        title: title.to_string(),
        link: Some(format!("https://example.com/{}", feed_id)),
        published_at: Some(test_published_at()),
        description: None,
    }
}

/// RSS 2.0 document listing `(guid, title)` items in the given order
pub fn sample_rss_document(items: &[(&str, &str)]) -> String {
    let mut doc = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<rss version=\"2.0\"><channel>\
         <title>Remote</title><link>https://example.com</link><description>Remote feed</description>\n",
    );
    for (id, title) in items {
        doc.push_str(&format!(
            "<item><title>{title}</title><link>https://example.com/{id}</link>\
             <guid isPermaLink=\"false\">{id}</guid>\
             <pubDate>Tue, 05 Mar 2024 09:15:00 +0000</pubDate>\
             <description>About {title}</description></item>\n"
        ));
    }
    doc.push_str("</channel></rss>\n");
    doc
}

/// JSON document in the default field layout listing `(id, title)` items
pub fn sample_json_document(items: &[(&str, &str)]) -> String {
    let data: Vec<serde_json::Value> = items
        .iter()
        .map(|(id, title)| {
            serde_json::json!({
                "id": id,
                "title": title,
                "url": format!("https://example.com/{}", id),
                "date_utc": "2024-03-05 09:15:00",
                "description": format!("About {}", title),
            })
        })
        .collect();
    serde_json::json!({ "data": data }).to_string()
}

/// Fresh in-memory SQLite database with the schema applied
pub async fn test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("in-memory SQLite should open");
    create_tables(&db).await.expect("schema should apply");
    db
}

use std::env;

use anyhow::{anyhow, Context};

use crate::app::FetchSettings;
use crate::feed::{FetchMode, FieldMapping};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Public URL of this server, used as the RSS channel link
    pub public_base_url: String,
    pub feed_title: String,
    /// Raw HTML shown at the top of the admin page
    pub logo: Option<String>,
    /// Raw HTML shown at the bottom of the admin page
    pub footer_logo: Option<String>,
    pub static_dir: String,
    pub fetch_on_startup: bool,
    /// Seconds between background fetch cycles; disabled when unset
    pub refresh_interval_secs: Option<u64>,
    pub fetch: FetchSettings,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let or = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

        let defaults = FieldMapping::default();
        let mapping = FieldMapping {
            items: or("JSON_ITEMS_KEY", &defaults.items),
            id: or("JSON_ID_FIELD", &defaults.id),
            title: or("JSON_TITLE_FIELD", &defaults.title),
            link: or("JSON_LINK_FIELD", &defaults.link),
            published: or("JSON_PUBLISHED_FIELD", &defaults.published),
            description: or("JSON_DESCRIPTION_FIELD", &defaults.description),
        };

        let mode = match var("FETCH_MODE") {
            Some(raw) => raw.parse::<FetchMode>().map_err(|e| anyhow!(e))?,
            None => FetchMode::default(),
        };

        let fetch_defaults = FetchSettings::default();
        let fetch = FetchSettings {
            mode,
            rss_url: var("RSS_FEED_URL"),
            json_url: var("JSON_FEED_URL"),
            rss_date_format: or("RSS_PUBLISHED_AT_FORMAT", &fetch_defaults.rss_date_format),
            json_date_format: or("JSON_PUBLISHED_AT_FORMAT", &fetch_defaults.json_date_format),
            mapping,
        };

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got {:?}", raw))?,
            None => 8080,
        };

        let refresh_interval_secs = match var("REFRESH_INTERVAL_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().with_context(|| {
                    format!("REFRESH_INTERVAL_SECS must be a number, got {:?}", raw)
                })?;
                (secs > 0).then_some(secs)
            }
            None => None,
        };

        let fetch_on_startup = match var("FETCH_ON_STARTUP") {
            Some(raw) => parse_flag(&raw)
                .with_context(|| format!("FETCH_ON_STARTUP must be true or false, got {:?}", raw))?,
            None => true,
        };

        Ok(Self {
            database_url: or("DATABASE_URL", "sqlite://re-feed.db?mode=rwc"),
            port,
            public_base_url: or("PUBLIC_BASE_URL", "http://localhost:8080")
                .trim_end_matches('/')
                .to_string(),
            feed_title: or("FEED_TITLE", "My Feed"),
            logo: var("LOGO"),
            footer_logo: var("FOOTER_LOGO"),
            static_dir: or("STATIC_DIR", "static"),
            fetch_on_startup,
            refresh_interval_secs,
            fetch,
        })
    }
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(anyhow!("not a boolean")),
    }
}

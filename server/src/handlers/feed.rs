//! Feed handlers
//!
//! One handler serves every published feed route. The format comes from a
//! route extension; the optional `tag` and `limit` path segments narrow it.

use std::collections::HashMap;

use axum::{
    extract::{OriginalUri, Path, State},
    http::header,
    response::{IntoResponse, Response},
    Extension, Json,
};

use crate::app::FeedQuery;
use crate::error::AppError;
use crate::feed::{render_atom, render_json, render_rss, FeedFormat, FeedMeta};
use crate::AppState;

/// GET /get_feed_{rss,atom,json}[/tag/:tag][/:limit]
pub async fn get_feed(
    State(state): State<AppState>,
    Extension(format): Extension<FeedFormat>,
    OriginalUri(uri): OriginalUri,
    params: Option<Path<HashMap<String, String>>>,
) -> Result<Response, AppError> {
    let params = params.map(|Path(p)| p).unwrap_or_default();
    let query = FeedQuery {
        tag: params.get("tag").cloned(),
        limit: params.get("limit").map(|raw| parse_limit(raw)).transpose()?,
    };

    let entries = state.feed_service.entries(&query).await?;

    let self_url = format!("{}{}", state.config.public_base_url, uri.path());
    let meta = FeedMeta {
        title: &state.config.feed_title,
        link: &state.config.public_base_url,
        self_url: &self_url,
    };

    let response = match format {
        FeedFormat::Rss => (
            [(header::CONTENT_TYPE, format.content_type())],
            render_rss(&meta, &entries),
        )
            .into_response(),
        FeedFormat::Atom => {
            let updated = state.feed_service.atom_updated().await?;
            (
                [(header::CONTENT_TYPE, format.content_type())],
                render_atom(&meta, &updated, &entries)?,
            )
                .into_response()
        }
        FeedFormat::Json => Json(render_json(&meta, &entries)).into_response(),
    };

    Ok(response)
}

/// A limit must be a positive integer
fn parse_limit(raw: &str) -> Result<u64, AppError> {
    match raw.parse::<u64>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(AppError::BadRequest(format!(
            "Limit must be a positive integer, got {:?}",
            raw
        ))),
    }
}

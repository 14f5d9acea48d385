//! Admin handlers
//!
//! The HTML admin page and the form endpoints it posts to. Every mutation
//! answers with a 303 redirect back to the page.

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;

use crate::app::FeedQuery;
use crate::domain::entities::{FeedEntryId, TagId};
use crate::error::AppError;
use crate::feed::{render_admin_page, PageBranding};
use crate::AppState;

/// GET /
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let entries = state.feed_service.entries(&FeedQuery::default()).await?;

    let branding = PageBranding {
        title: &state.config.feed_title,
        logo: state.config.logo.as_deref(),
        footer_logo: state.config.footer_logo.as_deref(),
    };

    Ok(Html(render_admin_page(&branding, &entries)?))
}

/// POST /refresh_feed
///
/// Runs a fetch cycle before redirecting, so the page shows the new entries.
pub async fn refresh_feed(State(state): State<AppState>) -> Result<Redirect, AppError> {
    state.fetch_service.refresh().await?;
    Ok(Redirect::to("/"))
}

#[derive(Debug, Deserialize)]
pub struct TagForm {
    pub tags: String,
}

/// POST /tag_entry/:id
pub async fn tag_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<i32>,
    Form(form): Form<TagForm>,
) -> Result<Redirect, AppError> {
    state
        .tag_service
        .add_tag(FeedEntryId(entry_id), &form.tags)
        .await?;
    Ok(Redirect::to("/"))
}

/// POST|DELETE /delete_tag/:entry_id/:tag_id
pub async fn delete_tag(
    State(state): State<AppState>,
    Path((entry_id, tag_id)): Path<(i32, i32)>,
) -> Result<Redirect, AppError> {
    state
        .tag_service
        .remove_tag(FeedEntryId(entry_id), TagId(tag_id))
        .await?;
    Ok(Redirect::to("/"))
}

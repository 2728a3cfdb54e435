use std::sync::Arc;

use axum::{
    extract::{Query, State as Extract},
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use chrono::FixedOffset;
use log::{info, warn};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::page::render_document;
use crate::theme::{Mode, Theme};
use crate::{Loader, State};

/// Owns everything a page request needs.
pub struct Board {
    loader: Loader,
    state: RwLock<State>,
    offset: FixedOffset,
}

impl Board {
    pub fn new(loader: Loader, offset: FixedOffset) -> Arc<Self> {
        Arc::new(Self {
            loader,
            state: Default::default(),
            offset,
        })
    }

    /// Reloads the events, keeping the previous list when that fails.
    pub async fn refresh(&self) {
        let mut state = self.state.write().await;
        match self.loader.load(&mut state).await {
            Ok(count) => info!("Loaded {count} events from {}", self.loader.url()),
            Err(err) => warn!("Failed to load events from {}: {err}", self.loader.url()),
        }
    }

    pub async fn render(&self, theme: &Theme) -> String {
        render_document(&*self.state.read().await, theme, &self.offset)
    }
}

pub fn router(board: Arc<Board>) -> Router {
    Router::new()
        .route("/", get(handle_page))
        .fallback(|| async { Redirect::permanent("/") })
        .with_state(board)
}

#[derive(Deserialize)]
struct PageQuery {
    mode: Option<Mode>,
    #[serde(default)]
    json: bool,
}

async fn handle_page(Extract(board): Extract<Arc<Board>>, Query(query): Query<PageQuery>) -> Response {
    board.refresh().await;

    if query.json {
        let state = board.state.read().await;
        return Json(state.events()).into_response();
    }

    let theme = query.mode.map(Theme::from).unwrap_or_default();
    (
        [(header::CACHE_CONTROL, "no-store")],
        Html(board.render(&theme).await),
    )
        .into_response()
}

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use eato_core::selection::PageTab;
use std::sync::Arc;
use tracing::info;

use crate::error::AppError;
use crate::pages::{PageSession, PageSnapshot};
use crate::state::AppState;

#[derive(serde::Deserialize, Default)]
pub struct CreatePageBody {
    #[serde(default)]
    pub carousel: Option<String>,
}

#[derive(serde::Deserialize)]
pub struct ToggleBody {
    pub slug: String,
}

#[derive(serde::Deserialize)]
pub struct SelectBody {
    pub index: usize,
}

#[derive(serde::Deserialize)]
pub struct TabBody {
    pub tab: String,
}

/// POST /api/pages — open a page instance; starts its carousel timer if one is named.
pub async fn create_page(
    State(app): State<AppState>,
    Json(body): Json<CreatePageBody>,
) -> Result<(StatusCode, Json<PageSnapshot>), AppError> {
    let carousel = match body.carousel.as_deref() {
        Some(slug) => Some(app.site.carousel(slug)?.clone()),
        None => None,
    };
    let page = Arc::new(PageSession::open(carousel));
    let snap = page.snapshot().await;
    app.insert_page(page).await?;
    info!(page = %snap.id, carousel = ?snap.carousel, "page opened");
    Ok((StatusCode::CREATED, Json(snap)))
}

/// GET /api/pages/{id}
pub async fn get_page(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PageSnapshot>, AppError> {
    let page = app.page(&id).await?;
    Ok(Json(page.snapshot().await))
}

/// POST /api/pages/{id}/mount — fire the entrance transition. Idempotent.
pub async fn mount_page(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PageSnapshot>, AppError> {
    let page = app.page(&id).await?;
    Ok(Json(page.mount().await))
}

/// POST /api/pages/{id}/toggle — expand or collapse one catalogued system's card.
pub async fn toggle_card(
    State(app): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ToggleBody>,
) -> Result<Json<PageSnapshot>, AppError> {
    app.site.catalog().get(&body.slug)?;
    let page = app.page(&id).await?;
    Ok(Json(page.toggle(&body.slug).await))
}

/// POST /api/pages/{id}/select — jump the carousel to a clicked step.
pub async fn select_step(
    State(app): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<SelectBody>,
) -> Result<Json<PageSnapshot>, AppError> {
    let page = app.page(&id).await?;
    Ok(Json(page.select(body.index).await?))
}

/// POST /api/pages/{id}/tab — open the overview, features or roadmap tab.
pub async fn set_tab(
    State(app): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<TabBody>,
) -> Result<Json<PageSnapshot>, AppError> {
    let tab: PageTab = body.tab.parse()?;
    let page = app.page(&id).await?;
    Ok(Json(page.set_tab(tab).await))
}

/// DELETE /api/pages/{id} — unmount; dropping the session cancels its timer.
pub async fn close_page(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let removed = app.pages.lock().await.remove(&id);
    match removed {
        Some(_) => {
            info!(page = %id, "page closed");
            Ok(Json(serde_json::json!({ "status": "closed", "id": id })))
        }
        None => Err(AppError::not_found(format!("no page instance '{id}'"))),
    }
}

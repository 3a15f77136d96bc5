use axum::extract::{Path, State};
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/carousels
pub async fn list_carousels(State(app): State<AppState>) -> Json<serde_json::Value> {
    let list: Vec<_> = app
        .site
        .carousels()
        .iter()
        .map(|c| {
            serde_json::json!({
                "slug": c.slug,
                "period_ms": c.period_ms,
                "steps": c.len(),
            })
        })
        .collect();
    Json(serde_json::json!(list))
}

/// GET /api/carousels/{slug}
pub async fn get_carousel(
    State(app): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let carousel = app.site.carousel(&slug)?;
    Ok(Json(serde_json::json!(carousel)))
}

use axum::extract::{Path, State};
use axum::Json;
use eato_core::catalog::CatalogRecord;

use crate::error::AppError;
use crate::state::AppState;

fn record_json(r: &CatalogRecord) -> serde_json::Value {
    serde_json::json!({
        "slug": r.slug,
        "name": r.name,
        "layer": r.layer,
        "version": r.version,
        "description": r.description,
        "style": eato_core::style::resolve(&r.layer),
        "image_keyword": eato_core::keyword::resolve(&r.slug),
    })
}

/// GET /api/catalog — every system in content order.
pub async fn list_systems(State(app): State<AppState>) -> Json<serde_json::Value> {
    let list: Vec<_> = app.site.catalog().records().iter().map(record_json).collect();
    Json(serde_json::json!(list))
}

/// GET /api/catalog/{slug}
pub async fn get_system(
    State(app): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let record = app.site.catalog().get(&slug)?;
    let mut json = record_json(record);
    json["scheduled_position"] = serde_json::json!(app.site.schedule().position(&slug));
    Ok(Json(json))
}

use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/schedule — raw roadmap entries in launch order.
pub async fn get_schedule(State(app): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!(app.site.schedule().entries()))
}

/// GET /api/timeline — render-ready cards, one per schedule entry, in schedule order.
pub async fn get_timeline(
    State(app): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let cards = app.site.timeline()?;
    Ok(Json(serde_json::json!(cards)))
}

use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/site — site identity, roadmap headline numbers and content warnings.
pub async fn get_site(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let site = &app.site;
    let summary = site.summary()?;
    Ok(Json(serde_json::json!({
        "name": site.config().site.name,
        "description": site.config().site.description,
        "summary": summary,
        "carousels": site.carousels().iter().map(|c| c.slug.as_str()).collect::<Vec<_>>(),
        "warnings": site.validate(),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use eato_core::Site;
    use std::sync::Arc;

    #[tokio::test]
    async fn reports_builtin_summary() {
        let app = AppState::new("/tmp".into(), Arc::new(Site::builtin().unwrap()));
        let json = get_site(State(app)).await.unwrap().0;
        assert_eq!(json["name"], "EatoSystems");
        assert_eq!(json["summary"]["systems"], 12);
        assert_eq!(json["summary"]["first_launch"], "September 2025");
        assert_eq!(json["warnings"].as_array().unwrap().len(), 0);
    }
}

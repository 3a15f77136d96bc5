use axum::extract::Path;
use axum::Json;
use eato_core::types::Layer;

/// GET /api/layers/{layer}/style — style bundle for a layer tag.
///
/// Never fails: unknown tags resolve to the default layer and report
/// `known: false`.
pub async fn get_layer_style(Path(layer): Path<String>) -> Json<serde_json::Value> {
    let resolved = Layer::resolve(&layer);
    Json(serde_json::json!({
        "layer": layer,
        "known": Layer::is_known(&layer),
        "resolved": resolved,
        "keyword": resolved.keyword(),
        "style": resolved.style(),
    }))
}

/// GET /api/layers — every layer with its style bundle.
pub async fn list_layers() -> Json<serde_json::Value> {
    let list: Vec<_> = Layer::all()
        .iter()
        .map(|&l| {
            serde_json::json!({
                "layer": l,
                "keyword": l.keyword(),
                "style": l.style(),
            })
        })
        .collect();
    Json(serde_json::json!(list))
}

use axum::extract::Query;
use axum::http::header;
use axum::response::IntoResponse;

use crate::error::AppError;

const MAX_DIMENSION: u32 = 4096;

#[derive(serde::Deserialize)]
pub struct PlaceholderParams {
    pub height: Option<u32>,
    pub width: Option<u32>,
    #[serde(default)]
    pub text: String,
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_svg(width: u32, height: u32, text: &str) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}"><rect width="100%" height="100%" fill="#e5e7eb"/><text x="50%" y="50%" dominant-baseline="middle" text-anchor="middle" font-family="sans-serif" font-size="16" fill="#6b7280">{}</text></svg>"##,
        escape_xml(text)
    )
}

/// GET /placeholder.svg?height&width&text — stand-in for a missing system image.
pub async fn placeholder(
    Query(params): Query<PlaceholderParams>,
) -> Result<impl IntoResponse, AppError> {
    let width = params.width.unwrap_or(400);
    let height = params.height.unwrap_or(192);
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(AppError::bad_request(format!(
            "placeholder size {width}x{height} must be within 1..={MAX_DIMENSION}"
        )));
    }
    Ok((
        [(header::CONTENT_TYPE, "image/svg+xml")],
        render_svg(width, height, &params.text),
    ))
}

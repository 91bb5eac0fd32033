//! Generated placeholder image for pets without a photo.

use axum::{
    extract::Path,
    http::header,
    response::{IntoResponse, Response},
};

const DEFAULT_DIMENSION: u32 = 300;
const MAX_DIMENSION: u32 = 4000;

/// Parse the leading digit run of a path dimension ("400px" is 400).
/// No digits or zero falls back to the default.
fn dimension(raw: &str) -> u32 {
    let raw = raw.trim_start();
    let digits = &raw[..raw.find(|c: char| !c.is_ascii_digit()).unwrap_or(raw.len())];
    if digits.is_empty() {
        return DEFAULT_DIMENSION;
    }
    match digits.parse::<u32>() {
        Ok(0) => DEFAULT_DIMENSION,
        Ok(value) => value.min(MAX_DIMENSION),
        Err(_) => MAX_DIMENSION,
    }
}

pub fn render_placeholder(width: u32, height: u32) -> String {
    let font_size = (width.min(height) / 10).clamp(10, 48);
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><rect width="100%" height="100%" fill="#e5e7eb"/><text x="50%" y="50%" dominant-baseline="middle" text-anchor="middle" font-family="sans-serif" font-size="{f}" fill="#6b7280">Image unavailable</text></svg>"##,
        w = width,
        h = height,
        f = font_size
    )
}

pub async fn placeholder_image(Path((width, height)): Path<(String, String)>) -> Response {
    let svg = render_placeholder(dimension(&width), dimension(&height));
    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        svg,
    )
        .into_response()
}

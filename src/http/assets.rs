//! Static files served verbatim from the static directory.
//!
//! Only the paths in `STATIC_ASSETS` are exposed; nothing else under the
//! directory is reachable.

use axum::Extension;
use axum::http::{StatusCode, Uri, header};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Request path -> file path relative to the static directory.
pub const STATIC_ASSETS: &[(&str, &str)] = &[
    ("/", "index.html"),
    ("/style.css", "style.css"),
    ("/images/alvord.jpg", "images/alvord.jpg"),
    ("/images/alvord_bikes.jpg", "images/alvord_bikes.jpg"),
    ("/images/alvord_bushes.jpg", "images/alvord_bushes.jpg"),
    ("/images/alvord_sunset.jpg", "images/alvord_sunset.jpg"),
    ("/images/alvord_sunset2.jpeg", "images/alvord_sunset2.jpeg"),
    ("/images/alvord3.jpg", "images/alvord3.jpg"),
    ("/images/alvord4.jpg", "images/alvord4.jpg"),
];

pub struct StaticAssets {
    root: PathBuf,
}

impl StaticAssets {
    pub fn new(root: impl Into<PathBuf>) -> Arc<Self> {
        Arc::new(Self { root: root.into() })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing `request_path`, if it is one of the served assets.
    pub fn resolve(&self, request_path: &str) -> Option<PathBuf> {
        STATIC_ASSETS
            .iter()
            .find(|(route, _)| *route == request_path)
            .map(|(_, file)| self.root.join(file))
    }
}

pub fn content_type(file: &Path) -> &'static str {
    match file.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}

pub async fn handle_asset(
    Extension(assets): Extension<Arc<StaticAssets>>,
    uri: Uri,
) -> Result<([(header::HeaderName, &'static str); 1], Vec<u8>), StatusCode> {
    let file = assets.resolve(uri.path()).ok_or(StatusCode::NOT_FOUND)?;

    match tokio::fs::read(&file).await {
        Ok(bytes) => Ok(([(header::CONTENT_TYPE, content_type(&file))], bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("Static asset missing: {}", file.display());
            Err(StatusCode::NOT_FOUND)
        }
        Err(e) => {
            tracing::error!("Failed to read static asset {}: {}", file.display(), e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

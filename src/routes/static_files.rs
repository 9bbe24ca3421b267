//! Static asset serving
//!
//! Assets are only ever read from below the configured asset root: relative
//! paths with `..`, absolute paths and symlinks leading outside the root are
//! all answered with a 404.

use std::path::{Component, Path, PathBuf};

use actix_web::{web, HttpResponse};
use tokio::fs;

/// Directory that `/static/{path}` is served from
#[derive(Debug, Clone)]
pub struct StaticRoot(pub PathBuf);

/// Static asset handler
#[tracing::instrument(name = "Serving a static asset", skip(static_root))]
pub async fn static_files(
    path: web::Path<String>,
    static_root: web::Data<StaticRoot>,
) -> HttpResponse {
    match load_asset(&static_root.0, &path).await {
        Some((content, content_type)) => HttpResponse::Ok().content_type(content_type).body(content),
        None => HttpResponse::NotFound().finish(),
    }
}

/// Load an asset and guess its content type from the extension
pub async fn load_asset(static_dir: &Path, requested: &str) -> Option<(Vec<u8>, String)> {
    let relative = Path::new(requested);
    if !relative
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
    {
        tracing::warn!("Path traversal attempt blocked: {requested}");
        return None;
    }

    let root = match fs::canonicalize(static_dir).await {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(
                "Static directory not found or inaccessible '{}': {e}",
                static_dir.display()
            );
            return None;
        }
    };

    // A missing file is an ordinary 404
    let target = fs::canonicalize(root.join(relative)).await.ok()?;
    if !target.starts_with(&root) {
        tracing::warn!(
            "Path traversal attempt blocked: {requested} -> {}",
            target.display()
        );
        return None;
    }
    if !fs::metadata(&target).await.ok()?.is_file() {
        return None;
    }

    let content = match fs::read(&target).await {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to read file '{}': {e}", target.display());
            return None;
        }
    };
    let content_type = mime_guess::from_path(&target).first_or_octet_stream();

    Some((content, content_type.to_string()))
}

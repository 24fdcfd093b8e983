//! Static asset serving
//!
//! Serves the entry document and the page's assets from the configured
//! directory, with traversal protection and ETag revalidation.

use crate::config::RoutesConfig;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve the asset named by the request path, or 404.
///
/// The root path resolves to the configured index file, which is the
/// entry document of the search page.
pub async fn serve(ctx: &RequestContext<'_>, routes: &RoutesConfig) -> Response<Full<Bytes>> {
    match load_asset(&routes.static_dir, ctx.path, &routes.index_file).await {
        Some((content, content_type)) => respond_with_asset(ctx, &content, content_type),
        None => http::build_404_response(),
    }
}

/// Load an asset from the public directory.
///
/// Returns the file bytes and content type, or `None` for anything that
/// does not resolve to a real file inside the directory.
async fn load_asset(
    static_dir: &str,
    path: &str,
    index_file: &str,
) -> Option<(Vec<u8>, &'static str)> {
    // Remove leading slash and prevent directory traversal
    let clean_path = path.trim_start_matches('/').replace("..", "");
    let mut file_path = Path::new(static_dir).join(&clean_path);

    let static_dir_canonical = match Path::new(static_dir).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Asset directory not found or inaccessible '{static_dir}': {e}"
            ));
            return None;
        }
    };

    // Directory requests (including the root) fall back to the index file
    if clean_path.is_empty() || clean_path.ends_with('/') || file_path.is_dir() {
        file_path = file_path.join(index_file);
    }

    // A missing file is an ordinary 404, not worth a warning
    let Ok(file_path_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_path_canonical.starts_with(&static_dir_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_path_canonical.display()
        ));
        return None;
    }

    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read asset '{}': {e}",
                file_path.display()
            ));
            return None;
        }
    };

    let content_type = mime::content_type_for(file_path.extension().and_then(|e| e.to_str()));
    Some((content, content_type))
}

/// Build the asset response, honoring `If-None-Match`.
fn respond_with_asset(
    ctx: &RequestContext<'_>,
    content: &[u8],
    content_type: &str,
) -> Response<Full<Bytes>> {
    let etag = cache::etag_for(content);
    if cache::revalidates(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag);
    }
    http::build_cached_response(content, content_type, &etag, ctx.is_head)
}

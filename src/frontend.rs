//! Static hosting of the pre-built single-page frontend.
//!
//! Every path the API router does not match falls through to the
//! frontend bundle directory. `index.html` doubles as the not-found
//! fallback so client-side routes resolve after a full page reload.

use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_status::SetStatus;

/// Returns the static-file service for the frontend bundle, or `None`
/// when the directory has no `index.html` — static hosting is then
/// disabled with a warning, never an error.
pub fn static_service(dist_dir: &Path) -> Option<ServeDir<SetStatus<ServeFile>>> {
    let index = dist_dir.join("index.html");
    if !index.is_file() {
        tracing::warn!(
            dir = %dist_dir.display(),
            "frontend build directory not found; static hosting disabled"
        );
        return None;
    }

    tracing::info!(dir = %dist_dir.display(), "serving frontend bundle");
    Some(ServeDir::new(dist_dir).not_found_service(ServeFile::new(index)))
}

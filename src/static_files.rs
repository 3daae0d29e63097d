use crate::responses::{bytes_response, text_response, ResultResp};
use mime::Mime;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

const INDEX: &str = "index.html";

fn content_type(path: &Path) -> Mime {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => mime::TEXT_HTML_UTF_8,
        Some("js") | Some("mjs") => mime::TEXT_JAVASCRIPT,
        Some("css") => mime::TEXT_CSS_UTF_8,
        Some("json") => mime::APPLICATION_JSON,
        Some("svg") => mime::IMAGE_SVG,
        Some("png") => mime::IMAGE_PNG,
        Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG,
        Some("gif") => mime::IMAGE_GIF,
        Some("txt") => mime::TEXT_PLAIN_UTF_8,
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}

/// Map a URL path onto a file under `root`. `None` for anything that would
/// step outside it.
fn resolve(root: &Path, url_path: &str) -> Option<PathBuf> {
    let relative = url_path.trim_start_matches('/');
    let relative = if relative.is_empty() { INDEX } else { relative };

    let mut path = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(path)
}

/// Serve a file from `root`; `/` is the index document.
pub fn serve(root: &Path, url_path: &str) -> ResultResp {
    let Some(path) = resolve(root, url_path) else {
        log::warn!("Refusing path outside static root: {url_path}");
        return text_response(404, "Not found");
    };

    match std::fs::read(&path) {
        Ok(bytes) => bytes_response(200, &content_type(&path), bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!("Static file not found: {}", path.display());
            text_response(404, "Not found")
        }
        Err(e) => {
            log::error!("Error serving {}: {e}", path.display());
            text_response(500, format!("Server Error: {:?}", e.kind()))
        }
    }
}

use std::path::{Component, Path, PathBuf};

/// Maps a request path onto a file under `root`. Unknown paths fall back to
/// `index.html` so client-side routes still load the app; paths that try to
/// leave `root` resolve to nothing.
pub fn resolve(root: &Path, url_path: &str) -> Option<PathBuf> {
    let relative = Path::new(url_path.trim_start_matches('/'));
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return None;
    }

    let candidate = root.join(relative);
    if candidate.is_file() {
        return Some(candidate);
    }

    let index = root.join("index.html");
    index.is_file().then_some(index)
}

pub fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("js") | Some("mjs") => "application/javascript",
        Some("css") => "text/css",
        Some("json") | Some("map") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        Some("wasm") => "application/wasm",
        Some("txt") | Some("c") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn bundle() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets/app.js"), "console.log(1)").unwrap();
        dir
    }

    #[test]
    fn test_existing_file() {
        let dir = bundle();
        assert_eq!(
            resolve(dir.path(), "/assets/app.js"),
            Some(dir.path().join("assets/app.js"))
        );
    }

    #[test]
    fn test_root_and_unknown_paths_fall_back_to_index() {
        let dir = bundle();
        let index = Some(dir.path().join("index.html"));
        assert_eq!(resolve(dir.path(), "/"), index);
        assert_eq!(resolve(dir.path(), "/results/42"), index);
    }

    #[test]
    fn test_traversal_is_rejected() {
        let dir = bundle();
        assert_eq!(resolve(dir.path(), "/../etc/passwd"), None);
        assert_eq!(resolve(dir.path(), "/assets/../../secret"), None);
    }

    #[test]
    fn test_no_index() {
        let dir = TempDir::new().unwrap();
        assert_eq!(resolve(dir.path(), "/anything"), None);
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type(Path::new("a/index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("app.js")), "application/javascript");
        assert_eq!(content_type(Path::new("blob")), "application/octet-stream");
    }
}

//! Content-type inference for resolved resources
//!
//! A total function over resource names: the extension is the last
//! dot-segment of the name (case-sensitive), and anything unrecognized,
//! including names with no dot at all, falls back to `text/html` so the
//! entry document and extension-less routes render as pages.

/// Infer the MIME type for a resource name
pub fn mime_type_for_path(path: &str) -> &'static str {
    let extension = path.rsplit('.').next().unwrap_or("");

    match extension {
        "css" => "text/css",
        "js" => "text/javascript",
        "json" => "application/json",
        "gif" => "image/gif",
        "png" => "image/png",
        "eot" => "application/vnd.ms-fontobject",
        "woff" => "application/font-woff",
        "woff2" => "application/font-woff2",
        "otf" => "application/font-sfnt",
        "ttf" => "application/font-sfnt",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        _ => "text/html",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mime_type_table() {
        assert_eq!(mime_type_for_path("style.css"), "text/css");
        assert_eq!(mime_type_for_path("app.js"), "text/javascript");
        assert_eq!(mime_type_for_path("swagger.json"), "application/json");
        assert_eq!(mime_type_for_path("spinner.gif"), "image/gif");
        assert_eq!(mime_type_for_path("logo.png"), "image/png");
        assert_eq!(mime_type_for_path("font.eot"), "application/vnd.ms-fontobject");
        assert_eq!(mime_type_for_path("font.woff"), "application/font-woff");
        assert_eq!(mime_type_for_path("font.woff2"), "application/font-woff2");
        assert_eq!(mime_type_for_path("font.otf"), "application/font-sfnt");
        assert_eq!(mime_type_for_path("font.ttf"), "application/font-sfnt");
        assert_eq!(mime_type_for_path("logo.svg"), "image/svg+xml");
        assert_eq!(mime_type_for_path("icon.ico"), "image/x-icon");
    }

    #[test]
    fn test_unrecognized_extension_falls_back_to_html() {
        assert_eq!(mime_type_for_path("index.html"), "text/html");
        assert_eq!(mime_type_for_path("readme.txt"), "text/html");
        assert_eq!(mime_type_for_path("no-extension"), "text/html");
        assert_eq!(mime_type_for_path(""), "text/html");
    }

    #[test]
    fn test_last_dot_segment_wins() {
        assert_eq!(mime_type_for_path("bundle.min.js"), "text/javascript");
        assert_eq!(mime_type_for_path("style.css.map"), "text/html");
        assert_eq!(mime_type_for_path("v1.2/logo.png"), "image/png");
    }

    #[test]
    fn test_mapping_is_case_sensitive() {
        assert_eq!(mime_type_for_path("STYLE.CSS"), "text/html");
        assert_eq!(mime_type_for_path("logo.PNG"), "text/html");
    }

    const KNOWN: &[&str] = &[
        "css", "js", "json", "gif", "png", "eot", "woff", "woff2", "otf", "ttf", "svg", "ico",
    ];

    proptest! {
        // Totality: every input maps to some MIME type, and anything
        // outside the known extension set maps to text/html.
        #[test]
        fn prop_unknown_extensions_map_to_html(stem in "[a-z0-9/_-]{0,20}", ext in "[a-zA-Z0-9]{0,8}") {
            let path = format!("{stem}.{ext}");
            let mime = mime_type_for_path(&path);
            if KNOWN.contains(&ext.as_str()) {
                prop_assert_ne!(mime, "text/html");
            } else {
                prop_assert_eq!(mime, "text/html");
            }
        }

        // Determinism: repeated calls agree.
        #[test]
        fn prop_inference_is_deterministic(path in "[a-zA-Z0-9/._-]{0,40}") {
            prop_assert_eq!(mime_type_for_path(&path), mime_type_for_path(&path));
        }
    }
}

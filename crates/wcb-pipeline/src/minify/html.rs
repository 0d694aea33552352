use minify_html::Cfg;

/// Collapse whitespace in an HTML document or fragment.
///
/// Comments, closing tags and `<html>`/`<head>` opening tags are kept, so
/// templates behave the same after minification. Never fails: malformed
/// markup is passed through as well as the minifier can.
pub fn minify_html(source: &str) -> String {
    let mut cfg = Cfg::new();
    cfg.keep_comments = true;
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;

    let bytes = minify_html::minify(source.as_bytes(), &cfg);
    String::from_utf8_lossy(&bytes).into_owned()
}

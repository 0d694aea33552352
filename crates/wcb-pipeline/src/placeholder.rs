//! Placeholder rewriting.
//!
//! Templates reference their own public location through two markers:
//! `{{DEST}}` becomes the destination base URL and `{{INFIX}}` becomes the
//! variant infix (`""` or `".min"`). Replacement is purely textual, global
//! and case-sensitive. Any other `{{...}}` sequence is left alone.

/// Marker replaced by the destination base URL.
pub const DEST_MARKER: &str = "{{DEST}}";

/// Marker replaced by the variant infix.
pub const INFIX_MARKER: &str = "{{INFIX}}";

/// Replace every occurrence of both markers.
pub fn rewrite(text: &str, destination: &str, infix: &str) -> String {
    text.replace(DEST_MARKER, destination)
        .replace(INFIX_MARKER, infix)
}

/// Whether the text still contains either marker.
pub fn has_markers(text: &str) -> bool {
    text.contains(DEST_MARKER) || text.contains(INFIX_MARKER)
}

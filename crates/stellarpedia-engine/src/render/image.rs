use serde::Serialize;

use crate::error::MarkupError;

/// Prefix every image body starts with; its length is skipped to get the
/// file name fragment.
pub const IMAGE_PREFIX: &str = "stellarpedia_";
pub const IMAGE_EXTENSION: &str = ".png";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageData {
    pub url: String,
    pub subtitle: Option<String>,
}

/// Builds `<base><fragment>.png` from an image body.
///
/// The fragment is the body minus the first `IMAGE_PREFIX.len()` characters.
/// A body that does not carry the prefix is reported, and the same fixed
/// offset is still applied.
pub fn image_url(base: &str, body: &str, element: &str, diagnostics: &mut Vec<MarkupError>) -> String {
    let body = body.trim();
    let fragment = match body.strip_prefix(IMAGE_PREFIX) {
        Some(fragment) => fragment,
        None => {
            diagnostics.push(MarkupError::Syntax(element.to_string()));
            body.char_indices()
                .nth(IMAGE_PREFIX.chars().count())
                .map_or("", |(i, _)| &body[i..])
        }
    };
    format!("{base}{fragment}{IMAGE_EXTENSION}")
}

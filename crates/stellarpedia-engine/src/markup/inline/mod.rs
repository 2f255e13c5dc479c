//! # Inline Markup
//!
//! Single-pass scanning of element bodies, followed by rendering to HTML.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` tokens (text, highlight, line break, data and
//!   localization references, links)
//! - **`kinds`**: delimiter constants owned by each construct
//! - **`cursor`**: `Cursor` for byte-wise scanning
//! - **`parser`**: `parse_inline()` with its `try_parse_*` helpers
//! - **`render`**: `InlineProcessor`, which resolves references and writes HTML
//!
//! ## Precedence
//!
//! Constructs are tried in the order highlight, line break, data reference,
//! localization reference, link. The first `</dt>`, `</lc>` or `</link>`
//! closes its construct, and resolved values are inserted verbatim, so a
//! lookup result that happens to contain markup is never processed twice.
//! References inside a link target are resolved before the target is
//! classified as external or normalized.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod render;
pub mod types;

pub use parser::parse_inline;
pub use render::{InlineProcessor, wrap_color};
pub use types::InlineNode;

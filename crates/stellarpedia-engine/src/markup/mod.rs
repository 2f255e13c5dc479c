//! # Markup
//!
//! The Stellarpedia element syntax: `[type(param=value;…)]body`.
//!
//! - **`tag`**: element classification and tag/body splitting
//! - **`constructor`**: parameter lists and their typed readings
//! - **`inline`**: inline tags inside bodies

pub mod constructor;
pub mod inline;
pub mod tag;

pub use constructor::{Alignment, ImageParams, Param, RowParams, TextParams, parse_constructor};
pub use inline::{InlineNode, InlineProcessor, parse_inline, wrap_color};
pub use tag::{ElementKind, SplitElement, classify, split_element};

//! # Inline Kinds
//!
//! Every inline construct owns its delimiters here. The scanner reads these
//! constants and never hardcodes `<hl>` or `<link=` itself.

pub mod highlight;
pub mod link;
pub mod reference;

pub use highlight::{Highlight, LineBreak};
pub use link::Link;
pub use reference::{DataRef, LocRef};

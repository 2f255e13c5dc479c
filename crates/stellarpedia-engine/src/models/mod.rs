pub mod content;

pub use content::{Book, Chapter, ContentTree, Entry};

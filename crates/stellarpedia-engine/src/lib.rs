pub mod content;
pub mod error;
pub mod ids;
pub mod io;
pub mod lookup;
pub mod markup;
pub mod models;
pub mod navigation;
pub mod render;
pub mod service;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use content::{ContentCache, ContentRepository, InMemoryRepository, LoadResult};
pub use error::{ContentError, ContentLevel, MarkupError, NavigationError};
pub use ids::{EntryPath, IdNormalizer, KebabNormalizer};
pub use io::{JsonFileRepository, load_data, load_localization};
pub use lookup::{DataResolver, JsonDataResolver, Localizer, MapLocalizer, NoData};
pub use models::{Book, Chapter, ContentTree, Entry};
pub use navigation::{ContentNode, Navigator, Selection};
pub use render::{DEFAULT_ASSET_BASE_URL, ElementRenderer, ImageData, RenderedElement, RowData};
pub use service::{DEFAULT_ENTRY, Stellarpedia};

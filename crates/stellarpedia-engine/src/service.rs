//! The Stellarpedia service: content loading, element rendering and entry
//! selection behind one handle.
//!
//! Nothing here returns an error to the caller for bad content or a bad
//! lookup. Problems are logged and the caller gets `None`, a sentinel or the
//! raw element back. Loading is the exception, since a caller waiting on the
//! content needs to know it never arrived.

use std::sync::Arc;

use crate::{
    content::{ContentCache, ContentRepository, LoadResult},
    error::NavigationError,
    ids::EntryPath,
    models::{ContentTree, Entry},
    navigation::{ContentNode, Navigator, Selection, resolve},
    render::{ElementRenderer, RenderedElement},
};

/// Entry shown when nothing else has been asked for.
pub const DEFAULT_ENTRY: &str = "basic-rules/introduction/welcome";

pub struct Stellarpedia {
    cache: ContentCache,
    renderer: ElementRenderer,
    navigator: Navigator,
    default_entry: String,
}

impl Stellarpedia {
    pub fn new(repository: Arc<dyn ContentRepository>, renderer: ElementRenderer) -> Self {
        Self {
            cache: ContentCache::new(repository),
            renderer,
            navigator: Navigator::new(),
            default_entry: DEFAULT_ENTRY.to_string(),
        }
    }

    /// Overrides the entry [`Stellarpedia::select_default`] navigates to.
    pub fn with_default_entry(mut self, path: impl Into<String>) -> Self {
        self.default_entry = path.into();
        self
    }

    pub fn renderer(&self) -> &ElementRenderer {
        &self.renderer
    }

    /// Loads the content tree once; later and concurrent calls share it.
    pub async fn load(&self) -> LoadResult {
        self.cache.load().await
    }

    fn tree(&self) -> Result<Arc<ContentTree>, NavigationError> {
        self.cache.peek().ok_or(NavigationError::NotLoaded)
    }

    pub fn render_element(&self, element: &str) -> RenderedElement {
        self.renderer.render(element)
    }

    pub fn render_entry(&self, entry: &Entry) -> Vec<RenderedElement> {
        entry.elements.iter().map(|e| self.renderer.render(e)).collect()
    }

    /// Returns the book, chapter or entry addressed by the identifiers,
    /// normalizing them first.
    pub fn select(&self, book_id: &str, chapter_id: Option<&str>, entry_id: Option<&str>) -> Option<ContentNode> {
        let path = EntryPath::new(self.renderer.normalizer(), book_id, chapter_id, entry_id);
        self.lookup(&path)
    }

    fn lookup(&self, path: &EntryPath) -> Option<ContentNode> {
        let tree = match self.tree() {
            Ok(tree) => tree,
            Err(e) => {
                log::error!("{e}");
                return None;
            }
        };
        match resolve(&tree, path) {
            Ok(found) => Some(found.to_node()),
            Err(e) => {
                log::error!("{e}");
                None
            }
        }
    }

    /// Processed text of the entry's first header element.
    pub fn entry_header(&self, entry: &Entry) -> Option<String> {
        self.renderer
            .entry_header(entry)
            .inspect_err(|e| log::error!("{e}"))
            .ok()
    }

    pub fn current_selection(&self) -> &Selection {
        self.navigator.current_selection()
    }

    pub fn set_selected_entry(&mut self, book_id: &str, chapter_id: &str, entry_id: &str) -> Option<&Selection> {
        let path = EntryPath::new(
            self.renderer.normalizer(),
            book_id,
            Some(chapter_id),
            Some(entry_id),
        );
        self.select_path(path)
    }

    /// Follows the `data-target` of an internal link, e.g.
    /// `basic-rules+introduction+welcome`.
    pub fn follow_link(&mut self, target: &str) -> Option<&Selection> {
        match EntryPath::parse(self.renderer.normalizer(), target) {
            Ok(path) => self.select_path(path),
            Err(e) => {
                log::error!("Unable to set Stellarpedia's selected entry ({e}).");
                None
            }
        }
    }

    pub fn select_default(&mut self) -> Option<&Selection> {
        let target = self.default_entry.clone();
        self.follow_link(&target)
    }

    fn select_path(&mut self, path: EntryPath) -> Option<&Selection> {
        let tree = match self.tree() {
            Ok(tree) => tree,
            Err(e) => {
                log::error!("Unable to set Stellarpedia's selected entry ({e}).");
                return None;
            }
        };
        match self.navigator.set_selected_entry(&tree, &self.renderer, &path) {
            Ok(selection) => Some(selection),
            Err(e) => {
                log::error!("Unable to set Stellarpedia's selected entry ({e}).");
                None
            }
        }
    }
}

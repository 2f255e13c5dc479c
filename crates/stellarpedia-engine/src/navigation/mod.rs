//! # Navigation
//!
//! Identifier lookups against the content tree, and the current selection.
//! The selection is only ever replaced as a whole, so a failed navigation
//! leaves the previous one intact.

use serde::Serialize;

use crate::{
    error::{ContentLevel, NavigationError},
    ids::EntryPath,
    lookup::LOC_MISS_PREFIX,
    models::{Book, Chapter, ContentTree, Entry},
    render::ElementRenderer,
};

/// Separator between the parts of a breadcrumb.
pub const BREADCRUMB_SEPARATOR: &str = " > ";

/// The chain of nodes an [`EntryPath`] resolved through, down to the
/// deepest segment given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentRef<'t> {
    Book(&'t Book),
    Chapter {
        book: &'t Book,
        chapter: &'t Chapter,
    },
    Entry {
        book: &'t Book,
        chapter: &'t Chapter,
        entry: &'t Entry,
    },
}

impl ContentRef<'_> {
    /// Owned copy of the deepest node.
    pub fn to_node(self) -> ContentNode {
        match self {
            ContentRef::Book(b) => ContentNode::Book(b.clone()),
            ContentRef::Chapter { chapter, .. } => ContentNode::Chapter(chapter.clone()),
            ContentRef::Entry { entry, .. } => ContentNode::Entry(entry.clone()),
        }
    }
}

/// Owned counterpart of [`ContentRef`], handed out to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ContentNode {
    Book(Book),
    Chapter(Chapter),
    Entry(Entry),
}

/// Walks the tree one level per path segment, stopping at the deepest
/// segment given.
pub fn resolve<'t>(tree: &'t ContentTree, path: &EntryPath) -> Result<ContentRef<'t>, NavigationError> {
    let not_found = |level, path: String| NavigationError::NotFound { level, path };

    let book = tree
        .book(&path.book)
        .ok_or_else(|| not_found(ContentLevel::Book, path.book.clone()))?;
    let Some(chapter_id) = &path.chapter else {
        return Ok(ContentRef::Book(book));
    };

    let chapter = book
        .chapter(chapter_id)
        .ok_or_else(|| not_found(ContentLevel::Chapter, format!("{}/{chapter_id}", path.book)))?;
    let Some(entry_id) = &path.entry else {
        return Ok(ContentRef::Chapter { book, chapter });
    };

    chapter
        .entry(entry_id)
        .map(|entry| ContentRef::Entry { book, chapter, entry })
        .ok_or_else(|| not_found(ContentLevel::Entry, path.display_slashed()))
}

/// The currently selected entry together with its derived display strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub book_id: Option<String>,
    pub chapter_id: Option<String>,
    pub entry: Option<Entry>,
    pub header: Option<String>,
    pub breadcrumb: Option<String>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }

    /// Path of the selected entry, if any.
    pub fn path(&self) -> Option<EntryPath> {
        Some(EntryPath {
            book: self.book_id.clone()?,
            chapter: Some(self.chapter_id.clone()?),
            entry: Some(self.entry.as_ref()?.id.clone()),
        })
    }
}

/// Single writer of the [`Selection`].
#[derive(Debug, Default)]
pub struct Navigator {
    selection: Selection,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_selection(&self) -> &Selection {
        &self.selection
    }

    /// Selects the entry at `path`. The new selection is built in full
    /// before it replaces the old one; on error nothing changes.
    pub fn set_selected_entry(
        &mut self,
        tree: &ContentTree,
        renderer: &ElementRenderer,
        path: &EntryPath,
    ) -> Result<&Selection, NavigationError> {
        let selection = build_selection(tree, renderer, path)?;
        self.selection = selection;
        Ok(&self.selection)
    }
}

fn build_selection(
    tree: &ContentTree,
    renderer: &ElementRenderer,
    path: &EntryPath,
) -> Result<Selection, NavigationError> {
    if path.chapter.is_none() || path.entry.is_none() {
        return Err(NavigationError::InvalidPath(path.to_string()));
    }
    let ContentRef::Entry { book, chapter, entry } = resolve(tree, path)? else {
        return Err(NavigationError::InvalidPath(path.to_string()));
    };
    let header = renderer.entry_header(entry)?;

    let title = book_title(renderer, book);
    let breadcrumb = [title.as_str(), chapter.header.as_str(), header.as_str()].join(BREADCRUMB_SEPARATOR);

    Ok(Selection {
        book_id: Some(book.id.clone()),
        chapter_id: Some(chapter.id.clone()),
        entry: Some(entry.clone()),
        header: Some(header),
        breadcrumb: Some(breadcrumb),
    })
}

/// Localized book title, falling back to the book's own header and then to
/// its identifier.
fn book_title(renderer: &ElementRenderer, book: &Book) -> String {
    renderer
        .localizer()
        .get_value(&book.id, false)
        .filter(|title| !title.starts_with(LOC_MISS_PREFIX))
        .or_else(|| (!book.header.is_empty()).then(|| book.header.clone()))
        .unwrap_or_else(|| book.id.clone())
}

use std::fmt;

use heck::ToKebabCase;

use crate::error::NavigationError;

/// Separators that split an entry path into book, chapter and entry segments.
pub const PATH_SEPARATORS: [char; 2] = ['+', '/'];

/// Adjusts an identifier to match the serialized identifier schema.
pub trait IdNormalizer: Send + Sync {
    fn normalize(&self, id: &str) -> String;
}

/// Kebab-cases every path segment while keeping the path separators.
///
/// `"Basic-Rules"` becomes `"basic-rules"`, `"Basic Rules+Intro"` becomes
/// `"basic-rules+intro"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct KebabNormalizer;

impl IdNormalizer for KebabNormalizer {
    fn normalize(&self, id: &str) -> String {
        let mut out = String::with_capacity(id.len());
        let mut segment_start = 0;
        for (i, c) in id.char_indices() {
            if PATH_SEPARATORS.contains(&c) {
                out.push_str(&id[segment_start..i].to_kebab_case());
                out.push(c);
                segment_start = i + c.len_utf8();
            }
        }
        out.push_str(&id[segment_start..].to_kebab_case());
        out
    }
}

/// A normalized pointer into the content tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryPath {
    pub book: String,
    pub chapter: Option<String>,
    pub entry: Option<String>,
}

impl EntryPath {
    pub fn new(
        normalizer: &dyn IdNormalizer,
        book: &str,
        chapter: Option<&str>,
        entry: Option<&str>,
    ) -> Self {
        Self {
            book: normalizer.normalize(book),
            chapter: chapter.map(|c| normalizer.normalize(c)),
            entry: entry.map(|e| normalizer.normalize(e)),
        }
    }

    /// Parses `book+chapter+entry` or `book/chapter/entry`, with the chapter
    /// and entry segments optional.
    pub fn parse(normalizer: &dyn IdNormalizer, raw: &str) -> Result<Self, NavigationError> {
        let segments: Vec<&str> = raw.trim().split(PATH_SEPARATORS).collect();
        if segments.len() > 3 || segments.iter().any(|s| s.trim().is_empty()) {
            return Err(NavigationError::InvalidPath(raw.to_string()));
        }
        Ok(Self::new(
            normalizer,
            segments[0],
            segments.get(1).copied(),
            segments.get(2).copied(),
        ))
    }

    /// Slash-joined form used in log messages.
    pub fn display_slashed(&self) -> String {
        let mut out = self.book.clone();
        for segment in [&self.chapter, &self.entry].into_iter().flatten() {
            out.push('/');
            out.push_str(segment);
        }
        out
    }
}

impl fmt::Display for EntryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.book)?;
        for segment in [&self.chapter, &self.entry].into_iter().flatten() {
            write!(f, "+{segment}")?;
        }
        Ok(())
    }
}

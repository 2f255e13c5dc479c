use std::fmt;

use crate::error::MarkupError;

/// Element types known to the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Header,
    Separator,
    Spacer,
    Text,
    Image,
    Row,
    Missing,
}

impl ElementKind {
    /// Markers in match order. All are prefix matches; `[mis]` carries its
    /// closing bracket so it only matches the bare tag.
    pub const MARKERS: [(&'static str, ElementKind); 7] = [
        ("[hdr", ElementKind::Header),
        ("[spt", ElementKind::Separator),
        ("[spc", ElementKind::Spacer),
        ("[txt", ElementKind::Text),
        ("[img", ElementKind::Image),
        ("[row", ElementKind::Row),
        ("[mis]", ElementKind::Missing),
    ];

    pub fn tag(self) -> &'static str {
        match self {
            ElementKind::Header => "hdr",
            ElementKind::Separator => "spt",
            ElementKind::Spacer => "spc",
            ElementKind::Text => "txt",
            ElementKind::Image => "img",
            ElementKind::Row => "row",
            ElementKind::Missing => "mis",
        }
    }

    /// Whether elements of this kind carry a body after the tag.
    pub fn has_body(self) -> bool {
        !matches!(
            self,
            ElementKind::Separator | ElementKind::Spacer | ElementKind::Missing
        )
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Classifies a raw element by its leading tag marker.
pub fn classify(element: &str) -> Result<ElementKind, MarkupError> {
    ElementKind::MARKERS
        .iter()
        .find(|(marker, _)| element.starts_with(marker))
        .map(|(_, kind)| *kind)
        .ok_or_else(|| MarkupError::UnknownTag(element.to_string()))
}

/// A raw element split at its first `]`.
///
/// `[row(header=true)]a||b` splits into the tag prefix `[row(header=true)`
/// and the body `a||b`. Any further `]` belongs to the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitElement<'a> {
    pub tag: &'a str,
    pub body: &'a str,
}

pub fn split_element(element: &str) -> Result<SplitElement<'_>, MarkupError> {
    element
        .split_once(']')
        .map(|(tag, body)| SplitElement { tag, body })
        .ok_or_else(|| MarkupError::Syntax(element.to_string()))
}

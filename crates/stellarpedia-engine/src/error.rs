use std::fmt;

/// Problems found while reading a single markup element.
///
/// None of these abort rendering: the renderer logs them and keeps going with
/// whatever part of the element is still usable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
    #[error("Syntax error in Stellarpedia element: {0}")]
    Syntax(String),
    #[error("Type of Stellarpedia element not recognizable: {0}")]
    UnknownTag(String),
    #[error("Parameter has invalid syntax: {0}")]
    ParameterSyntax(String),
    #[error("Unknown parameter '{name}' in Stellarpedia element: {element}")]
    UnknownParameter { name: String, element: String },
    #[error("Invalid argument '{argument}' for parameter '{parameter}' in Stellarpedia element: {element}")]
    InvalidArgument {
        parameter: String,
        argument: String,
        element: String,
    },
    #[error("Unable to resolve data path: {0}")]
    DataMiss(String),
}

impl MarkupError {
    /// Data misses substitute a sentinel and are reported at a lower severity.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, MarkupError::DataMiss(_))
    }

    pub(crate) fn log(&self) {
        if self.is_fatal() {
            log::error!("{self}");
        } else {
            log::warn!("{self}");
        }
    }
}

/// The level of the content tree at which a lookup failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentLevel {
    Book,
    Chapter,
    Entry,
}

impl fmt::Display for ContentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentLevel::Book => "book",
            ContentLevel::Chapter => "chapter",
            ContentLevel::Entry => "entry",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("Stellarpedia {level} {path} does not exist.")]
    NotFound { level: ContentLevel, path: String },
    #[error("Stellarpedia entry {0} does not have a header element.")]
    MissingHeader(String),
    #[error("Stellarpedia content has not been loaded yet.")]
    NotLoaded,
    #[error("Invalid Stellarpedia entry path: {0}")]
    InvalidPath(String),
}

/// Failure to load the content tree.
///
/// Cloneable so a single failed load can be handed to every caller that was
/// waiting on it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("Stellarpedia content not found at {0}")]
    NotFound(String),
    #[error("Unable to read Stellarpedia content: {0}")]
    Io(String),
    #[error("Malformed Stellarpedia content: {0}")]
    Parse(String),
}

impl From<std::io::Error> for ContentError {
    fn from(err: std::io::Error) -> Self {
        ContentError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        ContentError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_level() {
        let err = NavigationError::NotFound {
            level: ContentLevel::Chapter,
            path: "basic-rules/missing".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Stellarpedia chapter basic-rules/missing does not exist."
        );
    }

    #[test]
    fn data_miss_is_not_fatal() {
        assert!(!MarkupError::DataMiss("a.b".into()).is_fatal());
        assert!(MarkupError::Syntax("[txt".into()).is_fatal());
    }
}

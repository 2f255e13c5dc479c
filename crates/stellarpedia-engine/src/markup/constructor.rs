//! Constructor parsing: the parenthesized parameter list attached to a tag,
//! as in `[row(header=true;layout=1,2;alignment=l,r)]`.
//!
//! Parsing is all-or-partial. Every malformed parameter or sub-value is pushed
//! onto the caller's diagnostics and skipped; everything valid is kept.

use serde::Serialize;

use crate::error::MarkupError;

pub struct Constructor;

impl Constructor {
    pub const OPEN: char = '(';
    pub const CLOSE: char = ')';
    pub const PARAM_SEPARATOR: char = ';';
    pub const ASSIGN: char = '=';
    pub const LIST_SEPARATOR: char = ',';
}

/// A syntactically valid `name=value` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

impl<'a> Param<'a> {
    fn unknown(&self, element: &str) -> MarkupError {
        MarkupError::UnknownParameter {
            name: self.name.to_string(),
            element: element.to_string(),
        }
    }

    fn invalid(&self, argument: &str, element: &str) -> MarkupError {
        MarkupError::InvalidArgument {
            parameter: self.name.to_string(),
            argument: argument.to_string(),
            element: element.to_string(),
        }
    }

    fn list(self) -> impl Iterator<Item = &'a str> {
        self.value.split(Constructor::LIST_SEPARATOR).map(str::trim)
    }

    fn flag(&self, element: &str, diagnostics: &mut Vec<MarkupError>) -> bool {
        match self.value {
            "true" => true,
            "false" => false,
            other => {
                diagnostics.push(self.invalid(other, element));
                false
            }
        }
    }
}

/// Parses the parameters of a tag prefix such as `[txt(col=red;foo=bar)`.
///
/// A tag without `(` has no parameters. A missing `)` is reported but the
/// parameters that follow the `(` are still read.
pub fn parse_constructor<'a>(tag: &'a str, diagnostics: &mut Vec<MarkupError>) -> Vec<Param<'a>> {
    let Some((_, rest)) = tag.split_once(Constructor::OPEN) else {
        return Vec::new();
    };
    let inner = match rest.rfind(Constructor::CLOSE) {
        Some(end) => &rest[..end],
        None => {
            diagnostics.push(MarkupError::Syntax(tag.to_string()));
            rest
        }
    };

    inner
        .split(Constructor::PARAM_SEPARATOR)
        .filter(|raw| !raw.trim().is_empty())
        .filter_map(|raw| match raw.split_once(Constructor::ASSIGN) {
            Some((name, value))
                if !name.trim().is_empty() && !value.contains(Constructor::ASSIGN) =>
            {
                Some(Param {
                    name: name.trim(),
                    value: value.trim(),
                })
            }
            _ => {
                diagnostics.push(MarkupError::ParameterSyntax(raw.to_string()));
                None
            }
        })
        .collect()
}

/// Parameters accepted by `txt` and `hdr` elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextParams {
    pub color: Option<String>,
}

impl TextParams {
    pub fn from_params(params: &[Param<'_>], element: &str, diagnostics: &mut Vec<MarkupError>) -> Self {
        let mut out = Self::default();
        for param in params {
            match param.name {
                "col" => out.color = Some(param.value.to_string()),
                _ => diagnostics.push(param.unknown(element)),
            }
        }
        out
    }
}

/// Parameters accepted by `img` elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageParams {
    pub subtitle: Option<String>,
}

impl ImageParams {
    pub fn from_params(params: &[Param<'_>], element: &str, diagnostics: &mut Vec<MarkupError>) -> Self {
        let mut out = Self::default();
        for param in params {
            match param.name {
                "subtitle" => out.subtitle = Some(param.value.to_string()),
                _ => diagnostics.push(param.unknown(element)),
            }
        }
        out
    }
}

/// Horizontal alignment of a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "l" => Some(Alignment::Left),
            "c" => Some(Alignment::Center),
            "r" => Some(Alignment::Right),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Alignment::Left => "l",
            Alignment::Center => "c",
            Alignment::Right => "r",
        }
    }
}

/// Parameters accepted by `row` elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowParams {
    pub is_header: bool,
    pub is_last: bool,
    pub layout: Vec<i32>,
    pub alignment: Vec<Alignment>,
}

impl RowParams {
    pub fn from_params(params: &[Param<'_>], element: &str, diagnostics: &mut Vec<MarkupError>) -> Self {
        let mut out = Self::default();
        for param in params {
            match param.name {
                "header" => out.is_header = param.flag(element, diagnostics),
                "last" => out.is_last = param.flag(element, diagnostics),
                "layout" => {
                    for arg in param.list() {
                        match arg.parse::<i32>() {
                            Ok(width) => out.layout.push(width),
                            Err(_) => diagnostics.push(param.invalid(arg, element)),
                        }
                    }
                }
                "alignment" => {
                    for arg in param.list() {
                        match Alignment::from_token(arg) {
                            Some(alignment) => out.alignment.push(alignment),
                            None => diagnostics.push(param.invalid(arg, element)),
                        }
                    }
                }
                _ => diagnostics.push(param.unknown(element)),
            }
        }
        out
    }
}

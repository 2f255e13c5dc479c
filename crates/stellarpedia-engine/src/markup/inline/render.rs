use html_escape::encode_single_quoted_attribute;

use crate::{
    error::MarkupError,
    ids::IdNormalizer,
    lookup::{DATA_MISS_PREFIX, DataResolver, Localizer},
    markup::constructor::TextParams,
};

use super::{
    kinds::{Highlight, LineBreak, Link},
    parser::parse_inline,
    types::InlineNode,
};

/// Turns Stellarpedia inline tags into HTML.
///
/// Resolved values (data, localized strings) are inserted as-is and never
/// scanned again.
pub struct InlineProcessor<'c> {
    pub localizer: &'c dyn Localizer,
    pub data: &'c dyn DataResolver,
    pub normalizer: &'c dyn IdNormalizer,
}

impl InlineProcessor<'_> {
    /// Processes a body and, when a colour is set, wraps the final text in a
    /// coloured paragraph.
    pub fn process(&self, body: &str, params: &TextParams, diagnostics: &mut Vec<MarkupError>) -> String {
        let mut out = String::with_capacity(body.len());
        self.render_nodes(&parse_inline(body), &mut out, diagnostics);
        wrap_color(out, params)
    }

    fn render_nodes(&self, nodes: &[InlineNode<'_>], out: &mut String, diagnostics: &mut Vec<MarkupError>) {
        for node in nodes {
            match node {
                InlineNode::Text(text) => out.push_str(text),
                InlineNode::HighlightStart => out.push_str(Highlight::HTML_OPEN),
                InlineNode::HighlightEnd => out.push_str(Highlight::HTML_CLOSE),
                InlineNode::LineBreak => out.push_str(LineBreak::HTML),
                InlineNode::Data(path) => match self.data.data_from_path(path) {
                    Some(value) => out.push_str(&value),
                    None => {
                        diagnostics.push(MarkupError::DataMiss(path.to_string()));
                        out.push_str(DATA_MISS_PREFIX);
                        out.push_str(path);
                    }
                },
                InlineNode::Loc(key) => {
                    if let Some(value) = self.localizer.get_value(key, false) {
                        out.push_str(&value);
                    }
                }
                InlineNode::Link { path, text } => self.render_link(path, text, out, diagnostics),
            }
        }
    }

    fn render_link(
        &self,
        path: &str,
        text: &[InlineNode<'_>],
        out: &mut String,
        diagnostics: &mut Vec<MarkupError>,
    ) {
        let mut label = String::new();
        self.render_nodes(text, &mut label, diagnostics);
        let path = self.resolve_target(path, diagnostics);

        if Link::is_external(&path) {
            out.push_str(&format!(
                "<a href='{}'>{label}</a>",
                encode_single_quoted_attribute(&path)
            ));
        } else {
            let target = self.normalizer.normalize(path.replace(Link::QUOTES, "").trim());
            out.push_str(&format!(
                "<button type='button' class='stellarpedia-link' data-target='{}'>{label}</button>",
                encode_single_quoted_attribute(&target)
            ));
        }
    }

    /// Substitutes data and localization references inside a link target.
    /// Any other markup in the target is dropped.
    fn resolve_target(&self, path: &str, diagnostics: &mut Vec<MarkupError>) -> String {
        let nodes: Vec<_> = parse_inline(path)
            .into_iter()
            .filter(|node| {
                matches!(
                    node,
                    InlineNode::Text(_) | InlineNode::Data(_) | InlineNode::Loc(_)
                )
            })
            .collect();
        let mut resolved = String::with_capacity(path.len());
        self.render_nodes(&nodes, &mut resolved, diagnostics);
        resolved
    }
}

/// Wraps already processed text in a paragraph carrying the `col` colour.
pub fn wrap_color(text: String, params: &TextParams) -> String {
    match &params.color {
        Some(color) => format!(
            "<p style='color:{}'>{text}</p>",
            encode_single_quoted_attribute(color)
        ),
        None => text,
    }
}

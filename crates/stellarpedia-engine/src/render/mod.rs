//! # Element Rendering
//!
//! Turns one raw element string into a [`RenderedElement`]. Rendering is a
//! pure function of the element and the injected lookups; every problem is
//! collected as a [`MarkupError`] and the best available output is returned.

pub mod image;
pub mod row;

use std::sync::Arc;

use serde::Serialize;

use crate::{
    error::{MarkupError, NavigationError},
    ids::IdNormalizer,
    lookup::{DataResolver, LOC_MISS_PREFIX, Localizer},
    markup::{
        ElementKind, ImageParams, InlineProcessor, RowParams, SplitElement, TextParams, classify,
        parse_constructor, split_element, wrap_color,
    },
    models::Entry,
};

pub use image::{IMAGE_EXTENSION, IMAGE_PREFIX, ImageData, image_url};
pub use row::RowData;

/// Asset path images are served from unless configured otherwise.
pub const DEFAULT_ASSET_BASE_URL: &str = "/assets/stellarpedia/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum RenderedElement {
    Header(String),
    Text(String),
    Image(ImageData),
    Row(RowData),
    Separator,
    Spacer,
    /// Placeholder for content that has not been written yet.
    Missing,
    /// An element that could not be rendered, returned exactly as given.
    Raw(String),
}

impl RenderedElement {
    /// String form for text-like elements; `Missing` renders as the empty
    /// string and images as their URL.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RenderedElement::Header(s) | RenderedElement::Text(s) | RenderedElement::Raw(s) => Some(s),
            RenderedElement::Image(image) => Some(&image.url),
            RenderedElement::Missing => Some(""),
            RenderedElement::Separator | RenderedElement::Spacer | RenderedElement::Row(_) => None,
        }
    }
}

pub struct ElementRenderer {
    localizer: Arc<dyn Localizer>,
    data: Arc<dyn DataResolver>,
    normalizer: Arc<dyn IdNormalizer>,
    asset_base_url: String,
}

impl ElementRenderer {
    pub fn new(
        localizer: Arc<dyn Localizer>,
        data: Arc<dyn DataResolver>,
        normalizer: Arc<dyn IdNormalizer>,
        asset_base_url: impl Into<String>,
    ) -> Self {
        Self {
            localizer,
            data,
            normalizer,
            asset_base_url: asset_base_url.into(),
        }
    }

    pub fn localizer(&self) -> &dyn Localizer {
        self.localizer.as_ref()
    }

    pub fn normalizer(&self) -> &dyn IdNormalizer {
        self.normalizer.as_ref()
    }

    fn inline(&self) -> InlineProcessor<'_> {
        InlineProcessor {
            localizer: self.localizer.as_ref(),
            data: self.data.as_ref(),
            normalizer: self.normalizer.as_ref(),
        }
    }

    /// Renders an element, logging any problems found along the way.
    pub fn render(&self, element: &str) -> RenderedElement {
        let (rendered, diagnostics) = self.render_with_diagnostics(element);
        for diagnostic in &diagnostics {
            diagnostic.log();
        }
        rendered
    }

    /// Renders an element and hands back the problems instead of logging them.
    pub fn render_with_diagnostics(&self, element: &str) -> (RenderedElement, Vec<MarkupError>) {
        let mut diagnostics = vec![];
        let rendered = self.render_into(element, &mut diagnostics);
        (rendered, diagnostics)
    }

    fn render_into(&self, element: &str, diagnostics: &mut Vec<MarkupError>) -> RenderedElement {
        let kind = match classify(element) {
            Ok(kind) => kind,
            Err(e) => {
                diagnostics.push(e);
                return RenderedElement::Raw(element.to_string());
            }
        };

        match kind {
            ElementKind::Separator => RenderedElement::Separator,
            ElementKind::Spacer => RenderedElement::Spacer,
            ElementKind::Missing => RenderedElement::Missing,
            ElementKind::Header | ElementKind::Text | ElementKind::Image | ElementKind::Row => {
                match split_element(element) {
                    Ok(split) => self.render_body(kind, element, split, diagnostics),
                    Err(e) => {
                        diagnostics.push(e);
                        RenderedElement::Raw(element.to_string())
                    }
                }
            }
        }
    }

    fn render_body(
        &self,
        kind: ElementKind,
        element: &str,
        split: SplitElement<'_>,
        diagnostics: &mut Vec<MarkupError>,
    ) -> RenderedElement {
        let params = parse_constructor(split.tag, diagnostics);
        match kind {
            ElementKind::Header => {
                let params = TextParams::from_params(&params, element, diagnostics);
                RenderedElement::Header(self.header_text(split.body, &params, diagnostics))
            }
            ElementKind::Image => {
                let params = ImageParams::from_params(&params, element, diagnostics);
                RenderedElement::Image(ImageData {
                    url: image_url(&self.asset_base_url, split.body, element, diagnostics),
                    subtitle: params.subtitle,
                })
            }
            ElementKind::Row => {
                let params = RowParams::from_params(&params, element, diagnostics);
                RenderedElement::Row(RowData::new(params, split.body))
            }
            _ => {
                let params = TextParams::from_params(&params, element, diagnostics);
                RenderedElement::Text(self.inline().process(split.body, &params, diagnostics))
            }
        }
    }

    /// A header body that is itself a localization key renders as the
    /// localized value; anything else goes through inline processing.
    fn header_text(&self, body: &str, params: &TextParams, diagnostics: &mut Vec<MarkupError>) -> String {
        match self
            .localizer
            .get_value(body.trim(), true)
            .filter(|value| !value.starts_with(LOC_MISS_PREFIX))
        {
            Some(localized) => wrap_color(localized, params),
            None => self.inline().process(body, params, diagnostics),
        }
    }

    /// Returns the processed text of the entry's first header element.
    pub fn entry_header(&self, entry: &Entry) -> Result<String, NavigationError> {
        entry
            .elements
            .iter()
            .find(|element| classify(element) == Ok(ElementKind::Header))
            .and_then(|element| match self.render(element) {
                RenderedElement::Header(text) => Some(text),
                _ => None,
            })
            .ok_or_else(|| NavigationError::MissingHeader(entry.id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        markup::Alignment,
        tests::{MissLocalizer, renderer_with_localizer, test_renderer},
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn render(element: &str) -> RenderedElement {
        test_renderer().render(element)
    }

    #[rstest]
    #[case("[txt]Hello", "Hello")]
    #[case("[txt]", "")]
    #[case("[txt]a]b", "a]b")]
    #[case("[txt(col=blue)]Hi", "<p style='color:blue'>Hi</p>")]
    fn text_strips_the_tag(#[case] element: &str, #[case] expected: &str) {
        let rendered = render(element);
        assert_eq!(rendered, RenderedElement::Text(expected.to_string()));
        assert!(!rendered.as_text().unwrap().contains("[txt"));
    }

    #[test]
    fn text_never_uses_whole_body_localization() {
        assert_eq!(
            render("[txt]basic-rules"),
            RenderedElement::Text("basic-rules".to_string())
        );
    }

    #[test]
    fn header_prefers_whole_body_localization() {
        assert_eq!(
            render("[hdr] basic-rules "),
            RenderedElement::Header("Basic Rules".to_string())
        );
    }

    #[test]
    fn header_falls_back_to_inline_processing() {
        assert_eq!(
            render("[hdr]Welcome <hl>aboard</hl>"),
            RenderedElement::Header(
                "Welcome <b><span class='highlighted'>aboard</span></b>".to_string()
            )
        );
    }

    #[test]
    fn header_ignores_localization_miss_sentinel() {
        let renderer = renderer_with_localizer(Arc::new(MissLocalizer));
        let (rendered, diagnostics) = renderer.render_with_diagnostics("[hdr]Some <hl>x</hl>");
        assert_eq!(
            rendered,
            RenderedElement::Header("Some <b><span class='highlighted'>x</span></b>".to_string())
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn colored_localized_header() {
        assert_eq!(
            render("[hdr(col=gold)]basic-rules"),
            RenderedElement::Header("<p style='color:gold'>Basic Rules</p>".to_string())
        );
    }

    #[test]
    fn image_builds_url_and_subtitle() {
        assert_eq!(
            render("[img(subtitle=The Sol system)]stellarpedia_sol"),
            RenderedElement::Image(ImageData {
                url: "/assets/stellarpedia/sol.png".to_string(),
                subtitle: Some("The Sol system".to_string()),
            })
        );
    }

    #[test]
    fn row_with_layout_and_alignment() {
        let (rendered, diagnostics) = test_renderer()
            .render_with_diagnostics("[row(header=true;layout=1,2,3;alignment=l,z)]A||B||C");
        assert_eq!(
            rendered,
            RenderedElement::Row(RowData {
                is_header: true,
                is_last: false,
                layout: vec![1, 2, 3],
                alignment: vec![Alignment::Left],
                content: vec!["A".into(), "B".into(), "C".into()],
            })
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(matches!(
            &diagnostics[0],
            MarkupError::InvalidArgument { parameter, argument, .. }
                if parameter == "alignment" && argument == "z"
        ));
    }

    #[test]
    fn row_without_constructor_still_has_cells() {
        let RenderedElement::Row(row) = render("[row]x||y") else {
            panic!("expected a row");
        };
        assert_eq!(row.content, vec!["x", "y"]);
        assert!(row.layout.is_empty());
    }

    #[rstest]
    #[case("[spt]", RenderedElement::Separator)]
    #[case("[spc]", RenderedElement::Spacer)]
    #[case("[mis]", RenderedElement::Missing)]
    fn bodiless_elements(#[case] element: &str, #[case] expected: RenderedElement) {
        assert_eq!(render(element), expected);
    }

    #[test]
    fn missing_renders_as_empty_string() {
        assert_eq!(render("[mis]").as_text(), Some(""));
    }

    #[rstest]
    #[case("no tag at all")]
    #[case("[foo]bar")]
    #[case("")]
    fn unrecognized_elements_round_trip(#[case] element: &str) {
        let (rendered, diagnostics) = test_renderer().render_with_diagnostics(element);
        assert_eq!(rendered, RenderedElement::Raw(element.to_string()));
        assert_eq!(diagnostics, vec![MarkupError::UnknownTag(element.to_string())]);
    }

    #[test]
    fn missing_bracket_is_a_syntax_error() {
        let (rendered, diagnostics) = test_renderer().render_with_diagnostics("[txt oops");
        assert_eq!(rendered, RenderedElement::Raw("[txt oops".to_string()));
        assert_eq!(diagnostics, vec![MarkupError::Syntax("[txt oops".to_string())]);
    }

    #[test]
    fn unknown_parameter_does_not_stop_rendering() {
        let (rendered, diagnostics) = test_renderer().render_with_diagnostics("[txt(size=3;col=red)]x");
        assert_eq!(rendered, RenderedElement::Text("<p style='color:red'>x</p>".to_string()));
        assert!(matches!(&diagnostics[..], [MarkupError::UnknownParameter { name, .. }] if name == "size"));
    }

    #[test]
    fn entry_header_uses_first_header_element() {
        let entry = Entry {
            id: "welcome".into(),
            elements: vec![
                "[txt]intro".into(),
                "[hdr]First".into(),
                "[hdr]Second".into(),
            ],
        };
        assert_eq!(test_renderer().entry_header(&entry).unwrap(), "First");
    }

    #[test]
    fn entry_header_without_header_element() {
        let entry = Entry {
            id: "bare".into(),
            elements: vec!["[txt]a".into(), "[spt]".into()],
        };
        assert_eq!(
            test_renderer().entry_header(&entry),
            Err(NavigationError::MissingHeader("bare".to_string()))
        );
    }

    #[test]
    fn rendered_element_serializes_with_type_tag() {
        let json = serde_json::to_value(render("[txt]Hi")).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "text", "value": "Hi" }));
    }
}

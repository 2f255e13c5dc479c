//! Shared fixtures for unit tests.

use std::{collections::HashMap, sync::Arc};

use crate::{
    ids::KebabNormalizer,
    lookup::{DataResolver, LOC_MISS_PREFIX, Localizer, MapLocalizer},
    models::{Book, Chapter, ContentTree, Entry},
    render::{DEFAULT_ASSET_BASE_URL, ElementRenderer},
};

/// A data resolver backed by a flat map of paths to values.
#[derive(Debug, Default, Clone)]
pub struct FixedData(HashMap<String, String>);

impl<const N: usize> From<[(&str, &str); N]> for FixedData {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl DataResolver for FixedData {
    fn data_from_path(&self, path: &str) -> Option<String> {
        self.0.get(path).cloned()
    }
}

/// A localizer that knows nothing and always answers with the miss sentinel,
/// even when a missing key is allowed.
#[derive(Debug, Default, Clone, Copy)]
pub struct MissLocalizer;

impl Localizer for MissLocalizer {
    fn get_value(&self, key: &str, _allow_missing: bool) -> Option<String> {
        Some(format!("{LOC_MISS_PREFIX}:{key}"))
    }
}

fn entry(id: &str, elements: &[&str]) -> Entry {
    Entry {
        id: id.to_string(),
        elements: elements.iter().map(|e| e.to_string()).collect(),
    }
}

/// Two books: `basic-rules` (localized title) and `lore` (header only).
pub fn sample_tree() -> ContentTree {
    ContentTree::new(vec![
        Book {
            id: "basic-rules".to_string(),
            header: "basic-rules".to_string(),
            chapters: vec![Chapter {
                id: "introduction".to_string(),
                header: "Introduction".to_string(),
                entries: vec![
                    entry(
                        "welcome",
                        &[
                            "[hdr]Welcome, traveller",
                            "[txt]Read <link=\"lore+stars+sol\">about Sol</link>.",
                            "[spt]",
                            "[row(header=true;layout=1,1)]Name||Value",
                        ],
                    ),
                    entry("untitled", &["[txt]No header here"]),
                ],
            }],
        },
        Book {
            id: "lore".to_string(),
            header: "Lore of the Stars".to_string(),
            chapters: vec![Chapter {
                id: "stars".to_string(),
                header: "Stars".to_string(),
                entries: vec![entry("sol", &["[img]stellarpedia_sol", "[hdr]Sol"])],
            }],
        },
    ])
}

pub fn test_localizer() -> MapLocalizer {
    MapLocalizer::from([("basic-rules", "Basic Rules"), ("greeting", "Hello")])
}

pub fn test_renderer() -> ElementRenderer {
    renderer_with_localizer(Arc::new(test_localizer()))
}

pub fn renderer_with_localizer(localizer: Arc<dyn Localizer>) -> ElementRenderer {
    ElementRenderer::new(
        localizer,
        Arc::new(FixedData::from([("ship.name", "Aurora")])),
        Arc::new(KebabNormalizer),
        DEFAULT_ASSET_BASE_URL,
    )
}

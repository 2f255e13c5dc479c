use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use async_trait::async_trait;

use crate::{
    content::ContentRepository,
    error::ContentError,
    lookup::{JsonDataResolver, MapLocalizer},
    models::ContentTree,
};

/// Reads the content tree from a single JSON file:
/// `{ "books": [ { "id": ..., "chapters": [ ... ] } ] }`.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ContentRepository for JsonFileRepository {
    async fn load_all(&self) -> Result<ContentTree, ContentError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ContentError::NotFound(self.path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }
}

fn read_json(path: &Path) -> Result<String, ContentError> {
    if !path.exists() {
        return Err(ContentError::NotFound(path.display().to_string()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Load a flat `{ "key": "value" }` localization table
pub fn load_localization(path: &Path) -> Result<MapLocalizer, ContentError> {
    let values: HashMap<String, String> = serde_json::from_str(&read_json(path)?)?;
    Ok(MapLocalizer::new(values))
}

/// Load the JSON document `<dt>` references are resolved against
pub fn load_data(path: &Path) -> Result<JsonDataResolver, ContentError> {
    Ok(JsonDataResolver::new(serde_json::from_str(&read_json(path)?)?))
}

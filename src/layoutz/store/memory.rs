use std::collections::HashMap;
use std::path::PathBuf;

use super::LayoutStore;
use crate::error::{LayoutError, Result};
use crate::model::Document;

/// In-memory layout storage for testing and development.
/// Keeps the serialized text, so load still runs the full import path.
#[derive(Default)]
pub struct InMemoryStore {
    layouts: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LayoutStore for InMemoryStore {
    fn save(&mut self, name: &str, document: &Document) -> Result<PathBuf> {
        let json = document.to_json(false)?;
        self.layouts.insert(name.to_string(), json);
        Ok(PathBuf::from(name))
    }

    fn load(&self, name: &str) -> Result<Document> {
        let json = self
            .layouts
            .get(name)
            .ok_or_else(|| LayoutError::Api(format!("No stored layout '{}'", name)))?;
        Document::from_json(json)
    }

    fn exists(&self, name: &str) -> bool {
        self.layouts.contains_key(name)
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.layouts.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template;

    #[test]
    fn test_memory_roundtrip() {
        let mut store = InMemoryStore::new();
        let doc = template::builtin("contact").unwrap();
        store.save("contact", &doc).unwrap();

        assert!(store.exists("contact"));
        assert_eq!(store.load("contact").unwrap(), doc);
        assert_eq!(store.list().unwrap(), ["contact"]);
    }

    #[test]
    fn test_missing_layout() {
        let store = InMemoryStore::new();
        assert!(!store.exists("x"));
        assert!(store.load("x").is_err());
    }
}

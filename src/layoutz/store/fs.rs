use std::fs;
use std::path::PathBuf;

use super::LayoutStore;
use crate::error::{LayoutError, Result};
use crate::model::Document;

/// File-based layout storage: one JSON document per file.
pub struct FileStore {
    root: PathBuf,
    pretty: bool,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root, pretty: true }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Absolute names are taken as-is; relative ones resolve against the
    /// store root. Names without an extension get `.json`.
    fn resolve(&self, name: &str) -> PathBuf {
        let mut path = PathBuf::from(name);
        if path.extension().is_none() {
            path.set_extension("json");
        }
        if path.is_absolute() {
            path
        } else {
            self.root.join(path)
        }
    }
}

impl LayoutStore for FileStore {
    fn save(&mut self, name: &str, document: &Document) -> Result<PathBuf> {
        let path = self.resolve(name);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(LayoutError::Io)?;
            }
        }
        let json = document.to_json(self.pretty)?;
        fs::write(&path, json).map_err(LayoutError::Io)?;
        log::debug!("saved layout '{}' to {}", document.object_type, path.display());
        Ok(path)
    }

    fn load(&self, name: &str) -> Result<Document> {
        let path = self.resolve(name);
        let content = fs::read_to_string(&path).map_err(LayoutError::Io)?;
        log::debug!("loading layout from {}", path.display());
        Document::from_json(&content)
    }

    fn exists(&self, name: &str) -> bool {
        self.resolve(name).exists()
    }

    fn list(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(LayoutError::Io)? {
            let entry = entry.map_err(LayoutError::Io)?;
            let path = entry.path();
            if path.is_file() && path.extension().map_or(false, |e| e == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

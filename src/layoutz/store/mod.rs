//! # Storage Layer
//!
//! Persistence collaborator for the layout document: it moves the
//! serialized JSON form (see `Document::to_json`) in and out of named
//! slots, and knows nothing about layout semantics beyond that.
//!
//! The [`LayoutStore`] trait exists for the same reasons the rest of the
//! crate is layered:
//! - **testing** with [`memory::InMemoryStore`] (no filesystem needed)
//! - future backends without changing command logic
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON files on disk, one document per file.
//!   Relative names resolve against the store root (usually the working
//!   directory) and get a `.json` extension when they have none.
//! - [`memory::InMemoryStore`]: keeps the serialized text in a map, so
//!   tests still exercise the full export/import round-trip.

use std::path::PathBuf;

use crate::error::Result;
use crate::model::Document;

pub mod fs;
pub mod memory;

/// Abstract interface for saving and loading serialized layouts.
pub trait LayoutStore {
    /// Persist a document under `name`, returning where it landed.
    fn save(&mut self, name: &str, document: &Document) -> Result<PathBuf>;

    /// Load and revalidate the document stored under `name`.
    fn load(&self, name: &str) -> Result<Document>;

    fn exists(&self, name: &str) -> bool;

    /// Names of all stored layouts, sorted.
    fn list(&self) -> Result<Vec<String>>;
}

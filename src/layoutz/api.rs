//! # API Facade
//!
//! Single entry point for every layout operation, regardless of the UI
//! driving it. The facade:
//!
//! - **dispatches** to the command layer
//! - **normalizes inputs**: user-facing selectors (`"2.3"`, labels,
//!   section titles) become stable UUIDs before any command runs
//! - **tracks session state**: successful mutations mark the session
//!   dirty, a successful export marks it clean again
//!
//! No business logic lives here and nothing here touches stdout; both of
//! those statements are load-bearing for testability.

use crate::commands::{self, CmdMessage, CmdResult, FieldDraft};
use crate::document::Direction;
use crate::error::Result;
use crate::index::{FieldSelector, SectionSelector};
use crate::model::Document;
use crate::session::Session;
use crate::store::LayoutStore;

/// The main facade: one session, one store, one document.
///
/// Generic over [`LayoutStore`] so tests can run against
/// `InMemoryStore` while the CLI uses `FileStore`.
pub struct LayoutApi<S: LayoutStore> {
    session: Session,
    store: S,
}

impl<S: LayoutStore> LayoutApi<S> {
    pub fn new(session: Session, store: S) -> Self {
        Self { session, store }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn document(&self) -> &Document {
        self.session.document()
    }

    // --- Section operations ---

    pub fn add_section(&mut self, title: &str) -> Result<CmdResult> {
        let result = commands::sections::add(self.session.document_mut(), title)?;
        self.session.mark_dirty();
        Ok(result)
    }

    pub fn remove_section(&mut self, selector: &str) -> Result<CmdResult> {
        let sel = SectionSelector::parse(selector);
        let result = commands::sections::remove(self.session.document_mut(), &sel)?;
        self.session.mark_dirty();
        Ok(result)
    }

    pub fn move_section(&mut self, selector: &str, position: usize) -> Result<CmdResult> {
        let sel = SectionSelector::parse(selector);
        let result = commands::sections::relocate(self.session.document_mut(), &sel, position)?;
        self.session.mark_dirty();
        Ok(result)
    }

    // --- Field operations ---

    pub fn add_field(&mut self, section: &str, draft: FieldDraft) -> Result<CmdResult> {
        let sel = SectionSelector::parse(section);
        let result = commands::add_field::run(self.session.document_mut(), &sel, draft)?;
        self.session.mark_dirty();
        Ok(result)
    }

    pub fn remove_fields<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let sels = parse_selectors(selectors);
        let result = commands::remove_field::run(self.session.document_mut(), &sels)?;
        self.session.mark_dirty();
        Ok(result)
    }

    pub fn hide_fields<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let sels = parse_selectors(selectors);
        let result = commands::visibility::hide(self.session.document_mut(), &sels)?;
        self.session.mark_dirty();
        Ok(result)
    }

    pub fn restore_fields<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let sels = parse_selectors(selectors);
        let result = commands::visibility::restore(self.session.document_mut(), &sels)?;
        self.session.mark_dirty();
        Ok(result)
    }

    pub fn move_field(&mut self, selector: &str, direction: Direction) -> Result<CmdResult> {
        let sel = FieldSelector::parse(selector);
        let result = commands::move_field::run(self.session.document_mut(), &sel, direction)?;
        self.session.mark_dirty();
        Ok(result)
    }

    pub fn swap_fields(&mut self, a: &str, b: &str) -> Result<CmdResult> {
        let sel_a = FieldSelector::parse(a);
        let sel_b = FieldSelector::parse(b);
        let result = commands::swap::run(self.session.document_mut(), &sel_a, &sel_b)?;
        self.session.mark_dirty();
        Ok(result)
    }

    pub fn set_value(&mut self, selector: &str, value: &str) -> Result<CmdResult> {
        let sel = FieldSelector::parse(selector);
        let result = commands::update::set_value(self.session.document_mut(), &sel, value)?;
        self.session.mark_dirty();
        Ok(result)
    }

    pub fn set_label(&mut self, selector: &str, label: &str) -> Result<CmdResult> {
        let sel = FieldSelector::parse(selector);
        let result = commands::update::set_label(self.session.document_mut(), &sel, label)?;
        self.session.mark_dirty();
        Ok(result)
    }

    /// Rename the mocked object type ("Account", "Contact", ...). Pure
    /// presentation metadata, but still part of the exported document.
    pub fn rename_object(&mut self, name: &str) -> Result<CmdResult> {
        self.session.document_mut().object_type = name.to_string();
        self.session.mark_dirty();
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!("Object type is now '{}'", name)));
        Ok(result)
    }

    // --- Read operations ---

    pub fn list(&self) -> Result<CmdResult> {
        commands::view::run(self.session.document())
    }

    pub fn hidden(&self) -> Result<CmdResult> {
        commands::hidden::run(self.session.document())
    }

    // --- Persistence collaborator ---

    pub fn export(&mut self, destination: Option<&str>) -> Result<CmdResult> {
        let result = commands::export::run(&mut self.store, self.session.document(), destination)?;
        self.session.mark_clean();
        Ok(result)
    }

    pub fn import(&mut self, name: &str) -> Result<CmdResult> {
        commands::import::run(&self.store, &mut self.session, name)
    }

    /// Names of layouts already saved in the store (prior exports).
    pub fn saved_layouts(&self) -> Result<Vec<String>> {
        self.store.list()
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Vec<FieldSelector> {
    inputs
        .iter()
        .map(|s| FieldSelector::parse(s.as_ref()))
        .collect()
}

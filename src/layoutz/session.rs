//! One editing session owns one document.
//!
//! The original tool kept its tree in ambient per-session globals; here the
//! session is an explicit, owned value constructed at startup and passed to
//! whatever UI drives it. Nothing survives the session except what the user
//! exported.

use chrono::{DateTime, Utc};
use std::path::PathBuf;

use crate::error::{LayoutError, Result};
use crate::model::Document;
use crate::template;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOrigin {
    Template(String),
    File(PathBuf),
}

impl std::fmt::Display for SessionOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionOrigin::Template(name) => write!(f, "template '{}'", name),
            SessionOrigin::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug)]
pub struct Session {
    document: Document,
    origin: SessionOrigin,
    started_at: DateTime<Utc>,
    dirty: bool,
}

impl Session {
    pub fn from_template(name: &str) -> Result<Self> {
        let document = template::builtin(name)
            .ok_or_else(|| LayoutError::Api(format!("No built-in template '{}'", name)))?;
        Ok(Self::new(document, SessionOrigin::Template(name.to_lowercase())))
    }

    pub fn from_document(document: Document, origin: SessionOrigin) -> Self {
        Self::new(document, origin)
    }

    fn new(document: Document, origin: SessionOrigin) -> Self {
        log::debug!(
            "session started from {}: {} sections, {} fields",
            origin,
            document.sections.len(),
            document.field_count()
        );
        Self {
            document,
            origin,
            started_at: Utc::now(),
            dirty: false,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Swap in a freshly imported document wholesale. The old tree is gone;
    /// no merging, no partial state.
    pub fn replace(&mut self, document: Document, origin: SessionOrigin) {
        self.document = document;
        self.origin = origin;
        self.dirty = false;
    }

    pub fn origin(&self) -> &SessionOrigin {
        &self.origin
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Whether the document has unexported edits.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_from_template() {
        let session = Session::from_template("account").unwrap();
        assert_eq!(session.document().object_type, "Account");
        assert!(!session.is_dirty());
        assert_eq!(
            session.origin(),
            &SessionOrigin::Template("account".to_string())
        );
    }

    #[test]
    fn test_session_from_unknown_template_fails() {
        assert!(Session::from_template("lead").is_err());
    }

    #[test]
    fn test_replace_resets_dirty_flag() {
        let mut session = Session::from_template("account").unwrap();
        session.mark_dirty();

        let incoming = template::builtin("contact").unwrap();
        session.replace(incoming, SessionOrigin::File("contact.json".into()));
        assert_eq!(session.document().object_type, "Contact");
        assert!(!session.is_dirty());
    }
}

use std::path::PathBuf;

use crate::index::DisplayField;
use crate::model::FieldType;

pub mod add_field;
pub mod export;
pub mod helpers;
pub mod hidden;
pub mod import;
pub mod move_field;
pub mod remove_field;
pub mod sections;
pub mod swap;
pub mod update;
pub mod view;
pub mod visibility;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Fields touched by a mutation, re-indexed after the fact.
    pub affected: Vec<DisplayField>,
    /// Fields produced by a listing command.
    pub listed: Vec<DisplayField>,
    /// Where an export landed, if one happened.
    pub exported_to: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, fields: Vec<DisplayField>) -> Self {
        self.affected = fields;
        self
    }

    pub fn with_listed(mut self, fields: Vec<DisplayField>) -> Self {
        self.listed = fields;
        self
    }
}

/// Everything needed to create a field, before it gets an id and a slot.
#[derive(Debug, Clone)]
pub struct FieldDraft {
    pub label: String,
    pub field_type: FieldType,
    pub value: String,
    pub options: Vec<String>,
    pub hidden: bool,
}

impl FieldDraft {
    pub fn new(label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            label: label.into(),
            field_type,
            value: String::new(),
            options: Vec::new(),
            hidden: false,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

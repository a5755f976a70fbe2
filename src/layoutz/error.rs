use thiserror::Error;
use uuid::Uuid;

use crate::model::FieldType;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Field not found: {0}")]
    FieldNotFound(Uuid),

    #[error("Section not found: {0}")]
    SectionNotFound(Uuid),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Invalid {field_type} value for '{label}': {value:?}")]
    InvalidValue {
        label: String,
        field_type: FieldType,
        value: String,
    },

    #[error("Malformed layout: {0}")]
    Malformed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

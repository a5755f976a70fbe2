use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{LayoutError, Result};

/// The type tag of a field, mirroring the CRM field types the mock supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Phone,
    Picklist,
    Date,
    Number,
    Currency,
    Textarea,
    Url,
}

impl FieldType {
    pub const ALL: [FieldType; 9] = [
        FieldType::Text,
        FieldType::Email,
        FieldType::Phone,
        FieldType::Picklist,
        FieldType::Date,
        FieldType::Number,
        FieldType::Currency,
        FieldType::Textarea,
        FieldType::Url,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Phone => "phone",
            FieldType::Picklist => "picklist",
            FieldType::Date => "date",
            FieldType::Number => "number",
            FieldType::Currency => "currency",
            FieldType::Textarea => "textarea",
            FieldType::Url => "url",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(FieldType::Text),
            "email" => Ok(FieldType::Email),
            "phone" => Ok(FieldType::Phone),
            "picklist" => Ok(FieldType::Picklist),
            "date" => Ok(FieldType::Date),
            "number" => Ok(FieldType::Number),
            "currency" => Ok(FieldType::Currency),
            "textarea" => Ok(FieldType::Textarea),
            "url" => Ok(FieldType::Url),
            other => Err(format!("Unknown field type: {}", other)),
        }
    }
}

/// A single labeled, typed, orderable, hideable value within a section.
///
/// `order` is in-memory only: the serialized form carries order as array
/// position, so it is rebuilt from the array index on import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: Uuid,
    pub label: String,
    pub value: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub visible: bool,
    /// Allowed values for picklist fields. Empty for every other type.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(skip)]
    pub order: usize,
}

impl Field {
    pub fn new(label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            value: String::new(),
            field_type,
            visible: true,
            options: Vec::new(),
            order: 0,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Check `value` against this field's type.
    ///
    /// The empty string is always accepted: fields are clearable and mock
    /// layouts are full of blanks.
    pub fn check_value(&self, value: &str) -> Result<()> {
        if value.is_empty() || type_accepts(self.field_type, value, &self.options) {
            Ok(())
        } else {
            Err(LayoutError::InvalidValue {
                label: self.label.clone(),
                field_type: self.field_type,
                value: value.to_string(),
            })
        }
    }
}

fn type_accepts(field_type: FieldType, value: &str, options: &[String]) -> bool {
    match field_type {
        FieldType::Text | FieldType::Textarea | FieldType::Phone => true,
        FieldType::Email => {
            let mut parts = value.splitn(2, '@');
            let local = parts.next().unwrap_or("");
            match parts.next() {
                Some(domain) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
                None => false,
            }
        }
        FieldType::Url => url::Url::parse(value).is_ok(),
        FieldType::Date => NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok(),
        FieldType::Number => parse_decimal(value).is_some(),
        FieldType::Currency => parse_decimal(value.strip_prefix('$').unwrap_or(value)).is_some(),
        FieldType::Picklist => options.is_empty() || options.iter().any(|o| o == value),
    }
}

/// Parse a decimal that may carry thousands separators ("1,234.5").
fn parse_decimal(s: &str) -> Option<f64> {
    let cleaned = s.replace(',', "");
    cleaned.trim().parse::<f64>().ok()
}

/// A named, ordered group of fields within a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: Uuid,
    pub title: String,
    pub fields: Vec<Field>,
    #[serde(skip)]
    pub order: usize,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            fields: Vec::new(),
            order: 0,
        }
    }

    pub fn visible_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.visible)
    }

    pub fn hidden_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.visible)
    }
}

/// The root of the layout tree: one record-detail page mock.
///
/// One document exists per editing session. Mutation operations live in
/// `document.rs`; this file only holds the data shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub object_type: String,
    pub sections: Vec<Section>,
}

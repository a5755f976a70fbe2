//! # Display Indexing
//!
//! The core model addresses fields and sections by stable UUID, but nobody
//! wants to type a UUID into the shell. This module maps between the two:
//! every field gets a 1-based display path like `2.3` (third field of the
//! second section), and hidden fields additionally get a hidden-panel rank
//! (`h1`, `h2`, ...) so the restore panel can list them compactly.
//!
//! Paths are positional and shift as the layout is mutated; the UUIDs
//! underneath never do. Resolution happens at the API boundary, right
//! before a command runs, so a path always refers to what the user is
//! currently looking at.

use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{LayoutError, Result};
use crate::model::{Document, Field};

/// A 1-based `section.field` display path, e.g. `2.3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldPath {
    pub section: usize,
    pub field: usize,
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section, self.field)
    }
}

impl FromStr for FieldPath {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (sec, fld) = s
            .split_once('.')
            .ok_or_else(|| format!("Not a field path: {}", s))?;
        let section: usize = sec.parse().map_err(|_| format!("Not a field path: {}", s))?;
        let field: usize = fld.parse().map_err(|_| format!("Not a field path: {}", s))?;
        if section == 0 || field == 0 {
            return Err(format!("Field paths are 1-based: {}", s));
        }
        Ok(FieldPath { section, field })
    }
}

/// User input naming a field: a display path, or a label to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSelector {
    Path(FieldPath),
    Label(String),
}

impl FieldSelector {
    /// Anything that parses as `N.M` is a path; everything else is treated
    /// as a label query.
    pub fn parse(input: &str) -> FieldSelector {
        match input.parse::<FieldPath>() {
            Ok(path) => FieldSelector::Path(path),
            Err(_) => FieldSelector::Label(input.to_string()),
        }
    }
}

impl fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldSelector::Path(p) => write!(f, "{}", p),
            FieldSelector::Label(l) => write!(f, "\"{}\"", l),
        }
    }
}

/// User input naming a section: a 1-based index or a title to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionSelector {
    Index(usize),
    Title(String),
}

impl SectionSelector {
    pub fn parse(input: &str) -> SectionSelector {
        match input.parse::<usize>() {
            Ok(n) if n > 0 => SectionSelector::Index(n),
            _ => SectionSelector::Title(input.to_string()),
        }
    }
}

impl fmt::Display for SectionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionSelector::Index(n) => write!(f, "{}", n),
            SectionSelector::Title(t) => write!(f, "\"{}\"", t),
        }
    }
}

/// A field snapshot paired with its display coordinates.
#[derive(Debug, Clone)]
pub struct DisplayField {
    pub field: Field,
    pub section_title: String,
    pub path: FieldPath,
    /// Position in the hidden panel, set only for hidden fields.
    pub hidden_rank: Option<usize>,
}

/// Assign display paths to every field in the document, in render order.
/// Hidden fields keep their positional path and also get a hidden rank.
pub fn index_fields(doc: &Document) -> Vec<DisplayField> {
    let mut results = Vec::with_capacity(doc.field_count());
    let mut hidden_rank = 1;
    for (si, section) in doc.sections.iter().enumerate() {
        for (fi, field) in section.fields.iter().enumerate() {
            let rank = if field.visible {
                None
            } else {
                hidden_rank += 1;
                Some(hidden_rank - 1)
            };
            results.push(DisplayField {
                field: field.clone(),
                section_title: section.title.clone(),
                path: FieldPath {
                    section: si + 1,
                    field: fi + 1,
                },
                hidden_rank: rank,
            });
        }
    }
    results
}

/// Resolve a selector to a field's UUID against the current document.
pub fn resolve_field(doc: &Document, selector: &FieldSelector) -> Result<Uuid> {
    match selector {
        FieldSelector::Path(path) => {
            let section = doc
                .sections
                .get(path.section - 1)
                .ok_or_else(|| LayoutError::Api(format!("No field at {}", path)))?;
            section
                .fields
                .get(path.field - 1)
                .map(|f| f.id)
                .ok_or_else(|| LayoutError::Api(format!("No field at {}", path)))
        }
        FieldSelector::Label(query) => {
            let needle = query.to_lowercase();
            let all: Vec<(&str, Uuid)> = doc
                .sections
                .iter()
                .flat_map(|s| s.fields.iter())
                .map(|f| (f.label.as_str(), f.id))
                .collect();

            // Exact label match wins outright, even if it is also a prefix
            // of other labels.
            let exact: Vec<Uuid> = all
                .iter()
                .filter(|(label, _)| label.to_lowercase() == needle)
                .map(|(_, id)| *id)
                .collect();
            if exact.len() == 1 {
                return Ok(exact[0]);
            }

            let matches: Vec<(&str, Uuid)> = all
                .into_iter()
                .filter(|(label, _)| label.to_lowercase().contains(&needle))
                .collect();
            match matches.len() {
                0 => Err(LayoutError::Api(format!("No field matching \"{}\"", query))),
                1 => Ok(matches[0].1),
                _ => Err(LayoutError::Api(format!(
                    "\"{}\" is ambiguous: {}",
                    query,
                    matches
                        .iter()
                        .map(|(label, _)| *label)
                        .collect::<Vec<_>>()
                        .join(", ")
                ))),
            }
        }
    }
}

/// Resolve a selector to a section's UUID against the current document.
pub fn resolve_section(doc: &Document, selector: &SectionSelector) -> Result<Uuid> {
    match selector {
        SectionSelector::Index(n) => doc
            .sections
            .get(n - 1)
            .map(|s| s.id)
            .ok_or_else(|| LayoutError::Api(format!("No section {}", n))),
        SectionSelector::Title(query) => {
            let needle = query.to_lowercase();
            let matches: Vec<&crate::model::Section> = doc
                .sections
                .iter()
                .filter(|s| s.title.to_lowercase().contains(&needle))
                .collect();
            match matches.len() {
                0 => Err(LayoutError::Api(format!(
                    "No section matching \"{}\"",
                    query
                ))),
                1 => Ok(matches[0].id),
                _ => Err(LayoutError::Api(format!(
                    "\"{}\" is ambiguous: {}",
                    query,
                    matches
                        .iter()
                        .map(|s| s.title.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))),
            }
        }
    }
}

//! Terminal rendering of the two page views.
//!
//! The design view shows everything: display paths, type tags, hidden
//! markers. The preview shows what the mocked record page would actually
//! look like: visible fields only, values formatted per type, laid out in
//! a column grid. Both consume the document read-only.

use unicode_width::UnicodeWidthStr;

use crate::cli::styles;
use crate::index::DisplayField;
use crate::model::{Document, Field, FieldType};

const LABEL_WIDTH: usize = 34;
const TYPE_WIDTH: usize = 10;
const VALUE_WIDTH: usize = 44;
const CELL_LABEL_WIDTH: usize = 28;
const CELL_WIDTH: usize = 60;

/// Format a raw value for the preview, per field type. Mirrors how the
/// real record page presents each type.
pub fn format_value(field: &Field) -> String {
    if field.value.is_empty() {
        return "--".to_string();
    }
    match field.field_type {
        FieldType::Currency => {
            let raw = field.value.strip_prefix('$').unwrap_or(&field.value);
            match raw.replace(',', "").parse::<f64>() {
                Ok(n) => format!("${}", group_thousands(&format!("{:.2}", n))),
                Err(_) => field.value.clone(),
            }
        }
        FieldType::Number => {
            let raw = field.value.replace(',', "");
            if raw.parse::<f64>().is_ok() {
                group_thousands(&raw)
            } else {
                field.value.clone()
            }
        }
        _ => field.value.clone(),
    }
}

/// Insert thousands separators into the integer part of a numeric string.
fn group_thousands(number: &str) -> String {
    let (int_part, frac_part) = match number.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (number, None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// The design view: every field, with paths and affordance markers.
pub fn render_design(doc: &Document) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} (design)\n",
        styles::SECTION_TITLE.apply_to(&doc.object_type)
    ));

    if doc.sections.is_empty() {
        out.push_str("  (no sections yet; try `add-section <title>`)\n");
        return out;
    }

    for (si, section) in doc.sections.iter().enumerate() {
        let hidden = section.hidden_fields().count();
        let counts = if hidden > 0 {
            format!("({} fields, {} hidden)", section.fields.len(), hidden)
        } else {
            format!("({} fields)", section.fields.len())
        };
        out.push_str(&format!(
            "\n{}. {} {}\n",
            si + 1,
            styles::SECTION_TITLE.apply_to(&section.title),
            styles::TYPE_TAG.apply_to(counts)
        ));

        for (fi, field) in section.fields.iter().enumerate() {
            // Pad before styling: ANSI codes would throw the widths off.
            let path = pad_to_width(&format!("{}.{}", si + 1, fi + 1), 6);
            let label = pad_to_width(&field.label, LABEL_WIDTH);
            let type_tag = pad_to_width(field.field_type.as_str(), TYPE_WIDTH);
            let value = truncate_to_width(&field.value, VALUE_WIDTH);
            let marker = if field.visible {
                String::new()
            } else {
                format!(" {}", styles::HIDDEN_MARKER.apply_to("[hidden]"))
            };
            out.push_str(&format!(
                "  {}{} {} {}{}\n",
                styles::FIELD_PATH.apply_to(path),
                label,
                styles::TYPE_TAG.apply_to(type_tag),
                value,
                marker
            ));
        }
    }
    out
}

/// The preview: visible fields only, formatted values, column grid.
pub fn render_preview(doc: &Document, columns: usize) -> String {
    let columns = columns.max(1);
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        styles::SECTION_TITLE.apply_to(&doc.object_type)
    ));

    for section in &doc.sections {
        let visible: Vec<&Field> = section.visible_fields().collect();
        if visible.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "\n{}\n",
            styles::SECTION_TITLE.apply_to(&section.title)
        ));

        for row in visible.chunks(columns) {
            let mut line = String::from("  ");
            for field in row {
                line.push_str(&render_cell(field));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }
    out
}

fn render_cell(field: &Field) -> String {
    let label = pad_to_width(&field.label, CELL_LABEL_WIDTH);
    let value = format_value(field);
    let value_width = CELL_WIDTH - CELL_LABEL_WIDTH - 2;
    let shown = truncate_to_width(&value, value_width);
    let padding = value_width.saturating_sub(shown.width()) + 2;
    let styled_value = if field.value.is_empty() {
        styles::EMPTY_VALUE.apply_to(shown).to_string()
    } else {
        shown
    };
    format!(
        "{}{}{}",
        styles::PREVIEW_LABEL.apply_to(label),
        styled_value,
        " ".repeat(padding)
    )
}

/// The hidden panel listing.
pub fn render_hidden(listed: &[DisplayField]) -> String {
    let mut out = String::new();
    for df in listed {
        let rank = df.hidden_rank.map(|r| format!("h{}", r)).unwrap_or_default();
        out.push_str(&format!(
            "  {}{}{} {} in {}\n",
            styles::HIDDEN_MARKER.apply_to(pad_to_width(&rank, 4)),
            styles::FIELD_PATH.apply_to(pad_to_width(&df.path.to_string(), 6)),
            pad_to_width(&df.field.label, LABEL_WIDTH),
            styles::TYPE_TAG.apply_to(df.field.field_type.as_str()),
            df.section_title
        ));
    }
    out
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

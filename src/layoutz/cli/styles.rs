use console::Style;
use once_cell::sync::Lazy;

pub static SECTION_TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static FIELD_PATH: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static TYPE_TAG: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static HIDDEN_MARKER: Lazy<Style> = Lazy::new(|| Style::new().red().dim());
pub static PREVIEW_LABEL: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static EMPTY_VALUE: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static PROMPT: Lazy<Style> = Lazy::new(|| Style::new().green().bold());

use chrono::Utc;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Document;
use crate::store::LayoutStore;

/// Snapshot the whole document, hidden fields included, to the store.
/// With no destination, a timestamped name is generated.
pub fn run<S: LayoutStore>(
    store: &mut S,
    doc: &Document,
    destination: Option<&str>,
) -> Result<CmdResult> {
    let name = match destination {
        Some(dest) => dest.to_string(),
        None => format!(
            "{}-layout-{}",
            doc.object_type.to_lowercase(),
            Utc::now().format("%Y-%m-%d_%H-%M-%S")
        ),
    };

    let path = store.save(&name, doc)?;
    log::debug!("exported {} fields to {}", doc.field_count(), path.display());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported to {}",
        path.display()
    )));
    result.exported_to = Some(path);
    Ok(result)
}

use std::path::PathBuf;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::{Session, SessionOrigin};
use crate::store::LayoutStore;

/// Load a serialized layout and swap it into the session wholesale.
/// A malformed payload fails before the session is touched, so the
/// current document survives a bad import untouched.
pub fn run<S: LayoutStore>(store: &S, session: &mut Session, name: &str) -> Result<CmdResult> {
    let incoming = store.load(name)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {}: '{}' with {} section(s), {} field(s)",
        name,
        incoming.object_type,
        incoming.sections.len(),
        incoming.field_count()
    )));
    session.replace(incoming, SessionOrigin::File(PathBuf::from(name)));
    Ok(result)
}

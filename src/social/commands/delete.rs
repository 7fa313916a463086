use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ContentStore;

pub fn run(store: &ContentStore, id: &str) -> Result<CmdResult> {
    let entry = store.delete_entry(id)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Deleted entry {}", entry.id)));
    result.affected_entries.push(entry);
    Ok(result)
}

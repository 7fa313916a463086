use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Entry, Platform, Status};
use crate::store::ContentStore;
use chrono::NaiveDate;

pub fn run(
    store: &ContentStore,
    platform: Platform,
    content: String,
    topic: String,
    scheduled_date: Option<NaiveDate>,
    status: Status,
) -> Result<CmdResult> {
    let entry = Entry::new(platform, content, topic, scheduled_date, status);
    let entry = store.add_entry(entry)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added entry {}",
        entry.id
    )));
    result.affected_entries.push(entry);
    Ok(result)
}

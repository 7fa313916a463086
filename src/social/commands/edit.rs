use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{ContentStore, EntryUpdate};

pub fn run(store: &ContentStore, id: &str, update: &EntryUpdate) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if update.is_empty() {
        let entry = store.get_entry(id)?;
        result.add_message(CmdMessage::info("No changes specified."));
        result.affected_entries.push(entry);
        return Ok(result);
    }

    let entry = store.update_entry(id, update)?;
    result.add_message(CmdMessage::success(format!("Updated entry {}", entry.id)));
    result.affected_entries.push(entry);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::error::SocialError;
    use crate::model::{Platform, Status};
    use tempfile::TempDir;

    #[test]
    fn edits_supplied_fields() {
        let dir = TempDir::new().unwrap();
        let store = ContentStore::new(dir.path().join("content.json"));
        let added = add::run(
            &store,
            Platform::Twitter,
            "Old".into(),
            "t".into(),
            None,
            Status::Draft,
        )
        .unwrap();
        let id = added.affected_entries[0].id.clone();

        let update = EntryUpdate {
            content: Some("New".into()),
            status: Some(Status::Published),
            ..Default::default()
        };
        let result = run(&store, &id, &update).unwrap();
        assert_eq!(result.affected_entries[0].content, "New");
        assert_eq!(result.affected_entries[0].status, Status::Published);
    }

    #[test]
    fn empty_update_returns_current_entry() {
        let dir = TempDir::new().unwrap();
        let store = ContentStore::new(dir.path().join("content.json"));
        let added = add::run(
            &store,
            Platform::Twitter,
            "Body".into(),
            "t".into(),
            None,
            Status::Draft,
        )
        .unwrap();
        let id = added.affected_entries[0].id.clone();

        let result = run(&store, &id, &EntryUpdate::default()).unwrap();
        assert_eq!(result.affected_entries[0].content, "Body");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = ContentStore::new(dir.path().join("content.json"));
        let err = run(&store, "missing", &EntryUpdate::default()).unwrap_err();
        assert!(matches!(err, SocialError::EntryNotFound(_)));
    }
}

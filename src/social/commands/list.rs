use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Platform, Status};
use crate::store::ContentStore;

pub fn run(
    store: &ContentStore,
    platform: Option<Platform>,
    status: Option<Status>,
) -> Result<CmdResult> {
    let entries = store.list_entries(platform, status)?;
    Ok(CmdResult::default().with_listed_entries(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use tempfile::TempDir;

    #[test]
    fn lists_filtered_entries() {
        let dir = TempDir::new().unwrap();
        let store = ContentStore::new(dir.path().join("content.json"));
        add::run(
            &store,
            Platform::Twitter,
            "a".into(),
            "t".into(),
            None,
            Status::Draft,
        )
        .unwrap();
        add::run(
            &store,
            Platform::Linkedin,
            "b".into(),
            "t".into(),
            None,
            Status::Published,
        )
        .unwrap();

        let result = run(&store, Some(Platform::Linkedin), None).unwrap();
        assert_eq!(result.listed_entries.len(), 1);
        assert_eq!(result.listed_entries[0].platform, Platform::Linkedin);

        let result = run(&store, None, Some(Status::Draft)).unwrap();
        assert_eq!(result.listed_entries.len(), 1);
        assert_eq!(result.listed_entries[0].status, Status::Draft);
    }
}

//! # Storage Layer
//!
//! [`ContentStore`] is the sole owner of the persisted entry collection. It is
//! backed by exactly one JSON file and keeps no in-memory cache: every public
//! call re-reads the file, and every mutation rewrites it in full.
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "version": 1,
//!   "entries": [ { "id": "...", "platform": "twitter", ... }, ... ]
//! }
//! ```
//!
//! `entries` is kept in insertion order; sorting happens at read time in
//! [`ContentStore::list_entries`].
//!
//! ## Durability
//!
//! Mutations serialize the whole document into a temp file in the target
//! directory and atomically rename it over the target path. A concurrent
//! reader never observes a half-written file. There is no locking between
//! concurrent writers; last full write wins.

use crate::error::{Result, SocialError};
use crate::model::{Entry, Platform, Status};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const STORE_VERSION: u32 = 1;

/// On-disk document wrapper.
#[derive(Debug, Serialize, Deserialize)]
struct Document {
    version: u32,
    entries: Vec<Entry>,
}

/// Field-wise update applied by [`ContentStore::update_entry`].
///
/// `None` means "leave unchanged". There is no way to clear a scheduled date;
/// supplying one always sets it.
#[derive(Debug, Clone, Default)]
pub struct EntryUpdate {
    pub platform: Option<Platform>,
    pub content: Option<String>,
    pub topic: Option<String>,
    pub scheduled_date: Option<NaiveDate>,
    pub status: Option<Status>,
}

impl EntryUpdate {
    pub fn is_empty(&self) -> bool {
        self.platform.is_none()
            && self.content.is_none()
            && self.topic.is_none()
            && self.scheduled_date.is_none()
            && self.status.is_none()
    }
}

/// JSON-file-backed entry store.
pub struct ContentStore {
    path: PathBuf,
}

impl ContentStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(SocialError::Io)?;
            }
        }
        Ok(())
    }

    /// Load all entries in storage (insertion) order, creating an empty
    /// document on first access.
    fn load(&self) -> Result<Vec<Entry>> {
        if !self.path.exists() {
            self.save(&[])?;
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(SocialError::Io)?;
        let doc: Document = serde_json::from_str(&content).map_err(SocialError::Serialization)?;
        Ok(doc.entries)
    }

    /// Persist the full entry sequence atomically: write to a temp file in
    /// the same directory, then rename over the target. On failure the temp
    /// file is removed on drop and the original file is left untouched.
    fn save(&self, entries: &[Entry]) -> Result<()> {
        self.ensure_parent()?;
        let doc = Document {
            version: STORE_VERSION,
            entries: entries.to_vec(),
        };
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir).map_err(SocialError::Io)?;
        serde_json::to_writer_pretty(&mut tmp, &doc).map_err(SocialError::Serialization)?;
        tmp.flush().map_err(SocialError::Io)?;
        tmp.persist(&self.path)
            .map_err(|e| SocialError::Io(e.error))?;
        Ok(())
    }

    /// Resolve an id or id prefix to the position of exactly one entry.
    ///
    /// Zero matches is [`SocialError::EntryNotFound`]; more than one is
    /// [`SocialError::AmbiguousId`]. The same rule applies to get, update and
    /// delete.
    fn resolve(&self, entries: &[Entry], needle: &str) -> Result<usize> {
        let matches: Vec<usize> = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.id == needle || e.id.starts_with(needle))
            .map(|(i, _)| i)
            .collect();
        match matches.len() {
            0 => Err(SocialError::EntryNotFound(needle.to_string())),
            1 => Ok(matches[0]),
            count => Err(SocialError::AmbiguousId {
                prefix: needle.to_string(),
                count,
            }),
        }
    }

    /// All entries, optionally filtered, in calendar order: scheduled entries
    /// first (by date ascending), then unscheduled (by creation time
    /// ascending). The sort is stable, so ties keep insertion order.
    pub fn list_entries(
        &self,
        platform: Option<Platform>,
        status: Option<Status>,
    ) -> Result<Vec<Entry>> {
        let mut entries = self.load()?;

        if let Some(platform) = platform {
            entries.retain(|e| e.platform == platform);
        }
        if let Some(status) = status {
            entries.retain(|e| e.status == status);
        }

        entries.sort_by(|a, b| match (a.scheduled_date, b.scheduled_date) {
            (Some(da), Some(db)) => da.cmp(&db),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.created_at.cmp(&b.created_at),
        });
        Ok(entries)
    }

    /// Look up one entry by full id or unique prefix.
    pub fn get_entry(&self, id: &str) -> Result<Entry> {
        let entries = self.load()?;
        let pos = self.resolve(&entries, id)?;
        Ok(entries[pos].clone())
    }

    /// Append an entry and persist. Uniqueness of the id is not checked; the
    /// id generation scheme is expected to provide it probabilistically.
    pub fn add_entry(&self, entry: Entry) -> Result<Entry> {
        let mut entries = self.load()?;
        entries.push(entry.clone());
        self.save(&entries)?;
        Ok(entry)
    }

    /// Overwrite the supplied fields of one entry and persist. `id` and
    /// `created_at` are never touched.
    pub fn update_entry(&self, id: &str, update: &EntryUpdate) -> Result<Entry> {
        let mut entries = self.load()?;
        let pos = self.resolve(&entries, id)?;
        {
            let entry = &mut entries[pos];
            if let Some(platform) = update.platform {
                entry.platform = platform;
            }
            if let Some(content) = &update.content {
                entry.content = content.clone();
            }
            if let Some(topic) = &update.topic {
                entry.topic = topic.clone();
            }
            if let Some(date) = update.scheduled_date {
                entry.scheduled_date = Some(date);
            }
            if let Some(status) = update.status {
                entry.status = status;
            }
        }
        let updated = entries[pos].clone();
        self.save(&entries)?;
        Ok(updated)
    }

    /// Remove one entry, persist the rest, and return the removed entry.
    pub fn delete_entry(&self, id: &str) -> Result<Entry> {
        let mut entries = self.load()?;
        let pos = self.resolve(&entries, id)?;
        let removed = entries.remove(pos);
        self.save(&entries)?;
        Ok(removed)
    }
}

/// Default per-user store location (`<data dir>/content.json`).
pub fn default_store_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("com", "social", "social")
        .ok_or_else(|| SocialError::Api("Could not determine a home directory".to_string()))?;
    Ok(dirs.data_dir().join("content.json"))
}

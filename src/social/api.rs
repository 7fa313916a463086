//! # API Facade
//!
//! Thin facade over the command layer: the single entry point UI clients use.
//! It dispatches and normalizes arguments but holds no business logic and
//! performs no terminal I/O.

use crate::commands;
use crate::error::Result;
use crate::model::{Entry, Platform, Status};
use crate::store::{ContentStore, EntryUpdate};
use chrono::NaiveDate;

pub struct SocialApi {
    store: ContentStore,
}

impl SocialApi {
    pub fn new(store: ContentStore) -> Self {
        Self { store }
    }

    pub fn add_entry(
        &self,
        platform: Platform,
        content: String,
        topic: String,
        scheduled_date: Option<NaiveDate>,
        status: Status,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&self.store, platform, content, topic, scheduled_date, status)
    }

    pub fn calendar(
        &self,
        platform: Option<Platform>,
        status: Option<Status>,
    ) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, platform, status)
    }

    pub fn get_entry(&self, id: &str) -> Result<Entry> {
        self.store.get_entry(id)
    }

    pub fn edit_entry(&self, id: &str, update: &EntryUpdate) -> Result<commands::CmdResult> {
        commands::edit::run(&self.store, id, update)
    }

    pub fn delete_entry(&self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&self.store, id)
    }

    pub fn platforms(&self) -> commands::CmdResult {
        commands::platforms::run()
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

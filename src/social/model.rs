use crate::error::SocialError;
use chrono::{DateTime, NaiveDate, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Target platform for a piece of content. Serialized as its lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Instagram,
    Linkedin,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Twitter => write!(f, "twitter"),
            Platform::Instagram => write!(f, "instagram"),
            Platform::Linkedin => write!(f, "linkedin"),
        }
    }
}

impl FromStr for Platform {
    type Err = SocialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "twitter" => Ok(Platform::Twitter),
            "instagram" => Ok(Platform::Instagram),
            "linkedin" => Ok(Platform::Linkedin),
            other => Err(SocialError::UnknownVariant {
                kind: "platform",
                value: other.to_string(),
            }),
        }
    }
}

/// Lifecycle status of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Draft,
    Scheduled,
    Published,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Draft => write!(f, "draft"),
            Status::Scheduled => write!(f, "scheduled"),
            Status::Published => write!(f, "published"),
        }
    }
}

impl FromStr for Status {
    type Err = SocialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Status::Draft),
            "scheduled" => Ok(Status::Scheduled),
            "published" => Ok(Status::Published),
            other => Err(SocialError::UnknownVariant {
                kind: "status",
                value: other.to_string(),
            }),
        }
    }
}

/// One piece of calendar content.
///
/// `id` and `created_at` are assigned by [`Entry::new`] and never change
/// afterwards; everything else is mutable through the store's update path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub platform: Platform,
    pub content: String,
    pub topic: String,
    pub created_at: DateTime<Utc>,
    pub scheduled_date: Option<NaiveDate>,
    pub status: Status,
}

impl Entry {
    pub fn new(
        platform: Platform,
        content: String,
        topic: String,
        scheduled_date: Option<NaiveDate>,
        status: Status,
    ) -> Self {
        Self {
            id: short_id(),
            platform,
            content,
            topic,
            created_at: Utc::now(),
            scheduled_date,
            status,
        }
    }
}

// Ids are the first 8 hex chars of a v4 UUID. Uniqueness is probabilistic;
// the store does not enforce it.
fn short_id() -> String {
    let full = Uuid::new_v4().simple().to_string();
    full[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_assigns_short_id_and_timestamp() {
        let entry = Entry::new(
            Platform::Twitter,
            "Hello".into(),
            "test".into(),
            None,
            Status::Draft,
        );
        assert_eq!(entry.id.len(), 8);
        assert!(entry.id.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(entry.scheduled_date.is_none());
    }

    #[test]
    fn serialization_roundtrip() {
        let entry = Entry::new(
            Platform::Linkedin,
            "Body text".into(),
            "AI trends".into(),
            Some(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()),
            Status::Scheduled,
        );
        let json = serde_json::to_string(&entry).unwrap();
        let parsed: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, parsed);
    }

    #[test]
    fn enums_use_canonical_strings() {
        let json = serde_json::to_string(&Platform::Linkedin).unwrap();
        assert_eq!(json, "\"linkedin\"");
        let json = serde_json::to_string(&Status::Published).unwrap();
        assert_eq!(json, "\"published\"");
    }

    #[test]
    fn scheduled_date_serializes_as_plain_date() {
        let mut entry = Entry::new(
            Platform::Twitter,
            "x".into(),
            "y".into(),
            None,
            Status::Draft,
        );
        entry.scheduled_date = Some(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["scheduled_date"], "2026-02-01");
    }

    #[test]
    fn unknown_platform_string_is_rejected() {
        let err = "mastodon".parse::<Platform>().unwrap_err();
        assert!(err.to_string().contains("mastodon"));
        assert!(serde_json::from_str::<Platform>("\"mastodon\"").is_err());
    }

    #[test]
    fn status_from_str_roundtrip() {
        for status in [Status::Draft, Status::Scheduled, Status::Published] {
            assert_eq!(status.to_string().parse::<Status>().unwrap(), status);
        }
    }
}

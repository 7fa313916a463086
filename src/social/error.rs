use thiserror::Error;

#[derive(Error, Debug)]
pub enum SocialError {
    #[error("No entry found with ID: {0}")]
    EntryNotFound(String),

    #[error("ID prefix '{prefix}' is ambiguous ({count} matches)")]
    AmbiguousId { prefix: String, count: usize },

    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Generation failed: {0}")]
    Generation(#[from] crate::generator::GeneratorError),

    #[error("{0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, SocialError>;

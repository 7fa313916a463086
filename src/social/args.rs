use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use social::model::{Platform, Status};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "social")]
#[command(about = "AI-powered social media content creation tool", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the content store file (default: per-user data dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate AI-powered content for a social media platform
    #[command(alias = "g")]
    Generate {
        /// Target platform
        #[arg(short, long)]
        platform: Platform,

        /// Content topic
        #[arg(short, long)]
        topic: String,

        /// Schedule date (YYYY-MM-DD)
        #[arg(short, long)]
        schedule: Option<NaiveDate>,

        /// Additional instructions for the generator
        #[arg(short, long)]
        extra: Option<String>,

        /// Print the content without saving it
        #[arg(long)]
        no_save: bool,
    },

    /// View and manage the content calendar
    #[command(alias = "cal")]
    Calendar {
        #[command(subcommand)]
        command: Option<CalendarCommands>,

        /// Only show entries for this platform
        #[arg(short, long)]
        platform: Option<Platform>,

        /// Only show entries with this status
        #[arg(long)]
        status: Option<Status>,

        /// Show the current week instead of the full table
        #[arg(short, long)]
        week: bool,
    },

    /// List supported platforms and their constraints
    Platforms,

    /// Edit an existing content entry
    Edit {
        /// Entry ID (or unique prefix)
        entry_id: String,

        /// New content text
        #[arg(short, long)]
        content: Option<String>,

        /// New schedule date (YYYY-MM-DD)
        #[arg(short, long)]
        schedule: Option<NaiveDate>,

        /// New status
        #[arg(long)]
        status: Option<Status>,

        /// Regenerate content using AI
        #[arg(short, long)]
        regenerate: bool,

        /// Feedback to steer regeneration
        #[arg(long, requires = "regenerate")]
        feedback: Option<String>,
    },

    /// Delete a content entry from the calendar
    #[command(alias = "rm")]
    Delete {
        /// Entry ID (or unique prefix)
        entry_id: String,

        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum CalendarCommands {
    /// Manually add content to the calendar
    Add {
        /// Target platform
        #[arg(short, long)]
        platform: Platform,

        /// Content text
        #[arg(short, long)]
        content: String,

        /// Topic
        #[arg(short, long)]
        topic: String,

        /// Schedule date (YYYY-MM-DD)
        #[arg(short, long)]
        schedule: Option<NaiveDate>,

        /// Initial status
        #[arg(long, default_value = "draft")]
        status: Status,
    },
}

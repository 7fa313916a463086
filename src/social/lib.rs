//! # Social Architecture
//!
//! Social is a content-calendar **library** with a CLI client on top. The CLI
//! binary is the only place that knows about stdout/stderr and exit codes;
//! everything from `api.rs` inward takes plain Rust arguments and returns
//! plain Rust types.
//!
//! ## Layers
//!
//! ```text
//! CLI (main.rs + args.rs)   argument parsing, printing, exit codes
//!          │
//!          ▼
//! API (api.rs)              thin facade, dispatches to commands
//!          │
//!          ▼
//! Commands (commands/*.rs)  business logic, returns CmdResult
//!          │
//!          ▼
//! Store (store/)            JSON-file persistence with atomic writes
//! ```
//!
//! The generator (`generator.rs`) sits beside the store: it is the single
//! network-bound component and is orchestrated from the CLI layer, never from
//! inside a command.
//!
//! ## Module Overview
//!
//! - [`model`]: Core data types (`Entry`, `Platform`, `Status`)
//! - [`store`]: The JSON-file-backed entry store
//! - [`platforms`]: Per-platform authoring profiles (length limits, tone)
//! - [`generator`]: Anthropic Messages API client for drafting content
//! - [`commands`]: Business logic for each CLI operation
//! - [`api`]: The facade the CLI talks to
//! - [`render`]: Calendar table / week view / detail rendering to strings
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod generator;
pub mod model;
pub mod platforms;
pub mod render;
pub mod store;

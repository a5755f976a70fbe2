//! # Layoutz Architecture
//!
//! Layoutz is a **UI-agnostic layout-mocking library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! The problem it solves is deliberately small: hold an editable mock of a
//! CRM record-detail page (sections of typed, hideable, orderable fields),
//! mutate it safely, and move it through a JSON serialized form. There is
//! no backend and nothing outlives the session except explicit exports.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, args.rs, wired by main.rs)                │
//! │  - Parses arguments, renders views, runs the shell          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (paths/labels → UUIDs)                 │
//! │  - Tracks the session dirty flag                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic per operation                        │
//! │  - Operates on Rust types, returns Result<CmdResult>        │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core Model (model.rs, document.rs) + Storage (store/)      │
//! │  - The section/field tree and its atomic mutations          │
//! │  - Abstract LayoutStore trait                               │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Index System
//!
//! Fields are addressed by stable UUID internally and by 1-based display
//! paths (`2.3`) or labels at the surface. The mapping lives in
//! [`index`] and is recomputed per command, so paths always describe the
//! layout as the user currently sees it. See index.rs for details.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, model, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! ## Invariants
//!
//! The document maintains two invariants through every mutation, and the
//! serialized form re-establishes them on import:
//! - sibling `order` values are always a dense `0..n-1` permutation
//! - ids are unique per document, with no reuse across deletions
//!
//! Operations are atomic: they fail before mutating, never halfway.
//!
//! ## Testing Strategy
//!
//! 1. **Model & commands**: thorough unit tests in each module. This is
//!    where the lion's share of testing lives.
//! 2. **API** (`api.rs`): dispatch and session-state tests against
//!    `InMemoryStore`.
//! 3. **CLI**: end-to-end tests under `tests/` drive the binary with
//!    `assert_cmd`, including piped shell sessions.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`model`]: Core data types (`Document`, `Section`, `Field`, `FieldType`)
//! - [`document`]: Mutation operations and the serialized form
//! - [`index`]: Display paths, selectors, and the hidden panel ranks
//! - [`session`]: The owned per-session document
//! - [`template`]: Built-in default layouts
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - [`cli`]: Rendering and the interactive shell for the binary

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod index;
pub mod model;
pub mod session;
pub mod store;
pub mod template;

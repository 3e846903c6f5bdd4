//! # dsa-viewer
//!
//! A terminal viewer for data structures and algorithms reference material.
//!
//! Content is organized as topic pages (binary search trees, linked lists,
//! searching, ...), each split into category tabs. A category lists tutorial
//! entries: a title, a difficulty badge and a short description, with a
//! solution that can be revealed on demand. A revealed solution shows code in
//! one or more languages and, where available, a step-by-step approach.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   view   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │ (mounted │    │(rendering)   │         │ │
//! │  └────┬────┘    │  state)  │    └─────────┘    └─────────┘ │
//! │       │         └──────────┘                                │
//! │       ▼                                                     │
//! │  ┌─────────┐    ┌──────────┐                                │
//! │  │ source  │───▶│ content  │◀── builtin | JSON file         │
//! │  │ (input) │    │(compile) │                                │
//! │  └─────────┘    └──────────┘                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`content`]**: Immutable descriptors, the JSON authoring format and the
//!   compile step that validates one into the other
//! - **[`source`]**: Content source abstraction ([`ContentSource`] trait) with
//!   built-in and file-polling implementations
//! - **[`view`]**: Per-page, per-entry and per-code-block interactive state
//! - **[`app`]**: Navigation between the index and a page, reloads and export
//! - **[`ui`]**: Terminal rendering using ratatui
//! - **[`config`]** and **[`logging`]**: Layered settings and file logging
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Browse the built-in topics
//! dsa-viewer
//!
//! # Open a page directly, reading content from a file
//! dsa-viewer --content tutorials.json --page bst
//!
//! # Check a content file without starting the TUI
//! dsa-viewer --content tutorials.json --validate --strict
//! ```
//!
//! ### As a library
//!
//! ```
//! use dsa_viewer::{App, BuiltinSource, Theme};
//!
//! let mut app = App::new(Box::new(BuiltinSource::new()), Theme::dark());
//! app.reload_content();
//! assert!(app.open_page("bst"));
//! app.toggle_solution();
//! ```

pub mod app;
pub mod config;
pub mod content;
pub mod events;
pub mod logging;
pub mod source;
pub mod ui;
pub mod view;

// Re-export main types for convenience
pub use app::{App, View};
pub use config::{Settings, ThemeChoice};
pub use content::{
    compile, CompileOptions, ContentError, Difficulty, PageDescriptor, RawSite, Site,
    TopicEntryDescriptor, ValidationReport, VariantSet,
};
pub use source::{BuiltinSource, ContentSource, FileSource};
pub use ui::Theme;
pub use view::{CodePresenter, SubTab, TopicEntry, TopicPage};

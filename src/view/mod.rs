//! Viewer state: the part of the UI that changes when keys are pressed.
//!
//! Each component owns its own selection state and nothing else; descriptors
//! are shared read-only via [`Arc`](std::sync::Arc).
//!
//! ```text
//! TopicPage ── active category ──▶ [TopicEntry]
//!                                     │ solution visible?
//!                                     │ sub-tab (Solution | Approach)
//!                                     ▼
//!                                  CodePresenter (mounted only on Solution)
//! ```
//!
//! Rendering lives in [`crate::ui`]; nothing here knows about the terminal.

pub mod code;
pub mod entry;
pub mod page;

pub use code::CodePresenter;
pub use entry::{EntryBody, SubTab, TopicEntry};
pub use page::TopicPage;

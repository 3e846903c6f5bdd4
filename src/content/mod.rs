//! Tutorial content: descriptor model, authoring format and compilation.
//!
//! ## Submodules
//!
//! - [`model`]: Immutable descriptors ([`Site`], [`PageDescriptor`], [`TopicEntryDescriptor`], ...)
//! - [`raw`]: The JSON authoring format ([`RawSite`]) and export back to it
//! - [`compile`](mod@compile): Validation and normalization from raw to model
//! - [`builtin`]: Compiled-in topic areas (BST, linked lists, searching)
//!
//! ## Data Flow
//!
//! ```text
//! RawSite (JSON file or builtin::raw_site())
//!        │
//!        ▼
//! compile()  ──▶ ValidationReport (errors fail, warnings are logged)
//!        │
//!        ▼
//! Site ──▶ Arc<PageDescriptor> ──▶ Arc<TopicEntryDescriptor>
//! ```

pub mod builtin;
pub mod compile;
pub mod error;
pub mod model;
pub mod raw;

pub use compile::{check, compile, CompileOptions, Compiled};
pub use error::{ContentError, ValidationReport};
pub use model::{
    Approach, CategoryDescriptor, ComplexityInfo, Difficulty, PageDescriptor, Site, Step,
    TopicEntryDescriptor, Variant, VariantSet,
};
pub use raw::{RawApproach, RawEntry, RawSite, RawStep};

//! Content source abstraction.
//!
//! The viewer does not care where tutorial content comes from, only that it
//! arrives compiled and validated. Sources hand over a fresh [`Site`] whenever
//! they have one and report load problems through [`ContentSource::error`].

mod builtin;
mod file;

pub use builtin::BuiltinSource;
pub use file::FileSource;

use std::fmt::Debug;

use crate::content::Site;

/// Trait for receiving tutorial content from various sources.
///
/// # Example
///
/// ```
/// use dsa_viewer::{BuiltinSource, ContentSource};
///
/// let mut source = BuiltinSource::new();
/// if let Some(site) = source.poll() {
///     println!("Got {} pages", site.pages.len());
/// }
/// ```
pub trait ContentSource: Send + Debug {
    /// Poll for new content.
    ///
    /// Returns `Some(site)` when content is new since the last poll, `None`
    /// otherwise. Must not block.
    fn poll(&mut self) -> Option<Site>;

    /// Human-readable description of the source, shown in the status bar.
    fn description(&self) -> &str;

    /// The error from the most recent load attempt, if it failed.
    fn error(&self) -> Option<&str>;
}

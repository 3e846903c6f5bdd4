//! File-based content source.
//!
//! Polls a JSON content file in the authoring format.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{info, warn};

use super::ContentSource;
use crate::content::{compile, CompileOptions, RawSite, Site};

/// A content source that reads tutorial content from a JSON file.
///
/// The source tracks the file's modification time and only returns new
/// content when it changes (in either direction, so a restored older copy
/// is picked up too), so authors can keep the viewer
/// open while editing. Content that fails to parse or validate is not
/// returned; the previous content stays on screen and the problem is
/// reported through [`ContentSource::error`].
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
    options: CompileOptions,
    last_error: Option<String>,
    last_modified: Option<SystemTime>,
    attempted: bool,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_options(path, CompileOptions::default())
    }

    pub fn with_options<P: AsRef<Path>>(path: P, options: CompileOptions) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self {
            path,
            description,
            options,
            last_error: None,
            last_modified: None,
            attempted: false,
        }
    }

    /// Returns the path being watched.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn get_modified_time(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).ok()?.modified().ok()
    }

    /// Read, parse and compile the file.
    fn load(&mut self) -> Option<Site> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                self.last_error = Some(format!("Read error: {}", e));
                return None;
            }
        };

        let raw = match RawSite::from_json(&content) {
            Ok(raw) => raw,
            Err(e) => {
                self.last_error = Some(format!("Parse error: {}", e));
                return None;
            }
        };

        match compile(&raw, self.options) {
            Ok(compiled) => {
                self.last_error = None;
                info!(
                    path = %self.path.display(),
                    pages = compiled.site.pages.len(),
                    warnings = compiled.warnings.len(),
                    "Loaded content file"
                );
                Some(compiled.site)
            }
            Err(e) => {
                self.last_error = Some(format!("Invalid content: {}", e));
                None
            }
        }
    }
}

impl ContentSource for FileSource {
    fn poll(&mut self) -> Option<Site> {
        let current_modified = self.get_modified_time();

        let file_changed = match (&self.last_modified, &current_modified) {
            (None, _) => !self.attempted || current_modified.is_some(),
            (Some(_), None) => false, // File disappeared, keep what we have
            (Some(last), Some(current)) => current != last,
        };

        if !file_changed {
            return None;
        }

        self.attempted = true;
        // Remember the mtime even on failure so a broken file is not re-read
        // every tick; the next save retries.
        self.last_modified = current_modified;
        let site = self.load();
        if let Some(ref err) = self.last_error {
            warn!(path = %self.path.display(), "{}", err);
        }
        site
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

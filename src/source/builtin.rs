//! Compiled-in content source.

use tracing::{error, info};

use super::ContentSource;
use crate::content::{builtin, compile, CompileOptions, Site};

/// Serves the built-in topic areas exactly once.
#[derive(Debug, Default)]
pub struct BuiltinSource {
    options: CompileOptions,
    delivered: bool,
    last_error: Option<String>,
}

impl BuiltinSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CompileOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }
}

impl ContentSource for BuiltinSource {
    fn poll(&mut self) -> Option<Site> {
        if self.delivered {
            return None;
        }
        self.delivered = true;

        match compile(&builtin::raw_site(), self.options) {
            Ok(compiled) => {
                info!(pages = compiled.site.pages.len(), "Loaded built-in content");
                Some(compiled.site)
            }
            Err(e) => {
                error!("Built-in content failed to compile: {}", e);
                self.last_error = Some(format!("Invalid content: {}", e));
                None
            }
        }
    }

    fn description(&self) -> &str {
        "built-in"
    }

    fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_source_delivers_once() {
        let mut source = BuiltinSource::new();
        let site = source.poll();
        assert!(site.is_some());
        assert_eq!(site.unwrap().pages.len(), 3);
        assert!(source.poll().is_none());
        assert!(source.error().is_none());
        assert_eq!(source.description(), "built-in");
    }
}

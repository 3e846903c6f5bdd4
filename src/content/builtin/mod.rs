//! Compiled-in tutorial content.
//!
//! Each topic area lives in its own submodule and is written against the
//! authoring types, so it goes through exactly the same compile step as a
//! content file does.

mod bst;
mod linked_list;
mod searching;

use super::raw::{RawCategory, RawEntry, RawPage, RawSite};

/// The full built-in site, in index order.
pub fn raw_site() -> RawSite {
    RawSite {
        pages: vec![bst::page(), linked_list::page(), searching::page()],
    }
}

fn topic_page(id: &str, title: &str, subtitle: &str, categories: Vec<RawCategory>) -> RawPage {
    RawPage {
        id: id.to_string(),
        title: title.to_string(),
        subtitle: Some(subtitle.to_string()),
        categories,
    }
}

fn category(id: &str, label: &str, entries: Vec<RawEntry>) -> RawCategory {
    RawCategory {
        id: id.to_string(),
        label: label.to_string(),
        entries,
    }
}

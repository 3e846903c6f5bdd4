//! Validation and normalization of authored content.
//!
//! [`compile`] walks a [`RawSite`] once, reporting every defect it finds and
//! building the descriptor model alongside. Rendering code only ever sees the
//! result of a successful compile, so it can assume well-formed input.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

use super::error::{ContentError, ValidationReport};
use super::model::{
    Approach, CategoryDescriptor, ComplexityInfo, Difficulty, PageDescriptor, Site, Step,
    TopicEntryDescriptor, VariantSet, VariantSetError,
};
use super::raw::{RawApproach, RawCategory, RawEntry, RawPage, RawSite, DEFAULT_SOLUTION_LABEL};

/// Knobs for [`compile`] and [`check`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Treat unrecognized difficulty labels as errors instead of warnings.
    pub strict: bool,
}

/// A successfully compiled site plus any warnings raised on the way.
#[derive(Debug, Clone)]
pub struct Compiled {
    pub site: Site,
    pub warnings: Vec<ContentError>,
}

/// Validate and normalize authored content.
pub fn compile(raw: &RawSite, options: CompileOptions) -> Result<Compiled, ContentError> {
    let (site, report) = build(raw, options);
    let warnings = report.into_result()?;
    for warning in &warnings {
        warn!("{}", warning);
    }
    debug!(
        pages = site.pages.len(),
        entries = site.pages.iter().map(|p| p.entry_count()).sum::<usize>(),
        "Compiled content"
    );
    Ok(Compiled { site, warnings })
}

/// Run validation only and return the full report.
pub fn check(raw: &RawSite, options: CompileOptions) -> ValidationReport {
    build(raw, options).1
}

fn build(raw: &RawSite, options: CompileOptions) -> (Site, ValidationReport) {
    let mut report = ValidationReport::default();

    if raw.pages.is_empty() {
        report.error(ContentError::EmptySite);
    }

    let mut seen = HashSet::new();
    let mut pages = Vec::with_capacity(raw.pages.len());
    for page in &raw.pages {
        if !seen.insert(page.id.as_str()) {
            report.error(ContentError::DuplicatePageId {
                path: page.id.clone(),
                id: page.id.clone(),
            });
        }
        pages.push(Arc::new(build_page(page, options, &mut report)));
    }

    (Site { pages }, report)
}

fn build_page(raw: &RawPage, options: CompileOptions, report: &mut ValidationReport) -> PageDescriptor {
    if raw.categories.is_empty() {
        report.error(ContentError::EmptyPage {
            path: raw.id.clone(),
        });
    }

    let mut seen = HashSet::new();
    let mut categories = Vec::with_capacity(raw.categories.len());
    for category in &raw.categories {
        let path = format!("{}/{}", raw.id, category.id);
        if !seen.insert(category.id.as_str()) {
            report.error(ContentError::DuplicateCategoryId {
                path: path.clone(),
                id: category.id.clone(),
            });
        }
        categories.push(build_category(category, &path, options, report));
    }

    PageDescriptor {
        id: raw.id.clone(),
        title: raw.title.clone(),
        subtitle: raw.subtitle.clone(),
        categories,
    }
}

fn build_category(
    raw: &RawCategory,
    path: &str,
    options: CompileOptions,
    report: &mut ValidationReport,
) -> CategoryDescriptor {
    if raw.entries.is_empty() {
        report.error(ContentError::EmptyCategory {
            path: path.to_string(),
        });
    }

    let entries = raw
        .entries
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            let entry_path = format!("{}#{}", path, i + 1);
            build_entry(entry, &entry_path, options, report).map(Arc::new)
        })
        .collect();

    CategoryDescriptor {
        id: raw.id.clone(),
        label: raw.label.clone(),
        entries,
    }
}

/// Returns `None` when the entry cannot be represented at all; the reason is
/// already in `report`.
fn build_entry(
    raw: &RawEntry,
    path: &str,
    options: CompileOptions,
    report: &mut ValidationReport,
) -> Option<TopicEntryDescriptor> {
    let difficulty = Difficulty::parse(&raw.difficulty);
    if !difficulty.is_recognized() {
        let problem = ContentError::UnrecognizedDifficulty {
            path: path.to_string(),
            label: raw.difficulty.clone(),
        };
        if options.strict {
            report.error(problem);
        } else {
            report.warning(problem);
        }
    }

    let variants = normalize_variants(raw, path, report)?;

    if let Some(label) = &raw.default_variant {
        if !variants.contains(label) {
            report.error(ContentError::UnknownDefaultVariant {
                path: path.to_string(),
                label: label.clone(),
            });
            return None;
        }
    }

    Some(TopicEntryDescriptor {
        title: raw.title.clone(),
        difficulty,
        description: raw.description.clone(),
        variants,
        default_variant: raw.default_variant.clone(),
        explanation: raw.explanation.clone(),
        approach: raw.approach.as_ref().map(build_approach),
    })
}

/// Fold `solution` / `solutions` into one [`VariantSet`].
fn normalize_variants(raw: &RawEntry, path: &str, report: &mut ValidationReport) -> Option<VariantSet> {
    let pairs: Vec<(String, String)> = match (&raw.solution, &raw.solutions) {
        (Some(_), Some(_)) => {
            report.error(ContentError::AmbiguousSolution {
                path: path.to_string(),
            });
            return None;
        }
        (Some(code), None) => {
            let label = raw
                .language
                .clone()
                .unwrap_or_else(|| DEFAULT_SOLUTION_LABEL.to_string());
            vec![(label, code.clone())]
        }
        (None, Some(solutions)) => solutions.0.clone(),
        (None, None) => Vec::new(),
    };

    match VariantSet::from_pairs(pairs) {
        Ok(set) => Some(set),
        Err(VariantSetError::Empty) => {
            report.error(ContentError::EmptyVariantSet {
                path: path.to_string(),
            });
            None
        }
        Err(VariantSetError::DuplicateLabel(label)) => {
            report.error(ContentError::DuplicateVariantLabel {
                path: path.to_string(),
                label,
            });
            None
        }
    }
}

fn build_approach(raw: &RawApproach) -> Approach {
    Approach {
        steps: raw
            .steps
            .iter()
            .map(|step| {
                let mut keywords: Vec<String> = Vec::with_capacity(step.keywords.len());
                for keyword in &step.keywords {
                    if !keywords.contains(keyword) {
                        keywords.push(keyword.clone());
                    }
                }
                Step {
                    title: step.title.clone(),
                    description: step.description.clone(),
                    details: step.details.clone(),
                    keywords,
                }
            })
            .collect(),
        pattern: raw.pattern.clone(),
        complexity: raw.complexity.as_ref().map(|c| ComplexityInfo {
            time: c.time.clone(),
            space: c.space.clone(),
        }),
    }
}

//! Path planning.
//! Folds the feature table for a set of options into the directories to create
//! and the files to write, without touching the destination.

use std::path::{Path, PathBuf};

use log::debug;

use crate::context::AppContext;
use crate::error::Result;
use crate::features::Selection;
use crate::manifest::{Manifest, MANIFEST_FILE};
use crate::options::Options;
use crate::source::TemplateSource;

/// Template rendered into the application entry point.
pub const ENTRY_TEMPLATE: &str = "js/app.js.j2";
pub const ENTRY_FILE: &str = "app.js";
pub const ENV_FILE: &str = ".env";
/// Placeholder environment written for database-backed applications.
pub const ENV_CONTENTS: &str =
    "PORT = 3010\n\nDB_HOST= \nDB_USER= \nDB_PASSWORD= \nDB_PORT= \nDB_DATABASE=";

/// Where the bytes of a planned file come from.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// Template copied byte for byte.
    Copy(String),
    /// Template rendered against `context`.
    Render {
        template: String,
        context: serde_json::Value,
    },
    /// Text produced during planning.
    Contents(String),
}

/// One file to write.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanEntry {
    pub source: Source,
    pub target: PathBuf,
}

/// Everything a generation pass will create, in creation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub directories: Vec<PathBuf>,
    pub files: Vec<PlanEntry>,
    pub manifest: Manifest,
    pub context: AppContext,
}

impl Plan {
    /// Targets of all planned files.
    pub fn targets(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(|entry| entry.target.as_path())
    }
}

fn expand(
    selection: &Selection,
    root: &Path,
    templates: &dyn TemplateSource,
) -> Result<Vec<PlanEntry>> {
    match *selection {
        Selection::Glob { dir, pattern, to } => {
            let target_dir = root.join(to);
            Ok(templates
                .list(dir, pattern)?
                .into_iter()
                .map(|logical| {
                    let name = logical.rsplit('/').next().unwrap_or(&logical).to_string();
                    PlanEntry {
                        target: target_dir.join(name),
                        source: Source::Copy(logical),
                    }
                })
                .collect())
        }
        Selection::File { from, to } => Ok(vec![PlanEntry {
            source: Source::Copy(from.to_string()),
            target: root.join(to),
        }]),
    }
}

/// Plans the application described by `options`.
///
/// Identical options over an unchanged template tree always produce the same
/// plan. Directories are listed before files and every file's parent is either
/// the destination or one of the planned directories.
///
/// # Errors
/// * `Error::TemplateReadError` if a selected template directory is missing
/// * `Error::JsonError` if the manifest cannot be serialized
pub fn plan(options: &Options, templates: &dyn TemplateSource) -> Result<Plan> {
    let root = options.destination.as_path();
    debug!("Planning '{}' in {}", options.app_name, root.display());

    let mut directories = Vec::new();
    if root != Path::new(".") {
        directories.push(root.to_path_buf());
    }
    let mut files = Vec::new();
    let mut manifest = Manifest::new(options.app_name.as_str());
    let mut context = AppContext::default();

    for feature in options.features() {
        directories.extend(feature.directories.iter().map(|dir| root.join(dir)));
        for selection in feature.files {
            files.extend(expand(selection, root, templates)?);
        }
        for (name, version) in feature.dependencies {
            manifest.add_dependency(*name, *version);
        }
        if feature.env_file {
            files.push(PlanEntry {
                source: Source::Contents(ENV_CONTENTS.to_string()),
                target: root.join(ENV_FILE),
            });
        }
        context = context.apply(feature);
    }

    files.push(PlanEntry {
        source: Source::Render {
            template: ENTRY_TEMPLATE.to_string(),
            context: context.to_value(),
        },
        target: root.join(ENTRY_FILE),
    });
    files.push(PlanEntry {
        source: Source::Contents(manifest.to_json()?),
        target: root.join(MANIFEST_FILE),
    });

    debug!(
        "Planned {} directories and {} files",
        directories.len(),
        files.len()
    );
    Ok(Plan {
        directories,
        files,
        manifest,
        context,
    })
}

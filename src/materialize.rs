//! Turns a plan into files on disk.
//! Directories are created first, then every planned file is copied, rendered
//! or written. Nothing is rolled back on failure.

use std::fs;
use std::path::{Path, MAIN_SEPARATOR};

use log::debug;

use crate::error::{Error, Result};
use crate::plan::{Plan, PlanEntry, Source};
use crate::renderer::TemplateRenderer;
use crate::source::TemplateSource;

fn report_created(display: &str) {
    println!("   \x1b[36mcreate\x1b[0m : {display}");
}

fn filesystem_error(path: &Path, source: std::io::Error) -> Error {
    Error::FilesystemError {
        path: path.display().to_string(),
        source,
    }
}

#[cfg(unix)]
fn create_dir_all(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o755).create(path)
}

#[cfg(not(unix))]
fn create_dir_all(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}

/// Creates every directory and its missing ancestors.
///
/// Existing directories are left untouched, so running this twice is a no-op.
///
/// # Errors
/// * `Error::FilesystemError` if a non-directory occupies a path or creation is denied
pub fn ensure_directories<P: AsRef<Path>>(directories: &[P]) -> Result<()> {
    for dir in directories {
        let dir = dir.as_ref();
        create_dir_all(dir).map_err(|e| filesystem_error(dir, e))?;
        debug!("Ensured directory {}", dir.display());
        report_created(&format!("{}{}", dir.display(), MAIN_SEPARATOR));
    }
    Ok(())
}

/// Writes one planned file.
pub fn write_entry(
    entry: &PlanEntry,
    templates: &dyn TemplateSource,
    renderer: &dyn TemplateRenderer,
) -> Result<()> {
    let target = entry.target.as_path();
    let bytes = match &entry.source {
        Source::Copy(logical) => {
            debug!("Copying {} to {}", logical, target.display());
            templates.read(logical)?
        }
        Source::Render { template, context } => {
            debug!("Rendering {} to {}", template, target.display());
            let text = templates.read_to_string(template)?;
            renderer.render(&text, context)?.into_bytes()
        }
        Source::Contents(contents) => {
            debug!("Writing {}", target.display());
            contents.clone().into_bytes()
        }
    };

    fs::write(target, bytes).map_err(|e| filesystem_error(target, e))?;
    report_created(&target.display().to_string());
    Ok(())
}

/// Writes every planned file in order.
///
/// # Errors
/// Stops at the first failing entry; files written before it remain on disk.
pub fn write_files(
    files: &[PlanEntry],
    templates: &dyn TemplateSource,
    renderer: &dyn TemplateRenderer,
) -> Result<()> {
    for entry in files {
        write_entry(entry, templates, renderer)?;
    }
    Ok(())
}

/// Materializes a whole plan: all directories, then all files.
pub fn materialize(
    plan: &Plan,
    templates: &dyn TemplateSource,
    renderer: &dyn TemplateRenderer,
) -> Result<()> {
    ensure_directories(&plan.directories)?;
    write_files(&plan.files, templates, renderer)
}

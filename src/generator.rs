//! Generation pass orchestration.
//! Decides whether the destination may be written, then plans and
//! materializes the application.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::materialize::materialize;
use crate::options::Options;
use crate::plan::{plan, Plan};
use crate::prompt::Prompter;
use crate::renderer::TemplateRenderer;
use crate::source::TemplateSource;

/// Returns true when `path` has no entries. A missing directory is empty.
pub fn is_empty_dir<P: AsRef<Path>>(path: P) -> Result<bool> {
    match fs::read_dir(path.as_ref()) {
        Ok(mut entries) => Ok(entries.next().is_none()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(true),
        Err(e) => Err(Error::FilesystemError {
            path: path.as_ref().display().to_string(),
            source: e,
        }),
    }
}

/// Checks that generation may write into `destination`.
///
/// # Errors
/// * `Error::Aborted` if the destination has entries, `force` is off and the
///   operator declines
pub fn confirm_destination<P: AsRef<Path>>(
    destination: P,
    force: bool,
    prompter: &dyn Prompter,
) -> Result<()> {
    if force || is_empty_dir(&destination)? {
        return Ok(());
    }
    debug!("{} is not empty", destination.as_ref().display());
    if prompter.confirm("destination is not empty, continue?")? {
        Ok(())
    } else {
        Err(Error::Aborted)
    }
}

/// Plans the application and writes it to disk.
pub fn generate(
    options: &Options,
    templates: &dyn TemplateSource,
    renderer: &dyn TemplateRenderer,
) -> Result<Plan> {
    let plan = plan(options, templates)?;
    println!();
    materialize(&plan, templates, renderer)?;
    info!(
        "Generated '{}' ({} files)",
        options.app_name,
        plan.files.len()
    );
    Ok(plan)
}

/// Shell commands that start the generated application.
pub fn next_steps(options: &Options) -> Vec<String> {
    let prompt = if cfg!(windows) { ">" } else { "$" };
    let mut lines = Vec::new();

    if options.destination != Path::new(".") {
        lines.push("change directory:".to_string());
        lines.push(format!(
            "  {prompt} cd {}",
            options.destination.display()
        ));
    }
    lines.push("install dependencies:".to_string());
    lines.push(format!("  {prompt} npm install"));
    lines.push("run the app:".to_string());
    if cfg!(windows) {
        lines.push(format!(
            "  {prompt} SET DEBUG={}:* & npm start",
            options.app_name
        ));
    } else {
        lines.push(format!("  {prompt} DEBUG={}:* npm start", options.app_name));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::FixedPrompter;
    use tempfile::TempDir;

    #[test]
    fn test_is_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        assert!(is_empty_dir(temp_dir.path()).unwrap());
        assert!(is_empty_dir(temp_dir.path().join("missing")).unwrap());

        fs::write(temp_dir.path().join("README.md"), "").unwrap();
        assert!(!is_empty_dir(temp_dir.path()).unwrap());
    }

    #[test]
    fn test_confirm_destination() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("index.js"), "").unwrap();

        assert!(confirm_destination(temp_dir.path(), true, &FixedPrompter(false)).is_ok());
        assert!(confirm_destination(temp_dir.path(), false, &FixedPrompter(true)).is_ok());
        assert!(matches!(
            confirm_destination(temp_dir.path(), false, &FixedPrompter(false)),
            Err(Error::Aborted)
        ));
        assert!(confirm_destination(temp_dir.path().join("new"), false, &FixedPrompter(false)).is_ok());
    }

    #[cfg(not(windows))]
    #[test]
    fn test_next_steps() {
        let steps = next_steps(&Options::new("shop"));
        assert_eq!(steps[1], "  $ cd shop");
        assert_eq!(steps.last().unwrap(), "  $ DEBUG=shop:* npm start");

        let here = next_steps(&Options {
            app_name: "here".to_string(),
            ..Options::new(".")
        });
        assert_eq!(here[0], "install dependencies:");
    }
}

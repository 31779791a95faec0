//! Command-line interface implementation for raygen.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use log::debug;
use std::path::PathBuf;

use crate::error::Result;

/// Command-line arguments structure for raygen.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "raygen: generate an express web application skeleton",
    long_about = None
)]
pub struct Args {
    /// Directory where the application will be created
    #[arg(value_name = "DIR", default_value = ".")]
    pub destination: PathBuf,

    /// Add stylesheet <ENGINE> support (less|stylus|compass|sass), defaults to plain css
    #[arg(short, long, value_name = "ENGINE")]
    pub css: Option<String>,

    /// Add view <ENGINE> support (ejs|dust), defaults to ejs
    #[arg(short, long, value_name = "ENGINE", conflicts_with = "no_view")]
    pub view: Option<String>,

    /// Use static html instead of a view engine
    #[arg(long)]
    pub no_view: bool,

    /// Add ejs engine support (renamed to --view=ejs)
    #[arg(short, long, hide = true)]
    pub ejs: bool,

    /// Add <DATABASE> support (mysql|mongo)
    #[arg(short, long, value_name = "DATABASE")]
    pub db: Option<String>,

    /// Add user authentication models when set to "yes"
    #[arg(short, long, value_name = "yes")]
    pub auth: Option<String>,

    /// Add .gitignore
    #[arg(long)]
    pub git: bool,

    /// Force on non-empty directory
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose logging output
    #[arg(long)]
    pub verbose: bool,

    /// Directory holding the application templates
    #[arg(long = "templates", value_name = "DIR", env = "RAYGEN_TEMPLATES")]
    pub template_dir: Option<PathBuf>,
}

/// Parses command line arguments and returns the Args structure.
///
/// Prints the help text followed by the error and exits with status 1 on a
/// usage error. Help and version requests keep clap's handling.
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                report_usage();
                eprintln!();
                eprint!("{}", e.render());
                std::process::exit(1);
            }
        },
    }
}

/// Prints the help text to stdout.
///
/// # Errors
/// * `Error::IoError` if stdout cannot be written
pub fn print_usage() -> Result<()> {
    Args::command()
        .help_template(
            r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
        )
        .print_help()?;
    Ok(())
}

/// Prints the help text ahead of a usage error, logging write failures.
pub fn report_usage() {
    if let Err(err) = print_usage() {
        debug!("Could not print usage: {err}");
    }
}

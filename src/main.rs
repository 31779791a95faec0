//! raygen's main application entry point and orchestration logic.
//! Handles command-line argument parsing, the destination safety check,
//! and the generation pass.

use log::debug;
use raygen::{
    cli::{get_args, report_usage, Args},
    error::{default_error_handler, Error, Result},
    generator::{confirm_destination, generate, next_steps},
    logger::init_logger,
    options::Options,
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
    source::DirectorySource,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        if let Error::UsageError(_) = err {
            report_usage();
        }
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Normalizes arguments into the option model
/// 2. Confirms writing into a non-empty destination
/// 3. Plans and materializes the application
/// 4. Prints the commands that start it
fn run(args: Args) -> Result<()> {
    let options = Options::from_args(&args)?;
    let templates = match &args.template_dir {
        Some(dir) => DirectorySource::new(dir),
        None => DirectorySource::bundled(),
    };
    debug!("Using templates from {}", templates.root().display());
    let renderer = MiniJinjaRenderer::new();
    let prompt = DialoguerPrompter::new();

    confirm_destination(&options.destination, options.force, &prompt)?;
    generate(&options, &templates, &renderer)?;

    println!();
    for line in next_steps(&options) {
        println!("   {line}");
    }
    println!();
    Ok(())
}

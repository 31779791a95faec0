//! raygen generates the skeleton of an express web application.
//! It turns a set of feature choices into a directory tree populated from
//! bundled templates, a package manifest and a rendered entry point.

/// Command-line interface module for the raygen application
pub mod cli;

/// Render context for the generated entry file
pub mod context;

/// Error types and handling for the raygen application
pub mod error;

/// Declarative mapping from option values to generated content
pub mod features;

/// Generation pass orchestration
pub mod generator;

pub mod logger;

/// Package manifest builder
pub mod manifest;

/// Directory and file creation
pub mod materialize;

/// Option model and validation
pub mod options;

/// Planning of directories and files for a set of options
pub mod plan;

/// User input and interaction handling
pub mod prompt;

/// Template rendering functionality
pub mod renderer;

/// Access to the template tree
pub mod source;

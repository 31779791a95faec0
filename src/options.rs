//! Option model for a generation pass.
//! Normalizes parsed command-line arguments into a validated set of
//! feature choices, rejecting missing or unknown option values.

use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;
use std::sync::LazyLock;

use log::warn;
use regex::Regex;

use crate::cli::Args;
use crate::error::{Error, Result};

/// Name used when the destination basename sanitizes to nothing.
pub const DEFAULT_APP_NAME: &str = "hello-world";

static INVALID_NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9.-]+").unwrap());
static NAME_EDGES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-_.]+|-+$").unwrap());

/// Stylesheet engine of the generated application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CssEngine {
    #[default]
    Plain,
    Less,
    Stylus,
    Compass,
    Sass,
}

/// View engine of the generated application. `None` serves static HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewEngine {
    None,
    #[default]
    Ejs,
    Dust,
}

/// Database backend of the generated application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Database {
    #[default]
    None,
    Mysql,
    Mongo,
}

impl FromStr for CssEngine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "css" | "plain" => Ok(Self::Plain),
            "less" => Ok(Self::Less),
            "stylus" => Ok(Self::Stylus),
            "compass" => Ok(Self::Compass),
            "sass" => Ok(Self::Sass),
            other => Err(unknown_value("-c, --css <engine>", other, "less|stylus|compass|sass")),
        }
    }
}

impl FromStr for ViewEngine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(Self::None),
            "ejs" => Ok(Self::Ejs),
            "dust" => Ok(Self::Dust),
            other => Err(unknown_value("-v, --view <engine>", other, "ejs|dust")),
        }
    }
}

impl FromStr for Database {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mysql" => Ok(Self::Mysql),
            "mongo" => Ok(Self::Mongo),
            other => Err(unknown_value("-d, --db <database>", other, "mysql|mongo")),
        }
    }
}

impl fmt::Display for CssEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Plain => "css",
            Self::Less => "less",
            Self::Stylus => "stylus",
            Self::Compass => "compass",
            Self::Sass => "sass",
        };
        f.write_str(name)
    }
}

impl fmt::Display for ViewEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Ejs => "ejs",
            Self::Dust => "dust",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Mysql => "mysql",
            Self::Mongo => "mongo",
        };
        f.write_str(name)
    }
}

fn unknown_value(option: &str, value: &str, accepted: &str) -> Error {
    Error::UsageError(format!(
        "option `{option}' does not accept `{value}' (expected {accepted})"
    ))
}

fn missing_value(option: &str) -> Error {
    Error::UsageError(format!("option `{option}' argument missing"))
}

/// Parses an optional string flag, treating an empty value as a usage error.
fn parse_flag<T: FromStr<Err = Error>>(value: Option<&str>, option: &str) -> Result<Option<T>> {
    match value {
        None => Ok(None),
        Some("") => Err(missing_value(option)),
        Some(v) => v.parse().map(Some),
    }
}

/// Everything a generation pass needs to know about the application to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub destination: PathBuf,
    pub app_name: String,
    pub css: CssEngine,
    pub view: ViewEngine,
    pub database: Database,
    pub auth: bool,
    pub git: bool,
    pub force: bool,
}

impl Options {
    /// Default options for `destination`: plain css, ejs views, no database,
    /// no authentication and no `.gitignore`.
    pub fn new<P: AsRef<Path>>(destination: P) -> Self {
        let destination = destination.as_ref().to_path_buf();
        let app_name = create_app_name(&destination);
        Self {
            destination,
            app_name,
            css: CssEngine::default(),
            view: ViewEngine::default(),
            database: Database::default(),
            auth: false,
            git: false,
            force: false,
        }
    }

    /// Validates and normalizes parsed command-line arguments.
    ///
    /// # Errors
    /// * `Error::UsageError` if a string option was given an empty or unknown value
    pub fn from_args(args: &Args) -> Result<Self> {
        let css: CssEngine =
            parse_flag(args.css.as_deref(), "-c, --css <engine>")?.unwrap_or_default();
        let database: Database =
            parse_flag(args.db.as_deref(), "-d, --db <database>")?.unwrap_or_default();
        let view: Option<ViewEngine> = parse_flag(args.view.as_deref(), "-v, --view <engine>")?;

        let auth = match args.auth.as_deref() {
            Some("") => return Err(missing_value("-a, --auth <yes>")),
            Some(value) => value == "yes",
            None => false,
        };

        let view = if args.no_view {
            ViewEngine::None
        } else if let Some(view) = view {
            view
        } else if args.ejs {
            warn!("option `--ejs' has been renamed to `--view=ejs'");
            ViewEngine::Ejs
        } else {
            warn!(
                "the default view engine will not be ejs in future releases, \
                 use `--view=ejs' or `--help' for additional options"
            );
            ViewEngine::Ejs
        };

        Ok(Self {
            css,
            view,
            database,
            auth,
            git: args.git,
            force: args.force,
            ..Self::new(&args.destination)
        })
    }
}

/// Derives a package name from the destination's basename.
///
/// Runs of characters outside `[A-Za-z0-9.-]` collapse to `-`, leading
/// separators and trailing dashes are stripped and the result is lower-cased.
/// Falls back to [`DEFAULT_APP_NAME`] when nothing remains.
pub fn create_app_name<P: AsRef<Path>>(destination: P) -> String {
    let absolute = std::path::absolute(destination.as_ref())
        .unwrap_or_else(|_| destination.as_ref().to_path_buf());
    let resolved = normalize(&absolute);
    let basename = resolved
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let name = sanitize_app_name(&basename);
    if name.is_empty() {
        DEFAULT_APP_NAME.to_string()
    } else {
        name
    }
}

/// Lexically resolves `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Sanitizes a raw basename into package-name form without applying the fallback.
pub fn sanitize_app_name(basename: &str) -> String {
    let replaced = INVALID_NAME_CHARS.replace_all(basename, "-");
    NAME_EDGES.replace_all(&replaced, "").to_lowercase()
}

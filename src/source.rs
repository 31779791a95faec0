//! Read-only access to the application templates.
//! Templates are addressed by logical, `/`-separated paths relative to the
//! template root and are never modified by the generator.

use std::fs;
use std::path::{Path, PathBuf};

use globset::Glob;
use log::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Template tree shipped with the crate.
pub const BUNDLED_TEMPLATES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");

/// Catalog of template files.
pub trait TemplateSource {
    /// Reads the template at `logical` as raw bytes.
    fn read(&self, logical: &str) -> Result<Vec<u8>>;

    /// Lists the files directly inside `dir` whose file name matches the glob
    /// `pattern`, as logical paths sorted by file name.
    fn list(&self, dir: &str, pattern: &str) -> Result<Vec<String>>;

    /// Reads the template at `logical` as UTF-8 text.
    fn read_to_string(&self, logical: &str) -> Result<String> {
        let bytes = self.read(logical)?;
        String::from_utf8(bytes).map_err(|e| Error::TemplateReadError {
            path: logical.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })
    }
}

/// Template source backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Source over the templates bundled with raygen.
    pub fn bundled() -> Self {
        Self::new(BUNDLED_TEMPLATES)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, logical: &str) -> PathBuf {
        logical
            .split('/')
            .filter(|part| !part.is_empty())
            .fold(self.root.clone(), |path, part| path.join(part))
    }
}

impl TemplateSource for DirectorySource {
    fn read(&self, logical: &str) -> Result<Vec<u8>> {
        let path = self.resolve(logical);
        debug!("Reading template {}", path.display());
        fs::read(&path).map_err(|source| Error::TemplateReadError {
            path: logical.to_string(),
            source,
        })
    }

    fn list(&self, dir: &str, pattern: &str) -> Result<Vec<String>> {
        let matcher = Glob::new(pattern)?.compile_matcher();
        let mut names = Vec::new();

        for entry in WalkDir::new(self.resolve(dir))
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| Error::TemplateReadError {
                path: dir.to_string(),
                source: e.into(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if matcher.is_match(entry.file_name()) {
                let name = entry.file_name().to_string_lossy();
                names.push(format!("{}/{}", dir.trim_end_matches('/'), name));
            }
        }

        debug!("Template pattern {dir}/{pattern} matched {} file(s)", names.len());
        Ok(names)
    }
}

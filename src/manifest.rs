//! Package manifest (`package.json`) of the generated application.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Result;

pub const MANIFEST_FILE: &str = "package.json";
pub const INITIAL_VERSION: &str = "0.0.0";
pub const START_SCRIPT: &str = "nodemon app.js";

#[derive(Debug, Serialize)]
struct Scripts<'a> {
    start: &'a str,
}

#[derive(Debug, Serialize)]
struct Document<'a> {
    name: &'a str,
    version: &'a str,
    private: bool,
    scripts: Scripts<'a>,
    dependencies: IndexMap<String, String>,
}

/// Accumulates dependencies as features are selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    name: String,
    dependencies: IndexMap<String, String>,
}

impl Manifest {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            dependencies: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds or replaces the version constraint for `name`. The last call wins.
    pub fn add_dependency<N: Into<String>, V: Into<String>>(&mut self, name: N, version: V) {
        self.dependencies.insert(name.into(), version.into());
    }

    /// Dependencies sorted by package name.
    pub fn build(&self) -> IndexMap<String, String> {
        let mut dependencies = self.dependencies.clone();
        dependencies.sort_keys();
        dependencies
    }

    /// Serializes the manifest with two-space indentation and a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let document = Document {
            name: &self.name,
            version: INITIAL_VERSION,
            private: true,
            scripts: Scripts {
                start: START_SCRIPT,
            },
            dependencies: self.build(),
        };
        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let mut manifest = Manifest::new("app");
        manifest.add_dependency("ejs", "~2.6.1");
        manifest.add_dependency("ejs", "~3.1.0");
        let deps = manifest.build();
        assert_eq!(deps.len(), 1);
        assert_eq!(deps["ejs"], "~3.1.0");
    }

    #[test]
    fn test_build_sorts_by_name() {
        let mut manifest = Manifest::new("app");
        for name in ["morgan", "express", "cookie-parser", "debug"] {
            manifest.add_dependency(name, "*");
        }
        let names: Vec<_> = manifest.build().into_keys().collect();
        assert_eq!(names, vec!["cookie-parser", "debug", "express", "morgan"]);
    }

    #[test]
    fn test_to_json_layout() {
        let mut manifest = Manifest::new("shop");
        manifest.add_dependency("express", "~4.17.1");
        manifest.add_dependency("debug", "~2.6.9");

        let expected = r#"{
  "name": "shop",
  "version": "0.0.0",
  "private": true,
  "scripts": {
    "start": "nodemon app.js"
  },
  "dependencies": {
    "debug": "~2.6.9",
    "express": "~4.17.1"
  }
}
"#;
        assert_eq!(manifest.to_json().unwrap(), expected);
    }
}

//! Declarative feature table.
//! Every option value maps to a static [`Feature`] describing the directories,
//! template selections, dependencies and entry-file wiring it contributes.

use crate::context::ViewBinding;
use crate::options::{CssEngine, Database, Options, ViewEngine};

/// A set of templates copied into the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Every file directly inside template directory `dir` whose name matches
    /// `pattern`, copied under the same name into project directory `to`.
    Glob {
        dir: &'static str,
        pattern: &'static str,
        to: &'static str,
    },
    /// A single template copied to an explicit project path.
    File {
        from: &'static str,
        to: &'static str,
    },
}

const fn glob(dir: &'static str, pattern: &'static str, to: &'static str) -> Selection {
    Selection::Glob { dir, pattern, to }
}

/// What one option value adds to the generated application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    /// Project directories, relative to the destination.
    pub directories: &'static [&'static str],
    pub files: &'static [Selection],
    /// Package dependencies as `(name, version constraint)`.
    pub dependencies: &'static [(&'static str, &'static str)],
    pub modules: &'static [(&'static str, &'static str)],
    pub local_modules: &'static [(&'static str, &'static str)],
    pub uses: &'static [&'static str],
    /// Routers mounted as `(path, variable)`.
    pub mounts: &'static [(&'static str, &'static str)],
    pub view: Option<ViewBinding>,
    /// Write the database environment file.
    pub env_file: bool,
}

pub const NO_FEATURE: Feature = Feature {
    directories: &[],
    files: &[],
    dependencies: &[],
    modules: &[],
    local_modules: &[],
    uses: &[],
    mounts: &[],
    view: None,
    env_file: false,
};

pub static BASE: Feature = Feature {
    directories: &[
        "public",
        "public/javascripts",
        "public/images",
        "public/stylesheets",
        "public/plugins",
        "public/plugins/bootstrap",
        "public/plugins/bootstrap/css",
        "public/plugins/bootstrap/js",
        "public/plugins/datatable",
        "public/plugins/jquery",
        "public/plugins/sweetalert2",
        "public/plugins/mks",
        "models",
        "middlewares",
        "controllers",
        "helpers",
        "config",
        "services",
        "routes",
    ],
    files: &[
        glob("js/routes", "*.js", "routes"),
        glob("js/controllers", "*.js", "controllers"),
    ],
    dependencies: &[
        ("debug", "~2.6.9"),
        ("express", "~4.17.1"),
        ("morgan", "~1.10.0"),
        ("cookie-parser", "~1.4.5"),
        ("dotenv", "^16.0.3"),
    ],
    modules: &[("logger", "morgan"), ("cookieParser", "cookie-parser")],
    local_modules: &[("indexRouter", "./routes/index")],
    uses: &[
        "logger('dev')",
        "express.json()",
        "express.urlencoded({ extended: false })",
        "cookieParser()",
    ],
    mounts: &[("/", "indexRouter")],
    ..NO_FEATURE
};

static PLAIN_CSS: Feature = Feature {
    files: &[
        glob("css", "*.css", "public/stylesheets"),
        glob("plugins/bootstrap", "*.css", "public/plugins/bootstrap/css"),
        glob("plugins/bootstrap", "bootstrap.min.css.map", "public/plugins/bootstrap/css"),
        glob("plugins/bootstrap", "*.js", "public/plugins/bootstrap/js"),
        glob("plugins/bootstrap", "bootstrap.min.js.map", "public/plugins/bootstrap/js"),
        glob("plugins/datatable", "*.js", "public/plugins/datatable"),
        glob("plugins/datatable", "*.css", "public/plugins/datatable"),
        glob("plugins/sweetalert2", "*.js", "public/plugins/sweetalert2"),
        glob("plugins/sweetalert2", "*.css", "public/plugins/sweetalert2"),
        glob("plugins/jquery", "*.js", "public/plugins/jquery"),
        glob("plugins/mks", "*.js", "public/plugins/mks"),
    ],
    ..NO_FEATURE
};

// Preprocessor engines ship only their stylesheets, never the vendored plugins.
static LESS: Feature = Feature {
    files: &[glob("css", "*.less", "public/stylesheets")],
    dependencies: &[("less-middleware", "~2.2.1")],
    modules: &[("lessMiddleware", "less-middleware")],
    uses: &["lessMiddleware(path.join(__dirname, 'public'))"],
    ..NO_FEATURE
};

static STYLUS: Feature = Feature {
    files: &[glob("css", "*.styl", "public/stylesheets")],
    dependencies: &[("stylus", "0.54.5")],
    modules: &[("stylus", "stylus")],
    uses: &["stylus.middleware(path.join(__dirname, 'public'))"],
    ..NO_FEATURE
};

static COMPASS: Feature = Feature {
    files: &[glob("css", "*.scss", "public/stylesheets")],
    dependencies: &[("node-compass", "0.2.3")],
    modules: &[("compass", "node-compass")],
    uses: &["compass({ mode: 'expanded' })"],
    ..NO_FEATURE
};

static SASS: Feature = Feature {
    files: &[glob("css", "*.sass", "public/stylesheets")],
    dependencies: &[("node-sass-middleware", "0.11.0")],
    modules: &[("sassMiddleware", "node-sass-middleware")],
    uses: &["sassMiddleware({
  src: path.join(__dirname, 'public'),
  dest: path.join(__dirname, 'public'),
  indentedSyntax: true, // true = .sass and false = .scss
  sourceMap: true
})"],
    ..NO_FEATURE
};

static AUTH: Feature = Feature {
    files: &[
        glob("js/models", "*.js", "models"),
        glob("js/models", "*.sql", "models"),
    ],
    dependencies: &[("md5", "^2.3.0"), ("shortid", "^2.2.16")],
    ..NO_FEATURE
};

const VIEW_DIRECTORIES: &[&str] = &["views", "views/common", "views/components", "views/pages"];

static STATIC_HTML: Feature = Feature {
    files: &[Selection::File {
        from: "js/index.html",
        to: "public/index.html",
    }],
    ..NO_FEATURE
};

static EJS: Feature = Feature {
    directories: VIEW_DIRECTORIES,
    files: &[
        glob("views", "error.ejs", "views"),
        glob("views", "index.ejs", "views/pages"),
        glob("views/common", "*.ejs", "views/common"),
    ],
    dependencies: &[("http-errors", "~1.7.2"), ("ejs", "~2.6.1")],
    view: Some(ViewBinding {
        engine: "ejs",
        render: None,
    }),
    ..NO_FEATURE
};

static DUST: Feature = Feature {
    directories: VIEW_DIRECTORIES,
    files: &[glob("views", "*.dust", "views")],
    dependencies: &[("http-errors", "~1.7.2"), ("adaro", "~1.0.4")],
    modules: &[("adaro", "adaro")],
    view: Some(ViewBinding {
        engine: "dust",
        render: Some("adaro.dust()"),
    }),
    ..NO_FEATURE
};

static MYSQL: Feature = Feature {
    files: &[glob("js/db/mysql", "*.js", "helpers")],
    dependencies: &[("mysql", "^2.18.1"), ("mysql2", "^2.3.3")],
    env_file: true,
    ..NO_FEATURE
};

static STATIC_FILES: Feature = Feature {
    uses: &["express.static(path.join(__dirname, 'public'))"],
    ..NO_FEATURE
};

static GIT: Feature = Feature {
    files: &[Selection::File {
        from: "js/gitignore",
        to: ".gitignore",
    }],
    ..NO_FEATURE
};

static NOTHING: Feature = NO_FEATURE;

impl CssEngine {
    pub fn feature(self) -> &'static Feature {
        match self {
            Self::Plain => &PLAIN_CSS,
            Self::Less => &LESS,
            Self::Stylus => &STYLUS,
            Self::Compass => &COMPASS,
            Self::Sass => &SASS,
        }
    }
}

impl ViewEngine {
    pub fn feature(self) -> &'static Feature {
        match self {
            Self::None => &STATIC_HTML,
            Self::Ejs => &EJS,
            Self::Dust => &DUST,
        }
    }
}

impl Database {
    pub fn feature(self) -> &'static Feature {
        match self {
            Self::Mysql => &MYSQL,
            // Accepted but not wired up yet.
            Self::Mongo => &NOTHING,
            Self::None => &NOTHING,
        }
    }
}

impl Options {
    /// Features contributed by these options, in evaluation order.
    pub fn features(&self) -> [&'static Feature; 7] {
        [
            &BASE,
            self.css.feature(),
            if self.auth { &AUTH } else { &NOTHING },
            self.view.feature(),
            self.database.feature(),
            &STATIC_FILES,
            if self.git { &GIT } else { &NOTHING },
        ]
    }
}

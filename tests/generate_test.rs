use std::fs;
use std::path::Path;

use raygen::generator::generate;
use raygen::materialize::ensure_directories;
use raygen::options::{CssEngine, Database, Options, ViewEngine};
use raygen::plan::plan;
use raygen::renderer::MiniJinjaRenderer;
use raygen::source::{DirectorySource, BUNDLED_TEMPLATES};
use tempfile::TempDir;

fn generate_into(dir: &Path, configure: impl FnOnce(Options) -> Options) -> Options {
    let options = configure(Options::new(dir));
    generate(&options, &DirectorySource::bundled(), &MiniJinjaRenderer::new()).unwrap();
    options
}

#[test_log::test]
fn test_generate_default_application() {
    let temp_dir = TempDir::new().unwrap();
    let app = temp_dir.path().join("My Shop");
    let options = generate_into(&app, |o| o);
    assert_eq!(options.app_name, "my-shop");

    for dir in ["public/javascripts", "public/images", "models", "services", "views/components"] {
        assert!(app.join(dir).is_dir(), "{dir} was not created");
    }

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(app.join("package.json")).unwrap()).unwrap();
    assert_eq!(manifest["name"], "my-shop");
    assert_eq!(manifest["version"], "0.0.0");
    assert_eq!(manifest["private"], true);
    assert_eq!(manifest["scripts"]["start"], "nodemon app.js");
    assert_eq!(manifest["dependencies"]["ejs"], "~2.6.1");
    assert_eq!(manifest["dependencies"]["http-errors"], "~1.7.2");

    let entry = fs::read_to_string(app.join("app.js")).unwrap();
    assert!(entry.contains("var createError = require('http-errors');"));
    assert!(entry.contains("var cookieParser = require('cookie-parser');"));
    assert!(entry.contains("var logger = require('morgan');"));
    assert!(entry.contains("app.set('view engine', 'ejs');"));
    assert!(!entry.contains("app.engine("));
    assert!(entry.contains("app.use(express.static(path.join(__dirname, 'public')));"));
    assert!(entry.contains("app.use('/', indexRouter);"));
    assert!(entry.ends_with("module.exports = app;\n"));

    assert!(!app.join(".env").exists());
}

#[test]
fn test_copies_are_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let app = temp_dir.path().join("app");
    generate_into(&app, |o| Options { auth: true, git: true, ..o });

    let templates = Path::new(BUNDLED_TEMPLATES);
    let pairs = [
        ("plugins/bootstrap/bootstrap.min.css.map", "public/plugins/bootstrap/css/bootstrap.min.css.map"),
        ("plugins/mks/mks.js", "public/plugins/mks/mks.js"),
        ("js/models/tbl_users.sql", "models/tbl_users.sql"),
        ("js/gitignore", ".gitignore"),
        ("views/index.ejs", "views/pages/index.ejs"),
    ];
    for (from, to) in pairs {
        assert_eq!(
            fs::read(templates.join(from)).unwrap(),
            fs::read(app.join(to)).unwrap(),
            "{to} differs from {from}"
        );
    }
}

#[test]
fn test_generate_dust_with_preprocessor_and_mysql() {
    let temp_dir = TempDir::new().unwrap();
    let app = temp_dir.path().join("api");
    generate_into(&app, |o| Options {
        css: CssEngine::Sass,
        view: ViewEngine::Dust,
        database: Database::Mysql,
        ..o
    });

    let entry = fs::read_to_string(app.join("app.js")).unwrap();
    assert!(entry.contains("app.engine('dust', adaro.dust());"));
    assert!(entry.contains("var sassMiddleware = require('node-sass-middleware');"));
    assert!(entry.contains("indentedSyntax: true"));

    assert_eq!(
        fs::read_to_string(app.join(".env")).unwrap(),
        "PORT = 3010\n\nDB_HOST= \nDB_USER= \nDB_PASSWORD= \nDB_PORT= \nDB_DATABASE="
    );
    assert!(app.join("helpers/database.js").is_file());
    assert!(app.join("public/stylesheets/style.sass").is_file());
    assert!(!app.join("public/stylesheets/style.css").exists());
    assert_eq!(fs::read_dir(app.join("public/plugins/bootstrap/css")).unwrap().count(), 0);
}

#[test]
fn test_static_html_application() {
    let temp_dir = TempDir::new().unwrap();
    let app = temp_dir.path().join("site");
    generate_into(&app, |o| Options { view: ViewEngine::None, ..o });

    assert!(app.join("public/index.html").is_file());
    assert!(!app.join("views").exists());

    let entry = fs::read_to_string(app.join("app.js")).unwrap();
    assert!(!entry.contains("createError"));
    assert!(!entry.contains("view engine"));
}

#[test]
fn test_generation_is_reproducible() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let configure = |o: Options| Options {
        css: CssEngine::Compass,
        auth: true,
        database: Database::Mysql,
        git: true,
        ..o
    };
    generate_into(&first.path().join("shop"), configure);
    generate_into(&second.path().join("shop"), configure);

    assert!(!dir_diff::is_different(first.path(), second.path()).unwrap());
}

#[test]
fn test_regenerating_over_existing_output() {
    let temp_dir = TempDir::new().unwrap();
    let app = temp_dir.path().join("app");
    generate_into(&app, |o| o);
    let before = fs::read_to_string(app.join("package.json")).unwrap();

    generate_into(&app, |o| Options { force: true, ..o });
    assert_eq!(fs::read_to_string(app.join("package.json")).unwrap(), before);
}

#[test]
fn test_directory_creation_twice_leaves_tree_unchanged() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    for root in [first.path(), second.path()] {
        let options = Options::new(root.join("app"));
        let plan = plan(&options, &DirectorySource::bundled()).unwrap();
        ensure_directories(&plan.directories).unwrap();
        if root == second.path() {
            ensure_directories(&plan.directories).unwrap();
        }
    }
    assert!(!dir_diff::is_different(first.path(), second.path()).unwrap());
}

#[test]
fn test_generation_stops_when_directory_is_blocked() {
    let temp_dir = TempDir::new().unwrap();
    let app = temp_dir.path().join("app");
    fs::create_dir_all(&app).unwrap();
    fs::write(app.join("routes"), "occupied").unwrap();

    let options = Options::new(&app);
    let result = generate(&options, &DirectorySource::bundled(), &MiniJinjaRenderer::new());
    assert!(matches!(
        result,
        Err(raygen::error::Error::FilesystemError { .. })
    ));
    // directories planned before the blocked one were created
    assert!(app.join("public/stylesheets").is_dir());
    assert!(!app.join("package.json").exists());
}

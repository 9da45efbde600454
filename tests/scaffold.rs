// Integration testing is done by calling the library functions directly.
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use groundwork::{
    GroundworkError, HtmlOptions, Preflight, ScaffoldOptions, ScriptsOptions, StylesOptions,
    Whitespace,
};
use tempfile::TempDir;
use walkdir::WalkDir;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Every file under `root`, as sorted paths relative to it.
fn walk(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().strip_prefix(root).unwrap().to_path_buf())
        .collect();

    files.sort();
    files
}

fn read(root: &Path, relative: &str) -> String {
    std::fs::read_to_string(root.join(relative)).unwrap()
}

fn spaces(width: u32) -> Whitespace {
    Whitespace::Spaces(NonZeroU32::new(width).unwrap())
}

#[tokio::test]
async fn vanilla_project_gets_three_files() {
    init_logging();
    let dir = TempDir::new().unwrap();

    let written = groundwork::scaffold(dir.path(), ScaffoldOptions::default())
        .await
        .unwrap();

    assert_eq!(
        written,
        vec![
            dir.path().join("index.html"),
            dir.path().join("styles").join("main.css"),
            dir.path().join("scripts").join("main.js"),
        ]
    );
    assert_eq!(
        walk(dir.path()),
        vec![
            PathBuf::from("index.html"),
            Path::new("scripts").join("main.js"),
            Path::new("styles").join("main.css"),
        ]
    );
}

#[tokio::test]
async fn markup_always_references_compiled_names() {
    init_logging();
    let dir = TempDir::new().unwrap();

    let options = ScaffoldOptions {
        html: HtmlOptions {
            r#type: Some("jade".parse().unwrap()),
            ..Default::default()
        },
        styles: StylesOptions {
            r#type: Some("scss".parse().unwrap()),
            ..Default::default()
        },
        scripts: ScriptsOptions {
            r#type: Some("coffee".parse().unwrap()),
            ..Default::default()
        },
        ..Default::default()
    };

    groundwork::scaffold(dir.path(), options).await.unwrap();

    let markup = read(dir.path(), "index.jade");
    assert!(markup.contains("styles/main.css"));
    assert!(markup.contains("scripts/main.js"));

    assert_eq!(
        walk(dir.path()),
        vec![
            PathBuf::from("index.jade"),
            Path::new("scripts").join("main.coffee"),
            Path::new("styles").join("main.scss"),
        ]
    );
    assert!(read(dir.path(), "styles/main.scss").len() > 10);
    assert!(read(dir.path(), "scripts/main.coffee").len() > 10);
}

#[tokio::test]
async fn extras_write_polyfill_and_normalize() {
    init_logging();
    let dir = TempDir::new().unwrap();

    let options = ScaffoldOptions {
        scripts: ScriptsOptions {
            r#type: Some("babel".parse().unwrap()),
            ..Default::default()
        },
        include_polyfill: Some(true),
        include_normalize_css: Some(true),
        ..Default::default()
    };

    let written = groundwork::scaffold(dir.path(), options).await.unwrap();

    assert_eq!(
        written,
        vec![
            dir.path().join("index.html"),
            dir.path().join("styles").join("main.css"),
            dir.path().join("scripts").join("main.babel.js"),
            dir.path().join("scripts").join("polyfill.js"),
            dir.path().join("styles").join("normalize.css"),
        ]
    );

    let markup = read(dir.path(), "index.html");
    assert!(markup.contains("styles/normalize.css"));
    assert!(markup.contains("scripts/polyfill.js"));
    // normalize loads before the main stylesheet
    assert!(markup.find("normalize.css").unwrap() < markup.find("main.css").unwrap());

    assert!(read(dir.path(), "scripts/polyfill.js").len() > 10);
    assert!(read(dir.path(), "styles/normalize.css").contains("normalize.css v8"));
}

#[tokio::test]
async fn extras_stay_out_unless_requested() {
    init_logging();
    let dir = TempDir::new().unwrap();

    groundwork::scaffold(dir.path(), ScaffoldOptions::default())
        .await
        .unwrap();

    let markup = read(dir.path(), "index.html");
    assert!(!markup.contains("polyfill"));
    assert!(!markup.contains("normalize"));
    assert!(!dir.path().join("scripts").join("polyfill.js").exists());
    assert!(!dir.path().join("styles").join("normalize.css").exists());
}

#[tokio::test]
async fn tabs_are_the_default_indentation() {
    init_logging();
    let dir = TempDir::new().unwrap();

    groundwork::scaffold(dir.path(), ScaffoldOptions::default())
        .await
        .unwrap();

    let markup = read(dir.path(), "index.html");
    assert!(markup.contains("\n\t<"));
    assert!(!markup.contains("  "));
}

#[tokio::test]
async fn spaces_replace_every_leading_tab() {
    init_logging();
    let dir = TempDir::new().unwrap();

    let options = ScaffoldOptions {
        whitespace_formatting: Some(spaces(2)),
        ..Default::default()
    };
    groundwork::scaffold(dir.path(), options).await.unwrap();

    let markup = read(dir.path(), "index.html");
    assert!(markup.contains("\n  <"));
    assert!(!markup.contains('\t'));

    let script = read(dir.path(), "scripts/main.js");
    assert!(!script.contains('\t'));
}

#[tokio::test]
async fn indent_width_scales_with_the_configured_spaces() {
    init_logging();
    let two = TempDir::new().unwrap();
    let four = TempDir::new().unwrap();

    groundwork::scaffold(
        two.path(),
        ScaffoldOptions {
            whitespace_formatting: Some(spaces(2)),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    groundwork::scaffold(
        four.path(),
        ScaffoldOptions {
            whitespace_formatting: Some(spaces(4)),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let wide = read(four.path(), "index.html");
    assert!(wide.contains("\n    <"));
    assert!(!wide.contains("\n  <"));
    assert_ne!(wide, read(two.path(), "index.html"));
}

#[tokio::test]
async fn custom_names_flow_into_paths_and_references() {
    init_logging();
    let dir = TempDir::new().unwrap();

    let options = ScaffoldOptions {
        html: HtmlOptions {
            file: Some("home".to_owned()),
            ..Default::default()
        },
        styles: StylesOptions {
            file: Some("site".to_owned()),
            folder: Some("css".to_owned()),
            ..Default::default()
        },
        scripts: ScriptsOptions {
            r#type: Some("babel".parse().unwrap()),
            file: Some("app".to_owned()),
            folder: Some("js".to_owned()),
            ..Default::default()
        },
        ..Default::default()
    };

    let written = groundwork::scaffold(dir.path(), options).await.unwrap();

    assert_eq!(
        written,
        vec![
            dir.path().join("home.html"),
            dir.path().join("css").join("site.css"),
            dir.path().join("js").join("app.babel.js"),
        ]
    );

    let markup = read(dir.path(), "home.html");
    assert!(markup.contains("css/site.css"));
    assert!(markup.contains("js/app.js"));
}

#[tokio::test]
async fn partial_group_overrides_keep_sibling_defaults() {
    init_logging();
    let dir = TempDir::new().unwrap();

    let options = ScaffoldOptions {
        styles: StylesOptions {
            r#type: Some("scss".parse().unwrap()),
            ..Default::default()
        },
        ..Default::default()
    };

    let written = groundwork::scaffold(dir.path(), options).await.unwrap();

    assert!(written.contains(&dir.path().join("styles").join("main.scss")));
    assert!(written.contains(&dir.path().join("index.html")));
}

#[tokio::test]
async fn rescaffolding_overwrites_in_place() {
    init_logging();
    let dir = TempDir::new().unwrap();

    groundwork::scaffold(dir.path(), ScaffoldOptions::default())
        .await
        .unwrap();
    let first = read(dir.path(), "index.html");

    groundwork::scaffold(
        dir.path(),
        ScaffoldOptions {
            include_polyfill: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let second = read(dir.path(), "index.html");
    assert_ne!(first, second);
    assert!(second.contains("polyfill.js"));
}

#[tokio::test]
async fn write_failures_surface_io_errors() {
    init_logging();
    let dir = TempDir::new().unwrap();
    // a plain file on the styles folder name makes directory creation fail
    std::fs::write(dir.path().join("styles"), "in the way").unwrap();

    let error = groundwork::scaffold(dir.path(), ScaffoldOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(error, GroundworkError::Io(_)));
    assert_eq!(read(dir.path(), "styles"), "in the way");
}

#[tokio::test]
async fn failed_scaffolds_do_not_roll_back_existing_files() {
    init_logging();
    let dir = TempDir::new().unwrap();

    groundwork::scaffold(dir.path(), ScaffoldOptions::default())
        .await
        .unwrap();

    // the second run fails because a plain file holds its styles folder name
    std::fs::write(dir.path().join("css"), "in the way").unwrap();
    let options = ScaffoldOptions {
        styles: StylesOptions {
            folder: Some("css".to_owned()),
            ..Default::default()
        },
        ..Default::default()
    };

    let error = groundwork::scaffold(dir.path(), options).await.unwrap_err();

    assert!(matches!(error, GroundworkError::Io(_)));
    assert!(dir.path().join("index.html").exists());
    assert!(dir.path().join("styles").join("main.css").exists());
    assert!(dir.path().join("scripts").join("main.js").exists());
}

#[tokio::test]
async fn options_files_feed_straight_into_scaffold() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let options_path = dir.path().join("groundwork.toml");
    std::fs::write(&options_path, "[styles]\ntype = \"less\"\n").unwrap();

    async fn run(target: &Path, options: &Path) -> Result<Vec<PathBuf>, GroundworkError> {
        let options = ScaffoldOptions::from_file(options)?;
        groundwork::scaffold(target, options).await
    }

    let target = dir.path().join("app");
    let written = run(&target, &options_path).await.unwrap();
    assert!(written.contains(&target.join("styles").join("main.less")));

    let error = run(&target, &dir.path().join("absent.toml"))
        .await
        .unwrap_err();
    assert!(matches!(error, GroundworkError::Config(_)));
}

#[tokio::test]
async fn preflight_reports_missing_directories_as_empty() {
    init_logging();
    let dir = TempDir::new().unwrap();

    let report = groundwork::preflight(dir.path().join("not-yet"))
        .await
        .unwrap();

    assert_eq!(
        report,
        Preflight {
            exists: false,
            empty: true,
            file_count: 0,
        }
    );
}

#[tokio::test]
async fn preflight_counts_top_level_entries_after_scaffolding() {
    init_logging();
    let dir = TempDir::new().unwrap();

    groundwork::scaffold(dir.path(), ScaffoldOptions::default())
        .await
        .unwrap();

    let report = groundwork::preflight(dir.path()).await.unwrap();

    assert!(report.exists);
    assert!(!report.empty);
    // index.html plus the styles and scripts folders
    assert_eq!(report.file_count, 3);
}

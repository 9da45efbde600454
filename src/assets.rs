//! Bundled template sources, embedded at build time.
//!
//! `TEMPLATES` holds the per-language starting files, laid out exactly as the
//! registry resolves them (`index.html`, `styles/main.scss`, ...). `EXTRAS`
//! holds the fixed artifacts that are copied verbatim when the matching flag
//! is set.

use std::path::{Path, PathBuf};

use include_dir::{include_dir, Dir};
use miette::Diagnostic;
use thiserror::Error;

static TEMPLATES: Dir = include_dir!("$CARGO_MANIFEST_DIR/templates");
static EXTRAS: Dir = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// A resolved source path the build did not embed.
#[derive(Debug, Error, Diagnostic)]
#[error("no bundled source at '{path}'")]
#[diagnostic(
    code(groundwork::assets::missing_source),
    help("The bundle is fixed at build time; this path has no template behind it.")
)]
pub struct MissingSource {
    pub path: PathBuf,
}

/// Look up a bundled template by its registry path.
pub fn template(path: &Path) -> Result<&'static str, MissingSource> {
    TEMPLATES
        .get_file(path)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| MissingSource {
            path: path.to_path_buf(),
        })
}

/// Look up a fixed artifact (polyfill, normalize stylesheet) by file name.
pub fn extra(name: &str) -> Result<&'static str, MissingSource> {
    EXTRAS
        .get_file(name)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| MissingSource {
            path: PathBuf::from(name),
        })
}

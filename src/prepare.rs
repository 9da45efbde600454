use std::path::PathBuf;

use futures_util::future::{self, BoxFuture};
use futures_util::FutureExt;
use miette::Diagnostic;
use tera::{Context, Tera};
use thiserror::Error;

use crate::assets::{self, MissingSource};
use crate::config::Config;
use crate::pending::PendingFile;
use crate::registry::{self, NORMALIZE_FILE, POLYFILL_FILE};

#[derive(Debug, Error, Diagnostic)]
pub enum PrepareError {
    #[error("A resolved path has no bundled template behind it")]
    #[diagnostic(code(groundwork::prepare::missing_source))]
    MissingSource(#[from] MissingSource),

    #[error("Error occurred attempting to build the render context")]
    #[diagnostic(code(groundwork::prepare::context))]
    Context {
        #[source]
        source: tera::Error,
    },

    #[error("Error occurred attempting to render template '{path}'")]
    #[diagnostic(code(groundwork::prepare::render))]
    Render {
        path: PathBuf,
        #[source]
        source: tera::Error,
    },
}

/// Renders every file the configuration calls for and stages it in memory.
///
/// The markup file, the stylesheet, and the script are always prepared, in
/// that order; the polyfill and normalize artifacts follow when their flags
/// are set. All preparations run concurrently and the first failure wins,
/// so nothing is handed to the writer unless every file rendered.
pub async fn prepare_files(config: &Config) -> Result<Vec<PendingFile>, PrepareError> {
    let mut tasks: Vec<BoxFuture<'_, Result<PendingFile, PrepareError>>> = vec![
        prepare_markup(config).boxed(),
        prepare_styles(config).boxed(),
        prepare_scripts(config).boxed(),
    ];

    if config.include_polyfill {
        tasks.push(prepare_polyfill(config).boxed());
    }

    if config.include_normalize_css {
        tasks.push(prepare_normalize(config).boxed());
    }

    future::try_join_all(tasks).await
}

/// Renders the markup template against the full configuration.
///
/// Markup is the only source that goes through tera; the other sources are
/// copied as-is. The template sees the resolved configuration, so it can
/// reference the configured folders and file names.
async fn prepare_markup(config: &Config) -> Result<PendingFile, PrepareError> {
    let source = registry::markup_path(config.html.r#type, None);
    let raw = assets::template(&source)?;

    let context =
        Context::from_serialize(config).map_err(|error| PrepareError::Context { source: error })?;

    let rendered = Tera::one_off(raw, &context, false).map_err(|error| PrepareError::Render {
        path: source,
        source: error,
    })?;

    Ok(PendingFile {
        destination: registry::markup_path(config.html.r#type, Some(&config.html.file)),
        content: config.whitespace_formatting.apply(rendered),
    })
}

async fn prepare_styles(config: &Config) -> Result<PendingFile, PrepareError> {
    let source = registry::style_path(config.styles.r#type, None, None);
    let raw = assets::template(&source)?;

    Ok(PendingFile {
        destination: registry::style_path(
            config.styles.r#type,
            Some(&config.styles.file),
            Some(&config.styles.folder),
        ),
        content: config.whitespace_formatting.apply(raw.to_owned()),
    })
}

async fn prepare_scripts(config: &Config) -> Result<PendingFile, PrepareError> {
    let source = registry::script_path(config.scripts.r#type, None, None);
    let raw = assets::template(&source)?;

    Ok(PendingFile {
        destination: registry::script_path(
            config.scripts.r#type,
            Some(&config.scripts.file),
            Some(&config.scripts.folder),
        ),
        content: config.whitespace_formatting.apply(raw.to_owned()),
    })
}

async fn prepare_polyfill(config: &Config) -> Result<PendingFile, PrepareError> {
    let raw = assets::extra(POLYFILL_FILE)?;

    Ok(PendingFile {
        destination: registry::polyfill_path(Some(&config.scripts.folder)),
        content: config.whitespace_formatting.apply(raw.to_owned()),
    })
}

async fn prepare_normalize(config: &Config) -> Result<PendingFile, PrepareError> {
    let raw = assets::extra(NORMALIZE_FILE)?;

    Ok(PendingFile {
        destination: registry::normalize_path(Some(&config.styles.folder)),
        content: config.whitespace_formatting.apply(raw.to_owned()),
    })
}

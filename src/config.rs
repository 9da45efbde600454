//! User-facing options and the resolved configuration the pipeline runs on.

use std::fmt;
use std::fs;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::errors::{FileOperation, IoError};
use crate::registry::{
    MarkupLang, ScriptLang, StyleLang, DEFAULT_ASSET_FILE, DEFAULT_MARKUP_FILE,
    DEFAULT_SCRIPTS_FOLDER, DEFAULT_STYLES_FOLDER,
};

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("I/O error within configuration domain")]
    #[diagnostic(code(groundwork::config::io))]
    Io(#[from] IoError),

    #[error("Unable to parse toml file at '{path}': {source}")]
    #[diagnostic(code(groundwork::config::parse_toml), help("Review toml file"))]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Partial options supplied by the caller.
///
/// Every field is optional; anything left out falls back to the defaults in
/// [`Config::default`]. Groups merge field by field, so overriding one field
/// of a group keeps the group's other defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScaffoldOptions {
    pub html: HtmlOptions,
    pub styles: StylesOptions,
    pub scripts: ScriptsOptions,
    pub include_polyfill: Option<bool>,
    pub include_normalize_css: Option<bool>,
    pub whitespace_formatting: Option<Whitespace>,
}

impl ScaffoldOptions {
    /// Load options from a TOML file.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Io`] when the file cannot be read.
    /// - [`ConfigError::ParseToml`] when the content is not valid TOML or
    ///   uses an unsupported language key.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|error| IoError::new(FileOperation::Read, path.to_path_buf(), error))?;
        let parsed = toml::from_str(&content).map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(parsed)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HtmlOptions {
    pub r#type: Option<MarkupLang>,
    pub file: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StylesOptions {
    pub r#type: Option<StyleLang>,
    pub file: Option<String>,
    pub folder: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScriptsOptions {
    pub r#type: Option<ScriptLang>,
    pub file: Option<String>,
    pub folder: Option<String>,
}

/// Fully resolved configuration.
///
/// Also serves as the rendering context for markup templates, which is why it
/// serializes; templates can reference any field, e.g. `{{ styles.folder }}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub html: HtmlConfig,
    pub styles: StylesConfig,
    pub scripts: ScriptsConfig,
    pub include_polyfill: bool,
    pub include_normalize_css: bool,
    pub whitespace_formatting: Whitespace,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HtmlConfig {
    pub r#type: MarkupLang,
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StylesConfig {
    pub r#type: StyleLang,
    pub file: String,
    pub folder: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScriptsConfig {
    pub r#type: ScriptLang,
    pub file: String,
    pub folder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            html: HtmlConfig {
                r#type: MarkupLang::Html,
                file: DEFAULT_MARKUP_FILE.to_owned(),
            },
            styles: StylesConfig {
                r#type: StyleLang::Css,
                file: DEFAULT_ASSET_FILE.to_owned(),
                folder: DEFAULT_STYLES_FOLDER.to_owned(),
            },
            scripts: ScriptsConfig {
                r#type: ScriptLang::Js,
                file: DEFAULT_ASSET_FILE.to_owned(),
                folder: DEFAULT_SCRIPTS_FOLDER.to_owned(),
            },
            include_polyfill: false,
            include_normalize_css: false,
            whitespace_formatting: Whitespace::Tabs,
        }
    }
}

impl Config {
    /// Merge partial options over the defaults, field by field.
    pub fn resolve(options: ScaffoldOptions) -> Self {
        let defaults = Config::default();
        Config {
            html: HtmlConfig {
                r#type: options.html.r#type.unwrap_or(defaults.html.r#type),
                file: options.html.file.unwrap_or(defaults.html.file),
            },
            styles: StylesConfig {
                r#type: options.styles.r#type.unwrap_or(defaults.styles.r#type),
                file: options.styles.file.unwrap_or(defaults.styles.file),
                folder: options.styles.folder.unwrap_or(defaults.styles.folder),
            },
            scripts: ScriptsConfig {
                r#type: options.scripts.r#type.unwrap_or(defaults.scripts.r#type),
                file: options.scripts.file.unwrap_or(defaults.scripts.file),
                folder: options.scripts.folder.unwrap_or(defaults.scripts.folder),
            },
            include_polyfill: options
                .include_polyfill
                .unwrap_or(defaults.include_polyfill),
            include_normalize_css: options
                .include_normalize_css
                .unwrap_or(defaults.include_normalize_css),
            whitespace_formatting: options
                .whitespace_formatting
                .unwrap_or(defaults.whitespace_formatting),
        }
    }
}

/// How generated files are indented.
///
/// Bundled templates are indented with tabs; [`Whitespace::Spaces`] rewrites
/// each leading tab into the configured number of spaces. The width is
/// non-zero by construction; a `0` in an options file is rejected during
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whitespace {
    Tabs,
    Spaces(NonZeroU32),
}

impl Whitespace {
    /// Apply this formatting to rendered content.
    pub fn apply(self, content: String) -> String {
        match self {
            Whitespace::Tabs => content,
            Whitespace::Spaces(width) => detab(&content, width),
        }
    }
}

/// Replace each leading tab with `width` spaces, line by line.
///
/// Tabs after the first non-tab character are left alone.
fn detab(content: &str, width: NonZeroU32) -> String {
    let fill = " ".repeat(width.get() as usize);
    content
        .split('\n')
        .map(|line| {
            let tabs = line.chars().take_while(|c| *c == '\t').count();
            if tabs == 0 {
                line.to_owned()
            } else {
                format!("{}{}", fill.repeat(tabs), &line[tabs..])
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl Serialize for Whitespace {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Whitespace::Tabs => serializer.serialize_str("tabs"),
            Whitespace::Spaces(width) => serializer.serialize_u32(width.get()),
        }
    }
}

impl<'de> Deserialize<'de> for Whitespace {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(WhitespaceVisitor)
    }
}

struct WhitespaceVisitor;

impl<'de> Visitor<'de> for WhitespaceVisitor {
    type Value = Whitespace;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"tabs\" or a positive number of spaces")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Whitespace::Spaces)
            .ok_or_else(|| E::invalid_value(Unexpected::Unsigned(value), &self))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Whitespace::Spaces)
            .ok_or_else(|| E::invalid_value(Unexpected::Signed(value), &self))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        if value == "tabs" {
            return Ok(Whitespace::Tabs);
        }
        value
            .parse::<NonZeroU32>()
            .map(Whitespace::Spaces)
            .map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
    }
}

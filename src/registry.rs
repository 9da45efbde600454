//! Maps language choices to template source paths and destination paths.
//!
//! Resolution is pure: the same inputs always produce the same relative path,
//! and nothing here touches the filesystem. Passing `None` for a base name
//! (or folder) yields the canonical name the bundled source template carries;
//! passing `Some` yields the destination name the caller configured.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base name of the markup file when none is configured.
pub const DEFAULT_MARKUP_FILE: &str = "index";
/// Base name of the style and script files when none is configured.
pub const DEFAULT_ASSET_FILE: &str = "main";
/// Stylesheet folder when none is configured.
pub const DEFAULT_STYLES_FOLDER: &str = "styles";
/// Script folder when none is configured.
pub const DEFAULT_SCRIPTS_FOLDER: &str = "scripts";
/// File name of the optional runtime polyfill artifact.
pub const POLYFILL_FILE: &str = "polyfill.js";
/// File name of the optional normalize stylesheet artifact.
pub const NORMALIZE_FILE: &str = "normalize.css";

/// A language key that no template group registers.
///
/// Produced at the string boundary (`FromStr`, TOML deserialization), before
/// any file I/O happens.
#[derive(Debug, Error, Diagnostic)]
#[error("unsupported {group} language '{value}' (expected one of: {expected})")]
#[diagnostic(
    code(groundwork::registry::unsupported_variant),
    help("Language keys name the bundled template set; check for typos.")
)]
pub struct UnknownLanguage {
    pub group: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Markup dialects with a bundled template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MarkupLang {
    Html,
    Jade,
}

impl MarkupLang {
    pub const ALL: [MarkupLang; 2] = [MarkupLang::Html, MarkupLang::Jade];

    pub fn as_str(self) -> &'static str {
        match self {
            MarkupLang::Html => "html",
            MarkupLang::Jade => "jade",
        }
    }

    /// Extension of both the bundled template and the generated file.
    pub fn extension(self) -> &'static str {
        self.as_str()
    }
}

impl FromStr for MarkupLang {
    type Err = UnknownLanguage;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "html" => Ok(MarkupLang::Html),
            "jade" => Ok(MarkupLang::Jade),
            other => Err(UnknownLanguage {
                group: "markup",
                value: other.to_string(),
                expected: "html, jade",
            }),
        }
    }
}

impl TryFrom<String> for MarkupLang {
    type Error = UnknownLanguage;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MarkupLang> for String {
    fn from(lang: MarkupLang) -> Self {
        lang.as_str().to_owned()
    }
}

impl fmt::Display for MarkupLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Style dialects with a bundled template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StyleLang {
    Css,
    Less,
    Sass,
    Scss,
    Styl,
}

impl StyleLang {
    pub const ALL: [StyleLang; 5] = [
        StyleLang::Css,
        StyleLang::Less,
        StyleLang::Sass,
        StyleLang::Scss,
        StyleLang::Styl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StyleLang::Css => "css",
            StyleLang::Less => "less",
            StyleLang::Sass => "sass",
            StyleLang::Scss => "scss",
            StyleLang::Styl => "styl",
        }
    }

    /// Extension of both the bundled template and the generated file.
    pub fn extension(self) -> &'static str {
        self.as_str()
    }
}

impl FromStr for StyleLang {
    type Err = UnknownLanguage;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "css" => Ok(StyleLang::Css),
            "less" => Ok(StyleLang::Less),
            "sass" => Ok(StyleLang::Sass),
            "scss" => Ok(StyleLang::Scss),
            "styl" => Ok(StyleLang::Styl),
            other => Err(UnknownLanguage {
                group: "styles",
                value: other.to_string(),
                expected: "css, less, sass, scss, styl",
            }),
        }
    }
}

impl TryFrom<String> for StyleLang {
    type Error = UnknownLanguage;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StyleLang> for String {
    fn from(lang: StyleLang) -> Self {
        lang.as_str().to_owned()
    }
}

impl fmt::Display for StyleLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Script dialects with a bundled template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ScriptLang {
    Js,
    Babel,
    Coffee,
    Ts,
}

impl ScriptLang {
    pub const ALL: [ScriptLang; 4] = [
        ScriptLang::Js,
        ScriptLang::Babel,
        ScriptLang::Coffee,
        ScriptLang::Ts,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScriptLang::Js => "js",
            ScriptLang::Babel => "babel",
            ScriptLang::Coffee => "coffee",
            ScriptLang::Ts => "ts",
        }
    }

    /// Extension of both the bundled template and the generated file.
    ///
    /// Babel sources keep the double extension so build tooling can tell
    /// them apart from plain scripts.
    pub fn extension(self) -> &'static str {
        match self {
            ScriptLang::Js => "js",
            ScriptLang::Babel => "babel.js",
            ScriptLang::Coffee => "coffee",
            ScriptLang::Ts => "ts",
        }
    }
}

impl FromStr for ScriptLang {
    type Err = UnknownLanguage;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "js" => Ok(ScriptLang::Js),
            "babel" => Ok(ScriptLang::Babel),
            "coffee" => Ok(ScriptLang::Coffee),
            "ts" => Ok(ScriptLang::Ts),
            other => Err(UnknownLanguage {
                group: "scripts",
                value: other.to_string(),
                expected: "js, babel, coffee, ts",
            }),
        }
    }
}

impl TryFrom<String> for ScriptLang {
    type Error = UnknownLanguage;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ScriptLang> for String {
    fn from(lang: ScriptLang) -> Self {
        lang.as_str().to_owned()
    }
}

impl fmt::Display for ScriptLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the markup file path for `lang`.
pub fn markup_path(lang: MarkupLang, file: Option<&str>) -> PathBuf {
    let stem = file.unwrap_or(DEFAULT_MARKUP_FILE);
    PathBuf::from(format!("{}.{}", stem, lang.extension()))
}

/// Resolve the stylesheet path for `lang` under the styles folder.
pub fn style_path(lang: StyleLang, file: Option<&str>, folder: Option<&str>) -> PathBuf {
    let stem = file.unwrap_or(DEFAULT_ASSET_FILE);
    let folder = folder.unwrap_or(DEFAULT_STYLES_FOLDER);
    PathBuf::from(folder).join(format!("{}.{}", stem, lang.extension()))
}

/// Resolve the script path for `lang` under the scripts folder.
pub fn script_path(lang: ScriptLang, file: Option<&str>, folder: Option<&str>) -> PathBuf {
    let stem = file.unwrap_or(DEFAULT_ASSET_FILE);
    let folder = folder.unwrap_or(DEFAULT_SCRIPTS_FOLDER);
    PathBuf::from(folder).join(format!("{}.{}", stem, lang.extension()))
}

/// Resolve the destination of the optional runtime polyfill.
pub fn polyfill_path(folder: Option<&str>) -> PathBuf {
    PathBuf::from(folder.unwrap_or(DEFAULT_SCRIPTS_FOLDER)).join(POLYFILL_FILE)
}

/// Resolve the destination of the optional normalize stylesheet.
pub fn normalize_path(folder: Option<&str>) -> PathBuf {
    PathBuf::from(folder.unwrap_or(DEFAULT_STYLES_FOLDER)).join(NORMALIZE_FILE)
}

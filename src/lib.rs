//! Skeletons for front-end projects.
//!
//! Pick a markup, styles, and scripts dialect, and get a wired-together
//! starting point in one call: the markup file already links the stylesheet
//! and script it was generated alongside. All sources are bundled into the
//! binary, so nothing is fetched at run time.
//!
//! ```no_run
//! use groundwork::{ScaffoldOptions, StylesOptions};
//!
//! # async fn demo() -> Result<(), groundwork::GroundworkError> {
//! let options = ScaffoldOptions {
//!     styles: StylesOptions {
//!         r#type: Some("scss".parse().unwrap()),
//!         ..Default::default()
//!     },
//!     include_normalize_css: Some(true),
//!     ..Default::default()
//! };
//!
//! for path in groundwork::scaffold("my-app", options).await? {
//!     println!("create {}", path.display());
//! }
//! # Ok(())
//! # }
//! ```
pub mod api;
pub mod assets;
pub mod config;
pub mod errors;
pub mod pending;
pub mod preflight;
pub mod prepare;
pub mod registry;
pub mod writer;

pub use api::{preflight, scaffold, GroundworkError};
pub use config::{
    Config, ConfigError, HtmlOptions, ScaffoldOptions, ScriptsOptions, StylesOptions, Whitespace,
};
pub use preflight::Preflight;
pub use registry::{MarkupLang, ScriptLang, StyleLang, UnknownLanguage};

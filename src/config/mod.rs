//! Loading the site author's navigation declaration.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── types/         # FieldPath, ConfigError, ValidationReport
//! ├── handle         # NavHandle (atomic swap on reload)
//! ├── util           # Declaration file discovery
//! └── mod.rs         # SiteDecl (this file)
//! ```
//!
//! # Declaration
//!
//! The file uses the rendering engine's own schema, so the same document
//! can be handed over unchanged once it validates:
//!
//! ```toml
//! title = "My Docs"
//! description = "Project documentation"
//!
//! [themeConfig]
//! nav = [
//!   { text = "Home", link = "/" },
//!   { text = "Guide", link = "/guide/" },
//! ]
//!
//! [[themeConfig.sidebar]]
//! text = "Guide"
//! items = [
//!   { text = "Getting Started", link = "/guide/getting-started" },
//! ]
//!
//! [[themeConfig.socialLinks]]
//! icon = "github"
//! link = "https://github.com/org/docs"
//! ```
//!
//! JSON with the same shape is accepted for `.json` files.

pub mod handle;
pub mod types;
mod util;

pub use handle::NavHandle;
pub use types::{
    ConfigError, Diagnostic, FieldPath, Rule, ValidationReport, Warning, print_warnings,
};
pub use util::find_config_file;

use crate::log;
use crate::nav::{NavLink, NavModel, SidebarGroup, SocialLinkDecl};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// declaration
// ============================================================================

/// Unvalidated site declaration, as authored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteDecl {
    /// Site title.
    #[serde(default)]
    pub title: String,

    /// Site description.
    #[serde(default)]
    pub description: String,

    /// Navigation settings, named as the engine expects.
    #[serde(default, rename = "themeConfig")]
    pub theme_config: ThemeDecl,
}

/// `themeConfig` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDecl {
    /// Top-level nav bar links.
    #[serde(default)]
    pub nav: Vec<NavLink>,

    /// Sidebar groups in display order.
    #[serde(default)]
    pub sidebar: Vec<SidebarGroup>,

    /// Header social links.
    #[serde(default)]
    pub social_links: Vec<SocialLinkDecl>,
}

/// Declaration file format, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclFormat {
    Toml,
    Json,
}

impl DeclFormat {
    /// `.json` is JSON, `.toml` or no extension is TOML.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            None => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(_) => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

impl SiteDecl {
    /// Parse a declaration without unknown-field tracking.
    pub fn parse(content: &str, format: DeclFormat) -> Result<Self, ConfigError> {
        Ok(match format {
            DeclFormat::Toml => toml::from_str(content)?,
            DeclFormat::Json => serde_json::from_str(content)?,
        })
    }

    /// Parse a declaration, collecting any unknown fields.
    pub fn parse_with_ignored(
        content: &str,
        format: DeclFormat,
    ) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let mut track = |path: serde_ignored::Path| ignored.push(path.to_string());

        let decl = match format {
            DeclFormat::Toml => {
                let deserializer = toml::Deserializer::new(content);
                serde_ignored::deserialize(deserializer, &mut track)?
            }
            DeclFormat::Json => {
                let mut deserializer = serde_json::Deserializer::from_str(content);
                let decl = serde_ignored::deserialize(&mut deserializer, &mut track)?;
                deserializer.end()?;
                decl
            }
        };

        Ok((decl, ignored))
    }

    /// Load a declaration file. Unknown fields are reported, not fatal.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = read_source(path)?;
        Self::from_source(path, &content)
    }

    /// Parse already-read file content, using `path` for format and messages.
    pub(crate) fn from_source(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let (decl, ignored) = Self::parse_with_ignored(content, DeclFormat::from_path(path)?)?;
        if !ignored.is_empty() {
            print_unknown_fields_warning(&ignored, path);
        }
        Ok(decl)
    }
}

/// Read a declaration file into memory.
pub(crate) fn read_source(path: &Path) -> Result<String, ConfigError> {
    crate::debug!("load"; "reading {}", path.display());
    fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))
}

/// Read, parse and validate a declaration file.
pub fn load(path: &Path) -> Result<NavModel, ConfigError> {
    let decl = SiteDecl::from_path(path)?;
    NavModel::from_decl(decl).map_err(ConfigError::Diagnostics)
}

/// Print warning about unknown fields.
fn print_unknown_fields_warning(fields: &[String], path: &Path) {
    let display_path = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy());
    log!("warning"; "unknown fields in {}, ignoring:", display_path);
    for field in fields {
        eprintln!("- {}", field);
    }
}

/// Resolve the declaration path from the `--config` option.
///
/// Bare names are searched upward from the working directory; when nothing
/// is found the cwd-relative path is returned so the IO error names it.
pub fn resolve_config_path(config: &Path) -> PathBuf {
    find_config_file(config).unwrap_or_else(|| config.to_path_buf())
}

// ============================================================================
// tests
// ============================================================================

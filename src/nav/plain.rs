//! Engine-facing plain structure.
//!
//! The rendering engine reads its config as a plain object tree:
//!
//! ```json
//! {
//!   "title": "...",
//!   "description": "...",
//!   "themeConfig": { "nav": [], "sidebar": [], "socialLinks": [] }
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::link::{NavLink, SidebarGroup};
use super::model::NavModel;
use super::social::SocialLink;
use crate::config::{ConfigError, SiteDecl};

#[derive(Serialize)]
struct PlainSite<'a> {
    title: &'a str,
    description: &'a str,
    #[serde(rename = "themeConfig")]
    theme_config: PlainTheme<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlainTheme<'a> {
    nav: &'a [NavLink],
    sidebar: &'a [SidebarGroup],
    social_links: &'a [SocialLink],
}

impl NavModel {
    /// Plain nested structure in declared order, for the engine's loader.
    pub fn to_plain_structure(&self) -> JsonValue {
        let plain = PlainSite {
            title: &self.meta().title,
            description: &self.meta().description,
            theme_config: PlainTheme {
                nav: self.nav(),
                sidebar: self.sidebar(),
                social_links: self.socials(),
            },
        };
        serde_json::to_value(plain).unwrap_or_default()
    }

    /// Build from a plain structure (the inverse of [`Self::to_plain_structure`]).
    pub fn from_plain_structure(value: &JsonValue) -> Result<Self, ConfigError> {
        let decl = SiteDecl::deserialize(value)?;
        Self::from_decl(decl).map_err(ConfigError::Diagnostics)
    }
}

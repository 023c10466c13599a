//! Field paths into a site declaration.

use owo_colors::OwoColorize;
use std::fmt;

/// Location of a value inside the declaration, in the engine's own schema.
///
/// Paths are built while walking the tree, so unlike static config keys they
/// carry sequence indices:
///
/// ```text
/// title
/// themeConfig.nav[0].link
/// themeConfig.sidebar[1].items[0].items[2].text
/// themeConfig.socialLinks[0].icon
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    /// Top-level key (`title`, `themeConfig`, ...).
    pub fn root(key: &str) -> Self {
        Self(key.to_owned())
    }

    /// Child key: `themeConfig` -> `themeConfig.nav`.
    pub fn key(&self, key: &str) -> Self {
        if self.0.is_empty() {
            return Self::root(key);
        }
        Self(format!("{}.{}", self.0, key))
    }

    /// Sequence element: `themeConfig.nav` -> `themeConfig.nav[3]`.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last key of the path, without indices (`...items[0].text` -> `text`).
    pub fn leaf(&self) -> &str {
        let last = self.0.rsplit('.').next().unwrap_or(&self.0);
        last.split('[').next().unwrap_or(last)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

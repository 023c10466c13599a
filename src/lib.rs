//! sitenav - validated navigation model for documentation sites.
//!
//! Site authors declare a nav bar, a sidebar tree and social links; this
//! crate checks the declaration before a static-site engine ever sees it,
//! answers "which entry is active for this page" lookups, and hands the
//! engine a plain structure in its own schema.
//!
//! ```ignore
//! let model = sitenav::config::load(Path::new("nav.toml"))?;
//! let active = model.resolve("/guide/getting-started");
//! let plain = model.to_plain_structure();
//! ```

pub mod config;
pub mod logger;
pub mod nav;
pub mod utils;

pub use config::{ConfigError, NavHandle, SiteDecl, ValidationReport};
pub use nav::{NavLink, NavModel, Resolved, SidebarGroup, SidebarItem, SiteMeta, SocialIcon};

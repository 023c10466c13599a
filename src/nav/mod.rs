//! Navigation model: nav bar, sidebar tree and social links.
//!
//! | Module     | Purpose                                        |
//! |------------|------------------------------------------------|
//! | `link`     | `NavLink`, `SidebarGroup`, `SidebarItem`       |
//! | `social`   | Social icons and links                         |
//! | `route`    | Route normalization, external link detection   |
//! | `model`    | `NavModel::build` and accessors                |
//! | `validate` | Structural checks behind `build`               |
//! | `resolve`  | Active-entry lookup                            |
//! | `plain`    | Engine-facing plain structure                  |

mod link;
mod model;
mod plain;
mod resolve;
pub mod route;
mod social;
mod validate;

pub use link::{NavLink, SidebarGroup, SidebarItem};
pub use model::{NavModel, SiteMeta};
pub use resolve::{Resolved, SidebarItemRef};
pub use social::{SocialIcon, SocialLink, SocialLinkDecl, UnknownIcon};
pub use validate::MAX_SIDEBAR_DEPTH;

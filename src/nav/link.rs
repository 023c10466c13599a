//! Nav bar links and the sidebar tree.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::route::{is_external_link, normalize_route};

/// A leaf navigation reference: display label plus target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Display label.
    pub text: String,
    /// Route path (`/guide/intro`) or absolute URL.
    pub link: String,
}

impl NavLink {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    #[inline]
    pub fn is_external(&self) -> bool {
        is_external_link(self.link.trim())
    }

    /// Normalized form used for uniqueness checks and lookup.
    pub fn route(&self) -> String {
        normalize_route(&self.link)
    }
}

/// A headed, ordered group of sidebar entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Group heading.
    pub text: String,

    /// Entries in reading order.
    pub items: Vec<SidebarItem>,

    /// Render the group folded (`Some(true)`), unfolded but foldable
    /// (`Some(false)`), or not foldable at all (`None`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
}

impl SidebarGroup {
    pub fn new(text: impl Into<String>, items: impl IntoIterator<Item = SidebarItem>) -> Self {
        Self {
            text: text.into(),
            items: items.into_iter().collect(),
            collapsed: None,
        }
    }

    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = Some(collapsed);
        self
    }

    /// All links below this group, depth-first in declared order.
    pub fn links(&self) -> Vec<&NavLink> {
        let mut out = Vec::new();
        collect_links(&self.items, &mut out);
        out
    }
}

fn collect_links<'a>(items: &'a [SidebarItem], out: &mut Vec<&'a NavLink>) {
    for item in items {
        match item {
            SidebarItem::Link(link) => out.push(link),
            SidebarItem::Group(group) => collect_links(&group.items, out),
        }
    }
}

/// Sidebar entry: a link, or a nested group.
///
/// Untagged on the wire: `{text, link}` is a link, `{text, items}` a group.
/// An entry carrying both `link` and `items`, or neither, is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SidebarItem {
    Link(NavLink),
    Group(SidebarGroup),
}

impl SidebarItem {
    pub fn link(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self::Link(NavLink::new(text, link))
    }
}

/// Every key either shape may carry. A plain struct, so unknown keys
/// still reach `serde_ignored`.
#[derive(Deserialize)]
struct RawSidebarItem {
    text: String,
    link: Option<String>,
    items: Option<Vec<SidebarItem>>,
    collapsed: Option<bool>,
}

impl<'de> Deserialize<'de> for SidebarItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let RawSidebarItem {
            text,
            link,
            items,
            collapsed,
        } = RawSidebarItem::deserialize(deserializer)?;

        match (link, items) {
            (Some(link), None) if collapsed.is_none() => Ok(Self::Link(NavLink { text, link })),
            (None, Some(items)) => Ok(Self::Group(SidebarGroup {
                text,
                items,
                collapsed,
            })),
            (Some(_), None) => Err(D::Error::custom(format!(
                "sidebar link `{text}` sets `collapsed`, which only applies to groups"
            ))),
            (Some(_), Some(_)) => Err(D::Error::custom(format!(
                "sidebar item `{text}` has both `link` and `items`, split it into a link and a group"
            ))),
            (None, None) => Err(D::Error::custom(format!(
                "sidebar item `{text}` needs either `link` or `items`"
            ))),
        }
    }
}

impl From<NavLink> for SidebarItem {
    fn from(link: NavLink) -> Self {
        Self::Link(link)
    }
}

impl From<SidebarGroup> for SidebarItem {
    fn from(group: SidebarGroup) -> Self {
        Self::Group(group)
    }
}

//! Active-entry lookup for the rendering engine.

use super::link::{NavLink, SidebarGroup, SidebarItem};
use super::model::{NavModel, Slot};
use super::route::normalize_route;

/// Outcome of [`NavModel::resolve`].
///
/// `NotFound` is an ordinary answer ("no active nav entry"), not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved<'a> {
    Nav(&'a NavLink),
    Sidebar(SidebarItemRef<'a>),
    NotFound,
}

impl<'a> Resolved<'a> {
    /// The matched link, if any.
    pub fn link(&self) -> Option<&'a NavLink> {
        match self {
            Self::Nav(link) => Some(*link),
            Self::Sidebar(item) => Some(item.link),
            Self::NotFound => None,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        !matches!(self, Self::NotFound)
    }
}

/// A sidebar link together with where it sits in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarItemRef<'a> {
    pub link: &'a NavLink,
    /// Group index, then one item index per nesting level.
    pub position: &'a [usize],
    /// Headings of the enclosing groups, outermost first.
    pub trail: Vec<&'a str>,
}

impl SidebarItemRef<'_> {
    /// `Guide › Basics › Intro`
    pub fn breadcrumb(&self) -> String {
        let mut parts = self.trail.clone();
        parts.push(&self.link.text);
        parts.join(" › ")
    }
}

impl NavModel {
    /// Find the entry a page path belongs to.
    ///
    /// The path is normalized like declared routes (`/guide/` matches
    /// `/guide`). The nav bar wins over the sidebar, and earlier entries win
    /// over later ones. Absolute URLs match only themselves.
    pub fn resolve(&self, path: &str) -> Resolved<'_> {
        let key = normalize_route(path);
        match self.slot(&key) {
            Some(Slot::Nav(i)) => self.nav().get(*i).map_or(Resolved::NotFound, Resolved::Nav),
            Some(Slot::Sidebar(position)) => self
                .sidebar_ref(position)
                .map_or(Resolved::NotFound, Resolved::Sidebar),
            None => Resolved::NotFound,
        }
    }

    fn sidebar_ref<'a>(&'a self, position: &'a [usize]) -> Option<SidebarItemRef<'a>> {
        let (first, rest) = position.split_first()?;
        let mut group: &SidebarGroup = self.sidebar().get(*first)?;
        let mut trail = vec![group.text.as_str()];

        for (depth, i) in rest.iter().enumerate() {
            match group.items.get(*i)? {
                SidebarItem::Group(inner) => {
                    group = inner;
                    trail.push(group.text.as_str());
                }
                SidebarItem::Link(link) if depth + 1 == rest.len() => {
                    return Some(SidebarItemRef {
                        link,
                        position,
                        trail,
                    });
                }
                SidebarItem::Link(_) => return None,
            }
        }

        None
    }
}

//! The validated navigation model.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::link::{NavLink, SidebarGroup, SidebarItem};
use super::social::{SocialLink, SocialLinkDecl};
use super::validate;
use crate::config::{SiteDecl, ValidationReport, Warning};

/// Site title and description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
}

impl SiteMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Where a route lives in the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Slot {
    /// Index into the nav bar.
    Nav(usize),
    /// Index path into the sidebar: group, then item per nesting level.
    Sidebar(Vec<usize>),
}

/// Site navigation: nav bar, sidebar tree and social links.
///
/// Only obtainable through [`NavModel::build`], so every instance satisfies
/// the structural invariants (non-empty labels, unique routes, known icons).
/// There are no mutators; reconfiguring means building a new model.
#[derive(Debug, Clone)]
pub struct NavModel {
    meta: SiteMeta,
    nav: Vec<NavLink>,
    sidebar: Vec<SidebarGroup>,
    socials: Vec<SocialLink>,
    /// Normalized link -> first entry declaring it.
    index: FxHashMap<String, Slot>,
    warnings: Vec<Warning>,
}

impl NavModel {
    /// Validate the declared parts and assemble a model.
    ///
    /// All checks run; the error report lists every violation found, in
    /// this order: site meta, labels and links, duplicate routes, social
    /// links.
    pub fn build(
        meta: SiteMeta,
        nav: Vec<NavLink>,
        sidebar: Vec<SidebarGroup>,
        socials: Vec<SocialLinkDecl>,
    ) -> Result<Self, ValidationReport> {
        let mut report = ValidationReport::new();

        validate::check_meta(&meta, &mut report);
        validate::check_entries(&nav, &sidebar, &mut report);
        validate::check_routes(&nav, &sidebar, &mut report);
        let socials = validate::check_socials(&socials, &mut report);

        let warnings = report.into_result()?;
        let index = build_index(&nav, &sidebar);

        crate::debug!("nav"; "indexed {} links", index.len());

        Ok(Self {
            meta,
            nav,
            sidebar,
            socials,
            index,
            warnings,
        })
    }

    /// Build from a parsed declaration.
    pub fn from_decl(decl: SiteDecl) -> Result<Self, ValidationReport> {
        let SiteDecl {
            title,
            description,
            theme_config,
        } = decl;
        Self::build(
            SiteMeta { title, description },
            theme_config.nav,
            theme_config.sidebar,
            theme_config.social_links,
        )
    }

    pub fn meta(&self) -> &SiteMeta {
        &self.meta
    }

    pub fn nav(&self) -> &[NavLink] {
        &self.nav
    }

    pub fn sidebar(&self) -> &[SidebarGroup] {
        &self.sidebar
    }

    pub fn socials(&self) -> &[SocialLink] {
        &self.socials
    }

    /// Non-fatal findings from validation.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Number of distinct site-relative routes.
    pub fn route_count(&self) -> usize {
        self.index
            .keys()
            .filter(|key| !super::route::is_external_link(key))
            .count()
    }

    /// Number of sidebar links at any depth.
    pub fn sidebar_link_count(&self) -> usize {
        self.sidebar.iter().map(|group| group.links().len()).sum()
    }

    pub(crate) fn slot(&self, key: &str) -> Option<&Slot> {
        self.index.get(key)
    }
}

/// Map every normalized link to its first declaration (nav before sidebar).
fn build_index(nav: &[NavLink], sidebar: &[SidebarGroup]) -> FxHashMap<String, Slot> {
    let mut index = FxHashMap::default();

    for (i, link) in nav.iter().enumerate() {
        index.entry(link.route()).or_insert(Slot::Nav(i));
    }

    for (i, group) in sidebar.iter().enumerate() {
        let mut position = vec![i];
        index_group(group, &mut position, &mut index);
    }

    index
}

fn index_group(
    group: &SidebarGroup,
    position: &mut Vec<usize>,
    index: &mut FxHashMap<String, Slot>,
) {
    for (i, item) in group.items.iter().enumerate() {
        position.push(i);
        match item {
            SidebarItem::Link(link) => {
                index
                    .entry(link.route())
                    .or_insert_with(|| Slot::Sidebar(position.clone()));
            }
            SidebarItem::Group(inner) => index_group(inner, position, index),
        }
        position.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Rule;
    use crate::nav::SocialIcon;

    fn meta() -> SiteMeta {
        SiteMeta::new("Docs", "Project documentation")
    }

    #[test]
    fn test_build_valid_model() {
        let model = NavModel::build(
            meta(),
            vec![
                NavLink::new("Home", "/"),
                NavLink::new("Examples", "/markdown-examples"),
            ],
            vec![SidebarGroup::new(
                "Examples",
                [
                    SidebarItem::link("Markdown Examples", "/markdown-examples/"),
                    SidebarItem::link("Runtime API Examples", "/api-examples"),
                ],
            )],
            vec![SocialLinkDecl::new("github", "https://github.com/vuejs/vitepress")],
        );
        // The sidebar repeats a nav route
        let report = model.unwrap_err();
        assert_eq!(report.len(), 1);
        assert_eq!(report.errors()[0].rule, Rule::DuplicateRoute);

        let model = NavModel::build(
            meta(),
            vec![NavLink::new("Home", "/")],
            vec![SidebarGroup::new(
                "Examples",
                [
                    SidebarItem::link("Markdown Examples", "/markdown-examples"),
                    SidebarItem::link("Runtime API Examples", "/api-examples"),
                ],
            )],
            vec![SocialLinkDecl::new("github", "https://github.com/vuejs/vitepress")],
        )
        .unwrap();

        assert_eq!(model.meta().title, "Docs");
        assert_eq!(model.nav().len(), 1);
        assert_eq!(model.sidebar_link_count(), 2);
        assert_eq!(model.route_count(), 3);
        assert_eq!(model.socials()[0].icon, SocialIcon::Github);
        assert!(model.warnings().is_empty());
    }

    #[test]
    fn test_duplicate_route_reported_once() {
        let report = NavModel::build(
            meta(),
            vec![NavLink::new("Home", "/")],
            vec![SidebarGroup::new("G", [SidebarItem::link("X", "/")])],
            vec![],
        )
        .unwrap_err();

        assert_eq!(report.len(), 1);
        let diag = &report.errors()[0];
        assert_eq!(diag.rule, Rule::DuplicateRoute);
        assert!(diag.message.contains("`/`"));
    }

    #[test]
    fn test_empty_text_names_field() {
        for text in ["", "   ", "\t\n"] {
            let report = NavModel::build(
                meta(),
                vec![NavLink::new("Home", "/")],
                vec![SidebarGroup::new(
                    "Guide",
                    [
                        SidebarItem::link("Intro", "/intro"),
                        SidebarItem::link(text, "/setup"),
                    ],
                )],
                vec![],
            )
            .unwrap_err();

            assert_eq!(report.len(), 1);
            let diag = &report.errors()[0];
            assert_eq!(diag.rule, Rule::EmptyText);
            assert_eq!(diag.field.as_str(), "themeConfig.sidebar[0].items[1].text");
        }
    }

    #[test]
    fn test_unknown_icon_names_icon() {
        let report = NavModel::build(
            meta(),
            vec![],
            vec![],
            vec![SocialLinkDecl::new("unknown-platform", "https://example.com")],
        )
        .unwrap_err();

        assert_eq!(report.len(), 1);
        assert_eq!(report.errors()[0].rule, Rule::UnknownIcon);
        assert!(report.errors()[0].field.as_str().ends_with("icon"));
    }

    #[test]
    fn test_independent_violations_all_reported() {
        let report = NavModel::build(
            meta(),
            vec![NavLink::new("", "/a"), NavLink::new("A", "/b")],
            vec![SidebarGroup::new("G", [SidebarItem::link("B", "/b/")])],
            vec![],
        )
        .unwrap_err();

        let rules: Vec<_> = report.errors().iter().map(|d| d.rule).collect();
        assert_eq!(rules, [Rule::EmptyText, Rule::DuplicateRoute]);
        assert_eq!(report.errors()[0].field.as_str(), "themeConfig.nav[0].text");
        assert_eq!(
            report.errors()[1].field.as_str(),
            "themeConfig.sidebar[0].items[0].link"
        );
    }

    #[test]
    fn test_meta_checked_first() {
        let report = NavModel::build(
            SiteMeta::new("", ""),
            vec![NavLink::new("", "/")],
            vec![],
            vec![SocialLinkDecl::new("myspace", "https://myspace.com")],
        )
        .unwrap_err();

        let fields: Vec<_> = report.errors().iter().map(|d| d.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "title",
                "description",
                "themeConfig.nav[0].text",
                "themeConfig.socialLinks[0].icon",
            ]
        );
    }

    #[test]
    fn test_nested_group_routes_are_unique() {
        let report = NavModel::build(
            meta(),
            vec![],
            vec![
                SidebarGroup::new("A", [SidebarItem::link("One", "/one")]),
                SidebarGroup::new(
                    "B",
                    [SidebarItem::Group(SidebarGroup::new(
                        "Inner",
                        [SidebarItem::link("Again", "/one")],
                    ))],
                ),
            ],
            vec![],
        )
        .unwrap_err();

        assert_eq!(report.len(), 1);
        assert_eq!(
            report.errors()[0].field.as_str(),
            "themeConfig.sidebar[1].items[0].items[0].link"
        );
    }

    #[test]
    fn test_warnings_kept_on_success() {
        let model = NavModel::build(
            meta(),
            vec![NavLink::new("Guide", "guide/")],
            vec![SidebarGroup::new("Empty", [])],
            vec![],
        )
        .unwrap();
        assert_eq!(model.warnings().len(), 2);
    }

    #[test]
    fn test_model_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NavModel>();
    }
}

//! Structural checks run by [`NavModel::build`](super::NavModel::build).
//!
//! Passes run in a fixed order and each one sees the whole declaration:
//!
//! | Pass     | Rules                                         |
//! |----------|-----------------------------------------------|
//! | meta     | `EmptyText` on title/description              |
//! | entries  | `EmptyText`, `EmptyLink`, `NestingTooDeep`    |
//! | routes   | `DuplicateRoute`                              |
//! | socials  | `UnknownIcon`, `InvalidUrl`                   |
//!
//! Errors from every pass end up in one report, in pass order.

use rustc_hash::FxHashMap;

use super::link::{NavLink, SidebarGroup, SidebarItem};
use super::model::SiteMeta;
use super::route::{is_page_relative, normalize_route};
use super::social::{SocialIcon, SocialLink, SocialLinkDecl};
use crate::config::{FieldPath, Rule, ValidationReport};

/// Deepest supported group nesting (top-level groups are depth 1).
pub const MAX_SIDEBAR_DEPTH: usize = 6;

/// Field names of the engine schema.
pub(crate) mod keys {
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const THEME: &str = "themeConfig";
    pub const NAV: &str = "nav";
    pub const SIDEBAR: &str = "sidebar";
    pub const SOCIAL_LINKS: &str = "socialLinks";
    pub const ITEMS: &str = "items";
    pub const TEXT: &str = "text";
    pub const LINK: &str = "link";
    pub const ICON: &str = "icon";
}

/// One node seen while walking nav + sidebar.
pub(crate) enum Entry<'a> {
    Link(&'a NavLink),
    Group { group: &'a SidebarGroup, depth: usize },
}

/// Visit every nav link, then every sidebar node depth-first, in declared order.
pub(crate) fn walk<'a>(
    nav: &'a [NavLink],
    sidebar: &'a [SidebarGroup],
    visit: &mut dyn FnMut(&FieldPath, Entry<'a>),
) {
    let theme = FieldPath::root(keys::THEME);

    let nav_path = theme.key(keys::NAV);
    for (i, link) in nav.iter().enumerate() {
        visit(&nav_path.index(i), Entry::Link(link));
    }

    let sidebar_path = theme.key(keys::SIDEBAR);
    for (i, group) in sidebar.iter().enumerate() {
        walk_group(&sidebar_path.index(i), group, 1, visit);
    }
}

fn walk_group<'a>(
    path: &FieldPath,
    group: &'a SidebarGroup,
    depth: usize,
    visit: &mut dyn FnMut(&FieldPath, Entry<'a>),
) {
    visit(path, Entry::Group { group, depth });

    let items_path = path.key(keys::ITEMS);
    for (i, item) in group.items.iter().enumerate() {
        let item_path = items_path.index(i);
        match item {
            SidebarItem::Link(link) => visit(&item_path, Entry::Link(link)),
            SidebarItem::Group(inner) => walk_group(&item_path, inner, depth + 1, visit),
        }
    }
}

pub(crate) fn check_meta(meta: &SiteMeta, report: &mut ValidationReport) {
    for (key, value) in [
        (keys::TITLE, &meta.title),
        (keys::DESCRIPTION, &meta.description),
    ] {
        if value.trim().is_empty() {
            report.error(
                FieldPath::root(key),
                Rule::EmptyText,
                format!("site {key} must not be empty"),
            );
        }
    }
}

pub(crate) fn check_entries(
    nav: &[NavLink],
    sidebar: &[SidebarGroup],
    report: &mut ValidationReport,
) {
    walk(nav, sidebar, &mut |path: &FieldPath, entry: Entry<'_>| match entry {
        Entry::Link(link) => {
            check_text(path, &link.text, report);
            let link_path = path.key(keys::LINK);
            if link.link.trim().is_empty() {
                report.error(link_path, Rule::EmptyLink, "link target must not be empty");
            } else if is_page_relative(&link.link) {
                report.warn(
                    link_path,
                    format!(
                        "`{}` is relative to the current page, did you mean `/{}`?",
                        link.link.trim(),
                        link.link.trim()
                    ),
                );
            }
        }
        Entry::Group { group, depth } => {
            check_text(path, &group.text, report);
            if depth == MAX_SIDEBAR_DEPTH + 1 {
                report.error_with_hint(
                    path.clone(),
                    Rule::NestingTooDeep,
                    format!("sidebar groups are nested {depth} levels deep"),
                    format!("at most {MAX_SIDEBAR_DEPTH} levels are supported, flatten this group"),
                );
            }
            if group.items.is_empty() {
                report.warn(path.key(keys::ITEMS), "sidebar group has no items");
            }
        }
    });
}

fn check_text(path: &FieldPath, text: &str, report: &mut ValidationReport) {
    if text.trim().is_empty() {
        report.error(
            path.key(keys::TEXT),
            Rule::EmptyText,
            "display text must not be empty",
        );
    }
}

/// Report every later claim of an already-claimed route.
///
/// External links are exempt: several entries may point at the same site.
pub(crate) fn check_routes(
    nav: &[NavLink],
    sidebar: &[SidebarGroup],
    report: &mut ValidationReport,
) {
    let mut claimed: FxHashMap<String, FieldPath> = FxHashMap::default();

    walk(nav, sidebar, &mut |path: &FieldPath, entry: Entry<'_>| {
        let Entry::Link(link) = entry else { return };
        if link.is_external() || link.link.trim().is_empty() {
            return;
        }

        let route = normalize_route(&link.link);
        let link_path = path.key(keys::LINK);
        match claimed.get(&route) {
            Some(first) => report.error_with_hint(
                link_path,
                Rule::DuplicateRoute,
                format!("route `{route}` is declared more than once"),
                format!("first declared at {}", first.as_str()),
            ),
            None => {
                claimed.insert(route, link_path);
            }
        }
    });
}

/// Validate social links, returning the typed ones that passed.
pub(crate) fn check_socials(
    socials: &[SocialLinkDecl],
    report: &mut ValidationReport,
) -> Vec<SocialLink> {
    let base = FieldPath::root(keys::THEME).key(keys::SOCIAL_LINKS);
    let mut valid = Vec::with_capacity(socials.len());

    for (i, decl) in socials.iter().enumerate() {
        let path = base.index(i);

        let icon = match decl.icon.parse::<SocialIcon>() {
            Ok(icon) => Some(icon),
            Err(err) => {
                report.error_with_hint(
                    path.key(keys::ICON),
                    Rule::UnknownIcon,
                    err.to_string(),
                    format!("use one of: {}", SocialIcon::known_names()),
                );
                None
            }
        };

        let link_ok = check_social_url(&path.key(keys::LINK), &decl.link, report);

        if let Some(icon) = icon
            && link_ok
        {
            valid.push(SocialLink {
                icon,
                link: decl.link.clone(),
            });
        }
    }

    valid
}

fn check_social_url(path: &FieldPath, link: &str, report: &mut ValidationReport) -> bool {
    const HINT: &str = "use format like https://github.com/your-org";

    if link.trim() != link {
        report.error_with_hint(
            path.clone(),
            Rule::InvalidUrl,
            format!("URL `{link}` has surrounding whitespace"),
            "remove the spaces around the URL",
        );
        return false;
    }

    let message = match url::Url::parse(link) {
        Ok(parsed) if !matches!(parsed.scheme(), "http" | "https") => format!(
            "scheme '{}' not supported, must be http or https",
            parsed.scheme()
        ),
        Ok(parsed) if parsed.host_str().is_none() => "URL must have a valid host".to_owned(),
        Ok(_) => return true,
        Err(e) => format!("invalid URL: {e}"),
    };

    report.error_with_hint(path.clone(), Rule::InvalidUrl, message, HINT);
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(report: &ValidationReport) -> Vec<&str> {
        report.errors().iter().map(|d| d.field.as_str()).collect()
    }

    #[test]
    fn test_walk_order() {
        let nav = vec![NavLink::new("Home", "/")];
        let sidebar = vec![SidebarGroup::new(
            "Guide",
            [
                SidebarItem::link("Intro", "/intro"),
                SidebarGroup::new("Deep", [SidebarItem::link("X", "/x")]).into(),
            ],
        )];

        let mut seen = Vec::new();
        walk(&nav, &sidebar, &mut |path: &FieldPath, entry: Entry<'_>| {
            let tag = match entry {
                Entry::Link(_) => "link",
                Entry::Group { .. } => "group",
            };
            seen.push(format!("{tag} {}", path.as_str()));
        });

        assert_eq!(
            seen,
            [
                "link themeConfig.nav[0]",
                "group themeConfig.sidebar[0]",
                "link themeConfig.sidebar[0].items[0]",
                "group themeConfig.sidebar[0].items[1]",
                "link themeConfig.sidebar[0].items[1].items[0]",
            ]
        );
    }

    #[test]
    fn test_check_meta_whitespace() {
        let mut report = ValidationReport::new();
        check_meta(
            &SiteMeta::new("  ", "A description"),
            &mut report,
        );
        assert_eq!(paths(&report), ["title"]);
        assert_eq!(report.errors()[0].rule, Rule::EmptyText);
    }

    #[test]
    fn test_check_entries_reports_group_heading() {
        let sidebar = vec![SidebarGroup::new(" ", [SidebarItem::link("A", "/a")])];
        let mut report = ValidationReport::new();
        check_entries(&[], &sidebar, &mut report);
        assert_eq!(paths(&report), ["themeConfig.sidebar[0].text"]);
    }

    #[test]
    fn test_check_entries_empty_link() {
        let nav = vec![NavLink::new("Home", "  ")];
        let mut report = ValidationReport::new();
        check_entries(&nav, &[], &mut report);
        assert_eq!(paths(&report), ["themeConfig.nav[0].link"]);
        assert_eq!(report.errors()[0].rule, Rule::EmptyLink);
    }

    #[test]
    fn test_check_entries_warns_on_page_relative_route() {
        let nav = vec![NavLink::new("Guide", "guide/intro")];
        let mut report = ValidationReport::new();
        check_entries(&nav, &[], &mut report);
        assert!(report.is_empty());
        assert_eq!(report.warnings().len(), 1);
        assert_eq!(report.warnings()[0].field.as_str(), "themeConfig.nav[0].link");
    }

    #[test]
    fn test_nesting_depth_limit() {
        let mut group = SidebarGroup::new("leaf", [SidebarItem::link("A", "/a")]);
        for level in 0..MAX_SIDEBAR_DEPTH {
            group = SidebarGroup::new(format!("level {level}"), [SidebarItem::Group(group)]);
        }
        // MAX_SIDEBAR_DEPTH + 1 levels in total
        let mut report = ValidationReport::new();
        check_entries(&[], &[group.clone()], &mut report);
        assert_eq!(report.by_rule(Rule::NestingTooDeep).count(), 1);

        let SidebarItem::Group(shallower) = &group.items[0] else {
            panic!("expected nested group");
        };
        let mut report = ValidationReport::new();
        check_entries(&[], &[shallower.clone()], &mut report);
        assert!(report.is_empty());
    }

    #[test]
    fn test_check_routes_ignores_external_duplicates() {
        let nav = vec![
            NavLink::new("Repo", "https://github.com/org"),
            NavLink::new("Source", "https://github.com/org"),
        ];
        let mut report = ValidationReport::new();
        check_routes(&nav, &[], &mut report);
        assert!(report.is_empty());
    }

    #[test]
    fn test_check_routes_trailing_slash() {
        let nav = vec![NavLink::new("Guide", "/guide/")];
        let sidebar = vec![SidebarGroup::new(
            "Guide",
            [SidebarItem::link("Overview", "/guide")],
        )];
        let mut report = ValidationReport::new();
        check_routes(&nav, &sidebar, &mut report);

        assert_eq!(paths(&report), ["themeConfig.sidebar[0].items[0].link"]);
        let diag = &report.errors()[0];
        assert!(diag.message.contains("/guide"));
        assert_eq!(
            diag.hint.as_deref(),
            Some("first declared at themeConfig.nav[0].link")
        );
    }

    #[test]
    fn test_check_socials() {
        let socials = vec![
            SocialLinkDecl::new("github", "https://github.com/org"),
            SocialLinkDecl::new("unknown-platform", "https://example.com"),
            SocialLinkDecl::new("discord", "ftp://chat.example.com"),
            SocialLinkDecl::new("x", "not a url"),
        ];
        let mut report = ValidationReport::new();
        let valid = check_socials(&socials, &mut report);

        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].icon, SocialIcon::Github);
        assert_eq!(
            paths(&report),
            [
                "themeConfig.socialLinks[1].icon",
                "themeConfig.socialLinks[2].link",
                "themeConfig.socialLinks[3].link",
            ]
        );
        assert_eq!(report.errors()[0].rule, Rule::UnknownIcon);
        assert_eq!(report.errors()[0].field.leaf(), "icon");
        assert_eq!(report.errors()[1].rule, Rule::InvalidUrl);
    }

    #[test]
    fn test_check_socials_rejects_surrounding_whitespace() {
        let socials = vec![
            SocialLinkDecl::new(" github ", "https://github.com/org"),
            SocialLinkDecl::new("github", "https://github.com/org "),
        ];
        let mut report = ValidationReport::new();
        let valid = check_socials(&socials, &mut report);

        assert!(valid.is_empty());
        assert_eq!(
            paths(&report),
            [
                "themeConfig.socialLinks[0].icon",
                "themeConfig.socialLinks[1].link",
            ]
        );
        assert!(report.errors()[1].message.contains("whitespace"));
    }
}

//! `sitenav resolve`: active-entry lookup from the command line.

use owo_colors::OwoColorize;
use sitenav::Resolved;

/// Human-readable answer for one lookup.
pub fn describe(resolved: &Resolved<'_>, path: &str) -> String {
    match resolved {
        Resolved::Nav(link) => format!("{} › {} ({})", "nav".cyan(), link.text, link.link),
        Resolved::Sidebar(item) => format!(
            "{} › {} ({})",
            "sidebar".cyan(),
            item.breadcrumb(),
            item.link.link
        ),
        Resolved::NotFound => format!("no active nav entry for `{}`", path.trim()),
    }
}

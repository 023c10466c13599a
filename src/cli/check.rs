//! `sitenav check`: validation summary.

use std::path::Path;

use sitenav::NavModel;
use sitenav::log;

/// Log a one-line summary of a model that passed validation.
pub fn report_summary(path: &Path, model: &NavModel) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy());
    log!("check"; "{} is valid: {}", name, summary(model));
}

fn summary(model: &NavModel) -> String {
    [
        (model.nav().len(), "nav link"),
        (model.sidebar().len(), "sidebar group"),
        (model.sidebar_link_count(), "sidebar link"),
        (model.route_count(), "route"),
        (model.socials().len(), "social link"),
    ]
    .map(|(count, noun)| match count {
        1 => format!("1 {noun}"),
        n => format!("{n} {noun}s"),
    })
    .join(", ")
}

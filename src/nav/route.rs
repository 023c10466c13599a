//! Route helpers shared by validation and lookup.
//!
//! A route is a site-relative link (`/guide/intro`). Anything with a URL
//! scheme (`https:`, `mailto:`) is an external link and is never normalized
//! beyond trimming.

/// Check if a link is external (has a URL scheme like http:, mailto:, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Normalize a link for comparison.
///
/// Routes lose trailing slashes (`/guide/` -> `/guide`) except the root,
/// which stays `/`. External links are only trimmed.
pub fn normalize_route(link: &str) -> String {
    let trimmed = link.trim();
    if trimmed.is_empty() || is_external_link(trimmed) {
        return trimmed.to_owned();
    }
    match trimmed.trim_end_matches('/') {
        "" => "/".to_owned(),
        stripped => stripped.to_owned(),
    }
}

/// Routes are expected to be site-absolute; `guide/intro` resolves against
/// whatever page the reader is on.
#[inline]
pub fn is_page_relative(link: &str) -> bool {
    let link = link.trim();
    !link.is_empty() && !is_external_link(link) && !link.starts_with(['/', '#'])
}

//! Social links shown in the site header.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Platforms the rendering engine ships icons for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Bluesky,
    Discord,
    Facebook,
    Github,
    Instagram,
    Linkedin,
    Mastodon,
    Npm,
    Slack,
    Twitter,
    X,
    Youtube,
}

impl SocialIcon {
    pub const ALL: [Self; 12] = [
        Self::Bluesky,
        Self::Discord,
        Self::Facebook,
        Self::Github,
        Self::Instagram,
        Self::Linkedin,
        Self::Mastodon,
        Self::Npm,
        Self::Slack,
        Self::Twitter,
        Self::X,
        Self::Youtube,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bluesky => "bluesky",
            Self::Discord => "discord",
            Self::Facebook => "facebook",
            Self::Github => "github",
            Self::Instagram => "instagram",
            Self::Linkedin => "linkedin",
            Self::Mastodon => "mastodon",
            Self::Npm => "npm",
            Self::Slack => "slack",
            Self::Twitter => "twitter",
            Self::X => "x",
            Self::Youtube => "youtube",
        }
    }

    /// Comma-separated list of accepted names, for hints.
    pub fn known_names() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }
}

impl fmt::Display for SocialIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon name outside [`SocialIcon::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown social icon `{0}`")]
pub struct UnknownIcon(pub String);

impl FromStr for SocialIcon {
    type Err = UnknownIcon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| UnknownIcon(s.to_owned()))
    }
}

/// Social link as authored; the icon is still free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinkDecl {
    pub icon: String,
    pub link: String,
}

impl SocialLinkDecl {
    pub fn new(icon: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            link: link.into(),
        }
    }
}

/// Validated social link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_icons() {
        for icon in SocialIcon::ALL {
            assert_eq!(icon.as_str().parse::<SocialIcon>(), Ok(icon));
        }
    }

    #[test]
    fn test_parse_unknown_icon() {
        let err = "unknown-platform".parse::<SocialIcon>().unwrap_err();
        assert_eq!(err, UnknownIcon("unknown-platform".into()));
        assert!("GitHub".parse::<SocialIcon>().is_err());
        assert!(" github ".parse::<SocialIcon>().is_err());
    }

    #[test]
    fn test_icon_serializes_lowercase() {
        let link = SocialLink {
            icon: SocialIcon::Github,
            link: "https://github.com/org".into(),
        };
        let json = serde_json::to_value(link).unwrap();
        assert_eq!(json["icon"], "github");
    }
}

//! `sitenav init`: starter declaration.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use sitenav::log;

/// Starter declaration written by `sitenav init`.
const STARTER: &str = r#"# Site navigation, in the rendering engine's config schema.
# Run `sitenav check` after editing.

title = "My Docs"
description = "Project documentation"

[themeConfig]
nav = [
  { text = "Home", link = "/" },
  { text = "Guide", link = "/guide/" },
]

[[themeConfig.sidebar]]
text = "Guide"
items = [
  { text = "Getting Started", link = "/guide/getting-started" },
  { text = "Configuration", link = "/guide/configuration" },
]

[[themeConfig.sidebar]]
text = "Reference"
collapsed = true
items = [
  { text = "CLI", link = "/reference/cli" },
]

[[themeConfig.socialLinks]]
icon = "github"
link = "https://github.com/your-org/your-project"
"#;

/// Write the starter declaration into `dir` (or the current directory).
pub fn new_declaration(dir: Option<&Path>, config: &Path) -> Result<()> {
    let root = match dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().context("Failed to get current working directory")?,
    };
    let file_name = config.file_name().unwrap_or(config.as_os_str());
    let path = root.join(file_name);

    write_starter(&path)?;
    log!("init"; "created {}", path.display());
    Ok(())
}

fn write_starter(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("'{}' already exists, refusing to overwrite", path.display());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, STARTER)
        .with_context(|| format!("Failed to write declaration '{}'", path.display()))
}

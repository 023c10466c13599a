//! Declaration file discovery.

use std::path::{Path, PathBuf};

/// Find the declaration by searching upward from the current directory.
///
/// ```text
/// /home/user/docs/guide/   ← cwd
/// /home/user/docs/nav.toml ← found
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }
    let cwd = std::env::current_dir().ok()?;
    find_upward(&cwd, config_name)
}

/// Walk from `start` to the filesystem root looking for `name`.
fn find_upward(start: &Path, name: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.exists())
}

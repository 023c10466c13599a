//! Current navigation model with atomic reload.
//!
//! Uses `arc-swap` for lock-free reads and atomic replacement: readers hold
//! an `Arc<NavModel>` that stays valid while a reload swaps in a new one.

use crate::config::{ConfigError, SiteDecl, read_source};
use crate::nav::NavModel;
use crate::utils::hash;
use arc_swap::ArcSwap;
use std::path::{Path, PathBuf};
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

/// Shared owner of the current `NavModel`.
#[derive(Debug)]
pub struct NavHandle {
    current: ArcSwap<NavModel>,
    /// Declaration file backing this handle, if loaded from disk.
    source: Option<PathBuf>,
    /// Hash of the declaration content behind `current`.
    source_hash: AtomicU64,
}

impl NavHandle {
    /// Wrap an already built model (no reload source).
    pub fn new(model: NavModel) -> Self {
        Self {
            current: ArcSwap::from_pointee(model),
            source: None,
            source_hash: AtomicU64::new(0),
        }
    }

    /// Load and validate a declaration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = read_source(path)?;
        let model = build_from_source(path, &content)?;
        Ok(Self {
            current: ArcSwap::from_pointee(model),
            source: Some(path.to_path_buf()),
            source_hash: AtomicU64::new(hash::compute(content.as_bytes())),
        })
    }

    #[inline]
    pub fn current(&self) -> Arc<NavModel> {
        self.current.load_full()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Replace the model, returning the previous one.
    pub fn swap(&self, model: NavModel) -> Arc<NavModel> {
        self.current.swap(Arc::new(model))
    }

    /// Reload from the source file if its content changed.
    ///
    /// Returns `Ok(true)` if the model was replaced, `Ok(false)` if the file
    /// is unchanged or the handle has no source. On error the current model
    /// stays in place.
    pub fn reload(&self) -> Result<bool, ConfigError> {
        let Some(path) = &self.source else {
            return Ok(false);
        };

        let content = read_source(path)?;
        let new_hash = hash::compute(content.as_bytes());
        if new_hash == self.source_hash.load(Ordering::Relaxed) {
            return Ok(false);
        }

        let model = build_from_source(path, &content)?;
        self.current.store(Arc::new(model));
        self.source_hash.store(new_hash, Ordering::Relaxed);

        crate::debug!("reload"; "navigation reloaded from {}", path.display());
        Ok(true)
    }
}

fn build_from_source(path: &Path, content: &str) -> Result<NavModel, ConfigError> {
    let decl = SiteDecl::from_source(path, content)?;
    NavModel::from_decl(decl).map_err(ConfigError::Diagnostics)
}

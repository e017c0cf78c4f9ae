//! Filesystem-based asset source for loading piece SVGs.

use gpui::{AssetSource, SharedString};
use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Looks for assets next to the executable first, then in the working directory
pub struct FileAssets {
    roots: Vec<PathBuf>,
}

impl FileAssets {
    pub fn new() -> Self {
        let mut roots = Vec::new();
        if let Some(dir) = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        {
            roots.push(dir);
        }
        match std::env::current_dir() {
            Ok(dir) => roots.push(dir),
            Err(err) => warn!(
                %err,
                "no working directory; assets resolve next to the executable only"
            ),
        }
        Self { roots }
    }

    fn candidates(&self, path: &str) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self.roots.iter().map(|root| root.join(path)).collect();
        paths.push(PathBuf::from(path));
        paths
    }
}

impl Default for FileAssets {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetSource for FileAssets {
    fn load(&self, path: &str) -> gpui::Result<Option<Cow<'static, [u8]>>> {
        for p in self.candidates(path) {
            if let Ok(data) = fs::read(&p) {
                debug!(path = %p.display(), "asset loaded");
                return Ok(Some(Cow::Owned(data)));
            }
        }
        warn!(path, "asset not found");
        Ok(None)
    }

    fn list(&self, path: &str) -> gpui::Result<Vec<SharedString>> {
        let mut results = Vec::new();
        for dir in self.roots.iter().map(|root| root.join(path)) {
            let Ok(entries) = fs::read_dir(&dir) else {
                continue;
            };
            for entry in entries.flatten() {
                if let Some(name) = entry.file_name().to_str() {
                    results.push(SharedString::from(name.to_string()));
                }
            }
            break;
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_asset_is_none() {
        let assets = FileAssets::new();
        let loaded = assets.load("assets/pieces/nowhere/wQ.svg").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_loads_from_working_directory() {
        let assets = FileAssets::new();
        let loaded = assets.load("Cargo.toml").unwrap();
        assert!(loaded.is_some());
    }
}

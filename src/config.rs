use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;

use crate::{
    assets::{fonts::FontBook, loader::AssetLoader, source::FsAssetSource},
    catalog::{
        instances::InstanceStore,
        json::{INSTANCES_FILE, JsonCatalog},
    },
    foundation::error::LayerstackResult,
};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Locations of the record files, asset files and fonts.
pub struct StoreConfig {
    /// Directory holding `products.json`, `decorations.json`, `projects.json` and
    /// `instances.json`.
    pub data_dir: PathBuf,
    /// Root that asset `filePath`s are relative to.
    pub storage_root: PathBuf,
    /// Font directory; defaults to `<storageRoot>/fonts`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts_dir: Option<PathBuf>,
}

impl StoreConfig {
    /// Config with the default font directory.
    pub fn new(data_dir: impl Into<PathBuf>, storage_root: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            storage_root: storage_root.into(),
            fonts_dir: None,
        }
    }

    /// Read a JSON config file. Relative directories resolve against the file's directory.
    pub fn from_path(path: impl AsRef<Path>) -> LayerstackResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let mut cfg: Self = serde_json::from_str(&text)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        cfg.data_dir = base.join(&cfg.data_dir);
        cfg.storage_root = base.join(&cfg.storage_root);
        cfg.fonts_dir = cfg.fonts_dir.map(|d| base.join(d));
        Ok(cfg)
    }

    /// Effective font directory.
    pub fn fonts_dir(&self) -> PathBuf {
        self.fonts_dir
            .clone()
            .unwrap_or_else(|| self.storage_root.join("fonts"))
    }

    /// Path of the instance override records.
    pub fn instances_path(&self) -> PathBuf {
        self.data_dir.join(INSTANCES_FILE)
    }

    /// Load the record catalog.
    pub fn open_catalog(&self) -> LayerstackResult<JsonCatalog> {
        JsonCatalog::load(&self.data_dir)
    }

    /// Open the instance store for editing.
    pub fn open_instances(&self) -> LayerstackResult<InstanceStore> {
        InstanceStore::open(self.instances_path())
    }

    /// Asset loader reading from `storageRoot` with the fonts found in the font directory.
    pub fn asset_loader(&self) -> LayerstackResult<AssetLoader> {
        let fonts = FontBook::from_dir(self.fonts_dir())?;
        Ok(AssetLoader::new(
            Arc::new(FsAssetSource::new(self.storage_root.clone())),
            Arc::new(fonts),
        ))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::foundation::error::{LayerstackError, LayerstackResult};

/// Byte access to stored asset files by their record-relative path.
pub trait AssetSource: Send + Sync {
    /// Read the file stored under `file_path`.
    fn read(&self, file_path: &str) -> LayerstackResult<Vec<u8>>;
}

#[derive(Clone, Debug)]
/// Asset files under a storage root directory.
pub struct FsAssetSource {
    root: PathBuf,
}

impl FsAssetSource {
    /// Resolve files relative to `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Storage root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetSource for FsAssetSource {
    fn read(&self, file_path: &str) -> LayerstackResult<Vec<u8>> {
        let norm = normalize_rel_path(file_path)?;
        let path = self.root.join(Path::new(&norm));
        match std::fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(LayerstackError::not_found(
                format!("asset file '{}'", path.display()),
            )),
            Err(e) => Err(anyhow::Error::new(e))
                .with_context(|| format!("read asset bytes from '{}'", path.display()))
                .map_err(LayerstackError::from),
        }
    }
}

#[derive(Clone, Debug, Default)]
/// Asset files held in memory, keyed by normalized path.
pub struct MemoryAssetSource {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryAssetSource {
    /// Empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `bytes` under `file_path`, replacing any previous file.
    pub fn insert(&mut self, file_path: &str, bytes: Vec<u8>) -> LayerstackResult<()> {
        self.files.insert(normalize_rel_path(file_path)?, bytes);
        Ok(())
    }
}

impl AssetSource for MemoryAssetSource {
    fn read(&self, file_path: &str) -> LayerstackResult<Vec<u8>> {
        let norm = normalize_rel_path(file_path)?;
        self.files
            .get(&norm)
            .cloned()
            .ok_or_else(|| LayerstackError::not_found(format!("asset file '{norm}'")))
    }
}

/// Normalize and validate a storage-relative asset path.
///
/// The result uses `/` separators and has no `.` segments. Absolute paths, empty paths and
/// parent traversals (`..`) are rejected.
pub fn normalize_rel_path(source: &str) -> LayerstackResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(LayerstackError::invalid_metadata(format!(
            "asset path '{source}' must be relative"
        )));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(LayerstackError::invalid_metadata(format!(
                "asset path '{source}' must not contain '..'"
            )));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(LayerstackError::invalid_metadata(
            "asset path must contain a file name",
        ));
    }
    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;

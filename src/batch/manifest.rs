use sha2::{Digest, Sha256};

use crate::foundation::error::ErrorKind;

/// Name of the manifest entry written last into every batch archive.
pub const MANIFEST_NAME: &str = "manifest.json";

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Outcome of one batch variant.
pub enum EntryStatus {
    /// The variant was rendered.
    Ok,
    /// The variant failed; its archive entry is an error marker.
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Manifest line for one variant.
pub struct ManifestEntry {
    /// Position of the variant in the batch input.
    pub index: usize,
    /// Archive entry name.
    pub file_name: String,
    /// Outcome.
    pub status: EntryStatus,
    /// Lowercase hex SHA-256 of the rendered bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
    /// Failure message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Failure classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

impl ManifestEntry {
    /// Entry for a rendered variant.
    pub fn rendered(index: usize, file_name: String, bytes: &[u8]) -> Self {
        Self {
            index,
            file_name,
            status: EntryStatus::Ok,
            sha256: Some(sha256_hex(bytes)),
            error: None,
            error_kind: None,
        }
    }

    /// Entry for a failed variant.
    pub fn failed(index: usize, file_name: String, error: String, kind: ErrorKind) -> Self {
        Self {
            index,
            file_name,
            status: EntryStatus::Error,
            sha256: None,
            error: Some(error),
            error_kind: Some(kind),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Summary of a batch run; also the content of [`MANIFEST_NAME`].
pub struct BatchReport {
    /// One entry per processed variant, in input order.
    pub entries: Vec<ManifestEntry>,
    /// Whether the run stopped early on cancellation.
    pub cancelled: bool,
}

impl BatchReport {
    /// Number of rendered variants.
    pub fn succeeded(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.status == EntryStatus::Ok)
            .count()
    }

    /// Number of failed variants.
    pub fn failed(&self) -> usize {
        self.entries.len() - self.succeeded()
    }
}

/// Lowercase hex SHA-256 of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{b:02x}"));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/batch/manifest.rs"]
mod tests;

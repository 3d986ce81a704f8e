use std::path::{Path, PathBuf};

use crate::{
    catalog::json::{read_records, write_records},
    foundation::error::LayerstackResult,
    foundation::math::Fnv1a64,
    model::instance::InstanceConfig,
};

#[derive(Clone, Debug)]
/// Mutable set of instance overrides persisted as one JSON array.
///
/// At most one record exists per (project, product, energy level, capacity code).
pub struct InstanceStore {
    path: PathBuf,
    records: Vec<InstanceConfig>,
}

impl InstanceStore {
    /// Open the store at `path`; a missing file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> LayerstackResult<Self> {
        let path = path.into();
        let records = read_records(&path)?;
        Ok(Self { path, records })
    }

    /// File backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records in storage order.
    pub fn records(&self) -> &[InstanceConfig] {
        &self.records
    }

    /// Consume the store, keeping its records.
    pub fn into_records(self) -> Vec<InstanceConfig> {
        self.records
    }

    /// Records belonging to `project_id`.
    pub fn by_project(&self, project_id: &str) -> Vec<&InstanceConfig> {
        self.records
            .iter()
            .filter(|r| r.project_id == project_id)
            .collect()
    }

    /// Insert or update the record for `config`'s variant and return the stored value.
    ///
    /// An update takes every field from `config` except `id` and `createdAt`, which are kept,
    /// and sets `updatedAt` to `now`. A new record gets an id derived from its variant key and
    /// both timestamps set to `now`.
    pub fn upsert(&mut self, mut config: InstanceConfig, now: &str) -> InstanceConfig {
        if let Some(existing) = self.records.iter_mut().find(|r| r.same_key(&config)) {
            config.id = existing.id.clone();
            config.created_at = existing.created_at.clone();
            config.updated_at = now.to_string();
            *existing = config.clone();
            return config;
        }

        config.id = instance_id(&config);
        config.created_at = now.to_string();
        config.updated_at = now.to_string();
        self.records.push(config.clone());
        config
    }

    /// Remove the record with `id`. Returns whether one was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    /// Persist all records to the backing file.
    pub fn save(&self) -> LayerstackResult<()> {
        write_records(&self.path, &self.records)
    }
}

fn instance_id(config: &InstanceConfig) -> String {
    let mut h = Fnv1a64::new_default();
    h.write_field(&config.project_id);
    h.write_field(&config.product_id);
    h.write_field(config.energy_level.as_deref().unwrap_or(""));
    h.write_field(config.capacity_code.as_deref().unwrap_or(""));
    format!("inst-{:016x}", h.finish())
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/instances.rs"]
mod tests;

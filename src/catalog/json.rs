use std::path::Path;

use anyhow::Context;

use crate::{
    catalog::{instances::InstanceStore, source::Catalog},
    foundation::error::{LayerstackError, LayerstackResult},
    model::{
        asset::{DecorationAsset, ProductAsset},
        instance::InstanceConfig,
        project::Project,
    },
};

/// File holding product records.
pub const PRODUCTS_FILE: &str = "products.json";
/// File holding decoration records.
pub const DECORATIONS_FILE: &str = "decorations.json";
/// File holding project records.
pub const PROJECTS_FILE: &str = "projects.json";
/// File holding instance override records.
pub const INSTANCES_FILE: &str = "instances.json";

#[derive(Clone, Debug, Default)]
/// In-memory catalog snapshot, usually loaded from a directory of JSON arrays.
pub struct JsonCatalog {
    products: Vec<ProductAsset>,
    decorations: Vec<DecorationAsset>,
    projects: Vec<Project>,
    instances: Vec<InstanceConfig>,
}

impl JsonCatalog {
    /// Build a catalog from records already in memory.
    pub fn new(
        products: Vec<ProductAsset>,
        decorations: Vec<DecorationAsset>,
        projects: Vec<Project>,
        instances: Vec<InstanceConfig>,
    ) -> Self {
        Self {
            products,
            decorations,
            projects,
            instances,
        }
    }

    /// Load the four record files under `data_dir`.
    ///
    /// A missing file is an empty collection. Product records are not validated here; a
    /// malformed product only fails the variants that render it.
    #[tracing::instrument(level = "debug", skip_all, fields(dir = %data_dir.as_ref().display()))]
    pub fn load(data_dir: impl AsRef<Path>) -> LayerstackResult<Self> {
        let dir = data_dir.as_ref();
        let products: Vec<ProductAsset> = read_records(&dir.join(PRODUCTS_FILE))?;
        let decorations = read_records(&dir.join(DECORATIONS_FILE))?;
        let projects = read_records(&dir.join(PROJECTS_FILE))?;
        let instances = InstanceStore::open(dir.join(INSTANCES_FILE))?.into_records();

        let out = Self::new(products, decorations, projects, instances);
        tracing::debug!(
            products = out.products.len(),
            decorations = out.decorations.len(),
            projects = out.projects.len(),
            instances = out.instances.len(),
            "loaded catalog"
        );
        Ok(out)
    }
}

impl Catalog for JsonCatalog {
    fn products(&self) -> &[ProductAsset] {
        &self.products
    }

    fn decorations(&self) -> &[DecorationAsset] {
        &self.decorations
    }

    fn projects(&self) -> &[Project] {
        &self.projects
    }

    fn instances(&self) -> &[InstanceConfig] {
        &self.instances
    }
}

/// Read a JSON array of records; a missing file reads as empty.
pub(crate) fn read_records<T: serde::de::DeserializeOwned>(
    path: &Path,
) -> LayerstackResult<Vec<T>> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("read records from '{}'", path.display()))
                .into());
        }
    };
    serde_json::from_slice(&bytes)
        .map_err(|e| LayerstackError::serde(format!("parse '{}': {e}", path.display())))
}

/// Write records as a pretty-printed JSON array, creating parent directories.
pub(crate) fn write_records<T: serde::Serialize>(path: &Path, records: &[T]) -> LayerstackResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create data dir '{}'", parent.display()))?;
    }
    let json = serde_json::to_vec_pretty(records)?;
    std::fs::write(path, json).with_context(|| format!("write records to '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/json.rs"]
mod tests;

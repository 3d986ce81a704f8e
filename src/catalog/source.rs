use crate::model::{
    asset::{DecorationAsset, ProductAsset},
    instance::InstanceConfig,
    project::Project,
};

/// Read-only view of the record collections a composition needs.
///
/// Implementors only provide the four collections; lookups are derived from them. Callers pass
/// a catalog explicitly and treat it as a snapshot for the duration of a request or batch.
pub trait Catalog: Send + Sync {
    /// All product photos.
    fn products(&self) -> &[ProductAsset];

    /// All decorations across projects.
    fn decorations(&self) -> &[DecorationAsset];

    /// All projects.
    fn projects(&self) -> &[Project];

    /// All instance overrides across projects.
    fn instances(&self) -> &[InstanceConfig];

    /// Product with the given id.
    fn product(&self, id: &str) -> Option<&ProductAsset> {
        self.products().iter().find(|p| p.id == id)
    }

    /// Decorations owned by `project_name`, in catalog order.
    fn decorations_by_project(&self, project_name: &str) -> Vec<DecorationAsset> {
        self.decorations()
            .iter()
            .filter(|d| d.meta.project_name == project_name)
            .cloned()
            .collect()
    }

    /// Project with the given id.
    fn project_by_id(&self, id: &str) -> Option<&Project> {
        self.projects().iter().find(|p| p.id == id)
    }

    /// Project with the given machine name.
    fn project_by_name(&self, project_name: &str) -> Option<&Project> {
        self.projects()
            .iter()
            .find(|p| p.project_name == project_name)
    }

    /// Instance overrides of the project with id `project_id`.
    fn instances_by_project(&self, project_id: &str) -> Vec<&InstanceConfig> {
        self.instances()
            .iter()
            .filter(|i| i.project_id == project_id)
            .collect()
    }
}

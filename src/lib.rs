//! layerstack composes marketing product images from a product photo, catalog decorations and
//! price texts.
//!
//! The pipeline is split into pure composition and rendering:
//!
//! - Match decorations against a variant and resolve their stacking with [`compute_layers`]
//! - Render the resulting layer list with [`render_flat`] (PNG) or [`render_layered`] (PSD)
//! - Render whole variant sets into a `.zip` (or `.tar.gz`) archive with [`run_batch`]
//!
//! Catalog records are read through the [`Catalog`] trait; [`JsonCatalog`] loads them from a
//! directory of JSON arrays described by a [`StoreConfig`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod batch;
mod catalog;
mod compose;
mod config;
mod foundation;
mod model;
mod render;
mod template;

pub use crate::foundation::core::{Affine, Canvas, MAX_CANVAS_DIM, Position, Rgba8, round_half_up};
pub use crate::foundation::error::{ErrorKind, LayerstackError, LayerstackResult};

pub use crate::model::asset::{
    AcFormFactor, Applicability, DecorationAsset, DecorationCategory, DecorationMeta,
    ProductAsset, ProductCategory, ProductMeta, admits,
};
pub use crate::model::input::CompositionInput;
pub use crate::model::instance::{DecorationAdjustment, InstanceConfig, PriceOverride};
pub use crate::model::project::{
    DefaultPriceConfig, LayerOrderConfig, LayerType, PriceLayerConfig, Project, ProjectTemplate,
};

pub use crate::compose::builder::compute_layers;
pub use crate::compose::layer::{LayerContent, LayerItem, PriceSlot};
pub use crate::compose::matcher::{is_eligible, match_decorations};
pub use crate::compose::naming::{ExportFormat, output_file_name, variant_stem};
pub use crate::compose::overrides::{apply_overrides, price_layers};
pub use crate::compose::variants::generate_variants;
pub use crate::compose::zorder::{
    ZQuery, ZSource, by_category, by_decoration_id, resolve_z, resolve_z_with_source,
};
pub use crate::template::edit::{
    Z_STEP, assign_descending_z, default_layer_order, reorder, top_first,
};

pub use crate::catalog::duplicate::duplicate_decorations;
pub use crate::catalog::instances::InstanceStore;
pub use crate::catalog::json::{
    DECORATIONS_FILE, INSTANCES_FILE, JsonCatalog, PRODUCTS_FILE, PROJECTS_FILE,
};
pub use crate::catalog::source::Catalog;
pub use crate::config::StoreConfig;

pub use crate::assets::decode::{DecodedImage, MAX_SVG_DIM, decode_image, rasterize_svg};
pub use crate::assets::fonts::{BOLD_WEIGHT, FontBook, FontFace, REGULAR_WEIGHT};
pub use crate::assets::loader::AssetLoader;
pub use crate::assets::source::{AssetSource, FsAssetSource, MemoryAssetSource, normalize_rel_path};

pub use crate::render::flat::{encode_png, render_flat};
pub use crate::render::layered::render_layered;
pub use crate::render::output::RenderedOutput;
pub use crate::render::psd::{PsdDocument, PsdLayer};
pub use crate::render::raster::rasterize_layers;
pub use crate::render::surface::{LayerRaster, Surface};
pub use crate::render::text::{TextBrush, TextLayoutEngine, rasterize_layout};
pub use crate::render::variant::{ComposedVariant, RenderedVariant, compose_variant, render_variant};

pub use crate::batch::archive::{ArchiveSink, EntryNames, TarGzArchive, ZipArchive};
pub use crate::batch::manifest::{
    BatchReport, EntryStatus, MANIFEST_NAME, ManifestEntry, sha256_hex,
};
pub use crate::batch::orchestrator::{BatchOptions, CancelToken, run_batch};

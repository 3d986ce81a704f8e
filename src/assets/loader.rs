use std::{collections::HashMap, sync::Arc};

use crate::{
    assets::{
        decode::{DecodedImage, decode_image, rasterize_svg},
        fonts::FontBook,
        source::AssetSource,
    },
    foundation::error::{LayerstackError, LayerstackResult},
};

/// Decodes layer images on demand and caches them by path.
///
/// A loader is owned by one worker; [`AssetLoader::fork`] gives another worker its own cache
/// over the same source and fonts.
pub struct AssetLoader {
    source: Arc<dyn AssetSource>,
    fonts: Arc<FontBook>,
    images: HashMap<String, Arc<DecodedImage>>,
}

impl std::fmt::Debug for AssetLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetLoader")
            .field("fonts", &self.fonts.families())
            .field("cached_images", &self.images.len())
            .finish()
    }
}

impl AssetLoader {
    /// Loader over `source` drawing text with `fonts`.
    pub fn new(source: Arc<dyn AssetSource>, fonts: Arc<FontBook>) -> Self {
        Self {
            source,
            fonts,
            images: HashMap::new(),
        }
    }

    /// Fresh loader sharing this loader's source and fonts.
    pub fn fork(&self) -> Self {
        Self::new(Arc::clone(&self.source), Arc::clone(&self.fonts))
    }

    /// Fonts available to text layers.
    pub fn fonts(&self) -> &FontBook {
        &self.fonts
    }

    /// Decoded image stored under `file_path`. SVG files are rasterized at intrinsic size.
    pub fn image(&mut self, file_path: &str) -> LayerstackResult<Arc<DecodedImage>> {
        if let Some(img) = self.images.get(file_path) {
            return Ok(Arc::clone(img));
        }

        let bytes = self.source.read(file_path)?;
        let decoded = if is_svg(file_path) {
            rasterize_svg(&bytes)
        } else {
            decode_image(&bytes)
        }
        .map_err(|e| match e {
            LayerstackError::Render(msg) => LayerstackError::render(format!("'{file_path}': {msg}")),
            other => other,
        })?;

        let img = Arc::new(decoded);
        self.images.insert(file_path.to_string(), Arc::clone(&img));
        Ok(img)
    }

    /// Number of distinct images decoded so far.
    pub fn cached_images(&self) -> usize {
        self.images.len()
    }
}

fn is_svg(file_path: &str) -> bool {
    file_path
        .rsplit('.')
        .next()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/loader.rs"]
mod tests;

use std::{path::Path, sync::Arc};

use anyhow::Context;

use crate::foundation::error::{LayerstackError, LayerstackResult};

/// CSS weight requested for regular text.
pub const REGULAR_WEIGHT: u16 = 400;
/// CSS weight requested for bold text.
pub const BOLD_WEIGHT: u16 = 700;

#[derive(Clone)]
/// One font file with the primary family name and weight it registers.
pub struct FontFace {
    /// Family name reported by the font.
    pub family: String,
    /// CSS weight (100..=900) reported by the font.
    pub weight: u16,
    /// Raw font file bytes.
    pub bytes: Arc<Vec<u8>>,
}

impl FontFace {
    /// Whether the face is semibold or heavier.
    pub fn is_bold(&self) -> bool {
        self.weight >= 600
    }
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("family", &self.family)
            .field("weight", &self.weight)
            .field("bytes_len", &self.bytes.len())
            .finish()
    }
}

#[derive(Clone, Debug, Default)]
/// Fonts available to text layers.
///
/// Only explicitly loaded fonts are used, never system fonts, so output does not depend on the
/// host. Requests for an unknown family fall back to the family of the first face; within a
/// family the face nearest the requested weight wins.
pub struct FontBook {
    faces: Vec<FontFace>,
}

impl FontBook {
    /// Book without fonts; rendering any text layer with it fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load every `.ttf`, `.otf` and `.ttc` file directly under `dir`, in file name order.
    ///
    /// A missing directory yields an empty book.
    pub fn from_dir(dir: impl AsRef<Path>) -> LayerstackResult<Self> {
        let dir = dir.as_ref();
        let rd = match std::fs::read_dir(dir) {
            Ok(rd) => rd,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::empty()),
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("list fonts in '{}'", dir.display()))
                    .into());
            }
        };

        let mut paths: Vec<_> = rd
            .flatten()
            .map(|entry| entry.path())
            .filter(|p| p.is_file() && is_font_file(p))
            .collect();
        paths.sort();

        let mut fonts = Vec::with_capacity(paths.len());
        for path in &paths {
            let bytes =
                std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
            fonts.push(bytes);
        }
        let book = Self::from_fonts(fonts)?;
        tracing::debug!(dir = %dir.display(), faces = book.faces.len(), "loaded fonts");
        Ok(book)
    }

    /// Register font files already in memory, keeping their order.
    pub fn from_fonts(fonts: Vec<Vec<u8>>) -> LayerstackResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let mut faces = Vec::with_capacity(fonts.len());
        for bytes in fonts {
            let families = font_ctx
                .collection
                .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
            let (family_id, infos) = families.first().ok_or_else(|| {
                LayerstackError::render("no font families registered from font bytes")
            })?;
            let weight = infos
                .first()
                .map(|info| info.weight().value().round() as u16)
                .unwrap_or(REGULAR_WEIGHT);
            let family = font_ctx
                .collection
                .family_name(*family_id)
                .ok_or_else(|| LayerstackError::render("registered font family has no name"))?
                .to_string();
            faces.push(FontFace {
                family,
                weight,
                bytes: Arc::new(bytes),
            });
        }
        Ok(Self { faces })
    }

    /// Whether no fonts are loaded.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Family names in load order.
    pub fn families(&self) -> Vec<&str> {
        self.faces.iter().map(|f| f.family.as_str()).collect()
    }

    /// Face for `family` (case-insensitive, else the first face's family) nearest the
    /// regular or bold weight. Ties keep load order.
    pub fn resolve(&self, family: &str, bold: bool) -> LayerstackResult<&FontFace> {
        let wanted = family.trim();
        let no_fonts =
            || LayerstackError::render(format!("no fonts loaded to draw family '{family}'"));
        let family = &self
            .faces
            .iter()
            .find(|f| f.family.eq_ignore_ascii_case(wanted))
            .or_else(|| self.faces.first())
            .ok_or_else(no_fonts)?
            .family;
        let target = if bold { BOLD_WEIGHT } else { REGULAR_WEIGHT };
        self.faces
            .iter()
            .filter(|f| &f.family == family)
            .min_by_key(|f| f.weight.abs_diff(target))
            .ok_or_else(no_fonts)
    }
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "ttf" | "otf" | "ttc"))
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;

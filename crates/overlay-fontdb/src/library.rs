use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use overlay_core::{
    error::{FontLoadError, Result},
    FontVariant,
};

use crate::{system::system_font_candidates, Font};

/// Your font library: which file draws each variant, and what's already loaded
///
/// Loading the same file twice returns the cached font, even when several
/// variants point at it. A variant without a configured path, a missing
/// file, or unparsable data all fail with `FontUnavailable`; the library
/// never substitutes another font on its own.
pub struct FontLibrary {
    paths: HashMap<FontVariant, PathBuf>,
    /// Maps canonical paths to their loaded fonts
    cache: RwLock<HashMap<PathBuf, Arc<Font>>>,
}

impl FontLibrary {
    /// Starts with no fonts configured
    pub fn new() -> Self {
        Self {
            paths: HashMap::new(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Regular variant from the first system candidate that exists
    pub fn from_system() -> Option<Self> {
        let path = system_font_candidates().into_iter().find(|p| p.is_file())?;
        log::debug!("Using system font {}", path.display());
        Some(Self::new().with_font(FontVariant::Regular, path))
    }

    /// Builder-style [`FontLibrary::set_font`]
    pub fn with_font(mut self, variant: FontVariant, path: impl Into<PathBuf>) -> Self {
        self.set_font(variant, path);
        self
    }

    /// Point a variant at a font file; takes effect on the next load
    pub fn set_font(&mut self, variant: FontVariant, path: impl Into<PathBuf>) {
        self.paths.insert(variant, path.into());
    }

    /// Configured file for a variant
    pub fn path(&self, variant: FontVariant) -> Option<&Path> {
        self.paths.get(&variant).map(PathBuf::as_path)
    }

    /// Whether a variant has a file configured (not whether it loads)
    pub fn has_variant(&self, variant: FontVariant) -> bool {
        self.paths.contains_key(&variant)
    }

    /// Load the font configured for `variant`
    pub fn load(&self, variant: FontVariant) -> Result<Arc<Font>> {
        let path = self
            .path(variant)
            .ok_or_else(|| FontLoadError::VariantNotConfigured(variant.to_string()))?;
        self.load_path(path)
    }

    /// Load a font file, reusing the cached copy when the path was seen before
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Arc<Font>> {
        let path = path.as_ref();
        let cache_key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        if let Some(font) = self.cache.read().get(&cache_key) {
            return Ok(font.clone());
        }

        let font = Arc::new(Font::from_file(path)?);
        log::debug!(
            "Loaded font {} ({} bytes)",
            path.display(),
            font.data_len()
        );
        self.cache.write().insert(cache_key, font.clone());
        Ok(font)
    }

    /// Number of distinct font files loaded so far
    pub fn font_count(&self) -> usize {
        self.cache.read().len()
    }

    /// Drop every cached font; configured paths stay
    pub fn clear(&self) {
        self.cache.write().clear();
    }
}

impl Default for FontLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl Font {
    fn data_len(&self) -> usize {
        overlay_core::FontRef::data(self).len()
    }
}

use std::fmt;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
///
/// The default handle refers to the first font loaded.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns the loaded fonts.
///
/// Fonts are immutable after loading. The system is passed to
/// [`TextRenderer::render`](crate::render::shapes::text::TextRenderer::render)
/// each frame so glyphs can be rasterized on first use.
#[derive(Default)]
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    ///
    /// `scale` is the pixel size glyphs are expected to be drawn at; fontdue
    /// precomputes outlines for it.
    pub fn load_font(&mut self, bytes: &[u8], scale: f32) -> Result<FontId, FontLoadError> {
        if bytes.is_empty() {
            return Err(FontLoadError("empty font data".to_string()));
        }
        let settings = fontdue::FontSettings {
            scale,
            ..fontdue::FontSettings::default()
        };
        let font = fontdue::Font::from_bytes(bytes, settings)
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        log::debug!(
            "loaded font #{} ({} glyphs)",
            id.0,
            font.glyph_count()
        );
        self.fonts.push(font);
        Ok(id)
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bytes_are_rejected() {
        let mut fonts = FontSystem::new();
        assert!(fonts.load_font(&[], 40.0).is_err());
        assert!(fonts.is_empty());
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        let mut fonts = FontSystem::new();
        let err = fonts.load_font(b"definitely not a font", 40.0).unwrap_err();
        assert!(err.to_string().starts_with("font load error"));
        assert_eq!(fonts.len(), 0);
    }

    #[test]
    fn unknown_id_resolves_to_none() {
        let fonts = FontSystem::new();
        assert!(fonts.get(FontId::default()).is_none());
    }
}

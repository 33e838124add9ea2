//! Text styling and placement for HUD strings
//!
//! Glyph rasterisation belongs to whoever consumes the draw list; this only
//! says which font, how big, what colour and where.

use std::path::PathBuf;

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Where a font comes from
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontSource {
    /// The renderer's built-in font
    #[default]
    Default,
    /// A font file on disk (e.g. `fonts/GummyBear.ttf`)
    File(PathBuf),
}

/// Font, size and colour of a text run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font: FontSource,
    /// Point size
    pub size: u32,
    /// RGB
    pub color: [u8; 3],
    pub antialias: bool,
}

impl TextStyle {
    pub fn new(size: u32, color: [u8; 3]) -> Self {
        Self {
            font: FontSource::Default,
            size,
            color,
            antialias: true,
        }
    }

    pub fn with_font(mut self, font: FontSource) -> Self {
        self.font = font;
        self
    }
}

/// Which point of the rendered text box sits at `pos`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    TopLeft(IVec2),
    Center(IVec2),
}

impl TextAnchor {
    /// Top-left corner for a text box of `size` once the renderer has measured it
    pub fn resolve(&self, size: IVec2) -> IVec2 {
        match *self {
            TextAnchor::TopLeft(pos) => pos,
            TextAnchor::Center(pos) => pos - size / 2,
        }
    }
}

/// Score line shown in the corner
pub fn score_text(score: u64) -> String {
    format!("Score: {score}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_text() {
        assert_eq!(score_text(0), "Score: 0");
        assert_eq!(score_text(42), "Score: 42");
    }

    #[test]
    fn test_anchor_resolve() {
        let size = IVec2::new(100, 20);
        assert_eq!(
            TextAnchor::TopLeft(IVec2::new(10, 10)).resolve(size),
            IVec2::new(10, 10)
        );
        assert_eq!(
            TextAnchor::Center(IVec2::new(400, 590)).resolve(size),
            IVec2::new(350, 580)
        );
    }

    #[test]
    fn test_with_font() {
        let style = TextStyle::new(48, [255, 255, 255])
            .with_font(FontSource::File(PathBuf::from("fonts/GummyBear.ttf")));
        assert_eq!(style.size, 48);
        assert!(matches!(style.font, FontSource::File(_)));
        assert!(style.antialias);
    }
}

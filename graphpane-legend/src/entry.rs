use std::sync::Arc;

use graphpane_common::{rect::Rect, types::ColorOrGradient};
use graphpane_text::types::FontSpec;

use crate::render::LegendCanvas;

/// Capability for drawing one entry's visual key (line sample, swatch,
/// marker shape, ...) into a rectangle the renderer picks.
///
/// Entries that expose no key still get a text label; the renderer checks
/// for the capability's presence rather than branching on series type.
pub trait SymbolKey: Send + Sync {
    fn draw(&self, canvas: &mut dyn LegendCanvas, bounds: Rect, scale: f32);

    /// Preferred (unscaled) size of the key, if it has one. The largest
    /// preferred size across entries becomes a floor on the legend row
    /// height.
    fn preferred_size(&self) -> Option<f32> {
        None
    }
}

/// One legend entry: a series label plus an optional symbol key.
///
/// Entries are owned by the host chart; the engine only ever reads them.
#[derive(Clone)]
pub struct LegendEntry {
    pub text: String,
    pub visible: bool,
    /// The series' own color. Used to paint the label in symbol-less mode
    /// when no font override is present.
    pub color: ColorOrGradient,
    /// Per-entry font override; `None` uses the legend's default font
    pub font: Option<FontSpec>,
    pub symbol: Option<Arc<dyn SymbolKey>>,
}

impl LegendEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visible: true,
            color: ColorOrGradient::black(),
            font: None,
            symbol: None,
        }
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn color(mut self, color: ColorOrGradient) -> Self {
        self.color = color;
        self
    }

    pub fn font(mut self, font: FontSpec) -> Self {
        self.font = Some(font);
        self
    }

    pub fn symbol(mut self, symbol: Arc<dyn SymbolKey>) -> Self {
        self.symbol = Some(symbol);
        self
    }

    /// True when the entry contributes a legend cell: visible with
    /// non-empty text.
    pub fn is_shown(&self) -> bool {
        self.visible && !self.text.is_empty()
    }
}

impl std::fmt::Debug for LegendEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LegendEntry")
            .field("text", &self.text)
            .field("visible", &self.visible)
            .field("color", &self.color)
            .field("font", &self.font)
            .field("symbol", &self.symbol.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_shown() {
        assert!(LegendEntry::new("alpha").is_shown());
        assert!(!LegendEntry::new("alpha").visible(false).is_shown());
        assert!(!LegendEntry::new("").is_shown());
    }

    #[test]
    fn test_builder() {
        let entry = LegendEntry::new("beta")
            .color(ColorOrGradient::Color([1.0, 0.0, 0.0, 1.0]))
            .font(FontSpec::new("Courier", 9.0));
        assert_eq!(entry.text, "beta");
        assert_eq!(entry.font.as_ref().unwrap().family, "Courier");
        assert!(entry.symbol.is_none());
    }
}

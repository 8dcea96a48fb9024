use crate::types::{FontSpec, FontWeight, FontWeightNameSpec};
use unicode_segmentation::UnicodeSegmentation;

/// Core trait for text measurement functionality.
///
/// The legend engine only ever measures a single line at a time; multi-line
/// labels are split on `'\n'` by the caller.
pub trait TextMeasurer: Send + Sync {
    /// Measures the bounding dimensions for a text string with the given font
    /// and scale factor.
    fn measure_text_bounds(&self, config: &TextMeasurementConfig) -> TextBounds;

    /// The scaled line height of a font, independent of any particular text.
    fn font_line_height(&self, font: &FontSpec, scale: f32) -> f32 {
        self.measure_text_bounds(&TextMeasurementConfig {
            // Reference string with both an ascender and a descender
            text: "Ag",
            font,
            scale,
        })
        .line_height
    }
}

/// Configuration needed for text measurement
#[derive(Debug, Clone)]
pub struct TextMeasurementConfig<'a> {
    /// The text string to measure
    pub text: &'a str,
    /// Font to measure with
    pub font: &'a FontSpec,
    /// Scale factor applied to the font size
    pub scale: f32,
}

/// Results from text measurement
#[derive(Debug, Clone)]
pub struct TextBounds {
    /// Total width of the text
    pub width: f32,
    /// Total height from top to bottom
    pub height: f32,
    /// Distance from top to where the top of the next line would be
    pub line_height: f32,
}

impl TextBounds {
    pub fn empty() -> Self {
        TextBounds {
            width: 0.0,
            height: 10.0,
            line_height: 10.0 * 1.2,
        }
    }
}

/// A deterministic, font-file-free measurer.
///
/// Width is estimated from the grapheme count and an average advance ratio,
/// which is enough for headless layout and for tests. Hosts with a real
/// rasterizer supply their own [`TextMeasurer`] implementation instead.
#[derive(Debug, Clone)]
pub struct ApproxTextMeasurer {
    /// Average glyph advance as a fraction of the font size
    pub advance_ratio: f32,
    /// Line height as a fraction of the font size
    pub line_ratio: f32,
}

impl ApproxTextMeasurer {
    pub fn new() -> Self {
        Self {
            advance_ratio: 0.6,
            line_ratio: 1.2,
        }
    }
}

impl Default for ApproxTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for ApproxTextMeasurer {
    fn measure_text_bounds(&self, config: &TextMeasurementConfig) -> TextBounds {
        let size = config.font.size * config.scale;
        let bold = matches!(
            config.font.weight,
            FontWeight::Name(FontWeightNameSpec::Bold)
        ) || matches!(config.font.weight, FontWeight::Number(n) if n >= 600.0);
        let advance = if bold {
            self.advance_ratio * 1.08
        } else {
            self.advance_ratio
        };
        let graphemes = config.text.graphemes(true).count() as f32;
        TextBounds {
            width: graphemes * size * advance,
            height: size,
            line_height: size * self.line_ratio,
        }
    }

    fn font_line_height(&self, font: &FontSpec, scale: f32) -> f32 {
        font.size * scale * self.line_ratio
    }
}

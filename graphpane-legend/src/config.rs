use graphpane_common::types::ColorOrGradient;
use graphpane_text::types::FontSpec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::VariantNames;

/// Named placement region for the legend, relative to the chart (plot) area
/// and the client area of the pane.
///
/// The position governs two independent things: how much width is available
/// for horizontal stacking, and where the computed legend rectangle lands
/// (including how the chart rectangle is shrunk to make room).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, VariantNames)]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum LegendPosition {
    /// Above the chart area, left-aligned with the chart rect
    #[default]
    Top,
    /// Above the chart area, centered over the chart rect
    TopCenter,
    /// Above the chart area, flush with the client rect's left edge
    TopFlushLeft,
    /// Below the chart area, left-aligned with the chart rect
    Bottom,
    /// Below the chart area, centered under the chart rect
    BottomCenter,
    /// Below the chart area, flush with the client rect's left edge
    BottomFlushLeft,
    /// Left of the chart area (always a single column)
    Left,
    /// Right of the chart area (always a single column)
    Right,
    /// Inside the chart area, top-right corner
    InsideTopRight,
    /// Inside the chart area, top-left corner
    InsideTopLeft,
    /// Inside the chart area, bottom-right corner
    InsideBotRight,
    /// Inside the chart area, bottom-left corner
    InsideBotLeft,
    /// Free-floating, positioned by [`LegendConfig::location`]
    Float,
}

impl LegendPosition {
    /// True for the two side anchors, which never stack horizontally.
    pub fn is_side(&self) -> bool {
        matches!(self, LegendPosition::Left | LegendPosition::Right)
    }

    /// True for the four inside corners and `Float`, none of which reserve
    /// space from the chart rectangle.
    pub fn is_inside(&self) -> bool {
        matches!(
            self,
            LegendPosition::InsideTopRight
                | LegendPosition::InsideTopLeft
                | LegendPosition::InsideBotRight
                | LegendPosition::InsideBotLeft
                | LegendPosition::Float
        )
    }
}

/// Border stroked around the legend bounding rectangle after the entries
/// are drawn.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct LegendBorder {
    pub color: ColorOrGradient,
    pub width: f32,
}

impl Default for LegendBorder {
    fn default() -> Self {
        Self {
            color: ColorOrGradient::black(),
            width: 1.0,
        }
    }
}

/// Legend configuration, immutable for the duration of one
/// measure/draw/hit-test cycle.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct LegendConfig {
    /// Show or hide the legend entirely
    pub visible: bool,
    /// Allow entries to stack into multiple columns. Side anchors ignore
    /// this and always produce a single column.
    pub h_stack: bool,
    /// Emit entries in reverse order
    pub reverse: bool,
    /// Draw the symbol key next to each label. When false, labels without a
    /// font override are painted with their entry's own color so they stay
    /// in sync with the series they name.
    pub show_symbols: bool,
    /// Gap between the legend and the chart rect, as a fraction of the
    /// characteristic size (the largest scaled line height in the legend)
    pub gap: f32,
    pub position: LegendPosition,
    /// Normalized `[x, y]` relative to the chart rect's top-left; only used
    /// when `position` is [`LegendPosition::Float`]
    pub location: Option<[f32; 2]>,
    /// Background fill, or `None` for a transparent legend
    pub fill: Option<ColorOrGradient>,
    /// Border around the bounding rectangle, or `None` for no border
    pub border: Option<LegendBorder>,
    /// Default font for entries without a font override
    pub font: FontSpec,
}

impl LegendConfig {
    pub fn new() -> Self {
        Self {
            visible: true,
            h_stack: true,
            reverse: false,
            show_symbols: true,
            gap: 0.5,
            position: LegendPosition::default(),
            location: None,
            fill: Some(ColorOrGradient::white()),
            border: Some(LegendBorder::default()),
            font: FontSpec::default(),
        }
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn h_stack(mut self, h_stack: bool) -> Self {
        self.h_stack = h_stack;
        self
    }

    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn show_symbols(mut self, show_symbols: bool) -> Self {
        self.show_symbols = show_symbols;
        self
    }

    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn position(mut self, position: LegendPosition) -> Self {
        self.position = position;
        self
    }

    pub fn location(mut self, location: [f32; 2]) -> Self {
        self.location = Some(location);
        self
    }

    pub fn fill(mut self, fill: Option<ColorOrGradient>) -> Self {
        self.fill = fill;
        self
    }

    pub fn border(mut self, border: Option<LegendBorder>) -> Self {
        self.border = border;
        self
    }

    pub fn font(mut self, font: FontSpec) -> Self {
        self.font = font;
        self
    }
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LegendConfig::default();
        assert!(config.visible);
        assert!(config.h_stack);
        assert!(!config.reverse);
        assert!(config.show_symbols);
        assert_eq!(config.gap, 0.5);
        assert_eq!(config.position, LegendPosition::Top);
        assert!(config.location.is_none());
    }

    #[test]
    fn test_builder_chaining() {
        let config = LegendConfig::new()
            .position(LegendPosition::Right)
            .reverse(true)
            .gap(1.0);
        assert_eq!(config.position, LegendPosition::Right);
        assert!(config.reverse);
        assert_eq!(config.gap, 1.0);
    }

    #[test]
    fn test_position_classification() {
        assert!(LegendPosition::Left.is_side());
        assert!(LegendPosition::Right.is_side());
        assert!(!LegendPosition::Top.is_side());
        assert!(LegendPosition::Float.is_inside());
        assert!(LegendPosition::InsideBotLeft.is_inside());
        assert!(!LegendPosition::BottomCenter.is_inside());
    }
}

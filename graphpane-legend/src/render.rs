use graphpane_common::{rect::Rect, types::ColorOrGradient};
use graphpane_text::types::FontSpec;

use crate::{config::LegendConfig, layout::LegendLayout, source::LegendRoot};

/// Drawing surface the legend renders through. Implemented by the host's
/// graphics backend; resources behind it live for one `draw_legend` call.
pub trait LegendCanvas {
    fn fill_rect(&mut self, rect: Rect, color: &ColorOrGradient);

    fn stroke_rect(&mut self, rect: Rect, color: &ColorOrGradient, width: f32);

    /// Draw a label anchored at its left edge, vertically centered on
    /// `pos[1]`. The font's color is the paint color; embedded `'\n'`
    /// characters are line breaks.
    fn draw_text(&mut self, text: &str, pos: [f32; 2], font: &FontSpec, scale: f32);
}

/// Renders the legend entries into the rectangle a geometry pass reserved.
///
/// `layout` must come from [`crate::layout::compute_layout`] run against the
/// same `config` and `root`; the renderer walks the identical entry subset
/// the geometry pass measured, so every cell it fills lies inside
/// `layout.rect`.
pub fn draw_legend(
    canvas: &mut dyn LegendCanvas,
    layout: &LegendLayout,
    config: &LegendConfig,
    root: &LegendRoot,
    scale: f32,
) {
    if !config.visible || layout.entry_count == 0 {
        return;
    }

    if let Some(fill) = &config.fill {
        canvas.fill_rect(layout.rect, fill);
    }

    let half_gap = layout.half_gap();
    let mut drawn = 0;

    for (i, slot) in root
        .walk(config.reverse)
        .iter()
        .enumerate()
        .take(layout.entry_count)
    {
        let col = (i % layout.columns) as f32;
        let row = (i / layout.columns) as f32;
        let x = layout.rect.left() + half_gap / 2.0 + col * layout.cell_width;
        let y = layout.rect.top() + row * layout.cell_height;

        if config.show_symbols {
            let font = slot.entry.font.as_ref().unwrap_or(&config.font);
            canvas.draw_text(
                &slot.entry.text,
                [x + 2.5 * layout.char_size, y + layout.cell_height / 2.0 + 1.0],
                font,
                scale,
            );
            if let Some(symbol) = &slot.entry.symbol {
                // The key is centered on the row at half the row height
                symbol.draw(
                    canvas,
                    Rect::new(
                        x,
                        y + layout.cell_height / 4.0,
                        2.0 * layout.char_size,
                        layout.cell_height / 2.0,
                    ),
                    scale,
                );
            }
        } else {
            let pos = [x, y + layout.cell_height / 2.0];
            match &slot.entry.font {
                Some(font) => canvas.draw_text(&slot.entry.text, pos, font, scale),
                None => {
                    // Without a symbol key the label color is the only tie
                    // back to the series, so paint it with the entry color
                    let font = config.font.clone().color(slot.entry.color.clone());
                    canvas.draw_text(&slot.entry.text, pos, &font, scale);
                }
            }
        }

        drawn += 1;
    }

    if drawn > 0 {
        if let Some(border) = &config.border {
            canvas.stroke_rect(layout.rect, &border.color, border.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{LegendEntry, SymbolKey};
    use crate::layout::compute_layout;
    use graphpane_text::measurement::{TextBounds, TextMeasurementConfig, TextMeasurer};
    use std::sync::Arc;

    struct FixedMeasurer;

    impl TextMeasurer for FixedMeasurer {
        fn measure_text_bounds(&self, config: &TextMeasurementConfig) -> TextBounds {
            let size = config.font.size * config.scale;
            TextBounds {
                width: config.text.chars().count() as f32 * size,
                height: size,
                line_height: size,
            }
        }

        fn font_line_height(&self, font: &FontSpec, scale: f32) -> f32 {
            font.size * scale
        }
    }

    #[derive(Debug, PartialEq)]
    enum DrawOp {
        Fill(Rect),
        Stroke(Rect),
        Text(String, [f32; 2], ColorOrGradient),
    }

    #[derive(Default)]
    struct RecordingCanvas {
        ops: Vec<DrawOp>,
    }

    impl RecordingCanvas {
        fn text_ops(&self) -> Vec<&DrawOp> {
            self.ops
                .iter()
                .filter(|op| matches!(op, DrawOp::Text(..)))
                .collect()
        }
    }

    impl LegendCanvas for RecordingCanvas {
        fn fill_rect(&mut self, rect: Rect, _color: &ColorOrGradient) {
            self.ops.push(DrawOp::Fill(rect));
        }

        fn stroke_rect(&mut self, rect: Rect, _color: &ColorOrGradient, _width: f32) {
            self.ops.push(DrawOp::Stroke(rect));
        }

        fn draw_text(&mut self, text: &str, pos: [f32; 2], font: &FontSpec, _scale: f32) {
            self.ops
                .push(DrawOp::Text(text.to_string(), pos, font.color.clone()));
        }
    }

    struct MarkerKey;

    impl SymbolKey for MarkerKey {
        fn draw(&self, canvas: &mut dyn LegendCanvas, bounds: Rect, _scale: f32) {
            canvas.fill_rect(bounds, &ColorOrGradient::black());
        }
    }

    fn config() -> LegendConfig {
        LegendConfig::new().font(FontSpec::new("Arial", 10.0))
    }

    fn render(config: &LegendConfig, entries: &Vec<LegendEntry>) -> RecordingCanvas {
        let mut chart = Rect::new(50.0, 50.0, 300.0, 200.0);
        let client = Rect::new(0.0, 0.0, 400.0, 300.0);
        let root = LegendRoot::Single(entries);
        let layout =
            compute_layout(config, &root, &FixedMeasurer, &mut chart, &client, 1.0).unwrap();
        let mut canvas = RecordingCanvas::default();
        draw_legend(&mut canvas, &layout, config, &root, 1.0);
        canvas
    }

    #[test]
    fn test_zero_entries_draw_nothing() {
        let canvas = render(&config(), &vec![]);
        assert!(canvas.ops.is_empty());
    }

    #[test]
    fn test_hidden_legend_draws_nothing() {
        let entries = vec![LegendEntry::new("a")];
        let canvas = render(&config().visible(false), &entries);
        assert!(canvas.ops.is_empty());
    }

    #[test]
    fn test_one_text_op_per_entry_plus_fill_and_border() {
        let entries = vec![LegendEntry::new("a"), LegendEntry::new("b")];
        let canvas = render(&config(), &entries);
        assert_eq!(canvas.text_ops().len(), 2);
        assert!(matches!(canvas.ops.first(), Some(DrawOp::Fill(_))));
        assert!(matches!(canvas.ops.last(), Some(DrawOp::Stroke(_))));
    }

    #[test]
    fn test_symbol_drawn_at_half_row_height() {
        let entries = vec![LegendEntry::new("abcd").symbol(Arc::new(MarkerKey))];
        let config = config().fill(None).border(None).h_stack(false);
        let canvas = render(&config, &entries);
        // char 10, cell height 10: symbol rect is 2*char wide, height/2 tall
        let symbol_fill = canvas
            .ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Fill(rect) => Some(*rect),
                _ => None,
            })
            .unwrap();
        assert_eq!(symbol_fill.width, 20.0);
        assert_eq!(symbol_fill.height, 5.0);
    }

    #[test]
    fn test_symbol_less_labels_take_entry_color() {
        let red = ColorOrGradient::Color([1.0, 0.0, 0.0, 1.0]);
        let entries = vec![
            LegendEntry::new("plain").color(red.clone()),
            LegendEntry::new("styled")
                .color(red.clone())
                .font(FontSpec::new("Courier", 10.0)),
        ];
        let canvas = render(&config().show_symbols(false), &entries);
        let texts = canvas.text_ops();
        match texts[0] {
            DrawOp::Text(text, _, color) => {
                assert_eq!(text, "plain");
                assert_eq!(color, &red);
            }
            _ => unreachable!(),
        }
        // The font override keeps its own color
        match texts[1] {
            DrawOp::Text(text, _, color) => {
                assert_eq!(text, "styled");
                assert_eq!(color, &ColorOrGradient::black());
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_reverse_renders_entries_backwards() {
        let entries = vec![LegendEntry::new("first"), LegendEntry::new("second")];
        let canvas = render(&config().reverse(true), &entries);
        let texts = canvas.text_ops();
        assert!(matches!(texts[0], DrawOp::Text(text, ..) if text == "second"));
        assert!(matches!(texts[1], DrawOp::Text(text, ..) if text == "first"));
    }

    #[test]
    fn test_uniform_grid_renders_first_pane_only() {
        let first = vec![LegendEntry::new("a"), LegendEntry::new("b")];
        let second = vec![LegendEntry::new("c")];
        let root = LegendRoot::Grid {
            panes: vec![&first, &second],
            uniform_entries: true,
        };
        let config = config();
        let mut chart = Rect::new(50.0, 50.0, 300.0, 200.0);
        let client = Rect::new(0.0, 0.0, 400.0, 300.0);
        let layout =
            compute_layout(&config, &root, &FixedMeasurer, &mut chart, &client, 1.0).unwrap();
        let mut canvas = RecordingCanvas::default();
        draw_legend(&mut canvas, &layout, &config, &root, 1.0);
        // Geometry and render agree on the truncated subset
        assert_eq!(layout.entry_count, 2);
        assert_eq!(canvas.text_ops().len(), layout.entry_count);
    }
}

use graphpane_text::{
    measurement::{TextMeasurementConfig, TextMeasurer},
    types::FontSpec,
};

use crate::source::EntrySlot;

/// The characteristic cell height: the largest scaled line height over the
/// displayable entries, honoring per-entry font overrides and counting
/// `'\n'`-delimited lines. Falls back to the default font's single-line
/// height when no entry qualifies.
pub fn max_cell_height(
    slots: &[EntrySlot],
    default_font: &FontSpec,
    measurer: &dyn TextMeasurer,
    scale: f32,
) -> f32 {
    let default_height = measurer.font_line_height(default_font, scale);
    let mut max_height = default_height;
    for slot in slots {
        let font = slot.entry.font.as_ref().unwrap_or(default_font);
        let lines = slot.entry.text.split('\n').count() as f32;
        let height = measurer.font_line_height(font, scale) * lines;
        if height > max_height {
            max_height = height;
        }
    }
    max_height
}

/// The widest single rendered line over the displayable entries, honoring
/// per-entry font overrides. Zero when there are no entries.
pub fn max_label_width(
    slots: &[EntrySlot],
    default_font: &FontSpec,
    measurer: &dyn TextMeasurer,
    scale: f32,
) -> f32 {
    let mut max_width = 0.0f32;
    for slot in slots {
        let font = slot.entry.font.as_ref().unwrap_or(default_font);
        for line in slot.entry.text.split('\n') {
            let width = measurer
                .measure_text_bounds(&TextMeasurementConfig {
                    text: line,
                    font,
                    scale,
                })
                .width;
            if width > max_width {
                max_width = width;
            }
        }
    }
    max_width
}

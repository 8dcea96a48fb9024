use graphpane_common::rect::Rect;
use graphpane_text::measurement::TextMeasurer;

use crate::{
    config::{LegendConfig, LegendPosition},
    error::GraphpaneLegendError,
    metrics,
    source::LegendRoot,
};

/// The output of one geometry pass, threaded into the renderer and the hit
/// tester.
///
/// A layout is only meaningful against the entry set and configuration it
/// was computed from; callers re-run [`compute_layout`] whenever either
/// changes.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendLayout {
    /// Bounding rectangle of the whole legend, in pixel coordinates
    pub rect: Rect,
    /// Number of columns, always at least 1
    pub columns: usize,
    /// Width of one entry cell
    pub cell_width: f32,
    /// Height of one entry row
    pub cell_height: f32,
    /// Number of displayable entries the layout was computed for
    pub entry_count: usize,
    /// Entry ordinals in display order. Identity order, or reversed per
    /// provider when the config asks for reverse output.
    pub display_order: Vec<usize>,
    /// Characteristic size: the largest scaled line height in the legend,
    /// used for symbol widths and gap offsets
    pub char_size: f32,
}

impl LegendLayout {
    /// The layout of a hidden or entry-less legend: one column, zero-size
    /// rectangle, nothing to draw or hit.
    pub fn empty() -> Self {
        Self {
            rect: Rect::empty(),
            columns: 1,
            cell_width: 0.0,
            cell_height: 0.0,
            entry_count: 0,
            display_order: Vec::new(),
            char_size: 0.0,
        }
    }

    pub fn row_count(&self) -> usize {
        self.entry_count.div_ceil(self.columns)
    }

    pub fn half_gap(&self) -> f32 {
        self.char_size / 2.0
    }
}

impl LegendPosition {
    /// Width available for horizontal stacking under this anchor.
    ///
    /// Side anchors report zero (they never stack), flush-left anchors may
    /// use the whole client width, inside/float anchors get half the chart
    /// width, and the top/bottom family gets the chart width.
    pub fn stack_width(&self, chart_rect: &Rect, client_rect: &Rect) -> f32 {
        match self {
            LegendPosition::Top
            | LegendPosition::TopCenter
            | LegendPosition::Bottom
            | LegendPosition::BottomCenter => chart_rect.width,
            LegendPosition::TopFlushLeft | LegendPosition::BottomFlushLeft => client_rect.width,
            LegendPosition::InsideTopRight
            | LegendPosition::InsideTopLeft
            | LegendPosition::InsideBotRight
            | LegendPosition::InsideBotLeft
            | LegendPosition::Float => chart_rect.width / 2.0,
            LegendPosition::Left | LegendPosition::Right => 0.0,
        }
    }
}

/// Computes the legend geometry for one redraw: column count, cell
/// dimensions, the bounding rectangle, and the display order, shrinking
/// `chart_rect` in place to reserve the space the legend occupies.
///
/// A hidden legend or one without displayable entries produces
/// [`LegendLayout::empty`] and leaves `chart_rect` untouched.
pub fn compute_layout(
    config: &LegendConfig,
    root: &LegendRoot,
    measurer: &dyn TextMeasurer,
    chart_rect: &mut Rect,
    client_rect: &Rect,
    scale: f32,
) -> Result<LegendLayout, GraphpaneLegendError> {
    if config.font.family.is_empty() || !(config.font.size > 0.0) {
        return Err(GraphpaneLegendError::InvalidFontSpec(format!(
            "family {:?}, size {}",
            config.font.family, config.font.size
        )));
    }

    if !config.visible {
        return Ok(LegendLayout::empty());
    }

    let slots = root.walk(config.reverse);
    if slots.is_empty() {
        return Ok(LegendLayout::empty());
    }
    let entry_count = slots.len();

    let char_size = metrics::max_cell_height(&slots, &config.font, measurer, scale);
    let half_gap = char_size / 2.0;
    let gap_px = config.gap * char_size;
    let max_width = metrics::max_label_width(&slots, &config.font, measurer, scale);

    // The largest symbol-key preferred size becomes a floor on the row height
    let mut symbol_floor = 0.0f32;
    for slot in &slots {
        if let Some(size) = slot.entry.symbol.as_ref().and_then(|s| s.preferred_size()) {
            if size > symbol_floor {
                symbol_floor = size;
            }
        }
    }

    // One cell: symbol sample area (or a small lead-in margin) plus the
    // widest label
    let mut cell_width = if config.show_symbols {
        3.0 * char_size + max_width
    } else {
        0.5 * char_size + max_width
    };

    let mut columns = 1usize;
    if config.h_stack && !config.position.is_side() && max_width > 0.0 {
        let avail = config.position.stack_width(chart_rect, client_rect);
        let cols = ((avail - half_gap) / cell_width).floor();
        if cols.is_finite() && cols >= 1.0 {
            columns = cols as usize;
        }
        // Never more columns than entries
        columns = columns.clamp(1, entry_count);
    }

    let mut cell_height = (symbol_floor * scale + half_gap).max(char_size);

    // Clamp degenerate dimensions instead of failing; the renderer and hit
    // tester must never divide by zero
    if cell_width <= 0.0 {
        cell_width = 100.0;
    }
    if cell_height <= 0.0 {
        cell_height = char_size;
    }

    let width = columns as f32 * cell_width;
    let height = entry_count.div_ceil(columns) as f32 * cell_height;

    let rect = place_rect(config, width, height, chart_rect, client_rect, half_gap, gap_px);

    log::trace!(
        "legend layout: {} entries in {} columns, cell {}x{}, rect {:?}",
        entry_count,
        columns,
        cell_width,
        cell_height,
        rect
    );

    Ok(LegendLayout {
        rect,
        columns,
        cell_width,
        cell_height,
        entry_count,
        display_order: slots.iter().map(|slot| slot.ordinal).collect(),
        char_size,
    })
}

/// Anchors the legend rectangle and applies the matching chart-rect
/// adjustment. Inside and float anchors take no space from the chart.
fn place_rect(
    config: &LegendConfig,
    width: f32,
    height: f32,
    chart_rect: &mut Rect,
    client_rect: &Rect,
    half_gap: f32,
    gap_px: f32,
) -> Rect {
    let (x, y) = match config.position {
        LegendPosition::Right => {
            let origin = (client_rect.right() - width, chart_rect.top());
            chart_rect.width -= width + gap_px;
            origin
        }
        LegendPosition::Left => {
            let origin = (client_rect.left(), chart_rect.top());
            chart_rect.x += width + half_gap;
            chart_rect.width -= width + gap_px;
            origin
        }
        LegendPosition::Top => {
            let origin = (chart_rect.left(), client_rect.top());
            chart_rect.y += height + gap_px;
            chart_rect.height -= height + gap_px;
            origin
        }
        LegendPosition::TopCenter => {
            let origin = (
                chart_rect.left() + (chart_rect.width - width) / 2.0,
                client_rect.top(),
            );
            chart_rect.y += height + gap_px;
            chart_rect.height -= height + gap_px;
            origin
        }
        LegendPosition::TopFlushLeft => {
            let origin = (client_rect.left(), client_rect.top());
            chart_rect.y += height + gap_px * 1.5;
            chart_rect.height -= height + gap_px * 1.5;
            origin
        }
        LegendPosition::Bottom => {
            let origin = (chart_rect.left(), client_rect.bottom() - height);
            chart_rect.height -= height + gap_px;
            origin
        }
        LegendPosition::BottomCenter => {
            let origin = (
                chart_rect.left() + (chart_rect.width - width) / 2.0,
                client_rect.bottom() - height,
            );
            chart_rect.height -= height + gap_px;
            origin
        }
        LegendPosition::BottomFlushLeft => {
            let origin = (client_rect.left(), client_rect.bottom() - height);
            chart_rect.height -= height + gap_px;
            origin
        }
        LegendPosition::InsideTopRight => (chart_rect.right() - width, chart_rect.top()),
        LegendPosition::InsideTopLeft => (chart_rect.left(), chart_rect.top()),
        LegendPosition::InsideBotRight => {
            (chart_rect.right() - width, chart_rect.bottom() - height)
        }
        LegendPosition::InsideBotLeft => (chart_rect.left(), chart_rect.bottom() - height),
        LegendPosition::Float => {
            let location = config.location.unwrap_or([0.0, 0.0]);
            (
                chart_rect.left() + location[0] * chart_rect.width,
                chart_rect.top() + location[1] * chart_rect.height,
            )
        }
    };
    Rect::new(x, y, width, height)
}

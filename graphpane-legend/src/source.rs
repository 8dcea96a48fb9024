use crate::entry::LegendEntry;

/// Anything that can supply an ordered list of legend entries. Implemented
/// by the host's pane/chart type.
pub trait EntryProvider {
    fn legend_entries(&self) -> &[LegendEntry];
}

impl EntryProvider for Vec<LegendEntry> {
    fn legend_entries(&self) -> &[LegendEntry] {
        self.as_slice()
    }
}

impl EntryProvider for [LegendEntry] {
    fn legend_entries(&self) -> &[LegendEntry] {
        self
    }
}

/// The root the legend draws entries from: a single chart, or a composite
/// grid of member charts.
///
/// This is the only place the single/grid distinction exists; everything
/// downstream consumes the aggregated provider sequence.
pub enum LegendRoot<'a> {
    Single(&'a dyn EntryProvider),
    Grid {
        /// Member charts in member order
        panes: Vec<&'a dyn EntryProvider>,
        /// Restrict legend content to the first member chart's entries
        uniform_entries: bool,
    },
}

impl<'a> LegendRoot<'a> {
    /// The ordered provider sequence plus the uniform-entries flag.
    pub fn aggregate(&self) -> (Vec<&'a dyn EntryProvider>, bool) {
        match self {
            LegendRoot::Single(pane) => (vec![*pane], false),
            LegendRoot::Grid {
                panes,
                uniform_entries,
            } => (panes.clone(), *uniform_entries),
        }
    }

    /// The shared consuming walk used by the geometry pass, the renderer and
    /// the hit tester. See [`entry_walk`].
    pub fn walk(&self, reverse: bool) -> Vec<EntrySlot<'a>> {
        let (providers, uniform) = self.aggregate();
        entry_walk(&providers, uniform, reverse)
    }
}

/// One displayable legend cell: a visible, non-empty entry together with its
/// ordinal in the unfiltered, unreversed aggregate entry list. The ordinal
/// is the stable identity hit-test results are reported in.
#[derive(Debug, Clone, Copy)]
pub struct EntrySlot<'a> {
    pub ordinal: usize,
    pub entry: &'a LegendEntry,
}

/// Enumerates the displayable entries across the providers, in display
/// order.
///
/// Reverse order is applied within each provider. When `uniform` is set the
/// walk stops after the first provider that yielded at least one entry
/// context, so the geometry pass and the renderer enumerate the identical
/// truncated subset.
pub fn entry_walk<'a>(
    providers: &[&'a dyn EntryProvider],
    uniform: bool,
    reverse: bool,
) -> Vec<EntrySlot<'a>> {
    let mut slots = Vec::new();
    let mut base = 0;
    for provider in providers {
        let entries = provider.legend_entries();
        let count = entries.len();
        for i in 0..count {
            let idx = if reverse { count - i - 1 } else { i };
            let entry = &entries[idx];
            if entry.is_shown() {
                slots.push(EntrySlot {
                    ordinal: base + idx,
                    entry,
                });
            }
        }
        base += count;
        if uniform && count > 0 {
            break;
        }
    }
    slots
}

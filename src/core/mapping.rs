use serde::{Deserialize, Serialize};

/// Chart sub-type of one series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SeriesKind {
    #[default]
    Line,
    Bar,
}

/// Per-series render metadata, parallel to the dataset's series order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesMappingEntry {
    pub kind: SeriesKind,
    /// Series sharing a stack id are cumulatively summed for visual stacking.
    #[serde(default)]
    pub stack_id: Option<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl SeriesMappingEntry {
    #[must_use]
    pub fn line() -> Self {
        Self {
            kind: SeriesKind::Line,
            stack_id: None,
            visible: true,
        }
    }

    #[must_use]
    pub fn bar() -> Self {
        Self {
            kind: SeriesKind::Bar,
            stack_id: None,
            visible: true,
        }
    }

    #[must_use]
    pub fn with_stack_id(mut self, stack_id: impl Into<String>) -> Self {
        self.stack_id = Some(stack_id.into());
        self
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// Parallel metadata for stacked/grouped charts.
///
/// Stack-id grouping is stable for the life of a render pass. A series index
/// with no entry is treated as a plain line series and skipped for
/// stacking/bar-geometry purposes rather than aborting the pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SeriesMapping {
    entries: Vec<SeriesMappingEntry>,
}

impl SeriesMapping {
    #[must_use]
    pub fn new(entries: Vec<SeriesMappingEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entry(&self, series_idx: usize) -> Option<&SeriesMappingEntry> {
        self.entries.get(series_idx)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of side-by-side bar slots at one bucket.
    ///
    /// Series sharing a stack id render as a single stacked column and occupy
    /// one slot; each independent bar series takes a slot of its own.
    #[must_use]
    pub fn bar_group_size(&self) -> usize {
        let mut stacks: Vec<&str> = Vec::new();
        let mut slots = 0;
        for entry in self.entries.iter().filter(|e| e.kind == SeriesKind::Bar) {
            match entry.stack_id.as_deref() {
                Some(id) if stacks.contains(&id) => {}
                Some(id) => {
                    stacks.push(id);
                    slots += 1;
                }
                None => slots += 1,
            }
        }
        slots
    }

    /// Slot of `series_idx` among bar slots, left to right.
    ///
    /// Stacked series resolve to the slot assigned at their stack's first
    /// appearance, so every segment of one stack hit-tests the same band.
    #[must_use]
    pub fn bar_group_position(&self, series_idx: usize) -> Option<usize> {
        if self.entry(series_idx)?.kind != SeriesKind::Bar {
            return None;
        }

        let mut stacks: Vec<(&str, usize)> = Vec::new();
        let mut next_slot = 0;
        for (idx, entry) in self.entries.iter().enumerate() {
            if entry.kind != SeriesKind::Bar {
                continue;
            }
            let slot = match entry.stack_id.as_deref() {
                Some(id) => match stacks.iter().find(|(key, _)| *key == id) {
                    Some(&(_, slot)) => slot,
                    None => {
                        let slot = next_slot;
                        next_slot += 1;
                        stacks.push((id, slot));
                        slot
                    }
                },
                None => {
                    let slot = next_slot;
                    next_slot += 1;
                    slot
                }
            };
            if idx == series_idx {
                return Some(slot);
            }
        }
        None
    }
}

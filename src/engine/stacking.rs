use indexmap::IndexMap;

/// Running per-stack-id totals threaded through a single matching pass.
///
/// Series must be resolved in dataset order so cumulative totals are
/// deterministic; totals are never persisted across passes.
#[derive(Debug, Clone, Default)]
pub struct StackTotals {
    totals: IndexMap<String, f64>,
}

impl StackTotals {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the visual (cumulative) y value of one series segment.
    ///
    /// Unstacked series keep their raw value. A stacked series returns the
    /// new cumulative total of its stack, updating the running total for
    /// subsequent series in the same stack.
    pub fn resolve_visual_value(&mut self, stack_id: Option<&str>, raw_value: f64) -> f64 {
        let Some(stack_id) = stack_id else {
            return raw_value;
        };

        let total = self
            .totals
            .entry(stack_id.to_owned())
            .and_modify(|total| *total += raw_value)
            .or_insert(raw_value);
        *total
    }

    /// Current cumulative total of a stack, zero when the stack is unseen.
    #[must_use]
    pub fn total(&self, stack_id: &str) -> f64 {
        self.totals.get(stack_id).copied().unwrap_or(0.0)
    }
}

//! Sorting trace engine
//!
//! Six algorithms, each a generator of intermediate array states. Every
//! algorithm runs in place over a working copy — the caller's input is never
//! mutated — and pushes an [`ArraySnapshot`] at each externally observable
//! step. The final snapshot (when any step occurs at all) is the input in
//! ascending order.
//!
//! Snapshot points per algorithm:
//! - Bubble: one per swap, marking both swapped indices; a pass with no swap
//!   ends the sort early. An already-sorted input emits nothing.
//! - Selection: one per swap with the found minimum, marking the position and
//!   the minimum's index.
//! - Insertion: one per outer iteration after placement, marking the slot.
//! - Counting: one per placement into the output buffer, marking the output
//!   index just written. Stable by construction.
//! - Merge: one per element written during a merge, marking the write index.
//!   Left-half elements win ties, so equal elements keep their order.
//! - Quick: Lomuto partition with the last element as pivot; one snapshot per
//!   partition swap and one after the pivot is placed, plus a re-mark of the
//!   pivot/end pair after each recursive call (a display artifact; the final
//!   permutation is unaffected).
//!
//! All comparisons are strict: equal elements never trigger a swap.

mod counting;
mod merge;
mod quick;
mod simple;

use crate::snapshot::ArraySnapshot;

/// The six supported sorting algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Counting,
    Merge,
    Quick,
}

impl SortAlgorithm {
    /// All algorithms, in presentation order.
    pub const ALL: [SortAlgorithm; 6] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Counting,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
    ];

    /// Human-readable name, as shown by the driver.
    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Counting => "Counting Sort",
            SortAlgorithm::Merge => "Merge Sort",
            SortAlgorithm::Quick => "Quick Sort",
        }
    }
}

/// Run `algorithm` over a working copy of `input` and collect the step trace.
pub fn sort(algorithm: SortAlgorithm, input: &[i64]) -> Vec<ArraySnapshot> {
    let mut working = input.to_vec();
    let mut trace = Vec::new();

    match algorithm {
        SortAlgorithm::Bubble => simple::bubble(&mut working, &mut trace),
        SortAlgorithm::Selection => simple::selection(&mut working, &mut trace),
        SortAlgorithm::Insertion => simple::insertion(&mut working, &mut trace),
        SortAlgorithm::Counting => counting::counting(&mut working, &mut trace),
        SortAlgorithm::Merge => merge::merge_sort(&mut working, &mut trace),
        SortAlgorithm::Quick => quick::quick_sort(&mut working, &mut trace),
    }

    trace
}

/// Shorthand used by the per-algorithm modules.
pub(crate) fn emit(trace: &mut Vec<ArraySnapshot>, values: &[i64], marked: &[usize]) {
    trace.push(ArraySnapshot::from_marked(values, marked));
}

//! Snapshot records and trace replay
//!
//! Every engine in this crate produces an ordered sequence of immutable
//! snapshots, one per externally observable step. This module defines the
//! snapshot record types, the [`Frame`] union the driver consumes, and
//! [`Trace`] — a recorded frame list with a replay cursor that the UI walks
//! forward and backward.
//!
//! Engines know nothing about timing: pacing between frames is owned entirely
//! by whoever holds the [`Trace`].

/// One slot of an array snapshot.
///
/// `is_moving` marks the indices touched by the most recent operation and is
/// cleared on the next snapshot (each snapshot re-marks from scratch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub value: i64,
    pub is_moving: bool,
}

/// State of the working array after one sorting step.
///
/// Invariant: the element count always equals the input length — sorting
/// never drops or duplicates an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArraySnapshot {
    pub elements: Vec<Element>,
}

impl ArraySnapshot {
    /// Build a snapshot of `values` with the given indices marked as moving.
    pub fn from_marked(values: &[i64], marked: &[usize]) -> Self {
        ArraySnapshot {
            elements: values
                .iter()
                .enumerate()
                .map(|(index, &value)| Element {
                    value,
                    is_moving: marked.contains(&index),
                })
                .collect(),
        }
    }

    /// The values without their markers.
    pub fn values(&self) -> Vec<i64> {
        self.elements.iter().map(|e| e.value).collect()
    }

    /// Indices marked as moving in this snapshot.
    pub fn moving_indices(&self) -> Vec<usize> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_moving)
            .map(|(index, _)| index)
            .collect()
    }
}

/// Accumulated visit order after one graph traversal step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitSnapshot {
    /// Vertices visited so far, in visit order.
    pub visited: Vec<String>,
}

/// One edge accepted into the minimum spanning tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MstEdge {
    pub source: String,
    pub target: String,
    pub weight: u64,
}

/// Accumulated MST edge set after one accepted edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MstSnapshot {
    pub edges: Vec<MstEdge>,
}

impl MstSnapshot {
    /// Sum of the accepted edge weights.
    pub fn total_weight(&self) -> u64 {
        self.edges.iter().map(|e| e.weight).sum()
    }
}

/// One replayable step, tagged by the kind of state it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// Sorting step: the full working array with moved indices marked.
    Array(ArraySnapshot),
    /// Graph traversal step: accumulated visit order.
    Visit(VisitSnapshot),
    /// Kruskal step: accumulated MST edge set.
    Mst(MstSnapshot),
    /// Tree traversal step: the full visit sequence with one value current.
    Highlight { values: Vec<i64>, current: usize },
    /// Narrated step for container and list demos.
    Message(String),
}

/// A recorded trace with a replay cursor.
///
/// The cursor always points at the current frame; stepping past either end
/// leaves the cursor in place and reports that nothing moved.
#[derive(Debug, Default)]
pub struct Trace {
    frames: Vec<Frame>,
    position: usize,
}

impl Trace {
    pub fn new(frames: Vec<Frame>) -> Self {
        Trace { frames, position: 0 }
    }

    /// Append a frame to the end of the recording.
    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// The frame under the cursor, if any frames were recorded.
    pub fn current(&self) -> Option<&Frame> {
        self.frames.get(self.position)
    }

    /// Zero-based cursor position.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Advance the cursor. Returns false when already at the last frame.
    pub fn step_forward(&mut self) -> bool {
        if self.position + 1 < self.frames.len() {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Move the cursor back. Returns false when already at the first frame.
    pub fn step_backward(&mut self) -> bool {
        if self.position > 0 {
            self.position -= 1;
            true
        } else {
            false
        }
    }

    /// Reset the cursor to the first frame.
    pub fn rewind_to_start(&mut self) {
        self.position = 0;
    }

    /// Move the cursor to the last frame.
    pub fn jump_to_end(&mut self) {
        self.position = self.frames.len().saturating_sub(1);
    }
}

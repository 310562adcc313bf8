//! # Introduction
//!
//! Algoscope traces classic algorithms and data structures step by step:
//! each engine turns an input into an ordered sequence of immutable
//! snapshots, one per externally observable event (a swap, a vertex visit,
//! an accepted edge). The recorded trace is then navigated forward
//! and backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Trace pipeline
//!
//! ```text
//! Input → Engine → Snapshots → Trace → TUI
//! ```
//!
//! 1. [`sorting`] — six sorting algorithms emitting per-step array states.
//! 2. [`graph`] — BFS, DFS, Kruskal's MST, and Dijkstra over a fixed
//!    vertex/edge set.
//! 3. [`tree`] — arena-backed binary/BST/AVL insertion and four traversal
//!    orders.
//! 4. [`structures`] — bounded stack/queue, ordered-list editor, and
//!    array/string access demos with validated input limits.
//! 5. [`snapshot`] — the snapshot record types and [`snapshot::Trace`], a
//!    recorded frame list with a replay cursor.
//! 6. [`ui`] — ratatui replay app; not part of the stable library API.
//!
//! Engines are pure with respect to their input (every run works on its own
//! working copy) and know nothing about pacing: delays between steps belong
//! to whoever replays the trace.

pub mod graph;
pub mod snapshot;
pub mod sorting;
pub mod structures;
pub mod tree;
pub mod ui;

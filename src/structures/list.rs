//! Ordered-list editor.
//!
//! The abstraction is a linked-list-like ordered sequence: each node holds a
//! data string and "next" is positional rather than a real pointer. Index
//! operations validate their range and silently ignore out-of-range
//! requests instead of treating them as errors.

/// An ordered sequence of data nodes with positional insert and delete.
#[derive(Debug, Default)]
pub struct SeqList {
    nodes: Vec<String>,
}

impl SeqList {
    pub fn new() -> Self {
        SeqList::default()
    }

    pub fn insert_at_start(&mut self, data: &str) {
        self.nodes.insert(0, data.to_string());
    }

    pub fn insert_at_end(&mut self, data: &str) {
        self.nodes.push(data.to_string());
    }

    /// Insert at `index`, valid for `0 ≤ index ≤ len`. Out-of-range
    /// indices are a no-op.
    pub fn insert_at(&mut self, index: usize, data: &str) {
        if index <= self.nodes.len() {
            self.nodes.insert(index, data.to_string());
        }
    }

    /// Remove the first node; a no-op on an empty list.
    pub fn delete_at_start(&mut self) {
        if !self.nodes.is_empty() {
            self.nodes.remove(0);
        }
    }

    /// Remove the last node; a no-op on an empty list.
    pub fn delete_at_end(&mut self) {
        self.nodes.pop();
    }

    /// Delete at `index`, valid for `0 ≤ index < len`. Out-of-range
    /// indices are a no-op.
    pub fn delete_at(&mut self, index: usize) {
        if index < self.nodes.len() {
            self.nodes.remove(index);
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node data in list order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }
}

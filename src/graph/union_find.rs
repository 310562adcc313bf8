//! Disjoint-set structure over string vertex ids.
//!
//! `find` is path-compressed; `union` reparents one root onto the other
//! without rank bookkeeping.

use rustc_hash::FxHashMap;

#[derive(Debug)]
pub struct UnionFind {
    parent: FxHashMap<String, String>,
}

impl UnionFind {
    /// Each id starts as its own singleton component.
    pub fn new<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let parent = ids.into_iter().map(|id| (id.clone(), id)).collect();
        UnionFind { parent }
    }

    /// Representative of `x`'s component, compressing the walked path.
    /// Ids never seen before are treated as their own component.
    pub fn find(&mut self, x: &str) -> String {
        let mut root = x.to_string();
        while let Some(parent) = self.parent.get(&root) {
            if *parent == root {
                break;
            }
            root = parent.clone();
        }

        // Second pass: point everything on the path straight at the root.
        let mut current = x.to_string();
        while let Some(parent) = self.parent.get(&current).cloned() {
            if parent == current {
                break;
            }
            self.parent.insert(current, root.clone());
            current = parent;
        }

        root
    }

    /// Merge the components of `a` and `b`.
    pub fn union(&mut self, a: &str, b: &str) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            self.parent.insert(root_a, root_b);
        }
    }
}

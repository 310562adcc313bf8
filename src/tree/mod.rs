//! Tree trace engine
//!
//! Nodes live in an arena ([`Tree::nodes`]) and refer to their children by
//! integer handle, so parent→child ownership is explicit and no node is ever
//! aliased between trees. A tree is a possibly-empty set of nodes reachable
//! from the root handle; recursive descent terminates on an absent child.
//!
//! Three insertion disciplines share the arena:
//! - [`TreeKind::Binary`] — level-order scan for the first free child slot,
//!   or a caller-designated target node;
//! - [`TreeKind::Bst`] — ordered descent, no rebalancing;
//! - [`TreeKind::Avl`] — ordered descent with height bookkeeping and
//!   rotations on unwind (see [`avl`]).
//!
//! Traversal generators live in [`traversal`].

mod avl;
mod traversal;

pub use traversal::TraversalOrder;

use std::collections::VecDeque;

/// Handle into the tree's node arena.
pub type NodeId = usize;

/// A tree node. `height` is maintained only by AVL insertion: a leaf has
/// height 1 and an absent child counts as height 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub value: i64,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    pub height: i64,
}

/// Which insertion discipline [`Tree::insert`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeKind {
    Binary,
    Bst,
    Avl,
}

/// An arena-backed binary tree.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl Tree {
    pub fn new() -> Self {
        Tree::default()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Number of nodes in the arena (all are reachable from the root).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Height of a possibly-absent subtree (absent = 0). AVL only.
    pub fn height(&self, id: Option<NodeId>) -> i64 {
        id.and_then(|id| self.nodes.get(id)).map_or(0, |n| n.height)
    }

    /// Left height minus right height. AVL only.
    pub fn balance_factor(&self, id: NodeId) -> i64 {
        self.nodes.get(id).map_or(0, |node| {
            self.height(node.left) - self.height(node.right)
        })
    }

    /// Insert `value` under the given discipline.
    ///
    /// `target` is honored only by [`TreeKind::Binary`]: the value becomes a
    /// child of that node instead of the level-order scan result. A target
    /// with both slots taken makes the insert a silent no-op, matching the
    /// index-out-of-range policy elsewhere in the crate.
    pub fn insert(&mut self, kind: TreeKind, value: i64, target: Option<NodeId>) {
        match kind {
            TreeKind::Binary => self.insert_level_order(value, target),
            TreeKind::Bst => self.insert_bst(value),
            TreeKind::Avl => self.insert_avl(value),
        }
    }

    pub(crate) fn alloc(&mut self, value: i64) -> NodeId {
        self.nodes.push(Node {
            value,
            left: None,
            right: None,
            height: 1,
        });
        self.nodes.len() - 1
    }

    pub(crate) fn update_height(&mut self, id: NodeId) {
        let new_height = 1 + self.height(self.nodes[id].left).max(self.height(self.nodes[id].right));
        self.nodes[id].height = new_height;
    }

    pub(crate) fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    /// Queue-based scan for the first node with a free child slot, left
    /// before right.
    fn insert_level_order(&mut self, value: i64, target: Option<NodeId>) {
        let Some(root) = self.root else {
            let id = self.alloc(value);
            self.root = Some(id);
            return;
        };

        if let Some(parent) = target {
            if parent < self.nodes.len() {
                self.attach_to_free_slot(parent, value);
            }
            return;
        }

        let mut queue: VecDeque<NodeId> = VecDeque::from([root]);
        while let Some(id) = queue.pop_front() {
            if self.nodes[id].left.is_none() || self.nodes[id].right.is_none() {
                self.attach_to_free_slot(id, value);
                return;
            }
            if let Some(left) = self.nodes[id].left {
                queue.push_back(left);
            }
            if let Some(right) = self.nodes[id].right {
                queue.push_back(right);
            }
        }
    }

    fn attach_to_free_slot(&mut self, parent: NodeId, value: i64) {
        if self.nodes[parent].left.is_none() {
            let id = self.alloc(value);
            self.nodes[parent].left = Some(id);
        } else if self.nodes[parent].right.is_none() {
            let id = self.alloc(value);
            self.nodes[parent].right = Some(id);
        }
        // Both slots taken: nothing to do.
    }

    /// Ordered descent: strictly smaller values go left, everything else
    /// (duplicates included) goes right. No rebalancing.
    fn insert_bst(&mut self, value: i64) {
        let Some(root) = self.root else {
            let id = self.alloc(value);
            self.root = Some(id);
            return;
        };
        self.bst_descend(root, value);
    }

    fn bst_descend(&mut self, current: NodeId, value: i64) {
        if value < self.nodes[current].value {
            match self.nodes[current].left {
                Some(left) => self.bst_descend(left, value),
                None => {
                    let id = self.alloc(value);
                    self.nodes[current].left = Some(id);
                }
            }
        } else {
            match self.nodes[current].right {
                Some(right) => self.bst_descend(right, value),
                None => {
                    let id = self.alloc(value);
                    self.nodes[current].right = Some(id);
                }
            }
        }
    }
}

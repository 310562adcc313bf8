//! Traversal generators.
//!
//! Each order produces a finite value sequence that can be regenerated any
//! number of times from the same unmodified tree. Inorder reads the two
//! positional children as left/right, so it is meaningful for BST and AVL
//! trees; on a generic binary tree it is just a positional walk.

use std::collections::VecDeque;

use super::{NodeId, Tree};

/// The four supported visit orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    Preorder,
    Inorder,
    Postorder,
    LevelOrder,
}

impl TraversalOrder {
    pub const ALL: [TraversalOrder; 4] = [
        TraversalOrder::Preorder,
        TraversalOrder::Inorder,
        TraversalOrder::Postorder,
        TraversalOrder::LevelOrder,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TraversalOrder::Preorder => "Preorder",
            TraversalOrder::Inorder => "Inorder",
            TraversalOrder::Postorder => "Postorder",
            TraversalOrder::LevelOrder => "Level Order",
        }
    }
}

impl Tree {
    /// Visit every node in the given order and collect the values.
    pub fn traverse(&self, order: TraversalOrder) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len());
        match order {
            TraversalOrder::Preorder => self.preorder(self.root(), &mut out),
            TraversalOrder::Inorder => self.inorder(self.root(), &mut out),
            TraversalOrder::Postorder => self.postorder(self.root(), &mut out),
            TraversalOrder::LevelOrder => self.level_order(&mut out),
        }
        out
    }

    fn preorder(&self, id: Option<NodeId>, out: &mut Vec<i64>) {
        if let Some(id) = id {
            let node = &self.nodes[id];
            out.push(node.value);
            self.preorder(node.left, out);
            self.preorder(node.right, out);
        }
    }

    fn inorder(&self, id: Option<NodeId>, out: &mut Vec<i64>) {
        if let Some(id) = id {
            let node = &self.nodes[id];
            self.inorder(node.left, out);
            out.push(node.value);
            self.inorder(node.right, out);
        }
    }

    fn postorder(&self, id: Option<NodeId>, out: &mut Vec<i64>) {
        if let Some(id) = id {
            let node = &self.nodes[id];
            self.postorder(node.left, out);
            self.postorder(node.right, out);
            out.push(node.value);
        }
    }

    fn level_order(&self, out: &mut Vec<i64>) {
        let Some(root) = self.root() else {
            return;
        };
        let mut queue: VecDeque<NodeId> = VecDeque::from([root]);
        while let Some(id) = queue.pop_front() {
            let node = &self.nodes[id];
            out.push(node.value);
            if let Some(left) = node.left {
                queue.push_back(left);
            }
            if let Some(right) = node.right {
                queue.push_back(right);
            }
        }
    }
}

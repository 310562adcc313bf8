//! AVL insertion and rotations.
//!
//! Insertion descends like a BST, then recomputes heights and balance
//! factors on the unwind. A node whose balance leaves `[-1, 1]` is fixed by
//! one of the four textbook cases:
//!
//! - balance > 1, value < left child  → right rotation (LL)
//! - balance > 1, value > left child  → left-rotate left child, then right
//!   rotation (LR)
//! - balance < -1, value > right child → left rotation (RR)
//! - balance < -1, value < right child → right-rotate right child, then left
//!   rotation (RL)
//!
//! Rotations take the subtree root handle and return the handle of the new
//! subtree root with both affected heights recomputed bottom-up. Inserting a
//! value already present leaves the tree unchanged.

use super::{NodeId, Tree};

impl Tree {
    pub(super) fn insert_avl(&mut self, value: i64) {
        let new_root = match self.root() {
            Some(root) => self.avl_descend(root, value),
            None => self.alloc(value),
        };
        self.set_root(new_root);
    }

    /// Insert below `current` and return the (possibly rotated) subtree root.
    fn avl_descend(&mut self, current: NodeId, value: i64) -> NodeId {
        if value < self.nodes[current].value {
            let child = match self.nodes[current].left {
                Some(left) => self.avl_descend(left, value),
                None => self.alloc(value),
            };
            self.nodes[current].left = Some(child);
        } else if value > self.nodes[current].value {
            let child = match self.nodes[current].right {
                Some(right) => self.avl_descend(right, value),
                None => self.alloc(value),
            };
            self.nodes[current].right = Some(child);
        } else {
            // Duplicate: no structural change.
            return current;
        }

        self.update_height(current);
        self.rebalance(current, value)
    }

    fn rebalance(&mut self, current: NodeId, value: i64) -> NodeId {
        let balance = self.balance_factor(current);

        if balance > 1 {
            if let Some(left) = self.nodes[current].left {
                if value < self.nodes[left].value {
                    return self.rotate_right(current);
                }
                if value > self.nodes[left].value {
                    let rotated = self.rotate_left(left);
                    self.nodes[current].left = Some(rotated);
                    return self.rotate_right(current);
                }
            }
        }

        if balance < -1 {
            if let Some(right) = self.nodes[current].right {
                if value > self.nodes[right].value {
                    return self.rotate_left(current);
                }
                if value < self.nodes[right].value {
                    let rotated = self.rotate_right(right);
                    self.nodes[current].right = Some(rotated);
                    return self.rotate_left(current);
                }
            }
        }

        current
    }

    /// Promote `y`'s left child `x`: `x`'s right subtree reparents onto
    /// `y`'s left, `y` becomes `x`'s right child. Heights recompute for `y`
    /// first (now lower), then `x`.
    fn rotate_right(&mut self, y: NodeId) -> NodeId {
        let Some(x) = self.nodes[y].left else {
            return y;
        };
        let moved = self.nodes[x].right;

        self.nodes[x].right = Some(y);
        self.nodes[y].left = moved;

        self.update_height(y);
        self.update_height(x);
        x
    }

    /// Mirror of [`Tree::rotate_right`].
    fn rotate_left(&mut self, x: NodeId) -> NodeId {
        let Some(y) = self.nodes[x].right else {
            return x;
        };
        let moved = self.nodes[y].left;

        self.nodes[y].left = Some(x);
        self.nodes[x].right = moved;

        self.update_height(x);
        self.update_height(y);
        y
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Tree, TreeKind};

    fn avl_from(values: &[i64]) -> Tree {
        let mut tree = Tree::new();
        for &v in values {
            tree.insert(TreeKind::Avl, v, None);
        }
        tree
    }

    #[test]
    fn left_rotation_after_ascending_inserts() {
        let tree = avl_from(&[10, 20, 30]);
        let root = tree.root().expect("tree has a root");
        let root_node = tree.node(root).expect("root exists");

        assert_eq!(root_node.value, 20);
        let left = root_node.left.and_then(|id| tree.node(id)).expect("left child");
        let right = root_node.right.and_then(|id| tree.node(id)).expect("right child");
        assert_eq!(left.value, 10);
        assert_eq!(right.value, 30);
        assert_eq!(root_node.height, 2);
    }

    #[test]
    fn right_rotation_after_descending_inserts() {
        let tree = avl_from(&[30, 20, 10]);
        let root = tree.root().expect("tree has a root");
        assert_eq!(tree.node(root).expect("root exists").value, 20);
    }

    #[test]
    fn double_rotation_cases() {
        // LR: 30, 10, 20 needs a left-then-right fix.
        let lr = avl_from(&[30, 10, 20]);
        assert_eq!(lr.node(lr.root().expect("root")).expect("root").value, 20);

        // RL: 10, 30, 20 needs a right-then-left fix.
        let rl = avl_from(&[10, 30, 20]);
        assert_eq!(rl.node(rl.root().expect("root")).expect("root").value, 20);
    }

    #[test]
    fn duplicate_insert_is_ignored() {
        let tree = avl_from(&[10, 20, 10]);
        assert_eq!(tree.len(), 2);
    }
}

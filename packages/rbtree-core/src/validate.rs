use crate::color::Color;
use crate::error::{Error, Result};
use crate::tree::Tree;

impl<K: Ord> Tree<K> {
    /// Check the four red-black invariants, reporting the first one violated.
    ///
    /// Invariants are checked in a fixed order: search order, black root,
    /// no red-red adjacency, uniform black height. Intended for tests and
    /// debugging; trees built through the public constructors always pass.
    pub fn validate(&self) -> Result<()> {
        let result = if !self.binary_search_order() {
            Err(Error::SearchOrder)
        } else if !self.black_root() {
            Err(Error::RootColor)
        } else if !self.no_red_red() {
            Err(Error::RedRed)
        } else if self.black_height().is_none() {
            Err(Error::BlackHeight)
        } else {
            Ok(())
        };
        if let Err(err) = &result {
            tracing::debug!(violation = %err, "tree failed validation");
        }
        result
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Every key in a left subtree is smaller than its ancestor's key, and
    /// every key in a right subtree larger. A `DoubleLeaf` anywhere fails.
    pub fn binary_search_order(&self) -> bool {
        within_bounds(self, None, None)
    }
}

impl<K> Tree<K> {
    pub fn black_root(&self) -> bool {
        match self {
            Tree::Leaf => true,
            Tree::DoubleLeaf => false,
            Tree::Node(node) => node.color == Color::Black,
        }
    }

    pub fn no_red_red(&self) -> bool {
        match self.as_node() {
            None => true,
            Some(node) => {
                let red_child = node.color == Color::Red
                    && (node.left.color() == Some(Color::Red)
                        || node.right.color() == Some(Color::Red));
                !red_child && node.left.no_red_red() && node.right.no_red_red()
            }
        }
    }

    /// Black nodes on every root-to-leaf path, or `None` when paths disagree.
    ///
    /// Red counts 0, black 1, double-black 2 and negative-black -1; a
    /// `DoubleLeaf` counts 1 where a `Leaf` counts 0.
    pub fn black_height(&self) -> Option<isize> {
        match self {
            Tree::Leaf => Some(0),
            Tree::DoubleLeaf => Some(1),
            Tree::Node(node) => {
                let left = node.left.black_height()?;
                let right = node.right.black_height()?;
                (left == right).then(|| left + node.color.black_weight())
            }
        }
    }
}

fn within_bounds<K: Ord>(tree: &Tree<K>, lower: Option<&K>, upper: Option<&K>) -> bool {
    match tree {
        Tree::Leaf => true,
        Tree::DoubleLeaf => false,
        Tree::Node(node) => {
            lower.map_or(true, |lo| *lo < node.key)
                && upper.map_or(true, |hi| node.key < *hi)
                && within_bounds(&node.left, lower, Some(&node.key))
                && within_bounds(&node.right, Some(&node.key), upper)
        }
    }
}

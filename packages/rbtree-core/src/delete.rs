//! Deletion with double-black bookkeeping.
//!
//! Physically removing a black node leaves its path one black short. That
//! deficiency is marked on the replacement subtree (a `DoubleLeaf` or a
//! `DoubleBlack` node) and carried upward by [`bubble`]: the parent takes one
//! more shade of black while both children give one up, and `balance` gets a
//! chance to absorb it at every level. Whatever reaches the root is dropped by
//! forcing the root black.

use std::cmp::Ordering;

use crate::balance::balance;
use crate::color::Color;
use crate::tree::{Node, Tree};

impl<K: Ord + Clone> Tree<K> {
    /// Return a tree without `key`. Deleting an absent key is a no-op.
    pub fn delete(&self, key: &K) -> Tree<K> {
        let tree = del(key, self);
        if tree.is_double_black() {
            tracing::trace!("deficiency reached the root; absorbed by blackening");
        }
        tree.blacken()
    }
}

fn del<K: Ord + Clone>(key: &K, tree: &Tree<K>) -> Tree<K> {
    let Tree::Node(node) = tree else {
        return tree.clone();
    };
    match key.cmp(&node.key) {
        Ordering::Less => bubble(
            node.color,
            del(key, &node.left),
            node.key.clone(),
            node.right.clone(),
        ),
        Ordering::Greater => bubble(
            node.color,
            node.left.clone(),
            node.key.clone(),
            del(key, &node.right),
        ),
        Ordering::Equal => remove(node),
    }
}

fn bubble<K: Clone>(color: Color, left: Tree<K>, key: K, right: Tree<K>) -> Tree<K> {
    if left.is_double_black() || right.is_double_black() {
        balance(color.blacker(), left.redder(), key, right.redder())
    } else {
        balance(color, left, key, right)
    }
}

fn remove<K: Clone>(node: &Node<K>) -> Tree<K> {
    match (&node.left, node.color, &node.right) {
        (Tree::Leaf, Color::Red | Color::NegativeBlack, Tree::Leaf) => Tree::Leaf,
        (Tree::Leaf, _, Tree::Leaf) => Tree::DoubleLeaf,
        (Tree::Leaf, Color::Black, child) | (child, Color::Black, Tree::Leaf)
            if child.color() == Some(Color::Red) =>
        {
            child.blacken()
        }
        _ => match node.left.maximum() {
            Some(max) => bubble(
                node.color,
                remove_max(&node.left),
                max.clone(),
                node.right.clone(),
            ),
            // Only reachable on a hand-built tree with an empty left side.
            None if node.color == Color::Red => node.right.clone(),
            None => node.right.blacker(),
        },
    }
}

fn remove_max<K: Clone>(tree: &Tree<K>) -> Tree<K> {
    let Tree::Node(node) = tree else {
        return tree.clone();
    };
    if node.right.is_empty() {
        remove(node)
    } else {
        bubble(
            node.color,
            node.left.clone(),
            node.key.clone(),
            remove_max(&node.right),
        )
    }
}

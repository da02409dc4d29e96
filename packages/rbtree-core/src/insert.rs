use std::cmp::Ordering;

use crate::balance::balance;
use crate::color::Color;
use crate::tree::Tree;

impl<K: Ord + Clone> Tree<K> {
    /// Return a tree that also contains `key`. Inserting a present key is a no-op.
    pub fn insert(&self, key: K) -> Tree<K> {
        match ins(&key, self) {
            Tree::DoubleLeaf => {
                tracing::warn!("insert reached a deficient leaf at the root; input tree is malformed");
                Tree::node(key, Color::DoubleBlack, Tree::DoubleLeaf, Tree::DoubleLeaf)
            }
            tree => tree.blacken(),
        }
    }
}

// Fresh nodes start red; each frame rebuilds its node and balances before
// returning, so a red-red pair is pushed up one level at a time.
fn ins<K: Ord + Clone>(key: &K, tree: &Tree<K>) -> Tree<K> {
    match tree {
        Tree::Leaf => Tree::node(key.clone(), Color::Red, Tree::Leaf, Tree::Leaf),
        Tree::DoubleLeaf => Tree::DoubleLeaf,
        Tree::Node(node) => match key.cmp(&node.key) {
            Ordering::Equal => tree.clone(),
            Ordering::Less => balance(
                node.color,
                ins(key, &node.left),
                node.key.clone(),
                node.right.clone(),
            ),
            Ordering::Greater => balance(
                node.color,
                node.left.clone(),
                node.key.clone(),
                ins(key, &node.right),
            ),
        },
    }
}

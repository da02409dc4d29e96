use std::collections::VecDeque;

use crate::tree::{Node, Tree};

impl<K: Clone> Tree<K> {
    /// Node, then left subtree, then right subtree.
    pub fn pre_order(&self) -> Vec<K> {
        let mut out = Vec::new();
        walk_pre(self, &mut out);
        out
    }

    /// Keys in ascending order.
    pub fn in_order(&self) -> Vec<K> {
        self.iter().cloned().collect()
    }

    /// Left subtree, then right subtree, then node.
    pub fn post_order(&self) -> Vec<K> {
        let mut out = Vec::new();
        walk_post(self, &mut out);
        out
    }

    /// Breadth-first, left to right within each level.
    pub fn level_order(&self) -> Vec<K> {
        let mut out = Vec::new();
        let mut queue: VecDeque<&Tree<K>> = VecDeque::new();
        queue.push_back(self);
        while let Some(tree) = queue.pop_front() {
            if let Some(node) = tree.as_node() {
                out.push(node.key.clone());
                queue.push_back(&node.left);
                queue.push_back(&node.right);
            }
        }
        out
    }

    /// Same as [`Tree::in_order`].
    pub fn flatten(&self) -> Vec<K> {
        self.in_order()
    }
}

impl<K> Tree<K> {
    /// Fold over the keys from largest to smallest.
    ///
    /// Each node folds its right subtree first, then its own key, then its
    /// left subtree, so `combine` sees the keys in descending order.
    pub fn fold<B, F>(&self, init: B, mut combine: F) -> B
    where
        F: FnMut(B, &K) -> B,
    {
        fold_node(self, init, &mut combine)
    }

    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter { stack: Vec::new() };
        iter.descend_left(self);
        iter
    }
}

fn walk_pre<K: Clone>(tree: &Tree<K>, out: &mut Vec<K>) {
    if let Some(node) = tree.as_node() {
        out.push(node.key.clone());
        walk_pre(&node.left, out);
        walk_pre(&node.right, out);
    }
}

fn walk_post<K: Clone>(tree: &Tree<K>, out: &mut Vec<K>) {
    if let Some(node) = tree.as_node() {
        walk_post(&node.left, out);
        walk_post(&node.right, out);
        out.push(node.key.clone());
    }
}

fn fold_node<K, B, F>(tree: &Tree<K>, acc: B, combine: &mut F) -> B
where
    F: FnMut(B, &K) -> B,
{
    match tree.as_node() {
        Some(node) => {
            let acc = fold_node(&node.right, acc, combine);
            let acc = combine(acc, &node.key);
            fold_node(&node.left, acc, combine)
        }
        None => acc,
    }
}

/// Borrowing in-order iterator over a [`Tree`].
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    fn descend_left(&mut self, mut tree: &'a Tree<K>) {
        while let Some(node) = tree.as_node() {
            self.stack.push(node);
            tree = &node.left;
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let node = self.stack.pop()?;
        self.descend_left(&node.right);
        Some(&node.key)
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::sync::Arc;

use crate::color::Color;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Persistent red-black tree holding an ordered set of unique keys.
///
/// Every operation that "changes" a tree returns a new `Tree` and leaves the
/// receiver untouched. Unchanged subtrees are shared between versions through
/// `Arc`, so cloning is O(1) and an update only copies one root-to-leaf path.
///
/// The variants are public so trees can be inspected or assembled by hand.
/// Only trees built through [`Tree::empty`], [`Tree::singleton`],
/// [`Tree::from_list`], [`Tree::insert`] and [`Tree::delete`] are guaranteed
/// to satisfy the red-black invariants. Hand-built trees that break them are
/// still accepted by every operation, which will terminate and return *some*
/// tree, but validity is not restored.
#[derive(Debug, PartialEq, Eq)]
pub enum Tree<K> {
    Leaf,
    /// Empty subtree carrying one extra unit of black. Only exists mid-deletion.
    DoubleLeaf,
    Node(Arc<Node<K>>),
}

#[derive(Debug, PartialEq, Eq)]
pub struct Node<K> {
    pub key: K,
    pub color: Color,
    pub left: Tree<K>,
    pub right: Tree<K>,
}

// derive(Clone) would demand K: Clone even though only the Arc is cloned.
impl<K> Clone for Tree<K> {
    fn clone(&self) -> Self {
        match self {
            Tree::Leaf => Tree::Leaf,
            Tree::DoubleLeaf => Tree::DoubleLeaf,
            Tree::Node(node) => Tree::Node(Arc::clone(node)),
        }
    }
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Tree::Leaf
    }
}

impl<K> Tree<K> {
    pub fn empty() -> Self {
        Tree::Leaf
    }

    /// Assemble a node without any balancing.
    pub fn node(key: K, color: Color, left: Tree<K>, right: Tree<K>) -> Self {
        Tree::Node(Arc::new(Node {
            key,
            color,
            left,
            right,
        }))
    }

    pub fn as_node(&self) -> Option<&Node<K>> {
        match self {
            Tree::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Root color, `None` for either kind of leaf.
    pub fn color(&self) -> Option<Color> {
        self.as_node().map(|n| n.color)
    }

    pub(crate) fn with_color(&self, color: Color) -> Option<&Node<K>> {
        self.as_node().filter(|n| n.color == color)
    }

    /// True for a `DoubleLeaf` or a node colored `DoubleBlack`.
    pub fn is_double_black(&self) -> bool {
        match self {
            Tree::DoubleLeaf => true,
            Tree::Node(node) => node.color == Color::DoubleBlack,
            Tree::Leaf => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_node().is_none()
    }

    /// Number of keys.
    pub fn size(&self) -> usize {
        match self.as_node() {
            Some(n) => 1 + n.left.size() + n.right.size(),
            None => 0,
        }
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        match self.as_node() {
            Some(n) => 1 + n.left.height().max(n.right.height()),
            None => 0,
        }
    }

    pub fn maximum(&self) -> Option<&K> {
        let mut current = self.as_node()?;
        while let Some(next) = current.right.as_node() {
            current = next;
        }
        Some(&current.key)
    }

    pub fn minimum(&self) -> Option<&K> {
        let mut current = self.as_node()?;
        while let Some(next) = current.left.as_node() {
            current = next;
        }
        Some(&current.key)
    }

    pub fn is_member<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self;
        while let Some(node) = current.as_node() {
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }
}

impl<K: Clone> Tree<K> {
    fn recolor(&self, color: Color) -> Self {
        match self.as_node() {
            Some(n) => Tree::node(n.key.clone(), color, n.left.clone(), n.right.clone()),
            None => self.clone(),
        }
    }

    /// Force the root black. A deficient empty root collapses to `Leaf`.
    pub fn blacken(&self) -> Self {
        match self {
            Tree::Node(_) => self.recolor(Color::Black),
            _ => Tree::Leaf,
        }
    }

    /// Force the root red. Leaves are returned as they are.
    pub fn redden(&self) -> Self {
        self.recolor(Color::Red)
    }

    /// One shade darker at the root; an empty leaf becomes `DoubleLeaf`.
    pub fn blacker(&self) -> Self {
        match self.as_node() {
            Some(n) => self.recolor(n.color.blacker()),
            None => Tree::DoubleLeaf,
        }
    }

    /// One shade lighter at the root; `DoubleLeaf` becomes `Leaf`.
    pub fn redder(&self) -> Self {
        match self.as_node() {
            Some(n) => self.recolor(n.color.redder()),
            None => Tree::Leaf,
        }
    }
}

impl<K: Ord + Clone> Tree<K> {
    pub fn singleton(key: K) -> Self {
        Tree::node(key, Color::Black, Tree::Leaf, Tree::Leaf)
    }

    /// Left fold of [`Tree::insert`] over `keys`. Later duplicates are ignored.
    pub fn from_list<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        keys.into_iter()
            .fold(Tree::empty(), |tree, key| tree.insert(key))
    }
}

impl<K: Ord + Clone> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Tree::from_list(iter)
    }
}

#[cfg(feature = "serde")]
impl<K: Serialize> Serialize for Tree<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, K> Deserialize<'de> for Tree<K>
where
    K: Deserialize<'de> + Ord + Clone,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let keys = Vec::<K>::deserialize(deserializer)?;
        Ok(Tree::from_list(keys))
    }
}

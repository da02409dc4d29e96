//! Local rewrite shared by insertion and deletion.
//!
//! A black (or double-black) node with a red child that itself has a red
//! child is rewritten into the canonical shape: the middle key on top, its
//! two neighbours as black children, and the four orphaned subtrees handed
//! out left to right. The top comes out red under a black parent and black
//! under a double-black one, so black height is unchanged either way.
//!
//! Deletion adds two more rewrites for a double-black node whose child went
//! negative-black while a deficiency was bubbled past a red sibling.

use crate::color::Color;
use crate::tree::Tree;

/// Rebuild a node from its parts, fixing any violation rooted here.
pub(crate) fn balance<K: Clone>(color: Color, left: Tree<K>, key: K, right: Tree<K>) -> Tree<K> {
    match color {
        Color::Black | Color::DoubleBlack => balance_dark(color, left, key, right),
        _ => Tree::node(key, color, left, right),
    }
}

fn balance_dark<K: Clone>(color: Color, left: Tree<K>, key: K, right: Tree<K>) -> Tree<K> {
    let top = if color == Color::DoubleBlack {
        Color::Black
    } else {
        Color::Red
    };

    if let Some(l) = left.with_color(Color::Red) {
        if let Some(ll) = l.left.with_color(Color::Red) {
            return Tree::node(
                l.key.clone(),
                top,
                Tree::node(ll.key.clone(), Color::Black, ll.left.clone(), ll.right.clone()),
                Tree::node(key, Color::Black, l.right.clone(), right),
            );
        }
        if let Some(lr) = l.right.with_color(Color::Red) {
            return Tree::node(
                lr.key.clone(),
                top,
                Tree::node(l.key.clone(), Color::Black, l.left.clone(), lr.left.clone()),
                Tree::node(key, Color::Black, lr.right.clone(), right),
            );
        }
    }

    if let Some(r) = right.with_color(Color::Red) {
        if let Some(rl) = r.left.with_color(Color::Red) {
            return Tree::node(
                rl.key.clone(),
                top,
                Tree::node(key, Color::Black, left, rl.left.clone()),
                Tree::node(r.key.clone(), Color::Black, rl.right.clone(), r.right.clone()),
            );
        }
        if let Some(rr) = r.right.with_color(Color::Red) {
            return Tree::node(
                r.key.clone(),
                top,
                Tree::node(key, Color::Black, left, r.left.clone()),
                Tree::node(rr.key.clone(), Color::Black, rr.left.clone(), rr.right.clone()),
            );
        }
    }

    if color == Color::DoubleBlack {
        if let Some(l) = left.with_color(Color::NegativeBlack) {
            match (l.left.with_color(Color::Black), l.right.with_color(Color::Black)) {
                (Some(_), Some(lr)) => {
                    return Tree::node(
                        lr.key.clone(),
                        Color::Black,
                        balance(Color::Black, l.left.redden(), l.key.clone(), lr.left.clone()),
                        Tree::node(key, Color::Black, lr.right.clone(), right),
                    );
                }
                _ => tracing::debug!(
                    "negative-black left child lacks black children; double-black left unresolved"
                ),
            }
        }
        if let Some(r) = right.with_color(Color::NegativeBlack) {
            match (r.left.with_color(Color::Black), r.right.with_color(Color::Black)) {
                (Some(rl), Some(_)) => {
                    return Tree::node(
                        rl.key.clone(),
                        Color::Black,
                        Tree::node(key, Color::Black, left, rl.left.clone()),
                        balance(Color::Black, rl.right.clone(), r.key.clone(), r.right.redden()),
                    );
                }
                _ => tracing::debug!(
                    "negative-black right child lacks black children; double-black left unresolved"
                ),
            }
        }
    }

    Tree::node(key, color, left, right)
}

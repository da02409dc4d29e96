use rbtree_core::{Color, Error, Tree};

fn leaf(key: u32, color: Color) -> Tree<u32> {
    Tree::node(key, color, Tree::Leaf, Tree::Leaf)
}

#[test]
fn insert_into_singleton_hangs_red_child() {
    let tree = Tree::singleton(8).insert(1);
    assert_eq!(
        tree,
        Tree::node(8, Color::Black, leaf(1, Color::Red), Tree::Leaf)
    );
    tree.validate().unwrap();
}

#[test]
fn delete_smallest_of_four_rotates_left() {
    let tree = Tree::from_list([1, 2, 3, 4]).delete(&1);
    assert_eq!(
        tree,
        Tree::node(3, Color::Black, leaf(2, Color::Black), leaf(4, Color::Black))
    );
    tree.validate().unwrap();
}

#[test]
fn delete_root_of_four_promotes_predecessor() {
    let tree = Tree::from_list([1, 2, 3, 4]).delete(&2);
    assert_eq!(
        tree,
        Tree::node(3, Color::Black, leaf(1, Color::Black), leaf(4, Color::Black))
    );
    tree.validate().unwrap();
}

#[test]
fn traversal_orders_of_eight_keys() {
    let tree = Tree::from_list([2, 5, 6, 7, 1, 8, 4, 3]);
    assert_eq!(tree.pre_order(), vec![5, 3, 2, 1, 4, 7, 6, 8]);
    assert_eq!(tree.in_order(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(tree.post_order(), vec![1, 2, 4, 3, 6, 8, 7, 5]);
    assert_eq!(tree.level_order(), vec![5, 3, 7, 2, 4, 6, 8, 1]);
    assert_eq!(tree.flatten(), tree.in_order());
}

#[test]
fn black_height_of_eight_keys() {
    let tree = Tree::from_list([2, 7, 4, 9, 1, 3, 18, 10]);
    assert_eq!(tree.black_height(), Some(2));
    assert_eq!(tree.size(), 8);
    assert_eq!(tree.maximum(), Some(&18));
}

#[test]
fn childless_red_root_is_invalid() {
    let tree = leaf(8, Color::Red);
    assert!(!tree.is_valid());
    assert_eq!(tree.validate(), Err(Error::RootColor));
}

#[test]
fn red_child_under_red_root_is_invalid() {
    let tree = Tree::node(8, Color::Red, leaf(1, Color::Red), Tree::Leaf);
    assert!(!tree.is_valid());
    assert!(!tree.no_red_red());
}

#[test]
fn duplicate_insert_is_a_no_op() {
    let tree = Tree::from_list([3, 1, 2]);
    assert_eq!(tree.insert(2), tree);
    assert_eq!(Tree::from_list([3, 1, 2, 2, 3, 1]), tree);
}

#[test]
fn draining_a_tree_keeps_it_valid_at_every_step() {
    let mut tree: Tree<u32> = (1..=64).collect();
    for key in (1..=64).rev().step_by(3).chain((1..=64).step_by(2)) {
        tree = tree.delete(&key);
        tree.validate().unwrap();
        assert!(!tree.is_member(&key));
    }
    for key in 1..=64 {
        tree = tree.delete(&key);
        tree.validate().unwrap();
    }
    assert!(tree.is_empty());
    assert_eq!(tree, Tree::Leaf);
}

#[test]
fn height_stays_logarithmic_for_sorted_input() {
    let tree: Tree<u32> = (0..1024).collect();
    tree.validate().unwrap();
    // 2 * log2(1025) rounded up
    assert!(tree.height() <= 21, "height {}", tree.height());
}

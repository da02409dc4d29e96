#[cfg(feature = "serde")]
#[test]
fn tree_json_is_its_sorted_key_list() {
    use rbtree_core::Tree;

    let tree = Tree::from_list([5, 3, 9, 1]);
    let json = serde_json::to_string(&tree).expect("serialize Tree");
    assert_eq!(json, "[1,3,5,9]");

    let roundtrip: Tree<i32> = serde_json::from_str(&json).expect("deserialize Tree");
    assert_eq!(roundtrip.in_order(), tree.in_order());
    assert!(roundtrip.is_valid());
}

#[cfg(feature = "serde")]
#[test]
fn unsorted_json_still_builds_a_valid_tree() {
    use rbtree_core::{Color, Tree};

    let tree: Tree<u32> = serde_json::from_str("[8, 1, 8, 4]").expect("deserialize Tree");
    assert_eq!(tree.in_order(), vec![1, 4, 8]);
    assert_eq!(tree.color(), Some(Color::Black));
    assert_eq!(serde_json::to_string(&Color::DoubleBlack).unwrap(), "\"DoubleBlack\"");
}

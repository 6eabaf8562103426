//! Tests for the in-order binary search tree cursor

use rstest::rstest;

use trove::domain::{
    collect_remaining, BinarySearchTree, BstIterator, Cursor, DomainError, TreeNode,
};
use trove::util::testing;

fn drive<T: Copy>(cursor: &mut BstIterator<'_, T>) -> Vec<T> {
    collect_remaining(cursor).unwrap().into_iter().copied().collect()
}

// ============================================================
// Ordering
// ============================================================

#[test]
fn given_sample_insert_order_when_walking_then_yields_ascending_values() {
    testing::init_test_setup();
    let mut root = TreeNode::new(8);
    for val in [3, 10, 1, 6, 14, 4, 7, 13] {
        root.insert(val).unwrap();
    }

    let mut cursor = root.iterator();
    assert_eq!(drive(&mut cursor), vec![1, 3, 4, 6, 7, 8, 10, 13, 14]);
}

#[rstest]
#[case(vec![5, 4, 3, 2, 1])]
#[case(vec![1, 2, 3, 4, 5])]
#[case(vec![3, 1, 5, 2, 4])]
#[case(vec![50, -7, 12, 99, 0, -100, 33])]
#[case(vec![42])]
fn given_any_insert_order_when_walking_then_values_are_sorted_once_each(#[case] values: Vec<i64>) {
    let tree = BinarySearchTree::from_values(values.iter().copied()).unwrap();

    let mut expected = values.clone();
    expected.sort_unstable();

    let mut cursor = tree.iterator();
    assert_eq!(drive(&mut cursor), expected);
    assert_eq!(tree.len(), values.len());
}

#[test]
fn given_string_values_when_walking_then_yields_lexicographic_order() {
    let tree = BinarySearchTree::from_values(["orc", "elf", "troll", "dwarf"]).unwrap();
    let walked: Vec<&&str> = tree.iterator().values().collect();
    assert_eq!(walked, vec![&"dwarf", &"elf", &"orc", &"troll"]);
}

// ============================================================
// Empty tree and exhaustion
// ============================================================

#[test]
fn given_empty_tree_when_creating_cursor_then_has_next_is_false_and_next_fails() {
    let tree = BinarySearchTree::<i32>::new();
    let mut cursor = tree.iterator();

    assert!(tree.is_empty());
    assert!(!cursor.has_next());
    assert_eq!(cursor.next(), Err(DomainError::Exhausted));
    assert_eq!(cursor.peak_depth(), 0);
}

#[test]
fn given_absent_root_when_creating_cursor_directly_then_it_is_exhausted() {
    let mut cursor: BstIterator<'_, u8> = BstIterator::new(None);
    assert!(!cursor.has_next());
    assert_eq!(cursor.next(), Err(DomainError::Exhausted));
}

#[test]
fn given_exhausted_cursor_when_calling_next_then_fails_without_changing_state() {
    let tree = BinarySearchTree::from_values([2, 1, 3]).unwrap();
    let mut cursor = tree.iterator();
    assert_eq!(drive(&mut cursor), vec![1, 2, 3]);

    let peak = cursor.peak_depth();
    for _ in 0..3 {
        assert_eq!(cursor.next(), Err(DomainError::Exhausted));
        assert!(!cursor.has_next());
        assert_eq!(cursor.depth(), 0);
        assert_eq!(cursor.peak_depth(), peak);
    }
}

// ============================================================
// Bounded auxiliary storage
// ============================================================

#[rstest]
#[case::left_skewed((0..2_000).rev().collect::<Vec<i32>>())]
#[case::right_skewed((0..2_000).collect::<Vec<i32>>())]
fn given_skewed_tree_when_walking_then_stack_never_exceeds_height(#[case] values: Vec<i32>) {
    let tree = BinarySearchTree::from_values(values.iter().copied()).unwrap();
    let height = tree.height();
    assert_eq!(height, values.len());

    let mut cursor = tree.iterator();
    let mut count = 0;
    while cursor.has_next() {
        assert!(cursor.depth() <= height);
        cursor.next().unwrap();
        count += 1;
    }
    assert_eq!(count, values.len());
    assert!(cursor.peak_depth() <= height);
}

#[test]
fn given_right_skewed_tree_when_walking_then_stack_stays_at_one() {
    let tree = BinarySearchTree::from_values(0..1_000).unwrap();
    let mut cursor = tree.iterator();
    drive(&mut cursor);
    assert_eq!(cursor.peak_depth(), 1);
}

#[test]
fn given_balanced_tree_when_walking_then_peak_depth_is_logarithmic() {
    // insert midpoints first so the tree is perfectly balanced: 2^10 - 1 nodes
    fn midpoints(lo: i32, hi: i32, out: &mut Vec<i32>) {
        if lo > hi {
            return;
        }
        let mid = lo + (hi - lo) / 2;
        out.push(mid);
        midpoints(lo, mid - 1, out);
        midpoints(mid + 1, hi, out);
    }
    let mut values = Vec::new();
    midpoints(1, 1023, &mut values);

    let tree = BinarySearchTree::from_values(values).unwrap();
    assert_eq!(tree.height(), 10);

    let mut cursor = tree.iterator();
    assert_eq!(drive(&mut cursor), (1..=1023).collect::<Vec<_>>());
    assert!(cursor.peak_depth() <= 10);
}

// ============================================================
// Independence and sharing
// ============================================================

#[test]
fn given_two_cursors_when_interleaved_then_sequences_are_identical() {
    let tree = BinarySearchTree::from_values([8, 3, 10, 1, 6, 14, 4, 7, 13]).unwrap();
    let mut first = tree.iterator();
    let mut second = tree.iterator();

    let mut a = Vec::new();
    let mut b = Vec::new();
    a.push(*first.next().unwrap());
    a.push(*first.next().unwrap());
    a.push(*first.next().unwrap());
    b.push(*second.next().unwrap());
    a.extend(drive(&mut first));
    b.extend(drive(&mut second));

    assert_eq!(a, b);
    assert_eq!(a, vec![1, 3, 4, 6, 7, 8, 10, 13, 14]);
}

#[test]
fn given_shared_tree_when_walked_from_threads_then_each_cursor_sees_full_sequence() {
    let tree = BinarySearchTree::from_values([5, 2, 8, 1, 9, 3]).unwrap();
    let tree = &tree;

    let results: Vec<Vec<i32>> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(move || drive(&mut tree.iterator())))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for walked in results {
        assert_eq!(walked, vec![1, 2, 3, 5, 8, 9]);
    }
}

// ============================================================
// Duplicates
// ============================================================

#[test]
fn given_duplicate_value_when_inserting_then_rejected_and_tree_unchanged() {
    let mut tree = BinarySearchTree::from_values([8, 3, 10]).unwrap();

    let err = tree.insert(10).unwrap_err();
    assert_eq!(
        err,
        DomainError::DuplicateValue {
            value: "10".to_string()
        }
    );
    assert_eq!(tree.len(), 3);
    assert_eq!(drive(&mut tree.iterator()), vec![3, 8, 10]);
}

#[test]
fn given_duplicate_in_sequence_when_building_then_fails() {
    let result = BinarySearchTree::from_values([1, 2, 2, 3]);
    assert!(matches!(result, Err(DomainError::DuplicateValue { .. })));
}

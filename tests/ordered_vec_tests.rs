//! Integration tests for OrderedVec.
//!
//! Covers construction, mutation tracking, repair and the configuration
//! switches through the public API only.

use ordvec::ordered::{Config, OrderState, OrderedVec, OrderedVecError, Tracking};
use rstest::rstest;
use std::ops::RangeBounds;

fn odd_numbers() -> OrderedVec<i32> {
    OrderedVec::from(vec![1, 3, 5, 7, 9])
}

fn manual() -> Config {
    Config::new().auto_repair(false)
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_sorted_vector() {
    let vector: OrderedVec<i32> = OrderedVec::new();
    assert!(vector.is_empty());
    assert_eq!(vector.len(), 0);
    assert_eq!(vector.state(), OrderState::Sorted);
    assert!(!vector.is_autorepair_suspended());
}

#[rstest]
fn test_from_vec_sorts_input() {
    let vector = OrderedVec::from(vec![9, 1, 7, 3, 5]);
    assert_eq!(vector.as_slice(), &[1, 3, 5, 7, 9]);
    assert_eq!(vector.state(), OrderState::Sorted);
}

#[rstest]
fn test_collect_sorts_input() {
    let vector: OrderedVec<char> = "ordered".chars().collect();
    assert_eq!(vector.iter().collect::<String>(), "ddeeorr");
}

#[rstest]
fn test_with_capacity_reserves() {
    let vector: OrderedVec<u8> = OrderedVec::with_capacity(32);
    assert!(vector.capacity() >= 32);
    assert!(vector.is_empty());
}

#[rstest]
fn test_with_config_keeps_config() {
    let config = Config::new().tracking(Tracking::Ignored);
    let vector: OrderedVec<i32> = OrderedVec::with_config(config);
    assert_eq!(vector.config(), config);
    assert!(!vector.config().is_tracked());
}

#[rstest]
fn test_into_vec_returns_storage() {
    let vector = OrderedVec::from(vec![2, 1]);
    let storage: Vec<i32> = vector.into();
    assert_eq!(storage, vec![1, 2]);
}

// =============================================================================
// Element access
// =============================================================================

#[rstest]
fn test_front_and_back() {
    let vector = odd_numbers();
    assert_eq!(vector.front(), Ok(&1));
    assert_eq!(vector.back(), Ok(&9));
}

#[rstest]
fn test_empty_access_reports_out_of_range() {
    let mut vector: OrderedVec<i32> = OrderedVec::new();
    let error = OrderedVecError::OutOfRange { index: 0, len: 0 };
    assert_eq!(vector.front(), Err(error.clone()));
    assert_eq!(vector.back(), Err(error.clone()));
    assert_eq!(vector.at(0), Err(error.clone()));
    assert_eq!(vector.front_mut(), Err(error));
    assert_eq!(vector.state(), OrderState::Sorted);
}

#[rstest]
#[should_panic(expected = "index out of bounds")]
fn test_index_past_end_panics() {
    let vector = odd_numbers();
    let _value = vector[5];
}

#[rstest]
fn test_read_access_keeps_sorted_state() {
    let vector = odd_numbers();
    let _ = vector[2];
    let _ = vector.get(4);
    let _ = vector.at(0);
    assert_eq!(vector.state(), OrderState::Sorted);
}

// =============================================================================
// Mutation tracking and repair
// =============================================================================

#[rstest]
#[case::moves_down(2, 0, &[0, 1, 3, 7, 9])]
#[case::moves_up(0, 10, &[3, 5, 7, 9, 10])]
#[case::stays(2, 6, &[1, 3, 6, 7, 9])]
#[case::to_far_end(4, -1, &[-1, 1, 3, 5, 7])]
fn test_single_mutation_is_repaired(
    #[case] index: usize,
    #[case] value: i32,
    #[case] expected: &[i32],
) {
    let mut vector = odd_numbers();
    vector[index] = value;
    assert_eq!(vector.state(), OrderState::DirtyAt(index));

    vector.repair();
    assert_eq!(vector.as_slice(), expected);
    assert_eq!(vector.state(), OrderState::Sorted);
}

#[rstest]
fn test_mutations_at_two_indices_need_full_sort() {
    let mut vector = OrderedVec::with_config(manual());
    vector.assign([1, 3, 5, 7, 9]);
    vector[0] = 8;
    vector[4] = 2;
    assert_eq!(vector.state(), OrderState::DirtyUnknown);

    vector.repair();
    assert_eq!(vector.as_slice(), &[2, 3, 5, 7, 8]);
}

#[rstest]
fn test_repeated_mutation_of_same_index_stays_single() {
    let mut vector = odd_numbers();
    vector[1] = 4;
    vector[1] = 8;
    assert_eq!(vector.state(), OrderState::DirtyAt(1));
    vector.repair();
    assert_eq!(vector.as_slice(), &[1, 5, 7, 8, 9]);
}

#[rstest]
fn test_auto_repair_runs_before_next_mutation() {
    let mut vector = odd_numbers();
    vector[0] = 8;
    vector[4] = 2;
    // The first mutation was repaired before the second index was handed out.
    assert_eq!(vector.state(), OrderState::DirtyAt(4));
    vector.repair();
    assert_eq!(vector.as_slice(), &[2, 3, 5, 7, 8]);
}

#[rstest]
fn test_repair_twice_is_noop() {
    let mut vector = odd_numbers();
    vector[3] = 2;
    vector.repair();
    let once = vector.clone();
    vector.repair();
    assert_eq!(vector, once);
}

#[rstest]
fn test_as_mut_slice_makes_order_unknown() {
    let mut vector = odd_numbers();
    for element in vector.iter_mut() {
        *element = -*element;
    }
    assert_eq!(vector.state(), OrderState::DirtyUnknown);
    vector.repair();
    assert_eq!(vector.as_slice(), &[-9, -7, -5, -3, -1]);
}

#[rstest]
fn test_at_mut_out_of_range_leaves_state() {
    let mut vector = odd_numbers();
    assert_eq!(
        vector.at_mut(5),
        Err(OrderedVecError::OutOfRange { index: 5, len: 5 })
    );
    assert_eq!(vector.state(), OrderState::Sorted);
}

// =============================================================================
// Insertion
// =============================================================================

#[rstest]
fn test_push_keeps_sorted() {
    let mut vector = odd_numbers();
    vector.push(6);
    vector.push(5);
    assert_eq!(vector.as_slice(), &[1, 3, 5, 5, 6, 7, 9]);
    assert_eq!(vector.state(), OrderState::Sorted);
}

#[rstest]
#[case::front(0, 0)]
#[case::back(10, 5)]
#[case::middle(4, 2)]
#[case::after_equal(7, 4)]
fn test_push_position(#[case] value: i32, #[case] expected_position: usize) {
    let mut vector = odd_numbers();
    vector.push(value);
    assert_eq!(vector[expected_position], value);
    assert!(vector.as_slice().is_sorted());
}

#[rstest]
fn test_push_into_dirty_vector_without_repair_appends() {
    let mut vector = OrderedVec::with_config(manual());
    vector.assign([1, 3, 5]);
    vector[0] = 4;
    vector.push(2);
    assert_eq!(vector.as_slice(), &[4, 3, 5, 2]);
    assert_eq!(vector.state(), OrderState::DirtyUnknown);

    vector.repair();
    assert_eq!(vector.as_slice(), &[2, 3, 4, 5]);
}

#[rstest]
fn test_add_operators_push() {
    let mut vector = OrderedVec::new() + 3 + 1;
    vector += 2;
    assert_eq!(vector.as_slice(), &[1, 2, 3]);
}

#[rstest]
fn test_replace_overwrites_or_inserts() {
    let mut vector = odd_numbers();
    assert_eq!(vector.replace(5), Some(5));
    assert_eq!(vector.len(), 5);
    assert_eq!(vector.replace(4), None);
    assert_eq!(vector.as_slice(), &[1, 3, 4, 5, 7, 9]);
}

/// Ordered by `key` alone, so equal elements can still be told apart.
#[derive(Debug, Clone)]
struct Tagged {
    key: i32,
    tag: &'static str,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

const fn tagged(key: i32, tag: &'static str) -> Tagged {
    Tagged { key, tag }
}

fn tags(vector: &OrderedVec<Tagged>) -> Vec<&'static str> {
    vector.iter().map(|element| element.tag).collect()
}

fn tagged_run(config: Config) -> OrderedVec<Tagged> {
    let mut vector = OrderedVec::with_config(config);
    vector.assign([
        tagged(1, "one"),
        tagged(3, "first"),
        tagged(3, "second"),
        tagged(5, "five"),
    ]);
    vector
}

#[rstest]
fn test_replace_overwrites_leftmost_equal_when_sorted() {
    let mut vector = tagged_run(Config::new());

    assert_eq!(vector.replace(tagged(3, "new")).map(|old| old.tag), Some("first"));
    assert_eq!(tags(&vector), vec!["one", "new", "second", "five"]);

    assert_eq!(vector.replace(tagged(4, "four")).map(|old| old.tag), None);
    assert_eq!(tags(&vector), vec!["one", "new", "second", "four", "five"]);
    assert_eq!(vector.state(), OrderState::Sorted);
}

#[rstest]
fn test_replace_overwrites_leftmost_equal_when_dirty() {
    let mut vector = tagged_run(manual());
    vector[0] = tagged(3, "dirty");
    assert_eq!(vector.state(), OrderState::DirtyAt(0));

    assert_eq!(vector.replace(tagged(3, "new")).map(|old| old.tag), Some("dirty"));
    assert_eq!(tags(&vector), vec!["new", "first", "second", "five"]);
    assert_eq!(vector.state(), OrderState::DirtyAt(0));

    assert_eq!(vector.replace(tagged(9, "nine")).map(|old| old.tag), None);
    assert_eq!(tags(&vector), vec!["new", "first", "second", "five", "nine"]);
    assert_eq!(vector.state(), OrderState::DirtyUnknown);

    vector.repair();
    assert_eq!(tags(&vector), vec!["new", "first", "second", "five", "nine"]);
    assert_eq!(vector.state(), OrderState::Sorted);
}

#[rstest]
fn test_merge_sorts_everything() {
    let mut vector = odd_numbers();
    vector.merge(vec![10, 2, 6]);
    assert_eq!(vector.as_slice(), &[1, 2, 3, 5, 6, 7, 9, 10]);
    assert_eq!(vector.state(), OrderState::Sorted);
}

#[rstest]
fn test_merge_replace_keeps_one_per_value() {
    let mut vector = odd_numbers();
    vector.merge_replace([1, 2, 9, 2]);
    assert_eq!(vector.as_slice(), &[1, 2, 3, 5, 7, 9]);
}

#[rstest]
fn test_extend_merges() {
    let mut vector = odd_numbers();
    vector.extend([0, 8]);
    assert_eq!(vector.as_slice(), &[0, 1, 3, 5, 7, 8, 9]);
}

// =============================================================================
// Removal
// =============================================================================

#[rstest]
fn test_erase_returns_removed_element() {
    let mut vector = odd_numbers();
    assert_eq!(vector.erase(1), Ok(3));
    assert_eq!(vector.as_slice(), &[1, 5, 7, 9]);
}

#[rstest]
fn test_erase_out_of_range() {
    let mut vector = odd_numbers();
    assert_eq!(
        vector.erase(5),
        Err(OrderedVecError::OutOfRange { index: 5, len: 5 })
    );
    assert_eq!(vector.len(), 5);
}

#[rstest]
fn test_erase_suspect_element_clears_dirtiness() {
    let mut vector = OrderedVec::with_config(manual());
    vector.assign([1, 3, 5, 7]);
    vector[2] = 100;
    assert_eq!(vector.erase(2), Ok(100));
    assert_eq!(vector.state(), OrderState::Sorted);
    assert_eq!(vector.as_slice(), &[1, 3, 7]);
}

#[rstest]
fn test_erase_before_suspect_shifts_it() {
    let mut vector = OrderedVec::with_config(manual());
    vector.assign([1, 3, 5, 7]);
    vector[2] = 0;
    assert_eq!(vector.erase(0), Ok(1));
    assert_eq!(vector.state(), OrderState::DirtyAt(1));

    vector.repair();
    assert_eq!(vector.as_slice(), &[0, 3, 7]);
}

#[rstest]
#[case::inclusive(1..=3, 3, &[1, 9])]
#[case::half_open(0..2, 2, &[5, 7, 9])]
#[case::to_end(3.., 2, &[1, 3, 5])]
#[case::empty(2..2, 0, &[1, 3, 5, 7, 9])]
fn test_erase_range<R: RangeBounds<usize>>(
    #[case] range: R,
    #[case] removed: usize,
    #[case] expected: &[i32],
) {
    let mut vector = odd_numbers();
    assert_eq!(vector.erase_range(range), Ok(removed));
    assert_eq!(vector.as_slice(), expected);
}

#[rstest]
fn test_erase_range_rejects_overlong_range() {
    let mut vector = odd_numbers();
    assert!(vector.erase_range(3..6).is_err());
    assert_eq!(vector.len(), 5);
}

#[rstest]
fn test_clear_resets_state() {
    let mut vector = OrderedVec::with_config(manual());
    vector.assign([1, 2]);
    vector[0] = 5;
    vector.clear();
    assert!(vector.is_empty());
    assert_eq!(vector.state(), OrderState::Sorted);
}

// =============================================================================
// Configuration
// =============================================================================

#[rstest]
fn test_suspend_defers_repair_until_resume() {
    let mut vector = odd_numbers();
    vector.suspend_autorepair();
    assert!(vector.is_autorepair_suspended());
    assert_eq!(vector.state(), OrderState::DirtyUnknown);

    vector[0] = 20;
    vector[1] = -4;
    vector.push(6);
    assert_eq!(vector.find(&-4), Some(1));

    vector.resume_autorepair();
    assert!(!vector.is_autorepair_suspended());
    assert_eq!(vector.as_slice(), &[-4, 5, 6, 7, 9, 20]);
    assert_eq!(vector.state(), OrderState::Sorted);
}

#[rstest]
fn test_resume_without_auto_repair_stays_dirty() {
    let mut vector = OrderedVec::with_config(manual());
    vector.assign([1, 2, 3]);
    vector.suspend_autorepair();
    vector.resume_autorepair();
    assert_eq!(vector.state(), OrderState::DirtyUnknown);
}

#[rstest]
fn test_ignore_corruption_never_tracks() {
    let mut vector = OrderedVec::with_config(Config::new().ignore_corruption());
    vector.assign([1, 3, 5]);
    vector[0] = 10;
    assert_eq!(vector.state(), OrderState::Sorted);
    vector.suspend_autorepair();
    assert_eq!(vector.state(), OrderState::Sorted);

    // Searches trust the order the caller broke, repair does nothing.
    vector.repair();
    assert_eq!(vector.as_slice(), &[10, 3, 5]);
    assert_eq!(vector.find(&1), None);
}

#[rstest]
fn test_sort_restores_ignored_vector() {
    let mut vector = OrderedVec::with_config(Config::new().ignore_corruption());
    vector.assign([1, 3, 5]);
    vector[0] = 10;
    vector.sort();
    assert_eq!(vector.as_slice(), &[3, 5, 10]);
}

// =============================================================================
// Traits
// =============================================================================

#[rstest]
fn test_equality_compares_elements() {
    assert_eq!(OrderedVec::from(vec![2, 1]), OrderedVec::from(vec![1, 2]));
    assert_ne!(OrderedVec::from(vec![1]), OrderedVec::from(vec![1, 1]));
}

#[rstest]
fn test_debug_lists_elements() {
    assert_eq!(format!("{:?}", OrderedVec::from(vec![3, 1])), "[1, 3]");
}

#[rstest]
fn test_borrowed_into_iterator() {
    let vector = odd_numbers();
    let total: i32 = (&vector).into_iter().sum();
    assert_eq!(total, 25);
}

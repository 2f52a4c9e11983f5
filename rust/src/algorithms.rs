//! The four algorithms under study.
//!
//! Each one is the textbook version of its complexity class:
//!
//! | Algorithm        | Class    | Work per call          |
//! |------------------|----------|------------------------|
//! | array access     | O(1)     | one indexed read       |
//! | binary search    | O(log n) | halves the range       |
//! | linear search    | O(n)     | one comparison / item  |
//! | find all pairs   | O(n²)    | one comparison / pair  |
//!
//! All functions are pure. The searches report how much work they did so the
//! experiment runner can cross-check timings against operation counts.

/// Integer element types the pair search can add.
///
/// An overflowing sum is `None`; it can never equal a representable target.
pub trait CheckedSum: Copy + PartialEq {
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! impl_checked_sum {
    ($($t:ty),*) => {
        $(impl CheckedSum for $t {
            fn checked_sum(self, other: Self) -> Option<Self> {
                self.checked_add(other)
            }
        })*
    };
}

impl_checked_sum!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Outcome of [`linear_search_with_counter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearSearchOutcome {
    /// Position of the first match, if any.
    pub index: Option<usize>,
    /// Elements examined, including the match.
    pub comparisons: u64,
}

/// Outcome of [`find_all_pairs_with_sum`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairSearchOutcome<T> {
    /// Value pairs `(numbers[i], numbers[j])` with `i < j` summing to the target.
    pub pairs: Vec<(T, T)>,
    /// Pairs examined; always `n * (n - 1) / 2`.
    pub comparisons: u64,
}

/// Get the value at `index`.
///
/// Returns `None` when the index is out of bounds.
///
/// # Examples
///
/// ```
/// use complexity_lab::algorithms::array_access;
///
/// let data = [1, 3, 5, 7, 9, 11, 13, 15];
/// assert_eq!(array_access(&data, 3), Some(&7));
/// assert_eq!(array_access(&data, 8), None);
/// ```
pub fn array_access<T>(data: &[T], index: usize) -> Option<&T> {
    if index < data.len() {
        Some(&data[index])
    } else {
        None
    }
}

/// Find `target` in `sorted` by repeatedly halving the search range.
///
/// `sorted` must be in ascending order. On unsorted input the result is
/// meaningless but the call still terminates without panicking.
///
/// # Examples
///
/// ```
/// use complexity_lab::algorithms::binary_search;
///
/// let data = [1, 3, 5, 7, 9, 11, 13, 15];
/// assert_eq!(binary_search(&data, &9), Some(4));
/// assert_eq!(binary_search(&data, &4), None);
/// ```
pub fn binary_search<T: Ord>(sorted: &[T], target: &T) -> Option<usize> {
    // Half-open window [left, right)
    let mut left = 0;
    let mut right = sorted.len();

    while left < right {
        let middle = left + (right - left) / 2;
        match sorted[middle].cmp(target) {
            std::cmp::Ordering::Equal => return Some(middle),
            std::cmp::Ordering::Greater => right = middle,
            std::cmp::Ordering::Less => left = middle + 1,
        }
    }

    None
}

/// Check every element in order until `target` is found.
///
/// # Examples
///
/// ```
/// use complexity_lab::algorithms::linear_search_with_counter;
///
/// let outcome = linear_search_with_counter(&[5, 2, 8, 1, 9, 12, 3], &8);
/// assert_eq!(outcome.index, Some(2));
/// assert_eq!(outcome.comparisons, 3);
/// ```
pub fn linear_search_with_counter<T: PartialEq>(data: &[T], target: &T) -> LinearSearchOutcome {
    let mut comparisons = 0;

    for (index, item) in data.iter().enumerate() {
        comparisons += 1;
        if item == target {
            return LinearSearchOutcome {
                index: Some(index),
                comparisons,
            };
        }
    }

    LinearSearchOutcome {
        index: None,
        comparisons,
    }
}

/// Find every pair of values whose sum equals `target`, with nested loops.
///
/// Pairs are reported in the order they are found, first value from the
/// earlier position.
///
/// # Examples
///
/// ```
/// use complexity_lab::algorithms::find_all_pairs_with_sum;
///
/// let outcome = find_all_pairs_with_sum(&[1, 2, 3, 4, 5], 7);
/// assert_eq!(outcome.pairs, vec![(2, 5), (3, 4)]);
/// assert_eq!(outcome.comparisons, 10);
/// ```
pub fn find_all_pairs_with_sum<T>(numbers: &[T], target: T) -> PairSearchOutcome<T>
where
    T: CheckedSum,
{
    let mut pairs = Vec::new();
    let mut comparisons = 0;

    for (i, &first) in numbers.iter().enumerate() {
        // j > i so each unordered pair is seen once
        for &second in &numbers[i + 1..] {
            comparisons += 1;
            if first.checked_sum(second) == Some(target) {
                pairs.push((first, second));
            }
        }
    }

    PairSearchOutcome { pairs, comparisons }
}

/// Check a binary search answer against the data it was computed from.
pub fn verify_binary_search<T: Ord>(sorted: &[T], target: &T, result: Option<usize>) -> bool {
    match result {
        None => !sorted.contains(target),
        Some(index) => sorted.get(index) == Some(target),
    }
}

/// Check a linear search answer, including its comparison count.
pub fn verify_linear_search<T: PartialEq>(
    data: &[T],
    target: &T,
    outcome: &LinearSearchOutcome,
) -> bool {
    match outcome.index {
        None => !data.contains(target) && outcome.comparisons == data.len() as u64,
        Some(index) => {
            data.get(index) == Some(target) && outcome.comparisons == index as u64 + 1
        }
    }
}

/// Check that every reported pair sums to the target.
pub fn verify_pairs<T: CheckedSum>(target: T, outcome: &PairSearchOutcome<T>) -> bool {
    outcome.pairs.iter().all(|&(a, b)| a.checked_sum(b) == Some(target))
}

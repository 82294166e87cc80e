mod algorithms;

use algorithms::{quick_sort_3way, quick_sort_lomuto};

pub use algorithms::common::{floor_log2, is_sorted_by};
pub use algorithms::pivot::{LastElement, PivotSelector, RandomPivot};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    /// Lomuto partition, last element as pivot.
    Deterministic,
    /// Lomuto partition, uniformly random pivot.
    Randomized,
    /// Dutch national flag partition, last element as pivot.
    ThreeWay,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 3] = [
    SortAlgorithm::Deterministic,
    SortAlgorithm::Randomized,
    SortAlgorithm::ThreeWay,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::Deterministic => "quick_sort_last_pivot",
        SortAlgorithm::Randomized => "quick_sort_random_pivot",
        SortAlgorithm::ThreeWay => "quick_sort_3way",
    }
}

/// Work counters for a single sort call.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Trace {
    /// Number of partition passes.
    pub partitions: usize,
    /// Number of `is_less` calls.
    pub comparisons: usize,
    /// Deepest driver frame, 1 for the top-level call. Frames are only
    /// entered for ranges of two or more elements.
    pub max_depth: usize,
}

impl Trace {
    #[inline]
    pub(crate) fn enter(&mut self, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
    }
}

/// Lomuto partition of the closed range `v[low..=high]` around `v[pivot]`.
///
/// Returns the pivot's final index, in the coordinates of `v`.
///
/// # Panics
///
/// Panics if the range is empty or out of bounds, or if `pivot` lies outside it.
pub fn partition<T, F>(v: &mut [T], low: usize, high: usize, pivot: usize, mut is_less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    check_range(v.len(), low, high);
    assert!(
        (low..=high).contains(&pivot),
        "pivot index {pivot} outside range [{low}, {high}]"
    );
    low + algorithms::common::partition_lomuto(&mut v[low..=high], pivot - low, &mut is_less)
}

/// Three-way partition of the closed range `v[low..=high]` around `v[high]`.
///
/// Returns the inclusive bounds `(lt, gt)` of the run equal to the pivot, in
/// the coordinates of `v`.
///
/// # Panics
///
/// Panics if the range is empty or out of bounds.
pub fn partition_three_way<T, F>(
    v: &mut [T],
    low: usize,
    high: usize,
    mut is_less: F,
) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    check_range(v.len(), low, high);
    let (lt, gt) = algorithms::common::partition_3way(&mut v[low..=high], &mut is_less);
    (low + lt, low + gt)
}

#[inline]
fn check_range(len: usize, low: usize, high: usize) {
    assert!(
        low <= high && high < len,
        "partition range [{low}, {high}] out of bounds for length {len}"
    );
}

/// Deterministic quicksort, in place.
///
/// Like every sort in this crate it is unstable: elements that compare equal
/// may come out in a different relative order.
pub fn sort<T: Ord>(v: &mut [T]) {
    sort_with(SortAlgorithm::Deterministic, v, None);
}

/// Deterministic quicksort, in place, comparing by `key`.
pub fn sort_by_key<T, K, F>(v: &mut [T], key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_with_by_key(SortAlgorithm::Deterministic, v, None, key);
}

/// Deterministic quicksort into a new vector, leaving `v` untouched.
pub fn sorted<T: Ord + Clone>(v: &[T]) -> Vec<T> {
    let mut out = v.to_vec();
    sort(&mut out);
    out
}

/// Deterministic quicksort by `key` into a new vector, leaving `v` untouched.
pub fn sorted_by_key<T, K, F>(v: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut out = v.to_vec();
    sort_by_key(&mut out, key);
    out
}

/// Randomized-pivot quicksort, in place.
///
/// With `Some(seed)` the pivot sequence, and therefore the whole run, is
/// reproducible. With `None` the generator is seeded from the OS.
pub fn sort_randomized<T: Ord>(v: &mut [T], seed: Option<u64>) {
    sort_with(SortAlgorithm::Randomized, v, seed);
}

/// Randomized-pivot quicksort, in place, comparing by `key`.
pub fn sort_randomized_by_key<T, K, F>(v: &mut [T], seed: Option<u64>, key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_with_by_key(SortAlgorithm::Randomized, v, seed, key);
}

/// Randomized-pivot quicksort into a new vector, leaving `v` untouched.
pub fn sorted_randomized<T: Ord + Clone>(v: &[T], seed: Option<u64>) -> Vec<T> {
    let mut out = v.to_vec();
    sort_randomized(&mut out, seed);
    out
}

/// Randomized-pivot quicksort by `key` into a new vector, leaving `v` untouched.
pub fn sorted_randomized_by_key<T, K, F>(v: &[T], seed: Option<u64>, key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut out = v.to_vec();
    sort_randomized_by_key(&mut out, seed, key);
    out
}

/// Three-way quicksort, in place. Runs of equal keys are settled in a single
/// partition pass and never revisited.
pub fn sort_three_way<T: Ord>(v: &mut [T]) {
    sort_with(SortAlgorithm::ThreeWay, v, None);
}

/// Three-way quicksort, in place, comparing by `key`.
pub fn sort_three_way_by_key<T, K, F>(v: &mut [T], key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_with_by_key(SortAlgorithm::ThreeWay, v, None, key);
}

/// Three-way quicksort into a new vector, leaving `v` untouched.
pub fn sorted_three_way<T: Ord + Clone>(v: &[T]) -> Vec<T> {
    let mut out = v.to_vec();
    sort_three_way(&mut out);
    out
}

/// Three-way quicksort by `key` into a new vector, leaving `v` untouched.
pub fn sorted_three_way_by_key<T, K, F>(v: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut out = v.to_vec();
    sort_three_way_by_key(&mut out, key);
    out
}

/// Sorts `v` in place with `algo`. `seed` is only read by
/// [`SortAlgorithm::Randomized`].
pub fn sort_with<T: Ord>(algo: SortAlgorithm, v: &mut [T], seed: Option<u64>) {
    sort_with_by(algo, v, seed, T::lt);
}

/// Sorts `v` in place with `algo`, ordering by `is_less`, which must be a
/// strict weak order. This is the entry point for types such as `f64`.
pub fn sort_with_by<T, F>(algo: SortAlgorithm, v: &mut [T], seed: Option<u64>, mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut trace = Trace::default();
    run(algo, v, seed, &mut is_less, &mut trace);
}

/// Sorts `v` in place with `algo`, comparing by `key`.
pub fn sort_with_by_key<T, K, F>(algo: SortAlgorithm, v: &mut [T], seed: Option<u64>, mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_with_by(algo, v, seed, |a, b| key(a).lt(&key(b)));
}

/// Same as [`sort_with`] but reports how much work the sort did.
pub fn sort_with_trace<T: Ord>(algo: SortAlgorithm, v: &mut [T], seed: Option<u64>) -> Trace {
    let mut comparisons = 0usize;
    let mut trace = Trace::default();
    let mut is_less = |a: &T, b: &T| {
        comparisons += 1;
        a < b
    };
    run(algo, v, seed, &mut is_less, &mut trace);
    trace.comparisons = comparisons;
    trace
}

/// Lomuto quicksort driven by a caller-supplied pivot policy.
pub fn sort_with_pivot<T, P, F>(v: &mut [T], selector: &mut P, mut is_less: F)
where
    P: PivotSelector,
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }
    quick_sort_lomuto::sort(v, selector, &mut is_less, &mut Trace::default());
}

/// Sorts by a fallible key.
///
/// Every key is computed once, before anything moves. The first error is
/// returned as is and leaves `v` exactly as it was. On success the cached
/// keys are sorted with `algo` and the resulting permutation is applied to `v`.
pub fn try_sort_by_key<T, K, E, F>(
    algo: SortAlgorithm,
    v: &mut [T],
    seed: Option<u64>,
    mut key: F,
) -> Result<(), E>
where
    K: Ord,
    F: FnMut(&T) -> Result<K, E>,
{
    let len = v.len();
    if len < 2 {
        return Ok(());
    }

    let mut indices = v
        .iter()
        .enumerate()
        .map(|(i, x)| key(x).map(|k| (k, i)))
        .collect::<Result<Vec<_>, E>>()?;

    sort_with_by(algo, &mut indices, seed, |a, b| a.0 < b.0);

    // Follow already-moved slots until reaching the element's current home.
    for i in 0..len {
        let mut index = indices[i].1;
        while index < i {
            index = indices[index].1;
        }
        indices[i].1 = index;
        v.swap(i, index);
    }

    Ok(())
}

fn run<T, F>(
    algo: SortAlgorithm,
    v: &mut [T],
    seed: Option<u64>,
    is_less: &mut F,
    trace: &mut Trace,
) where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    match algo {
        SortAlgorithm::Deterministic => {
            quick_sort_lomuto::sort(v, &mut LastElement, is_less, trace);
        }
        SortAlgorithm::Randomized => {
            let mut selector = RandomPivot::new(seed);
            quick_sort_lomuto::sort(v, &mut selector, is_less, trace);
        }
        SortAlgorithm::ThreeWay => quick_sort_3way::sort(v, is_less, trace),
    }
}

/// Lomuto partition of `v` around the element at `pivot`.
///
/// The pivot is moved to the end, every element strictly less than it is
/// swept to the front, and the pivot is swapped back into the gap. Returns the
/// pivot's final index: everything before it is less, everything after it is
/// greater or equal.
#[inline]
pub fn partition_lomuto<T, F>(v: &mut [T], pivot: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    assert!(pivot < len, "pivot index {pivot} out of bounds for length {len}");

    let last = len - 1;
    v.swap(pivot, last);

    let (rest, pivot) = v.split_at_mut(last);
    let pivot = &pivot[0];

    // rest[..boundary] < pivot
    let mut boundary = 0usize;
    for j in 0..rest.len() {
        if is_less(&rest[j], pivot) {
            rest.swap(boundary, j);
            boundary += 1;
        }
    }

    v.swap(boundary, last);
    boundary
}

/// Dutch national flag partition of `v` around its last element.
///
/// Returns the inclusive bounds `(lt, gt)` of the run equal to the pivot:
/// `v[..lt]` is strictly less, `v[gt + 1..]` strictly greater.
#[inline]
pub fn partition_3way<T, F>(v: &mut [T], is_less: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    assert!(!v.is_empty(), "cannot partition an empty range");

    let last = v.len() - 1;
    let (rest, pivot) = v.split_at_mut(last);
    let pivot = &pivot[0];

    let mut lt = 0usize;
    let mut i = 0usize;
    let mut gt = rest.len();

    while i < gt {
        if is_less(&rest[i], pivot) {
            rest.swap(lt, i);
            lt += 1;
            i += 1;
        } else if is_less(pivot, &rest[i]) {
            // The element swapped in from gt is unexamined, so i stays put.
            gt -= 1;
            rest.swap(i, gt);
        } else {
            i += 1;
        }
    }

    v.swap(gt, last);
    (lt, gt)
}

/// Whether `v` is non-decreasing under `is_less`.
#[inline]
pub fn is_sorted_by<T, F>(v: &[T], mut is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    v.windows(2).all(|w| !is_less(&w[1], &w[0]))
}

/// `floor(log2(n))`, with `floor_log2(0) == 0`. Drivers never nest deeper
/// than `floor_log2(len) + 1` frames.
#[inline]
pub fn floor_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        usize::BITS as usize - 1 - n.leading_zeros() as usize
    }
}

#[inline]
pub(crate) fn split_around<T>(v: &mut [T], lo: usize, hi: usize) -> (&mut [T], &mut [T]) {
    let (left, rest) = v.split_at_mut(lo);
    let (_, right) = rest.split_at_mut(hi + 1 - lo);
    (left, right)
}

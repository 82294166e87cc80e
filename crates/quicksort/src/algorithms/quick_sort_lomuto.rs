use crate::Trace;

use super::common;
use super::pivot::PivotSelector;

pub fn sort<T, P, F>(data: &mut [T], selector: &mut P, is_less: &mut F, trace: &mut Trace)
where
    P: PivotSelector,
    F: FnMut(&T, &T) -> bool,
{
    quick_sort(data, selector, is_less, trace, 1);
}

// Recursing only into the smaller side keeps the depth at most
// floor_log2(len) + 1, even when every pivot is the range extreme.
fn quick_sort<T, P, F>(
    mut data: &mut [T],
    selector: &mut P,
    is_less: &mut F,
    trace: &mut Trace,
    depth: usize,
) where
    P: PivotSelector,
    F: FnMut(&T, &T) -> bool,
{
    trace.enter(depth);

    while data.len() > 1 {
        let pivot = selector.select(0, data.len() - 1);
        debug_assert!(pivot < data.len());

        trace.partitions += 1;
        let mid = common::partition_lomuto(data, pivot, is_less);

        let (left, right) = common::split_around(data, mid, mid);
        let (small, large) = if left.len() < right.len() {
            (left, right)
        } else {
            (right, left)
        };
        if small.len() > 1 {
            quick_sort(small, selector, is_less, trace, depth + 1);
        }
        data = large;
    }
}

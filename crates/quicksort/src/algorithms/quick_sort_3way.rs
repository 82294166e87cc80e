use crate::Trace;

use super::common;

pub fn sort<T, F>(data: &mut [T], is_less: &mut F, trace: &mut Trace)
where
    F: FnMut(&T, &T) -> bool,
{
    quick_sort_3way(data, is_less, trace, 1);
}

fn quick_sort_3way<T, F>(mut data: &mut [T], is_less: &mut F, trace: &mut Trace, depth: usize)
where
    F: FnMut(&T, &T) -> bool,
{
    trace.enter(depth);

    while data.len() > 1 {
        trace.partitions += 1;
        let (lt, gt) = common::partition_3way(data, is_less);

        // The equal run is final; only the strict sides need more work.
        let (left, right) = common::split_around(data, lt, gt);
        let (small, large) = if left.len() < right.len() {
            (left, right)
        } else {
            (right, left)
        };
        if small.len() > 1 {
            quick_sort_3way(small, is_less, trace, depth + 1);
        }
        data = large;
    }
}

//! Quick sort with Lomuto partitioning.

use super::emit;
use crate::snapshot::ArraySnapshot;

pub(crate) fn quick_sort(values: &mut [i64], trace: &mut Vec<ArraySnapshot>) {
    if values.len() < 2 {
        return;
    }
    let last = values.len() - 1;
    sort_range(values, 0, last, trace);
}

/// Indices are inclusive. After both recursive calls return, the pivot/end
/// pair is re-marked; that frame shows the already-sorted subrange rather
/// than a state during partitioning of the opposite side. A display artifact
/// only, the final permutation is unaffected.
fn sort_range(values: &mut [i64], start: usize, end: usize, trace: &mut Vec<ArraySnapshot>) {
    if start >= end {
        return;
    }

    let pivot = partition(values, start, end, trace);

    if pivot > start {
        sort_range(values, start, pivot - 1, trace);
    }
    sort_range(values, pivot + 1, end, trace);

    emit(trace, values, &[pivot, end]);
}

/// Lomuto partition using the last element as pivot. Each swap during the
/// scan emits a snapshot marking the scanned index and the boundary after it
/// advances; placing the pivot emits one more marking its final index and
/// the original end.
fn partition(
    values: &mut [i64],
    start: usize,
    end: usize,
    trace: &mut Vec<ArraySnapshot>,
) -> usize {
    let pivot_value = values[end];
    let mut pivot_index = start;

    for i in start..end {
        if values[i] < pivot_value {
            values.swap(i, pivot_index);
            pivot_index += 1;
            emit(trace, values, &[i, pivot_index]);
        }
    }

    values.swap(pivot_index, end);
    emit(trace, values, &[pivot_index, end]);

    pivot_index
}

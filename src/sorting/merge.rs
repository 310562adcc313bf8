//! Top-down merge sort.

use super::emit;
use crate::snapshot::ArraySnapshot;

pub(crate) fn merge_sort(values: &mut [i64], trace: &mut Vec<ArraySnapshot>) {
    if values.len() < 2 {
        return;
    }
    let last = values.len() - 1;
    sort_range(values, 0, last, trace);
}

/// Recursive divide at the floor midpoint; indices are inclusive.
fn sort_range(values: &mut [i64], left: usize, right: usize, trace: &mut Vec<ArraySnapshot>) {
    if left < right {
        let middle = (left + right) / 2;
        sort_range(values, left, middle, trace);
        sort_range(values, middle + 1, right, trace);
        merge(values, left, middle, right, trace);
    }
}

/// Merge two sorted halves, snapshotting every element written back, both
/// the comparison-driven writes and the drain-the-remainder writes.
/// `<=` sends equal elements from the left half first, keeping their order.
fn merge(
    values: &mut [i64],
    left: usize,
    middle: usize,
    right: usize,
    trace: &mut Vec<ArraySnapshot>,
) {
    let left_half = values[left..=middle].to_vec();
    let right_half = values[middle + 1..=right].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = left;

    while i < left_half.len() && j < right_half.len() {
        if left_half[i] <= right_half[j] {
            values[k] = left_half[i];
            i += 1;
        } else {
            values[k] = right_half[j];
            j += 1;
        }
        emit(trace, values, &[k]);
        k += 1;
    }

    while i < left_half.len() {
        values[k] = left_half[i];
        i += 1;
        emit(trace, values, &[k]);
        k += 1;
    }

    while j < right_half.len() {
        values[k] = right_half[j];
        j += 1;
        emit(trace, values, &[k]);
        k += 1;
    }
}

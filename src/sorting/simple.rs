//! The three quadratic sorts: bubble, selection, insertion.

use super::emit;
use crate::snapshot::ArraySnapshot;

/// Adjacent-swap passes with early exit once a full pass performs no swap.
pub(crate) fn bubble(values: &mut [i64], trace: &mut Vec<ArraySnapshot>) {
    let n = values.len();
    if n < 2 {
        return;
    }

    for i in 0..n - 1 {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                swapped = true;
                emit(trace, values, &[j, j + 1]);
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Scan the unsorted remainder for its minimum and swap it into place.
///
/// No snapshot is emitted when the minimum is already in position.
pub(crate) fn selection(values: &mut [i64], trace: &mut Vec<ArraySnapshot>) {
    let n = values.len();
    if n < 2 {
        return;
    }

    for i in 0..n - 1 {
        let mut min_index = i;
        for j in i + 1..n {
            if values[j] < values[min_index] {
                min_index = j;
            }
        }
        if min_index != i {
            values.swap(i, min_index);
            emit(trace, values, &[i, min_index]);
        }
    }
}

/// Shift-and-insert; one snapshot per outer iteration marking the slot the
/// key landed in, whether or not anything shifted.
pub(crate) fn insertion(values: &mut [i64], trace: &mut Vec<ArraySnapshot>) {
    let n = values.len();

    for i in 1..n {
        let key = values[i];
        let mut slot = i;
        while slot > 0 && values[slot - 1] > key {
            values[slot] = values[slot - 1];
            slot -= 1;
        }
        values[slot] = key;
        emit(trace, values, &[slot]);
    }
}

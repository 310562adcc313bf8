//! Counting sort over the numeric range `[min, max]`.

use super::emit;
use crate::snapshot::ArraySnapshot;

/// Count, prefix-sum, then place elements back-to-front into an output
/// buffer. Back-to-front placement with prefix sums is what makes the sort
/// stable. Snapshots show the output buffer as it fills (unplaced slots hold
/// zero), marking the output index just written.
pub(crate) fn counting(values: &mut Vec<i64>, trace: &mut Vec<ArraySnapshot>) {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return;
    };
    let range = (max - min + 1) as usize;

    let mut count = vec![0usize; range];
    for &v in values.iter() {
        count[(v - min) as usize] += 1;
    }
    for i in 1..range {
        count[i] += count[i - 1];
    }

    let mut output = vec![0i64; values.len()];
    for i in (0..values.len()).rev() {
        let bucket = (values[i] - min) as usize;
        count[bucket] -= 1;
        let dst = count[bucket];
        output[dst] = values[i];
        emit(trace, &output, &[dst]);
    }

    *values = output;
}

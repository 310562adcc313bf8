// Integration tests for the sorting trace engine

use algoscope::sorting::{sort, SortAlgorithm};

/// The spec example: every algorithm turns [5,3,8,1] into [1,3,5,8].
#[test]
fn test_all_algorithms_sort_the_example() {
    let input = [5, 3, 8, 1];
    for algorithm in SortAlgorithm::ALL {
        let trace = sort(algorithm, &input);
        let last = trace.last().unwrap_or_else(|| {
            panic!("{} emitted no snapshots for an unsorted input", algorithm.name())
        });
        assert_eq!(
            last.values(),
            vec![1, 3, 5, 8],
            "{} final snapshot is not sorted",
            algorithm.name()
        );
    }
}

#[test]
fn test_final_snapshot_is_sorted_permutation() {
    let input = [9, 1, 7, 3, 3, 8, 2, 5, 4, 6];
    let mut expected = input.to_vec();
    expected.sort_unstable();

    for algorithm in SortAlgorithm::ALL {
        let trace = sort(algorithm, &input);
        let last = trace.last().expect("at least one snapshot");
        assert_eq!(
            last.values(),
            expected,
            "{} lost or reordered elements",
            algorithm.name()
        );
    }
}

#[test]
fn test_input_is_never_mutated() {
    let input = vec![4, 2, 9, 1];
    for algorithm in SortAlgorithm::ALL {
        let before = input.clone();
        let _ = sort(algorithm, &input);
        assert_eq!(input, before, "{} mutated its input", algorithm.name());
    }
}

#[test]
fn test_every_snapshot_keeps_input_length() {
    let input = [6, 2, 8, 4, 1];
    for algorithm in SortAlgorithm::ALL {
        for snapshot in sort(algorithm, &input) {
            assert_eq!(
                snapshot.elements.len(),
                input.len(),
                "{} dropped or duplicated an element",
                algorithm.name()
            );
        }
    }
}

/// Bubble sort on an already-sorted input performs no swaps, so the trace is
/// empty.
#[test]
fn test_bubble_sorted_input_emits_nothing() {
    let trace = sort(SortAlgorithm::Bubble, &[1, 2, 3, 4, 5]);
    assert!(trace.is_empty(), "expected no snapshots, got {}", trace.len());
}

#[test]
fn test_bubble_marks_both_swapped_indices() {
    let trace = sort(SortAlgorithm::Bubble, &[2, 1]);
    assert_eq!(trace.len(), 1);
    assert_eq!(trace[0].values(), vec![1, 2]);
    assert_eq!(trace[0].moving_indices(), vec![0, 1]);
}

#[test]
fn test_selection_skips_snapshot_when_minimum_in_place() {
    // 1 is already in position; only one swap (3 <-> 2) happens.
    let trace = sort(SortAlgorithm::Selection, &[1, 3, 2]);
    assert_eq!(trace.len(), 1);
    assert_eq!(trace[0].values(), vec![1, 2, 3]);
}

#[test]
fn test_insertion_emits_once_per_outer_iteration() {
    // n-1 outer iterations, swap or not.
    let trace = sort(SortAlgorithm::Insertion, &[1, 2, 3, 4]);
    assert_eq!(trace.len(), 3);
    for snapshot in &trace {
        assert_eq!(snapshot.values(), vec![1, 2, 3, 4]);
    }
}

/// Counting sort places back-to-front, so of two equal values the
/// later-occurring one must be written to the higher output slot. The
/// marked write indices expose the placement order.
#[test]
fn test_counting_sort_is_stable() {
    let trace = sort(SortAlgorithm::Counting, &[2, 1, 2]);
    let writes: Vec<usize> = trace
        .iter()
        .map(|s| s.moving_indices()[0])
        .collect();
    // Placements walk i = 2, 1, 0: the trailing 2 lands in slot 2, the 1 in
    // slot 0, the leading 2 in slot 1.
    assert_eq!(writes, vec![2, 0, 1]);
    assert_eq!(trace.last().expect("snapshots").values(), vec![1, 2, 2]);
}

#[test]
fn test_counting_sort_handles_negative_range() {
    let trace = sort(SortAlgorithm::Counting, &[3, -2, 0, -5]);
    assert_eq!(trace.last().expect("snapshots").values(), vec![-5, -2, 0, 3]);
}

#[test]
fn test_merge_snapshots_mark_the_write_index() {
    let trace = sort(SortAlgorithm::Merge, &[2, 1]);
    // One merge of two singletons: two writes.
    assert_eq!(trace.len(), 2);
    assert_eq!(trace[0].moving_indices(), vec![0]);
    assert_eq!(trace[1].moving_indices(), vec![1]);
    assert_eq!(trace[1].values(), vec![1, 2]);
}

#[test]
fn test_quick_final_frame_marks_pivot_and_end() {
    let input = [5, 3, 8, 1];
    let trace = sort(SortAlgorithm::Quick, &input);
    let last = trace.last().expect("snapshots");
    assert_eq!(last.values(), vec![1, 3, 5, 8]);
    // The top-level post-recursion frame re-marks the first pivot's final
    // index and the original end index.
    assert!(last.moving_indices().contains(&(input.len() - 1)));
}

#[test]
fn test_single_element_and_empty_inputs() {
    for algorithm in SortAlgorithm::ALL {
        assert!(sort(algorithm, &[]).is_empty());
        let trace = sort(algorithm, &[42]);
        if let Some(last) = trace.last() {
            assert_eq!(last.values(), vec![42]);
        }
    }
}

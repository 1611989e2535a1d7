/// Frame indices to inspect out of `frame_count` buffered frames.
///
/// Quartile positions `[0, n/4, n/2, 3n/4]`, each visited once and only
/// when it exists.
pub fn sample_indices(frame_count: usize) -> Vec<usize> {
    let candidates = [0, frame_count / 4, frame_count / 2, 3 * frame_count / 4];
    let mut indices: Vec<usize> = Vec::with_capacity(candidates.len());
    for idx in candidates {
        if idx < frame_count && !indices.contains(&idx) {
            indices.push(idx);
        }
    }
    indices
}

/// The frame used for the manual preview and the comparison grid.
pub fn middle_index(frame_count: usize) -> usize {
    frame_count / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(100, vec![0, 25, 50, 75])]
    #[case(10, vec![0, 2, 5, 7])]
    #[case(4, vec![0, 1, 2, 3])]
    #[case(3, vec![0, 1, 2])]
    #[case(2, vec![0, 1])]
    #[case(1, vec![0])]
    #[case(0, vec![])]
    fn test_sample_indices(#[case] n: usize, #[case] expected: Vec<usize>) {
        assert_eq!(sample_indices(n), expected);
    }

    #[test]
    fn test_indices_are_unique_and_in_range() {
        for n in 0..64 {
            let indices = sample_indices(n);
            assert!(indices.iter().all(|&i| i < n));
            let mut sorted = indices.clone();
            sorted.dedup();
            assert_eq!(sorted, indices, "n = {n}");
        }
    }

    #[rstest]
    #[case(10, 5)]
    #[case(1, 0)]
    #[case(7, 3)]
    fn test_middle_index(#[case] n: usize, #[case] expected: usize) {
        assert_eq!(middle_index(n), expected);
    }
}

use crate::traits::Matrix;
use num_traits::Zero;

/// Returns `true` when every element outside the main diagonal is exactly zero.
///
/// Indices are taken per row, so a short row never reaches the higher column
/// indices of its neighbours. A matrix with no rows is diagonal.
pub fn is_diagonal<M: Matrix + ?Sized>(matrix: &M) -> bool {
    let zero = M::Value::zero();
    for i in 0..matrix.row_count() {
        for (j, value) in matrix.row(i).iter().enumerate() {
            if i != j && *value != zero {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::is_diagonal;
    use crate::DenseMatrix;

    #[test]
    fn test_identity_is_diagonal() {
        let m: Vec<Vec<f64>> = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        assert!(is_diagonal(&m));
    }

    #[test]
    fn test_off_diagonal_value_is_not_diagonal() {
        let upper: Vec<Vec<f64>> = vec![vec![1.0, 2.0], vec![0.0, 4.0]];
        let lower: Vec<Vec<f64>> = vec![vec![1.0, 0.0], vec![3.0, 4.0]];
        assert!(!is_diagonal(&upper));
        assert!(!is_diagonal(&lower));
    }

    #[test]
    fn test_zero_rows_is_vacuously_diagonal() {
        let m: Vec<Vec<f64>> = vec![];
        assert!(is_diagonal(&m));
    }

    #[test]
    fn test_zero_matrix_is_diagonal() {
        let m = DenseMatrix::from_rows(vec![vec![0.0; 3]; 3]);
        assert!(is_diagonal(&m));
    }

    #[test]
    fn test_no_tolerance() {
        let m: Vec<Vec<f64>> = vec![vec![1.0, 1e-300], vec![0.0, 1.0]];
        assert!(!is_diagonal(&m));
    }

    #[test]
    fn test_negative_zero_counts_as_zero() {
        let m: Vec<Vec<f64>> = vec![vec![5.0, -0.0], vec![-0.0, 5.0]];
        assert!(is_diagonal(&m));
    }

    #[test]
    fn test_nan_off_diagonal_is_not_zero() {
        let m: Vec<Vec<f64>> = vec![vec![1.0, f64::NAN], vec![0.0, 1.0]];
        assert!(!is_diagonal(&m));
    }

    #[test]
    fn test_rectangular_uses_main_diagonal() {
        let wide: Vec<Vec<f64>> = vec![vec![2.0, 0.0, 0.0], vec![0.0, 3.0, 0.0]];
        let tall: Vec<Vec<f64>> = vec![vec![2.0, 0.0], vec![0.0, 3.0], vec![0.0, 0.0]];
        let wide_bad: Vec<Vec<f64>> = vec![vec![2.0, 0.0, 0.0], vec![0.0, 3.0, 7.0]];
        assert!(is_diagonal(&wide));
        assert!(is_diagonal(&tall));
        assert!(!is_diagonal(&wide_bad));
    }

    #[test]
    fn test_ragged_rows_use_their_own_indices() {
        // Row 1 stops before reaching column 2; only (0, 0) and (1, 1) are non-zero.
        let m: Vec<Vec<f64>> = vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0], vec![0.0, 0.0, 9.0, 0.0]];
        assert!(is_diagonal(&m));

        let short_first: Vec<Vec<f64>> = vec![vec![4.0], vec![5.0, 0.0]];
        assert!(!is_diagonal(&short_first));
    }

    #[test]
    fn test_integer_matrix() {
        let m: Vec<Vec<i64>> = vec![vec![3, 0], vec![0, -2]];
        assert!(is_diagonal(&m));
        let n: Vec<Vec<i64>> = vec![vec![3, 1], vec![0, -2]];
        assert!(!is_diagonal(&n));
    }

    #[test]
    fn test_square_definition_matches_elementwise_check() {
        let samples: Vec<Vec<Vec<f64>>> = vec![
            vec![vec![1.0, 0.0, 0.0], vec![0.0, 2.0, 0.0], vec![0.0, 0.0, 3.0]],
            vec![vec![1.0, 0.0, 0.0], vec![0.0, 2.0, 0.0], vec![0.5, 0.0, 3.0]],
            vec![vec![0.0, 0.0], vec![0.0, 0.0]],
            vec![vec![7.0]],
            vec![vec![0.0, -1.0], vec![0.0, 0.0]],
        ];
        for m in &samples {
            let expected = (0..m.len())
                .all(|i| (0..m.len()).all(|j| i == j || m[i][j] == 0.0));
            assert_eq!(is_diagonal(m), expected, "matrix {:?}", m);
        }
    }

    #[test]
    fn test_generated_square_matrices_match_definition() {
        let mut state = 0x2545_F491_4F6C_DD1Du64;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        };
        let mut diagonal_seen = 0;
        for _ in 0..300 {
            let n = (next() % 6) as usize;
            let m: Vec<Vec<f64>> = (0..n)
                .map(|i| {
                    (0..n)
                        .map(|j| {
                            let roll = next() % 16;
                            // Off-diagonal entries are mostly zero so both outcomes occur.
                            if i != j && roll != 0 {
                                0.0
                            } else {
                                (next() % 7) as f64 - 3.0
                            }
                        })
                        .collect()
                })
                .collect();
            let expected = (0..n).all(|i| (0..n).all(|j| i == j || m[i][j] == 0.0));
            if expected {
                diagonal_seen += 1;
            }
            assert_eq!(is_diagonal(&m), expected, "matrix {:?}", m);
        }
        assert!(diagonal_seen > 0 && diagonal_seen < 300);
    }
}

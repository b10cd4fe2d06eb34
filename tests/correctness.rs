use parmul::{multiply, multiply_parallel, multiply_parallel_with, Error, Matrix};

fn matrix(rows: &[&[i32]]) -> Matrix {
    Matrix::from_rows(rows.iter().map(|row| row.to_vec()).collect()).unwrap()
}

fn patterned_matrix(rows: usize, columns: usize, seed: i32) -> Matrix {
    let data = (0..rows)
        .map(|i| {
            (0..columns)
                .map(|j| ((i * columns + j) as i32).wrapping_mul(seed) % 97 - 48)
                .collect()
        })
        .collect();
    Matrix::from_rows(data).unwrap()
}

fn assert_matrices_equal(expected: &Matrix, actual: &Matrix, name: &str) {
    assert_eq!(expected.rows(), actual.rows(), "{}: row count mismatch", name);
    assert_eq!(
        expected.columns(),
        actual.columns(),
        "{}: column count mismatch",
        name
    );
    for i in 0..expected.rows() {
        for j in 0..expected.columns() {
            assert_eq!(
                expected.get(i, j).unwrap(),
                actual.get(i, j).unwrap(),
                "{}: mismatch at ({}, {})",
                name,
                i,
                j
            );
        }
    }
}

// ============================================================
// Known products (both strategies)
// ============================================================

#[test]
fn test_2x2_multiply() {
    let left = matrix(&[&[1, 2], &[3, 4]]);
    let right = matrix(&[&[2, 0], &[1, 2]]);
    let expected = matrix(&[&[4, 4], &[10, 8]]);

    let sequential = multiply(&left, &right).unwrap();
    let parallel = multiply_parallel(&left, &right).unwrap();

    assert_matrices_equal(&expected, &sequential, "2x2 sequential");
    assert_matrices_equal(&expected, &parallel, "2x2 parallel");
}

#[test]
fn test_2x3_times_3x2() {
    let left = matrix(&[&[1, 2, 3], &[4, 5, 6]]);
    let right = matrix(&[&[7, 8], &[9, 10], &[11, 12]]);
    let expected = matrix(&[&[58, 64], &[139, 154]]);

    let sequential = multiply(&left, &right).unwrap();
    let parallel = multiply_parallel(&left, &right).unwrap();

    assert_matrices_equal(&expected, &sequential, "2x3*3x2 sequential");
    assert_matrices_equal(&expected, &parallel, "2x3*3x2 parallel");
}

// ============================================================
// Strategy equivalence
// ============================================================

#[test]
fn test_parallel_matches_sequential() {
    let test_cases = [(17, 13, 19), (32, 32, 32), (64, 48, 56), (1, 40, 1)];

    for (m, k, n) in test_cases {
        let left = patterned_matrix(m, k, 7);
        let right = patterned_matrix(k, n, -3);

        let sequential = multiply(&left, &right).unwrap();
        let parallel = multiply_parallel(&left, &right).unwrap();

        assert_matrices_equal(
            &sequential,
            &parallel,
            &format!("{}x{}x{}", m, k, n),
        );
    }
}

#[test]
fn test_parallel_matches_sequential_for_every_worker_count() {
    let left = patterned_matrix(11, 9, 5);
    let right = patterned_matrix(9, 8, -7);

    let sequential = multiply(&left, &right).unwrap();

    for workers in 1..=left.rows() {
        let parallel = multiply_parallel_with(&left, &right, workers).unwrap();
        assert_matrices_equal(
            &sequential,
            &parallel,
            &format!("workers_{}", workers),
        );
    }
}

#[test]
fn test_wrapping_overflow_is_identical_across_strategies() {
    let left = matrix(&[&[i32::MAX, i32::MAX, 12345], &[i32::MIN, 1, -1]]);
    let right = matrix(&[&[i32::MAX, 2], &[7, i32::MIN], &[i32::MAX, -1]]);

    let sequential = multiply(&left, &right).unwrap();
    let parallel = multiply_parallel_with(&left, &right, 2).unwrap();

    assert_matrices_equal(&sequential, &parallel, "overflow");
}

#[test]
fn test_repeated_calls_are_pure() {
    let left = patterned_matrix(8, 8, 3);
    let right = patterned_matrix(8, 8, 11);

    let first = multiply(&left, &right).unwrap();
    let second = multiply(&left, &right).unwrap();
    assert_matrices_equal(&first, &second, "sequential idempotence");

    let first = multiply_parallel(&left, &right).unwrap();
    let second = multiply_parallel(&left, &right).unwrap();
    assert_matrices_equal(&first, &second, "parallel idempotence");
}

// ============================================================
// Degenerate shapes
// ============================================================

#[test]
fn test_zero_row_left_operand() {
    // The only route to a 0-row matrix is transposing an N×0 one.
    let left = matrix(&[&[], &[], &[]]).transposed(); // 0×3
    let right = patterned_matrix(3, 2, 1);

    let sequential = multiply(&left, &right).unwrap();
    let parallel = multiply_parallel(&left, &right).unwrap();

    assert_eq!(sequential.rows(), 0);
    assert_eq!(sequential.columns(), 2);
    assert_matrices_equal(&sequential, &parallel, "zero rows");
}

#[test]
fn test_zero_column_right_operand() {
    let left = patterned_matrix(4, 3, 2);
    let right = matrix(&[&[], &[], &[]]); // 3×0

    let sequential = multiply(&left, &right).unwrap();
    let parallel = multiply_parallel(&left, &right).unwrap();

    assert_eq!(sequential.rows(), 4);
    assert_eq!(sequential.columns(), 0);
    assert_matrices_equal(&sequential, &parallel, "zero columns");
}

// ============================================================
// Error reporting
// ============================================================

#[test]
fn test_dimension_mismatch_under_both_strategies() {
    let left = patterned_matrix(2, 3, 1);
    let right = patterned_matrix(2, 2, 1);

    let err = multiply(&left, &right).unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch(2, 3, 2, 2)));

    let err = multiply_parallel(&left, &right).unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch(2, 3, 2, 2)));
}

#[test]
fn test_ragged_rows_rejected() {
    let err = Matrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();

    assert!(matches!(err, Error::Ragged(1, 1, 2)));
}

// ============================================================
// Serialization round trips
// ============================================================

#[test]
fn test_text_round_trip() {
    let original = patterned_matrix(5, 7, 13);

    let restored = Matrix::from_text(original.to_text()).unwrap();

    assert_eq!(restored, original);
}

#[test]
fn test_product_survives_round_trip() {
    let left = patterned_matrix(6, 4, -5);
    let right = patterned_matrix(4, 6, 9);

    let product = multiply_parallel(&left, &right).unwrap();
    let restored = Matrix::from_text(product.to_text()).unwrap();

    assert_matrices_equal(&product, &restored, "product round trip");
}

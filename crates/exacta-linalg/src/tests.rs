//! Integration tests for exacta-linalg.

#[cfg(test)]
mod integration_tests {
    use std::f64::consts::FRAC_PI_2;

    use exacta_rational::Rational;
    use num_traits::Zero;

    use crate::rotation::{rotation_matrix, RotationAxis};
    use crate::{Matrix, Vector};

    fn r(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d).unwrap()
    }

    #[test]
    fn test_mm_matches_per_row_dot_sum() {
        // Multiplication is exactly the per-row dot-then-sum delegation.
        let a = Matrix::from_rows(vec![
            vec![r(1, 2), r(1, 3)],
            vec![r(2, 1), r(0, 1)],
        ])
        .unwrap();
        let b = Matrix::from_rows(vec![
            vec![r(3, 1), r(1, 1)],
            vec![r(6, 1), r(1, 2)],
        ])
        .unwrap();

        let product = a.mm(&b).unwrap();
        let b_t = b.transpose();
        for i in 0..2 {
            for j in 0..2 {
                let expected = a.row(i).dot(b_t.row(j)).unwrap().sum();
                assert_eq!(product[(i, j)], expected);
            }
        }
    }

    #[test]
    fn test_exact_arithmetic_through_long_chains() {
        // Repeated multiplication of a rational matrix stays exact; the
        // entries of M^4 for M = [[1/2, 1/3], [1/4, 1/5]] have no rounding.
        let m = Matrix::from_rows(vec![
            vec![r(1, 2), r(1, 3)],
            vec![r(1, 4), r(1, 5)],
        ])
        .unwrap();
        let m2 = m.mm(&m).unwrap();
        let m4 = m2.mm(&m2).unwrap();

        // det(M) = 1/10 - 1/12 = 1/60, so det(M^4) = (1/60)^4.
        assert_eq!(m4.det().unwrap(), r(1, 60).pow(4));
    }

    #[test]
    fn test_rotate_full_turn_in_quarter_steps() {
        let start = Vector::from_integers(&[3, 4]).unwrap();
        let mut v = start.clone();
        for _ in 0..4 {
            v = v.rotate(FRAC_PI_2, RotationAxis::None).unwrap();
        }
        for i in 0..2 {
            assert!((v[i].to_f64() - start[i].to_f64()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rotation_preserves_norm() {
        let v = Vector::from_integers(&[1, 2, 2]).unwrap();
        assert!((v.norm() - 3.0).abs() < 1e-15);
        let rotated = v.rotate(0.9, RotationAxis::Y).unwrap();
        assert!((rotated.norm() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_row_matrix_times_rotation() {
        // A vector viewed as a 1x2 matrix composes with a rotation on the
        // right: (v as row) · R is the row form of Rᵀ · v.
        let v = Vector::from_integers(&[1, 0]).unwrap();
        let rotation = rotation_matrix(2, FRAC_PI_2, RotationAxis::None).unwrap();

        let row_product = v.as_row_matrix().mm(&rotation).unwrap();
        let column_product = rotation.transpose().mv(&v).unwrap();
        for i in 0..2 {
            assert_eq!(row_product[(0, i)], column_product[i]);
        }
    }

    #[test]
    fn test_accumulate_then_determinant() {
        let mut m = Matrix::from_rows(vec![
            vec![r(1, 1), r(2, 1)],
            vec![r(3, 1), r(4, 1)],
        ])
        .unwrap();
        m.accumulate(&Matrix::identity(2).unwrap()).unwrap();
        // [[2, 2], [3, 5]] has determinant 4.
        assert_eq!(m.det().unwrap(), Rational::from_integer(4));
    }

    #[test]
    fn test_singular_after_row_duplication() {
        let row = vec![r(2, 3), r(-1, 2), r(5, 1)];
        let m = Matrix::from_rows(vec![
            row.clone(),
            vec![r(1, 7), r(4, 9), r(0, 1)],
            row,
        ])
        .unwrap();
        assert!(m.det().unwrap().is_zero());
    }

    #[test]
    fn test_display_forms() {
        let v = Vector::from_integers(&[0, 1, 2, 3]).unwrap();
        assert_eq!(v.to_string(), "[0, 1, 2, 3]");

        let m = Matrix::from_rows(vec![
            vec![r(1, 2), r(100, 1)],
            vec![r(3, 1), r(-1, 4)],
        ])
        .unwrap();
        // Entries are padded to the widest rendering.
        assert_eq!(m.to_string(), "[ 1/2,  100]\n[   3, -1/4]\n");
    }
}

use approx::assert_abs_diff_eq;
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::*;

fn random_matrix(rng: &mut StdRng) -> ColorMatrix {
    let mut m = ColorMatrix::ZERO;
    for row in 0..DIM {
        for col in 0..DIM {
            m.set(row, col, rng.random_range(-2.0f32..2.0));
        }
    }
    m
}

fn sample() -> ColorMatrix {
    ColorMatrix::new([
        [0.5, -1.0, 2.0, 0.0, 0.25],
        [1.5, 0.0, -0.5, 0.0, 0.0],
        [0.0, 3.0, 1.0, 0.0, -1.0],
        [0.0, 0.0, 0.0, 1.0, 0.0],
        [1.0, 1.0, 1.0, 0.0, 1.0],
    ])
}

#[test]
fn identity_is_neutral_on_both_sides() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut cases = vec![sample(), ColorMatrix::ZERO, ColorMatrix::IDENTITY];
    cases.extend((0..16).map(|_| random_matrix(&mut rng)));

    for m in cases {
        assert_eq!(multiply(&ColorMatrix::IDENTITY, &m), m);
        assert_eq!(multiply(&m, &ColorMatrix::IDENTITY), m);
    }
}

#[test]
fn multiply_is_associative_within_tolerance() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..64 {
        let a = random_matrix(&mut rng);
        let b = random_matrix(&mut rng);
        let c = random_matrix(&mut rng);

        let left = multiply(&multiply(&a, &b), &c);
        let right = multiply(&a, &multiply(&b, &c));
        for (l, r) in left.values().zip(right.values()) {
            assert_abs_diff_eq!(l, r, epsilon = 1e-4);
        }
    }
}

#[test]
fn multiply_matches_hand_computed_cell() {
    let a = sample();
    let b = sample();
    let c = multiply(&a, &b);
    // row 0 of a dotted with column 1 of b
    let expected = 0.5 * -1.0 + -1.0 * 0.0 + 2.0 * 3.0 + 0.0 * 0.0 + 0.25 * 1.0;
    assert_abs_diff_eq!(c.get(0, 1), expected);
}

#[test]
fn multiply_leaves_inputs_untouched() {
    let a = sample();
    let b = ColorMatrix::IDENTITY;
    let a_before = a;
    let _ = multiply(&a, &b);
    assert_eq!(a, a_before);
    assert_eq!(b, ColorMatrix::IDENTITY);
}

#[test]
fn mul_operator_and_then_agree_with_multiply() {
    let a = sample();
    let b = multiply(&a, &a);
    assert_eq!(a * b, multiply(&a, &b));
    assert_eq!(&a * &b, multiply(&a, &b));
    assert_eq!(a.then(&b), multiply(&a, &b));
}

#[test]
fn column_reads_output_channel_weights() {
    assert_eq!(sample().column(1), [-1.0, 0.0, 3.0, 0.0, 1.0]);
}

#[test]
fn display_round_trips_through_from_str() {
    let m = sample();
    let text = m.to_string();
    assert_eq!(text.lines().count(), DIM);
    let parsed: ColorMatrix = text.parse().unwrap();
    assert_eq!(parsed, m);
}

#[test]
fn from_str_accepts_semicolons() {
    let text = "1;0;0;0;0; 0;1;0;0;0; 0;0;1;0;0; 0;0;0;1;0; 0;0;0;0;1";
    assert_eq!(text.parse::<ColorMatrix>().unwrap(), ColorMatrix::IDENTITY);
}

#[test]
fn from_str_rejects_bad_input() {
    let err = "1 2 3".parse::<ColorMatrix>().unwrap_err();
    assert!(matches!(err, ViewerError::InvalidMatrixInput(_)));

    let mut tokens = vec!["0"; 24];
    tokens.push("abc");
    let err = tokens.join(" ").parse::<ColorMatrix>().unwrap_err();
    assert!(err.to_string().contains("abc"));

    let mut tokens = vec!["0"; 24];
    tokens.push("inf");
    assert!(tokens.join(" ").parse::<ColorMatrix>().is_err());
}

#[test]
fn serde_uses_plain_nested_rows() {
    let json = serde_json::to_string(&ColorMatrix::IDENTITY).unwrap();
    assert!(json.starts_with("[[1.0,0.0,0.0,0.0,0.0]"));
    let back: ColorMatrix = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ColorMatrix::IDENTITY);
}

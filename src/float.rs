//! Tolerant floating point comparison.
//!
//! Chains of matrix products accumulate rounding error, so every equality
//! check in the renderer goes through [`ApproxEq`] instead of `==`.

pub const EPSILON: f64 = 1e-5;

#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}

/// Clamps a color channel into `[0, 1]`.
#[inline]
pub fn clamp_unit(x: f64) -> f64 {
    if x > 1.0 {
        1.0
    } else if x < 0.0 {
        0.0
    } else {
        x
    }
}

pub trait ApproxEq<Rhs = Self> {
    fn approx_eq(&self, other: &Rhs) -> bool;
}

impl ApproxEq for f64 {
    #[inline]
    fn approx_eq(&self, other: &f64) -> bool {
        approx_eq(*self, *other)
    }
}

impl<T: ApproxEq> ApproxEq for Option<T> {
    fn approx_eq(&self, other: &Option<T>) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.approx_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr) => {{
        let (left, right) = (&$left, &$right);
        if !$crate::float::ApproxEq::approx_eq(left, right) {
            panic!(
                "assertion failed: `left ≈ right`\n  left: `{:?}`\n right: `{:?}`",
                left, right
            );
        }
    }};
}

#[test]
fn values_within_epsilon_are_equal() {
    assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
    assert!(!approx_eq(1.0, 1.0 + EPSILON * 2.0));
}

#[test]
fn clamp_keeps_channels_in_unit_range() {
    assert_eq!(1.0, clamp_unit(1.5));
    assert_eq!(0.0, clamp_unit(-0.5));
    assert_eq!(0.25, clamp_unit(0.25));
}

use thiserror::Error;

/// Errors that can occur when creating a [`Bracket`] or validating bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,

    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,

    /// Function values at the endpoints share a strict sign.
    #[error(
        "function must have opposite signs at the endpoints: \
         f({left}) = {left_value}, f({right}) = {right_value}"
    )]
    NoSignChange {
        left: f64,
        right: f64,
        left_value: f64,
        right_value: f64,
    },
}

/// Current bracket bounds and the function value at the left bound.
///
/// Only the left value is needed: each shrink compares the midpoint's sign
/// against the left endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    left: f64,
    right: f64,
    left_value: f64,
}

impl Bracket {
    /// Creates a bracket from validated bounds and endpoint values.
    ///
    /// An endpoint whose value is exactly zero is accepted.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NoSignChange` if both values share a strict sign.
    pub(super) fn new(
        bounds: Bounds,
        left_value: f64,
        right_value: f64,
    ) -> Result<Self, BracketError> {
        if Sign::of(left_value).is_same_strict(Sign::of(right_value)) {
            return Err(BracketError::NoSignChange {
                left: bounds.left,
                right: bounds.right,
                left_value,
                right_value,
            });
        }

        Ok(Self {
            left: bounds.left,
            right: bounds.right,
            left_value,
        })
    }

    /// Returns the bracket bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the midpoint of the bracket.
    ///
    /// Halving each bound first keeps large same-signed bounds from
    /// overflowing; the result is the same as `(left + right) / 2` otherwise.
    pub(super) fn midpoint(&self) -> f64 {
        0.5 * self.left + 0.5 * self.right
    }

    /// Returns half of the bracket width.
    pub(super) fn half_width(&self) -> f64 {
        0.5 * self.right - 0.5 * self.left
    }

    /// Returns true if `x` lies strictly inside the bracket.
    ///
    /// Fails once the bounds are adjacent floats and the midpoint rounds
    /// onto one of them.
    pub(super) fn is_interior(&self, x: f64) -> bool {
        self.left < x && x < self.right
    }

    /// Shrinks the bracket to the half that still contains a sign change.
    ///
    /// Keeps `[left, x]` when `f(left)` and `value` have opposite strict
    /// signs, otherwise moves the left bound to `x`.
    pub(super) fn shrink(&mut self, x: f64, value: f64) {
        if Sign::of(self.left_value).is_opposite(Sign::of(value)) {
            self.right = x;
        } else {
            self.left = x;
            self.left_value = value;
        }
    }
}

/// The sign of a function value for bracket logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Sign {
    Positive,
    Negative,
    Zero,
}

impl Sign {
    /// Returns the sign of a function value.
    pub(super) fn of(value: f64) -> Self {
        if value > 0.0 {
            Sign::Positive
        } else if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    /// True if both signs are strictly positive or both strictly negative.
    ///
    /// Matches `a * b > 0.0` without the risk of the product underflowing.
    fn is_same_strict(self, other: Self) -> bool {
        self != Sign::Zero && self == other
    }

    /// True if one sign is strictly positive and the other strictly negative.
    ///
    /// Matches `a * b < 0.0` without the risk of the product underflowing.
    fn is_opposite(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Sign::Positive, Sign::Negative) | (Sign::Negative, Sign::Positive)
        )
    }
}

/// Ordered finite bounds for a bisection bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = bracket;

        if !left.is_finite() || !right.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if left == right {
            return Err(BracketError::ZeroWidth);
        }

        if left < right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }

    /// Returns the bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn bounds_reorders_bracket() {
        let bounds = Bounds::new([3.0, 1.0]).expect("valid bracket");
        assert_eq!(bounds.as_array(), [1.0, 3.0]);
    }

    #[test]
    fn bounds_rejects_non_finite() {
        assert!(matches!(
            Bounds::new([f64::NAN, 1.0]),
            Err(BracketError::NonFinite)
        ));
        assert!(matches!(
            Bounds::new([0.0, f64::NEG_INFINITY]),
            Err(BracketError::NonFinite)
        ));
    }

    #[test]
    fn bounds_rejects_zero_width() {
        assert!(matches!(
            Bounds::new([2.0, 2.0]),
            Err(BracketError::ZeroWidth)
        ));
    }

    #[test]
    fn new_bracket_rejects_same_sign() {
        let bounds = Bounds::new([0.0, 1.0]).expect("valid bounds");
        assert!(matches!(
            Bracket::new(bounds, 2.0, 3.0),
            Err(BracketError::NoSignChange { .. })
        ));
        assert!(matches!(
            Bracket::new(bounds, -2.0, -3.0),
            Err(BracketError::NoSignChange { .. })
        ));
    }

    #[test]
    fn new_bracket_accepts_zero_endpoint() {
        let bounds = Bounds::new([0.0, 1.0]).expect("valid bounds");
        assert!(Bracket::new(bounds, 0.0, 5.0).is_ok());
        assert!(Bracket::new(bounds, -5.0, 0.0).is_ok());
    }

    #[test]
    fn tiny_values_do_not_underflow_sign_checks() {
        // The product of these values underflows to zero.
        let bounds = Bounds::new([0.0, 1.0]).expect("valid bounds");
        assert!(matches!(
            Bracket::new(bounds, 1e-200, 1e-200),
            Err(BracketError::NoSignChange { .. })
        ));

        let mut bracket = Bracket::new(bounds, -1e-200, 1.0).expect("valid bracket");
        bracket.shrink(0.5, 1e-200);
        assert_eq!(bracket.as_array(), [0.0, 0.5]);
    }

    #[test]
    fn shrink_keeps_sign_change() {
        let mut bracket = Bracket::new(
            Bounds::new([0.0, 2.0]).expect("valid bounds"),
            -1.0,
            1.0,
        )
        .expect("valid bracket");

        bracket.shrink(1.0, -0.5);
        assert_eq!(bracket.as_array(), [1.0, 2.0]);

        bracket.shrink(1.5, 0.25);
        assert_eq!(bracket.as_array(), [1.0, 1.5]);
        assert_relative_eq!(bracket.midpoint(), 1.25);
        assert_relative_eq!(bracket.half_width(), 0.25);
    }

    #[test]
    fn zero_left_value_moves_left_bound() {
        // f(left) == 0 never has an opposite sign, so the left bound advances.
        let mut bracket = Bracket::new(
            Bounds::new([0.0, 2.0]).expect("valid bounds"),
            0.0,
            1.0,
        )
        .expect("valid bracket");

        bracket.shrink(1.0, 1.0);
        assert_eq!(bracket.as_array(), [1.0, 2.0]);
    }

    #[test]
    fn midpoint_handles_large_bounds() {
        let bracket = Bracket::new(
            Bounds::new([f64::MAX / 2.0, f64::MAX]).expect("valid bounds"),
            -1.0,
            1.0,
        )
        .expect("valid bracket");

        assert!(bracket.midpoint().is_finite());
        assert!(bracket.is_interior(bracket.midpoint()));
    }
}

//! Capacity value abstraction
//!
//! Any bounded numeric type with exact addition, subtraction and a total
//! order on the values actually used can serve as a capacity. Integer types
//! give the classical termination guarantee; floating-point types are
//! accepted with whatever precision plain arithmetic comparison provides.
//!
//! Every residual, the running flow total and any cut capacity are bounded
//! by the sum of all input capacities, so graph construction rejects inputs
//! whose total does not fit in `C`.

use std::fmt::{Debug, Display};

use num_traits::{Bounded, NumAssign};

/// Numeric type usable as an edge capacity or flow value
pub trait Capacity:
    Copy + PartialOrd + Debug + Display + NumAssign + Bounded + Send + Sync + 'static
{
    /// Returns true for non-negative finite values; NaN and infinities are rejected
    #[inline]
    fn is_valid_capacity(self) -> bool {
        self >= Self::zero() && self - self == Self::zero()
    }

    /// `self + other`, or `None` when the sum exceeds `Self::max_value()`
    ///
    /// Both operands must be valid capacities.
    #[inline]
    fn checked_total(self, other: Self) -> Option<Self> {
        if other > Self::max_value() - self {
            None
        } else {
            Some(self + other)
        }
    }

    /// Returns true for strictly positive values
    #[inline]
    fn is_positive(self) -> bool {
        self > Self::zero()
    }

    /// Smaller of two values under `PartialOrd`
    #[inline]
    fn min_capacity(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }
}

impl<T> Capacity for T where
    T: Copy + PartialOrd + Debug + Display + NumAssign + Bounded + Send + Sync + 'static
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_validation() {
        assert!(0i64.is_valid_capacity());
        assert!(5u32.is_valid_capacity());
        assert!(!(-1i32).is_valid_capacity());
        assert!(2.5f64.is_valid_capacity());
        assert!(!f64::NAN.is_valid_capacity());
        assert!(!(-0.5f64).is_valid_capacity());
        assert!(!f64::INFINITY.is_valid_capacity());
        assert!(!f64::NEG_INFINITY.is_valid_capacity());
        assert!(f64::MAX.is_valid_capacity());
    }

    #[test]
    fn test_checked_total() {
        assert_eq!(200u8.checked_total(55), Some(255));
        assert_eq!(200u8.checked_total(100), None);
        assert_eq!(i64::MAX.checked_total(0), Some(i64::MAX));
        assert_eq!(f64::MAX.checked_total(f64::MAX), None);
    }

    #[test]
    fn test_positive_and_min() {
        assert!(!0u64.is_positive());
        assert!(3u64.is_positive());
        assert_eq!(7i64.min_capacity(3), 3);
        assert_eq!(1.5f64.min_capacity(4.0), 1.5);
    }
}

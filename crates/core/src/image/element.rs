//! Cell element trait for generic image values
//!
//! Morphological operators run on boolean and integer images only; the
//! defined saturating arithmetic below does not extend to floating point.

use std::fmt::Debug;

/// Trait for types that can be stored in an image cell.
///
/// This trait bounds the types the operators accept: `bool` and the
/// signed/unsigned integers of width 8-64. The total order (`Ord`) is what
/// the min/max filters and the watershed priority queue compare with.
pub trait MorphElement:
    Copy + Clone + Debug + Ord + Eq + Send + Sync + 'static
{
    /// Minimum value representable by this type
    fn min_value() -> Self;

    /// Maximum value representable by this type
    fn max_value() -> Self;

    /// The zero (background) value
    fn zero() -> Self;

    /// The unit (foreground) value
    fn one() -> Self;

    /// Whether this cell selects its position into a structuring element
    fn is_set(&self) -> bool;

    /// The "don't care" code of hit-or-miss templates, where the type can
    /// represent one
    fn dont_care_code() -> Option<Self>;

    /// Whether this cell is the "don't care" code in a hit-or-miss template
    fn is_dont_care(&self) -> bool {
        Self::dont_care_code() == Some(*self)
    }

    /// Saturating subtraction; booleans use set difference (`a && !b`)
    fn sub_saturating(self, other: Self) -> Self;
}

macro_rules! impl_morph_element_unsigned {
    ($t:ty) => {
        impl MorphElement for $t {
            fn min_value() -> Self {
                <$t>::MIN
            }

            fn max_value() -> Self {
                <$t>::MAX
            }

            fn zero() -> Self {
                0
            }

            fn one() -> Self {
                1
            }

            fn is_set(&self) -> bool {
                *self != 0
            }

            fn dont_care_code() -> Option<Self> {
                Some(2)
            }

            fn sub_saturating(self, other: Self) -> Self {
                self.saturating_sub(other)
            }
        }
    };
}

macro_rules! impl_morph_element_signed {
    ($t:ty) => {
        impl MorphElement for $t {
            fn min_value() -> Self {
                <$t>::MIN
            }

            fn max_value() -> Self {
                <$t>::MAX
            }

            fn zero() -> Self {
                0
            }

            fn one() -> Self {
                1
            }

            fn is_set(&self) -> bool {
                *self != 0
            }

            fn dont_care_code() -> Option<Self> {
                Some(2)
            }

            fn sub_saturating(self, other: Self) -> Self {
                // A subtrahend of MIN has no negation; the result saturates
                // to MAX for every minuend
                if other == <$t>::MIN {
                    return <$t>::MAX;
                }
                self.saturating_sub(other)
            }
        }
    };
}

impl_morph_element_signed!(i8);
impl_morph_element_signed!(i16);
impl_morph_element_signed!(i32);
impl_morph_element_signed!(i64);
impl_morph_element_unsigned!(u8);
impl_morph_element_unsigned!(u16);
impl_morph_element_unsigned!(u32);
impl_morph_element_unsigned!(u64);

impl MorphElement for bool {
    fn min_value() -> Self {
        false
    }

    fn max_value() -> Self {
        true
    }

    fn zero() -> Self {
        false
    }

    fn one() -> Self {
        true
    }

    fn is_set(&self) -> bool {
        *self
    }

    // A boolean template cannot encode the don't-care code
    fn dont_care_code() -> Option<Self> {
        None
    }

    fn sub_saturating(self, other: Self) -> Self {
        self && !other
    }
}

use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Integer element of a searchable sequence.
///
/// Implemented for every primitive integer type. The only arithmetic the
/// search needs is the complement `target - value`, which must not wrap.
pub trait PairValue:
    Copy + Eq + Ord + Hash + Debug + Display + Serialize + DeserializeOwned
{
    /// `target - self`, or `None` when the result is not representable.
    fn checked_complement(self, target: Self) -> Option<Self>;

    /// `self + other`, or `None` on overflow.
    fn checked_pair_sum(self, other: Self) -> Option<Self>;
}

macro_rules! impl_pair_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl PairValue for $t {
                #[inline]
                fn checked_complement(self, target: Self) -> Option<Self> {
                    target.checked_sub(self)
                }

                #[inline]
                fn checked_pair_sum(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }
            }
        )*
    };
}

impl_pair_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

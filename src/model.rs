use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Weight of a link, or the accumulated weight of a route.
/// Links always carry a strictly positive weight, routes start at zero.
///
/// Link weights fit in 64 bits, route weights are accumulated over 128 bits so that no sequence
/// of links a route can follow overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Weight(u128);

impl Weight {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(u128::MAX);

    pub const fn from_units(units: u64) -> Self {
        Self(units as u128)
    }

    pub const fn units(&self) -> u128 {
        self.0
    }
}

/// Clamps at [`Weight::MAX`] instead of wrapping.
impl Add for Weight {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

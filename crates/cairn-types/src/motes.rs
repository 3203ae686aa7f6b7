use crate::error::TypesError;
use std::fmt;
use std::str::FromStr;

/// Token amount in motes, the network's smallest unit.
///
/// Amounts travel as decimal strings on the wire and fit in 128 bits.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Motes(u128);

impl Motes {
    pub const ZERO: Self = Self(0);

    /// One CRN in motes (10^9)
    pub const CRN: Self = Self(1_000_000_000);

    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition
    pub fn checked_add(&self, rhs: &Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Checked subtraction
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }
}

impl From<u64> for Motes {
    fn from(value: u64) -> Self {
        Self(value as u128)
    }
}

impl From<u128> for Motes {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for Motes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Motes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Motes({})", self.0)
    }
}

impl FromStr for Motes {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse::<u128>()?))
    }
}

use crate::error::{SlResult, StrikelineError};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PIN_COUNT: u8 = 10;
const ALL_MASK: u16 = (1 << PIN_COUNT) - 1;

/// A set of pins on the deck, stored as a 10-bit mask (bit 0 = headpin).
///
/// Iteration is always in ascending pin order, so a `PinSet` doubles as the
/// "sorted standing pins" representation used by leave classification.
/// Serializes as a sorted list of pin numbers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct PinSet(u16);

impl PinSet {
    pub const EMPTY: PinSet = PinSet(0);
    pub const ALL: PinSet = PinSet(ALL_MASK);

    /// Builds a set from pin literals. Panics on a pin outside 1-10, which
    /// makes it a compile error when used in a const table.
    pub const fn literal(pins: &[u8]) -> PinSet {
        let mut bits = 0u16;
        let mut i = 0;
        while i < pins.len() {
            let pin = pins[i];
            assert!(pin >= 1 && pin <= PIN_COUNT, "pin out of range");
            bits |= 1 << (pin - 1);
            i += 1;
        }
        PinSet(bits)
    }

    pub fn from_slice(pins: &[u8]) -> SlResult<PinSet> {
        let mut set = PinSet::EMPTY;
        for &pin in pins {
            if !(1..=PIN_COUNT).contains(&pin) {
                return Err(StrikelineError::InvalidPin(pin));
            }
            set.0 |= 1 << (pin - 1);
        }
        Ok(set)
    }

    #[inline]
    pub fn contains(self, pin: u8) -> bool {
        (1..=PIN_COUNT).contains(&pin) && self.0 & (1 << (pin - 1)) != 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Pins in `self` that are not in `other`.
    #[inline]
    pub fn difference(self, other: PinSet) -> PinSet {
        PinSet(self.0 & !other.0)
    }

    #[inline]
    pub fn is_subset(self, other: PinSet) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = u8> {
        (1..=PIN_COUNT).filter(move |&pin| self.contains(pin))
    }

    pub fn to_vec(self) -> Vec<u8> {
        self.iter().collect()
    }

    /// Hyphen-joined pin list, e.g. `"4-6-7-10"`. Empty for an empty set.
    pub fn key(self) -> String {
        self.iter().join("-")
    }
}

impl fmt::Display for PinSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", self.key())
        }
    }
}

impl fmt::Debug for PinSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl TryFrom<Vec<u8>> for PinSet {
    type Error = StrikelineError;

    fn try_from(pins: Vec<u8>) -> SlResult<Self> {
        PinSet::from_slice(&pins)
    }
}

impl From<PinSet> for Vec<u8> {
    fn from(set: PinSet) -> Self {
        set.to_vec()
    }
}

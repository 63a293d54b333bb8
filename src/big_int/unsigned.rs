// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
use crate::big_int::digits::{self, Digit, Limb, Wide, LIMB_DIGITS, MAX_LIMB};

use itertools::Itertools;
use rand::{Rng, RngCore};
use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    ops::RangeInclusive,
    str::FromStr,
};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum FromStrErr {
    #[display("can't parse a number from an empty string")]
    Empty,
    #[display("found a sign without any digits")]
    MissingDigits,
    #[display("unknown digit {digit:?} at position {position}")]
    UnknownDigit { digit: char, position: usize },
}

/// the absolute value of a number
#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct Magnitude {
    /// holds the limbs in LE order, never empty and without leading zeros
    pub(super) limbs: Vec<Limb>,
}

impl Debug for Magnitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (pos, limb) in self.limbs.iter().rev().with_position() {
            write!(f, "{limb:0LIMB_DIGITS$}")?;
            if matches!(
                pos,
                itertools::Position::First | itertools::Position::Middle
            ) {
                f.write_str(", ")?;
            }
        }
        write!(f, "]")
    }
}
impl Display for Magnitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut limbs = self.limbs.iter().rev();
        if let Some(most_significant) = limbs.next() {
            write!(f, "{most_significant}")?;
        }
        for limb in limbs {
            write!(f, "{limb:0LIMB_DIGITS$}")?;
        }
        Ok(())
    }
}

impl FromStr for Magnitude {
    type Err = FromStrErr;

    /// accepts only ascii digits, positions in errors are relative to `s`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(FromStrErr::Empty);
        }
        if let Some((position, digit)) = s.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(FromStrErr::UnknownDigit { digit, position });
        }
        Ok(Self::from_limbs(
            s.as_bytes()
                .rchunks(LIMB_DIGITS)
                .map(digits::limb_from_ascii)
                .collect(),
        ))
    }
}

impl Magnitude {
    pub fn zero() -> Self {
        Self { limbs: vec![0] }
    }
    pub fn one() -> Self {
        Self { limbs: vec![1] }
    }
    /// takes LE limbs, each needs to be smaller than `BASE`
    pub fn from_limbs(limbs: Vec<Limb>) -> Self {
        debug_assert!(
            limbs.iter().all(|it| it.is_valid()),
            "found limb out of range in {limbs:?}"
        );
        let mut num = Self { limbs };
        num.normalize();
        num
    }
    pub fn from_native(value: Wide) -> Self {
        Self {
            limbs: digits::split_native(value),
        }
    }

    /// generate a new random number with at least `limbs.start()` and at most `limbs.end()` limbs
    pub fn new_random(limbs: RangeInclusive<usize>, mut rng: impl RngCore) -> Self {
        assert!(*limbs.start() > 0, "a number needs at least one limb");
        let len = rng.gen_range(limbs);
        let mut out = (1..len)
            .map(|_| crate::util::rng::random_limb(&mut rng))
            .collect_vec();
        out.push(rng.gen_range(1..=MAX_LIMB));
        Self::from_limbs(out)
    }

    /// strips leading zero limbs while keeping at least one
    pub fn normalize(&mut self) {
        while self.limbs.len() > 1 && self.limbs.last().is_some_and(|it| it.is_zero()) {
            self.limbs.pop();
        }
        if self.limbs.is_empty() {
            self.limbs.push(0);
        }
    }

    pub fn len(&self) -> usize {
        self.limbs.len()
    }
    pub fn is_zero(&self) -> bool {
        matches!(self.limbs.as_slice(), [0])
    }

    /// compares the absolute values, more limbs always means bigger
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.limbs
            .len()
            .cmp(&other.limbs.len())
            .then_with(|| self.limbs.iter().rev().cmp(other.limbs.iter().rev()))
    }

    /// `self = self * BASE + limb`
    pub fn shift_in(&mut self, limb: Limb) {
        self.limbs.insert(0, limb);
        self.normalize();
    }
}

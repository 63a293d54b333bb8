// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
use crate::{
    big_int::{
        math_algos::{add, div, mul, sub},
        primitve::{for_each_primitive, INum, Primitive, UNum},
        unsigned::{FromStrErr, Magnitude},
    },
    ops::DivMod,
};

use itertools::Either;
use rand::{Rng, RngCore};
use std::{
    borrow::Borrow,
    cmp::Ordering,
    fmt::{Debug, Display},
    ops::{
        Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
    },
    str::FromStr,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i8)]
pub enum Sign {
    Negative = -1,
    Positive = 1,
}
impl Sign {
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Positive => Self::Negative,
        }
    }
    /// `Negative` iff exactly one of both is `Negative`
    #[must_use]
    pub const fn const_mul(self, rhs: Self) -> Self {
        if self.is_negative() ^ rhs.is_negative() {
            Self::Negative
        } else {
            Self::Positive
        }
    }
}
impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}
impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.const_mul(rhs)
    }
}

/// an arbitrary precision signed integer, stored as base 10^9 limbs
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    /// `Sign::Negative` only for numbers below zero
    sign: Sign,
    magnitude: Magnitude,
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Number {{ {}{:?} }}",
            if self.is_negative() { "-" } else { "+" },
            self.magnitude
        )
    }
}
impl Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.magnitude.to_string())
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            Ordering::Equal
        } else if self.less_than(other) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}
impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<PRIMITIVE: Primitive> From<PRIMITIVE> for BigInt {
    fn from(value: PRIMITIVE) -> Self {
        match value.select_sign() {
            Either::Left(pos) => Self::new(Sign::Positive, Magnitude::from_native(pos.widen())),
            Either::Right(neg) => Self::new(
                if neg.is_negative() {
                    Sign::Negative
                } else {
                    Sign::Positive
                },
                Magnitude::from_native(neg.abs()),
            ),
        }
    }
}

impl FromStr for BigInt {
    type Err = FromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sign, rest) = match s.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, s),
        };
        let offset = s.len() - rest.len();

        rest.parse::<Magnitude>()
            .map(|it| Self::new(sign, it))
            .map_err(|err| match err {
                FromStrErr::Empty if offset > 0 => FromStrErr::MissingDigits,
                FromStrErr::UnknownDigit { digit, position } => FromStrErr::UnknownDigit {
                    digit,
                    position: position + offset,
                },
                err => err,
            })
    }
}

impl BigInt {
    /// builds a number from a magnitude, a zero magnitude always gets `Sign::Positive`
    pub(crate) fn new(sign: Sign, magnitude: Magnitude) -> Self {
        let mut num = Self { sign, magnitude };
        num.normalize();
        num
    }
    pub fn zero() -> Self {
        Self::new(Sign::Positive, Magnitude::zero())
    }
    pub fn one() -> Self {
        Self::new(Sign::Positive, Magnitude::one())
    }

    /// generate a new random number with at least `limbs.start()` and at most `limbs.end()` limbs of information
    /// # Example
    /// `1_000_000_000` <= `BigInt::new_random(2..=3, _).abs()` < `10^27`
    pub fn new_random(limbs: std::ops::RangeInclusive<usize>, mut rng: impl RngCore) -> Self {
        let sign = if rng.gen::<bool>() {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Self::new(sign, Magnitude::new_random(limbs, rng))
    }

    fn normalize(&mut self) {
        self.magnitude.normalize();
        if self.magnitude.is_zero() {
            self.sign = Sign::Positive;
        }
    }

    #[cfg(any(test, feature = "arb"))]
    pub(crate) const fn parts(&self) -> (Sign, &Magnitude) {
        (self.sign, &self.magnitude)
    }
    pub const fn sign(&self) -> Sign {
        self.sign
    }
    pub const fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }
    pub fn is_positive(&self) -> bool {
        !self.is_negative() && !self.is_zero()
    }
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
    /// the number of base 10^9 limbs
    pub fn limb_count(&self) -> usize {
        self.magnitude.len()
    }

    #[must_use]
    pub fn abs(&self) -> Self {
        Self::new(Sign::Positive, self.magnitude.clone())
    }

    fn less_than(&self, other: &Self) -> bool {
        if self.sign != other.sign {
            return self.is_negative();
        }
        let ord = self.magnitude.cmp_magnitude(&other.magnitude);
        if self.is_negative() {
            ord.is_gt()
        } else {
            ord.is_lt()
        }
    }

    /// `|lhs| - |rhs|` or `|rhs| - |lhs|`, keeps the sign of lhs when it had the bigger magnitude
    fn subtract_smaller(lhs: &Self, rhs: &Self) -> Self {
        if lhs.magnitude.cmp_magnitude(&rhs.magnitude).is_gt() {
            Self::new(lhs.sign, sub::magnitudes(&lhs.magnitude, &rhs.magnitude))
        } else {
            Self::new(-lhs.sign, sub::magnitudes(&rhs.magnitude, &lhs.magnitude))
        }
    }

    pub(crate) fn add(lhs: &Self, rhs: &Self) -> Self {
        if lhs.sign == rhs.sign {
            Self::new(lhs.sign, add::magnitudes(&lhs.magnitude, &rhs.magnitude))
        } else {
            Self::subtract_smaller(lhs, rhs)
        }
    }
    pub(crate) fn sub(lhs: &Self, rhs: &Self) -> Self {
        if lhs.sign == rhs.sign {
            Self::subtract_smaller(lhs, rhs)
        } else {
            Self::new(lhs.sign, add::magnitudes(&lhs.magnitude, &rhs.magnitude))
        }
    }
    pub(crate) fn mul(lhs: &Self, rhs: &Self) -> Self {
        Self::new(
            lhs.sign * rhs.sign,
            mul::schoolbook(&lhs.magnitude, &rhs.magnitude),
        )
    }

    /// the quotient gets floored for different signs, else truncated
    /// the remainder gets the sign `lhs.sign * rhs.sign`
    pub(crate) fn div_mod(lhs: &Self, rhs: &Self) -> (Self, Self) {
        let (q, r) = div::divide(&lhs.magnitude, &rhs.magnitude);
        let sign = lhs.sign * rhs.sign;
        let needs_floor = lhs.sign != rhs.sign && !r.is_zero();

        let mut quotient = Self::new(sign, q);
        if needs_floor {
            quotient = Self::sub(&quotient, &Self::one());
        }
        (quotient, Self::new(sign, r))
    }
    pub(crate) fn div(lhs: &Self, rhs: &Self) -> Self {
        Self::div_mod(lhs, rhs).0
    }
    pub(crate) fn rem(lhs: &Self, rhs: &Self) -> Self {
        Self::div_mod(lhs, rhs).1
    }
    /// same quotient as `div`, but the remainder has the sign of `rhs`, so that `q * rhs + r == lhs`
    pub(crate) fn div_mod_floor(lhs: &Self, rhs: &Self) -> (Self, Self) {
        let (q, r) = div::divide(&lhs.magnitude, &rhs.magnitude);
        if lhs.sign == rhs.sign || r.is_zero() {
            return (Self::new(lhs.sign * rhs.sign, q), Self::new(rhs.sign, r));
        }
        let quotient = Self::sub(&Self::new(Sign::Negative, q), &Self::one());
        let remainder = Self::new(rhs.sign, sub::magnitudes(&rhs.magnitude, &r));
        (quotient, remainder)
    }
}

// owned negation can reuse the limbs
impl Neg for BigInt {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.sign = -self.sign;
        self.normalize();
        self
    }
}
impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

macro_rules! implBigMath {
    ($assign_trait:ident, $assign_func:ident, $trait:ident, $func:ident) => {
        implBigMath!(impl $assign_trait, $assign_func, $trait, $func, BigInt);
        implBigMath!(impl $assign_trait, $assign_func, $trait, $func, &BigInt);
        for_each_primitive!(implBigMath, native, $assign_trait, $assign_func, $trait, $func);
    };
    (native, $assign_trait:ident, $assign_func:ident, $trait:ident, $func:ident, $native:ty) => {
        impl $trait<$native> for BigInt {
            type Output = BigInt;
            fn $func(self, rhs: $native) -> Self::Output {
                BigInt::$func(&self, &BigInt::from(rhs))
            }
        }
        impl $trait<$native> for &BigInt {
            type Output = BigInt;
            fn $func(self, rhs: $native) -> Self::Output {
                BigInt::$func(self, &BigInt::from(rhs))
            }
        }
        impl $assign_trait<$native> for BigInt {
            fn $assign_func(&mut self, rhs: $native) {
                *self = BigInt::$func(self, &BigInt::from(rhs));
            }
        }
    };
    (impl $assign_trait:ident, $assign_func:ident, $trait:ident, $func:ident, $rhs:ty) => {
        impl $trait<$rhs> for BigInt {
            type Output = BigInt;
            fn $func(self, rhs: $rhs) -> Self::Output {
                BigInt::$func(&self, rhs.borrow())
            }
        }
        impl $trait<$rhs> for &BigInt {
            type Output = BigInt;
            fn $func(self, rhs: $rhs) -> Self::Output {
                BigInt::$func(self, rhs.borrow())
            }
        }
        impl $assign_trait<$rhs> for BigInt {
            fn $assign_func(&mut self, rhs: $rhs) {
                *self = BigInt::$func(self, rhs.borrow());
            }
        }
    };
}

implBigMath!(AddAssign, add_assign, Add, add);
implBigMath!(SubAssign, sub_assign, Sub, sub);
implBigMath!(MulAssign, mul_assign, Mul, mul);
implBigMath!(DivAssign, div_assign, Div, div);
implBigMath!(RemAssign, rem_assign, Rem, rem);

macro_rules! implBigDiv {
    ($rhs:ty) => {
        impl DivMod<$rhs> for BigInt {
            type Output = BigInt;

            fn div_mod(self, rhs: $rhs) -> (BigInt, BigInt) {
                BigInt::div_mod(&self, rhs.borrow())
            }
            fn div_mod_floor(self, rhs: $rhs) -> (BigInt, BigInt) {
                BigInt::div_mod_floor(&self, rhs.borrow())
            }
        }
        impl DivMod<$rhs> for &BigInt {
            type Output = BigInt;

            fn div_mod(self, rhs: $rhs) -> (BigInt, BigInt) {
                BigInt::div_mod(self, rhs.borrow())
            }
            fn div_mod_floor(self, rhs: $rhs) -> (BigInt, BigInt) {
                BigInt::div_mod_floor(self, rhs.borrow())
            }
        }
    };
}
implBigDiv!(BigInt);
implBigDiv!(&BigInt);

macro_rules! implNativeCmp {
    ($native:ty) => {
        impl PartialEq<$native> for BigInt {
            fn eq(&self, other: &$native) -> bool {
                self.cmp(&Self::from(*other)).is_eq()
            }
        }
        impl PartialOrd<$native> for BigInt {
            fn partial_cmp(&self, other: &$native) -> Option<Ordering> {
                Some(self.cmp(&Self::from(*other)))
            }
        }
        impl DivMod<$native> for BigInt {
            type Output = BigInt;

            fn div_mod(self, rhs: $native) -> (BigInt, BigInt) {
                BigInt::div_mod(&self, &BigInt::from(rhs))
            }
            fn div_mod_floor(self, rhs: $native) -> (BigInt, BigInt) {
                BigInt::div_mod_floor(&self, &BigInt::from(rhs))
            }
        }
        impl DivMod<$native> for &BigInt {
            type Output = BigInt;

            fn div_mod(self, rhs: $native) -> (BigInt, BigInt) {
                BigInt::div_mod(self, &BigInt::from(rhs))
            }
            fn div_mod_floor(self, rhs: $native) -> (BigInt, BigInt) {
                BigInt::div_mod_floor(self, &BigInt::from(rhs))
            }
        }
    };
}
for_each_primitive!(implNativeCmp);

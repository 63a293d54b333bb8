#![allow(clippy::wildcard_imports)]
use super::{
    digits::{Digit, Limb, MAX_LIMB},
    unsigned::Magnitude,
};
use itertools::Itertools;

pub mod add {
    use super::*;

    /// calculates `|lhs| + |rhs|`
    pub fn magnitudes(lhs: &Magnitude, rhs: &Magnitude) -> Magnitude {
        let mut out = Vec::with_capacity(lhs.len().max(rhs.len()) + 1);
        let mut carry = false;
        for elem in lhs.limbs.iter().zip_longest(rhs.limbs.iter()) {
            use itertools::EitherOrBoth as E;
            let (lhs_limb, rhs_limb) = match elem {
                E::Both(lhs, rhs) => (*lhs, *rhs),
                E::Left(limb) | E::Right(limb) => (*limb, 0),
            };
            let limb;
            (limb, carry) = lhs_limb.add_carry(rhs_limb, carry);
            out.push(limb);
        }
        out.push(Limb::from(carry));
        Magnitude::from_limbs(out)
    }
}

pub mod sub {
    use super::*;

    /// calculates `|bigger| - |smaller|`
    /// bigger needs to have the bigger magnitude
    pub fn magnitudes(bigger: &Magnitude, smaller: &Magnitude) -> Magnitude {
        debug_assert!(
            bigger.cmp_magnitude(smaller).is_ge(),
            "{bigger:?} is smaller than {smaller:?}"
        );
        let mut out = Vec::with_capacity(bigger.len());
        let mut borrow = false;
        for elem in bigger.limbs.iter().zip_longest(smaller.limbs.iter()) {
            use itertools::EitherOrBoth as E;
            let (lhs_limb, rhs_limb) = match elem {
                E::Both(lhs, rhs) => (*lhs, *rhs),
                E::Left(limb) => (*limb, 0),
                E::Right(_) => unreachable!("bigger has at least as many limbs"),
            };
            let limb;
            (limb, borrow) = lhs_limb.sub_borrow(rhs_limb, borrow);
            out.push(limb);
        }
        debug_assert!(!borrow, "subtraction underflowed");
        Magnitude::from_limbs(out)
    }
}

pub mod mul {
    use super::*;

    /// multiplies every limb pair, O(n*m)
    pub fn schoolbook(lhs: &Magnitude, rhs: &Magnitude) -> Magnitude {
        tracing::trace!(
            lhs_limbs = lhs.len(),
            rhs_limbs = rhs.len(),
            "schoolbook multiplication"
        );
        let mut out: Vec<Limb> = vec![0; lhs.len() + rhs.len()];
        for (i, &lhs_limb) in lhs.limbs.iter().enumerate() {
            let mut carry = 0;
            for (j, &rhs_limb) in rhs.limbs.iter().enumerate() {
                (out[i + j], carry) = lhs_limb.mul_add_carry(rhs_limb, out[i + j], carry);
            }
            // nothing was written at this position by earlier rows
            out[i + rhs.len()] = carry;
        }
        Magnitude::from_limbs(out)
    }

    /// `rhs` needs to be a valid limb
    pub fn by_limb(lhs: &Magnitude, rhs: Limb) -> Magnitude {
        if rhs.is_zero() {
            return Magnitude::zero();
        }
        let mut out = Vec::with_capacity(lhs.len() + 1);
        let mut carry = 0;
        for &limb in &lhs.limbs {
            let result;
            (result, carry) = limb.mul_add_carry(rhs, 0, carry);
            out.push(result);
        }
        if !carry.is_zero() {
            out.push(carry);
        }
        Magnitude::from_limbs(out)
    }
}

pub mod div {
    use super::*;

    /// computes `(|lhs| / |rhs|, |lhs| % |rhs|)` with schoolbook long division.
    /// Every quotient limb is found by a binary search over `[1, BASE)`, any algorithm
    /// satisfying `lhs = q * rhs + r` with `r < rhs` can be substituted here.
    pub fn divide(lhs: &Magnitude, rhs: &Magnitude) -> (Magnitude, Magnitude) {
        assert!(!rhs.is_zero(), "can't divide by zero");

        match lhs.cmp_magnitude(rhs) {
            std::cmp::Ordering::Less => return (Magnitude::zero(), lhs.clone()),
            std::cmp::Ordering::Equal => return (Magnitude::one(), Magnitude::zero()),
            std::cmp::Ordering::Greater => {}
        }
        tracing::trace!(
            lhs_limbs = lhs.len(),
            rhs_limbs = rhs.len(),
            "schoolbook division"
        );

        let mut quotient = Vec::with_capacity(lhs.len());
        let mut remainder = Magnitude::zero();
        for &limb in lhs.limbs.iter().rev() {
            remainder.shift_in(limb);
            if remainder.cmp_magnitude(rhs).is_lt() {
                quotient.push(0);
                continue;
            }
            let q = estimate_limb(&remainder, rhs);
            remainder = sub::magnitudes(&remainder, &mul::by_limb(rhs, q));
            quotient.push(q);
        }
        quotient.reverse();

        let quotient = Magnitude::from_limbs(quotient);
        debug_assert!(remainder.cmp_magnitude(rhs).is_lt(), "r >= d");
        (quotient, remainder)
    }

    /// largest `q` with `rhs * q <= remainder`, expects `rhs <= remainder < rhs * BASE`
    fn estimate_limb(remainder: &Magnitude, rhs: &Magnitude) -> Limb {
        let (mut low, mut high): (Limb, Limb) = (1, MAX_LIMB);
        let mut best = 0;
        while low <= high {
            let mid = low + (high - low) / 2;
            if mul::by_limb(rhs, mid).cmp_magnitude(remainder).is_le() {
                best = mid;
                low = mid + 1;
            } else {
                high = mid - 1;
            }
        }
        debug_assert!(best > 0, "remainder was smaller than divisor");
        best
    }
}

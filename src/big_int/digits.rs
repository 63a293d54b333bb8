/// a single base 10^9 digit of a [`BigInt`](crate::BigInt)
pub type Limb = u32;
/// wide enough to hold `(BASE - 1)^2 + 2 * (BASE - 1)`
pub(crate) type Wide = u64;
/// signed counterpart of [`Wide`], used to detect borrows
pub(crate) type SignedWide = i64;

pub const BASE: Wide = 1_000_000_000;
/// number of decimal digits held by every limb but the most significant one
pub const LIMB_DIGITS: usize = 9;
pub(crate) const MAX_LIMB: Limb = (BASE - 1) as Limb;

/// `POW_TEN[i] == 10^i`, the place values inside a limb
pub(crate) const POW_TEN: [Wide; LIMB_DIGITS] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
];

/// arithmetic on a single limb, every result is split back into (limb, carry)
pub trait Digit: Copy + Sized {
    fn is_valid(self) -> bool;
    fn is_zero(self) -> bool;

    /// `self + rhs + in_carry = out_carry * BASE + result`
    fn add_carry(self, rhs: Self, in_carry: bool) -> (Self, bool);
    /// `self - rhs - in_borrow = result - out_borrow * BASE`
    fn sub_borrow(self, rhs: Self, in_borrow: bool) -> (Self, bool);
    /// `self * rhs + add + carry = out_carry * BASE + result`
    fn mul_add_carry(self, rhs: Self, add: Self, carry: Self) -> (Self, Self);
}

impl Digit for Limb {
    fn is_valid(self) -> bool {
        Wide::from(self) < BASE
    }
    fn is_zero(self) -> bool {
        self == 0
    }

    fn add_carry(self, rhs: Self, in_carry: bool) -> (Self, bool) {
        debug_assert!(self.is_valid() && rhs.is_valid(), "limb out of range");
        let sum = Wide::from(self) + Wide::from(rhs) + Wide::from(in_carry);
        ((sum % BASE) as Self, sum >= BASE)
    }

    fn sub_borrow(self, rhs: Self, in_borrow: bool) -> (Self, bool) {
        debug_assert!(self.is_valid() && rhs.is_valid(), "limb out of range");
        let diff = SignedWide::from(self) - SignedWide::from(rhs) - SignedWide::from(in_borrow);
        if diff < 0 {
            ((diff + BASE as SignedWide) as Self, true)
        } else {
            (diff as Self, false)
        }
    }

    fn mul_add_carry(self, rhs: Self, add: Self, carry: Self) -> (Self, Self) {
        debug_assert!(
            self.is_valid() && rhs.is_valid() && add.is_valid() && carry.is_valid(),
            "limb out of range"
        );
        let full = Wide::from(self) * Wide::from(rhs) + Wide::from(add) + Wide::from(carry);
        ((full % BASE) as Self, (full / BASE) as Self)
    }
}

/// splits a native value into its limbs, least significant first
pub(crate) fn split_native(mut value: Wide) -> Vec<Limb> {
    if value == 0 {
        return vec![0];
    }
    let mut limbs = Vec::with_capacity(3);
    while value > 0 {
        limbs.push((value % BASE) as Limb);
        value /= BASE;
    }
    limbs
}

/// converts up to [`LIMB_DIGITS`] ascii digits into one limb
pub(crate) fn limb_from_ascii(chunk: &[u8]) -> Limb {
    debug_assert!(chunk.len() <= LIMB_DIGITS, "chunk {chunk:?} too long");
    chunk
        .iter()
        .rev()
        .zip(POW_TEN)
        .map(|(&digit, place)| Wide::from(digit - b'0') * place)
        .sum::<Wide>() as Limb
}

use quickcheck::{Arbitrary, Gen};

use super::{
    digits::{Limb, MAX_LIMB},
    signed::{BigInt, Sign},
    unsigned::Magnitude,
};

fn from_raw(sign: Sign, raw: Vec<Limb>) -> BigInt {
    BigInt::new(
        sign,
        Magnitude::from_limbs(raw.into_iter().map(|it| it % (MAX_LIMB + 1)).collect()),
    )
}

impl Arbitrary for Sign {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Self::Negative
        } else {
            Self::Positive
        }
    }
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Self::Negative => Box::new(std::iter::once(Self::Positive)),
            Self::Positive => Box::new(std::iter::empty()),
        }
    }
}

impl Arbitrary for BigInt {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut raw: Vec<Limb> = Arbitrary::arbitrary(g);
        // mostly short numbers, so that carries between limbs get hit often
        if bool::arbitrary(g) {
            raw.truncate(3);
        }
        from_raw(Sign::arbitrary(g), raw)
    }
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let (sign, magnitude) = self.parts();
        let limbs = magnitude.limbs.clone();
        let flipped = sign
            .shrink()
            .map({
                let limbs = limbs.clone();
                move |sign| from_raw(sign, limbs.clone())
            });
        Box::new(flipped.chain(limbs.shrink().map(move |limbs| from_raw(sign, limbs))))
    }
}

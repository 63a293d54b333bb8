use rand::{Rng, RngCore};

use crate::big_int::digits::{Limb, MAX_LIMB};

#[cfg(test)]
pub fn generate_array<const N: usize>(rng: &mut impl RngCore) -> Result<[u8; N], rand::Error> {
    let mut buf = [0; N];
    rng.try_fill_bytes(&mut buf)?;
    Ok(buf)
}

/// an evenly distributed limb in `[0, BASE)`
pub fn random_limb(rng: &mut impl RngCore) -> Limb {
    rng.gen_range(0..=MAX_LIMB)
}

#[allow(clippy::module_name_repetitions)]
#[cfg(test)]
pub fn seeded_rng() -> ([u8; 32], rand::rngs::StdRng) {
    let seed = generate_array(&mut rand::rngs::OsRng).expect("failed to generate seed");
    let rng = <rand::rngs::StdRng as rand::SeedableRng>::from_seed(seed);
    (seed, rng)
}

pub mod big_int;
pub mod ops;

pub use big_int::{
    digits::{Limb, BASE, LIMB_DIGITS},
    signed::{BigInt, Sign},
    unsigned::FromStrErr,
};

mod util {
    pub mod rng;
}

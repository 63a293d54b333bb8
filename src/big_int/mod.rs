// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
pub mod digits;
pub(crate) mod math_algos;
mod primitve;

pub mod signed;
pub mod unsigned;

pub use primitve::{INum, Primitive, UNum};

#[cfg(any(test, feature = "arb"))]
mod arb;

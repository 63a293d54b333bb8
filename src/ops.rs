// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0

/// quotient and remainder out of a single long division
pub trait DivMod<Rhs = Self>: Sized {
    type Output;

    /// the pair of `self / rhs` and `self % rhs`
    ///
    /// # Panics
    /// if `rhs` is zero
    fn div_mod(self, rhs: Rhs) -> (Self::Output, Self::Output);

    /// same quotient as [`div_mod`](DivMod::div_mod), but the remainder takes the sign of `rhs`,
    /// so `q * rhs + r == self` for every sign combination
    ///
    /// # Panics
    /// if `rhs` is zero
    fn div_mod_floor(self, rhs: Rhs) -> (Self::Output, Self::Output);
}

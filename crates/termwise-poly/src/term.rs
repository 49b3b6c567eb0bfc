//! Polynomial terms and the coefficient trait.

use std::fmt::{self, Debug, Display};
use std::ops::{Add, Mul};

use num_traits::{One, Zero};

/// Operations a coefficient type must support.
///
/// Blanket-implemented, so any integer-like type qualifies; `i32`, `i64`
/// and `i128` all work out of the box. Arithmetic stays in the coefficient
/// type: no floating point anywhere.
pub trait Coeff:
    Copy + Eq + Debug + Display + Zero + One + Add<Output = Self> + Mul<Output = Self>
{
}

impl<T> Coeff for T where
    T: Copy + Eq + Debug + Display + Zero + One + Add<Output = T> + Mul<Output = T>
{
}

/// A single monomial: a coefficient attached to a power of x.
///
/// Zero coefficients are legal and preserved; nothing in the crate
/// canonicalizes them away.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Term<C> {
    /// Exponent of x, always non-negative.
    pub power: u32,
    /// Coefficient, any value including zero.
    pub coeff: C,
}

impl<C: Coeff> Term<C> {
    /// Creates the term `coeff * x^power`.
    #[must_use]
    pub fn new(coeff: C, power: u32) -> Self {
        Self { power, coeff }
    }

    /// Evaluates this term at `x`.
    #[must_use]
    pub fn eval(&self, x: C) -> C {
        self.coeff * pow_u32(x, self.power)
    }
}

impl<C: Coeff> Display for Term<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x^{}", self.coeff, self.power)
    }
}

/// Computes `base^exp` by repeated squaring.
///
/// Exact over any [`Coeff`], unlike a float `pow` which rounds once the
/// exponent grows.
#[must_use]
pub fn pow_u32<C: Coeff>(base: C, exp: u32) -> C {
    if exp == 0 {
        return C::one();
    }

    let mut result = C::one();
    let mut base = base;
    let mut exp = exp;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base;
        }
        base = base * base;
        exp >>= 1;
    }

    result
}

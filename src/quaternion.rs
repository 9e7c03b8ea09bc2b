//! An immutable quaternion `a + bi + cj + dk` with `f64` coefficients.
//!
//! # Examples
//!
//! ```
//! use persistent_bst::quaternion::Quaternion;
//!
//! assert_eq!(Quaternion::I * Quaternion::J, Quaternion::K);
//!
//! let q = Quaternion::new(0.0, -1.0, 0.0, 2.25);
//! assert_eq!(q.to_string(), "-i+2.25k");
//! assert_eq!(q.conjugate().coefficients(), [0.0, 1.0, 0.0, -2.25]);
//! ```

use std::convert::TryFrom;
use std::fmt;
use std::ops::{Add, Mul};

/// Errors triggered when building a [`Quaternion`] from loose coefficients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum QuaternionError {
    /// The coefficient slice did not hold exactly four values.
    #[error("a quaternion needs 4 coefficients, got {0}")]
    WrongCoefficientCount(usize),
}

/// A quaternion. Values never change once built; every operation returns a
/// new quaternion.
///
/// Equality compares the four coefficients exactly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quaternion {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Quaternion {
    /// The additive identity.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// The first imaginary unit.
    pub const I: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    /// The second imaginary unit.
    pub const J: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    /// The third imaginary unit.
    pub const K: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Builds `a + bi + cj + dk`.
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// The real part.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// The `i` coefficient.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// The `j` coefficient.
    pub fn c(&self) -> f64 {
        self.c
    }

    /// The `k` coefficient.
    pub fn d(&self) -> f64 {
        self.d
    }

    /// The coefficients in `[a, b, c, d]` order.
    pub fn coefficients(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Returns `a - bi - cj - dk`.
    pub fn conjugate(&self) -> Self {
        Self::new(self.a, -self.b, -self.c, -self.d)
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from([a, b, c, d]: [f64; 4]) -> Self {
        Self::new(a, b, c, d)
    }
}

impl TryFrom<&[f64]> for Quaternion {
    type Error = QuaternionError;

    fn try_from(coefficients: &[f64]) -> Result<Self, Self::Error> {
        match *coefficients {
            [a, b, c, d] => Ok(Self::new(a, b, c, d)),
            _ => Err(QuaternionError::WrongCoefficientCount(
                coefficients.len(),
            )),
        }
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(
            self.a + other.a,
            self.b + other.b,
            self.c + other.c,
            self.d + other.d,
        )
    }
}

/// The Hamilton product. Not commutative: `I * J == K` but `J * I == -K`.
impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let Self { a, b, c, d } = self;
        Self::new(
            a * other.a - b * other.b - c * other.c - d * other.d,
            a * other.b + b * other.a + c * other.d - d * other.c,
            a * other.c - b * other.d + c * other.a + d * other.b,
            a * other.d + b * other.c - c * other.b + d * other.a,
        )
    }
}

/// Writes nonzero terms only, joined by their signs. Coefficients print as
/// floats (`1.0`, `-2.5`) except imaginary coefficients of exactly 1 or -1,
/// which print as the bare unit (`i`, `-k`). All zeros prints `0`.
impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = Vec::with_capacity(4);

        if self.a != 0.0 {
            terms.push(format!("{:?}", self.a));
        }
        for &(coefficient, unit) in &[(self.b, 'i'), (self.c, 'j'), (self.d, 'k')] {
            if coefficient == 0.0 {
                continue;
            }
            let term = if coefficient == 1.0 {
                unit.to_string()
            } else if coefficient == -1.0 {
                format!("-{}", unit)
            } else {
                format!("{:?}{}", coefficient, unit)
            };
            terms.push(term);
        }

        if terms.is_empty() {
            return f.write_str("0");
        }
        f.write_str(&terms.join("+").replace("+-", "-"))
    }
}

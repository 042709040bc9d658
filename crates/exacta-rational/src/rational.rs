//! Exact rational numbers.
//!
//! This module provides the rational type underlying all Exacta linear
//! algebra: a signed arbitrary precision numerator over a positive
//! arbitrary precision denominator, kept in lowest terms at all times.

use dashu::base::{Gcd, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::{IBig, UBig};
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use thiserror::Error;

/// Errors from rational construction and arithmetic.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RationalError {
    /// A zero denominator at construction, or a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// A float with no exact rational value (NaN or infinity).
    #[error("cannot represent non-finite float {0} as a rational")]
    NonFinite(f64),
}

/// An exact rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator;
/// the sign lives in the numerator and zero is stored as 0/1. Every
/// operation returns a new, renormalized value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: IBig,
    denom: UBig,
}

impl Rational {
    /// Creates a rational from numerator and denominator.
    ///
    /// The sign is normalized into the numerator and the fraction is
    /// reduced by the gcd of its parts.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the denominator is zero.
    pub fn new(numerator: IBig, denominator: IBig) -> Result<Self, RationalError> {
        if denominator == IBig::ZERO {
            return Err(RationalError::DivisionByZero);
        }
        let numerator = if DashuSigned::is_negative(&denominator) {
            -numerator
        } else {
            numerator
        };
        Ok(Self::reduced(numerator, denominator.unsigned_abs()))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the denominator is zero.
    pub fn from_i64(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        Self::new(IBig::from(numerator), IBig::from(denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self {
            numer: IBig::from(n),
            denom: UBig::ONE,
        }
    }

    /// Creates a rational with the exact value of a finite float.
    ///
    /// Every finite `f64` is a dyadic rational (mantissa times a power of
    /// two), so the conversion itself is lossless. This is the boundary
    /// where approximate values enter exact arithmetic: the float is as
    /// close to the intended real number as `f64` allows, and everything
    /// downstream of this call is exact with respect to that float.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::NonFinite`] for NaN and infinities.
    pub fn from_f64(value: f64) -> Result<Self, RationalError> {
        if !value.is_finite() {
            return Err(RationalError::NonFinite(value));
        }
        let bits = value.to_bits();
        let negative = bits >> 63 != 0;
        let biased_exp = ((bits >> 52) & 0x7ff) as i64;
        let fraction = bits & ((1_u64 << 52) - 1);

        // IEEE 754 binary64: normals carry an implicit leading bit,
        // subnormals scale the bare fraction by 2^-1074.
        let (mantissa, exp) = if biased_exp == 0 {
            (fraction, -1074_i64)
        } else {
            (fraction | (1_u64 << 52), biased_exp - 1075)
        };

        let mut numer = IBig::from(mantissa);
        if negative {
            numer = -numer;
        }
        if exp >= 0 {
            Ok(Self {
                numer: numer << usize::try_from(exp).expect("exponent fits in usize"),
                denom: UBig::ONE,
            })
        } else {
            let denom = UBig::ONE << usize::try_from(-exp).expect("exponent fits in usize");
            Ok(Self::reduced(numer, denom))
        }
    }

    /// Reduces `numer/denom` to lowest terms. `denom` must be non-zero.
    fn reduced(numer: IBig, denom: UBig) -> Self {
        debug_assert!(denom != UBig::ZERO);
        let g = numer.clone().unsigned_abs().gcd(denom.clone());
        if g == UBig::ONE {
            Self { numer, denom }
        } else {
            // gcd(0, d) = d, so a zero numerator lands on the canonical 0/1.
            Self {
                numer: numer / IBig::from(g.clone()),
                denom: denom / g,
            }
        }
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &IBig {
        &self.numer
    }

    /// Returns the denominator. Always positive.
    #[must_use]
    pub fn denominator(&self) -> &UBig {
        &self.denom
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denom == UBig::ONE
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<IBig> {
        if self.is_integer() {
            Some(self.numer.clone())
        } else {
            None
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.numer == IBig::ZERO {
            0
        } else if DashuSigned::is_negative(&self.numer) {
            -1
        } else {
            1
        }
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.numer)
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the value is zero.
    pub fn recip(&self) -> Result<Self, RationalError> {
        if self.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        let denom = self.numer.clone().unsigned_abs();
        let mut numer = IBig::from(self.denom.clone());
        if self.is_negative() {
            numer = -numer;
        }
        Ok(Self { numer, denom })
    }

    /// Divides by another rational.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the divisor is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, RationalError> {
        Ok(self * &rhs.recip()?)
    }

    /// Computes self^exp for non-negative exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        // Parts are coprime, so the powers are too; no re-reduction needed.
        Self {
            numer: self.numer.pow(exp as usize),
            denom: self.denom.pow(exp as usize),
        }
    }

    /// Converts to a floating approximation (numerator / denominator).
    ///
    /// Intended for display and norm computation only; exactness-sensitive
    /// logic must stay in rational arithmetic.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let numer = self.numer.to_f64().value();
        let denom = IBig::from(self.denom.clone()).to_f64().value();
        numer / denom
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self {
            numer: IBig::ZERO,
            denom: UBig::ONE,
        }
    }

    fn is_zero(&self) -> bool {
        self.numer == IBig::ZERO
    }
}

impl One for Rational {
    fn one() -> Self {
        Self {
            numer: IBig::ONE,
            denom: UBig::ONE,
        }
    }

    fn is_one(&self) -> bool {
        self.numer == IBig::ONE && self.denom == UBig::ONE
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Cross-multiplied numerators; denominators are positive, so the
        // direction of the comparison is preserved.
        let lhs = self.numer.clone() * IBig::from(other.denom.clone());
        let rhs = other.numer.clone() * IBig::from(self.denom.clone());
        lhs.cmp(&rhs)
    }
}

// Arithmetic operations. The borrowed-operand impls hold the logic; the
// owned variants delegate.
impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Rational {
        let numer = self.numer.clone() * IBig::from(rhs.denom.clone())
            + rhs.numer.clone() * IBig::from(self.denom.clone());
        Rational::reduced(numer, self.denom.clone() * rhs.denom.clone())
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        &self + rhs
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Rational {
        let numer = self.numer.clone() * IBig::from(rhs.denom.clone())
            - rhs.numer.clone() * IBig::from(self.denom.clone());
        Rational::reduced(numer, self.denom.clone() * rhs.denom.clone())
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        &self - rhs
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Rational {
        Rational::reduced(
            self.numer.clone() * rhs.numer.clone(),
            self.denom.clone() * rhs.denom.clone(),
        )
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        &self * rhs
    }
}

impl Div for &Rational {
    type Output = Rational;

    /// # Panics
    ///
    /// Panics if `rhs` is zero. Use [`Rational::checked_div`] to report the
    /// failure to the caller instead.
    fn div(self, rhs: Self) -> Rational {
        self.checked_div(rhs).expect("division by zero")
    }
}

impl Div for Rational {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero. Use [`Rational::checked_div`] to report the
    /// failure to the caller instead.
    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numer: -self.numer.clone(),
            denom: self.denom.clone(),
        }
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(i64::from(n))
    }
}

impl From<IBig> for Rational {
    fn from(n: IBig) -> Self {
        Self {
            numer: n,
            denom: UBig::ONE,
        }
    }
}

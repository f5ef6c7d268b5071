use ark_ff::{Field, PrimeField, Zero};
use std::ops::{Add, Mul, Sub};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PolyError {
    #[error("division by the zero polynomial")]
    DivisionByZero,
}

/// Dense univariate polynomial over a prime field.
///
/// Coefficients are stored in ascending power order with trailing zeros
/// trimmed, so the empty vector is the zero polynomial and the last entry
/// of a nonzero polynomial is its leading coefficient. The descending
/// view consumed by the reference-string inner products is produced in
/// exactly one place, [`Poly::coefficients_descending`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poly<F: PrimeField> {
    coeffs: Vec<F>,
}

impl<F: PrimeField> Poly<F> {
    /// Builds a polynomial from ascending-order coefficients, trimming
    /// into canonical form.
    pub fn new(mut coeffs: Vec<F>) -> Self {
        while coeffs.last().map_or(false, |c| c.is_zero()) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    pub fn constant(value: F) -> Self {
        Self::new(vec![value])
    }

    /// `c0 + c1·x`.
    pub fn linear(c0: F, c1: F) -> Self {
        Self::new(vec![c0, c1])
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree of the polynomial. The zero polynomial reports 0, same as
    /// a constant; disambiguate with [`Poly::is_zero`].
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Canonical ascending-order coefficient slice.
    pub fn coefficients(&self) -> &[F] {
        &self.coeffs
    }

    /// Evaluates at `x` by Horner's rule, folding coefficients highest
    /// power first.
    pub fn evaluate(&self, x: F) -> F {
        let mut acc = F::zero();
        for coeff in self.coeffs.iter().rev() {
            acc = acc * x + *coeff;
        }
        acc
    }

    /// Multiplies every coefficient by `scalar`.
    pub fn scale(&self, scalar: F) -> Self {
        if scalar.is_zero() {
            return Self::zero();
        }
        // nonzero scalar cannot introduce a trailing zero
        Self {
            coeffs: self.coeffs.iter().map(|c| *c * scalar).collect(),
        }
    }

    /// Coefficients in descending power order, left-padded with zeros to
    /// `padded_len`.
    ///
    /// This is the wire contract toward the structured reference string:
    /// entry `k` of the result multiplies the SRS element carrying
    /// `τ^(padded_len − 1 − k)`.
    pub fn coefficients_descending(&self, padded_len: usize) -> Vec<F> {
        debug_assert!(
            self.coeffs.len() <= padded_len,
            "polynomial of degree {} does not fit {} SRS slots",
            self.degree(),
            padded_len
        );
        let mut out = vec![F::zero(); padded_len.saturating_sub(self.coeffs.len())];
        out.extend(self.coeffs.iter().rev().copied());
        out
    }

    /// Long division: returns `(quotient, remainder)` with
    /// `self = divisor · quotient + remainder` and
    /// `deg(remainder) < deg(divisor)`.
    pub fn divide_with_remainder(&self, divisor: &Self) -> Result<(Self, Self), PolyError> {
        if divisor.is_zero() {
            return Err(PolyError::DivisionByZero);
        }
        if self.is_zero() || self.degree() < divisor.degree() {
            return Ok((Self::zero(), self.clone()));
        }

        let divisor_degree = divisor.degree();
        let leading_inv = divisor
            .coeffs
            .last()
            .expect("nonzero divisor has a leading coefficient")
            .inverse()
            .expect("leading coefficient of a canonical polynomial is nonzero");

        let mut remainder = self.clone();
        let mut quotient = vec![F::zero(); self.degree() - divisor_degree + 1];

        while !remainder.is_zero() && remainder.degree() >= divisor_degree {
            let shift = remainder.degree() - divisor_degree;
            let lead = *remainder
                .coeffs
                .last()
                .expect("loop guard keeps the remainder nonzero");
            let factor = lead * leading_inv;
            quotient[shift] += factor;

            // subtract factor·x^shift·divisor; the leading term cancels,
            // so the degree drops every iteration
            let mut next = remainder.coeffs;
            for (i, d) in divisor.coeffs.iter().enumerate() {
                next[shift + i] -= factor * *d;
            }
            remainder = Self::new(next);
        }

        Ok((Self::new(quotient), remainder))
    }
}

impl<F: PrimeField> Add for Poly<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let (mut longer, shorter) = if self.coeffs.len() >= rhs.coeffs.len() {
            (self.coeffs, rhs.coeffs)
        } else {
            (rhs.coeffs, self.coeffs)
        };
        for (i, c) in shorter.iter().enumerate() {
            longer[i] += *c;
        }
        Self::new(longer)
    }
}

impl<F: PrimeField> Sub for Poly<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut coeffs = self.coeffs;
        if coeffs.len() < rhs.coeffs.len() {
            coeffs.resize(rhs.coeffs.len(), F::zero());
        }
        for (i, c) in rhs.coeffs.iter().enumerate() {
            coeffs[i] -= *c;
        }
        Self::new(coeffs)
    }
}

impl<F: PrimeField> Mul for Poly<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }
        let mut coeffs = vec![F::zero(); self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += *a * *b;
            }
        }
        Self::new(coeffs)
    }
}

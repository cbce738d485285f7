//! Polynomials over [`ModulusGf`]

use super::modulus_gf::ModulusGf;
use crate::{Error, Result};

/// Coefficients are stored highest degree first with leading zeros
/// stripped; the zero polynomial is `[0]`.
#[derive(Debug, Clone)]
pub(crate) struct ModulusPoly<'a> {
    field: &'a ModulusGf,
    coefficients: Vec<u32>,
}

impl<'a> ModulusPoly<'a> {
    pub(crate) fn new(field: &'a ModulusGf, coefficients: Vec<u32>) -> Self {
        let first_non_zero = coefficients.iter().position(|&c| c != 0);
        let coefficients = match first_non_zero {
            Some(0) => coefficients,
            Some(start) => coefficients[start..].to_vec(),
            None => vec![0],
        };
        Self {
            field,
            coefficients,
        }
    }

    pub(crate) fn coefficients(&self) -> &[u32] {
        &self.coefficients
    }

    pub(crate) fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.coefficients[0] == 0
    }

    /// Coefficient of the `x^degree` term
    pub(crate) fn coefficient(&self, degree: usize) -> u32 {
        self.coefficients
            .len()
            .checked_sub(1 + degree)
            .map_or(0, |index| self.coefficients[index])
    }

    pub(crate) fn evaluate_at(&self, a: u32) -> u32 {
        if a == 0 {
            return self.coefficient(0);
        }
        if a == 1 {
            return self
                .coefficients
                .iter()
                .fold(0, |sum, &c| self.field.add(sum, c));
        }
        self.coefficients
            .iter()
            .fold(0, |result, &c| self.field.add(self.field.multiply(a, result), c))
    }

    pub(crate) fn add(&self, other: &ModulusPoly<'a>) -> ModulusPoly<'a> {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        let (smaller, larger) = if self.coefficients.len() > other.coefficients.len() {
            (&other.coefficients, &self.coefficients)
        } else {
            (&self.coefficients, &other.coefficients)
        };
        let length_diff = larger.len() - smaller.len();
        let mut sum = larger[..length_diff].to_vec();
        sum.extend(
            smaller
                .iter()
                .zip(&larger[length_diff..])
                .map(|(&a, &b)| self.field.add(a, b)),
        );
        ModulusPoly::new(self.field, sum)
    }

    pub(crate) fn subtract(&self, other: &ModulusPoly<'a>) -> ModulusPoly<'a> {
        if other.is_zero() {
            return self.clone();
        }
        self.add(&other.negative())
    }

    pub(crate) fn multiply(&self, other: &ModulusPoly<'a>) -> ModulusPoly<'a> {
        if self.is_zero() || other.is_zero() {
            return self.field.zero();
        }
        let mut product = vec![0; self.coefficients.len() + other.coefficients.len() - 1];
        for (i, &a) in self.coefficients.iter().enumerate() {
            for (j, &b) in other.coefficients.iter().enumerate() {
                product[i + j] = self.field.add(product[i + j], self.field.multiply(a, b));
            }
        }
        ModulusPoly::new(self.field, product)
    }

    pub(crate) fn negative(&self) -> ModulusPoly<'a> {
        let negated = self
            .coefficients
            .iter()
            .map(|&c| self.field.subtract(0, c))
            .collect();
        ModulusPoly::new(self.field, negated)
    }

    pub(crate) fn multiply_scalar(&self, scalar: u32) -> ModulusPoly<'a> {
        match scalar {
            0 => self.field.zero(),
            1 => self.clone(),
            _ => ModulusPoly::new(
                self.field,
                self.coefficients
                    .iter()
                    .map(|&c| self.field.multiply(c, scalar))
                    .collect(),
            ),
        }
    }

    pub(crate) fn multiply_by_monomial(&self, degree: usize, coefficient: u32) -> ModulusPoly<'a> {
        if coefficient == 0 {
            return self.field.zero();
        }
        let mut product: Vec<u32> = self
            .coefficients
            .iter()
            .map(|&c| self.field.multiply(c, coefficient))
            .collect();
        product.resize(self.coefficients.len() + degree, 0);
        ModulusPoly::new(self.field, product)
    }

    /// Long division, returning quotient and remainder
    pub(crate) fn divide(&self, other: &ModulusPoly<'a>) -> Result<(ModulusPoly<'a>, ModulusPoly<'a>)> {
        if other.is_zero() {
            return Err(Error::Checksum);
        }
        let leading_inverse = self.field.inverse(other.coefficient(other.degree()))?;
        let mut quotient = self.field.zero();
        let mut remainder = self.clone();
        while remainder.degree() >= other.degree() && !remainder.is_zero() {
            let degree_diff = remainder.degree() - other.degree();
            let scale = self
                .field
                .multiply(remainder.coefficient(remainder.degree()), leading_inverse);
            quotient = quotient.add(&self.field.build_monomial(degree_diff, scale));
            remainder = remainder.subtract(&other.multiply_by_monomial(degree_diff, scale));
        }
        Ok((quotient, remainder))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf417::ec::modulus_gf::PDF417_GF;

    fn poly(coefficients: &[u32]) -> ModulusPoly<'static> {
        ModulusPoly::new(&PDF417_GF, coefficients.to_vec())
    }

    #[test]
    fn test_leading_zeros_are_stripped() {
        assert_eq!(poly(&[0, 0, 5, 1]).coefficients(), &[5, 1]);
        assert_eq!(poly(&[0, 0]).coefficients(), &[0]);
        assert!(poly(&[0]).is_zero());
        assert_eq!(poly(&[5, 1]).coefficient(1), 5);
        assert_eq!(poly(&[5, 1]).coefficient(7), 0);
    }

    #[test]
    fn test_evaluate_at() {
        // 2x^2 + 3x + 4
        let p = poly(&[2, 3, 4]);
        assert_eq!(p.evaluate_at(0), 4);
        assert_eq!(p.evaluate_at(1), 9);
        assert_eq!(p.evaluate_at(10), 234);
        assert_eq!(p.evaluate_at(100), (2 * 10000 + 300 + 4) % 929);
    }

    #[test]
    fn test_add_subtract_multiply() {
        let a = poly(&[1, 2]);
        let b = poly(&[1, 0, 928]);
        assert_eq!(a.add(&b).coefficients(), &[1, 1, 1]);
        assert_eq!(a.subtract(&a).coefficients(), &[0]);
        // (x + 2)(x - 2) = x^2 - 4
        assert_eq!(a.multiply(&poly(&[1, 927])).coefficients(), &[1, 0, 925]);
        assert_eq!(a.multiply_by_monomial(2, 3).coefficients(), &[3, 6, 0, 0]);
        assert_eq!(a.multiply_scalar(0).coefficients(), &[0]);
    }

    #[test]
    fn test_divide() {
        // x^2 - 4 = (x + 2)(x - 2) + 0, x^2 - 3 leaves 1
        let (quotient, remainder) = poly(&[1, 0, 925]).divide(&poly(&[1, 2])).unwrap();
        assert_eq!(quotient.coefficients(), &[1, 927]);
        assert!(remainder.is_zero());
        let (_, remainder) = poly(&[1, 0, 926]).divide(&poly(&[1, 2])).unwrap();
        assert_eq!(remainder.coefficients(), &[1]);
        assert!(poly(&[1]).divide(&poly(&[0])).is_err());
    }
}

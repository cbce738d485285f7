//! Arithmetic in GF(929)

use once_cell::sync::Lazy;

use super::modulus_poly::ModulusPoly;
use crate::{Error, Result};

/// The field PDF417 error correction works in: integers mod 929 with 3 as
/// primitive element.
pub(crate) static PDF417_GF: Lazy<ModulusGf> = Lazy::new(|| ModulusGf::new(929, 3));

#[derive(Debug)]
pub(crate) struct ModulusGf {
    exp_table: Vec<u32>,
    log_table: Vec<u32>,
    modulus: u32,
}

impl ModulusGf {
    fn new(modulus: u32, generator: u32) -> Self {
        let size = modulus as usize;
        let mut exp_table = vec![0; size];
        let mut log_table = vec![0; size];
        let mut x = 1;
        for entry in exp_table.iter_mut() {
            *entry = x;
            x = (x * generator) % modulus;
        }
        for (i, &value) in exp_table.iter().enumerate().take(size - 1) {
            log_table[value as usize] = i as u32;
        }
        Self {
            exp_table,
            log_table,
            modulus,
        }
    }

    pub(crate) fn zero(&self) -> ModulusPoly<'_> {
        ModulusPoly::new(self, vec![0])
    }

    pub(crate) fn one(&self) -> ModulusPoly<'_> {
        ModulusPoly::new(self, vec![1])
    }

    pub(crate) fn build_monomial(&self, degree: usize, coefficient: u32) -> ModulusPoly<'_> {
        if coefficient == 0 {
            return self.zero();
        }
        let mut coefficients = vec![0; degree + 1];
        coefficients[0] = coefficient;
        ModulusPoly::new(self, coefficients)
    }

    pub(crate) fn add(&self, a: u32, b: u32) -> u32 {
        (a + b) % self.modulus
    }

    pub(crate) fn subtract(&self, a: u32, b: u32) -> u32 {
        (self.modulus + a - b) % self.modulus
    }

    pub(crate) fn exp(&self, a: usize) -> u32 {
        self.exp_table[a % (self.modulus as usize - 1)]
    }

    pub(crate) fn log(&self, a: u32) -> Result<u32> {
        if a == 0 {
            return Err(Error::Checksum);
        }
        Ok(self.log_table[a as usize])
    }

    pub(crate) fn inverse(&self, a: u32) -> Result<u32> {
        let log = self.log(a)?;
        Ok(self.exp_table[(self.modulus - log - 1) as usize])
    }

    pub(crate) fn multiply(&self, a: u32, b: u32) -> u32 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_sum = self.log_table[a as usize] + self.log_table[b as usize];
        self.exp_table[(log_sum % (self.modulus - 1)) as usize]
    }

    pub(crate) fn size(&self) -> u32 {
        self.modulus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_cycles_through_field() {
        let field = &*PDF417_GF;
        assert_eq!(field.exp(0), 1);
        assert_eq!(field.exp(1), 3);
        assert_eq!(field.exp(928), 1);
        for a in 1..field.size() {
            assert_eq!(field.exp(field.log(a).unwrap() as usize), a);
        }
    }

    #[test]
    fn test_inverse() {
        let field = &*PDF417_GF;
        for a in [1, 2, 3, 500, 928] {
            assert_eq!(field.multiply(a, field.inverse(a).unwrap()), 1);
        }
        assert_eq!(field.inverse(0), Err(Error::Checksum));
    }

    #[test]
    fn test_add_and_subtract_wrap() {
        let field = &*PDF417_GF;
        assert_eq!(field.add(900, 100), 71);
        assert_eq!(field.subtract(5, 10), 924);
        assert_eq!(field.multiply(0, 77), 0);
    }
}

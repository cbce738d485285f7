//! Reed-Solomon decoding and encoding over GF(929)

use super::modulus_gf::{ModulusGf, PDF417_GF};
use super::modulus_poly::ModulusPoly;
use crate::{Error, Result};

/// Correct `received` in place, where the last `num_ec_codewords` entries are
/// error correction codewords. Returns the number of corrected codewords.
pub(crate) fn decode(received: &mut [u32], num_ec_codewords: usize) -> Result<usize> {
    let field: &ModulusGf = &PDF417_GF;
    let poly = ModulusPoly::new(field, received.to_vec());
    let mut syndromes = vec![0; num_ec_codewords];
    let mut error = false;
    for i in (1..=num_ec_codewords).rev() {
        let eval = poly.evaluate_at(field.exp(i));
        syndromes[num_ec_codewords - i] = eval;
        if eval != 0 {
            error = true;
        }
    }
    if !error {
        return Ok(0);
    }

    let syndrome = ModulusPoly::new(field, syndromes);
    let (sigma, omega) =
        run_euclidean_algorithm(field.build_monomial(num_ec_codewords, 1), syndrome, num_ec_codewords)?;
    let error_locations = find_error_locations(field, &sigma)?;
    let error_magnitudes = find_error_magnitudes(field, &omega, &sigma, &error_locations)?;

    for (&location, &magnitude) in error_locations.iter().zip(&error_magnitudes) {
        let position = received.len() as i64 - 1 - i64::from(field.log(location)?);
        let Ok(position) = usize::try_from(position) else {
            return Err(Error::Checksum);
        };
        received[position] = field.subtract(received[position], magnitude);
    }
    Ok(error_locations.len())
}

fn run_euclidean_algorithm<'a>(
    a: ModulusPoly<'a>,
    b: ModulusPoly<'a>,
    r_degree: usize,
) -> Result<(ModulusPoly<'a>, ModulusPoly<'a>)> {
    let field = &*PDF417_GF;
    let (mut r_last, mut r) = if a.degree() < b.degree() { (b, a) } else { (a, b) };
    let mut t_last = field.zero();
    let mut t = field.one();

    while r.degree() >= r_degree / 2 {
        if r.is_zero() {
            return Err(Error::Checksum);
        }
        let r_last_last = std::mem::replace(&mut r_last, r);
        let t_last_last = std::mem::replace(&mut t_last, t);
        let (q, remainder) = r_last_last.divide(&r_last)?;
        r = remainder;
        t = q.multiply(&t_last).subtract(&t_last_last).negative();
    }

    let sigma_tilde_at_zero = t.coefficient(0);
    if sigma_tilde_at_zero == 0 {
        return Err(Error::Checksum);
    }
    let inverse = field.inverse(sigma_tilde_at_zero)?;
    Ok((t.multiply_scalar(inverse), r.multiply_scalar(inverse)))
}

/// Chien search: the roots of the error locator are the inverses of the
/// error locations.
fn find_error_locations(field: &ModulusGf, error_locator: &ModulusPoly<'_>) -> Result<Vec<u32>> {
    let num_errors = error_locator.degree();
    let mut result = Vec::with_capacity(num_errors);
    for i in 1..field.size() {
        if result.len() == num_errors {
            break;
        }
        if error_locator.evaluate_at(i) == 0 {
            result.push(field.inverse(i)?);
        }
    }
    if result.len() != num_errors {
        return Err(Error::Checksum);
    }
    Ok(result)
}

/// Forney's formula
fn find_error_magnitudes(
    field: &ModulusGf,
    error_evaluator: &ModulusPoly<'_>,
    error_locator: &ModulusPoly<'_>,
    error_locations: &[u32],
) -> Result<Vec<u32>> {
    let degree = error_locator.degree();
    if degree < 1 {
        return Ok(Vec::new());
    }
    let mut formal_derivative = vec![0; degree];
    for i in 1..=degree {
        formal_derivative[degree - i] = field.multiply(i as u32, error_locator.coefficient(i));
    }
    let formal_derivative = ModulusPoly::new(field, formal_derivative);

    error_locations
        .iter()
        .map(|&location| {
            let xi_inverse = field.inverse(location)?;
            let numerator = field.subtract(0, error_evaluator.evaluate_at(xi_inverse));
            let denominator = field.inverse(formal_derivative.evaluate_at(xi_inverse))?;
            Ok(field.multiply(numerator, denominator))
        })
        .collect()
}

/// Error correction codewords for `data` with `num_ec_codewords` check
/// symbols, highest degree first.
///
/// The generator polynomial has roots 3^1 to 3^k, the same points the
/// decoder evaluates its syndromes at.
pub(crate) fn encode(data: &[u32], num_ec_codewords: usize) -> Result<Vec<u32>> {
    let field = &*PDF417_GF;
    let mut generator = field.one();
    for i in 1..=num_ec_codewords {
        let root = field.exp(i);
        generator = generator.multiply(&ModulusPoly::new(field, vec![1, field.subtract(0, root)]));
    }

    let message = ModulusPoly::new(field, data.to_vec()).multiply_by_monomial(num_ec_codewords, 1);
    let (_, remainder) = message.divide(&generator)?;
    let remainder = remainder.negative();

    let coefficients = remainder.coefficients();
    let mut ec = vec![0; num_ec_codewords];
    if !remainder.is_zero() {
        let padding = num_ec_codewords - coefficients.len();
        ec[padding..].copy_from_slice(coefficients);
    }
    Ok(ec)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(data: &[u32], num_ec_codewords: usize) -> Vec<u32> {
        let mut codewords = data.to_vec();
        codewords.extend(encode(data, num_ec_codewords).unwrap());
        codewords
    }

    fn sample_data() -> Vec<u32> {
        vec![10, 900, 214, 341, 449, 17, 900, 3, 800, 27]
    }

    #[test]
    fn test_encoded_symbol_has_zero_syndromes() {
        let mut codewords = encoded(&sample_data(), 8);
        let original = codewords.clone();
        assert_eq!(decode(&mut codewords, 8), Ok(0));
        assert_eq!(codewords, original);
    }

    #[test]
    fn test_corrects_up_to_half_the_ec_codewords() {
        let original = encoded(&sample_data(), 8);
        let mut damaged = original.clone();
        damaged[0] = 11;
        damaged[3] = 0;
        damaged[9] = 928;
        damaged[14] = 100;
        assert_eq!(decode(&mut damaged, 8), Ok(4));
        assert_eq!(damaged, original);
    }

    #[test]
    fn test_corrects_error_in_ec_codewords() {
        let original = encoded(&sample_data(), 2);
        let mut damaged = original.clone();
        let last = damaged.len() - 1;
        damaged[last] = (damaged[last] + 1) % 929;
        assert_eq!(decode(&mut damaged, 2), Ok(1));
        assert_eq!(damaged, original);
    }

    #[test]
    fn test_too_many_errors_are_not_restored() {
        let original = encoded(&sample_data(), 4);
        let mut damaged = original.clone();
        for (i, codeword) in damaged.iter_mut().enumerate().take(6) {
            *codeword = (*codeword + 1 + i as u32) % 929;
        }
        let result = decode(&mut damaged, 4);
        // with 6 errors and 4 check symbols a decoder may miscorrect, but it
        // must never report the damaged stream as the original
        assert!(result.is_err() || damaged != original);
    }
}

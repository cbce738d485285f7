//! PDF417 error correction
//!
//! Reed-Solomon codes over the prime field GF(929). A symbol at level `n`
//! carries `2 << n` check codewords and can repair up to half that many
//! errors.

mod error_correction;
mod modulus_gf;
mod modulus_poly;

pub(crate) use error_correction::{decode, encode};

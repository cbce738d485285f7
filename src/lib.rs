//! PDF417 Barcode Scanning Library
//!
//! This crate locates and decodes PDF417 stacked barcodes in grayscale
//! images. An image is thresholded into a [`BitMatrix`], the start and stop
//! guard patterns are traced to find each symbol, codewords are sampled
//! column by column, row numbers are reconciled from the row indicators,
//! Reed-Solomon error correction repairs the codeword stream and the
//! result is decompacted into bytes.
//!
//! # Example
//!
//! ```
//! use zedbar_pdf417::{Image, Pdf417Writer, Scanner};
//!
//! let bits = Pdf417Writer::new(4, 2)?.encode_bytes(b"hello, world")?;
//! let image = Image::from(&bits);
//!
//! let symbols = Scanner::new().scan(&image)?;
//! assert_eq!(symbols[0].text(), "hello, world");
//! # Ok::<(), zedbar_pdf417::Error>(())
//! ```

pub mod binarizer;
pub mod bit_matrix;
pub mod config;
pub mod error;
pub mod image;
pub mod pdf417;
pub mod point;
pub mod scanner;
pub mod symbol;

// Re-export main types
pub use binarizer::GlobalHistogramBinarizer;
pub use bit_matrix::BitMatrix;
pub use config::DecoderConfig;
pub use error::{Error, Result};
pub use image::{Image, LuminanceSource};
pub use pdf417::{Pdf417Reader, Pdf417Writer, ResultMetadata};
pub use point::ResultPoint;
pub use scanner::Scanner;
pub use symbol::{Symbol, SymbolType};

#[cfg(test)]
mod proptest_pdf417;
#[cfg(test)]
mod test_utils;

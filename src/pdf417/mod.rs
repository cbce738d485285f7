//! PDF417 detection and decoding
//!
//! The pipeline runs in stages: [`detector`] finds the guard patterns,
//! [`scanning_decoder`] samples the codewords between them and builds a
//! [`detection_result::DetectionResult`], whose row numbers are reconciled
//! before error correction ([`ec`]) and decompaction
//! ([`decoded_bit_stream_parser`]).

mod barcode_metadata;
mod barcode_value;
mod bounding_box;
mod codeword;
mod codeword_decoder;
mod common;
mod decoded_bit_stream_parser;
mod detection_result;
mod detection_result_column;
mod detector;
mod ec;
mod reader;
mod result_metadata;
mod row_indicator;
mod scanning_decoder;
mod tables;
mod writer;

pub use reader::Pdf417Reader;
pub use result_metadata::ResultMetadata;
pub use writer::Pdf417Writer;

#[cfg(test)]
pub(crate) use barcode_metadata::BarcodeMetadata;
#[cfg(test)]
pub(crate) use bounding_box::BoundingBox;
#[cfg(test)]
pub(crate) use codeword::Codeword;
#[cfg(test)]
pub(crate) use detection_result::DetectionResult;
#[cfg(test)]
pub(crate) use detection_result_column::{DetectionResultColumn, RowIndicator};
#[cfg(test)]
pub(crate) use writer::row_indicator_value;

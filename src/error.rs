//! Error types and handling

use crate::symbol::SymbolType;

/// Errors produced while locating or decoding a symbol
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No guard patterns, usable row indicators or codewords were found.
    #[error("no barcode found")]
    NotFound,
    /// The codeword stream does not follow the compaction rules.
    #[error("malformed codeword stream: {0}")]
    Format(&'static str),
    /// Error correction could not repair the symbol.
    #[error("error correction failed")]
    Checksum,
    /// The caller passed an argument the library cannot work with.
    #[error("invalid request: {0}")]
    Invalid(String),
    /// The symbology is known but this library has no decoder for it.
    #[error("unsupported symbology: {0}")]
    Unsupported(SymbolType),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(Error::NotFound.to_string(), "no barcode found");
        assert_eq!(
            Error::Format("numeric sentinel missing").to_string(),
            "malformed codeword stream: numeric sentinel missing"
        );
        assert_eq!(
            Error::Unsupported(SymbolType::QrCode).to_string(),
            "unsupported symbology: QR-Code"
        );
    }
}

//! Image scanner for finding barcodes in 2D images

use crate::config::DecoderConfig;
use crate::image::Image;
use crate::pdf417::Pdf417Reader;
use crate::symbol::{Symbol, SymbolType};
use crate::{Error, Result};

/// Image scanner that runs every enabled symbology over an image
///
/// # Example
/// ```no_run
/// use zedbar_pdf417::config::*;
/// use zedbar_pdf417::{DecoderConfig, Image, Scanner};
///
/// let config = DecoderConfig::new()
///     .find_multiple(Pdf417, true)
///     .test_inverted(true);
/// let scanner = Scanner::with_config(config);
///
/// let data = vec![0u8; 640 * 480];
/// let image = Image::from_gray(&data, 640, 480).unwrap();
/// let symbols = scanner.scan(&image).unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    config: DecoderConfig,
}

impl Scanner {
    /// Create a new image scanner with default configuration
    ///
    /// For more control over the configuration, use [`Scanner::with_config()`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Scanner { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Scan an image for barcodes
    ///
    /// An image without any symbol is not an error and yields an empty
    /// list; candidates that fail to decode are logged and dropped.
    /// Enabling a symbology that has no decoder fails with
    /// [`Error::Unsupported`].
    pub fn scan(&self, image: &Image) -> Result<Vec<Symbol>> {
        let symbols = self.scan_once(image)?;
        if symbols.is_empty() && self.config.test_inverted {
            log::debug!("nothing found, retrying on the inverted image");
            return self.scan_once(&image.inverted());
        }
        Ok(symbols)
    }

    fn scan_once(&self, image: &Image) -> Result<Vec<Symbol>> {
        let mut symbols = Vec::new();
        for symbol_type in SymbolType::ALL {
            if !self.config.is_enabled(symbol_type) {
                continue;
            }
            let found = match symbol_type {
                SymbolType::Pdf417 => {
                    let multiple = self.config.multiple.contains(&SymbolType::Pdf417);
                    Pdf417Reader::new().multiple(multiple).decode_luminance(image)
                }
                SymbolType::Codabar
                | SymbolType::Code128
                | SymbolType::Code39
                | SymbolType::DataMatrix
                | SymbolType::QrCode
                | SymbolType::Upca => Err(Error::Unsupported(symbol_type)),
            };
            match found {
                Ok(found) => symbols.extend(found),
                Err(Error::NotFound) => log::trace!("no {symbol_type} symbol found"),
                Err(error) => {
                    log::debug!("{symbol_type} decoding failed: {error}");
                    if matches!(error, Error::Unsupported(_)) {
                        return Err(error);
                    }
                }
            }
        }
        Ok(symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Pdf417, QrCode};

    #[test]
    fn test_blank_image_has_no_symbols() {
        let image = Image::from_gray(&[255; 64 * 48], 64, 48).unwrap();
        assert_eq!(Scanner::new().scan(&image), Ok(Vec::new()));
    }

    #[test]
    fn test_unsupported_symbology() {
        let image = Image::from_gray(&[255; 64 * 48], 64, 48).unwrap();
        let scanner = Scanner::with_config(DecoderConfig::new().enable(QrCode));
        assert_eq!(scanner.scan(&image), Err(Error::Unsupported(SymbolType::QrCode)));
    }

    #[test]
    fn test_nothing_enabled_finds_nothing() {
        let image = Image::from_gray(&[0; 16], 4, 4).unwrap();
        let scanner = Scanner::with_config(DecoderConfig::new().disable(Pdf417));
        assert_eq!(scanner.scan(&image), Ok(Vec::new()));
    }
}

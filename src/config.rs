//! Type-safe scanner configuration
//!
//! Each symbology is a zero-sized type, and options are only accepted for
//! symbologies whose capability trait allows them. The type system rules
//! out combinations the scanner cannot honour.
//!
//! # Examples
//!
//! ```
//! use zedbar_pdf417::config::*;
//! use zedbar_pdf417::DecoderConfig;
//!
//! let config = DecoderConfig::new()
//!     .find_multiple(Pdf417, true)    // ✓ PDF417 symbols can be collected
//!     .test_inverted(true);
//! assert!(config.is_multiple(Pdf417));
//! ```
//!
//! ```compile_fail
//! # use zedbar_pdf417::config::*;
//! # use zedbar_pdf417::DecoderConfig;
//! # let config = DecoderConfig::new();
//! // ❌ Code 39 has no multiple-symbol mode
//! config.find_multiple(Code39, true);
//! ```

use crate::SymbolType;
use std::collections::HashSet;

pub mod symbologies;

pub use symbologies::*;

/// Marker trait for symbologies that can be enabled/disabled
pub trait SupportsEnable: Symbology {}

/// Marker trait for symbologies that can report every symbol in an image
pub trait SupportsMultiple: Symbology {}

/// Base trait that all symbology types implement
pub trait Symbology: Sized {
    /// The corresponding SymbolType enum value
    const TYPE: SymbolType;

    /// Human-readable name
    const NAME: &'static str;
}

/// Configuration builder for [`crate::Scanner`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Which symbologies are enabled
    pub(crate) enabled: HashSet<SymbolType>,

    /// Symbologies that decode every symbol found rather than the first
    pub(crate) multiple: HashSet<SymbolType>,

    pub(crate) test_inverted: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DecoderConfig {
    /// Create a new configuration with PDF417 enabled, single-symbol mode
    /// and no inverted retry.
    pub fn new() -> Self {
        Self {
            enabled: HashSet::from([SymbolType::Pdf417]),
            multiple: HashSet::new(),
            test_inverted: false,
        }
    }

    /// Enable a symbology
    pub fn enable<S: Symbology + SupportsEnable>(mut self, _: S) -> Self {
        self.enabled.insert(S::TYPE);
        self
    }

    /// Disable a symbology
    pub fn disable<S: Symbology + SupportsEnable>(mut self, _: S) -> Self {
        self.enabled.remove(&S::TYPE);
        self
    }

    /// Disable all symbologies
    ///
    /// # Example
    /// ```
    /// use zedbar_pdf417::config::*;
    /// use zedbar_pdf417::DecoderConfig;
    ///
    /// let config = DecoderConfig::new().disable_all().enable(Pdf417);
    /// assert!(config.is_enabled(Pdf417::TYPE));
    /// ```
    pub fn disable_all(mut self) -> Self {
        self.enabled.clear();
        self
    }

    /// Check if a symbology is enabled
    pub fn is_enabled(&self, sym: SymbolType) -> bool {
        self.enabled.contains(&sym)
    }

    /// Decode every symbol of this symbology in the image instead of
    /// stopping at the first.
    pub fn find_multiple<S: Symbology + SupportsMultiple>(mut self, _: S, enabled: bool) -> Self {
        if enabled {
            self.multiple.insert(S::TYPE);
        } else {
            self.multiple.remove(&S::TYPE);
        }
        self
    }

    pub fn is_multiple<S: Symbology + SupportsMultiple>(&self, _: S) -> bool {
        self.multiple.contains(&S::TYPE)
    }

    /// Enable or disable inverted image testing
    ///
    /// When enabled, if no symbols are found in the normal image, the
    /// scanner will try again with an inverted (negative) image.
    pub fn test_inverted(mut self, enabled: bool) -> Self {
        self.test_inverted = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DecoderConfig::new();
        assert!(config.is_enabled(SymbolType::Pdf417));
        assert!(!config.is_enabled(SymbolType::QrCode));
        assert!(!config.is_multiple(Pdf417));
        assert!(!config.test_inverted);
        assert_eq!(config, DecoderConfig::default());
    }

    #[test]
    fn test_builder_pattern() {
        let config = DecoderConfig::new()
            .enable(Code128)
            .disable(Pdf417)
            .find_multiple(Pdf417, true)
            .test_inverted(true);

        assert!(config.is_enabled(SymbolType::Code128));
        assert!(!config.is_enabled(SymbolType::Pdf417));
        assert!(config.is_multiple(Pdf417));
        assert!(config.test_inverted);

        let config = config.find_multiple(Pdf417, false).disable_all();
        assert!(!config.is_multiple(Pdf417));
        assert!(config.enabled.is_empty());
    }

    #[test]
    fn test_every_symbol_type_has_a_symbology() {
        let types = [
            Codabar::TYPE,
            Code128::TYPE,
            Code39::TYPE,
            DataMatrix::TYPE,
            Pdf417::TYPE,
            QrCode::TYPE,
            Upca::TYPE,
        ];
        assert_eq!(types, SymbolType::ALL);
    }
}

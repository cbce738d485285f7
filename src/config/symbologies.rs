//! Symbology type definitions and capability implementations
//!
//! One zero-sized type per member of the closed [`SymbolType`] set.

use super::*;

/// Codabar (used in libraries, blood banks)
#[derive(Debug, Clone, Copy)]
pub struct Codabar;

/// Code 128
#[derive(Debug, Clone, Copy)]
pub struct Code128;

/// Code 39
#[derive(Debug, Clone, Copy)]
pub struct Code39;

/// Data Matrix
#[derive(Debug, Clone, Copy)]
pub struct DataMatrix;

/// PDF417 stacked barcode
#[derive(Debug, Clone, Copy)]
pub struct Pdf417;

/// QR Code
#[derive(Debug, Clone, Copy)]
pub struct QrCode;

/// UPC-A barcode
#[derive(Debug, Clone, Copy)]
pub struct Upca;

impl Symbology for Codabar {
    const TYPE: SymbolType = SymbolType::Codabar;
    const NAME: &'static str = "Codabar";
}

impl Symbology for Code128 {
    const TYPE: SymbolType = SymbolType::Code128;
    const NAME: &'static str = "Code 128";
}

impl Symbology for Code39 {
    const TYPE: SymbolType = SymbolType::Code39;
    const NAME: &'static str = "Code 39";
}

impl Symbology for DataMatrix {
    const TYPE: SymbolType = SymbolType::DataMatrix;
    const NAME: &'static str = "Data Matrix";
}

impl Symbology for Pdf417 {
    const TYPE: SymbolType = SymbolType::Pdf417;
    const NAME: &'static str = "PDF417";
}

impl Symbology for QrCode {
    const TYPE: SymbolType = SymbolType::QrCode;
    const NAME: &'static str = "QR Code";
}

impl Symbology for Upca {
    const TYPE: SymbolType = SymbolType::Upca;
    const NAME: &'static str = "UPC-A";
}

// SupportsEnable - all symbologies can be enabled/disabled
impl SupportsEnable for Codabar {}
impl SupportsEnable for Code128 {}
impl SupportsEnable for Code39 {}
impl SupportsEnable for DataMatrix {}
impl SupportsEnable for Pdf417 {}
impl SupportsEnable for QrCode {}
impl SupportsEnable for Upca {}

// SupportsMultiple - stacked symbols found by guard pattern search
impl SupportsMultiple for Pdf417 {}

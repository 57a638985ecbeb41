//! Decoded text paired with the symbology it was read from

use super::Symbology;
use serde::{Deserialize, Serialize};

/// Raw decode handed over by the scanner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Decoded text
    pub text: String,
    /// Symbology the text was decoded from
    pub format: Symbology,
}

impl ScanResult {
    /// Create a scan result from decoded text and a vendor symbology tag
    pub fn new(text: impl Into<String>, format: &str) -> Self {
        Self {
            text: text.into(),
            format: Symbology::from_tag(format),
        }
    }

    /// Shorthand for a QR code scan
    pub fn qr(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: Symbology::QrCode,
        }
    }
}

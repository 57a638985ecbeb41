//! Barcode symbology tags reported by the scanner

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Barcode symbology reported by the scanner
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Symbology {
    /// QR code (the only symbology carrying structured payloads)
    QrCode,
    /// Data Matrix
    DataMatrix,
    /// UPC-A
    UpcA,
    /// UPC-E
    UpcE,
    /// EAN-8
    Ean8,
    /// EAN-13
    Ean13,
    /// Code 39
    Code39,
    /// Code 93
    Code93,
    /// Code 128
    Code128,
    /// Codabar
    Codabar,
    /// Interleaved 2 of 5
    Itf,
    /// GS1 DataBar (RSS-14)
    Rss14,
    /// PDF417
    Pdf417,
    /// GS1 DataBar Expanded
    RssExpanded,
    /// Aztec
    Aztec,
    /// MaxiCode
    MaxiCode,
    /// Any tag outside the known vendor set, kept verbatim
    Other(String),
}

/// Vendor tag, variant and display name for every known symbology
const TAGS: &[(&str, Symbology, &str)] = &[
    ("QR_CODE", Symbology::QrCode, "QR Code"),
    ("DATA_MATRIX", Symbology::DataMatrix, "Data Matrix"),
    ("UPC_A", Symbology::UpcA, "UPC-A"),
    ("UPC_E", Symbology::UpcE, "UPC-E"),
    ("EAN_8", Symbology::Ean8, "EAN-8"),
    ("EAN_13", Symbology::Ean13, "EAN-13"),
    ("CODE_39", Symbology::Code39, "Code 39"),
    ("CODE_93", Symbology::Code93, "Code 93"),
    ("CODE_128", Symbology::Code128, "Code 128"),
    ("CODABAR", Symbology::Codabar, "Codabar"),
    ("ITF", Symbology::Itf, "ITF"),
    ("RSS14", Symbology::Rss14, "RSS-14"),
    ("PDF417", Symbology::Pdf417, "PDF417"),
    ("RSS_EXPANDED", Symbology::RssExpanded, "RSS Expanded"),
    ("AZTEC", Symbology::Aztec, "Aztec"),
    ("MAXICODE", Symbology::MaxiCode, "MaxiCode"),
];

impl Symbology {
    /// Resolve a vendor tag (exact match); unknown tags become `Other`
    pub fn from_tag(tag: &str) -> Self {
        TAGS.iter()
            .find(|(t, _, _)| *t == tag)
            .map(|(_, s, _)| s.clone())
            .unwrap_or_else(|| Symbology::Other(tag.to_string()))
    }

    /// Vendor tag for this symbology
    pub fn tag(&self) -> &str {
        match self {
            Symbology::Other(tag) => tag,
            known => TAGS
                .iter()
                .find(|(_, s, _)| s == known)
                .map(|(t, _, _)| *t)
                .unwrap_or_default(),
        }
    }

    /// Human label for this symbology; unknown tags pass through unchanged
    pub fn display_name(&self) -> &str {
        match self {
            Symbology::Other(tag) => tag,
            known => TAGS
                .iter()
                .find(|(_, s, _)| s == known)
                .map(|(_, _, name)| *name)
                .unwrap_or_default(),
        }
    }

    /// Check if this is a QR code
    pub fn is_qr_code(&self) -> bool {
        matches!(self, Symbology::QrCode)
    }

    /// All known symbologies in vendor order
    pub fn known() -> impl Iterator<Item = Symbology> {
        TAGS.iter().map(|(_, s, _)| s.clone())
    }
}

impl FromStr for Symbology {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Symbology::from_tag(s))
    }
}

impl From<String> for Symbology {
    fn from(tag: String) -> Self {
        Symbology::from_tag(&tag)
    }
}

impl From<Symbology> for String {
    fn from(symbology: Symbology) -> Self {
        symbology.tag().to_string()
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

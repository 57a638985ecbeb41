//! Payload kinds assigned by the classifier

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic type of a decoded payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PayloadKind {
    /// Web link
    Uri,
    /// `tel:` phone number
    Tel,
    /// `sms:` / `smsto:` message
    Sms,
    /// `mailto:` / `MATMSG:` / `SMTP:` e-mail
    Mail,
    /// `geo:` coordinates
    Geo,
    /// `WIFI:` network credentials
    Wifi,
    /// MECARD, BIZCARD or vCard contact
    Contact,
    /// Anything else; offered as a search
    PlainSearch,
}

impl PayloadKind {
    /// Every kind, in classification priority order
    pub const ALL: [PayloadKind; 8] = [
        PayloadKind::Sms,
        PayloadKind::Tel,
        PayloadKind::Mail,
        PayloadKind::Geo,
        PayloadKind::Wifi,
        PayloadKind::Contact,
        PayloadKind::Uri,
        PayloadKind::PlainSearch,
    ];

    /// Short caption shown next to a result
    pub fn label(&self) -> &'static str {
        match self {
            PayloadKind::Uri => "URL",
            PayloadKind::Tel => "Phone",
            PayloadKind::Sms => "SMS",
            PayloadKind::Mail => "E-mail",
            PayloadKind::Geo => "Location",
            PayloadKind::Wifi => "Wi-Fi",
            PayloadKind::Contact => "Contact",
            PayloadKind::PlainSearch => "Text",
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//! Payload parsing
//!
//! Once a payload has been classified, these parsers pull its fields out:
//! - e-mail (`mailto:`, `MATMSG:`, `SMTP:`) into a [`MailRecord`]
//! - Wi-Fi credentials into a [`WifiRecord`]
//! - contact cards (MECARD, BIZCARD, vCard) into a [`ContactRecord`]
//! - SMS, phone and geo payloads by plain splitting
//!
//! Every extraction degrades to empty strings instead of failing.

/// Contact card parsing (MECARD, BIZCARD, vCard)
pub mod contact;
/// Marker-based field extraction
pub mod extract;
pub mod inline;
/// E-mail payload parsing
pub mod mail;
/// vCard collaborator trait and built-in reader
pub mod vcard;
/// Wi-Fi payload parsing
pub mod wifi;

pub use contact::{ContactFormat, parse_bday, parse_contact_with};
pub use extract::{extract_between, extract_until};
pub use inline::{parse_geo, parse_sms, parse_tel};
pub use mail::{MailFormat, parse_mail};
pub use vcard::{LineVcardParser, VcardError, VcardParser, VcardProperties, VcardValue};
pub use wifi::parse_wifi;

use crate::models::{ContactRecord, PayloadKind};

/// Parse a contact payload with the built-in vCard reader
pub fn parse_contact(data: &str) -> ContactRecord {
    contact::parse_contact_with(data, &LineVcardParser)
}

/// Render a classified payload on one line, using the built-in vCard reader
pub fn print_result(text: &str, kind: PayloadKind) -> String {
    PayloadParser::new().print_result(text, kind)
}

/// Payload parser holding the vCard reader used for contact cards
#[derive(Debug, Clone, Default)]
pub struct PayloadParser<V: VcardParser = LineVcardParser> {
    vcard: V,
}

impl PayloadParser<LineVcardParser> {
    /// Create a parser with the built-in vCard reader
    pub fn new() -> Self {
        Self {
            vcard: LineVcardParser,
        }
    }
}

impl<V: VcardParser> PayloadParser<V> {
    /// Create a parser reading vCards through `vcard`
    pub fn with_vcard_parser(vcard: V) -> Self {
        Self { vcard }
    }

    /// The vCard reader in use
    pub fn vcard_parser(&self) -> &V {
        &self.vcard
    }

    /// Parse a contact payload
    pub fn parse_contact(&self, data: &str) -> ContactRecord {
        contact::parse_contact_with(data, &self.vcard)
    }

    /// Render a classified payload on one line:
    /// - SMS: `{number} | {body}`
    /// - phone: the number
    /// - e-mail, Wi-Fi, contact: populated fields joined with ` | `
    /// - geo: coordinate components joined with ` | `
    /// - anything else: the text unchanged
    ///
    /// Fields are parsed from the trimmed text.
    pub fn print_result(&self, text: &str, kind: PayloadKind) -> String {
        let trimmed = text.trim();
        match kind {
            PayloadKind::Sms => parse_sms(trimmed).display(),
            PayloadKind::Tel => parse_tel(trimmed),
            PayloadKind::Mail => parse_mail(trimmed).display(),
            PayloadKind::Geo => parse_geo(trimmed).display(),
            PayloadKind::Wifi => parse_wifi(trimmed).display(),
            PayloadKind::Contact => self.parse_contact(trimmed).display(),
            PayloadKind::Uri | PayloadKind::PlainSearch => text.to_string(),
        }
    }
}

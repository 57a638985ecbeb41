//! Payload classification
//!
//! Assigns exactly one [`PayloadKind`] to a decoded string. Microformat
//! identifiers are only honoured for QR codes; every other symbology is
//! either a link or plain text.
//!
//! Rules are evaluated top to bottom against the trimmed, lower-cased text
//! and the first match wins. The QR gate applies to every rule alike.

/// Web link detection (URL parse + host/path pattern)
pub mod uri;

pub use uri::is_web_uri;

use crate::models::{PayloadKind, ScanResult, Symbology};

/// One classification rule: a set of identifier prefixes, plus an optional
/// `(begin, end)` envelope that matches on its own
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Kind assigned on match
    pub kind: PayloadKind,
    /// Lower-case identifier prefixes (any one matches)
    pub prefixes: &'static [&'static str],
    /// Lower-case `(starts_with, ends_with)` pair that also matches
    pub envelope: Option<(&'static str, &'static str)>,
}

impl Rule {
    fn matches(&self, lower: &str) -> bool {
        self.prefixes.iter().any(|p| lower.starts_with(p))
            || self
                .envelope
                .is_some_and(|(begin, end)| lower.starts_with(begin) && lower.ends_with(end))
    }
}

/// Microformat rules in priority order
pub const RULES: &[Rule] = &[
    Rule {
        kind: PayloadKind::Sms,
        prefixes: &["sms:", "smsto:"],
        envelope: None,
    },
    Rule {
        kind: PayloadKind::Tel,
        prefixes: &["tel:"],
        envelope: None,
    },
    Rule {
        kind: PayloadKind::Mail,
        prefixes: &["mailto:", "matmsg:", "smtp:"],
        envelope: None,
    },
    Rule {
        kind: PayloadKind::Geo,
        prefixes: &["geo:"],
        envelope: None,
    },
    Rule {
        kind: PayloadKind::Wifi,
        prefixes: &["wifi:"],
        envelope: None,
    },
    Rule {
        kind: PayloadKind::Contact,
        prefixes: &["bizcard:", "mecard:"],
        envelope: Some(("begin:vcard", "end:vcard")),
    },
];

/// Classify decoded text read from the given symbology
pub fn classify(text: &str, format: &Symbology) -> PayloadKind {
    let trimmed = text.trim();

    if format.is_qr_code() {
        let lower = trimmed.to_lowercase();
        if let Some(rule) = RULES.iter().find(|rule| rule.matches(&lower)) {
            tracing::debug!(kind = ?rule.kind, "matched microformat identifier");
            return rule.kind;
        }
    }

    let kind = if is_web_uri(trimmed) {
        PayloadKind::Uri
    } else {
        PayloadKind::PlainSearch
    };
    tracing::debug!(?kind, format = %format, "no microformat identifier");
    kind
}

/// Classify a scan result
pub fn classify_scan(scan: &ScanResult) -> PayloadKind {
    classify(&scan.text, &scan.format)
}

/// True when the text opens a vCard envelope (`BEGIN:VCARD ... END:VCARD`)
pub(crate) fn is_vcard_envelope(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    lower.starts_with("begin:vcard") && lower.ends_with("end:vcard")
}

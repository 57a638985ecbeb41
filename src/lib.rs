//! qr_payload - turn decoded barcode text into actionable results
//!
//! A scanner hands over decoded text and a symbology tag. This crate decides
//! what the text is (link, phone number, SMS, e-mail, location, Wi-Fi
//! credentials, contact card or plain text) and pulls out the fields a result
//! screen needs to act on it.
//!
//! Everything here is a pure function of its input: no I/O, no shared state.
//!
//! # Example
//! ```
//! use qr_payload::{PayloadKind, ScanResult, interpret};
//!
//! let result = interpret(&ScanResult::new("WIFI:T:WPA;S:mynet;P:pass;;", "QR_CODE"));
//! assert_eq!(result.kind, PayloadKind::Wifi);
//! assert_eq!(result.display, "WPA | mynet | pass");
//! ```

#![warn(missing_docs)]

/// Native action descriptions (open link, call, send SMS, ...)
pub mod actions;
/// Payload classification
pub mod classifier;
/// Environment-backed settings
pub mod config;
/// Classification and parsing composed into one result
pub mod interpret;
/// Core data structures (ScanResult, PayloadKind, records)
pub mod models;
/// Field extraction for each payload kind
pub mod parser;
/// Helpers for the `qrtool` binary (logging, batch files, summaries)
pub mod tools;

pub use actions::{Action, ActionConfig, actions_for};
pub use classifier::{classify, classify_scan, is_web_uri};
pub use interpret::{Interpretation, Interpreter, Payload, interpret};
pub use models::{
    ContactRecord, GeoRecord, MailRecord, PayloadKind, ScanResult, SmsRecord, Symbology,
    WifiRecord,
};
pub use parser::{
    LineVcardParser, PayloadParser, VcardError, VcardParser, VcardProperties, VcardValue,
    extract_between, parse_bday, parse_contact, parse_geo, parse_mail, parse_sms, parse_wifi,
    print_result,
};

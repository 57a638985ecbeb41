//! Classification and parsing composed into one result
//!
//! [`Interpreter`] runs the classifier, then the matching payload parser, and
//! returns everything a result screen needs: the kind, a one-line rendering
//! and the structured record. Every step is a pure function of the scan, so
//! batches are processed in parallel.

use crate::actions::{Action, ActionConfig, actions_for};
use crate::classifier::classify_scan;
use crate::models::{
    ContactRecord, GeoRecord, MailRecord, PayloadKind, ScanResult, SmsRecord, WifiRecord,
};
use crate::parser::{
    LineVcardParser, PayloadParser, VcardParser, parse_geo, parse_mail, parse_sms, parse_tel,
    parse_wifi,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Structured fields of a classified payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "record", rename_all = "snake_case")]
pub enum Payload {
    /// Links and plain text carry no fields
    None,
    /// SMS number and body
    Sms(SmsRecord),
    /// Phone number
    Tel(String),
    /// E-mail fields
    Mail(MailRecord),
    /// Coordinate components
    Geo(GeoRecord),
    /// Wi-Fi credentials
    Wifi(WifiRecord),
    /// Contact card fields
    Contact(ContactRecord),
}

/// Outcome of interpreting one scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    /// Original decoded text
    pub text: String,
    /// Assigned payload kind
    pub kind: PayloadKind,
    /// One-line rendering for display
    pub display: String,
    /// Structured fields
    pub payload: Payload,
}

/// Interpreter with an injectable vCard reader and action settings
#[derive(Debug, Clone)]
pub struct Interpreter<V: VcardParser = LineVcardParser> {
    parser: PayloadParser<V>,
    actions: ActionConfig,
}

impl Interpreter<LineVcardParser> {
    /// Create an interpreter with the built-in vCard reader and settings
    /// taken from the environment
    pub fn new() -> Self {
        Self {
            parser: PayloadParser::new(),
            actions: ActionConfig::from_env(),
        }
    }
}

impl Default for Interpreter<LineVcardParser> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VcardParser> Interpreter<V> {
    /// Create an interpreter reading vCards through `vcard`
    pub fn with_vcard_parser(vcard: V) -> Self {
        Self {
            parser: PayloadParser::with_vcard_parser(vcard),
            actions: ActionConfig::from_env(),
        }
    }

    /// Replace the action settings
    pub fn with_action_config(mut self, actions: ActionConfig) -> Self {
        self.actions = actions;
        self
    }

    /// Action settings in use
    pub fn action_config(&self) -> &ActionConfig {
        &self.actions
    }

    /// Classify and parse one scan
    pub fn interpret(&self, scan: &ScanResult) -> Interpretation {
        let kind = classify_scan(scan);
        let text = scan.text.trim();

        let payload = match kind {
            PayloadKind::Sms => Payload::Sms(parse_sms(text)),
            PayloadKind::Tel => Payload::Tel(parse_tel(text)),
            PayloadKind::Mail => Payload::Mail(parse_mail(text)),
            PayloadKind::Geo => Payload::Geo(parse_geo(text)),
            PayloadKind::Wifi => Payload::Wifi(parse_wifi(text)),
            PayloadKind::Contact => Payload::Contact(self.parser.parse_contact(text)),
            PayloadKind::Uri | PayloadKind::PlainSearch => Payload::None,
        };

        let display = match &payload {
            Payload::None => scan.text.clone(),
            Payload::Sms(sms) => sms.display(),
            Payload::Tel(number) => number.clone(),
            Payload::Mail(mail) => mail.display(),
            Payload::Geo(geo) => geo.display(),
            Payload::Wifi(wifi) => wifi.display(),
            Payload::Contact(contact) => contact.display(),
        };

        Interpretation {
            text: scan.text.clone(),
            kind,
            display,
            payload,
        }
    }

    /// Interpret a batch of scans in parallel; output order matches input
    pub fn interpret_batch(&self, scans: &[ScanResult]) -> Vec<Interpretation> {
        scans.par_iter().map(|scan| self.interpret(scan)).collect()
    }

    /// Actions a result screen offers for an interpretation
    pub fn actions(&self, interpretation: &Interpretation) -> Vec<Action> {
        actions_for(interpretation, &self.actions)
    }

    /// Render a classified payload on one line
    pub fn print_result(&self, text: &str, kind: PayloadKind) -> String {
        self.parser.print_result(text, kind)
    }
}

/// Interpret one scan with the default interpreter
pub fn interpret(scan: &ScanResult) -> Interpretation {
    Interpreter::new().interpret(scan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{VcardError, VcardProperties};

    #[test]
    fn test_interpret_wifi() {
        let result = interpret(&ScanResult::qr("WIFI:T:WPA;S:mynet;P:pass;;"));
        assert_eq!(result.kind, PayloadKind::Wifi);
        assert_eq!(result.display, "WPA | mynet | pass");
        assert_eq!(
            result.payload,
            Payload::Wifi(WifiRecord {
                security: "WPA".into(),
                ssid: "mynet".into(),
                password: "pass".into(),
            })
        );
    }

    #[test]
    fn test_interpret_non_qr_ignores_identifiers() {
        let result = interpret(&ScanResult::new("tel:5551234", "DATA_MATRIX"));
        assert_eq!(result.kind, PayloadKind::PlainSearch);
        assert_eq!(result.payload, Payload::None);
        assert_eq!(result.display, "tel:5551234");
    }

    #[test]
    fn test_display_matches_print_result() {
        let interpreter = Interpreter::new();
        for text in [
            "sms:555:hi",
            "tel:555",
            "MATMSG:TO:a@b.com;SUB:s;BODY:b;;",
            "geo:1,2",
            "WIFI:S:x;;",
            "MECARD:N:Doe,John;;",
            "example.com",
            "words",
            "tel:555\n",
            "  geo:1,2\r\n",
            " spaced words ",
        ] {
            let result = interpreter.interpret(&ScanResult::qr(text));
            assert_eq!(result.display, interpreter.print_result(text, result.kind));
        }
    }

    #[test]
    fn test_fields_exclude_surrounding_whitespace() {
        let interpreter = Interpreter::new();
        let tel = interpreter.interpret(&ScanResult::qr("tel:555\n"));
        assert_eq!(tel.payload, Payload::Tel("555".into()));
        assert_eq!(tel.display, "555");
        assert_eq!(tel.text, "tel:555\n");

        let sms = interpreter.interpret(&ScanResult::qr("sms:555:hi\r\n"));
        assert_eq!(sms.display, "555 | hi");

        let geo = interpreter.interpret(&ScanResult::qr(" geo:1,2 "));
        assert_eq!(geo.payload, Payload::Geo(GeoRecord(vec!["1".into(), "2".into()])));
    }

    #[test]
    fn test_batch_preserves_order() {
        let scans: Vec<ScanResult> = (0..64)
            .map(|i| ScanResult::qr(format!("tel:{i}")))
            .collect();
        let results = Interpreter::new().interpret_batch(&scans);
        assert_eq!(results.len(), 64);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.payload, Payload::Tel(i.to_string()));
        }
    }

    struct NoCards;

    impl VcardParser for NoCards {
        fn parse(&self, _raw: &str) -> Result<VcardProperties, VcardError> {
            Err(VcardError::MissingBegin)
        }
    }

    #[test]
    fn test_injected_vcard_parser() {
        let interpreter = Interpreter::with_vcard_parser(NoCards);
        let result = interpreter.interpret(&ScanResult::qr("BEGIN:VCARD\nFN:x\nEND:VCARD"));
        assert_eq!(result.kind, PayloadKind::Contact);
        assert_eq!(result.payload, Payload::Contact(ContactRecord::default()));
        assert_eq!(result.display, "");
    }

    #[test]
    fn test_payload_json_shape() {
        let result = interpret(&ScanResult::qr("tel:555"));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["kind"], "Tel");
        assert_eq!(json["payload"]["type"], "tel");
        assert_eq!(json["payload"]["record"], "555");
    }
}

use super::extract::{extract_between, split_identifier};
use super::vcard::{VcardParser, VcardProperties, VcardValue, split_components};
use crate::classifier::is_vcard_envelope;
use crate::models::ContactRecord;
use crate::models::records::FIELD_SEPARATOR;

/// Contact card microformats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFormat {
    /// `MECARD:N:..;TEL:..;;`
    MeCard,
    /// `BIZCARD:N:..;X:..;;`
    BizCard,
    /// `BEGIN:VCARD ... END:VCARD`
    VCard,
}

impl ContactFormat {
    /// Resolve a lower-case identifier
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        match identifier {
            "mecard" => Some(ContactFormat::MeCard),
            "bizcard" => Some(ContactFormat::BizCard),
            "vcard" => Some(ContactFormat::VCard),
            _ => None,
        }
    }

    /// Detect the format of a contact payload; a vCard envelope takes
    /// precedence over the leading identifier
    pub fn detect(data: &str) -> Option<Self> {
        if is_vcard_envelope(data) {
            return Some(ContactFormat::VCard);
        }
        Self::from_identifier(&split_identifier(data).0)
    }
}

/// Parse a contact payload, reading vCards through `vcard`.
///
/// Unknown formats and unreadable vCards give an empty record.
pub fn parse_contact_with<V: VcardParser + ?Sized>(data: &str, vcard: &V) -> ContactRecord {
    let Some(format) = ContactFormat::detect(data) else {
        tracing::debug!("unknown contact identifier");
        return ContactRecord::default();
    };
    let (_, rest) = split_identifier(data);

    match format {
        ContactFormat::MeCard => ContactRecord {
            name: join_name(&extract_between(rest, "N:", Some(";"))),
            tel: extract_between(rest, "TEL:", Some(";")),
            email: extract_between(rest, "EMAIL:", Some(";")),
            note: extract_between(rest, "NOTE:", Some(";")),
            bday: parse_bday(&extract_between(rest, "BDAY:", Some(";"))),
            address: extract_between(rest, "ADR:", Some(";")),
            url: extract_between(rest, "URL:", Some(";")),
            nickname: extract_between(rest, "NICKNAME:", Some(";")),
            ..Default::default()
        },
        ContactFormat::BizCard => {
            let full_name = format!(
                "{},{}",
                extract_between(rest, "N:", Some(";")),
                extract_between(rest, "X:", Some(";"))
            );
            ContactRecord {
                name: join_name(&full_name),
                job: extract_between(rest, "T:", Some(";")),
                company: extract_between(rest, "C:", Some(";")),
                address: extract_between(rest, "A:", Some(";")),
                tel: extract_between(rest, "B:", Some(";")),
                email: extract_between(rest, "E:", Some(";")),
                ..Default::default()
            }
        }
        ContactFormat::VCard => match vcard.parse(data.trim()) {
            Ok(properties) => contact_from_vcard(&properties),
            Err(err) => {
                tracing::warn!(error = %err, "unreadable vCard, returning empty contact");
                ContactRecord::default()
            }
        },
    }
}

fn contact_from_vcard(properties: &VcardProperties) -> ContactRecord {
    let field = |name: &str| properties.get(name).map(render_value).unwrap_or_default();

    ContactRecord {
        name: field("N"),
        formatted_name: field("FN"),
        tel: field("TEL"),
        email: field("EMAIL"),
        note: field("NOTE"),
        bday: parse_bday(&field("BDAY").replace('-', "")),
        address: field("ADR"),
        url: field("URL"),
        nickname: field("NICKNAME"),
        job: String::new(),
        company: field("ORG"),
        title: field("TITLE"),
    }
}

/// Structured values (`Doe;John;;;`) become space separated and escapes
/// are resolved; repeated properties are joined with the record separator
fn render_value(value: &VcardValue) -> String {
    match value {
        VcardValue::Single(v) => join_components(v),
        VcardValue::Multi(values) => values
            .iter()
            .map(|v| join_components(v))
            .filter(|v| !v.is_empty())
            .collect::<Vec<_>>()
            .join(FIELD_SEPARATOR),
    }
}

fn join_components(value: &str) -> String {
    join_parts(split_components(value).iter().map(String::as_str))
}

/// `Doe, John` -> `Doe John`
fn join_name(value: &str) -> String {
    join_parts(value.split(','))
}

fn join_parts<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `YYYYMMDD` -> `MM/DD/YYYY`; anything not exactly eight characters
/// gives an empty string
pub fn parse_bday(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() != 8 {
        return String::new();
    }
    let part = |range: std::ops::Range<usize>| chars[range].iter().collect::<String>();
    format!("{}/{}/{}", part(4..6), part(6..8), part(0..4))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::vcard::{LineVcardParser, VcardError};

    fn parse(data: &str) -> ContactRecord {
        parse_contact_with(data, &LineVcardParser)
    }

    /// Test double returning a fixed property set
    struct FixedVcard(VcardProperties);

    impl VcardParser for FixedVcard {
        fn parse(&self, _raw: &str) -> Result<VcardProperties, VcardError> {
            Ok(self.0.clone())
        }
    }

    struct FailingVcard;

    impl VcardParser for FailingVcard {
        fn parse(&self, _raw: &str) -> Result<VcardProperties, VcardError> {
            Err(VcardError::MissingEnd)
        }
    }

    const VCARD: &str = "BEGIN:VCARD\nVERSION:3.0\nEND:VCARD";

    #[test]
    fn test_mecard_name_and_tel() {
        let contact = parse("MECARD:N:Doe,John;TEL:555;;");
        assert_eq!(contact.name, "Doe John");
        assert_eq!(contact.tel, "555");
    }

    #[test]
    fn test_mecard_populates_only_present_fields() {
        let contact = parse(
            "MECARD:N:Doe, John;TEL:+420123;EMAIL:j@d.cz;NOTE:hi;BDAY:19900215;\
             ADR:Main St 1;URL:https://d.cz;NICKNAME:JD;;",
        );
        assert_eq!(
            contact,
            ContactRecord {
                name: "Doe John".into(),
                tel: "+420123".into(),
                email: "j@d.cz".into(),
                note: "hi".into(),
                bday: "02/15/1990".into(),
                address: "Main St 1".into(),
                url: "https://d.cz".into(),
                nickname: "JD".into(),
                ..Default::default()
            }
        );
        assert!(contact.formatted_name.is_empty());
        assert!(contact.company.is_empty());
    }

    #[test]
    fn test_mecard_bad_bday() {
        assert_eq!(parse("MECARD:N:X;BDAY:1990;;").bday, "");
    }

    #[test]
    fn test_bizcard() {
        let contact = parse(
            "BIZCARD:N:Sean;X:Owen;T:Software Engineer;C:Google;\
             A:76 9th Avenue, New York, NY 10011;B:+12125551212;E:srowen@google.com;;",
        );
        assert_eq!(contact.name, "Sean Owen");
        assert_eq!(contact.job, "Software Engineer");
        assert_eq!(contact.company, "Google");
        assert_eq!(contact.address, "76 9th Avenue, New York, NY 10011");
        assert_eq!(contact.tel, "+12125551212");
        assert_eq!(contact.email, "srowen@google.com");
    }

    #[test]
    fn test_bizcard_without_last_name() {
        assert_eq!(parse("BIZCARD:N:Sean;;").name, "Sean");
    }

    #[test]
    fn test_vcard_with_builtin_parser() {
        let card = "BEGIN:VCARD\r\nVERSION:3.0\r\nN:Doe;John;;;\r\nFN:John Doe\r\n\
                    ORG:Example Corp;R&D\r\nTITLE:Engineer\r\nTEL;TYPE=CELL:+1 555 1234\r\n\
                    TEL;TYPE=WORK:+1 555 9876\r\nADR:;;1 Main St;Springfield;;12345;USA\r\n\
                    EMAIL:john@example.com\r\nURL:https://example.com\r\nEND:VCARD\r\n";
        let contact = parse(card);
        assert_eq!(contact.name, "Doe John");
        assert_eq!(contact.formatted_name, "John Doe");
        assert_eq!(contact.company, "Example Corp R&D");
        assert_eq!(contact.title, "Engineer");
        assert_eq!(contact.tel, "+1 555 1234 | +1 555 9876");
        assert_eq!(contact.address, "1 Main St Springfield 12345 USA");
        assert_eq!(contact.email, "john@example.com");
        assert_eq!(contact.url, "https://example.com");
    }

    #[test]
    fn test_vcard_escaped_separator_stays_in_component() {
        let card = "BEGIN:VCARD\nVERSION:3.0\nORG:Bubba\\; Gump Co.;Shrimp\n\
                    ADR:;;12 Main St\\, Apt 4;Bayou;;;USA\nNOTE:line one\\nline two\nEND:VCARD";
        let contact = parse(card);
        assert_eq!(contact.company, "Bubba; Gump Co. Shrimp");
        assert_eq!(contact.address, "12 Main St, Apt 4 Bayou USA");
        assert_eq!(contact.note, "line one\nline two");
    }

    #[test]
    fn test_vcard_21_quoted_printable_keeps_other_fields() {
        let contact = parse(
            "BEGIN:VCARD\nVERSION:2.1\nN:Doe;John\nTEL:555\n\
             NOTE;ENCODING=QUOTED-PRINTABLE:first=\nsecond\nEND:VCARD",
        );
        assert_eq!(contact.name, "Doe John");
        assert_eq!(contact.tel, "555");
        assert_eq!(contact.note, "firstsecond");
    }

    #[test]
    fn test_vcard_with_injected_parser() {
        let mut props = VcardProperties::new();
        props.insert("N", "Novak;Jan");
        props.insert("EMAIL", "a@b.cz");
        props.insert("EMAIL", "");
        props.insert("EMAIL", "c@d.cz");
        props.insert("BDAY", "1985-04-12");

        let contact = parse_contact_with(VCARD, &FixedVcard(props));
        assert_eq!(contact.name, "Novak Jan");
        assert_eq!(contact.email, "a@b.cz | c@d.cz");
        assert_eq!(contact.bday, "04/12/1985");
        assert!(contact.tel.is_empty());
    }

    #[test]
    fn test_vcard_failure_gives_empty_record() {
        assert_eq!(parse_contact_with(VCARD, &FailingVcard), ContactRecord::default());
    }

    #[test]
    fn test_unknown_identifier() {
        assert_eq!(parse("NAMECARD:N:x;;"), ContactRecord::default());
        assert_eq!(parse(""), ContactRecord::default());
    }

    #[test]
    fn test_parse_bday() {
        assert_eq!(parse_bday("20140504"), "05/04/2014");
        assert_eq!(parse_bday("201405"), "");
        assert_eq!(parse_bday(""), "");
        assert_eq!(parse_bday("2014050412"), "");
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(ContactFormat::detect("mecard:N:x;;"), Some(ContactFormat::MeCard));
        assert_eq!(ContactFormat::detect("BIZCARD:N:x;;"), Some(ContactFormat::BizCard));
        assert_eq!(ContactFormat::detect(VCARD), Some(ContactFormat::VCard));
        assert_eq!(ContactFormat::detect("BEGIN:VCARD\nN:x"), None);
    }
}

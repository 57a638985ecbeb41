use super::extract::{extract_between, extract_until, split_identifier};
use crate::models::MailRecord;

/// E-mail microformats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailFormat {
    /// `mailto:addr?subject=..&body=..`
    MailTo,
    /// `MATMSG:TO:..;SUB:..;BODY:..;;`
    MatMsg,
    /// `SMTP:addr:subject:body`
    Smtp,
}

impl MailFormat {
    /// Resolve a lower-case identifier
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        match identifier {
            "mailto" => Some(MailFormat::MailTo),
            "matmsg" => Some(MailFormat::MatMsg),
            "smtp" => Some(MailFormat::Smtp),
            _ => None,
        }
    }
}

/// Parse an e-mail payload into `[address, subject, body]`.
///
/// Unknown identifiers give an empty record.
pub fn parse_mail(data: &str) -> MailRecord {
    let (identifier, rest) = split_identifier(data);

    let Some(format) = MailFormat::from_identifier(&identifier) else {
        tracing::debug!(%identifier, "unknown mail identifier");
        return MailRecord::default();
    };

    match format {
        MailFormat::MailTo => parse_mailto(rest),
        MailFormat::MatMsg => MailRecord {
            address: extract_between(rest, "TO:", Some(";")),
            subject: extract_between(rest, "SUB:", Some(";")),
            body: extract_between(rest, "BODY:", Some(";")),
        },
        MailFormat::Smtp => {
            let mut parts = rest.split(':');
            let address = parts.next().unwrap_or_default().trim().to_string();
            let subject = parts.next().unwrap_or_default().trim().to_string();
            let body = parts.collect::<Vec<_>>().join(":").trim().to_string();
            MailRecord {
                address,
                subject,
                body,
            }
        }
    }
}

fn parse_mailto(rest: &str) -> MailRecord {
    let (address, query) = match rest.split_once('?') {
        Some((address, query)) => (address, query),
        None => (rest, ""),
    };

    MailRecord {
        address: percent_decode(address.trim()),
        subject: percent_decode(&extract_until(query, "subject=", "&")),
        body: percent_decode(&extract_between(query, "body=", None)),
    }
}

/// Decode `%XX` escapes; text that does not decode to UTF-8 is kept as is
fn percent_decode(value: &str) -> String {
    match urlencoding::decode(value) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => value.to_string(),
    }
}

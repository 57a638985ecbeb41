//! Structured records extracted from microformat payloads
//!
//! Every record keeps missing fields as empty strings, so a partially
//! malformed payload still yields a record with all fields present.

use serde::{Deserialize, Serialize};

/// Separator used when a record is rendered on one line
pub const FIELD_SEPARATOR: &str = " | ";

fn join_non_empty<'a>(fields: impl IntoIterator<Item = &'a str>) -> String {
    fields
        .into_iter()
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join(FIELD_SEPARATOR)
}

/// E-mail fields, fixed positions regardless of source format
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailRecord {
    /// Recipient address
    pub address: String,
    /// Subject line
    pub subject: String,
    /// Message body
    pub body: String,
}

impl MailRecord {
    /// `[address, subject, body]`
    pub fn fields(&self) -> [&str; 3] {
        [self.address.as_str(), self.subject.as_str(), self.body.as_str()]
    }

    /// Non-empty fields joined on one line
    pub fn display(&self) -> String {
        join_non_empty(self.fields())
    }

    /// True when no field was extracted
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|f| f.is_empty())
    }
}

/// Wi-Fi network credentials
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiRecord {
    /// Security type (`WPA`, `WEP`, `nopass`, ...)
    pub security: String,
    /// Network name
    pub ssid: String,
    /// Network password
    pub password: String,
}

impl WifiRecord {
    /// `[security, ssid, password]`
    pub fn fields(&self) -> [&str; 3] {
        [self.security.as_str(), self.ssid.as_str(), self.password.as_str()]
    }

    /// Non-empty fields joined on one line
    pub fn display(&self) -> String {
        join_non_empty(self.fields())
    }
}

/// Coordinate components of a `geo:` payload, usually `[lat, lon]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeoRecord(pub Vec<String>);

impl GeoRecord {
    /// Components in payload order
    pub fn components(&self) -> &[String] {
        &self.0
    }

    /// Components rejoined with `,` (the form map and navigation apps accept)
    pub fn coordinates(&self) -> String {
        self.0.join(",")
    }

    /// Components joined on one line; empty components are kept
    pub fn display(&self) -> String {
        self.0.join(FIELD_SEPARATOR)
    }
}

/// Recipient number and message of an `sms:` payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsRecord {
    /// Phone number
    pub number: String,
    /// Message text (may itself contain `:`)
    pub body: String,
}

impl SmsRecord {
    /// `{number} | {body}`, always with the separator
    pub fn display(&self) -> String {
        format!("{}{}{}", self.number, FIELD_SEPARATOR, self.body)
    }
}

/// Contact card fields shared by MECARD, BIZCARD and vCard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Name
    pub name: String,
    /// Formatted full name (vCard `FN`)
    pub formatted_name: String,
    /// Phone number(s)
    pub tel: String,
    /// E-mail address(es)
    pub email: String,
    /// Free-form note
    pub note: String,
    /// Birthday as `MM/DD/YYYY`
    pub bday: String,
    /// Postal address
    pub address: String,
    /// Web address
    pub url: String,
    /// Nickname
    pub nickname: String,
    /// Job title (BIZCARD `T`)
    pub job: String,
    /// Company or organisation
    pub company: String,
    /// Title (vCard `TITLE`)
    pub title: String,
}

impl ContactRecord {
    /// Field names in declared order, matching [`ContactRecord::fields`]
    pub const FIELD_NAMES: [&'static str; 12] = [
        "name",
        "formatted_name",
        "tel",
        "email",
        "note",
        "bday",
        "address",
        "url",
        "nickname",
        "job",
        "company",
        "title",
    ];

    /// All fields in declared order
    pub fn fields(&self) -> [&str; 12] {
        [
            self.name.as_str(),
            self.formatted_name.as_str(),
            self.tel.as_str(),
            self.email.as_str(),
            self.note.as_str(),
            self.bday.as_str(),
            self.address.as_str(),
            self.url.as_str(),
            self.nickname.as_str(),
            self.job.as_str(),
            self.company.as_str(),
            self.title.as_str(),
        ]
    }

    /// `(name, value)` pairs for the populated fields only
    pub fn populated(&self) -> Vec<(&'static str, &str)> {
        Self::FIELD_NAMES
            .into_iter()
            .zip(self.fields())
            .filter(|(_, v)| !v.is_empty())
            .collect()
    }

    /// Populated fields joined on one line
    pub fn display(&self) -> String {
        join_non_empty(self.fields())
    }

    /// True when no field was extracted
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|f| f.is_empty())
    }
}

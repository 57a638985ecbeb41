//! vCard property extraction
//!
//! The contact parser only needs a handful of properties out of a vCard, so
//! it depends on the [`VcardParser`] trait rather than a concrete parser.
//! [`LineVcardParser`] is the built-in implementation: it unfolds RFC 6350
//! content lines and vCard 2.1 quoted-printable soft breaks, drops groups and
//! parameters, and collects repeated properties (several `TEL` lines, say)
//! into [`VcardValue::Multi`].
//!
//! Values are stored still escaped. Structured values (`N`, `ADR`, `ORG`)
//! are split with [`split_components`], which only breaks on unescaped `;`.

use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised while reading a vCard
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VcardError {
    /// First content line is not `BEGIN:VCARD`
    #[error("vCard does not start with BEGIN:VCARD")]
    MissingBegin,

    /// Last content line is not `END:VCARD`
    #[error("vCard is not terminated by END:VCARD")]
    MissingEnd,

    /// A second `BEGIN:VCARD` before the first card ended
    #[error("malformed vCard line {line}: {content:?}")]
    MalformedLine {
        /// 1-based line number in the raw text
        line: usize,
        /// Offending (unfolded) line
        content: String,
    },
}

/// Value of one vCard property, escapes intact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcardValue {
    /// Property present once
    Single(String),
    /// Property repeated; values in card order
    Multi(Vec<String>),
}

impl VcardValue {
    fn push(&mut self, value: String) {
        match self {
            VcardValue::Single(first) => {
                let first = std::mem::take(first);
                *self = VcardValue::Multi(vec![first, value]);
            }
            VcardValue::Multi(values) => values.push(value),
        }
    }
}

/// Properties of a card keyed by upper-case name (`N`, `TEL`, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VcardProperties {
    properties: BTreeMap<String, VcardValue>,
}

impl VcardProperties {
    /// Create an empty property set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value; a second value for the same name turns it into `Multi`
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        let name = name.to_ascii_uppercase();
        let value = value.into();
        match self.properties.get_mut(&name) {
            Some(existing) => existing.push(value),
            None => {
                self.properties.insert(name, VcardValue::Single(value));
            }
        }
    }

    /// Look up a property by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&VcardValue> {
        self.properties.get(&name.to_ascii_uppercase())
    }

    /// Number of distinct properties
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// True when the card carried no properties
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Turns raw vCard text into a property map
pub trait VcardParser: Send + Sync {
    /// Parse one card
    fn parse(&self, raw: &str) -> Result<VcardProperties, VcardError>;
}

/// Built-in line-oriented vCard reader (versions 2.1, 3.0 and 4.0)
#[derive(Debug, Clone, Copy, Default)]
pub struct LineVcardParser;

impl LineVcardParser {
    /// Create the parser
    pub fn new() -> Self {
        Self
    }
}

impl VcardParser for LineVcardParser {
    fn parse(&self, raw: &str) -> Result<VcardProperties, VcardError> {
        let lines = unfold(raw);

        let Some(((_, first), rest)) = lines.split_first() else {
            return Err(VcardError::MissingBegin);
        };
        if !first.trim().eq_ignore_ascii_case("BEGIN:VCARD") {
            return Err(VcardError::MissingBegin);
        }
        let Some(((_, last), body)) = rest.split_last() else {
            return Err(VcardError::MissingEnd);
        };
        if !last.trim().eq_ignore_ascii_case("END:VCARD") {
            return Err(VcardError::MissingEnd);
        }

        let mut properties = VcardProperties::new();
        for (line_no, line) in body {
            if line.trim().eq_ignore_ascii_case("BEGIN:VCARD") {
                return Err(VcardError::MalformedLine {
                    line: *line_no,
                    content: line.clone(),
                });
            }
            let Some((head, value)) = line.split_once(':') else {
                tracing::debug!(line = *line_no, "skipping vCard line without a value");
                continue;
            };
            let name = property_name(head);
            if name.is_empty() {
                tracing::debug!(line = *line_no, "skipping vCard line without a name");
                continue;
            }
            if is_quoted_printable(head) {
                properties.insert(name, decode_quoted_printable(value));
            } else {
                properties.insert(name, value);
            }
        }

        tracing::trace!(properties = properties.len(), "parsed vCard");
        Ok(properties)
    }
}

/// Join continuation lines onto the previous logical line, keeping the
/// 1-based number of each logical line's first physical line. A line is
/// continued by a leading space or tab (RFC 6350 folding), or by a trailing
/// `=` on a quoted-printable property (vCard 2.1 soft break). Blank lines
/// are dropped.
fn unfold(raw: &str) -> Vec<(usize, String)> {
    let mut lines: Vec<(usize, String)> = Vec::new();
    for (idx, line) in raw.lines().enumerate() {
        if let Some((_, previous)) = lines.last_mut() {
            if ends_with_soft_break(previous) {
                previous.pop();
                previous.push_str(line);
                continue;
            }
            if let Some(continuation) = line.strip_prefix([' ', '\t']) {
                previous.push_str(continuation);
                continue;
            }
        }
        if line.trim().is_empty() {
            continue;
        }
        lines.push((idx + 1, line.to_string()));
    }
    lines
}

fn ends_with_soft_break(line: &str) -> bool {
    line.ends_with('=')
        && line
            .split_once(':')
            .is_some_and(|(head, _)| is_quoted_printable(head))
}

/// `NOTE;ENCODING=QUOTED-PRINTABLE` or the 2.1 shorthand `NOTE;QUOTED-PRINTABLE`
fn is_quoted_printable(head: &str) -> bool {
    head.split(';').skip(1).any(|param| {
        let param = param.trim();
        param.eq_ignore_ascii_case("ENCODING=QUOTED-PRINTABLE")
            || param.eq_ignore_ascii_case("QUOTED-PRINTABLE")
    })
}

/// `=XX` hex escapes to bytes, read as UTF-8. Stray `=` is kept.
fn decode_quoted_printable(value: &str) -> String {
    let bytes = value.as_bytes();
    let hex = |idx: usize| {
        bytes
            .get(idx)
            .and_then(|b| char::from(*b).to_digit(16))
            .map(|d| d as u8)
    };

    let mut out = Vec::with_capacity(bytes.len());
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx] == b'=' {
            if let (Some(high), Some(low)) = (hex(idx + 1), hex(idx + 2)) {
                out.push((high << 4) | low);
                idx += 3;
                continue;
            }
        }
        out.push(bytes[idx]);
        idx += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// `item1.TEL;TYPE=cell` -> `TEL`
fn property_name(head: &str) -> &str {
    let name = head.split(';').next().unwrap_or_default();
    let name = name.rsplit('.').next().unwrap_or_default();
    name.trim()
}

/// Split a structured value on unescaped `;` and unescape each component:
/// `Gump;Bubba\; Co.` -> `["Gump", "Bubba; Co."]`
pub fn split_components(value: &str) -> Vec<String> {
    let mut components = Vec::new();
    let mut current = String::new();
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('n') | Some('N') => current.push('\n'),
                Some(other) => current.push(other),
                None => current.push('\\'),
            },
            ';' => components.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    components.push(current);
    components
}

/// Resolve `\n`, `\,`, `\;` and `\\` escapes in a single-component value
pub fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

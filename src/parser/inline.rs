//! Payloads whose fields are plain `:` / `,` splits of the text

use crate::models::{GeoRecord, SmsRecord};

/// Everything after the first `:` (empty when there is none)
pub fn after_identifier(text: &str) -> &str {
    text.split_once(':').map(|(_, rest)| rest).unwrap_or("")
}

/// `sms:<number>:<body>`; the body keeps any further `:`
pub fn parse_sms(text: &str) -> SmsRecord {
    let mut blocks = text.split(':').skip(1);
    let number = blocks.next().unwrap_or_default().to_string();
    let body = blocks.collect::<Vec<_>>().join(":");
    SmsRecord { number, body }
}

/// Number of `:`-delimited blocks; a sendable SMS needs identifier, number
/// and body
pub fn sms_block_count(text: &str) -> usize {
    text.split(':').count()
}

/// Phone number of a `tel:` payload
pub fn parse_tel(text: &str) -> String {
    after_identifier(text).to_string()
}

/// `geo:<lat>,<lon>[,...]`, split purely on `,`
pub fn parse_geo(text: &str) -> GeoRecord {
    GeoRecord(
        after_identifier(text)
            .split(',')
            .map(str::to_string)
            .collect(),
    )
}

use super::extract::{extract_between, split_identifier};
use crate::models::WifiRecord;

/// Parse `WIFI:T:<type>;S:<ssid>;P:<password>;;`
pub fn parse_wifi(data: &str) -> WifiRecord {
    let (_, rest) = split_identifier(data);

    WifiRecord {
        security: extract_between(rest, "T:", Some(";")),
        ssid: extract_between(rest, "S:", Some(";")),
        password: extract_between(rest, "P:", Some(";")),
    }
}

//! Marker-based field extraction shared by every microformat parser

/// Substring strictly after the first `start` and strictly before the next
/// `end`, trimmed.
///
/// Returns an empty string when `start` is absent, or when `end` is given
/// but does not occur after `start`. Without `end` the value runs to the end
/// of `data`.
pub fn extract_between(data: &str, start: &str, end: Option<&str>) -> String {
    let Some(idx) = data.find(start) else {
        tracing::trace!(marker = start, "start marker absent");
        return String::new();
    };
    let rest = &data[idx + start.len()..];

    match end {
        Some(end) => match rest.find(end) {
            Some(stop) => rest[..stop].trim().to_string(),
            None => {
                tracing::trace!(marker = start, end, "end marker absent");
                String::new()
            }
        },
        None => rest.trim().to_string(),
    }
}

/// Like [`extract_between`], but a missing `end` marker ends the value at
/// the end of `data` instead of discarding it
pub fn extract_until(data: &str, start: &str, end: &str) -> String {
    let Some(idx) = data.find(start) else {
        return String::new();
    };
    let rest = &data[idx + start.len()..];
    let stop = rest.find(end).unwrap_or(rest.len());
    rest[..stop].trim().to_string()
}

/// Split off the leading identifier: `("mecard", "N:Doe;;")` for
/// `"MECARD:N:Doe;;"`. The identifier is trimmed and lower-cased; text
/// without a `:` is all identifier.
pub fn split_identifier(data: &str) -> (String, &str) {
    match data.split_once(':') {
        Some((identifier, rest)) => (identifier.trim().to_lowercase(), rest),
        None => (data.trim().to_lowercase(), ""),
    }
}

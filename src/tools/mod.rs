use crate::interpret::Interpretation;
use crate::models::{PayloadKind, ScanResult};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors raised by the CLI helpers
#[derive(Debug, Error)]
pub enum ToolError {
    /// Batch file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Batch line without a `FORMAT<TAB>TEXT` shape
    #[error("{}:{line}: expected FORMAT<TAB>TEXT", path.display())]
    MalformedLine {
        /// File containing the line
        path: PathBuf,
        /// 1-based line number
        line: usize,
    },

    /// Log filter could not be parsed
    #[error("invalid log filter: {0}")]
    LogFilter(String),
}

/// Install a stderr `tracing` subscriber.
///
/// The filter comes from `QR_LOG`; without it, `QR_DEBUG` selects `debug`
/// and anything else `warn`.
pub fn init_logging() -> Result<(), ToolError> {
    let default_level = if std::env::var_os("QR_DEBUG").is_some() {
        "debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env("QR_LOG")
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| ToolError::LogFilter(e.to_string()))?;

    // A second initialisation (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
    Ok(())
}

/// One line of a batch file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanLine {
    /// Blank line or `#` comment
    Skip,
    /// A scan to interpret
    Scan(ScanResult),
    /// Line without a tab separator
    Malformed,
}

/// Parse one batch line: `FORMAT<TAB>TEXT`, where `\n` in the text stands
/// for a line break (so vCards fit on one line)
pub fn parse_scan_line(line: &str) -> ScanLine {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() || line.trim_start().starts_with('#') {
        return ScanLine::Skip;
    }
    match line.split_once('\t') {
        Some((format, text)) => {
            ScanLine::Scan(ScanResult::new(text.replace("\\n", "\n"), format.trim()))
        }
        None => ScanLine::Malformed,
    }
}

/// Read every scan listed in a batch file
pub fn read_scan_file<P: AsRef<Path>>(path: P) -> Result<Vec<ScanResult>, ToolError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ToolError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut scans = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        match parse_scan_line(line) {
            ScanLine::Skip => continue,
            ScanLine::Scan(scan) => scans.push(scan),
            ScanLine::Malformed => {
                return Err(ToolError::MalformedLine {
                    path: path.to_path_buf(),
                    line: idx + 1,
                });
            }
        }
    }
    tracing::debug!(count = scans.len(), path = %path.display(), "read batch file");
    Ok(scans)
}

/// Count of interpretations per payload kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindSummary {
    /// Scans per kind, in kind order
    pub counts: BTreeMap<PayloadKind, usize>,
    /// Total scans
    pub total: usize,
}

impl KindSummary {
    /// Share of scans with the given kind (0.0 - 1.0)
    pub fn ratio(&self, kind: PayloadKind) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.counts.get(&kind).copied().unwrap_or(0) as f64 / self.total as f64
    }
}

/// Tally interpretations by kind
pub fn summarize(results: &[Interpretation]) -> KindSummary {
    let mut summary = KindSummary::default();
    for result in results {
        *summary.counts.entry(result.kind).or_insert(0) += 1;
        summary.total += 1;
    }
    summary
}

/// `TAG -> display name` rows for every known symbology
pub fn symbology_table() -> Vec<(String, String)> {
    crate::models::Symbology::known()
        .map(|s| (s.tag().to_string(), s.display_name().to_string()))
        .collect()
}

//src/record.rs

use crate::error::PsmcError;
use crate::types::{SampleRecord, ScaleRecord};

/// Start of every result section, one per psmc iteration.
pub const MARKER_TAG: &str = "RD";
/// theta0 and rho0 of the section.
pub const SCALE_TAG: &str = "TR";
/// One discretized time interval.
pub const SAMPLE_TAG: &str = "RS";

/// The kinds of psmc report lines this crate cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordTag {
    Marker,
    Scale,
    Sample,
    Other,
}

impl RecordTag {
    /// Classify a raw line (trailing newline allowed).
    ///
    /// The marker test looks at the raw first two characters; the other tags
    /// are compared against the first tab field of the trimmed line.
    pub fn classify(line: &str) -> RecordTag {
        if line.starts_with(MARKER_TAG) {
            return RecordTag::Marker;
        }
        match first_field(line) {
            SCALE_TAG => RecordTag::Scale,
            SAMPLE_TAG => RecordTag::Sample,
            _ => RecordTag::Other,
        }
    }
}

fn first_field(line: &str) -> &str {
    line.trim().split('\t').next().unwrap_or("")
}

fn fields(line: &str) -> Vec<&str> {
    line.trim().split('\t').collect()
}

fn parse_float(fields: &[&str], index: usize, name: &str, line_no: usize) -> Result<f64, PsmcError> {
    let raw = fields.get(index).ok_or_else(|| {
        PsmcError::record_format(
            line_no,
            format!("missing {name} (field {index}), line has {} fields", fields.len()),
        )
    })?;
    raw.trim().parse::<f64>().map_err(|_| {
        PsmcError::record_format(line_no, format!("{name} is not a number: {raw:?}"))
    })
}

/// Iteration number from an `RD` line, when it carries one.
pub fn marker_iteration(line: &str) -> Option<u64> {
    line.trim().split('\t').nth(1)?.trim().parse().ok()
}

impl ScaleRecord {
    /// Decode `TR <theta0> [rho0]`. A missing or unreadable rho0 is tolerated,
    /// theta0 is not.
    pub fn parse(line: &str, line_no: usize) -> Result<ScaleRecord, PsmcError> {
        let fields = fields(line);
        let theta0 = parse_float(&fields, 1, "theta0", line_no)?;
        let rho0 = fields.get(2).and_then(|raw| raw.trim().parse::<f64>().ok());
        Ok(ScaleRecord { theta0, rho0 })
    }
}

impl SampleRecord {
    /// Decode `RS <k> <t_k> <lambda_k> ...`; only t_k and lambda_k are used.
    pub fn parse(line: &str, line_no: usize) -> Result<SampleRecord, PsmcError> {
        let fields = fields(line);
        let time_units = parse_float(&fields, 2, "t_k", line_no)?;
        let size_ratio = parse_float(&fields, 3, "lambda_k", line_no)?;
        Ok(SampleRecord {
            time_units,
            size_ratio,
        })
    }
}

// src/lib.rs
//! Turn the output of `psmc` into a two-column history of time before
//! present (years) and effective population size (individuals).
//!
//! The last result section of the report is located (the one after the last
//! `RD` line), theta0 is read from its `TR` line, and every `RS` line is
//! rescaled with N0 = theta0 / (4 * mu * 100):
//!
//! ```
//! use psmc_history::{convert_report, ScalingConfig};
//! use std::io::Cursor;
//!
//! let report = "RD\t0\nTR\t2.0\t0.5\nRS\t0\t0.1\t1.0\nRS\t1\t0.2\t2.0\n";
//! let history = convert_report(Cursor::new(report), &ScalingConfig::default(), "demo").unwrap();
//! assert_eq!(history.points.len(), 2);
//! assert!((history.scale.n0 - 0.005).abs() < 1e-12);
//! ```
pub mod config;
pub mod cursor;
pub mod error;
pub mod history;
pub mod locate;
pub mod psmc_file;
pub mod record;
pub mod rescale;
pub mod scale;
pub mod streaming;
pub mod types;

use std::io::{BufRead, Seek};
use std::path::Path;

pub use crate::config::ScalingConfig;
pub use crate::error::PsmcError;
pub use crate::history::{PsmcHistory, DEFAULT_PRECISION};
pub use crate::types::{HistoryPoint, ReferenceScale, SectionStart};

use crate::cursor::LineCursor;
use crate::locate::locate_last_section;
use crate::psmc_file::{open_report, ReportSource};
use crate::rescale::rescale;
use crate::scale::extract_scale;
use crate::streaming::read_last_section;

/// Two-pass conversion of a seekable report:
/// locate the last section, seek back, read theta0, rescale the samples.
pub fn convert_report<R: BufRead + Seek>(
    reader: R,
    config: &ScalingConfig,
    source: &str,
) -> Result<PsmcHistory, PsmcError> {
    let mut cursor = LineCursor::new(reader);

    // 1. Find the last RD line
    let section = locate_last_section(&mut cursor)?;
    log_section(&section);

    // 2. Back to the start of that section, read theta0
    cursor.seek_to(section)?;
    let scale = extract_scale(&mut cursor, config)?;

    // 3. Everything after TR
    let points = rescale(&mut cursor, &scale, config)?;

    Ok(PsmcHistory {
        source: source.to_string(),
        config: *config,
        section,
        scale,
        points,
    })
}

/// Single-pass conversion for readers that cannot seek.
///
/// Gives the same result as [`convert_report`] for the same bytes.
pub fn convert_report_streaming<R: BufRead>(
    reader: R,
    config: &ScalingConfig,
    source: &str,
) -> Result<PsmcHistory, PsmcError> {
    let mut cursor = LineCursor::new(reader);
    let (section, scale, points) = read_last_section(&mut cursor, config)?;
    log_section(&section);

    Ok(PsmcHistory {
        source: source.to_string(),
        config: *config,
        section,
        scale,
        points,
    })
}

/// Open `path` (plain, `.gz` or `-` for stdin) and convert it.
pub fn convert_file<P: AsRef<Path>>(
    path: P,
    config: &ScalingConfig,
) -> Result<PsmcHistory, PsmcError> {
    let path = path.as_ref();
    let source = path.display().to_string();
    match open_report(path)? {
        ReportSource::Seekable(reader) => convert_report(reader, config, &source),
        ReportSource::Stream(reader) => convert_report_streaming(reader, config, &source),
    }
}

fn log_section(section: &SectionStart) {
    match section.iteration {
        Some(iteration) => log::info!(
            "Using results of iteration {} (line {})",
            iteration,
            section.line
        ),
        None => log::info!("Using result section at line {}", section.line),
    }
}

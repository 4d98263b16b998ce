//src/scale.rs

use std::io::BufRead;

use crate::config::ScalingConfig;
use crate::cursor::LineCursor;
use crate::error::PsmcError;
use crate::record::RecordTag;
use crate::types::{ReferenceScale, ScaleRecord};

/// Read forward to the first `TR` line and derive N0 from its theta0.
///
/// Stops right after the `TR` line so the sample records can be read next.
pub fn extract_scale<R: BufRead>(
    cursor: &mut LineCursor<R>,
    config: &ScalingConfig,
) -> Result<ReferenceScale, PsmcError> {
    let record = loop {
        let Some(line) = cursor.next_line()? else {
            return Err(PsmcError::MissingScale);
        };
        if RecordTag::classify(line.text) == RecordTag::Scale {
            break ScaleRecord::parse(line.text, line.number)?;
        }
    };
    reference_scale(record, config)
}

pub fn reference_scale(
    record: ScaleRecord,
    config: &ScalingConfig,
) -> Result<ReferenceScale, PsmcError> {
    let n0 = config.reference_size(record.theta0)?;
    log::info!("theta0={} N0={}", record.theta0, n0);
    if let Some(rho0) = record.rho0 {
        log::debug!("rho0={}", rho0);
    }
    Ok(ReferenceScale {
        theta0: record.theta0,
        rho0: record.rho0,
        n0,
    })
}

//src/rescale.rs

use std::io::BufRead;

use crate::config::ScalingConfig;
use crate::cursor::LineCursor;
use crate::error::PsmcError;
use crate::record::RecordTag;
use crate::types::{HistoryPoint, ReferenceScale, SampleRecord};

/// Convert every remaining `RS` line into years and individuals, in order.
///
/// Lines with any other tag are skipped. A malformed `RS` line fails the
/// whole run.
pub fn rescale<R: BufRead>(
    cursor: &mut LineCursor<R>,
    scale: &ReferenceScale,
    config: &ScalingConfig,
) -> Result<Vec<HistoryPoint>, PsmcError> {
    let mut points = Vec::new();
    let mut skipped = 0usize;

    while let Some(line) = cursor.next_line()? {
        match RecordTag::classify(line.text) {
            RecordTag::Sample => {
                let sample = SampleRecord::parse(line.text, line.number)?;
                points.push(to_history_point(&sample, scale, config));
            }
            RecordTag::Marker | RecordTag::Scale | RecordTag::Other => skipped += 1,
        }
    }

    log::debug!("Rescaled {} sample(s), skipped {} line(s)", points.len(), skipped);
    Ok(points)
}

/// t = t_k * 2 * N0 * g, Ne = lambda_k * N0
pub fn to_history_point(
    sample: &SampleRecord,
    scale: &ReferenceScale,
    config: &ScalingConfig,
) -> HistoryPoint {
    HistoryPoint {
        time: config.years(sample.time_units, scale.n0),
        size: sample.size_ratio * scale.n0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scale(n0: f64) -> ReferenceScale {
        ReferenceScale {
            theta0: 0.0,
            rho0: None,
            n0,
        }
    }

    #[test]
    fn test_keeps_order_and_skips_other_lines() {
        let report = "RS\t0\t0.1\t1.0\nPA\t4+25*2+4+6\nRS\t1\t0.2\t2.0\n//\nRS\t2\t0.1\t1.0\n";
        let mut cursor = LineCursor::new(Cursor::new(report));
        let points = rescale(&mut cursor, &scale(0.005), &ScalingConfig::default()).unwrap();
        assert_eq!(points.len(), 3);
        assert!((points[0].time - 0.001).abs() < 1e-15);
        assert!((points[0].size - 0.005).abs() < 1e-15);
        assert!((points[1].time - 0.002).abs() < 1e-15);
        assert!((points[1].size - 0.01).abs() < 1e-15);
        assert_eq!(points[2], points[0]);
    }

    #[test]
    fn test_no_samples() {
        let mut cursor = LineCursor::new(Cursor::new("//\n"));
        let points = rescale(&mut cursor, &scale(1.0), &ScalingConfig::default()).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_generation_time_scales_time_only() {
        let sample = SampleRecord {
            time_units: 0.3,
            size_ratio: 1.7,
        };
        let one = ScalingConfig::new(1.25e-8, 1.0).unwrap();
        let two = ScalingConfig::new(1.25e-8, 2.0).unwrap();
        let a = to_history_point(&sample, &scale(1.0e4), &one);
        let b = to_history_point(&sample, &scale(1.0e4), &two);
        assert_eq!(b.time, a.time * 2.0);
        assert_eq!(b.size, a.size);
    }

    #[test]
    fn test_malformed_sample_fails() {
        let report = "RS\t0\t0.1\t1.0\nRS\t1\t0.2\n";
        let mut cursor = LineCursor::new(Cursor::new(report));
        match rescale(&mut cursor, &scale(1.0), &ScalingConfig::default()) {
            Err(PsmcError::RecordFormat { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected {other:?}"),
        }
    }
}

//src/streaming.rs

use std::io::BufRead;

use crate::config::ScalingConfig;
use crate::cursor::LineCursor;
use crate::error::PsmcError;
use crate::record::{marker_iteration, RecordTag};
use crate::rescale::to_history_point;
use crate::scale::reference_scale;
use crate::types::{HistoryPoint, ReferenceScale, SampleRecord, ScaleRecord, SectionStart};

/// A raw line kept for decoding once the last section is known.
struct PendingLine {
    text: String,
    number: usize,
}

/// The section currently being read. Replaced at every `RD` line.
struct PendingSection {
    start: SectionStart,
    scale: Option<PendingLine>,
    samples: Vec<PendingLine>,
}

/// Single pass over a report that cannot seek (gzip, stdin).
///
/// Only the raw `TR` and `RS` lines of the current section are held in
/// memory. They are decoded after end of stream, so records of earlier
/// sections are never parsed, same as the two-pass pipeline.
pub fn read_last_section<R: BufRead>(
    cursor: &mut LineCursor<R>,
    config: &ScalingConfig,
) -> Result<(SectionStart, ReferenceScale, Vec<HistoryPoint>), PsmcError> {
    let mut current: Option<PendingSection> = None;
    let mut sections = 0usize;

    while let Some(line) = cursor.next_line()? {
        let tag = RecordTag::classify(line.text);
        if tag == RecordTag::Marker {
            sections += 1;
            current = Some(PendingSection {
                start: SectionStart {
                    offset: line.end_offset,
                    line: line.number,
                    iteration: marker_iteration(line.text),
                },
                scale: None,
                samples: Vec::new(),
            });
            continue;
        }
        let Some(section) = current.as_mut() else {
            continue;
        };
        match (tag, section.scale.is_some()) {
            (RecordTag::Scale, false) => {
                section.scale = Some(PendingLine {
                    text: line.text.to_string(),
                    number: line.number,
                });
            }
            (RecordTag::Sample, true) => section.samples.push(PendingLine {
                text: line.text.to_string(),
                number: line.number,
            }),
            _ => {}
        }
    }

    let section = current.ok_or(PsmcError::NotFound)?;
    log::debug!(
        "Found {} result section(s), last one starts after line {}",
        sections,
        section.start.line
    );

    let scale_line = section.scale.ok_or(PsmcError::MissingScale)?;
    let scale = reference_scale(
        ScaleRecord::parse(&scale_line.text, scale_line.number)?,
        config,
    )?;

    let points = section
        .samples
        .iter()
        .map(|pending| {
            SampleRecord::parse(&pending.text, pending.number)
                .map(|sample| to_history_point(&sample, &scale, config))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((section.start, scale, points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(report: &str) -> Result<(SectionStart, ReferenceScale, Vec<HistoryPoint>), PsmcError> {
        let mut cursor = LineCursor::new(Cursor::new(report));
        read_last_section(&mut cursor, &ScalingConfig::default())
    }

    #[test]
    fn test_only_last_section_is_used() {
        let report = "RD\t0\nTR\t4.0\t1\nRS\t0\tbad\t1.0\nRD\t1\nTR\t2.0\t0.5\nRS\t0\t0.1\t1.0\nRS\t1\t0.2\t2.0\n";
        let (start, scale, points) = run(report).unwrap();
        assert_eq!(start.iteration, Some(1));
        assert_eq!(scale.theta0, 2.0);
        assert_eq!(points.len(), 2);
        assert!((points[1].size - 0.01).abs() < 1e-15);
    }

    #[test]
    fn test_samples_before_scale_are_ignored() {
        let report = "RD\t3\nRS\t0\t9.0\t9.0\nTR\t2.0\t0.5\nTR\tjunk\nRS\t0\t0.1\t1.0\n";
        let (_, scale, points) = run(report).unwrap();
        assert_eq!(scale.theta0, 2.0);
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(run("TR\t2.0\t0.5\n"), Err(PsmcError::NotFound)));
        assert!(matches!(run("TR\t2.0\nRD\t1\nRS\t0\t0.1\t1.0\n"), Err(PsmcError::MissingScale)));
        match run("RD\t1\nTR\t2.0\t0.5\nRS\t0\t0.1\t1.0\nRS\t1\t0.2\tx\n") {
            Err(PsmcError::RecordFormat { line, .. }) => assert_eq!(line, 4),
            other => panic!("unexpected {other:?}"),
        }
    }
}

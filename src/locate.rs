//src/locate.rs

use std::io::BufRead;

use crate::cursor::LineCursor;
use crate::error::PsmcError;
use crate::record::{marker_iteration, RecordTag};
use crate::types::SectionStart;

/// Scan the whole report and return the start of the last result section.
///
/// psmc prints one `RD` line per iteration; the section after the last one
/// holds the final estimates. The cursor is left at end of stream.
pub fn locate_last_section<R: BufRead>(
    cursor: &mut LineCursor<R>,
) -> Result<SectionStart, PsmcError> {
    let mut last = None;
    let mut sections = 0usize;

    while let Some(line) = cursor.next_line()? {
        if RecordTag::classify(line.text) == RecordTag::Marker {
            sections += 1;
            last = Some(SectionStart {
                offset: line.end_offset,
                line: line.number,
                iteration: marker_iteration(line.text),
            });
        }
    }

    let start = last.ok_or(PsmcError::NotFound)?;
    log::debug!(
        "Found {} result section(s), last one starts after line {}",
        sections,
        start.line
    );
    Ok(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_last_marker_wins() {
        let report = "MM\tinfo\nRD\t0\nTR\t1\t1\nRD\t1\nTR\t2\t2\n";
        let mut cursor = LineCursor::new(Cursor::new(report));
        let start = locate_last_section(&mut cursor).unwrap();
        assert_eq!(start.line, 4);
        assert_eq!(start.offset, "MM\tinfo\nRD\t0\nTR\t1\t1\nRD\t1\n".len() as u64);
        assert_eq!(start.iteration, Some(1));
        assert!(cursor.next_line().unwrap().is_none());
    }

    #[test]
    fn test_marker_on_last_line_without_newline() {
        let report = "TR\t1\t1\nRD";
        let mut cursor = LineCursor::new(Cursor::new(report));
        let start = locate_last_section(&mut cursor).unwrap();
        assert_eq!(start.offset, report.len() as u64);
        assert_eq!(start.iteration, None);
    }

    #[test]
    fn test_no_marker() {
        let mut cursor = LineCursor::new(Cursor::new("TR\t2.0\t0.5\nRS\t0\t0.1\t1.0\n"));
        assert!(matches!(
            locate_last_section(&mut cursor),
            Err(PsmcError::NotFound)
        ));

        let mut cursor = LineCursor::new(Cursor::new(""));
        assert!(matches!(
            locate_last_section(&mut cursor),
            Err(PsmcError::NotFound)
        ));
    }
}

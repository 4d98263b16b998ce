//src/cursor.rs

use std::io::{self, BufRead, Seek, SeekFrom};

use crate::types::SectionStart;

/// A line read from a [`LineCursor`].
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    pub text: &'a str,
    /// 1-based
    pub number: usize,
    /// Byte offset just after this line.
    pub end_offset: u64,
}

/// Forward-only line reader over a psmc report.
pub struct LineCursor<R> {
    reader: R,
    buf: String,
    offset: u64,
    line_no: usize,
}

impl<R: BufRead> LineCursor<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            offset: 0,
            line_no: 0,
        }
    }

    /// Next line including its newline, or `None` at end of stream.
    pub fn next_line(&mut self) -> io::Result<Option<Line<'_>>> {
        self.buf.clear();
        let n = self.reader.read_line(&mut self.buf)?;
        if n == 0 {
            return Ok(None);
        }
        self.offset += n as u64;
        self.line_no += 1;
        Ok(Some(Line {
            text: &self.buf,
            number: self.line_no,
            end_offset: self.offset,
        }))
    }

    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

impl<R: BufRead + Seek> LineCursor<R> {
    /// Move back to the first line after a section's `RD` line.
    pub fn seek_to(&mut self, start: SectionStart) -> io::Result<()> {
        self.reader.seek(SeekFrom::Start(start.offset))?;
        self.offset = start.offset;
        self.line_no = start.line;
        Ok(())
    }
}

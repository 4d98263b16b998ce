//src/psmc_file.rs

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::PsmcError;

/// An opened psmc report, seekable or not.
pub enum ReportSource {
    /// Plain file: read with the two-pass seek pipeline.
    Seekable(BufReader<File>),
    /// gzip or stdin: read in a single pass.
    Stream(Box<dyn BufRead>),
}

/// Open a report by path. `-` is standard input, `*.gz` is decompressed.
pub fn open_report<P: AsRef<Path>>(path: P) -> Result<ReportSource, PsmcError> {
    let path = path.as_ref();
    if path == Path::new("-") {
        return Ok(ReportSource::Stream(Box::new(BufReader::new(io::stdin()))));
    }

    let f = File::open(path).map_err(|source| PsmcError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let is_gz = path
        .extension()
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    if is_gz {
        Ok(ReportSource::Stream(Box::new(BufReader::new(
            MultiGzDecoder::new(f),
        ))))
    } else {
        Ok(ReportSource::Seekable(BufReader::new(f)))
    }
}

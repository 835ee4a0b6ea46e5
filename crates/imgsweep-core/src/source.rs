//! Record source: the input file read line by line.

use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::error::{Result, RunError};
use crate::extract::{Extraction, UrlExtractor};

/// Reads `path` line by line and feeds every line to a fresh extractor.
///
/// Lines may end in `\n` or `\r\n` and have no length limit; bytes that are
/// not valid UTF-8 are replaced rather than rejected. A missing file is
/// reported as [`RunError::InputMissing`], any other I/O failure as
/// [`RunError::InputRead`].
pub async fn scan_file(path: &Path, delimiter: char) -> Result<Extraction> {
    let file = tokio::fs::File::open(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RunError::InputMissing(path.to_path_buf())
        } else {
            RunError::input_read(path, e)
        }
    })?;

    let mut reader = BufReader::new(file);
    let mut extractor = UrlExtractor::new(delimiter);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .await
            .map_err(|e| RunError::input_read(path, e))?;
        if n == 0 {
            break;
        }
        let line = String::from_utf8_lossy(trim_line_ending(&buf));
        extractor.scan_record(&line);
    }

    let extraction = extractor.finish();
    tracing::debug!(
        path = %path.display(),
        lines = extraction.lines,
        found = extraction.candidates.len(),
        "scanned input"
    );
    Ok(extraction)
}

fn trim_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}

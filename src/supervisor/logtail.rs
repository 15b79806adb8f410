//! Read-only views of the service's log stream.
//!
//! The supervisor never writes to the log; it only shows the newest lines and
//! how long ago the service last produced output.

use crate::error::{Result, SupervisorError};
use chrono::{DateTime, Duration, Utc};
use std::fs::File;
use std::io::{ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

/// Bytes read per step when scanning backwards from the end of the log.
const BLOCK_SIZE: u64 = 8 * 1024;

/// Return the last `n` lines of the log, oldest first.
///
/// The file is read backwards in blocks until enough lines are found, so the
/// cost is proportional to the tail, not the whole log. Invalid UTF-8 is
/// replaced, and trailing `\r` is stripped.
///
/// # Returns
///
/// * `Ok(None)` - the log does not exist yet
/// * `Ok(Some(lines))` - up to `n` lines
pub fn tail_lines<P: AsRef<Path>>(path: P, n: usize) -> Result<Option<Vec<String>>> {
    let path = path.as_ref();
    let io_err = |e: std::io::Error| {
        SupervisorError::UserError(format!("failed to read log '{}': {}", path.display(), e))
    };

    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(io_err(e)),
    };

    if n == 0 {
        return Ok(Some(Vec::new()));
    }

    let mut pos = file.metadata().map_err(io_err)?.len();
    let mut buf: Vec<u8> = Vec::new();

    while pos > 0 && complete_line_breaks(&buf) < n {
        let read = BLOCK_SIZE.min(pos);
        pos -= read;
        file.seek(SeekFrom::Start(pos)).map_err(io_err)?;

        let mut chunk = vec![0u8; read as usize];
        file.read_exact(&mut chunk).map_err(io_err)?;
        chunk.extend_from_slice(&buf);
        buf = chunk;
    }

    let body = buf.strip_suffix(b"\n").unwrap_or(&buf);
    if body.is_empty() {
        return Ok(Some(Vec::new()));
    }

    let segments: Vec<&[u8]> = body.split(|b| *b == b'\n').collect();
    // When the scan stopped mid-file the first segment is partial, but it is
    // never among the last n because the body holds at least n line breaks.
    let start = segments.len().saturating_sub(n);
    let lines = segments[start..]
        .iter()
        .map(|&line| {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            String::from_utf8_lossy(line).into_owned()
        })
        .collect();

    Ok(Some(lines))
}

/// Line breaks in `buf`, not counting a final newline that ends the file.
fn complete_line_breaks(buf: &[u8]) -> usize {
    let body = buf.strip_suffix(b"\n").unwrap_or(buf);
    body.iter().filter(|b| **b == b'\n').count()
}

/// Last modification time of the log, if it exists.
pub fn last_activity<P: AsRef<Path>>(path: P) -> Option<DateTime<Utc>> {
    let modified = std::fs::metadata(path).ok()?.modified().ok()?;
    Some(DateTime::<Utc>::from(modified))
}

/// Format an age as a short human-readable string (`42s`, `5m`, `3h 10m`, `2d 4h`).
pub fn format_age(age: Duration) -> String {
    let seconds = age.num_seconds().max(0);
    let minutes = age.num_minutes();
    let hours = age.num_hours();
    let days = age.num_days();

    if days > 0 {
        format!("{}d {}h", days, hours % 24)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes % 60)
    } else if minutes > 0 {
        format!("{}m", minutes)
    } else {
        format!("{}s", seconds)
    }
}

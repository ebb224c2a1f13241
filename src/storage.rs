//! Flat-file persistence for the complaint queue.
//!
//! The format is plain text, one record per 8 consecutive lines:
//! id, content, replied flag (`0`/`1`), urgent flag (`0`/`1`), customer name,
//! customer phone, customer email, reply text (may be empty). No header, no
//! schema version, no checksum. Records are written in queue order and read
//! back in the same order.
//!
//! Only the queue is persisted. The summary stack, urgent list, and employee
//! roster are session-local and lost on exit.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::domain::{Complaint, ComplaintQueue, Customer};

/// Number of lines making up one persisted record.
const RECORD_LINES: usize = 8;

/// Errors raised while reading a complaint data file.
///
/// Any malformed record aborts the load with zero records recovered; partial
/// results are never returned.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The file ended in the middle of an 8-line record.
    #[error("record starting at line {record_start} is truncated")]
    TruncatedRecord {
        /// 1-based line number of the record's first line.
        record_start: usize,
    },

    /// The id line did not parse as an integer.
    #[error("line {line}: invalid complaint id '{value}'")]
    InvalidId {
        /// 1-based line number.
        line: usize,
        /// The offending text.
        value: String,
    },

    /// A flag line was something other than `0` or `1`.
    #[error("line {line}: invalid flag '{value}' (expected 0 or 1)")]
    InvalidFlag {
        /// 1-based line number.
        line: usize,
        /// The offending text.
        value: String,
    },
}

/// Reads the complaint data file at `path`.
///
/// A missing file is a normal cold start and yields an empty list; an empty
/// file yields zero records. Trailing blank lines after the last record are
/// tolerated.
///
/// # Errors
///
/// Returns a [`LoadError`] if the file cannot be read or any record is
/// malformed.
pub fn load(path: &Path) -> Result<Vec<Complaint>, LoadError> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no complaint data file; starting empty");
        return Ok(Vec::new());
    }
    let file = File::open(path)?;
    let complaints = read(BufReader::new(file))?;
    tracing::info!(
        path = %path.display(),
        count = complaints.len(),
        "complaint data loaded"
    );
    Ok(complaints)
}

/// Overwrites `path` wholesale with the current queue contents.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to. The caller's
/// in-memory state is unaffected by a failed save.
pub fn save(path: &Path, queue: &ComplaintQueue) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for complaint in queue.iter() {
        write_record(&mut writer, complaint)?;
    }
    writer.flush()
}

fn read<R: BufRead>(reader: R) -> Result<Vec<Complaint>, LoadError> {
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;

    let mut complaints = Vec::new();
    let mut start = 0;
    while start < lines.len() {
        if lines[start..].iter().all(String::is_empty) {
            break;
        }
        if lines.len() - start < RECORD_LINES {
            return Err(LoadError::TruncatedRecord {
                record_start: start + 1,
            });
        }
        complaints.push(parse_record(&lines[start..start + RECORD_LINES], start)?);
        start += RECORD_LINES;
    }
    Ok(complaints)
}

fn parse_record(record: &[String], start: usize) -> Result<Complaint, LoadError> {
    let id = record[0]
        .trim()
        .parse()
        .map_err(|_| LoadError::InvalidId {
            line: start + 1,
            value: record[0].clone(),
        })?;
    let replied = parse_flag(&record[2], start + 3)?;
    let urgent = parse_flag(&record[3], start + 4)?;

    let mut complaint = Complaint::new(
        id,
        record[1].clone(),
        Customer::new(record[4].clone(), record[5].clone(), record[6].clone()),
    );
    complaint.replied = replied;
    complaint.urgent = urgent;
    complaint.reply = record[7].clone();
    Ok(complaint)
}

fn parse_flag(value: &str, line: usize) -> Result<bool, LoadError> {
    match value.trim() {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(LoadError::InvalidFlag {
            line,
            value: value.to_string(),
        }),
    }
}

fn write_record<W: Write>(writer: &mut W, complaint: &Complaint) -> io::Result<()> {
    writeln!(writer, "{}", complaint.id)?;
    writeln!(writer, "{}", complaint.content)?;
    writeln!(writer, "{}", u8::from(complaint.replied))?;
    writeln!(writer, "{}", u8::from(complaint.urgent))?;
    writeln!(writer, "{}", complaint.customer.name)?;
    writeln!(writer, "{}", complaint.customer.phone)?;
    writeln!(writer, "{}", complaint.customer.email)?;
    writeln!(writer, "{}", complaint.reply)
}

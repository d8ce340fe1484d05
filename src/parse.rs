use crate::error::Result;
use crate::model::CommitRecord;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::BufRead;

pub const COMMIT_DELIMITER: &str = "---COMMIT---";

// What git puts in numstat count fields for binary files.
const BINARY_MARKER: &str = "-";

/// Parse `git log --pretty=format:---COMMIT---%n%ct --numstat` output into
/// records, in stream order. Malformed lines and blocks are skipped, never
/// fatal; only a read failure (including invalid UTF-8) is an error.
pub fn parse_log<R: BufRead>(reader: R) -> Result<Vec<CommitRecord>> {
    parse_inner(reader, None)
}

/// Same, plus a stderr spinner for interactive runs.
pub fn parse_log_with_progress<R: BufRead>(reader: R) -> Result<Vec<CommitRecord>> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Parsing commit log...");
    let records = parse_inner(reader, Some(&pb));
    pb.finish_with_message("Commit log parsed");
    records
}

fn parse_inner<R: BufRead>(
    mut reader: R,
    progress: Option<&ProgressBar>,
) -> Result<Vec<CommitRecord>> {
    let mut records = Vec::new();
    let mut open: Option<CommitRecord> = None;
    let mut expect_timestamp = false;
    let mut buf = String::new();

    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        let line = buf.strip_suffix('\n').unwrap_or(&buf);
        if line.is_empty() {
            continue;
        }

        if line == COMMIT_DELIMITER {
            flush(&mut open, &mut records, progress);
            expect_timestamp = true;
            continue;
        }

        if expect_timestamp {
            expect_timestamp = false;
            // A non-numeric timestamp drops this block until the next delimiter.
            if let Ok(timestamp) = line.parse::<i64>() {
                open = Some(CommitRecord {
                    timestamp,
                    lines_added: 0,
                    lines_deleted: 0,
                });
            }
            continue;
        }

        // Lines outside any block are ignored.
        if let Some(record) = open.as_mut() {
            apply_change_line(record, line);
        }
    }

    flush(&mut open, &mut records, progress);
    Ok(records)
}

fn flush(
    open: &mut Option<CommitRecord>,
    records: &mut Vec<CommitRecord>,
    progress: Option<&ProgressBar>,
) {
    if let Some(record) = open.take() {
        records.push(record);
        if let Some(pb) = progress {
            pb.inc(1);
        }
    }
}

fn apply_change_line(record: &mut CommitRecord, line: &str) {
    let mut parts = line.splitn(3, '\t');
    let added = parts.next().unwrap_or_default();
    let deleted = parts.next().unwrap_or_default();

    if added.is_empty() || deleted.is_empty() || added == BINARY_MARKER || deleted == BINARY_MARKER
    {
        return;
    }
    if let (Ok(added), Ok(deleted)) = (added.parse::<u64>(), deleted.parse::<u64>()) {
        // Counts cap at u64::MAX rather than panicking on absurd streams.
        record.lines_added = record.lines_added.saturating_add(added);
        record.lines_deleted = record.lines_deleted.saturating_add(deleted);
    }
}

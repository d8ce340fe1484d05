use crate::model::{CommitRecord, DayBucket, MonthBucket};
use crate::util::{day_floor, month_key, SECONDS_PER_DAY};
use std::collections::HashMap;

#[derive(Default)]
struct BucketAccum {
    commits: u32,
    added: u64,
    deleted: u64,
}

impl BucketAccum {
    fn record(&mut self, commit: &CommitRecord) {
        self.commits = self.commits.saturating_add(1);
        self.added = self.added.saturating_add(commit.lines_added);
        self.deleted = self.deleted.saturating_add(commit.lines_deleted);
    }
}

struct MonthAccum {
    sample_timestamp: i64,
    totals: BucketAccum,
}

// (avg_commit_size, refactoring_ratio); 0 for the degenerate denominators.
fn derived(commits: u32, added: u64, deleted: u64) -> (f64, f64) {
    let avg = if commits == 0 {
        0.0
    } else {
        added.saturating_add(deleted) as f64 / f64::from(commits)
    };
    let ratio = if added == 0 {
        0.0
    } else {
        deleted as f64 / added as f64
    };
    (avg, ratio)
}

/// One bucket per UTC day from the oldest commit through max(now, newest),
/// zero-filled for gap days, ascending. `now` is explicit so callers fix
/// the span's upper bound.
pub fn daily_reports(commits: &[CommitRecord], now: i64) -> Vec<DayBucket> {
    if commits.is_empty() {
        return Vec::new();
    }

    let oldest = commits.iter().map(|c| c.timestamp).min().unwrap_or(now);
    let newest = commits.iter().map(|c| c.timestamp).max().unwrap_or(now);
    let span_start = day_floor(oldest);
    let span_end = day_floor(now.max(newest));

    let mut days: HashMap<i64, BucketAccum> = HashMap::new();
    for day in (span_start..=span_end).step_by(SECONDS_PER_DAY as usize) {
        days.insert(day, BucketAccum::default());
    }

    for commit in commits {
        // Cannot fall outside the span given the bounds above; dropped
        // rather than growing the map if it somehow does.
        if let Some(accum) = days.get_mut(&day_floor(commit.timestamp)) {
            accum.record(commit);
        }
    }

    let mut buckets: Vec<DayBucket> = days
        .into_iter()
        .map(|(day_start, accum)| {
            let (avg_commit_size, refactoring_ratio) =
                derived(accum.commits, accum.added, accum.deleted);
            DayBucket {
                day_start,
                commit_count: accum.commits,
                lines_added: accum.added,
                lines_deleted: accum.deleted,
                avg_commit_size,
                refactoring_ratio,
            }
        })
        .collect();

    buckets.sort_by(|a, b| a.day_start.cmp(&b.day_start));
    buckets
}

/// One bucket per month that received commits; no gap filling, unlike the
/// day report. The first commit seen fixes `sample_timestamp`.
pub fn monthly_reports(commits: &[CommitRecord]) -> Vec<MonthBucket> {
    let mut months: HashMap<i64, MonthAccum> = HashMap::new();

    for commit in commits {
        let accum = months
            .entry(month_key(commit.timestamp))
            .or_insert_with(|| MonthAccum {
                sample_timestamp: commit.timestamp,
                totals: BucketAccum::default(),
            });
        accum.totals.record(commit);
    }

    let mut buckets: Vec<MonthBucket> = months
        .into_iter()
        .map(|(key, accum)| {
            let (avg_commit_size, refactoring_ratio) =
                derived(accum.totals.commits, accum.totals.added, accum.totals.deleted);
            MonthBucket {
                month_key: key,
                sample_timestamp: accum.sample_timestamp,
                commit_count: accum.totals.commits,
                lines_added: accum.totals.added,
                lines_deleted: accum.totals.deleted,
                avg_commit_size,
                refactoring_ratio,
            }
        })
        .collect();

    buckets.sort_by(|a, b| a.month_key.cmp(&b.month_key));
    buckets
}

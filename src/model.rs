use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// One commit as observed in the log stream: committer timestamp plus line
/// counts summed across the commit's non-binary files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub timestamp: i64,
    pub lines_added: u64,
    pub lines_deleted: u64,
}

/// Aggregate for one UTC calendar day. `day_start` is midnight-aligned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayBucket {
    pub day_start: i64,
    pub commit_count: u32,
    pub lines_added: u64,
    pub lines_deleted: u64,
    pub avg_commit_size: f64,
    pub refactoring_ratio: f64,
}

/// Aggregate for one calendar month. Months without commits get no bucket,
/// unlike the day report. `sample_timestamp` is the first commit seen for
/// the month and is only used for display formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthBucket {
    pub month_key: i64,
    pub sample_timestamp: i64,
    pub commit_count: u32,
    pub lines_added: u64,
    pub lines_deleted: u64,
    pub avg_commit_size: f64,
    pub refactoring_ratio: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub since: Option<String>,
    pub buckets: Vec<DayBucket>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub since: Option<String>,
    pub buckets: Vec<MonthBucket>,
}

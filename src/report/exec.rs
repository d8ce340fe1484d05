use super::{daily_reports, monthly_reports};
use super::{
    output_daily_json, output_daily_table, output_monthly_json, output_monthly_table,
    output_ndjson,
};
use crate::cli::CommonArgs;
use crate::git::{resolve_since, GitLog};
use crate::parse::{parse_log, parse_log_with_progress};
use anyhow::Context;
use chrono::Utc;

pub fn exec(common: CommonArgs, json: bool, ndjson: bool, monthly: bool) -> anyhow::Result<()> {
    let repo = GitLog::open(common.repo.as_ref()).context("Failed to open git repository")?;

    let now = Utc::now();
    let since = common
        .since
        .as_deref()
        .map(|expr| resolve_since(expr, now))
        .transpose()
        .context("Failed to resolve since expression")?;

    let mut stream = repo.spawn_log(since).context("Failed to run git log")?;

    // Progress stays off for JSON/NDJSON to keep stdout machine-clean
    let records = if json || ndjson {
        parse_log(&mut stream)
    } else {
        parse_log_with_progress(&mut stream)
    }
    .context("Failed to parse commit log")?;

    stream.finish().context("git log failed")?;

    if monthly {
        let buckets = monthly_reports(&records);
        if json {
            output_monthly_json(&buckets, &repo, common.since.as_deref())?;
        } else if ndjson {
            output_ndjson(&buckets)?;
        } else {
            output_monthly_table(&buckets, common.since.as_deref())?;
        }
    } else {
        let buckets = daily_reports(&records, now.timestamp());
        if json {
            output_daily_json(&buckets, &repo, common.since.as_deref())?;
        } else if ndjson {
            output_ndjson(&buckets)?;
        } else {
            output_daily_table(&buckets, common.since.as_deref())?;
        }
    }

    Ok(())
}

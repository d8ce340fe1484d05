use crate::git::GitLog;
use crate::model::{DailyOutput, DayBucket, MonthBucket, MonthlyOutput, SCHEMA_VERSION};
use crate::util::{day_label, month_label};
use anyhow::Result;
use chrono::Utc;
use console::style;
use serde::Serialize;

pub fn output_daily_json(buckets: &[DayBucket], repo: &GitLog, since: Option<&str>) -> Result<()> {
    let output = DailyOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: repo.path().to_string_lossy().to_string(),
        since: since.map(str::to_string),
        buckets: buckets.to_vec(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_monthly_json(
    buckets: &[MonthBucket],
    repo: &GitLog,
    since: Option<&str>,
) -> Result<()> {
    let output = MonthlyOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: repo.path().to_string_lossy().to_string(),
        since: since.map(str::to_string),
        buckets: buckets.to_vec(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_ndjson<T: Serialize>(buckets: &[T]) -> Result<()> {
    for bucket in buckets {
        println!("{}", serde_json::to_string(bucket)?);
    }
    Ok(())
}

pub fn output_daily_table(buckets: &[DayBucket], since: Option<&str>) -> Result<()> {
    if buckets.is_empty() {
        println!("No commits to report");
        return Ok(());
    }
    if let Some(since) = since {
        println!("Filtering commits since {since}");
    }

    let max_commits = buckets.iter().map(|b| b.commit_count).max().unwrap_or(1);
    let max_lines = buckets
        .iter()
        .map(|b| b.lines_added.saturating_add(b.lines_deleted))
        .max()
        .unwrap_or(1);

    println!("{}", style("Daily Activity").bold());
    println!("{}", "─".repeat(64));
    println!(
        "{:<12} {:>8} {:>9} {:>9} {:>9} {:>7}",
        style("Date").bold(),
        style("Commits").bold(),
        style("Added").bold(),
        style("Deleted").bold(),
        style("Avg").bold(),
        style("Ratio").bold()
    );

    for bucket in buckets {
        let row = format!(
            "{:<12} {:>8} {:>9} {:>9} {:>9.1} {:>7.4}",
            day_label(bucket.day_start),
            bucket.commit_count,
            bucket.lines_added,
            bucket.lines_deleted,
            bucket.avg_commit_size,
            bucket.refactoring_ratio
        );
        if bucket.commit_count == 0 {
            println!("{}", style(row).dim());
        } else {
            println!(
                "{} {} {}",
                row,
                style(commit_intensity(bucket.commit_count, max_commits)).green(),
                style(lines_intensity(
                    bucket.lines_added.saturating_add(bucket.lines_deleted),
                    max_lines
                ))
                .blue()
            );
        }
    }

    let trend: String = buckets
        .iter()
        .map(|b| commit_intensity(b.commit_count, max_commits))
        .collect();
    println!("\n{} {}", style("Trend").bold(), style(trend).green());

    let active = buckets.iter().filter(|b| b.commit_count > 0).count();
    let total_commits: u64 = buckets.iter().map(|b| u64::from(b.commit_count)).sum();
    let total_added = buckets
        .iter()
        .fold(0u64, |acc, b| acc.saturating_add(b.lines_added));
    let total_deleted = buckets
        .iter()
        .fold(0u64, |acc, b| acc.saturating_add(b.lines_deleted));

    println!("\n{}", style("Summary").bold());
    println!("Days: {} ({} active)", buckets.len(), style(active).cyan());
    println!("Commits: {}", style(total_commits).cyan());
    println!("Lines added: {}", style(format!("+{total_added}")).green());
    println!("Lines deleted: {}", style(format!("-{total_deleted}")).red());

    println!("\n{}", style("Legend").bold());
    println!("  {} commits intensity", style("▁▃▅▇█").green());
    println!("  {} lines intensity", style("░▒▓█").blue());

    Ok(())
}

pub fn output_monthly_table(buckets: &[MonthBucket], since: Option<&str>) -> Result<()> {
    if buckets.is_empty() {
        println!("No commits to report");
        return Ok(());
    }
    if let Some(since) = since {
        println!("Filtering commits since {since}");
    }

    let max_commits = buckets.iter().map(|b| b.commit_count).max().unwrap_or(1);
    let max_lines = buckets
        .iter()
        .map(|b| b.lines_added.saturating_add(b.lines_deleted))
        .max()
        .unwrap_or(1);

    println!("{}", style("Monthly Activity").bold());
    println!("{}", "─".repeat(60));
    println!(
        "{:<8} {:>8} {:>9} {:>9} {:>9} {:>7}",
        style("Month").bold(),
        style("Commits").bold(),
        style("Added").bold(),
        style("Deleted").bold(),
        style("Avg").bold(),
        style("Ratio").bold()
    );

    for bucket in buckets {
        println!(
            "{:<8} {:>8} {:>9} {:>9} {:>9.1} {:>7.4} {} {}",
            month_label(bucket.sample_timestamp),
            bucket.commit_count,
            bucket.lines_added,
            bucket.lines_deleted,
            bucket.avg_commit_size,
            bucket.refactoring_ratio,
            style(commit_intensity(bucket.commit_count, max_commits)).green(),
            style(lines_intensity(
                bucket.lines_added.saturating_add(bucket.lines_deleted),
                max_lines
            ))
            .blue()
        );
    }

    let total_commits: u64 = buckets.iter().map(|b| u64::from(b.commit_count)).sum();
    let total_added = buckets
        .iter()
        .fold(0u64, |acc, b| acc.saturating_add(b.lines_added));
    let total_deleted = buckets
        .iter()
        .fold(0u64, |acc, b| acc.saturating_add(b.lines_deleted));

    println!("\n{}", style("Summary").bold());
    println!("Months: {}", style(buckets.len()).cyan());
    println!("Commits: {}", style(total_commits).cyan());
    println!("Lines added: {}", style(format!("+{total_added}")).green());
    println!("Lines deleted: {}", style(format!("-{total_deleted}")).red());

    println!("\n{}", style("Legend").bold());
    println!("  {} commits intensity", style("▁▃▅▇█").green());
    println!("  {} lines intensity", style("░▒▓█").blue());

    Ok(())
}

fn commit_intensity(count: u32, max: u32) -> char {
    let intensity = ((count as f64 / max as f64) * 5.0) as u32;
    match intensity {
        0 => ' ',
        1 => '▁',
        2 => '▃',
        3 => '▅',
        4 => '▇',
        _ => '█',
    }
}

fn lines_intensity(lines: u64, max: u64) -> char {
    let intensity = ((lines as f64 / max as f64) * 5.0) as u32;
    match intensity {
        0 => ' ',
        1 => '░',
        2 => '▒',
        3 => '▓',
        _ => '█',
    }
}

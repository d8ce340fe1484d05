use gitpulse::model::CommitRecord;
use gitpulse::report::{daily_reports, monthly_reports};
use gitpulse::util::{day_floor, month_key, SECONDS_PER_DAY};
use pretty_assertions::assert_eq;

const DAY: i64 = SECONDS_PER_DAY;

// 2023-11-15T00:00:00Z, exactly on a day boundary.
const DAY_START: i64 = 1_700_006_400;

const JAN_15: i64 = 1_705_320_000; // 2024-01-15T12:00:00Z
const JAN_16: i64 = 1_705_406_400;
const JAN_31: i64 = 1_706_659_200; // 2024-01-31T00:00:00Z
const FEB_1: i64 = 1_706_745_600; // 2024-02-01T00:00:00Z
const MAR_10: i64 = 1_710_028_800;

fn commit(timestamp: i64, lines_added: u64, lines_deleted: u64) -> CommitRecord {
    CommitRecord {
        timestamp,
        lines_added,
        lines_deleted,
    }
}

#[test]
fn daily_fills_gap_days_with_zero_buckets() {
    let commits = vec![commit(DAY_START, 10, 5), commit(DAY_START + 5 * DAY, 2, 0)];
    let buckets = daily_reports(&commits, DAY_START + 5 * DAY);

    assert_eq!(buckets.len(), 6);
    assert_eq!(buckets[0].commit_count, 1);
    assert_eq!(buckets[5].commit_count, 1);
    for bucket in &buckets[1..5] {
        assert_eq!(bucket.commit_count, 0);
        assert_eq!(bucket.lines_added, 0);
        assert_eq!(bucket.lines_deleted, 0);
        assert_eq!(bucket.avg_commit_size, 0.0);
        assert_eq!(bucket.refactoring_ratio, 0.0);
    }

    // Consecutive midnight-aligned days, ascending.
    for pair in buckets.windows(2) {
        assert_eq!(pair[1].day_start - pair[0].day_start, DAY);
    }
    assert_eq!(buckets[0].day_start % DAY, 0);
}

#[test]
fn daily_span_extends_to_now() {
    let commits = vec![commit(DAY_START, 1, 1)];
    let buckets = daily_reports(&commits, DAY_START + 3 * DAY);

    assert_eq!(buckets.len(), 4);
    assert_eq!(buckets[0].commit_count, 1);
    assert!(buckets[1..].iter().all(|b| b.commit_count == 0));
}

#[test]
fn daily_span_covers_commits_newer_than_a_stale_clock() {
    let commits = vec![commit(DAY_START, 1, 0), commit(DAY_START + 2 * DAY, 1, 0)];
    let buckets = daily_reports(&commits, DAY_START - 10 * DAY);

    assert_eq!(buckets.len(), 3);
    assert_eq!(buckets[2].commit_count, 1);
}

#[test]
fn daily_accepts_unsorted_input() {
    let commits = vec![
        commit(DAY_START + 2 * DAY, 1, 0),
        commit(DAY_START, 1, 0),
        commit(DAY_START + DAY, 1, 0),
    ];
    let buckets = daily_reports(&commits, DAY_START + 2 * DAY);

    let counts: Vec<u32> = buckets.iter().map(|b| b.commit_count).collect();
    assert_eq!(counts, vec![1, 1, 1]);
}

#[test]
fn daily_groups_same_day_commits() {
    let commits = vec![
        commit(DAY_START + 60, 10, 4),
        commit(DAY_START + 3_600, 5, 1),
        commit(DAY_START + DAY - 1, 5, 5),
    ];
    let buckets = daily_reports(&commits, DAY_START);

    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].commit_count, 3);
    assert_eq!(buckets[0].lines_added, 20);
    assert_eq!(buckets[0].lines_deleted, 10);
}

#[test]
fn derived_metrics_match_known_values() {
    // 16 commits in one day totalling 1901 added / 385 deleted.
    let mut commits = vec![commit(DAY_START, 1886, 370)];
    for hour in 1..16 {
        commits.push(commit(DAY_START + hour * 3_600, 1, 1));
    }
    let buckets = daily_reports(&commits, DAY_START);

    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].commit_count, 16);
    assert_eq!(buckets[0].lines_added, 1901);
    assert_eq!(buckets[0].lines_deleted, 385);
    assert_eq!(buckets[0].avg_commit_size.round(), 143.0);
    assert!((buckets[0].refactoring_ratio - 0.2026).abs() < 1e-4);
}

#[test]
fn refactoring_ratio_is_zero_when_nothing_added() {
    let buckets = daily_reports(&[commit(DAY_START, 0, 42)], DAY_START);

    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].refactoring_ratio, 0.0);
    assert_eq!(buckets[0].avg_commit_size, 42.0);
}

#[test]
fn empty_input_produces_empty_reports() {
    assert!(daily_reports(&[], DAY_START).is_empty());
    assert!(monthly_reports(&[]).is_empty());
}

#[test]
fn monthly_skips_empty_months() {
    let commits = vec![
        commit(JAN_15, 100, 10),
        commit(JAN_16, 50, 5),
        commit(MAR_10, 7, 3),
    ];
    let buckets = monthly_reports(&commits);

    assert_eq!(buckets.len(), 2);
    assert!(buckets[0].month_key < buckets[1].month_key);
    assert_eq!(buckets[0].commit_count, 2);
    assert_eq!(buckets[0].lines_added, 150);
    assert_eq!(buckets[0].lines_deleted, 15);
    assert_eq!(buckets[1].commit_count, 1);
}

#[test]
fn month_key_splits_on_calendar_boundaries() {
    assert_eq!(month_key(JAN_15), month_key(JAN_31));
    assert_ne!(month_key(JAN_31), month_key(FEB_1));
    assert!(month_key(JAN_31) < month_key(FEB_1));

    let buckets = monthly_reports(&[commit(JAN_31, 1, 0), commit(FEB_1, 1, 0)]);
    assert_eq!(buckets.len(), 2);
}

#[test]
fn month_sample_timestamp_is_first_seen() {
    // Reverse-chronological input, like git log emits.
    let buckets = monthly_reports(&[commit(JAN_16, 1, 0), commit(JAN_15, 1, 0)]);

    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].sample_timestamp, JAN_16);
}

#[test]
fn monthly_handles_extreme_timestamps() {
    let buckets = monthly_reports(&[commit(i64::MAX, 1, 0), commit(i64::MIN, 2, 0)]);

    assert_eq!(buckets.len(), 2);
    assert!(buckets[0].month_key < buckets[1].month_key);
    assert_eq!(buckets[0].lines_added, 2);
}

#[test]
fn aggregation_saturates_on_extreme_line_counts() {
    let commits = vec![
        commit(DAY_START, u64::MAX, 1),
        commit(DAY_START + 60, u64::MAX, u64::MAX),
    ];

    let buckets = daily_reports(&commits, DAY_START);
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].commit_count, 2);
    assert_eq!(buckets[0].lines_added, u64::MAX);
    assert_eq!(buckets[0].lines_deleted, u64::MAX);
    assert!(buckets[0].avg_commit_size.is_finite());
    assert!(buckets[0].refactoring_ratio.is_finite());

    let monthly = monthly_reports(&commits);
    assert_eq!(monthly.len(), 1);
    assert_eq!(monthly[0].lines_added, u64::MAX);
}

#[test]
fn day_floor_rounds_pre_epoch_toward_earlier_day() {
    assert_eq!(day_floor(0), 0);
    assert_eq!(day_floor(DAY - 1), 0);
    assert_eq!(day_floor(DAY), DAY);
    assert_eq!(day_floor(-1), -DAY);
    assert_eq!(day_floor(-DAY), -DAY);
    assert_eq!(day_floor(-DAY - 1), -2 * DAY);
}

#[test]
fn aggregation_is_deterministic_across_reruns() {
    let commits: Vec<CommitRecord> = (0..200)
        .map(|i| {
            commit(
                DAY_START + i * 9_000,
                (i as u64 % 7) * 3,
                i as u64 % 5,
            )
        })
        .collect();
    let now = DAY_START + 200 * 9_000;

    let daily_a = daily_reports(&commits, now);
    let daily_b = daily_reports(&commits, now);
    assert_eq!(daily_a, daily_b);
    assert_eq!(
        serde_json::to_string(&daily_a).unwrap(),
        serde_json::to_string(&daily_b).unwrap()
    );

    let monthly_a = monthly_reports(&commits);
    let monthly_b = monthly_reports(&commits);
    assert_eq!(monthly_a, monthly_b);
    assert_eq!(
        serde_json::to_string(&monthly_a).unwrap(),
        serde_json::to_string(&monthly_b).unwrap()
    );
}

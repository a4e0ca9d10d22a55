//! Aggregate analytics over a (possibly genre-filtered) set of users.
//!
//! Genre distribution and series popularity are counted from the records.
//! The weekly average watch time is synthetic demo data: it is drawn at
//! random on every call and has no relationship to any record's
//! `watch_time`. The placeholder summary figures are likewise fixed display
//! values; [`SummaryStats::computed`] derives the same four figures from the
//! records instead.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{CountRow, DayValue, SummaryStats, UserRecord};

/// Canonical weekday order used by the weekly chart
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Inclusive bounds of the synthetic weekly average hours
pub const SYNTHETIC_HOURS_MIN: u32 = 1;
pub const SYNTHETIC_HOURS_MAX: u32 = 20;

const PLACEHOLDER_TOTAL_USERS: usize = 22000;
const PLACEHOLDER_TOTAL_SERIES: usize = 1040;
const PLACEHOLDER_TOP_GENRE: &str = "Action";
const PLACEHOLDER_TOP_DAY: &str = "Friday";

/// Which summary figures the dashboard shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMode {
    /// Fixed display values
    #[default]
    Placeholder,
    /// Figures derived from the dataset
    Computed,
}

/// Everything the analytics section shows for one selection
#[derive(Debug, Clone, Serialize)]
pub struct Analytics {
    pub user_count: usize,
    pub genre_distribution: Vec<CountRow>,
    pub series_popularity: Vec<CountRow>,
    pub weekly_average_hours: Vec<DayValue>,
    pub summary: SummaryStats,
}

impl Analytics {
    /// Runs every aggregation over `records`
    pub fn compute<R: Rng>(
        records: &[&UserRecord],
        mode: SummaryMode,
        rng: &mut R,
    ) -> Self {
        let summary = match mode {
            SummaryMode::Placeholder => SummaryStats::placeholder(),
            SummaryMode::Computed => SummaryStats::computed(records),
        };

        Self {
            user_count: records.len(),
            genre_distribution: genre_distribution(records),
            series_popularity: series_popularity(records),
            weekly_average_hours: weekly_average_hours(rng),
            summary,
        }
    }
}

/// Counts every (user, preferred genre) pair
pub fn genre_distribution(records: &[&UserRecord]) -> Vec<CountRow> {
    count_values(
        records
            .iter()
            .flat_map(|u| u.preferred_genres.iter().map(String::as_str)),
    )
}

/// Counts how many users were recommended each series
pub fn series_popularity(records: &[&UserRecord]) -> Vec<CountRow> {
    count_values(records.iter().map(|u| u.series.as_str()))
}

/// One random whole number of hours in `[1, 20]` per weekday, Monday first
pub fn weekly_average_hours<R: Rng>(rng: &mut R) -> Vec<DayValue> {
    WEEKDAYS
        .iter()
        .map(|day| DayValue {
            day: day.to_string(),
            value: f64::from(rng.random_range(SYNTHETIC_HOURS_MIN..=SYNTHETIC_HOURS_MAX)),
        })
        .collect()
}

/// Tallies values, most frequent first; ties keep first-seen order.
fn count_values<'a>(values: impl Iterator<Item = &'a str>) -> Vec<CountRow> {
    let mut rows: Vec<CountRow> = Vec::new();
    for value in values {
        match rows.iter_mut().find(|row| row.label == value) {
            Some(row) => row.count += 1,
            None => rows.push(CountRow {
                label: value.to_string(),
                count: 1,
            }),
        }
    }
    // stable sort keeps first-seen order among equal counts
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

impl SummaryStats {
    pub fn placeholder() -> Self {
        Self {
            total_users: PLACEHOLDER_TOTAL_USERS,
            total_series: PLACEHOLDER_TOTAL_SERIES,
            top_genre: Some(PLACEHOLDER_TOP_GENRE.to_string()),
            highest_watch_time_day: Some(PLACEHOLDER_TOP_DAY.to_string()),
            placeholder: true,
        }
    }

    pub fn computed(records: &[&UserRecord]) -> Self {
        let series = series_popularity(records);
        let top_genre = genre_distribution(records)
            .into_iter()
            .next()
            .map(|row| row.label);

        Self {
            total_users: records.len(),
            total_series: series.len(),
            top_genre,
            highest_watch_time_day: busiest_day(records),
            placeholder: false,
        }
    }
}

/// The day with the most summed hours across all users; first-seen wins ties
fn busiest_day(records: &[&UserRecord]) -> Option<String> {
    let mut totals: Vec<(&str, f64)> = Vec::new();
    for (day, hours) in records.iter().flat_map(|u| u.watch_time.iter()) {
        match totals.iter_mut().find(|entry| entry.0 == day.as_str()) {
            Some(entry) => entry.1 += *hours,
            None => totals.push((day.as_str(), *hours)),
        }
    }

    totals
        .into_iter()
        .fold(None, |best: Option<(&str, f64)>, (day, total)| match best {
            Some((_, best_total)) if best_total >= total => best,
            _ => Some((day, total)),
        })
        .map(|(day, _)| day.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn record(id: i64, series: &str, genres: &[&str], watch: &[(&str, f64)]) -> UserRecord {
        UserRecord {
            user_id: id,
            series: series.to_string(),
            genre: "Drama".to_string(),
            description: String::new(),
            image_url: String::new(),
            preferred_genres: genres.iter().map(|g| g.to_string()).collect(),
            watch_time: watch.iter().map(|(d, h)| (d.to_string(), *h)).collect(),
        }
    }

    fn records() -> Vec<UserRecord> {
        vec![
            record(1, "Kota Factory", &["Drama", "Comedy"], &[("Monday", 2.0), ("Friday", 1.0)]),
            record(2, "Mirzapur", &["Action", "Drama"], &[("Friday", 4.0)]),
            record(3, "Kota Factory", &["Comedy"], &[]),
            record(4, "Asur", &[], &[("Monday", 3.0)]),
        ]
    }

    #[test]
    fn test_genre_distribution_counts_every_membership() {
        let records = records();
        let refs: Vec<&UserRecord> = records.iter().collect();
        let rows = genre_distribution(&refs);

        let total: usize = rows.iter().map(|r| r.count).sum();
        let pairs: usize = records.iter().map(|u| u.preferred_genres.len()).sum();
        assert_eq!(total, pairs);

        assert_eq!(
            rows,
            vec![
                CountRow { label: "Drama".to_string(), count: 2 },
                CountRow { label: "Comedy".to_string(), count: 2 },
                CountRow { label: "Action".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_series_popularity_sums_to_record_count() {
        let records = records();
        let refs: Vec<&UserRecord> = records.iter().collect();
        let rows = series_popularity(&refs);

        assert_eq!(rows.iter().map(|r| r.count).sum::<usize>(), records.len());
        assert_eq!(rows[0], CountRow { label: "Kota Factory".to_string(), count: 2 });
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_empty_input_gives_empty_tables() {
        assert!(genre_distribution(&[]).is_empty());
        assert!(series_popularity(&[]).is_empty());
    }

    #[test]
    fn test_weekly_average_has_seven_days_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let rows = weekly_average_hours(&mut rng);
            let days: Vec<&str> = rows.iter().map(|r| r.day.as_str()).collect();
            assert_eq!(days, WEEKDAYS);
            assert!(rows.iter().all(|r| (1.0..=20.0).contains(&r.value)));
            assert!(rows.iter().all(|r| r.value.fract() == 0.0));
        }
    }

    #[test]
    fn test_weekly_average_is_not_fixed() {
        let mut rng = StdRng::seed_from_u64(42);
        let draws: Vec<Vec<DayValue>> = (0..10).map(|_| weekly_average_hours(&mut rng)).collect();
        assert!(draws.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_placeholder_summary_is_constant() {
        let summary = SummaryStats::placeholder();
        assert_eq!(summary.total_users, 22000);
        assert_eq!(summary.total_series, 1040);
        assert_eq!(summary.top_genre.as_deref(), Some("Action"));
        assert_eq!(summary.highest_watch_time_day.as_deref(), Some("Friday"));
        assert!(summary.placeholder);
    }

    #[test]
    fn test_computed_summary() {
        let records = records();
        let refs: Vec<&UserRecord> = records.iter().collect();
        let summary = SummaryStats::computed(&refs);
        assert_eq!(summary.total_users, 4);
        assert_eq!(summary.total_series, 3);
        assert_eq!(summary.top_genre.as_deref(), Some("Drama"));
        assert_eq!(summary.highest_watch_time_day.as_deref(), Some("Monday"));
        assert!(!summary.placeholder);
    }

    #[test]
    fn test_computed_summary_single_user() {
        let user = record(1, "X", &["Drama", "Comedy"], &[("Monday", 2.0), ("Tuesday", 3.0)]);
        let summary = SummaryStats::computed(&[&user]);
        assert_eq!(summary.total_users, 1);
        assert_eq!(summary.total_series, 1);
        assert_eq!(summary.top_genre.as_deref(), Some("Drama"));
        assert_eq!(summary.highest_watch_time_day.as_deref(), Some("Tuesday"));
    }

    #[test]
    fn test_computed_summary_of_nothing() {
        let summary = SummaryStats::computed(&[]);
        assert_eq!(summary.total_users, 0);
        assert_eq!(summary.top_genre, None);
        assert_eq!(summary.highest_watch_time_day, None);
    }

    #[test]
    fn test_analytics_uses_selected_summary_mode() {
        let records = records();
        let refs: Vec<&UserRecord> = records.iter().collect();
        let mut rng = StdRng::seed_from_u64(1);

        let analytics = Analytics::compute(&refs, SummaryMode::Computed, &mut rng);
        assert_eq!(analytics.user_count, 4);
        assert_eq!(analytics.summary.total_users, 4);
        assert_eq!(analytics.weekly_average_hours.len(), 7);

        let analytics = Analytics::compute(&refs, SummaryMode::Placeholder, &mut rng);
        assert_eq!(analytics.summary.total_users, 22000);
    }

    #[test]
    fn test_summary_mode_parses_lowercase() {
        let mode: SummaryMode = serde_json::from_str("\"computed\"").unwrap();
        assert_eq!(mode, SummaryMode::Computed);
    }
}

use serde::{Deserialize, Serialize};

pub mod user_record;

pub use user_record::{RawUserRecord, UserRecord};

/// The dataset document: `{ "users": [ ... ] }`
#[derive(Debug, Deserialize)]
pub struct DatasetDocument {
    pub users: Vec<RawUserRecord>,
}

/// A `(label, count)` row of a categorical chart
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CountRow {
    pub label: String,
    pub count: usize,
}

/// A `(day, value)` row of a per-day chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DayValue {
    pub day: String,
    pub value: f64,
}

/// The four figures shown under "Summary Statistics"
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummaryStats {
    pub total_users: usize,
    pub total_series: usize,
    pub top_genre: Option<String>,
    pub highest_watch_time_day: Option<String>,
    /// True when the figures are fixed display values rather than derived
    /// from the dataset
    pub placeholder: bool,
}

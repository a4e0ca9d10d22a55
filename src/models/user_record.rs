use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One user's stored preference/recommendation entry, after normalization
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserRecord {
    /// Identifier looked up from the dashboard (1..=25 in the sample data)
    pub user_id: i64,
    /// The recommended series
    pub series: String,
    /// Primary genre of the recommended series
    pub genre: String,
    pub description: String,
    /// Cover image reference, resolved by the browser
    pub image_url: String,
    /// Genres the user prefers, in document order
    pub preferred_genres: Vec<String>,
    /// Day name to hours watched, in document order
    pub watch_time: Vec<(String, f64)>,
}

/// A user record exactly as it appears in the dataset document
///
/// `preferred_genres` and `watch_time` are kept as raw JSON so that a
/// malformed shape degrades to "empty" instead of rejecting the whole file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawUserRecord {
    pub user_id: i64,
    pub series: String,
    pub genre: String,
    pub description: String,
    pub image_url: String,
    #[serde(default)]
    pub preferred_genres: Value,
    #[serde(default)]
    pub watch_time: Value,
}

impl From<RawUserRecord> for UserRecord {
    fn from(raw: RawUserRecord) -> Self {
        Self {
            user_id: raw.user_id,
            series: raw.series,
            genre: raw.genre,
            description: raw.description,
            image_url: raw.image_url,
            preferred_genres: normalize_genres(&raw.preferred_genres),
            watch_time: normalize_watch_time(&raw.watch_time),
        }
    }
}

impl UserRecord {
    /// Whether `genre` is one of this user's preferred genres (exact match)
    pub fn prefers(&self, genre: &str) -> bool {
        self.preferred_genres.iter().any(|g| g == genre)
    }
}

/// Anything other than an array is treated as "no genres"; non-string
/// elements inside an array are skipped.
pub fn normalize_genres(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Anything other than an object is treated as "no watch time"; entries
/// whose value is not a number are dropped.
pub fn normalize_watch_time(value: &Value) -> Vec<(String, f64)> {
    match value {
        Value::Object(days) => days
            .iter()
            .filter_map(|(day, hours)| hours.as_f64().map(|h| (day.clone(), h)))
            .collect(),
        _ => Vec::new(),
    }
}

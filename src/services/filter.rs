use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::models::UserRecord;

/// Select-box value meaning "no filtering applied"
pub const ALL_GENRES: &str = "All";

/// The genre picked in the analytics filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum GenreSelection {
    #[default]
    All,
    Genre(String),
}

impl GenreSelection {
    pub fn as_str(&self) -> &str {
        match self {
            GenreSelection::All => ALL_GENRES,
            GenreSelection::Genre(genre) => genre,
        }
    }
}

impl From<Option<String>> for GenreSelection {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(genre) if !genre.is_empty() && genre != ALL_GENRES => {
                GenreSelection::Genre(genre)
            }
            _ => GenreSelection::All,
        }
    }
}

impl From<GenreSelection> for String {
    fn from(selection: GenreSelection) -> Self {
        selection.as_str().to_string()
    }
}

impl Display for GenreSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Narrows `records` to the users who prefer the selected genre
pub fn filter_by_genre<'a>(
    records: &'a [UserRecord],
    selection: &GenreSelection,
) -> Vec<&'a UserRecord> {
    match selection {
        GenreSelection::All => records.iter().collect(),
        GenreSelection::Genre(genre) => records.iter().filter(|u| u.prefers(genre)).collect(),
    }
}

/// The options offered by the genre select box
///
/// `"All"` followed by every preferred genre in the full dataset, first-seen
/// order, without duplicates.
pub fn genre_options(records: &[UserRecord]) -> Vec<String> {
    let mut options = vec![ALL_GENRES.to_string()];
    for genre in records.iter().flat_map(|u| u.preferred_genres.iter()) {
        if !options.contains(genre) {
            options.push(genre.clone());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, genres: &[&str]) -> UserRecord {
        UserRecord {
            user_id: id,
            series: format!("Series {id}"),
            genre: "Drama".to_string(),
            description: String::new(),
            image_url: String::new(),
            preferred_genres: genres.iter().map(|g| g.to_string()).collect(),
            watch_time: Vec::new(),
        }
    }

    fn records() -> Vec<UserRecord> {
        vec![
            record(1, &["Drama", "Comedy"]),
            record(2, &["Action"]),
            record(3, &[]),
            record(4, &["Comedy", "Thriller"]),
        ]
    }

    #[test]
    fn test_all_returns_every_record_in_order() {
        let records = records();
        let filtered = filter_by_genre(&records, &GenreSelection::All);
        let ids: Vec<i64> = filtered.iter().map(|u| u.user_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_genre_keeps_only_matching_records() {
        let records = records();
        let filtered = filter_by_genre(&records, &GenreSelection::Genre("Comedy".to_string()));
        let ids: Vec<i64> = filtered.iter().map(|u| u.user_id).collect();
        assert_eq!(ids, vec![1, 4]);
        assert!(filtered.iter().all(|u| u.prefers("Comedy")));
    }

    #[test]
    fn test_unknown_genre_matches_nothing() {
        let records = records();
        let filtered = filter_by_genre(&records, &GenreSelection::Genre("Horror".to_string()));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_genre_options_are_deduplicated_in_first_seen_order() {
        assert_eq!(
            genre_options(&records()),
            vec!["All", "Drama", "Comedy", "Action", "Thriller"]
        );
    }

    #[test]
    fn test_genre_options_for_empty_dataset() {
        assert_eq!(genre_options(&[]), vec!["All"]);
    }

    #[test]
    fn test_selection_from_query_value() {
        assert_eq!(GenreSelection::from(None), GenreSelection::All);
        assert_eq!(GenreSelection::from(Some(String::new())), GenreSelection::All);
        assert_eq!(GenreSelection::from(Some("All".to_string())), GenreSelection::All);
        assert_eq!(
            GenreSelection::from(Some("Drama".to_string())),
            GenreSelection::Genre("Drama".to_string())
        );
    }

    #[test]
    fn test_selection_serializes_as_plain_string() {
        let json = serde_json::to_string(&GenreSelection::Genre("Drama".to_string())).unwrap();
        assert_eq!(json, "\"Drama\"");
        assert_eq!(serde_json::to_string(&GenreSelection::All).unwrap(), "\"All\"");
    }
}

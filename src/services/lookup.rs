use serde::Serialize;

use crate::{
    error::{AppError, AppResult},
    models::{DayValue, UserRecord},
};

/// `(Day, Hours)` rows derived from one user's watch-time mapping
pub type WatchTimeTable = Vec<DayValue>;

/// A resolved user together with their watch-time table
#[derive(Debug, Clone, Serialize)]
pub struct UserLookup<'a> {
    pub user: &'a UserRecord,
    pub watch_time: WatchTimeTable,
}

/// Finds the first record whose `user_id` equals `id`
///
/// Duplicated ids are not rejected; the earliest record in load order wins.
pub fn find_user(records: &[UserRecord], id: i64) -> AppResult<UserLookup<'_>> {
    let user = records
        .iter()
        .find(|u| u.user_id == id)
        .ok_or(AppError::UserNotFound(id))?;

    Ok(UserLookup {
        user,
        watch_time: watch_time_table(user),
    })
}

fn watch_time_table(user: &UserRecord) -> WatchTimeTable {
    user.watch_time
        .iter()
        .map(|(day, hours)| DayValue {
            day: day.clone(),
            value: *hours,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Dataset;

    fn dataset() -> Dataset {
        Dataset::from_json_str(
            r#"{"users": [
                {"user_id": 1, "series": "X", "genre": "Drama", "description": "d",
                 "image_url": "u", "preferred_genres": ["Drama", "Comedy"],
                 "watch_time": {"Monday": 2, "Tuesday": 3}},
                {"user_id": 5, "series": "First", "genre": "Action", "description": "a",
                 "image_url": "a", "preferred_genres": [], "watch_time": "n/a"},
                {"user_id": 5, "series": "Second", "genre": "Action", "description": "b",
                 "image_url": "b", "preferred_genres": [], "watch_time": {}}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_find_existing_user() {
        let dataset = dataset();
        let lookup = find_user(dataset.users(), 1).unwrap();
        assert_eq!(lookup.user.series, "X");
        assert_eq!(
            lookup.watch_time,
            vec![
                DayValue { day: "Monday".to_string(), value: 2.0 },
                DayValue { day: "Tuesday".to_string(), value: 3.0 },
            ]
        );
    }

    #[test]
    fn test_missing_user_is_not_found() {
        let dataset = dataset();
        for id in [0, 2, 26] {
            assert!(matches!(
                find_user(dataset.users(), id),
                Err(AppError::UserNotFound(missing)) if missing == id
            ));
        }
    }

    #[test]
    fn test_malformed_watch_time_gives_empty_table() {
        let dataset = dataset();
        let lookup = find_user(dataset.users(), 5).unwrap();
        assert!(lookup.watch_time.is_empty());
    }

    #[test]
    fn test_duplicate_ids_return_first_in_load_order() {
        let dataset = dataset();
        let lookup = find_user(dataset.users(), 5).unwrap();
        assert_eq!(lookup.user.series, "First");
    }
}

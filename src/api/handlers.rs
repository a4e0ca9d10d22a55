use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use maud::Markup;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::UserRecord,
    render::{dashboard_page, page::USER_ID_MIN, recommendation_view, Logo, PageContext},
    services::{filter_by_genre, find_user, Analytics, GenreSelection, WatchTimeTable},
};

use super::AppState;

/// Value of the `action` parameter sent by the "Get Recommendations" button
pub const RECOMMEND_ACTION: &str = "recommend";

// Request/Response types

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub user_id: Option<String>,
    #[serde(default)]
    pub genre: GenreSelection,
    pub action: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsQuery {
    #[serde(default)]
    pub genre: GenreSelection,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: UserRecord,
    pub watch_time: WatchTimeTable,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub selection: GenreSelection,
    #[serde(flatten)]
    pub analytics: Analytics,
}

// Handlers

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "healthy", "users": state.dataset.len() })),
    )
}

/// The dashboard page
///
/// Recommendations are looked up only when the request came from the
/// "Get Recommendations" button; analytics are rendered on every request.
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<DashboardQuery>,
) -> Markup {
    let users = state.dataset.users();
    let user_id = parse_user_id(query.user_id.as_deref());
    let shown_user_id = user_id.as_ref().copied().unwrap_or(USER_ID_MIN);

    let recommendation = if query.action.as_deref() == Some(RECOMMEND_ACTION) {
        let lookup = user_id.and_then(|id| find_user(users, id));
        match &lookup {
            Ok(found) => tracing::debug!(
                request_id = %request_id,
                user_id = found.user.user_id,
                "User found"
            ),
            Err(e) => tracing::info!(request_id = %request_id, error = %e, "Lookup failed"),
        }
        Some(recommendation_view(lookup.as_ref()))
    } else {
        None
    };

    let filtered = filter_by_genre(users, &query.genre);
    tracing::debug!(
        request_id = %request_id,
        genre = %query.genre,
        matched = filtered.len(),
        "Analytics filter applied"
    );
    let analytics = Analytics::compute(&filtered, state.summary_mode, &mut rand::rng());

    dashboard_page(PageContext {
        logo: logo_state(&state),
        user_id: shown_user_id,
        genre_options: &state.genre_options,
        selection: &query.genre,
        recommendation,
        analytics: &analytics,
    })
}

/// Get one user and their watch-time table
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<UserResponse>> {
    let lookup = find_user(state.dataset.users(), user_id)?;
    Ok(Json(UserResponse {
        user: lookup.user.clone(),
        watch_time: lookup.watch_time,
    }))
}

/// Get the genre filter options
pub async fn get_genres(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.genre_options.as_ref().clone())
}

/// Get the analytics for a genre selection
pub async fn get_analytics(
    State(state): State<AppState>,
    Query(query): Query<AnalyticsQuery>,
) -> Json<AnalyticsResponse> {
    let filtered = filter_by_genre(state.dataset.users(), &query.genre);
    let analytics = Analytics::compute(&filtered, state.summary_mode, &mut rand::rng());
    Json(AnalyticsResponse {
        selection: query.genre,
        analytics,
    })
}

/// A missing `user_id` means the input's default; anything that is not a
/// whole number is rejected.
fn parse_user_id(raw: Option<&str>) -> AppResult<i64> {
    match raw.map(str::trim) {
        None | Some("") => Ok(USER_ID_MIN),
        Some(value) => value
            .parse()
            .map_err(|_| AppError::InvalidInput(format!("Invalid user ID '{}'", value))),
    }
}

fn logo_state(state: &AppState) -> Logo {
    if state.logo_path.is_file() {
        Logo::Available
    } else {
        Logo::Missing(state.logo_path.display().to_string())
    }
}

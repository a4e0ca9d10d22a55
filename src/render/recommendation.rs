use maud::{html, Markup};

use crate::{
    error::AppError,
    services::UserLookup,
};

use super::charts::{watch_time_chart, Chart};

pub const USER_NOT_FOUND_MESSAGE: &str = "User not found! Please check the User ID.";
pub const NO_WATCH_TIME_MESSAGE: &str = "No watch time data available.";

/// The recommendation section for one "Get Recommendations" activation
pub struct RecommendationView {
    pub markup: Markup,
    /// The personal watch-time chart, when the user has watch-time data
    pub chart: Option<Chart>,
}

/// Renders a found user, or the inline error when the lookup failed
pub fn recommendation_view(lookup: Result<&UserLookup<'_>, &AppError>) -> RecommendationView {
    let lookup = match lookup {
        Ok(lookup) => lookup,
        Err(AppError::UserNotFound(_)) => {
            return error_view(USER_NOT_FOUND_MESSAGE);
        }
        Err(other) => return error_view(&other.to_string()),
    };

    let user = lookup.user;
    let chart = (!lookup.watch_time.is_empty()).then(|| watch_time_chart(&lookup.watch_time));

    let markup = html! {
        section #recommendation {
            h2 { "Hello, User " (user.user_id) "!" }
            h3 { "Your Recommended Series:" }
            figure {
                img src=(user.image_url) alt=(user.series) width="300";
                figcaption { (user.series) }
            }
            p { strong { "Series:" } " " (user.series) }
            p { strong { "Genre:" } " " (user.genre) }
            p { strong { "Description:" } " " (user.description) }
            p { strong { "Preferred Genres:" } " " (genre_list(&user.preferred_genres)) }

            @if let Some(chart) = &chart {
                h3 { "Your Weekly Watch Time" }
                (chart.container())
            } @else {
                p.no-data { (NO_WATCH_TIME_MESSAGE) }
            }
        }
    };

    RecommendationView { markup, chart }
}

fn error_view(message: &str) -> RecommendationView {
    RecommendationView {
        markup: html! {
            section #recommendation {
                div.error role="alert" { (message) }
            }
        },
        chart: None,
    }
}

/// Renders genres as a bracketed, single-quoted list: `['Drama', 'Comedy']`.
///
/// Quotes inside a genre are not escaped, so `Rock 'n' Roll` shows as
/// `['Rock 'n' Roll']`. The result is plain text; HTML escaping is left to
/// the template.
fn genre_list(genres: &[String]) -> String {
    let quoted: Vec<String> = genres.iter().map(|g| format!("'{}'", g)).collect();
    format!("[{}]", quoted.join(", "))
}

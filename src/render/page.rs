use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::{
    models::SummaryStats,
    services::{Analytics, GenreSelection},
};

use super::{
    charts::{
        charts_script, genre_distribution_chart, series_popularity_chart, weekly_average_chart,
        Chart, PLOTLY_CDN,
    },
    recommendation::RecommendationView,
};

/// Bounds of the user id input
pub const USER_ID_MIN: i64 = 1;
pub const USER_ID_MAX: i64 = 25;

pub const NO_GENRE_DATA_MESSAGE: &str = "No genre data available to display.";
pub const NO_SERIES_DATA_MESSAGE: &str = "No series data available to display.";

/// Where the header logo is served from
pub const LOGO_ROUTE: &str = "/assets/logo";

/// State of the header logo
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Logo {
    Available,
    /// The configured file does not exist; carries its file name
    Missing(String),
}

/// Everything the shell lays out for one request
pub struct PageContext<'a> {
    pub logo: Logo,
    pub user_id: i64,
    pub genre_options: &'a [String],
    pub selection: &'a GenreSelection,
    pub recommendation: Option<RecommendationView>,
    pub analytics: &'a Analytics,
}

/// Renders the whole dashboard page
pub fn dashboard_page(ctx: PageContext<'_>) -> Markup {
    let analytics = ctx.analytics;
    let genre_chart = (!analytics.genre_distribution.is_empty())
        .then(|| genre_distribution_chart(&analytics.genre_distribution));
    let series_chart = (!analytics.series_popularity.is_empty())
        .then(|| series_popularity_chart(&analytics.series_popularity));
    let weekly_chart = weekly_average_chart(&analytics.weekly_average_hours);

    let mut charts: Vec<&Chart> = Vec::new();
    if let Some(chart) = ctx.recommendation.as_ref().and_then(|r| r.chart.as_ref()) {
        charts.push(chart);
    }
    charts.extend(genre_chart.iter());
    charts.extend(series_chart.iter());
    charts.push(&weekly_chart);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Personalized Recommendation System" }
                script src=(PLOTLY_CDN) {}
                style { (PreEscaped(STYLE)) }
            }
            body {
                main {
                    (header(&ctx.logo))

                    h1 { "📺 Personalized Recommendation System" }
                    p {
                        "Welcome to the recommendation system! Enter your user ID to get "
                        "personalized recommendations and explore detailed analytics."
                    }

                    form method="get" action="/" {
                        label for="user_id" { "Enter your User ID :" }
                        input #user_id type="number" name="user_id"
                            min=(USER_ID_MIN) max=(USER_ID_MAX) step="1" value=(ctx.user_id);
                        button type="submit" name="action" value="recommend" {
                            "Get Recommendations"
                        }

                        @if let Some(view) = &ctx.recommendation {
                            (view.markup)
                        }

                        hr;
                        h2 { "📊 Overall User Analytics" }
                        h3 { "Filters for Analytics" }
                        label for="genre" { "Select a Genre to Filter Analytics:" }
                        select #genre name="genre" {
                            @for genre in ctx.genre_options {
                                option value=(genre) selected[genre == ctx.selection.as_str()] {
                                    (genre)
                                }
                            }
                        }
                        button type="submit" name="action" value="filter" { "Apply Filter" }
                    }

                    h3 { "Preferred Genres Distribution" }
                    @if let Some(chart) = &genre_chart {
                        (chart.container())
                    } @else {
                        p.no-data { (NO_GENRE_DATA_MESSAGE) }
                    }

                    h3 { "Most Watched Series" }
                    @if let Some(chart) = &series_chart {
                        (chart.container())
                    } @else {
                        p.no-data { (NO_SERIES_DATA_MESSAGE) }
                    }

                    h3 { "Average Weekly Watch Time" }
                    p.caption { "Randomized demo data, regenerated on every page load." }
                    (weekly_chart.container())

                    (summary(&analytics.summary))
                }
                (charts_script(&charts))
            }
        }
    }
}

fn header(logo: &Logo) -> Markup {
    html! {
        header {
            @match logo {
                Logo::Available => {
                    figure {
                        img src=(LOGO_ROUTE) alt="Logo" width="150";
                        figcaption { "Welcome to Jio Cinemas" }
                    }
                }
                Logo::Missing(name) => {
                    div.error role="alert" { "Logo file '" (name) "' not found!" }
                }
            }
        }
    }
}

fn summary(stats: &SummaryStats) -> Markup {
    let or_none = |value: &Option<String>| value.clone().unwrap_or_else(|| "n/a".to_string());

    html! {
        section #summary {
            h3 { "Summary Statistics" }
            @if stats.placeholder {
                p.caption { "(placeholder figures)" }
            }
            p { strong { "Total Users:" } " " (stats.total_users) }
            p { strong { "Total Series Watched:" } " " (stats.total_series) }
            p { strong { "Top Genre:" } " " (or_none(&stats.top_genre)) }
            p { strong { "Highest Watch Time Day:" } " " (or_none(&stats.highest_watch_time_day)) }
        }
    }
}

const STYLE: &str = r#"
body { font-family: "Source Sans Pro", sans-serif; margin: 0; background: #fff; color: #31333f; }
main { max-width: 730px; margin: 0 auto; padding: 3rem 1rem; }
header figure { margin: 0 0 1rem; }
figcaption, .caption { color: #808495; font-size: 0.875rem; }
form label { display: block; margin: 1rem 0 0.25rem; }
form input, form select { padding: 0.4rem; min-width: 12rem; }
form button { margin: 0.75rem 0.5rem 0 0; padding: 0.4rem 0.9rem; }
.error { background: #ffe9e9; color: #7d353b; padding: 1rem; border-radius: 0.5rem; margin: 1rem 0; }
.chart { min-height: 420px; }
"#;

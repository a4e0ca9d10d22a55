//! HTML rendering of the dashboard.

pub mod charts;
pub mod page;
pub mod recommendation;

pub use page::{dashboard_page, Logo, PageContext};
pub use recommendation::{recommendation_view, RecommendationView};

pub mod analytics;
pub mod filter;
pub mod lookup;

pub use analytics::{Analytics, SummaryMode};
pub use filter::{filter_by_genre, genre_options, GenreSelection};
pub use lookup::{find_user, UserLookup, WatchTimeTable};

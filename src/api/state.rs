use std::path::PathBuf;
use std::sync::Arc;

use crate::{
    config::Config,
    services::{genre_options, SummaryMode},
    store::Dataset,
};

/// Shared application state
///
/// Everything here is read-only after startup, so request handlers share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    /// Select-box options, derived once from the unfiltered dataset
    pub genre_options: Arc<Vec<String>>,
    pub logo_path: Arc<PathBuf>,
    pub summary_mode: SummaryMode,
}

impl AppState {
    /// Creates the state around an already loaded dataset
    pub fn new(dataset: Dataset, config: &Config) -> Self {
        let genre_options = genre_options(dataset.users());
        Self {
            dataset: Arc::new(dataset),
            genre_options: Arc::new(genre_options),
            logo_path: Arc::new(PathBuf::from(&config.logo_path)),
            summary_mode: config.summary_mode,
        }
    }
}

//! Error Types

use thiserror::Error;

/// Failure to load one of the embedded seed lists
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("invalid {list} seed: {source}")]
    Parse {
        list: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

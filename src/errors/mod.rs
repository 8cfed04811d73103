pub mod types;
pub mod classification;

pub use types::SectrackError;
pub use classification::{ErrorClassification, EXIT_FAILURE, EXIT_OK, EXIT_USAGE};

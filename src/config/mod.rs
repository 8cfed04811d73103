pub mod parser;
pub mod types;

pub use types::*;
pub use parser::{load_config, resolve_settings_path};

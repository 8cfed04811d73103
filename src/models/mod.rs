pub mod finding;
pub mod host;

pub use finding::*;
pub use host::*;

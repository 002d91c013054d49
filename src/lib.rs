pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod tracing;
pub mod utils;

pub use engine::*;
pub use error::*;

// Shared fixtures - available to unit and integration tests
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::Result;

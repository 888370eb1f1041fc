pub mod config;
pub mod error;
pub mod input;
pub mod log;
pub mod report;

#[doc(hidden)]
pub use tracing as __tracing;

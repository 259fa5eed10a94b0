//! Application-level configuration.
//!
//! - [`ExecutionParams`]: timeouts and prompt language for external calls

pub mod execution_params;

pub use execution_params::ExecutionParams;

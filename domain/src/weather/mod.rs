//! Weather observations, forecasts and daily summaries.

pub mod entities;
pub mod summary;

//! Weather adapters

mod http;
mod payload;

pub use http::HttpWeatherProvider;
pub use payload::{parse_current, parse_forecast};

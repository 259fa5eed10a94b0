//! Household profile files
//!
//! A profile is a TOML document holding the [`UserInfo`](advisor_domain::UserInfo)
//! used by `suggest`:
//!
//! ```toml
//! chores = ["laundry", "vacuuming"]
//! items = ["umbrella", "parasol"]
//!
//! [equipment]
//! dryer = true
//!
//! [[schedule]]
//! date = "2025-07-03"
//! slots = [{ start = "09:00", end = "17:00" }]
//! ```

mod loader;

pub use loader::{ProfileError, load_profile};

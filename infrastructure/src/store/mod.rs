//! Record store adapters

mod memory;
mod postgrest;
mod rows;

pub use memory::InMemoryRecordStore;
pub use postgrest::PostgrestStore;

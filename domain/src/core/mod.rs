//! Core domain concepts shared across all subdomains.
//!
//! - [`user::UserId`]: a validated, non-empty user identifier
//! - [`error::DomainError`]: domain-level errors
//! - [`error::ValidationError`]: input rejected before any write

pub mod error;
pub mod user;

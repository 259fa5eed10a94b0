//! Chores, completion history, user preferences and scoring.

pub mod entities;
pub mod scoring;

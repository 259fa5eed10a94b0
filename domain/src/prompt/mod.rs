//! Prompt assembly for the language-model activity plan.

pub mod template;

pub use template::{ActivityPromptInput, ActivityPromptTemplate, CATEGORIES};

//! Output formatting

pub mod console;
pub mod formatter;
pub mod json;

/// Turn terminal colors on or off for everything printed afterwards
pub fn set_color_enabled(enabled: bool) {
    colored::control::set_override(enabled);
}

//! Formatter boundary.
//!
//! The formatting routine itself is external and opaque: implementors wrap
//! whatever tool produces the reformatted buffer. The engine only forwards
//! the options and treats the returned string as the new snapshot.

use serde::{Deserialize, Serialize};

/// Options forwarded verbatim to the external formatter.
///
/// Fields left out of a stored configuration fall back to these defaults,
/// so partially-written config documents keep working across upgrades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    #[serde(default = "default_max_width")]
    pub max_width: usize,

    #[serde(default = "default_tab_spaces")]
    pub tab_spaces: usize,

    #[serde(default = "default_blank_lines_upper_bound")]
    pub blank_lines_upper_bound: usize,

    #[serde(default = "default_false")]
    pub collapse_markup_spaces: bool,

    #[serde(default = "default_true")]
    pub reorder_import_items: bool,

    #[serde(default = "default_false")]
    pub wrap_text: bool,
}

fn default_max_width() -> usize {
    80
}

fn default_tab_spaces() -> usize {
    2
}

fn default_blank_lines_upper_bound() -> usize {
    2
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            max_width: default_max_width(),
            tab_spaces: default_tab_spaces(),
            blank_lines_upper_bound: default_blank_lines_upper_bound(),
            collapse_markup_spaces: false,
            reorder_import_items: true,
            wrap_text: false,
        }
    }
}

/// The external formatter rejected its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    pub message: String,
}

impl FormatError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "format failed: {}", self.message)
    }
}

impl std::error::Error for FormatError {}

/// Opaque external formatting routine.
pub trait Formatter {
    fn format(&self, text: &str, options: &FormatOptions) -> Result<String, FormatError>;
}

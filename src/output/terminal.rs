//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use crate::config::OutputConfig;
use colored::Colorize;

/// Insert thousands separators into a decimal string: `65534` -> `65,534`.
///
/// Anything that is not a plain run of digits renders as `<nil>`.
pub fn format_number(value: &str) -> String {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return "<nil>".to_string();
    }
    let len = value.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in value.chars().enumerate() {
        if i != 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Colours labels when the output config allows it.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color: bool,
}

impl Painter {
    pub fn new(config: &OutputConfig) -> Painter {
        Painter {
            color: config.color,
        }
    }

    pub fn heading(&self, text: &str) -> String {
        if self.color {
            text.blue().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn failure(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }
}

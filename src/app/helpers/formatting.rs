//! Text formatting utilities for UI display

use crate::core::contact::MESSAGE_LIMIT;
use crate::core::filter::CategoryFilter;

/// "All (6)" style filter button label
pub fn filter_label(filter: CategoryFilter, count: usize) -> String {
    format!("{filter} ({count})")
}

/// Message length counter shown under the textarea
pub fn char_counter(message: &str) -> String {
    format!("{}/{MESSAGE_LIMIT}", message.chars().count())
}

/// Fill ratio of the message budget in 0..=1
#[allow(clippy::cast_precision_loss)]
pub fn char_budget_ratio(message: &str) -> f32 {
    (message.chars().count() as f32 / MESSAGE_LIMIT as f32).min(1.0)
}

pub fn counter_value(value: u32, suffix: &str) -> String {
    format!("{value}{suffix}")
}

/// Joins technologies for single-line display, e.g. in the CLI table
pub fn tech_list(tech: &[&str]) -> String {
    tech.join(", ")
}

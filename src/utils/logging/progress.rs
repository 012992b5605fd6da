//! Progress reporting utilities for long-running operations
//!
//! Standardized progress bars built on indicatif. Bars can be requested
//! hidden so library callers and tests stay silent.

use indicatif::{ProgressBar, ProgressStyle};

/// Default style for a main progress bar
pub const DEFAULT_MAIN_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({per_sec}) {msg}";

/// Default style for a group progress bar
pub const DEFAULT_GROUP_TEMPLATE: &str =
    "{spinner} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}";

fn styled(length: u64, template: &str, description: Option<&str>, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(length);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    if let Some(desc) = description {
        pb.set_message(desc.to_string());
    }

    pb
}

/// Create a main progress bar with a standardized style
///
/// # Arguments
/// * `length` - Total length for the progress bar
/// * `description` - Optional description to display as the initial message
/// * `visible` - When false a hidden bar is returned
#[must_use]
pub fn create_main_progress_bar(length: u64, description: Option<&str>, visible: bool) -> ProgressBar {
    styled(length, DEFAULT_MAIN_TEMPLATE, description, visible)
}

/// Create a secondary/group progress bar with a standardized style
#[must_use]
pub fn create_group_progress_bar(length: u64, description: Option<&str>, visible: bool) -> ProgressBar {
    styled(length, DEFAULT_GROUP_TEMPLATE, description, visible)
}

/// Finish a progress bar with a completion message
///
/// # Arguments
/// * `pb` - The `ProgressBar` to finish
/// * `message` - Optional completion message
pub fn finish_progress_bar(pb: &ProgressBar, message: Option<&str>) {
    if let Some(msg) = message {
        pb.finish_with_message(msg.to_string());
    } else {
        pb.finish();
    }
}

//! Pure formatting functions for UI output.
//!
//! Colour comes from `console::style`, which holds no global state and drops
//! the escape codes when the stream is not a terminal.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::{Version, VersionBump};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Show which uncommitted changes block the release.
///
/// # Arguments
/// * `listing` - Output of the short status query
pub fn display_dirty_tree(listing: &str) {
    display_error("Working tree has uncommitted changes:");
    for line in listing.lines() {
        eprintln!("  {}", line);
    }
}

/// Build the release preview shown before confirmation.
pub fn format_release_preview(
    bump: VersionBump,
    current: &Version,
    next: &Version,
    tag: &str,
    message: &str,
) -> String {
    format!(
        "\n{}\n  Bump:    {}\n  Version: {} -> {}\n  Tag:     {}\n  Message: {}\n\n{} The release commit and tag will be pushed to the remote.",
        style("Release Preview:").bold(),
        bump,
        style(current).red(),
        style(next).green(),
        style(tag).cyan(),
        message,
        style("→").yellow(),
    )
}

/// Display the release preview.
pub fn display_release_preview(
    bump: VersionBump,
    current: &Version,
    next: &Version,
    tag: &str,
    message: &str,
) {
    println!(
        "{}",
        format_release_preview(bump, current, next, tag, message)
    );
}

/// Display the closing summary after a successful push.
pub fn display_release_complete(tag: &str, branch: &str) {
    println!(
        "\n{} Successfully released {} from branch {}\n",
        style("✓").green(),
        style(tag).bold(),
        branch
    );
}

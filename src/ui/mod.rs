//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, BufRead, Write};

use crate::error::Result;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_dirty_tree, display_error, display_release_complete,
    display_release_preview, display_status, display_success,
};

/// Source of yes/no answers for the workflow's confirmation gates
pub trait Prompter {
    /// Ask `prompt` and report whether the answer was affirmative.
    ///
    /// Blocks until an answer is available.
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Prompter reading answers from standard input
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        print!("\n{} (y/N): ", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;

        Ok(is_affirmative(&input))
    }
}

/// Accepts a single "y" or "Y" (surrounding whitespace ignored).
/// Everything else, including an empty line or "yes", is a "no".
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affirmative_answers() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y\n"));
        assert!(is_affirmative("  y "));
    }

    #[test]
    fn test_negative_answers() {
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("\n"));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("yep"));
        assert!(!is_affirmative("yes"));
        assert!(!is_affirmative("YES"));
    }
}

use super::version::{Version, VersionBump};

/// What the user asked for on the command line: a bump kind and an optional
/// free-text note for the release message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRequest {
    pub bump: VersionBump,
    pub message: Option<String>,
}

impl ReleaseRequest {
    pub fn new(bump: VersionBump, message: Option<String>) -> Self {
        ReleaseRequest { bump, message }
    }

    /// Interpret positional words (see [strip_non_interactive]).
    ///
    /// If the first word is a bump kind it selects the bump and the remaining
    /// words form the message. Otherwise the bump defaults to patch and every
    /// word, the first included, forms the message.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let (bump, message_words) = match words.split_first() {
            Some((first, rest)) => match VersionBump::from_token(first.as_ref()) {
                Some(bump) => (bump, rest),
                None => (VersionBump::Patch, words),
            },
            None => (VersionBump::Patch, words),
        };

        let joined = message_words
            .iter()
            .map(|word| word.as_ref())
            .collect::<Vec<_>>()
            .join(" ");
        let message = if joined.trim().is_empty() {
            None
        } else {
            Some(joined)
        };

        ReleaseRequest { bump, message }
    }

    /// Message used for both the release commit and the annotated tag
    pub fn release_message(&self, version: &Version) -> String {
        release_message(version, self.message.as_deref())
    }
}

/// Spellings of the non-interactive switch accepted anywhere among the words
pub const NON_INTERACTIVE_FLAGS: [&str; 3] = ["-y", "--yes", "--non-interactive"];

/// Remove every non-interactive switch from `words`.
///
/// Returns the remaining words in order and whether a switch was present.
/// Any other dash-prefixed word is kept as message text.
pub fn strip_non_interactive<S: AsRef<str>>(words: &[S]) -> (Vec<String>, bool) {
    let mut non_interactive = false;
    let mut kept = Vec::with_capacity(words.len());

    for word in words {
        let word = word.as_ref();
        if NON_INTERACTIVE_FLAGS.iter().any(|flag| *flag == word) {
            non_interactive = true;
        } else {
            kept.push(word.to_string());
        }
    }

    (kept, non_interactive)
}

/// Build the release message: `Release: X.Y.Z` with an optional `(note)` suffix.
pub fn release_message(version: &Version, custom: Option<&str>) -> String {
    match custom {
        Some(note) => format!("Release: {} ({})", version, note),
        None => format!("Release: {}", version),
    }
}

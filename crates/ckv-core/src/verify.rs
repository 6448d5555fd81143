//! Comparing a computed digest against a user-supplied one.
//!
//! This is a user-facing integrity check, not a secret comparison, so a
//! plain string equality is used.

use std::fmt;

/// Outcome of comparing two digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    Match,
    Mismatch,
}

impl Verification {
    pub fn is_match(self) -> bool {
        self == Verification::Match
    }

    pub fn message(self) -> &'static str {
        match self {
            Verification::Match => "Checksum verified successfully!",
            Verification::Mismatch => "Checksum verification failed!",
        }
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Trim surrounding whitespace and lowercase.
pub fn normalize(digest: &str) -> String {
    digest.trim().to_lowercase()
}

pub fn verify(computed: &str, expected: &str) -> Verification {
    if normalize(computed) == normalize(expected) {
        Verification::Match
    } else {
        Verification::Mismatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_and_whitespace_ignored() {
        assert_eq!(verify("ABC123", "abc123 "), Verification::Match);
        assert_eq!(verify("  abc123\t", "\nABC123"), Verification::Match);
    }

    #[test]
    fn different_digests_mismatch() {
        assert_eq!(verify("abc123", "abc124"), Verification::Mismatch);
        assert_eq!(verify("abc123", "abc12"), Verification::Mismatch);
    }

    #[test]
    fn inner_whitespace_is_significant() {
        assert_eq!(verify("abc123", "abc 123"), Verification::Mismatch);
    }

    #[test]
    fn empty_expected_mismatches_real_digest() {
        assert!(!verify("d41d8cd98f00b204e9800998ecf8427e", "").is_match());
    }

    #[test]
    fn messages() {
        assert_eq!(
            Verification::Match.to_string(),
            "Checksum verified successfully!"
        );
        assert_eq!(
            Verification::Mismatch.message(),
            "Checksum verification failed!"
        );
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  DeadBEEF \r\n"), "deadbeef");
    }
}

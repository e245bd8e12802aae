//! Branch name normalization and classification.

/// Branch-head ref prefix stripped during normalization.
const HEADS_PREFIX: &str = "refs/heads/";

/// Normalize a git ref to a branch name.
///
/// Strips one leading literal `refs/heads/` if present; any other ref
/// (tags, pull request merge refs, bare names) passes through unchanged.
pub fn normalize_ref(git_ref: &str) -> &str {
    git_ref.strip_prefix(HEADS_PREFIX).unwrap_or(git_ref)
}

/// Classification of the normalized branch name against the fixed
/// deployment branch sets.
///
/// The two predicates are evaluated independently; they are mutually
/// exclusive only because the literal sets do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchFlags {
    /// Branch is `main` or `master`.
    pub is_main: bool,
    /// Branch is `testing`.
    pub is_testing: bool,
}

impl BranchFlags {
    /// Classify a normalized branch name.
    pub fn classify(name: &str) -> Self {
        Self {
            is_main: name == "master" || name == "main",
            is_testing: name == "testing",
        }
    }
}

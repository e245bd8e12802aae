//! CI execution context.
//!
//! The hosting CI platform supplies run identity through `GITHUB_*`
//! environment variables. This module captures them once, at the edge, into
//! an explicit [`BuildContext`] value; everything downstream takes the
//! context as a parameter instead of reading ambient state, so the logic is
//! testable without a live runner.

use std::path::{Path, PathBuf};

/// Identity of one CI invocation plus the checkout it operates on.
///
/// Absent environment values resolve to empty strings rather than errors;
/// downstream steps simply operate on empty identity, matching runner
/// behavior when a variable is unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    /// Unique id of the CI run.
    pub run_id: String,
    /// Commit hash being built.
    pub sha: String,
    /// Repository in `owner/repo` form.
    pub repository: String,
    /// Raw git ref (e.g. `refs/heads/main`).
    pub git_ref: String,
    /// Workspace root containing the checkout.
    pub workspace: PathBuf,
}

impl BuildContext {
    /// Build a context from an explicit variable lookup.
    ///
    /// The workspace root is resolved by the caller (CLI flag, then
    /// `GITHUB_WORKSPACE`, then the current directory) and passed in.
    pub fn from_vars<F>(workspace: PathBuf, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).unwrap_or_default();

        Self {
            run_id: var("GITHUB_RUN_ID"),
            sha: var("GITHUB_SHA"),
            repository: var("GITHUB_REPOSITORY"),
            git_ref: var("GITHUB_REF"),
            workspace,
        }
    }

    /// Build a context from the process environment.
    pub fn from_env(workspace: PathBuf) -> Self {
        Self::from_vars(workspace, |name| std::env::var(name).ok())
    }

    /// The application name identifying this build (`owner/repo`).
    pub fn app_name(&self) -> &str {
        &self.repository
    }

    /// The workspace root.
    pub fn workspace(&self) -> &Path {
        &self.workspace
    }
}

/// Check if running in a CI environment.
///
/// Used to warn when the tool is invoked outside a runner, where the
/// `GITHUB_*` identity values will all be empty. Checks common CI
/// environment variables: `CI`, `GITHUB_ACTIONS`, `GITLAB_CI`, `CIRCLECI`,
/// `TRAVIS`, `JENKINS_URL`, `BUILDKITE`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
        || std::env::var("BUILDKITE").is_ok()
}

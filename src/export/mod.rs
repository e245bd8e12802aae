//! Environment variable export.
//!
//! Later pipeline steps consume the variables this tool resolves; nothing
//! in this process reads them back. On the hosting runner the transport is
//! the env file named by `GITHUB_ENV`: each exported variable is appended
//! as a `NAME=value` line and the platform folds the file into the
//! environment of subsequent steps.

pub mod env_file;

use std::path::{Path, PathBuf};

use crate::error::{BuildprepError, Result};

/// Normalized branch name; always exported.
pub const BRANCH_NAME_VAR: &str = "BN_BUILD_BRANCH_NAME";

/// Marker set to `"1"` when the branch is main/master.
pub const IS_MAIN_VAR: &str = "BN_BUILD_IS_MAIN_BRANCH";

/// Marker set to `"1"` when the branch is testing.
pub const IS_TESTING_VAR: &str = "BN_BUILD_IS_TESTING_BRANCH";

/// Vercel deploy target label (`"prod"` or `"testing"`).
pub const VERCEL_DEPLOY_VAR: &str = "BN_DEPLOY_VERCEL";

/// Claudia deployment label (`"prod"` or `"testing"`).
pub const CLAUDIA_DEPLOYMENT_VAR: &str = "BN_CLAUDIA_DEPLOYMENT";

/// Publishes resolved facts as environment variables for later steps.
#[derive(Debug)]
pub struct Exporter {
    env_file: Option<PathBuf>,
    dry_run: bool,
}

impl Exporter {
    /// Create an exporter.
    ///
    /// `env_file` is the runner env file to append to, when the runner
    /// provided one. Without it exports have nowhere to land, which is
    /// worth a warning outside dry-run.
    pub fn new(env_file: Option<PathBuf>, dry_run: bool) -> Self {
        if env_file.is_none() && !dry_run {
            tracing::warn!("no runner env file configured; exports will not reach later steps");
        }

        Self { env_file, dry_run }
    }

    /// Whether this exporter only logs what it would do.
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// The runner env file exports are appended to, if any.
    pub fn env_file(&self) -> Option<&Path> {
        self.env_file.as_deref()
    }

    /// Export a variable for later pipeline steps.
    ///
    /// Appends a `NAME=value` line to the runner env file, creating it if
    /// absent and never truncating. Names and values must be single-line;
    /// the runner file format is line-oriented.
    pub fn export(&self, name: &str, value: &str) -> Result<()> {
        validate(name, value)?;

        if self.dry_run {
            tracing::info!("dry-run: would export {}={}", name, value);
            return Ok(());
        }

        if let Some(path) = &self.env_file {
            env_file::append_var(path, name, value)?;
        }
        tracing::debug!("exported {}={}", name, value);

        Ok(())
    }
}

fn validate(name: &str, value: &str) -> Result<()> {
    if name.is_empty() {
        return Err(BuildprepError::InvalidExport {
            name: name.to_string(),
            message: "name is empty".to_string(),
        });
    }
    if name.contains('=') || name.contains('\n') {
        return Err(BuildprepError::InvalidExport {
            name: name.to_string(),
            message: "name contains '=' or a newline".to_string(),
        });
    }
    if value.contains('\n') {
        return Err(BuildprepError::InvalidExport {
            name: name.to_string(),
            message: "value contains a newline".to_string(),
        });
    }

    Ok(())
}

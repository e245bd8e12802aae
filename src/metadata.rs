//! Build metadata record.
//!
//! Downstream pipeline steps read `build.json` at the workspace root to
//! identify the artifact they are handling. The record carries exactly
//! the three identity keys, regardless of branch or detected configs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::context::BuildContext;
use crate::error::{BuildprepError, Result};

/// File name of the metadata record, relative to the workspace root.
pub const METADATA_FILE: &str = "build.json";

/// Run identity serialized for downstream steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildMetadata {
    /// Unique id of the CI run.
    #[serde(rename = "BNS-BD-ID")]
    pub id: String,

    /// Commit hash the artifact was built from.
    #[serde(rename = "BNS-BD-VERSION")]
    pub version: String,

    /// Application name (`owner/repo`).
    #[serde(rename = "BNS-BD-APP")]
    pub app: String,
}

impl BuildMetadata {
    /// Build the record from the run context.
    pub fn from_context(ctx: &BuildContext) -> Self {
        Self {
            id: ctx.run_id.clone(),
            version: ctx.sha.clone(),
            app: ctx.repository.clone(),
        }
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| BuildprepError::Other(e.into()))
    }

    /// Write the record to `build.json` under the workspace root,
    /// overwriting any existing file.
    ///
    /// The write is synchronous; callers log success only after it
    /// returns. Returns the path written and the serialized content.
    pub fn write(&self, workspace: &Path) -> Result<(PathBuf, String)> {
        let path = workspace.join(METADATA_FILE);
        let content = self.to_json()?;

        std::fs::write(&path, &content).map_err(|source| BuildprepError::MetadataWrite {
            path: path.clone(),
            source,
        })?;

        Ok((path, content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> BuildMetadata {
        BuildMetadata {
            id: "4837561203".to_string(),
            version: "4f2a9c1d8e3b".to_string(),
            app: "acme/storefront".to_string(),
        }
    }

    #[test]
    fn to_json_is_compact_with_fixed_keys() {
        let json = sample().to_json().unwrap();

        assert_eq!(
            json,
            r#"{"BNS-BD-ID":"4837561203","BNS-BD-VERSION":"4f2a9c1d8e3b","BNS-BD-APP":"acme/storefront"}"#
        );
    }

    #[test]
    fn round_trips_through_serde() {
        let meta = sample();
        let parsed: BuildMetadata = serde_json::from_str(&meta.to_json().unwrap()).unwrap();

        assert_eq!(parsed, meta);
    }

    #[test]
    fn from_context_copies_run_identity() {
        let ctx = BuildContext {
            run_id: "99".to_string(),
            sha: "deadbeef".to_string(),
            repository: "acme/api".to_string(),
            git_ref: "refs/heads/main".to_string(),
            workspace: std::path::PathBuf::from("/work"),
        };

        let meta = BuildMetadata::from_context(&ctx);

        assert_eq!(meta.id, "99");
        assert_eq!(meta.version, "deadbeef");
        assert_eq!(meta.app, "acme/api");
    }

    #[test]
    fn write_creates_file_at_workspace_root() {
        let temp = TempDir::new().unwrap();

        let (path, content) = sample().write(temp.path()).unwrap();

        assert_eq!(path, temp.path().join(METADATA_FILE));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn write_overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(METADATA_FILE), "stale").unwrap();

        sample().write(temp.path()).unwrap();

        let content = std::fs::read_to_string(temp.path().join(METADATA_FILE)).unwrap();
        assert!(!content.contains("stale"));
        assert!(content.contains("BNS-BD-ID"));
    }

    #[test]
    fn write_fails_on_missing_directory() {
        let err = sample().write(Path::new("/nonexistent/workspace")).unwrap_err();

        assert!(matches!(err, BuildprepError::MetadataWrite { .. }));
    }

    #[test]
    fn empty_identity_still_serializes_three_keys() {
        let meta = BuildMetadata {
            id: String::new(),
            version: String::new(),
            app: String::new(),
        };

        let json = meta.to_json().unwrap();

        assert_eq!(json, r#"{"BNS-BD-ID":"","BNS-BD-VERSION":"","BNS-BD-APP":""}"#);
    }
}

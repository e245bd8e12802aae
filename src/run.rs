//! Build step orchestration.
//!
//! The pipeline is strictly sequential: commit info, branch facts, config
//! detectors, metadata. The detectors depend only on the branch flags;
//! nothing else feeds forward.

use crate::branch::{normalize_ref, BranchFlags};
use crate::context::BuildContext;
use crate::detect;
use crate::error::Result;
use crate::export::{self, Exporter};
use crate::metadata::{BuildMetadata, METADATA_FILE};
use crate::output::Output;

/// Executes the build step against a resolved context.
pub struct Runner {
    ctx: BuildContext,
    exporter: Exporter,
}

impl Runner {
    /// Create a runner for the given context and exporter.
    pub fn new(ctx: BuildContext, exporter: Exporter) -> Self {
        Self { ctx, exporter }
    }

    /// Run the full pipeline.
    pub fn execute(&self, out: &Output) -> Result<()> {
        self.report_commit_info(out);
        let flags = self.export_branch_facts(out)?;
        detect::run_all(&self.ctx, flags, &self.exporter, out)?;
        self.write_metadata(out)?;

        out.success("Build context prepared");
        Ok(())
    }

    fn report_commit_info(&self, out: &Output) {
        out.banner("Getting commit info:");
        out.detail(&format!("App name: {}", self.ctx.app_name()));
        out.detail(&format!("Build version/hash: {}", self.ctx.sha));
        out.detail(&format!("Build ID: {}", self.ctx.run_id));
    }

    fn export_branch_facts(&self, out: &Output) -> Result<BranchFlags> {
        out.banner("Evaluating branch:");

        let name = normalize_ref(&self.ctx.git_ref);
        let flags = BranchFlags::classify(name);

        out.detail(&format!("Branch name: {}", name));
        self.exporter.export(export::BRANCH_NAME_VAR, name)?;
        out.verbose(&format!("{}={}", export::BRANCH_NAME_VAR, name));

        if flags.is_main {
            out.detail("Is main branch");
            self.exporter.export(export::IS_MAIN_VAR, "1")?;
            out.verbose(&format!("{}=1", export::IS_MAIN_VAR));
        }
        if flags.is_testing {
            out.detail("Is testing branch");
            self.exporter.export(export::IS_TESTING_VAR, "1")?;
            out.verbose(&format!("{}=1", export::IS_TESTING_VAR));
        }

        Ok(flags)
    }

    fn write_metadata(&self, out: &Output) -> Result<()> {
        out.banner("Generating build.json file:");

        let record = BuildMetadata::from_context(&self.ctx);

        if self.exporter.is_dry_run() {
            out.detail(&format!(
                "Would write file {} with content {}",
                self.ctx.workspace().join(METADATA_FILE).display(),
                record.to_json()?
            ));
            return Ok(());
        }

        let (path, content) = record.write(self.ctx.workspace())?;
        out.detail(&format!(
            "Successfully written file {} with content {}",
            path.display(),
            content
        ));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::env_file::load_optional;
    use crate::output::OutputMode;
    use std::collections::HashMap;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn ctx_for(temp: &TempDir, git_ref: &str) -> BuildContext {
        BuildContext {
            run_id: "4837561203".to_string(),
            sha: "4f2a9c1d8e3b".to_string(),
            repository: "acme/storefront".to_string(),
            git_ref: git_ref.to_string(),
            workspace: temp.path().to_path_buf(),
        }
    }

    fn execute(temp: &TempDir, git_ref: &str) -> (PathBuf, HashMap<String, String>) {
        let env_path = temp.path().join("runner.env");
        let runner = Runner::new(
            ctx_for(temp, git_ref),
            Exporter::new(Some(env_path.clone()), false),
        );
        runner.execute(&Output::new(OutputMode::Quiet)).unwrap();
        let vars = load_optional(&env_path).unwrap();
        (env_path, vars)
    }

    #[test]
    fn main_branch_exports_branch_facts() {
        let temp = TempDir::new().unwrap();

        let (_, vars) = execute(&temp, "refs/heads/main");

        assert_eq!(vars.get("BN_BUILD_BRANCH_NAME"), Some(&"main".to_string()));
        assert_eq!(vars.get("BN_BUILD_IS_MAIN_BRANCH"), Some(&"1".to_string()));
        assert!(!vars.contains_key("BN_BUILD_IS_TESTING_BRANCH"));
    }

    #[test]
    fn feature_branch_exports_name_only() {
        let temp = TempDir::new().unwrap();

        let (_, vars) = execute(&temp, "refs/heads/feature-x");

        assert_eq!(
            vars.get("BN_BUILD_BRANCH_NAME"),
            Some(&"feature-x".to_string())
        );
        assert!(!vars.contains_key("BN_BUILD_IS_MAIN_BRANCH"));
        assert!(!vars.contains_key("BN_BUILD_IS_TESTING_BRANCH"));
        assert!(!vars.contains_key("BN_DEPLOY_VERCEL"));
        assert!(!vars.contains_key("BN_CLAUDIA_DEPLOYMENT"));
    }

    #[test]
    fn tag_ref_passes_through_unchanged() {
        let temp = TempDir::new().unwrap();

        let (_, vars) = execute(&temp, "refs/tags/v1.0.0");

        assert_eq!(
            vars.get("BN_BUILD_BRANCH_NAME"),
            Some(&"refs/tags/v1.0.0".to_string())
        );
    }

    #[test]
    fn metadata_is_written_regardless_of_branch() {
        let temp = TempDir::new().unwrap();

        execute(&temp, "refs/heads/feature-x");

        let content = fs::read_to_string(temp.path().join("build.json")).unwrap();
        assert_eq!(
            content,
            r#"{"BNS-BD-ID":"4837561203","BNS-BD-VERSION":"4f2a9c1d8e3b","BNS-BD-APP":"acme/storefront"}"#
        );
    }

    #[test]
    fn full_pipeline_with_vercel_and_nextjs() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("next.config.js"), "").unwrap();
        fs::create_dir_all(temp.path().join(".vercel")).unwrap();
        fs::write(temp.path().join(".vercel/project.json"), "{}").unwrap();

        let (_, vars) = execute(&temp, "refs/heads/main");

        assert_eq!(vars.get("BN_DEPLOY_VERCEL"), Some(&"prod".to_string()));
        let dotenv = fs::read_to_string(temp.path().join(".env")).unwrap();
        assert!(dotenv.contains("NEXT_PUBLIC_APP_NAME=acme/storefront"));
        assert!(dotenv.contains("NEXT_PUBLIC_APP_VERSION=4f2a9c1d8e3b"));
        assert!(temp.path().join("build.json").exists());
    }

    #[test]
    fn claudia_asymmetry_testing_file_wrong_branch() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("claudia_prod.json"), "{}").unwrap();

        let (_, vars) = execute(&temp, "refs/heads/testing");

        assert!(!vars.contains_key("BN_CLAUDIA_DEPLOYMENT"));
    }

    #[test]
    fn dry_run_touches_nothing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("next.config.js"), "").unwrap();
        let env_path = temp.path().join("runner.env");

        let runner = Runner::new(
            ctx_for(&temp, "refs/heads/main"),
            Exporter::new(Some(env_path.clone()), true),
        );
        runner.execute(&Output::new(OutputMode::Quiet)).unwrap();

        assert!(!env_path.exists());
        assert!(!temp.path().join(".env").exists());
        assert!(!temp.path().join("build.json").exists());
    }

    #[test]
    fn metadata_write_failure_is_the_error_path() {
        let temp = TempDir::new().unwrap();
        let mut ctx = ctx_for(&temp, "refs/heads/main");
        ctx.workspace = Path::new("/nonexistent/workspace").to_path_buf();

        let runner = Runner::new(ctx, Exporter::new(None, false));
        let err = runner.execute(&Output::new(OutputMode::Quiet)).unwrap_err();

        assert!(matches!(
            err,
            crate::error::BuildprepError::MetadataWrite { .. }
        ));
    }
}

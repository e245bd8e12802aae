//! Next.js detection.
//!
//! A `next.config.js` at the workspace root marks a Next.js app. The
//! build identity is appended to the app's `.env` file so the framework
//! bakes it into the bundle; the branch plays no part here.

use super::{file_exists, Detector, DetectorOutcome};
use crate::branch::BranchFlags;
use crate::context::BuildContext;
use crate::error::Result;
use crate::export::env_file;
use crate::export::Exporter;

/// Config file that marks a Next.js app.
pub const NEXT_CONFIG: &str = "next.config.js";

/// Env file the variable block is appended to.
pub const ENV_FILE: &str = ".env";

/// Detects a Next.js app and seeds its `.env` file.
pub struct NextJsDetector;

impl NextJsDetector {
    /// The block appended to `.env`, leading blank line included.
    fn env_block(ctx: &BuildContext) -> String {
        format!(
            "\nNEXT_PUBLIC_APP_NAME={}\nNEXT_PUBLIC_APP_VERSION={}\nTZ=UTC\nNODE_ENV=production\n",
            ctx.app_name(),
            ctx.sha
        )
    }
}

impl Detector for NextJsDetector {
    fn name(&self) -> &str {
        "nextjs"
    }

    fn banner(&self) -> &str {
        "Preparing Next.JS .env file:"
    }

    fn run(
        &self,
        ctx: &BuildContext,
        _flags: BranchFlags,
        exporter: &Exporter,
    ) -> Result<DetectorOutcome> {
        if !file_exists(ctx.workspace(), NEXT_CONFIG) {
            return Ok(DetectorOutcome::not_found("Next.JS").with_detail("Next.JS not detected"));
        }

        let outcome = DetectorOutcome::found("Next.JS")
            .with_detail("Next.JS detected, adding variables to .env")
            .with_action("appended 4 variables to .env");

        if exporter.is_dry_run() {
            tracing::info!("dry-run: would append Next.JS variables to .env");
            return Ok(outcome);
        }

        env_file::append_raw(&ctx.workspace().join(ENV_FILE), &Self::env_block(ctx))?;

        Ok(outcome)
    }
}

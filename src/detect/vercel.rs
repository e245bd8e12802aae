//! Vercel detection.
//!
//! A `.vercel/project.json` marks a linked Vercel project. Once the
//! config is present, the branch alone decides the deploy target; a
//! branch outside the deployment set means no export.

use super::{file_exists, Detector, DetectorOutcome};
use crate::branch::BranchFlags;
use crate::context::BuildContext;
use crate::error::Result;
use crate::export::{Exporter, VERCEL_DEPLOY_VAR};

/// Vercel project config path, relative to the workspace root.
pub const VERCEL_CONFIG: &str = ".vercel/project.json";

/// Detects a linked Vercel project and exports the deploy target.
pub struct VercelDetector;

impl Detector for VercelDetector {
    fn name(&self) -> &str {
        "vercel"
    }

    fn banner(&self) -> &str {
        "Detecting .vercel config:"
    }

    fn run(
        &self,
        ctx: &BuildContext,
        flags: BranchFlags,
        exporter: &Exporter,
    ) -> Result<DetectorOutcome> {
        if !file_exists(ctx.workspace(), VERCEL_CONFIG) {
            return Ok(
                DetectorOutcome::not_found("Vercel").with_detail("Vercel config not detected")
            );
        }

        let mut outcome = DetectorOutcome::found("Vercel").with_detail("Vercel config detected");

        let target = if flags.is_main {
            Some("prod")
        } else if flags.is_testing {
            Some("testing")
        } else {
            None
        };

        if let Some(target) = target {
            exporter.export(VERCEL_DEPLOY_VAR, target)?;
            outcome = outcome
                .with_detail(&format!("Setting Vercel deploy to: {}", target))
                .with_action(&format!("{}={}", VERCEL_DEPLOY_VAR, target));
        }

        Ok(outcome)
    }
}

//! ClaudiaJS detection.
//!
//! Claudia deployments carry one config file per target environment.
//! Unlike Vercel, a deployment is signaled only when the branch AND the
//! matching per-environment file are both present; both files are probed
//! regardless of branch.

use super::{file_exists, Detector, DetectorOutcome};
use crate::branch::BranchFlags;
use crate::context::BuildContext;
use crate::error::Result;
use crate::export::{Exporter, CLAUDIA_DEPLOYMENT_VAR};

/// Config file for testing deployments.
pub const CLAUDIA_TESTING_CONFIG: &str = "claudia_testing.json";

/// Config file for prod deployments.
pub const CLAUDIA_PROD_CONFIG: &str = "claudia_prod.json";

/// Detects ClaudiaJS configs and exports the deployment label.
pub struct ClaudiaDetector;

impl Detector for ClaudiaDetector {
    fn name(&self) -> &str {
        "claudia"
    }

    fn banner(&self) -> &str {
        "Detecting ClaudiaJS config:"
    }

    fn run(
        &self,
        ctx: &BuildContext,
        flags: BranchFlags,
        exporter: &Exporter,
    ) -> Result<DetectorOutcome> {
        let has_testing = file_exists(ctx.workspace(), CLAUDIA_TESTING_CONFIG);
        let has_prod = file_exists(ctx.workspace(), CLAUDIA_PROD_CONFIG);

        let deployment = if flags.is_main && has_prod {
            Some("prod")
        } else if flags.is_testing && has_testing {
            Some("testing")
        } else {
            None
        };

        let Some(deployment) = deployment else {
            return Ok(DetectorOutcome::not_found("Claudia")
                .with_detail("Claudia config not detected / not correct branch"));
        };

        exporter.export(CLAUDIA_DEPLOYMENT_VAR, deployment)?;

        Ok(DetectorOutcome::found("Claudia")
            .with_detail(&format!("Setting Claudia to {} deployment", deployment))
            .with_action(&format!("{}={}", CLAUDIA_DEPLOYMENT_VAR, deployment)))
    }
}

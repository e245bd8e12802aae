//! Framework config detection.
//!
//! Three detectors, each following the same shape: probe for a config
//! file at a fixed path under the workspace root, gate on the branch
//! flags, export a deployment signal. They run in a fixed order and none
//! of them fail on a missing file or a branch mismatch.

pub mod claudia;
pub mod nextjs;
pub mod types;
pub mod vercel;

pub use claudia::ClaudiaDetector;
pub use nextjs::NextJsDetector;
pub use types::DetectorOutcome;
pub use vercel::VercelDetector;

use std::path::Path;

use crate::branch::BranchFlags;
use crate::context::BuildContext;
use crate::error::Result;
use crate::export::Exporter;
use crate::output::Output;

/// Trait for config detectors.
pub trait Detector {
    /// Short identifier used in diagnostics.
    fn name(&self) -> &str;

    /// Banner line printed before the detector runs.
    fn banner(&self) -> &str;

    /// Probe the workspace and export any deployment signals.
    fn run(
        &self,
        ctx: &BuildContext,
        flags: BranchFlags,
        exporter: &Exporter,
    ) -> Result<DetectorOutcome>;
}

/// Check if a file exists relative to the workspace root.
pub fn file_exists(workspace: &Path, file: &str) -> bool {
    workspace.join(file).exists()
}

/// Run all detectors in their fixed order, logging each outcome.
pub fn run_all(
    ctx: &BuildContext,
    flags: BranchFlags,
    exporter: &Exporter,
    out: &Output,
) -> Result<Vec<DetectorOutcome>> {
    let detectors: [&dyn Detector; 3] = [&NextJsDetector, &VercelDetector, &ClaudiaDetector];

    let mut outcomes = Vec::with_capacity(detectors.len());
    for detector in detectors {
        out.banner(detector.banner());

        let outcome = detector.run(ctx, flags, exporter)?;
        for detail in &outcome.details {
            out.detail(detail);
        }
        if let Some(action) = &outcome.action {
            out.verbose(action);
        }
        tracing::debug!(
            detector = detector.name(),
            detected = outcome.detected,
            action = outcome.action.as_deref(),
            "detector finished"
        );

        outcomes.push(outcome);
    }

    Ok(outcomes)
}

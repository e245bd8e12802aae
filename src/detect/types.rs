//! Detector outcome types.

/// Result of one config detector.
///
/// Absence is a normal outcome, never an error; the pipeline logs every
/// outcome either way.
#[derive(Debug, Clone)]
pub struct DetectorOutcome {
    /// Name of what was probed for.
    pub name: String,

    /// Whether the config was detected and matched.
    pub detected: bool,

    /// Deployment signal that resulted (`NAME=value` or a short summary),
    /// if any.
    pub action: Option<String>,

    /// Progress lines describing what happened.
    pub details: Vec<String>,
}

impl DetectorOutcome {
    /// Create a positive outcome.
    pub fn found(name: &str) -> Self {
        Self {
            name: name.to_string(),
            detected: true,
            action: None,
            details: Vec::new(),
        }
    }

    /// Create a negative outcome.
    pub fn not_found(name: &str) -> Self {
        Self {
            name: name.to_string(),
            detected: false,
            action: None,
            details: Vec::new(),
        }
    }

    /// Set the resulting action.
    pub fn with_action(mut self, action: &str) -> Self {
        self.action = Some(action.to_string());
        self
    }

    /// Add a progress line.
    pub fn with_detail(mut self, detail: &str) -> Self {
        self.details.push(detail.to_string());
        self
    }
}

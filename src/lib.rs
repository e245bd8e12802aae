//! Buildprep - CI build context detection and deployment signal export.
//!
//! Buildprep runs once per CI invocation: it resolves run identity from
//! the runner environment, classifies the branch, probes the checkout for
//! framework config files, exports deployment signals for later pipeline
//! steps, and writes a `build.json` metadata record.
//!
//! # Modules
//!
//! - [`branch`] - Branch name normalization and classification
//! - [`cli`] - Command-line interface and argument parsing
//! - [`context`] - CI execution context resolution
//! - [`detect`] - Framework config detectors (Next.js, Vercel, Claudia)
//! - [`error`] - Error types and result aliases
//! - [`export`] - Environment variable export and env file handling
//! - [`metadata`] - Build metadata record
//! - [`output`] - Console output modes and styling
//! - [`run`] - Build step orchestration
//!
//! # Example
//!
//! ```
//! use buildprep::branch::{normalize_ref, BranchFlags};
//!
//! let name = normalize_ref("refs/heads/main");
//! let flags = BranchFlags::classify(name);
//! assert!(flags.is_main);
//! assert!(!flags.is_testing);
//! ```

pub mod branch;
pub mod cli;
pub mod context;
pub mod detect;
pub mod error;
pub mod export;
pub mod metadata;
pub mod output;
pub mod run;

pub use error::{BuildprepError, Result};

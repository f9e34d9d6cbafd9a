//! Error types emitted by the Loadsmith CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use loadsmith_core::{OptimizeError, OptimizeRequestValidationError};
use thiserror::Error;

/// Errors emitted by the Loadsmith CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag naming the option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A merged option holds a value outside its accepted range.
    #[error("invalid {field}: {reason}")]
    InvalidArgument {
        /// Flag naming the option.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
    /// The requested operation requires a missing compile-time feature.
    #[error("{action} requires the `{feature}` feature to be enabled")]
    MissingFeature {
        /// Cargo feature that provides the operation.
        feature: &'static str,
        /// Operation that was attempted.
        action: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// The path being inspected.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the optimize request file failed.
    #[error("failed to open optimize request at {path:?}: {source}")]
    OpenOptimizeRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Optimize request JSON could not be decoded.
    #[error("failed to parse optimize request JSON at {path:?}: {source}")]
    ParseOptimizeRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// The optimize request payload failed validation.
    #[error("optimize request in {path:?} failed validation: {source}")]
    InvalidOptimizeRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// First validation failure.
        #[source]
        source: OptimizeRequestValidationError,
    },
    /// The request offers more orders than the configured cap.
    #[error("request contains {count} orders; at most {max} are accepted")]
    TooManyOrders {
        /// Orders in the request.
        count: usize,
        /// Configured order cap.
        max: usize,
    },
    /// The optimizer rejected the request.
    #[error("optimizer failed: {source}")]
    Optimize {
        /// Optimizer failure.
        #[source]
        source: OptimizeError,
    },
    /// Serializing the optimize response failed.
    #[error("failed to serialize optimize response: {0}")]
    SerializeOptimizeResponse(#[source] serde_json::Error),
    /// Writing the optimize output failed.
    #[error("failed to write optimize output: {0}")]
    WriteOptimizeOutput(#[source] std::io::Error),
}

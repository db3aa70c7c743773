//! Error types and exit codes for stepgraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown algorithm)
//! - 3: Data error (invalid graph, invalid node, missing dataset)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed graph or out-of-range node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building graphs or running engines
#[derive(Error, Debug)]
pub enum StepGraphError {
    // Usage errors (exit code 2)
    #[error("unknown algorithm: {0} (expected one of: bfs, dfs, dijkstra, astar, bellman_ford, kruskal, prim)")]
    UnknownAlgorithm(String),

    #[error("algorithm {algorithm} is unavailable: {reason}")]
    Unavailable { algorithm: String, reason: String },

    #[error("algorithm {algorithm} requires a goal node")]
    MissingGoal { algorithm: String },

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    #[error("invalid {role} node: {node} (graph has {node_count} nodes)")]
    InvalidNode {
        role: String,
        node: String,
        node_count: usize,
    },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl StepGraphError {
    /// Create an error for a structurally invalid graph
    pub fn invalid_graph(reason: impl Into<String>) -> Self {
        StepGraphError::InvalidGraph {
            reason: reason.into(),
        }
    }

    /// Create an error for a start/goal reference outside the graph
    pub fn invalid_node(role: &str, node: impl std::fmt::Display, node_count: usize) -> Self {
        StepGraphError::InvalidNode {
            role: role.to_string(),
            node: node.to_string(),
            node_count,
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        StepGraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        StepGraphError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an engine recorded as unavailable
    pub fn unavailable(algorithm: impl std::fmt::Display, reason: impl Into<String>) -> Self {
        StepGraphError::Unavailable {
            algorithm: algorithm.to_string(),
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            StepGraphError::UnknownAlgorithm(_)
            | StepGraphError::Unavailable { .. }
            | StepGraphError::MissingGoal { .. }
            | StepGraphError::UsageError(_)
            | StepGraphError::InvalidValue { .. } => ExitCode::Usage,

            StepGraphError::InvalidGraph { .. }
            | StepGraphError::InvalidNode { .. }
            | StepGraphError::NotFound { .. } => ExitCode::Data,

            StepGraphError::Io(_)
            | StepGraphError::Json(_)
            | StepGraphError::Toml(_)
            | StepGraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            StepGraphError::UnknownAlgorithm(_) => "unknown_algorithm",
            StepGraphError::Unavailable { .. } => "unavailable",
            StepGraphError::MissingGoal { .. } => "missing_goal",
            StepGraphError::UsageError(_) => "usage_error",
            StepGraphError::InvalidValue { .. } => "invalid_value",
            StepGraphError::InvalidGraph { .. } => "invalid_graph",
            StepGraphError::InvalidNode { .. } => "invalid_node",
            StepGraphError::NotFound { .. } => "not_found",
            StepGraphError::Io(_) => "io_error",
            StepGraphError::Json(_) => "json_error",
            StepGraphError::Toml(_) => "toml_error",
            StepGraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for stepgraph operations
pub type Result<T> = std::result::Result<T, StepGraphError>;

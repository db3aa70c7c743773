//! Error macros for stepgraph

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::StepGraphError::invalid_value($context, $value))
    };
}

/// Macro for creating invalid graph errors
#[macro_export]
macro_rules! bail_invalid_graph {
    ($($arg:tt)*) => {
        return Err($crate::error::StepGraphError::invalid_graph(format!($($arg)*)))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::StepGraphError::UsageError($msg.to_string()))
    };
}

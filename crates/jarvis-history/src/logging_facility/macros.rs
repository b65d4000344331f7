//! Canonical logging macros
//!
//! Every coordinator operation brackets its work with a start event and
//! exactly one of an end or end_error event.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use jarvis_history::log_op_start;
/// log_op_start!("history.rollback");
/// log_op_start!("history.rollback", undo_len = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = jarvis_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = jarvis_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use jarvis_history::log_op_end;
/// log_op_end!("history.commit", duration_ms = 2);
/// log_op_end!("history.commit", duration_ms = 2, redo_len = 0);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = jarvis_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = jarvis_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// `$err` is anything convertible into `ExError`, usually `&JarvisError`.
///
/// # Example
///
/// ```
/// # use jarvis_history::{log_op_error, errors::JarvisError};
/// let err = JarvisError::not_invertible("list-paid");
/// log_op_error!("history.rollback", &err, duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = ($err).into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = jarvis_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = ($err).into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = jarvis_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            $($field)*
        );
    }};
}

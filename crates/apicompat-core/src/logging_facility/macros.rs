//! Operation boundary macros
//!
//! Every boundary event carries `component`, `op` and `event`; callers append
//! their own fields after the fixed ones. Paths go through `$crate`, so
//! crates calling these macros need no direct `tracing` dependency.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($level:ident, $op:expr, $event:expr $(, $($field:tt)*)?) => {
        $crate::__tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $event
            $(, $($field)*)?
        )
    };
}

/// Log the start of an operation at `debug`
///
/// ```
/// # use apicompat_core::log_op_start;
/// log_op_start!("classify");
/// log_op_start!("classify", type_name = "pkg.Config");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(debug, $op, $crate::schema::EVENT_START $(, $($field)*)?)
    };
}

/// Log the successful end of an operation at `debug`
///
/// ```
/// # use apicompat_core::log_op_end;
/// log_op_end!("classify", duration_ms = 0);
/// log_op_end!("classify", duration_ms = 0, change_kind = "added");
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            debug,
            $op,
            $crate::schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)*)?
        )
    };
}

/// Log a failed operation at `error`
///
/// The error is converted into an [`ExError`](crate::errors::ExError) so the
/// event carries its kind and stable code.
///
/// ```
/// # use apicompat_core::log_op_error;
/// use apicompat_core::errors::CompatError;
/// log_op_error!("decode_snapshot", CompatError::EmptyTypeName, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = ::core::convert::Into::into($err);
        $crate::__log_op_event!(
            error,
            $op,
            $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code()
            $(, $($field)*)?
        )
    }};
}

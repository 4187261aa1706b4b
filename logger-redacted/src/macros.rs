// Logging macros
#[macro_export]
macro_rules! redacted_info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!("{}", $crate::redact(&format!($($arg)*)))
    };
}

#[macro_export]
macro_rules! redacted_debug {
    ($($arg:tt)*) => {
        $crate::__tracing::debug!("{}", $crate::redact(&format!($($arg)*)))
    };
}

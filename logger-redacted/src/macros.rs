// Logging macros that scrub the formatted message through the global redactor
//
//     redacted_error!(claim_id = id; "summary failed for {}: {}", name, err);
//     redacted_info!("loaded {} claims", count);

#[macro_export]
macro_rules! redacted_info {
    ($($key:ident = $value:expr),+ ; $($arg:tt)+) => {
        $crate::tracing::info!(
            $($key = %$value),+ ,
            "{}",
            $crate::global_redactor().redact(&format!($($arg)+))
        )
    };
    ($($arg:tt)+) => {
        $crate::tracing::info!("{}", $crate::global_redactor().redact(&format!($($arg)+)))
    };
}

#[macro_export]
macro_rules! redacted_error {
    ($($key:ident = $value:expr),+ ; $($arg:tt)+) => {
        $crate::tracing::error!(
            $($key = %$value),+ ,
            "{}",
            $crate::global_redactor().redact(&format!($($arg)+))
        )
    };
    ($($arg:tt)+) => {
        $crate::tracing::error!("{}", $crate::global_redactor().redact(&format!($($arg)+)))
    };
}

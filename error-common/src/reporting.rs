// Error reporting utilities

use uuid::Uuid;

use crate::context::ErrorContext;

/// Logs failures with full internal detail and hands back a correlation id
#[derive(Debug, Clone, Default)]
pub struct ErrorReporter;

impl ErrorReporter {
    pub fn new() -> Self {
        Self
    }

    /// Record the error and return the id it was logged under
    pub fn report(
        &self,
        error: &(dyn std::error::Error + 'static),
        code: &str,
        context: &ErrorContext,
    ) -> String {
        let error_id = Uuid::new_v4().to_string();

        let mut chain = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            chain.push(cause.to_string());
            source = cause.source();
        }

        tracing::error!(
            error_id = %error_id,
            error_code = code,
            request_id = context.request_id.as_deref().unwrap_or("-"),
            claim_id = context.claim_id.as_deref().unwrap_or("-"),
            operation = context.operation.as_deref().unwrap_or("-"),
            additional = ?context.additional,
            caused_by = ?chain,
            "Error reported: {}",
            error
        );

        error_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;
    use crate::types::PlatformError;

    #[test]
    fn test_report_returns_distinct_ids() {
        let reporter = ErrorReporter::new();
        let error = PlatformError::InternalError("resolver panicked".into());
        let ctx = ErrorContext::new();

        let first = reporter.report(&error, codes::system::INTERNAL, &ctx);
        let second = reporter.report(&error, codes::system::INTERNAL, &ctx);
        assert_ne!(first, second);
    }
}

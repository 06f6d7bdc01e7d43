// Messages that are allowed to cross a trust boundary

use crate::types::PlatformError;

/// Generic failure label returned to untrusted tool callers
pub const SYSTEM_ERROR: &str = "System error";

/// Generic HTTP failure body
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Message safe to show a caller for this error.
///
/// Client errors carry their own message; anything else collapses to the
/// generic label so no field names, SQL or upstream detail leaks out.
pub fn external_message(error: &PlatformError) -> String {
    match error {
        PlatformError::ValidationError(message) | PlatformError::NotFound(message) => message.clone(),
        _ => INTERNAL_SERVER_ERROR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_detail_is_hidden() {
        let error = PlatformError::DatabaseError("relation \"carc_codes\" does not exist".into());
        let message = external_message(&error);
        assert_eq!(message, INTERNAL_SERVER_ERROR);
        assert!(!message.contains("carc_codes"));
    }

    #[test]
    fn test_client_message_passes_through() {
        let error = PlatformError::NotFound("Claim not found".into());
        assert_eq!(external_message(&error), "Claim not found");
    }
}

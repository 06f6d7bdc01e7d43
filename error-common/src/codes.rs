// Standardized error codes attached to logged failures

pub mod validation {
    pub const INVALID_INPUT: &str = "VALIDATION_1001";
    pub const INVALID_CLAIM_ID: &str = "VALIDATION_1004";
}

pub mod lookup {
    pub const CLAIM_NOT_FOUND: &str = "LOOKUP_2001";
    pub const CLAIM_SOURCE_FAILED: &str = "LOOKUP_2002";
}

pub mod database {
    pub const CONNECTION_FAILED: &str = "DB_4001";
    pub const QUERY_FAILED: &str = "DB_4002";
}

pub mod system {
    pub const INTERNAL: &str = "SYS_9001";
    pub const CONFIGURATION: &str = "SYS_9002";
}

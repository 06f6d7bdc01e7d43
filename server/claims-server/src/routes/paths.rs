pub mod system {
    pub const ROOT: &str = "/";
    pub const HEALTH: &str = "/health";
}

pub mod claims {
    pub const CLAIMS: &str = "/claims";
    pub const RAW: &str = "/claims/:claim_id/raw";
    pub const SUMMARY: &str = "/claims/:claim_id/summary";
}

pub mod mcp {
    pub const MCP: &str = "/mcp";
}

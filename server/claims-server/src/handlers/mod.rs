pub mod system;
pub mod claims;
pub mod mcp;

//! MCP Capabilities registry
use crate::protocol::{Capability, CapabilityType};
use std::collections::BTreeMap;

/// Registry of MCP capabilities
pub struct CapabilitiesRegistry {
    capabilities: BTreeMap<String, Capability>,
}

impl CapabilitiesRegistry {
    /// Create a registry holding the claims capabilities
    pub fn new() -> Self {
        let mut registry = Self {
            capabilities: BTreeMap::new(),
        };

        registry.register_default_capabilities();

        registry
    }

    fn register_default_capabilities(&mut self) {
        self.register(Capability {
            name: "claim_summary".to_string(),
            description: "Explain an adjudicated claim: amounts billed and paid, patient responsibility, \
                          write-offs and adjustment reasons"
                .to_string(),
            capability_type: CapabilityType::Tool,
        });
    }

    /// Register a new capability
    pub fn register(&mut self, capability: Capability) {
        self.capabilities.insert(capability.name.clone(), capability);
    }

    /// List all capabilities
    pub fn list(&self) -> Vec<&Capability> {
        self.capabilities.values().collect()
    }

    /// Get a specific capability
    pub fn get(&self, name: &str) -> Option<&Capability> {
        self.capabilities.get(name)
    }
}

impl Default for CapabilitiesRegistry {
    fn default() -> Self {
        Self::new()
    }
}

//! Registry of the embedded agent descriptors.

use std::sync::OnceLock;

use super::definition::{AgentDescriptor, AgentId};
use crate::error::{AutofillError, Result};

/// Registry of all supported agent descriptors, in declaration order.
pub struct AgentRegistry {
    descriptors: Vec<AgentDescriptor>,
}

impl AgentRegistry {
    /// Load all embedded agent descriptors.
    ///
    /// Descriptor TOML files are embedded at compile time. To add a new
    /// agent: add ONE line here, create the agent directory, and add the
    /// variant to `AgentId`.
    pub fn load() -> Result<Self> {
        const DESCRIPTOR_FILES: &[(AgentId, &str)] = &[
            (
                AgentId::OnePassword,
                include_str!("../../agents/1password/agent.toml"),
            ),
            (
                AgentId::LastPass,
                include_str!("../../agents/lastpass/agent.toml"),
            ),
            (
                AgentId::Bitwarden,
                include_str!("../../agents/bitwarden/agent.toml"),
            ),
            (
                AgentId::Dashlane,
                include_str!("../../agents/dashlane/agent.toml"),
            ),
            (
                AgentId::BrowserAutocomplete,
                include_str!("../../agents/browser/agent.toml"),
            ),
        ];

        let mut descriptors = Vec::with_capacity(DESCRIPTOR_FILES.len());
        for (id, content) in DESCRIPTOR_FILES {
            let descriptor: AgentDescriptor = toml::from_str(content).map_err(|e| {
                AutofillError::InvalidDescriptor(format!(
                    "Failed to parse descriptor for '{}': {}",
                    id, e
                ))
            })?;
            validate_descriptor(*id, &descriptor)?;
            descriptors.push(descriptor);
        }

        // Completeness invariant: every enumerated agent has a descriptor.
        for id in AgentId::ALL {
            if !descriptors.iter().any(|d| d.id() == id) {
                return Err(AutofillError::InvalidDescriptor(format!(
                    "No descriptor registered for agent '{}'",
                    id
                )));
            }
        }

        Ok(Self { descriptors })
    }

    /// Shared process-wide registry, built once on first use.
    ///
    /// The descriptors are static crate data validated by this module's
    /// tests, so the load cannot fail at runtime; the `expect` is the
    /// startup assertion for that invariant.
    pub fn shared() -> &'static AgentRegistry {
        static REGISTRY: OnceLock<AgentRegistry> = OnceLock::new();
        REGISTRY
            .get_or_init(|| AgentRegistry::load().expect("embedded agent descriptors must be valid"))
    }

    /// Get the descriptor for an agent.
    ///
    /// Fails fast with `UnknownAgent` when no descriptor is registered,
    /// unlike bulk resolution which skips missing agents.
    pub fn lookup(&self, id: AgentId) -> Result<&AgentDescriptor> {
        self.descriptors
            .iter()
            .find(|d| d.id() == id)
            .ok_or_else(|| AutofillError::UnknownAgent(id.to_string()))
    }

    /// Get the descriptor for an arbitrary id string.
    pub fn lookup_str(&self, id: &str) -> Result<&AgentDescriptor> {
        self.lookup(id.parse()?)
    }

    /// All descriptors, declaration order.
    pub fn descriptors(&self) -> &[AgentDescriptor] {
        &self.descriptors
    }

    /// All agent ids, declaration order.
    pub fn agent_ids(&self) -> Vec<AgentId> {
        self.descriptors.iter().map(|d| d.id()).collect()
    }
}

/// Validate that a descriptor is complete and registered under its own id
fn validate_descriptor(expected: AgentId, descriptor: &AgentDescriptor) -> Result<()> {
    if descriptor.id() != expected {
        return Err(AutofillError::InvalidDescriptor(format!(
            "Descriptor registered for '{}' declares id '{}'",
            expected,
            descriptor.id()
        )));
    }
    if descriptor.agent.name.is_empty() {
        return Err(AutofillError::InvalidDescriptor(format!(
            "Agent '{}' name cannot be empty",
            expected
        )));
    }
    Ok(())
}

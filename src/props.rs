//! Convenience wrappers over the resolution engine.
//!
//! Everything here delegates to [`crate::resolve`] against the shared
//! registry; there is no independent decision logic.

use crate::agents::{AgentId, AgentRegistry, AttributeMap, Intent};
use crate::error::Result;
use crate::resolve::{resolve, ResolutionRequest};

/// Attributes that ask every known agent to leave a field alone.
///
/// The most common call shape: spread the result onto an input element.
pub fn prevent_all() -> AttributeMap {
    let request = ResolutionRequest::new(Intent::Prevent);
    // A request without an agents list cannot fail validation
    resolve(AgentRegistry::shared(), &request).unwrap_or_default()
}

/// Overlay prevention attributes onto a copy of the caller's props.
///
/// Prevention wins on key collisions, so a caller cannot accidentally
/// re-enable autofill by pre-setting `autoComplete`.
pub fn merge_with_prevention(existing: &AttributeMap) -> AttributeMap {
    let mut merged = existing.clone();
    merged.extend(prevent_all());
    merged
}

/// Overlay the attributes for an arbitrary request onto a copy of the
/// caller's props. Resolved attributes win on key collisions.
pub fn merge_with_control(
    existing: &AttributeMap,
    request: &ResolutionRequest,
) -> Result<AttributeMap> {
    let mut merged = existing.clone();
    merged.extend(resolve(AgentRegistry::shared(), request)?);
    Ok(merged)
}

/// Whether an agent supports an intent.
///
/// Total over arbitrary strings: unknown agents and invalid intents answer
/// `false`, so callers can probe speculatively without error handling.
pub fn supports_behavior(agent: &str, intent: &str) -> bool {
    let (Ok(id), Ok(intent)) = (agent.parse::<AgentId>(), intent.parse::<Intent>()) else {
        return false;
    };
    match AgentRegistry::shared().lookup(id) {
        Ok(descriptor) => descriptor.supports(intent),
        Err(_) => false,
    }
}

/// All supported agent ids, declaration order.
pub fn supported_agents() -> Vec<AgentId> {
    AgentRegistry::shared().agent_ids()
}

/// The intents an agent supports; empty for an unknown id, never errors.
pub fn supported_intents(agent: &str) -> Vec<Intent> {
    let Ok(descriptor) = AgentRegistry::shared().lookup_str(agent) else {
        return Vec::new();
    };
    Intent::ALL
        .into_iter()
        .filter(|intent| descriptor.supports(*intent))
        .collect()
}

//! Request validation and the attribute resolution engine.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::agents::{AgentId, AgentRegistry, AttributeMap, Intent};
use crate::error::{AutofillError, Result};

/// A resolution request: which intent to communicate, and to which agents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionRequest {
    /// The intent to communicate
    pub intent: Intent,

    /// Specific agents to target. `None` targets all known agents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agents: Option<Vec<AgentId>>,
}

impl ResolutionRequest {
    /// A request targeting all known agents.
    pub fn new(intent: Intent) -> Self {
        Self {
            intent,
            agents: None,
        }
    }

    /// A request targeting an explicit list of agents.
    pub fn with_agents(intent: Intent, agents: Vec<AgentId>) -> Self {
        Self {
            intent,
            agents: Some(agents),
        }
    }

    /// Build a request from untyped JSON configuration.
    ///
    /// Validation order is fixed so error messages stay deterministic:
    /// missing request, then the intent, then the agents list. Unknown
    /// agent ids are reported all at once, not just the first.
    pub fn from_value(value: &Value) -> Result<Self> {
        if value.is_null() {
            return Err(AutofillError::MissingConfiguration);
        }

        let intent_value = value.get("intent").unwrap_or(&Value::Null);
        let intent = match intent_value.as_str() {
            Some(raw) => raw.parse::<Intent>()?,
            None => return Err(AutofillError::InvalidIntent(render(intent_value))),
        };

        let agents = match value.get("agents") {
            None | Some(Value::Null) => None,
            Some(Value::Array(entries)) => {
                if entries.is_empty() {
                    return Err(AutofillError::EmptyAgentsList);
                }
                let mut ids = Vec::with_capacity(entries.len());
                let mut invalid = Vec::new();
                for entry in entries {
                    match entry.as_str() {
                        Some(raw) => match raw.parse::<AgentId>() {
                            Ok(id) => ids.push(id),
                            Err(_) => invalid.push(raw.to_string()),
                        },
                        None => invalid.push(render(entry)),
                    }
                }
                if !invalid.is_empty() {
                    return Err(AutofillError::InvalidAgents(invalid));
                }
                Some(ids)
            }
            Some(_) => return Err(AutofillError::AgentsNotAList),
        };

        Ok(Self { intent, agents })
    }
}

/// Render a JSON value for an error message, without quotes around strings
fn render(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

/// Resolve a request into the merged attribute map.
///
/// Agents contribute in request order (explicit list) or registry
/// declaration order (all agents); last write wins on key collisions. A
/// failing agent lookup is logged and skipped so one dead integration
/// never blocks the attributes of the remaining agents. An empty map is a
/// legal result.
pub fn resolve(registry: &AgentRegistry, request: &ResolutionRequest) -> Result<AttributeMap> {
    if let Some(agents) = &request.agents {
        if agents.is_empty() {
            return Err(AutofillError::EmptyAgentsList);
        }
    }

    let targets = match &request.agents {
        Some(agents) => agents.clone(),
        None => registry.agent_ids(),
    };

    let mut attributes = AttributeMap::new();
    for id in targets {
        match registry.lookup(id) {
            Ok(descriptor) => {
                attributes.extend(descriptor.attributes_for(request.intent));
            }
            Err(error) => {
                warn!(agent = %id, %error, "Skipping agent during resolution");
            }
        }
    }

    Ok(attributes)
}

/// Validate untyped JSON configuration and resolve it.
pub fn resolve_value(registry: &AgentRegistry, value: &Value) -> Result<AttributeMap> {
    let request = ResolutionRequest::from_value(value)?;
    resolve(registry, &request)
}

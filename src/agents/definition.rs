//! Data structures for parsing agent descriptor TOML files.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AutofillError;

/// The caller's desired relationship between a form field and autofill agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// Keep agents away from the field
    Prevent,
    /// Explicitly invite agents to act on the field
    Allow,
}

impl Intent {
    /// All intents, declaration order
    pub const ALL: [Intent; 2] = [Intent::Prevent, Intent::Allow];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Prevent => "prevent",
            Intent::Allow => "allow",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = AutofillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prevent" => Ok(Intent::Prevent),
            "allow" => Ok(Intent::Allow),
            other => Err(AutofillError::InvalidIntent(other.to_string())),
        }
    }
}

/// Identifier of a supported autofill agent.
///
/// The wire strings are the identifiers the agents are known by in host
/// configuration; they double as registry keys. Declaration order here is
/// the registry iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentId {
    #[serde(rename = "1password")]
    OnePassword,
    #[serde(rename = "lastpass")]
    LastPass,
    #[serde(rename = "bitwarden")]
    Bitwarden,
    #[serde(rename = "dashlane")]
    Dashlane,
    #[serde(rename = "browser")]
    BrowserAutocomplete,
}

impl AgentId {
    /// All supported agents, declaration order
    pub const ALL: [AgentId; 5] = [
        AgentId::OnePassword,
        AgentId::LastPass,
        AgentId::Bitwarden,
        AgentId::Dashlane,
        AgentId::BrowserAutocomplete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentId::OnePassword => "1password",
            AgentId::LastPass => "lastpass",
            AgentId::Bitwarden => "bitwarden",
            AgentId::Dashlane => "dashlane",
            AgentId::BrowserAutocomplete => "browser",
        }
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentId {
    type Err = AutofillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1password" => Ok(AgentId::OnePassword),
            "lastpass" => Ok(AgentId::LastPass),
            "bitwarden" => Ok(AgentId::Bitwarden),
            "dashlane" => Ok(AgentId::Dashlane),
            "browser" => Ok(AgentId::BrowserAutocomplete),
            other => Err(AutofillError::UnknownAgent(other.to_string())),
        }
    }
}

/// A single attribute value. Agents pattern-match on strings, but callers
/// may carry booleans or numbers in pre-existing props.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Str(String),
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Str(s) => f.write_str(s),
            AttrValue::Bool(b) => write!(f, "{}", b),
            AttrValue::Int(n) => write!(f, "{}", n),
            AttrValue::Float(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

/// Flat attribute name/value mapping attached verbatim to a form element.
pub type AttributeMap = HashMap<String, AttrValue>;

/// An agent descriptor loaded from an embedded TOML file.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentDescriptor {
    /// Agent metadata (id, name, description)
    pub agent: AgentMeta,

    /// Attribute tables per intent
    pub attributes: AttributeSets,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AgentMeta {
    pub id: AgentId,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttributeSets {
    /// Markers that keep the agent away from a field. Required in every
    /// descriptor file; an empty table is legal.
    pub prevent: AttributeMap,

    /// Markers that explicitly invite the agent. Most agents have no such
    /// marker, so this table defaults to empty.
    #[serde(default)]
    pub allow: AttributeMap,
}

impl AgentDescriptor {
    pub fn id(&self) -> AgentId {
        self.agent.id
    }

    /// Attribute set for the given intent; empty when the intent is
    /// unsupported.
    pub fn attributes_for(&self, intent: Intent) -> AttributeMap {
        if !self.supports(intent) {
            return AttributeMap::new();
        }
        match intent {
            Intent::Prevent => self.attributes.prevent.clone(),
            Intent::Allow => self.attributes.allow.clone(),
        }
    }

    /// Prevent is universally supported. Allow is supported only when the
    /// descriptor declares a non-empty allow table.
    pub fn supports(&self, intent: Intent) -> bool {
        match intent {
            Intent::Prevent => true,
            Intent::Allow => !self.attributes.allow.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(toml_content: &str) -> AgentDescriptor {
        toml::from_str(toml_content).expect("descriptor should parse")
    }

    #[test]
    fn test_parse_minimal_descriptor() {
        let d = descriptor(
            r#"
            [agent]
            id = "lastpass"
            name = "LastPass"
            description = "test"

            [attributes.prevent]
            "data-lpignore" = "true"
            "#,
        );
        assert_eq!(d.id(), AgentId::LastPass);
        assert_eq!(
            d.attributes.prevent.get("data-lpignore"),
            Some(&AttrValue::from("true"))
        );
        assert!(d.attributes.allow.is_empty());
    }

    #[test]
    fn test_missing_prevent_table_is_rejected() {
        let result: Result<AgentDescriptor, _> = toml::from_str(
            r#"
            [agent]
            id = "lastpass"
            name = "LastPass"
            description = "test"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_supports_prevent_always() {
        let d = descriptor(
            r#"
            [agent]
            id = "bitwarden"
            name = "Bitwarden"
            description = "test"

            [attributes.prevent]
            "#,
        );
        assert!(d.supports(Intent::Prevent));
        assert!(!d.supports(Intent::Allow));
    }

    #[test]
    fn test_supports_allow_only_with_nonempty_table() {
        let d = descriptor(
            r#"
            [agent]
            id = "browser"
            name = "Browser Autocomplete"
            description = "test"

            [attributes.prevent]
            autoComplete = "off"

            [attributes.allow]
            autoComplete = "on"
            "#,
        );
        assert!(d.supports(Intent::Allow));
        assert_eq!(
            d.attributes_for(Intent::Allow).get("autoComplete"),
            Some(&AttrValue::from("on"))
        );
    }

    #[test]
    fn test_unsupported_intent_yields_empty_map() {
        let d = descriptor(
            r#"
            [agent]
            id = "1password"
            name = "1Password"
            description = "test"

            [attributes.prevent]
            "data-1p-ignore" = ""
            "#,
        );
        assert!(d.attributes_for(Intent::Allow).is_empty());
    }

    #[test]
    fn test_intent_round_trip() {
        for intent in Intent::ALL {
            assert_eq!(intent.as_str().parse::<Intent>().unwrap(), intent);
        }
        assert!(matches!(
            "bogus".parse::<Intent>(),
            Err(AutofillError::InvalidIntent(v)) if v == "bogus"
        ));
    }

    #[test]
    fn test_agent_id_round_trip() {
        for id in AgentId::ALL {
            assert_eq!(id.as_str().parse::<AgentId>().unwrap(), id);
        }
        assert!(matches!(
            "nonexistent".parse::<AgentId>(),
            Err(AutofillError::UnknownAgent(v)) if v == "nonexistent"
        ));
    }
}

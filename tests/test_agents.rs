use autofill_guard::agents::registry::AgentRegistry;
use autofill_guard::{AgentId, AttrValue, Intent};

#[test]
fn test_agent_registry_loads() {
    let _registry = AgentRegistry::load().expect("Failed to load agent registry");
    // If we got here, all embedded descriptor TOML files parsed successfully
}

#[test]
fn test_all_five_agents_registered() {
    let registry = AgentRegistry::load().expect("Failed to load registry");
    let ids = registry.agent_ids();

    assert_eq!(ids.len(), 5);
    assert_eq!(
        ids,
        vec![
            AgentId::OnePassword,
            AgentId::LastPass,
            AgentId::Bitwarden,
            AgentId::Dashlane,
            AgentId::BrowserAutocomplete,
        ]
    );
}

#[test]
fn test_one_password_descriptor() {
    let registry = AgentRegistry::load().expect("Failed to load registry");
    let descriptor = registry
        .lookup(AgentId::OnePassword)
        .expect("1Password descriptor should be registered");

    assert_eq!(descriptor.agent.name, "1Password");
    assert!(!descriptor.agent.description.is_empty());

    let attrs = descriptor.attributes_for(Intent::Prevent);
    assert_eq!(attrs.len(), 1);
    assert_eq!(attrs.get("data-1p-ignore"), Some(&AttrValue::from("")));

    assert!(descriptor.supports(Intent::Prevent));
    assert!(!descriptor.supports(Intent::Allow));
}

#[test]
fn test_dashlane_descriptor() {
    let registry = AgentRegistry::load().expect("Failed to load registry");
    let descriptor = registry
        .lookup(AgentId::Dashlane)
        .expect("Dashlane descriptor should be registered");

    let attrs = descriptor.attributes_for(Intent::Prevent);
    assert_eq!(attrs.get("data-form-type"), Some(&AttrValue::from("other")));
}

#[test]
fn test_browser_descriptor_supports_both_intents() {
    let registry = AgentRegistry::load().expect("Failed to load registry");
    let descriptor = registry
        .lookup(AgentId::BrowserAutocomplete)
        .expect("Browser descriptor should be registered");

    assert!(descriptor.supports(Intent::Prevent));
    assert!(descriptor.supports(Intent::Allow));
    assert_eq!(
        descriptor
            .attributes_for(Intent::Prevent)
            .get("autoComplete"),
        Some(&AttrValue::from("off"))
    );
    assert_eq!(
        descriptor.attributes_for(Intent::Allow).get("autoComplete"),
        Some(&AttrValue::from("on"))
    );
}

#[test]
fn test_direct_lookup_of_unknown_id_fails_fast() {
    let registry = AgentRegistry::load().expect("Failed to load registry");
    let result = registry.lookup_str("nonexistent");
    assert!(result.is_err());
    assert_eq!(result.unwrap_err().to_string(), "Unknown agent: nonexistent");
}

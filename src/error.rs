use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutofillError {
    #[error("Autofill configuration is required")]
    MissingConfiguration,

    #[error("Invalid autofill intent: {0}. Must be one of: prevent, allow")]
    InvalidIntent(String),

    #[error("Agents must be an array")]
    AgentsNotAList,

    #[error("Agents array cannot be empty. Omit the agents field to target all agents.")]
    EmptyAgentsList,

    #[error(
        "Invalid agents: {}. Must be one of: 1password, lastpass, bitwarden, dashlane, browser",
        .0.join(", ")
    )]
    InvalidAgents(Vec<String>),

    #[error("Unknown agent: {0}")]
    UnknownAgent(String),

    #[error("Invalid agent descriptor: {0}")]
    InvalidDescriptor(String),
}

pub type Result<T> = std::result::Result<T, AutofillError>;

#![forbid(unsafe_code)]

//! Generate the form-element attributes that control password manager and
//! browser autofill.
//!
//! Third-party form-fill agents (1Password, LastPass, Bitwarden, Dashlane)
//! and the browser's native autocomplete each recognize their own marker
//! attributes on form elements. This crate resolves a declarative request
//! ("prevent" or "allow" autofill, optionally scoped to specific agents)
//! into the exact flat attribute map those agents pattern-match on. The
//! attribute names and values are a wire-level contract with the agents'
//! own heuristics and are reproduced verbatim.
//!
//! ```
//! use autofill_guard::prevent_all;
//!
//! let attrs = prevent_all();
//! assert_eq!(attrs["data-lpignore"].to_string(), "true");
//! ```

pub mod agents;
pub mod error;
pub mod props;
pub mod resolve;

pub use agents::{AgentDescriptor, AgentId, AgentRegistry, AttrValue, AttributeMap, Intent};
pub use error::{AutofillError, Result};
pub use props::{
    merge_with_control, merge_with_prevention, prevent_all, supported_agents, supported_intents,
    supports_behavior,
};
pub use resolve::{resolve, resolve_value, ResolutionRequest};

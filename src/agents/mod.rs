//! Autofill agent descriptors and their registry.
//!
//! This module provides a declarative, TOML-based system for describing the
//! attribute markers each autofill agent (password managers, the browser's
//! native autocomplete) recognizes on form elements.
//!
//! # Architecture
//!
//! Each agent descriptor defines:
//! - **Metadata**: ID, name, description
//! - **Attributes**: one marker table per intent (`prevent` always present,
//!   `allow` optional)
//!
//! Descriptors are plain data embedded at compile time and served through
//! [`AgentRegistry`] in declaration order.
//!
//! # Example
//!
//! ```toml
//! [agent]
//! id = "lastpass"
//! name = "LastPass"
//! description = "LastPass browser extension."
//!
//! [attributes.prevent]
//! "data-lpignore" = "true"
//! ```

pub mod definition;
pub mod registry;

pub use definition::{AgentDescriptor, AgentId, AgentMeta, AttrValue, AttributeMap, Intent};
pub use registry::AgentRegistry;

//! Domains module containing business logic organized by bounded contexts.
//!
//! - **reports**: campaign summary report client and sent-count extraction
//! - **tools**: MCP tools built on top of the reports domain

pub mod reports;
pub mod tools;

//! Task storage for Taskboard.
//!
//! This module is the single source of truth for task records: creating
//! tasks with fresh identifiers, filtered retrieval, field-level partial
//! update, deletion, and durable persistence to a whole-file JSON snapshot.
//! Every mutating operation runs a load-mutate-save cycle against the
//! snapshot store so the file always holds a complete, self-consistent
//! snapshot. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

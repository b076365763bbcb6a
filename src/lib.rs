//! Taskboard: a file-backed task tracker.
//!
//! The crate owns a collection of task records (title, description,
//! completion status) persisted as a whole-file JSON snapshot, and exposes
//! page handlers that map browser-style requests onto store operations.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (JSON file, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task records, the snapshot store contract, and the task store
//! - [`web`]: Request handlers and HTML views over the task store

pub mod task;
pub mod web;

//! Task management for taskboard.
//!
//! Tasks are validated records with a closed set of variants (plain task,
//! bug, subtask, story, epic). A factory allocates ids and creation
//! timestamps, a service owns the ordered collection, and a controller
//! forwards external calls to the service. The module follows hexagonal
//! architecture:
//!
//! - Domain types and validation rules in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - The pass-through [`controller`]

pub mod adapters;
pub mod controller;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

//! Taskboard: a validated task domain model.
//!
//! This crate models units of work (plain tasks, bugs, subtasks, stories,
//! and epics), builds them from discriminated creation payloads, and manages
//! an ordered in-memory collection of them.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`task`]: Task entities, validation, factory, service, and controller

pub mod task;

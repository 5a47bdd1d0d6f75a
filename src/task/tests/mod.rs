//! Unit tests for the task module.
//!
//! Tests are organised by layer: validation rules, the entity, the factory,
//! the in-memory store, the service, and the controller.

mod support;

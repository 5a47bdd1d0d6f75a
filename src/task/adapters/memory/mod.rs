//! In-memory task store, optionally seeded from a JSON dataset.

mod task;

pub use task::InMemoryTaskStore;

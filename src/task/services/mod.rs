//! Application services for task management.

mod filters;
mod task;

pub use filters::TaskFilters;
pub use task::TaskService;

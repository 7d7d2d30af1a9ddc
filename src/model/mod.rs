pub mod filter;
pub mod task;
pub mod tasks;

pub use filter::Filter;
pub use task::{Task, TaskId};
pub use tasks::TaskList;

pub mod health;
pub mod invoke;

pub use health::{health_handler, ready_handler};
pub use invoke::{invoke_handler, list_tools_handler};

//! CLI command handlers, one file per command.

mod config;
mod list;

pub use config::run_config;
pub use list::{run_list, ListArgs};

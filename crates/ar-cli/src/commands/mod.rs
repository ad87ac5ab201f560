//! CLI subcommands.

mod serve;

pub use serve::{run_server, ServeConfig};

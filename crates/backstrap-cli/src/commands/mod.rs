//! Command handlers. One module per subcommand, plus `create` for the
//! default action.

pub mod completions;
pub mod config;
pub mod create;
pub mod list;

//! CLI plumbing and path helpers shared by the collector.

pub mod arg_parser;
pub mod cli;
pub mod progress;
pub mod tools;

// Re-export commonly used functions
pub use arg_parser::Cli;
pub use cli::{apply_cli_to_opts, handle_run};
pub use tools::{
    descriptor_identity, expansion_root, glob_match, is_asset_file, is_descriptor_file,
    is_followed_dependency, is_os_hidden_file, resolve_dependency, should_include_in_walk,
};

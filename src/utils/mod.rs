pub mod config;
pub mod logger;
pub mod size;
pub mod usdsize_toml;

pub use config::*;
pub use logger::setup_logging;
pub use size::{bytes_to_gb, format_size};
pub use usdsize_toml::{
    UsdsizeToml, apply_file_to_opts, load_default_usdsize_toml, load_usdsize_toml,
};

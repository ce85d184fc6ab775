pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::{config_path_from_env, resolve_state_path};
pub use paths::{format_path_with_tilde, read_transcript, validate_file_size};

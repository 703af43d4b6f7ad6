pub mod error;
pub mod load;

// Re-export commonly used types/functions for convenience
pub use error::ConfigError;
pub use load::{default_config_path, load_config, NavConfig};

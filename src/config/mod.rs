//! Persisted application settings.
//!
//! Settings live in `config.toml` inside the application directory. A missing
//! file is not an error; every field has a default.

mod io;
mod types;

pub use io::{CONFIG_FILE_NAME, config_path, load_from_path, load_or_default, save, save_to_path};
pub use types::{ApiSettings, AppSettings, ConfigError, RetrainSettings};

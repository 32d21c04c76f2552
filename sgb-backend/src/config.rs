use std::env;
use std::path::PathBuf;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const HOST: &str = "SGB_HOST";
    pub const PORT: &str = "PORT";
    /// Directory holding `courses.json`, `students.json` and `teachers.json`.
    pub const DATA_DIR: &str = "SGB_DATA_DIR";
}

/// Default values
pub mod defaults {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 3200;
    pub const DATA_DIR: &str = "data";
}

/// Returns the absolute path to the sgb-backend directory.
/// Uses CARGO_MANIFEST_DIR at compile time, so it always resolves
/// to sgb-backend/ regardless of the working directory at runtime.
pub fn backend_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Get the bundled reference data directory
pub fn default_data_dir() -> PathBuf {
    backend_dir().join(defaults::DATA_DIR)
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let port = match env::var(env_vars::PORT) {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!(
                    "Invalid {} value '{}', using default {}",
                    env_vars::PORT,
                    raw,
                    defaults::PORT
                );
                defaults::PORT
            }),
            Err(_) => defaults::PORT,
        };

        Self {
            host: env::var(env_vars::HOST).unwrap_or_else(|_| defaults::HOST.to_string()),
            port,
            data_dir: env::var(env_vars::DATA_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_data_dir()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_data_dir_is_inside_backend() {
        let dir = default_data_dir();
        assert!(dir.starts_with(backend_dir()));
        assert!(dir.join("courses.json").exists());
    }
}

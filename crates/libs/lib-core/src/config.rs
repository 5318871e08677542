//! # Application Configuration
//!
//! Configuration is loaded from environment variables once at startup and then
//! handed to the rest of the application explicitly through application state.
//! Nothing below the server setup reads the environment.
//!
//! | Variable | Required | Default |
//! |---|---|---|
//! | `DATABASE_URL` | no | `sqlite:data/accounts.db` |
//! | `JWT_SECRET` | **yes** | - |
//! | `PWD_MEMORY_KIB` | no | `19456` |
//! | `PWD_ITERATIONS` | no | `2` |
//! | `PWD_PARALLELISM` | no | `1` |

use crate::error::{AppError, Result};
use lib_utils::{get_env, get_env_or, get_env_parse_or};

/// Minimum accepted length of the token signing secret, in bytes.
pub const MIN_SECRET_LEN: usize = 32;

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// SQLite database connection URL
    pub database_url: String,

    /// Symmetric secret for token signing and verification.
    ///
    /// **Must be at least 32 characters long.**
    pub jwt_secret: String,

    /// Argon2 memory cost in KiB.
    pub pwd_memory_kib: u32,

    /// Argon2 time cost (passes).
    pub pwd_iterations: u32,

    /// Argon2 parallelism.
    pub pwd_parallelism: u32,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let database_url = get_env_or("DATABASE_URL", "sqlite:data/accounts.db");

        let jwt_secret = get_env("JWT_SECRET").map_err(config_err)?;

        let pwd_memory_kib = get_env_parse_or("PWD_MEMORY_KIB", 19 * 1024).map_err(config_err)?;
        let pwd_iterations = get_env_parse_or("PWD_ITERATIONS", 2).map_err(config_err)?;
        let pwd_parallelism = get_env_parse_or("PWD_PARALLELISM", 1).map_err(config_err)?;

        Ok(Self {
            database_url,
            jwt_secret,
            pwd_memory_kib,
            pwd_iterations,
            pwd_parallelism,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.jwt_secret.len() < MIN_SECRET_LEN {
            return Err(AppError::Config(format!(
                "JWT_SECRET must be at least {} characters long",
                MIN_SECRET_LEN
            )));
        }

        if self.pwd_iterations < 1 {
            return Err(AppError::Config("PWD_ITERATIONS must be at least 1".to_string()));
        }

        if self.pwd_parallelism < 1 {
            return Err(AppError::Config("PWD_PARALLELISM must be at least 1".to_string()));
        }

        if self.pwd_memory_kib < 8 * self.pwd_parallelism {
            return Err(AppError::Config(
                "PWD_MEMORY_KIB must be at least 8 * PWD_PARALLELISM".to_string(),
            ));
        }

        Ok(())
    }
}

fn config_err(err: lib_utils::envs::Error) -> AppError {
    AppError::Config(err.to_string())
}

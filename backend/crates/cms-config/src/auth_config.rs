use crate::{ConfigError, ConfigErrorResult, DEFAULT_ADMIN_ROLE, MIN_JWT_SECRET_LENGTH};

use std::path::Path;

use serde::Deserialize;

/// Session token verification settings.
///
/// Exactly one of `jwt_secret` (HS256) or `jwt_public_key_path` (RS256) must be
/// set. The key path is resolved against the config directory when relative.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: Option<String>,
    pub jwt_public_key_path: Option<String>,
    /// Role name required by the administrative create routes
    pub admin_role: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            jwt_public_key_path: None,
            admin_role: String::from(DEFAULT_ADMIN_ROLE),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        match (&self.jwt_secret, &self.jwt_public_key_path) {
            (None, None) => {
                return Err(ConfigError::auth(
                    "either auth.jwt_secret or auth.jwt_public_key_path must be set",
                ));
            }
            (Some(_), Some(_)) => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret and auth.jwt_public_key_path are mutually exclusive",
                ));
            }
            (Some(secret), None) => {
                if secret.len() < MIN_JWT_SECRET_LENGTH {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_secret must be at least {} characters",
                        MIN_JWT_SECRET_LENGTH
                    )));
                }
            }
            (None, Some(_)) => {
                let path = self.public_key_path(config_dir).unwrap_or_default();
                if !path.exists() {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_public_key_path not found: {}",
                        path.display()
                    )));
                }
            }
        }

        if self.admin_role.trim().is_empty() {
            return Err(ConfigError::auth("auth.admin_role cannot be empty"));
        }

        Ok(())
    }

    /// Absolute location of the RS256 public key, if one is configured
    pub fn public_key_path(&self, config_dir: &Path) -> Option<std::path::PathBuf> {
        self.jwt_public_key_path.as_ref().map(|p| {
            let path = Path::new(p);
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                config_dir.join(path)
            }
        })
    }

    /// "HS256", "RS256" or "none"; safe to log
    pub fn algorithm_label(&self) -> &'static str {
        if self.jwt_secret.is_some() {
            "HS256"
        } else if self.jwt_public_key_path.is_some() {
            "RS256"
        } else {
            "none"
        }
    }
}

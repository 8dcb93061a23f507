
use crate::CONFIG_DIR_ENV;

use std::env;

use tempfile::TempDir;

pub(crate) const VALID_SECRET: &str = "0123456789abcdef0123456789abcdef";

/// RAII guard for environment variables - restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Temp config directory pointed to by CMS_CONFIG_DIR, with every CMS_*
/// override cleared so ambient environment cannot leak into a test.
pub(crate) struct TestEnv {
    pub(crate) dir: TempDir,
    _guards: Vec<EnvGuard>,
}

pub(crate) fn setup_config_dir() -> TestEnv {
    let dir = TempDir::new().unwrap();
    let mut guards = vec![EnvGuard::set(CONFIG_DIR_ENV, dir.path().to_str().unwrap())];
    for key in [
        "CMS_SERVER_HOST",
        "CMS_SERVER_PORT",
        "CMS_SERVER_ALLOWED_ORIGINS",
        "CMS_DATABASE_PATH",
        "CMS_AUTH_JWT_SECRET",
        "CMS_AUTH_JWT_PUBLIC_KEY_PATH",
        "CMS_AUTH_ADMIN_ROLE",
        "CMS_LOG_LEVEL",
        "CMS_LOG_COLORED",
        "CMS_LOG_FILE",
    ] {
        guards.push(EnvGuard::remove(key));
    }
    TestEnv {
        dir,
        _guards: guards,
    }
}

impl TestEnv {
    pub(crate) fn write_config(&self, contents: &str) {
        std::fs::write(self.dir.path().join(crate::CONFIG_FILENAME), contents).unwrap();
    }
}


use std::env;

use tempfile::TempDir;

/// Every variable `Config::load` reads. Cleared per test so the host
/// environment cannot leak into assertions.
const CONFIG_ENV_VARS: &[&str] = &[
    "PORT",
    "UM_SERVER_HOST",
    "UM_SERVER_PORT",
    "SUPABASE_URL",
    "SUPABASE_SERVICE_KEY",
    "SUPABASE_TABLE",
    "UM_SUPABASE_TIMEOUT_SECS",
    "UM_CORS_ORIGIN",
    "UM_CORS_ALLOW_CREDENTIALS",
    "UM_LOG_LEVEL",
    "UM_LOG_COLORED",
    "UM_LOG_FILE",
    "UM_SERVER_URL",
];

/// RAII guard for environment variables - automatically restores on drop
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

/// Isolated config environment: temp UM_CONFIG_DIR and no config env vars set
pub(crate) struct TestEnv {
    pub(crate) dir: TempDir,
    guards: Vec<EnvGuard>,
}

pub(crate) fn setup_config_dir() -> TestEnv {
    let dir = TempDir::new().unwrap();
    let mut guards: Vec<EnvGuard> = CONFIG_ENV_VARS
        .iter()
        .copied()
        .map(EnvGuard::remove)
        .collect();
    guards.push(EnvGuard::set("UM_CONFIG_DIR", dir.path().to_str().unwrap()));
    TestEnv { dir, guards }
}

/// Isolated environment with valid Supabase credentials
pub(crate) fn setup_with_credentials() -> TestEnv {
    let mut env = setup_config_dir();
    env.guards
        .push(EnvGuard::set("SUPABASE_URL", "https://project.supabase.co"));
    env.guards
        .push(EnvGuard::set("SUPABASE_SERVICE_KEY", "service-role-key"));
    env
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        // Restore in reverse so stacked guards on the same key unwind correctly
        while let Some(guard) = self.guards.pop() {
            drop(guard);
        }
    }
}

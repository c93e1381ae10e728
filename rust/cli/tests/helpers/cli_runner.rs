use std::time::{Duration, Instant};

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
}

impl CliResult {
    #[allow(dead_code)]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}

struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for (key, value) in pairs {
            let previous = std::env::var(key).ok();
            unsafe {
                std::env::set_var(key, value);
            }
            restores.push((key.to_string(), previous));
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            unsafe {
                match previous {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct CliRunner;

impl CliRunner {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        let mut argv = vec!["railbuild"];
        argv.extend_from_slice(args);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let start = Instant::now();
        let exit_code = railbuild_cli::run(argv, &mut out, &mut err);
        CliResult {
            exit_code,
            stdout: String::from_utf8_lossy(&out).into_owned(),
            stderr: String::from_utf8_lossy(&err).into_owned(),
            duration: start.elapsed(),
        }
    }

    /// Runs with extra environment variables, restoring the old values after.
    /// Callers must be `#[serial]`.
    #[allow(dead_code)]
    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        let _guard = EnvGuard::apply(env);
        self.run(args)
    }
}

/// Clears every variable the CLI reads. Callers must be `#[serial]`.
#[allow(dead_code)]
pub fn clear_railbuild_env() {
    for key in [
        "RAILBUILD_CONFIG",
        "RAILBUILD_LEGACY_GAMES",
        "RAILBUILD_LOG",
        "RAILBUILD_JOURNAL",
    ] {
        unsafe {
            std::env::remove_var(key);
        }
    }
}
